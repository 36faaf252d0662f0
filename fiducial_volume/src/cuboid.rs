// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned box volume.

use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;

use fiducial_surface::{BoundsError, RectangleBounds};
use nalgebra::{Isometry3, Point3};
use tracing::trace;

use crate::aabb::Aabb3D;
use crate::face::{BoundarySurface, rot_x, rot_y, rot_z, shift};
use crate::validate::{check_length, log_rejection};

const SHAPE: &str = "CuboidVolumeBounds";

/// Index into the [`CuboidVolumeBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CuboidValue {
    /// Half-length along x.
    HalfLengthX = 0,
    /// Half-length along y.
    HalfLengthY = 1,
    /// Half-length along z.
    HalfLengthZ = 2,
}

/// Boundary faces of a [`CuboidVolumeBounds`], in decomposition order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CuboidFace {
    /// Face at `-half_z`.
    NegativeZ = 0,
    /// Face at `+half_z`.
    PositiveZ = 1,
    /// Face at `-half_x`.
    NegativeX = 2,
    /// Face at `+half_x`.
    PositiveX = 3,
    /// Face at `-half_y`.
    NegativeY = 4,
    /// Face at `+half_y`.
    PositiveY = 5,
}

impl CuboidFace {
    /// All faces in decomposition order.
    pub const ALL: [Self; 6] = [
        Self::NegativeZ,
        Self::PositiveZ,
        Self::NegativeX,
        Self::PositiveX,
        Self::NegativeY,
        Self::PositiveY,
    ];
}

/// Box centered on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct CuboidVolumeBounds {
    values: [f64; 3],
}

impl CuboidVolumeBounds {
    /// Box with the given half-lengths.
    pub fn new(half_x: f64, half_y: f64, half_z: f64) -> Result<Self, BoundsError> {
        Self::from_values([half_x, half_y, half_z])
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 3]) -> Result<Self, BoundsError> {
        for (name, value) in ["half_x", "half_y", "half_z"].into_iter().zip(values) {
            check_length(SHAPE, name, value).inspect_err(log_rejection)?;
        }
        Ok(Self { values })
    }

    /// Parameters in canonical order `[half_x, half_y, half_z]`.
    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: CuboidValue) -> f64 {
        self.values[value as usize]
    }

    /// Whether `position` is inside, widened by `tolerance` on every side.
    pub fn inside(&self, position: &Point3<f64>, tolerance: f64) -> bool {
        (0..3).all(|i| position[i].abs() <= self.values[i] + tolerance)
    }

    /// The six boundary faces placed by `transform`, in [`CuboidFace`] order.
    pub fn decompose_to_surfaces(
        &self,
        transform: &Isometry3<f64>,
    ) -> Result<Vec<BoundarySurface>, BoundsError> {
        let faces = CuboidFace::ALL
            .iter()
            .map(|&face| self.face(face, transform))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(faces = faces.len(), "decomposed cuboid volume");
        Ok(faces)
    }

    /// A single boundary face placed by `transform`.
    pub fn face(
        &self,
        face: CuboidFace,
        transform: &Isometry3<f64>,
    ) -> Result<BoundarySurface, BoundsError> {
        let [x, y, z] = self.values;
        // Side faces cycle the axes so the local z axis is the outward normal.
        let to_x = shift(x, 0.0, 0.0) * rot_y(FRAC_PI_2) * rot_z(FRAC_PI_2);
        let to_y = shift(0.0, y, 0.0) * rot_y(-FRAC_PI_2) * rot_x(-FRAC_PI_2);
        let (bounds, placement) = match face {
            CuboidFace::NegativeZ => (
                RectangleBounds::new(x, y)?,
                rot_y(PI) * shift(0.0, 0.0, z),
            ),
            CuboidFace::PositiveZ => (RectangleBounds::new(x, y)?, shift(0.0, 0.0, z)),
            CuboidFace::NegativeX => (RectangleBounds::new(y, z)?, rot_z(PI) * to_x),
            CuboidFace::PositiveX => (RectangleBounds::new(y, z)?, to_x),
            CuboidFace::NegativeY => (RectangleBounds::new(z, x)?, rot_x(PI) * to_y),
            CuboidFace::PositiveY => (RectangleBounds::new(z, x)?, to_y),
        };
        Ok(BoundarySurface {
            bounds: bounds.into(),
            transform: transform * placement,
        })
    }

    /// The eight corners.
    pub fn corners(&self) -> Vec<Point3<f64>> {
        let [x, y, z] = self.values;
        [-z, z]
            .into_iter()
            .flat_map(|pz| {
                [-y, y].into_iter().flat_map(move |py| {
                    [-x, x].into_iter().map(move |px| Point3::new(px, py, pz))
                })
            })
            .collect()
    }

    /// Axis-aligned box around the volume placed by `transform`, grown by
    /// `envelope`.
    pub fn bounding_box(&self, transform: Option<&Isometry3<f64>>, envelope: f64) -> Aabb3D {
        Aabb3D::from_points(self.corners(), transform).enlarged(envelope)
    }
}

impl TryFrom<[f64; 3]> for CuboidVolumeBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<CuboidVolumeBounds> for [f64; 3] {
    fn from(bounds: CuboidVolumeBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for CuboidVolumeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.values;
        write!(
            f,
            "CuboidVolumeBounds: (half_x, half_y, half_z) = ({x:.7}, {y:.7}, {z:.7})"
        )
    }
}
