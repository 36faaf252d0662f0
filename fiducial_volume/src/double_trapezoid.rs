// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prism with a diamond cross section.

use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;

use fiducial_surface::{BoundaryCheck, BoundsError, DiamondBounds, RectangleBounds, SurfaceBounds};
use kurbo::Point;
use nalgebra::{Isometry3, Point3, Translation3, Vector3};
use tracing::trace;

use crate::aabb::Aabb3D;
use crate::face::{BoundarySurface, rot_x, rot_y, rot_z, shift};
use crate::validate::{check_length, log_rejection};

const SHAPE: &str = "DoubleTrapezoidVolumeBounds";

/// Largest accepted mismatch between a provided and a derived opening angle.
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Index into the [`DoubleTrapezoidVolumeBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DoubleTrapezoidValue {
    /// Half-width at the lower y edge.
    MinHalfLengthX = 0,
    /// Half-width at `y = 0`.
    MedHalfLengthX = 1,
    /// Half-width at the upper y edge.
    MaxHalfLengthX = 2,
    /// Half the distance from the lower edge to `y = 0`.
    HalfLengthY1 = 3,
    /// Half the distance from `y = 0` to the upper edge.
    HalfLengthY2 = 4,
    /// Half-length along z.
    HalfLengthZ = 5,
    /// Opening angle of the lower trapezoid.
    Alpha1 = 6,
    /// Opening angle of the upper trapezoid.
    Alpha2 = 7,
}

/// Boundary faces of a [`DoubleTrapezoidVolumeBounds`], in decomposition order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DoubleTrapezoidFace {
    /// Diamond cap at `-half_z`.
    NegativeZ = 0,
    /// Diamond cap at `+half_z`.
    PositiveZ = 1,
    /// Lower slanted face at negative x.
    LowerLeft = 2,
    /// Lower slanted face at positive x.
    LowerRight = 3,
    /// Upper slanted face at negative x.
    UpperLeft = 4,
    /// Upper slanted face at positive x.
    UpperRight = 5,
    /// Flat face at the lower y edge.
    NegativeY = 6,
    /// Flat face at the upper y edge.
    PositiveY = 7,
}

impl DoubleTrapezoidFace {
    /// All faces in decomposition order.
    pub const ALL: [Self; 8] = [
        Self::NegativeZ,
        Self::PositiveZ,
        Self::LowerLeft,
        Self::LowerRight,
        Self::UpperLeft,
        Self::UpperRight,
        Self::NegativeY,
        Self::PositiveY,
    ];
}

/// Volume between two diamond caps at `z = ±half_z`.
///
/// The cross section widens from `min_half_x` at `y = -2 half_y1` to
/// `med_half_x` at `y = 0` and narrows to `max_half_x` at `y = 2 half_y2`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 8]", into = "[f64; 8]")
)]
pub struct DoubleTrapezoidVolumeBounds {
    values: [f64; 8],
    cap: DiamondBounds,
}

impl DoubleTrapezoidVolumeBounds {
    /// Volume from its independent parameters; the opening angles are derived.
    pub fn new(
        min_half_x: f64,
        med_half_x: f64,
        max_half_x: f64,
        half_y1: f64,
        half_y2: f64,
        half_z: f64,
    ) -> Result<Self, BoundsError> {
        for (name, value) in [
            ("min_half_x", min_half_x),
            ("med_half_x", med_half_x),
            ("max_half_x", max_half_x),
            ("half_y1", half_y1),
            ("half_y2", half_y2),
            ("half_z", half_z),
        ] {
            check_length(SHAPE, name, value).inspect_err(log_rejection)?;
        }
        let cap = DiamondBounds::new(
            min_half_x,
            med_half_x,
            max_half_x,
            2.0 * half_y1,
            2.0 * half_y2,
        )?;
        let alpha1 = (med_half_x - min_half_x).atan2(2.0 * half_y1);
        let alpha2 = (med_half_x - max_half_x).atan2(2.0 * half_y2);
        Ok(Self {
            values: [
                min_half_x, med_half_x, max_half_x, half_y1, half_y2, half_z, alpha1, alpha2,
            ],
            cap,
        })
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    ///
    /// The opening angles must match the ones derived from the other values.
    pub fn from_values(values: [f64; 8]) -> Result<Self, BoundsError> {
        let [min_x, med_x, max_x, y1, y2, z, alpha1, alpha2] = values;
        let bounds = Self::new(min_x, med_x, max_x, y1, y2, z)?;
        for (parameter, provided, derived) in [
            ("alpha1", alpha1, bounds.alpha1()),
            ("alpha2", alpha2, bounds.alpha2()),
        ] {
            let consistent = (provided - derived).abs() <= ANGLE_TOLERANCE;
            if !consistent {
                let err = BoundsError::InconsistentDerived {
                    shape: SHAPE,
                    parameter,
                    provided,
                    derived,
                };
                log_rejection(&err);
                return Err(err);
            }
        }
        Ok(bounds)
    }

    /// Parameters in canonical order
    /// `[min_half_x, med_half_x, max_half_x, half_y1, half_y2, half_z, alpha1, alpha2]`.
    pub fn values(&self) -> [f64; 8] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: DoubleTrapezoidValue) -> f64 {
        self.values[value as usize]
    }

    /// Half-length along z.
    pub fn half_length_z(&self) -> f64 {
        self.values[5]
    }

    /// Opening angle of the lower trapezoid, `atan2(med - min, 2 half_y1)`.
    pub fn alpha1(&self) -> f64 {
        self.values[6]
    }

    /// Opening angle of the upper trapezoid, `atan2(med - max, 2 half_y2)`.
    pub fn alpha2(&self) -> f64 {
        self.values[7]
    }

    /// Cross section shared by both caps.
    pub fn cap(&self) -> &DiamondBounds {
        &self.cap
    }

    /// Whether `position` is inside, widened by `tolerance` on every side.
    pub fn inside(&self, position: &Point3<f64>, tolerance: f64) -> bool {
        let [_, _, _, y1, y2, z, _, _] = self.values;
        if position.z.abs() > z + tolerance {
            return false;
        }
        if position.y < -2.0 * y1 - tolerance || position.y > 2.0 * y2 + tolerance {
            return false;
        }
        self.cap.inside(
            Point::new(position.x, position.y),
            &BoundaryCheck::absolute(tolerance, tolerance),
        )
    }

    /// The eight boundary faces placed by `transform`, in
    /// [`DoubleTrapezoidFace`] order.
    ///
    /// Face bounds are rebuilt from already validated parameters, so an
    /// error here would mean the volume itself is inconsistent.
    pub fn decompose_to_surfaces(
        &self,
        transform: &Isometry3<f64>,
    ) -> Result<Vec<BoundarySurface>, BoundsError> {
        let faces = DoubleTrapezoidFace::ALL
            .iter()
            .map(|&face| self.face(face, transform))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(faces = faces.len(), "decomposed double trapezoid volume");
        Ok(faces)
    }

    /// A single boundary face placed by `transform`.
    pub fn face(
        &self,
        face: DoubleTrapezoidFace,
        transform: &Isometry3<f64>,
    ) -> Result<BoundarySurface, BoundsError> {
        let [min_x, med_x, max_x, y1, y2, z, alpha1, alpha2] = self.values;
        let cap = SurfaceBounds::Diamond(self.cap);
        Ok(match face {
            DoubleTrapezoidFace::NegativeZ => BoundarySurface {
                bounds: cap,
                transform: transform * rot_y(PI) * shift(0.0, 0.0, z),
            },
            DoubleTrapezoidFace::PositiveZ => BoundarySurface {
                bounds: cap,
                transform: transform * shift(0.0, 0.0, z),
            },
            DoubleTrapezoidFace::LowerLeft => slanted(
                transform,
                Vector3::new(-min_x, -2.0 * y1, 0.0),
                rot_z(alpha1) * rot_y(-FRAC_PI_2) * rot_z(FRAC_PI_2),
                y1 / alpha1.cos(),
                z,
            )?,
            DoubleTrapezoidFace::LowerRight => slanted(
                transform,
                Vector3::new(min_x, -2.0 * y1, 0.0),
                rot_z(-alpha1) * rot_y(FRAC_PI_2) * rot_z(FRAC_PI_2),
                y1 / alpha1.cos(),
                z,
            )?,
            DoubleTrapezoidFace::UpperLeft => slanted(
                transform,
                Vector3::new(-max_x, 2.0 * y2, 0.0),
                rot_z(-alpha2) * rot_y(-FRAC_PI_2) * rot_z(-FRAC_PI_2),
                y2 / alpha2.cos(),
                z,
            )?,
            DoubleTrapezoidFace::UpperRight => slanted(
                transform,
                Vector3::new(max_x, 2.0 * y2, 0.0),
                rot_z(alpha2) * rot_y(FRAC_PI_2) * rot_z(-FRAC_PI_2),
                y2 / alpha2.cos(),
                z,
            )?,
            DoubleTrapezoidFace::NegativeY => BoundarySurface {
                bounds: RectangleBounds::new(z, min_x)?.into(),
                transform: transform
                    * rot_x(PI)
                    * shift(0.0, 2.0 * y1, 0.0)
                    * rot_y(-FRAC_PI_2)
                    * rot_x(-FRAC_PI_2),
            },
            DoubleTrapezoidFace::PositiveY => BoundarySurface {
                bounds: RectangleBounds::new(z, max_x)?.into(),
                transform: transform
                    * shift(0.0, 2.0 * y2, 0.0)
                    * rot_y(-FRAC_PI_2)
                    * rot_x(-FRAC_PI_2),
            },
        })
    }

    /// Corners of the volume: the cap outline at `-half_z`, then at `+half_z`.
    pub fn corners(&self) -> Vec<Point3<f64>> {
        let z = self.half_length_z();
        let outline = self.cap.vertices(0);
        [-z, z]
            .into_iter()
            .flat_map(|z| outline.iter().map(move |p| Point3::new(p.x, p.y, z)))
            .collect()
    }

    /// Axis-aligned box around the volume placed by `transform`, grown by
    /// `envelope`.
    pub fn bounding_box(&self, transform: Option<&Isometry3<f64>>, envelope: f64) -> Aabb3D {
        Aabb3D::from_points(self.corners(), transform).enlarged(envelope)
    }
}

/// A slanted side face starting at the cap corner `corner`, running along
/// the first column of `rotation` for twice `half_length`.
fn slanted(
    transform: &Isometry3<f64>,
    corner: Vector3<f64>,
    rotation: Isometry3<f64>,
    half_length: f64,
    half_z: f64,
) -> Result<BoundarySurface, BoundsError> {
    let along = rotation * Vector3::x();
    let center = corner + along * half_length;
    let placement = Isometry3::from_parts(Translation3::from(center), rotation.rotation);
    Ok(BoundarySurface {
        bounds: RectangleBounds::new(half_length, half_z)?.into(),
        transform: transform * placement,
    })
}

impl TryFrom<[f64; 8]> for DoubleTrapezoidVolumeBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 8]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<DoubleTrapezoidVolumeBounds> for [f64; 8] {
    fn from(bounds: DoubleTrapezoidVolumeBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for DoubleTrapezoidVolumeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [min_x, med_x, max_x, y1, y2, z, _, _] = self.values;
        write!(
            f,
            "DoubleTrapezoidVolumeBounds: (min_half_x, med_half_x, max_half_x, half_y1, half_y2, half_z) = \
             ({min_x:.7}, {med_x:.7}, {max_x:.7}, {y1:.7}, {y2:.7}, {z:.7})"
        )
    }
}
