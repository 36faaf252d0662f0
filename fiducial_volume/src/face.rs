// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face descriptors produced by volume decomposition.

use fiducial_surface::SurfaceBounds;
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

/// One boundary face of a volume: planar bounds and the placement of their
/// local frame.
///
/// The local z axis of `transform` is the outward face normal.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundarySurface {
    /// Extent of the face in its local xy plane.
    pub bounds: SurfaceBounds,
    /// Local-to-global placement.
    pub transform: Isometry3<f64>,
}

impl BoundarySurface {
    /// Global position of the local origin.
    pub fn center(&self) -> Point3<f64> {
        self.transform * Point3::origin()
    }

    /// Global outward unit normal.
    pub fn normal(&self) -> Vector3<f64> {
        self.transform * Vector3::z()
    }

    /// Map a point in the face's local xy plane to global coordinates.
    pub fn local_to_global(&self, local: kurbo::Point) -> Point3<f64> {
        self.transform * Point3::new(local.x, local.y, 0.0)
    }
}

pub(crate) fn rot_x(angle: f64) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::identity(),
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle),
    )
}

pub(crate) fn rot_y(angle: f64) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::identity(),
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle),
    )
}

pub(crate) fn rot_z(angle: f64) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::identity(),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle),
    )
}

pub(crate) fn shift(x: f64, y: f64, z: f64) -> Isometry3<f64> {
    Isometry3::translation(x, y, z)
}
