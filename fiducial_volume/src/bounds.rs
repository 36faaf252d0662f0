// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of volume bounds.

use core::fmt;

use fiducial_surface::BoundsError;
use nalgebra::{Isometry3, Point3};

use crate::aabb::Aabb3D;
use crate::cuboid::CuboidVolumeBounds;
use crate::double_trapezoid::DoubleTrapezoidVolumeBounds;
use crate::face::BoundarySurface;

/// Volume family discriminant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeBoundsType {
    /// See [`CuboidVolumeBounds`].
    Cuboid,
    /// See [`DoubleTrapezoidVolumeBounds`].
    DoubleTrapezoid,
}

/// Any volume bounds, dispatched by family.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeBounds {
    /// Axis-aligned box.
    Cuboid(CuboidVolumeBounds),
    /// Prism with a diamond cross section.
    DoubleTrapezoid(DoubleTrapezoidVolumeBounds),
}

impl VolumeBounds {
    /// Rebuild bounds of `bounds_type` from the output of [`values`](Self::values).
    pub fn from_values(bounds_type: VolumeBoundsType, values: &[f64]) -> Result<Self, BoundsError> {
        let count = |expected: usize| BoundsError::VolumeParameterCount {
            expected,
            actual: values.len(),
        };
        Ok(match bounds_type {
            VolumeBoundsType::Cuboid => {
                let values: [f64; 3] = values.try_into().map_err(|_| count(3))?;
                CuboidVolumeBounds::from_values(values)?.into()
            }
            VolumeBoundsType::DoubleTrapezoid => {
                let values: [f64; 8] = values.try_into().map_err(|_| count(8))?;
                DoubleTrapezoidVolumeBounds::from_values(values)?.into()
            }
        })
    }

    /// Volume family discriminant.
    pub fn bounds_type(&self) -> VolumeBoundsType {
        match self {
            Self::Cuboid(_) => VolumeBoundsType::Cuboid,
            Self::DoubleTrapezoid(_) => VolumeBoundsType::DoubleTrapezoid,
        }
    }

    /// Parameters in the canonical order of the volume family.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::Cuboid(b) => b.values().to_vec(),
            Self::DoubleTrapezoid(b) => b.values().to_vec(),
        }
    }

    /// Whether `position` is inside, widened by `tolerance`.
    pub fn inside(&self, position: &Point3<f64>, tolerance: f64) -> bool {
        match self {
            Self::Cuboid(b) => b.inside(position, tolerance),
            Self::DoubleTrapezoid(b) => b.inside(position, tolerance),
        }
    }

    /// Ordered boundary faces placed by `transform`.
    pub fn decompose_to_surfaces(
        &self,
        transform: &Isometry3<f64>,
    ) -> Result<Vec<BoundarySurface>, BoundsError> {
        match self {
            Self::Cuboid(b) => b.decompose_to_surfaces(transform),
            Self::DoubleTrapezoid(b) => b.decompose_to_surfaces(transform),
        }
    }

    /// Axis-aligned box around the volume placed by `transform`, grown by
    /// `envelope`.
    pub fn bounding_box(&self, transform: Option<&Isometry3<f64>>, envelope: f64) -> Aabb3D {
        match self {
            Self::Cuboid(b) => b.bounding_box(transform, envelope),
            Self::DoubleTrapezoid(b) => b.bounding_box(transform, envelope),
        }
    }
}

impl From<CuboidVolumeBounds> for VolumeBounds {
    fn from(bounds: CuboidVolumeBounds) -> Self {
        Self::Cuboid(bounds)
    }
}

impl From<DoubleTrapezoidVolumeBounds> for VolumeBounds {
    fn from(bounds: DoubleTrapezoidVolumeBounds) -> Self {
        Self::DoubleTrapezoid(bounds)
    }
}

impl fmt::Display for VolumeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cuboid(b) => fmt::Display::fmt(b, f),
            Self::DoubleTrapezoid(b) => fmt::Display::fmt(b, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruction_checks_the_parameter_count() {
        assert_eq!(
            VolumeBounds::from_values(VolumeBoundsType::Cuboid, &[1.0, 2.0]),
            Err(BoundsError::VolumeParameterCount {
                expected: 3,
                actual: 2
            })
        );
        let v: VolumeBounds = DoubleTrapezoidVolumeBounds::new(1.0, 4.0, 2.0, 2.0, 3.0, 5.0)
            .unwrap()
            .into();
        let again = VolumeBounds::from_values(v.bounds_type(), &v.values()).unwrap();
        assert_eq!(again, v);
        assert_eq!(v.decompose_to_surfaces(&Isometry3::identity()).unwrap().len(), 8);
        assert!(v.to_string().starts_with("DoubleTrapezoidVolumeBounds:"));
    }
}
