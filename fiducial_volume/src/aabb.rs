// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes in 3D.

use nalgebra::{Isometry3, Point3, Vector3};

/// Axis-aligned box in 3D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3D {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb3D {
    /// Create a box from its corners.
    pub const fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest box containing `points` after applying `transform`.
    ///
    /// Returns a degenerate box at the origin when there are no points.
    pub fn from_points(
        points: impl IntoIterator<Item = Point3<f64>>,
        transform: Option<&Isometry3<f64>>,
    ) -> Self {
        let mut points = points
            .into_iter()
            .map(|p| transform.map_or(p, |t| t * p));
        let Some(first) = points.next() else {
            return Self::new(Point3::origin(), Point3::origin());
        };
        points.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.inf(&p),
            max: acc.max.sup(&p),
        })
    }

    /// This box grown by `envelope` on every side; a negative envelope shrinks it.
    pub fn enlarged(&self, envelope: f64) -> Self {
        let e = Vector3::repeat(envelope);
        Self::new(self.min - e, self.max + e)
    }

    /// Whether `point` lies within the closed box.
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }
}
