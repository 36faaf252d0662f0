// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbitrary triangle.

use core::fmt;

use kurbo::Point;

use crate::check::BoundaryCheck;
use crate::convex_polygon::orient_convex;
use crate::error::{BoundsError, log_rejection};
use crate::rectangle::RectangleBounds;
use crate::types::BoundsType;

const SHAPE: &str = "TriangleBounds";

/// Index into the [`TriangleBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangleValue {
    /// First corner, x.
    X1 = 0,
    /// First corner, y.
    Y1 = 1,
    /// Second corner, x.
    X2 = 2,
    /// Second corner, y.
    Y2 = 3,
    /// Third corner, x.
    X3 = 4,
    /// Third corner, y.
    Y3 = 5,
}

/// Triangle from three corners with non-zero area.
///
/// Corners are stored counter-clockwise. The bounding box is centered on the
/// local origin and reaches the largest corner coordinate on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 6]", into = "[f64; 6]")
)]
pub struct TriangleBounds {
    vertices: [Point; 3],
    bounding_box: RectangleBounds,
}

impl TriangleBounds {
    /// Triangle from its corners in either winding.
    pub fn new(mut vertices: [Point; 3]) -> Result<Self, BoundsError> {
        orient_convex(SHAPE, &mut vertices).inspect_err(log_rejection)?;
        let (half_x, half_y) = vertices.iter().fold((0.0_f64, 0.0_f64), |(hx, hy), p| {
            (hx.max(p.x.abs()), hy.max(p.y.abs()))
        });
        Ok(Self {
            vertices,
            bounding_box: RectangleBounds::centered(half_x, half_y),
        })
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 6]) -> Result<Self, BoundsError> {
        let [x1, y1, x2, y2, x3, y3] = values;
        Self::new([Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)])
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::Triangle
    }

    /// Parameters in canonical order `[x1, y1, x2, y2, x3, y3]`.
    pub fn values(&self) -> [f64; 6] {
        let [a, b, c] = self.vertices;
        [a.x, a.y, b.x, b.y, c.x, c.y]
    }

    /// Single named parameter.
    pub fn get(&self, value: TriangleValue) -> f64 {
        self.values()[value as usize]
    }

    /// Whether `point` is inside under `check`.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        check.is_inside_polygon(point, &self.vertices)
    }

    /// Signed Euclidean distance to the outline, negative inside.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        BoundaryCheck::exact().distance_to_polygon(point, &self.vertices)
    }

    /// The three corners, counter-clockwise. The segment count is ignored.
    pub fn vertices(&self, _segments: u32) -> Vec<Point> {
        self.vertices.to_vec()
    }

    /// Cached centered rectangle containing the corners.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }
}

impl TryFrom<[f64; 6]> for TriangleBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 6]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<TriangleBounds> for [f64; 6] {
    fn from(bounds: TriangleBounds) -> Self {
        bounds.values()
    }
}

impl fmt::Display for TriangleBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(
            f,
            "TriangleBounds: generating vertices (x, y) = ({:.7}, {:.7}), ({:.7}, {:.7}), ({:.7}, {:.7})",
            a.x, a.y, b.x, b.y, c.x, c.y
        )
    }
}
