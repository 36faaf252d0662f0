// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangle.

use core::fmt;

use kurbo::{Point, Rect};

use crate::check::{BoundaryCheck, rectangle_corners};
use crate::error::{BoundsError, check_finite, check_length, check_ordered, log_rejection};
use crate::types::BoundsType;

const SHAPE: &str = "RectangleBounds";

/// Index into the [`RectangleBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RectangleValue {
    /// Lower x edge.
    MinX = 0,
    /// Lower y edge.
    MinY = 1,
    /// Upper x edge.
    MaxX = 2,
    /// Upper y edge.
    MaxY = 3,
}

/// Axis-aligned box given by its min and max corners.
///
/// Also serves as the cached bounding box of every other surface bounds type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
pub struct RectangleBounds {
    min: Point,
    max: Point,
}

impl RectangleBounds {
    /// Rectangle centered on the origin with the given half-lengths.
    pub fn new(half_x: f64, half_y: f64) -> Result<Self, BoundsError> {
        check_length(SHAPE, "half_x", half_x)
            .and_then(|()| check_length(SHAPE, "half_y", half_y))
            .inspect_err(log_rejection)?;
        Ok(Self::centered(half_x, half_y))
    }

    /// Rectangle spanning `min` to `max`; fails if `min` exceeds `max` on an axis.
    pub fn from_corners(min: Point, max: Point) -> Result<Self, BoundsError> {
        check_finite(SHAPE, "min_x", min.x)
            .and_then(|()| check_finite(SHAPE, "min_y", min.y))
            .and_then(|()| check_finite(SHAPE, "max_x", max.x))
            .and_then(|()| check_finite(SHAPE, "max_y", max.y))
            .and_then(|()| check_ordered(SHAPE, "x", min.x, max.x))
            .and_then(|()| check_ordered(SHAPE, "y", min.y, max.y))
            .inspect_err(log_rejection)?;
        Ok(Self { min, max })
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 4]) -> Result<Self, BoundsError> {
        let [min_x, min_y, max_x, max_y] = values;
        Self::from_corners(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Centered box from half-lengths already known to be valid.
    pub(crate) fn centered(half_x: f64, half_y: f64) -> Self {
        Self {
            min: Point::new(-half_x, -half_y),
            max: Point::new(half_x, half_y),
        }
    }

    /// Smallest box containing all `points`; a degenerate box at the origin
    /// when there are none.
    pub(crate) fn enclosing(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::centered(0.0, 0.0);
        };
        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |acc, p| Self {
                min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        )
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::Rectangle
    }

    /// Parameters in canonical order `[min_x, min_y, max_x, max_y]`.
    pub fn values(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Single named parameter.
    pub fn get(&self, value: RectangleValue) -> f64 {
        self.values()[value as usize]
    }

    /// Lower-left corner.
    pub fn min(&self) -> Point {
        self.min
    }

    /// Upper-right corner.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Half the extent along x.
    pub fn half_length_x(&self) -> f64 {
        0.5 * (self.max.x - self.min.x)
    }

    /// Half the extent along y.
    pub fn half_length_y(&self) -> f64 {
        0.5 * (self.max.y - self.min.y)
    }

    /// The same box as a [`kurbo::Rect`].
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.min, self.max)
    }

    /// Whether `point` is inside under `check`.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        check.is_inside_rectangle(point, self.min, self.max)
    }

    /// Signed Euclidean distance to the edges, negative inside.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        BoundaryCheck::exact().distance_to_rectangle(point, self.min, self.max)
    }

    /// The four corners counter-clockwise from the lower left.
    ///
    /// The segment count is ignored.
    pub fn vertices(&self, _segments: u32) -> Vec<Point> {
        rectangle_corners(self.min, self.max).to_vec()
    }

    /// A rectangle is its own bounding box.
    pub fn bounding_box(&self) -> &Self {
        self
    }
}

impl TryFrom<[f64; 4]> for RectangleBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 4]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<RectangleBounds> for [f64; 4] {
    fn from(bounds: RectangleBounds) -> Self {
        bounds.values()
    }
}

impl fmt::Display for RectangleBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [min_x, min_y, max_x, max_y] = self.values();
        write!(
            f,
            "RectangleBounds: (min_x, min_y, max_x, max_y) = \
             ({min_x:.7}, {min_y:.7}, {max_x:.7}, {max_y:.7})"
        )
    }
}
