// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trapezoid symmetric about the y axis.

use core::fmt;

use kurbo::Point;

use crate::check::BoundaryCheck;
use crate::error::{BoundsError, check_length, log_rejection};
use crate::rectangle::RectangleBounds;
use crate::types::BoundsType;

const SHAPE: &str = "TrapezoidBounds";

/// Index into the [`TrapezoidBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrapezoidValue {
    /// Half-width of the edge at negative y.
    HalfLengthXNegY = 0,
    /// Half-width of the edge at positive y.
    HalfLengthXPosY = 1,
    /// Half-height.
    HalfLengthY = 2,
}

/// Trapezoid with parallel edges at `y = ±half_y`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct TrapezoidBounds {
    values: [f64; 3],
    bounding_box: RectangleBounds,
}

impl TrapezoidBounds {
    /// Trapezoid from its two edge half-widths and its half-height.
    pub fn new(half_x_neg_y: f64, half_x_pos_y: f64, half_y: f64) -> Result<Self, BoundsError> {
        Self::from_values([half_x_neg_y, half_x_pos_y, half_y])
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 3]) -> Result<Self, BoundsError> {
        let [neg, pos, half_y] = values;
        check_length(SHAPE, "half_x_neg_y", neg)
            .and_then(|()| check_length(SHAPE, "half_x_pos_y", pos))
            .and_then(|()| check_length(SHAPE, "half_y", half_y))
            .inspect_err(log_rejection)?;
        Ok(Self {
            values,
            bounding_box: RectangleBounds::centered(neg.max(pos), half_y),
        })
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::Trapezoid
    }

    /// Parameters in canonical order `[half_x_neg_y, half_x_pos_y, half_y]`.
    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: TrapezoidValue) -> f64 {
        self.values[value as usize]
    }

    /// Whether `point` is inside under `check`.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        check.is_inside_polygon(point, &self.corners())
    }

    /// Signed Euclidean distance to the outline, negative inside.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        BoundaryCheck::exact().distance_to_polygon(point, &self.corners())
    }

    /// The four corners counter-clockwise from the lower left.
    ///
    /// The segment count is ignored.
    pub fn vertices(&self, _segments: u32) -> Vec<Point> {
        self.corners().to_vec()
    }

    /// Cached enclosing rectangle.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }

    fn corners(&self) -> [Point; 4] {
        let [neg, pos, half_y] = self.values;
        [
            Point::new(-neg, -half_y),
            Point::new(neg, -half_y),
            Point::new(pos, half_y),
            Point::new(-pos, half_y),
        ]
    }
}

impl TryFrom<[f64; 3]> for TrapezoidBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<TrapezoidBounds> for [f64; 3] {
    fn from(bounds: TrapezoidBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for TrapezoidBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [neg, pos, half_y] = self.values;
        write!(
            f,
            "TrapezoidBounds: (half_x_neg_y, half_x_pos_y, half_y) = \
             ({neg:.7}, {pos:.7}, {half_y:.7})"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slanted_edges_bound_the_inside() {
        let t = TrapezoidBounds::new(1.0, 6.0, 2.0).unwrap();
        let exact = BoundaryCheck::exact();
        assert!(t.inside(Point::new(0.0, 0.0), &exact));
        assert!(t.inside(Point::new(5.0, 1.9), &exact));
        assert!(!t.inside(Point::new(2.0, -1.9), &exact));
        assert!(t.inside(Point::new(2.0, -1.9), &BoundaryCheck::absolute(1.0, 1.0)));
        assert!((t.distance_to_boundary(Point::new(0.0, 3.0)) - 1.0).abs() < 1e-12);
        assert!((t.distance_to_boundary(Point::ZERO) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn bounding_box_uses_the_wider_edge() {
        let t = TrapezoidBounds::new(1.0, 6.0, 2.0).unwrap();
        assert_eq!(t.bounding_box().values(), [-6.0, -2.0, 6.0, 2.0]);
        assert_eq!(t.get(TrapezoidValue::HalfLengthY), 2.0);
    }

    #[test]
    fn negative_half_lengths_are_rejected() {
        assert!(matches!(
            TrapezoidBounds::new(1.0, -1.0, 2.0),
            Err(BoundsError::NegativeLength { parameter: "half_x_pos_y", .. })
        ));
    }
}
