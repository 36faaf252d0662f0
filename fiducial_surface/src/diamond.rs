// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagon symmetric about the y axis, made of two stacked trapezoids.

use core::fmt;

use kurbo::Point;

use crate::check::BoundaryCheck;
use crate::error::{BoundsError, check_length, log_rejection};
use crate::rectangle::RectangleBounds;
use crate::types::BoundsType;

const SHAPE: &str = "DiamondBounds";

/// Index into the [`DiamondBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiamondValue {
    /// Half-width of the lower edge.
    HalfLengthXNegY = 0,
    /// Half-width at `y = 0`.
    HalfLengthXZeroY = 1,
    /// Half-width of the upper edge.
    HalfLengthXPosY = 2,
    /// Distance from `y = 0` to the lower edge.
    HalfLengthYNeg = 3,
    /// Distance from `y = 0` to the upper edge.
    HalfLengthYPos = 4,
}

/// Convex hexagon: a lower trapezoid from `y = -y_neg` to `0` and an upper
/// trapezoid from `0` to `y_pos`, sharing their widest edge.
///
/// ```
/// use fiducial_surface::{BoundaryCheck, DiamondBounds};
/// use kurbo::Point;
///
/// let d = DiamondBounds::new(10.0, 50.0, 30.0, 10.0, 20.0).unwrap();
/// assert!(d.inside(Point::new(45.0, 0.0), &BoundaryCheck::exact()));
/// assert_eq!(d.vertices(0).len(), 6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 5]", into = "[f64; 5]")
)]
pub struct DiamondBounds {
    values: [f64; 5],
    bounding_box: RectangleBounds,
}

impl DiamondBounds {
    /// Diamond from its three half-widths and two half-heights.
    ///
    /// Fails unless both end half-widths are at most the central one.
    pub fn new(
        half_x_neg_y: f64,
        half_x_zero_y: f64,
        half_x_pos_y: f64,
        half_y_neg: f64,
        half_y_pos: f64,
    ) -> Result<Self, BoundsError> {
        Self::from_values([
            half_x_neg_y,
            half_x_zero_y,
            half_x_pos_y,
            half_y_neg,
            half_y_pos,
        ])
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 5]) -> Result<Self, BoundsError> {
        Self::validate(values).inspect_err(log_rejection)?;
        let [_, mid, _, y_neg, y_pos] = values;
        Ok(Self {
            values,
            bounding_box: RectangleBounds::centered(mid, y_neg.max(y_pos)),
        })
    }

    fn validate(values: [f64; 5]) -> Result<(), BoundsError> {
        const NAMES: [&str; 5] = [
            "half_x_neg_y",
            "half_x_zero_y",
            "half_x_pos_y",
            "half_y_neg",
            "half_y_pos",
        ];
        for (name, value) in NAMES.into_iter().zip(values) {
            check_length(SHAPE, name, value)?;
        }
        let [neg, mid, pos, _, _] = values;
        if neg > mid || pos > mid {
            return Err(BoundsError::NotDiamond { neg, mid, pos });
        }
        Ok(())
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::Diamond
    }

    /// Parameters in canonical order
    /// `[half_x_neg_y, half_x_zero_y, half_x_pos_y, half_y_neg, half_y_pos]`.
    pub fn values(&self) -> [f64; 5] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: DiamondValue) -> f64 {
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

    /// The six corners counter-clockwise from the lower left.
    ///
    /// The segment count is ignored.
    pub fn vertices(&self, _segments: u32) -> Vec<Point> {
        self.corners().to_vec()
    }

    /// Cached enclosing rectangle.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }

    fn corners(&self) -> [Point; 6] {
        let [x1, x2, x3, y1, y2] = self.values;
        [
            Point::new(-x1, -y1),
            Point::new(x1, -y1),
            Point::new(x2, 0.0),
            Point::new(x3, y2),
            Point::new(-x3, y2),
            Point::new(-x2, 0.0),
        ]
    }
}

impl TryFrom<[f64; 5]> for DiamondBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 5]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<DiamondBounds> for [f64; 5] {
    fn from(bounds: DiamondBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for DiamondBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x1, x2, x3, y1, y2] = self.values;
        write!(
            f,
            "DiamondBounds: (half_x_neg_y, half_x_zero_y, half_x_pos_y, half_y_neg, half_y_pos) = \
             ({x1:.7}, {x2:.7}, {x3:.7}, {y1:.7}, {y2:.7})"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_wider_than_the_middle_are_rejected() {
        assert_eq!(
            DiamondBounds::new(5.0, 3.0, 5.0, 2.0, 2.0),
            Err(BoundsError::NotDiamond {
                neg: 5.0,
                mid: 3.0,
                pos: 5.0
            })
        );
        assert!(DiamondBounds::new(1.0, 3.0, 4.0, 2.0, 2.0).is_err());
        assert!(DiamondBounds::new(1.0, 3.0, 1.0, -2.0, 2.0).is_err());
        // Equal widths are a valid, if degenerate, diamond.
        assert!(DiamondBounds::new(3.0, 3.0, 3.0, 2.0, 2.0).is_ok());
    }

    #[test]
    fn distances_to_the_flat_edges() {
        let d = DiamondBounds::new(10.0, 50.0, 30.0, 10.0, 20.0).unwrap();
        assert!((d.distance_to_boundary(Point::ZERO) + 10.0).abs() < 1e-12);
        assert!((d.distance_to_boundary(Point::new(0.0, 30.0)) - 10.0).abs() < 1e-12);
        assert_eq!(d.bounding_box(), &RectangleBounds::new(50.0, 20.0).unwrap());
    }

    #[test]
    fn inside_follows_both_trapezoids() {
        let d = DiamondBounds::new(10.0, 50.0, 30.0, 10.0, 20.0).unwrap();
        let exact = BoundaryCheck::exact();
        assert!(d.inside(Point::new(50.0, 0.0), &exact));
        assert!(d.inside(Point::new(-29.0, 19.0), &exact));
        assert!(!d.inside(Point::new(40.0, -9.0), &exact));
        assert!(!d.inside(Point::new(0.0, 20.5), &exact));
        assert!(d.inside(Point::new(0.0, 20.5), &BoundaryCheck::absolute(0.0, 1.0)));
    }

    #[test]
    fn polygon_closes_without_self_intersection() {
        let d = DiamondBounds::new(1.0, 3.0, 1.0, 2.0, 2.0).unwrap();
        for segments in [0, 1, 16, 72] {
            let v = d.vertices(segments);
            assert_eq!(v.len(), 6);
            // Every turn is to the left, so the closed outline is convex.
            for i in 0..v.len() {
                let (a, b, c) = (v[i], v[(i + 1) % 6], v[(i + 2) % 6]);
                assert!((b - a).cross(c - b) > 0.0);
            }
        }
    }
}
