// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convex polygon with any number of vertices.

use core::f64::consts::PI;
use core::fmt;

use kurbo::Point;

use crate::check::BoundaryCheck;
use crate::error::{BoundsError, check_finite, log_rejection};
use crate::rectangle::RectangleBounds;
use crate::types::BoundsType;

const SHAPE: &str = "ConvexPolygonBounds";

/// Convex polygon given by its corners.
///
/// The corners are stored counter-clockwise; a clockwise input is reversed
/// on construction. Polygons that are not strictly convex, including
/// self-intersecting ones whose turns all bend the same way, are rejected.
///
/// ```
/// use fiducial_surface::{BoundaryCheck, ConvexPolygonBounds};
/// use kurbo::Point;
///
/// let quad = ConvexPolygonBounds::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.9, 1.2),
///     Point::new(0.5, 1.0),
/// ])
/// .unwrap();
/// assert!(quad.inside(Point::new(0.8, 0.8), &BoundaryCheck::exact()));
/// assert_eq!(quad.bounding_box().max(), Point::new(1.0, 1.2));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct ConvexPolygonBounds {
    vertices: Vec<Point>,
    bounding_box: RectangleBounds,
}

impl ConvexPolygonBounds {
    /// Polygon from at least three corners in either winding.
    pub fn new(mut vertices: Vec<Point>) -> Result<Self, BoundsError> {
        orient_convex(SHAPE, &mut vertices).inspect_err(log_rejection)?;
        let bounding_box = RectangleBounds::enclosing(&vertices);
        Ok(Self {
            vertices,
            bounding_box,
        })
    }

    /// Rebuild from the flat `[x0, y0, x1, y1, ...]` slice returned by
    /// [`values`](Self::values).
    pub fn from_values(values: &[f64]) -> Result<Self, BoundsError> {
        if values.len() < 6 || values.len() % 2 != 0 {
            let err = BoundsError::PolygonParameterCount {
                actual: values.len(),
            };
            log_rejection(&err);
            return Err(err);
        }
        Self::new(
            values
                .chunks_exact(2)
                .map(|xy| Point::new(xy[0], xy[1]))
                .collect(),
        )
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::ConvexPolygon
    }

    /// Corner coordinates flattened as `[x0, y0, x1, y1, ...]`.
    pub fn values(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Number of corners.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether `point` is inside under `check`.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        check.is_inside_polygon(point, &self.vertices)
    }

    /// Signed Euclidean distance to the outline, negative inside.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        BoundaryCheck::exact().distance_to_polygon(point, &self.vertices)
    }

    /// The stored corners, counter-clockwise. The segment count is ignored.
    pub fn vertices(&self, _segments: u32) -> Vec<Point> {
        self.vertices.clone()
    }

    /// Cached enclosing rectangle of the corners.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }
}

/// Check that `vertices` span a strictly convex, simple polygon and put them
/// in counter-clockwise order.
pub(crate) fn orient_convex(shape: &'static str, vertices: &mut [Point]) -> Result<(), BoundsError> {
    for p in vertices.iter() {
        check_finite(shape, "vertex x", p.x)?;
        check_finite(shape, "vertex y", p.y)?;
    }
    let count = vertices.len();
    let not_convex = || BoundsError::NotConvex {
        shape,
        vertices: count,
    };
    if count < 3 {
        return Err(not_convex());
    }
    let twice_area: f64 = corners(vertices)
        .map(|(_, b, c)| b.to_vec2().cross(c.to_vec2()))
        .sum();
    if twice_area == 0.0 || !twice_area.is_finite() {
        return Err(not_convex());
    }
    if twice_area < 0.0 {
        vertices.reverse();
    }

    let mut turning = 0.0;
    for (a, b, c) in corners(vertices) {
        let (incoming, outgoing) = (b - a, c - b);
        let cross = incoming.cross(outgoing);
        if cross <= 0.0 {
            return Err(not_convex());
        }
        turning += cross.atan2(incoming.dot(outgoing));
    }
    // A simple convex outline turns exactly once.
    if turning > 3.0 * PI {
        return Err(not_convex());
    }
    Ok(())
}

/// Consecutive vertex triples `(previous, current, next)` around the outline.
fn corners(vertices: &[Point]) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[(i + n - 1) % n], vertices[i], vertices[(i + 1) % n]))
}

impl TryFrom<Vec<f64>> for ConvexPolygonBounds {
    type Error = BoundsError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl From<ConvexPolygonBounds> for Vec<f64> {
    fn from(bounds: ConvexPolygonBounds) -> Self {
        bounds.values()
    }
}

impl fmt::Display for ConvexPolygonBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConvexPolygonBounds: vertices (x, y) = [")?;
        for (i, p) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({:.7}, {:.7})", p.x, p.y)?;
        }
        f.write_str("]")
    }
}
