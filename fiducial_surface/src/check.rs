// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary-check policy: the tolerance model every bounds type delegates its
//! final accept/reject decision to.
//!
//! A [`BoundaryCheck`] is a small copyable value. It never mutates, so the
//! same instance can be shared between threads and reused across calls.

use bitflags::bitflags;
use kurbo::{Point, Vec2};
use nalgebra::{Matrix2, Vector2};

use crate::error::BoundsError;

/// Tolerance used for an axis that is not checked.
///
/// `f64::MAX` rather than infinity so that projecting through a Jacobian with
/// zero entries never produces NaN.
const UNCHECKED: f64 = f64::MAX;

bitflags! {
    /// Local axes constrained by an absolute boundary check.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CheckedAxes: u8 {
        /// First local coordinate (x, or r on discs).
        const LOC0 = 0b0000_0001;
        /// Second local coordinate (y, or phi on discs).
        const LOC1 = 0b0000_0010;
    }
}

impl Default for CheckedAxes {
    fn default() -> Self {
        Self::LOC0 | Self::LOC1
    }
}

/// How a [`BoundaryCheck`] tolerates points outside the nominal boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// No check: every point is inside.
    None,
    /// Per-axis absolute tolerances.
    Absolute,
    /// Covariance-weighted tolerance in units of standard deviations.
    Chi2,
}

/// Tolerance policy for containment and distance queries.
///
/// ```
/// use fiducial_surface::BoundaryCheck;
/// use kurbo::Point;
///
/// let exact = BoundaryCheck::exact();
/// let loose = BoundaryCheck::absolute(0.5, 0.5);
/// let (min, max) = (Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
///
/// assert!(!exact.is_inside_rectangle(Point::new(1.2, 0.0), min, max));
/// assert!(loose.is_inside_rectangle(Point::new(1.2, 0.0), min, max));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryCheck {
    kind: CheckKind,
    weight: Matrix2<f64>,
    tolerance: Vec2,
    chi2_tolerance: f64,
}

impl Default for BoundaryCheck {
    fn default() -> Self {
        Self::exact()
    }
}

impl From<bool> for BoundaryCheck {
    /// `true` is an exact check, `false` disables checking.
    fn from(check: bool) -> Self {
        if check { Self::exact() } else { Self::none() }
    }
}

impl BoundaryCheck {
    /// A check that accepts every point.
    pub fn none() -> Self {
        Self {
            kind: CheckKind::None,
            weight: Matrix2::identity(),
            tolerance: Vec2::ZERO,
            chi2_tolerance: 0.0,
        }
    }

    /// Absolute check with zero tolerance; points on the boundary are inside.
    pub fn exact() -> Self {
        Self::absolute(0.0, 0.0)
    }

    /// Absolute check with a tolerance per local axis.
    pub fn absolute(tolerance0: f64, tolerance1: f64) -> Self {
        Self::with_axes(CheckedAxes::default(), tolerance0, tolerance1)
    }

    /// Absolute check restricted to `axes`; an unchecked axis accepts any offset.
    pub fn with_axes(axes: CheckedAxes, tolerance0: f64, tolerance1: f64) -> Self {
        let pick = |axis, tol: f64| {
            if axes.contains(axis) {
                tol.abs()
            } else {
                UNCHECKED
            }
        };
        Self {
            kind: CheckKind::Absolute,
            weight: Matrix2::identity(),
            tolerance: Vec2::new(
                pick(CheckedAxes::LOC0, tolerance0),
                pick(CheckedAxes::LOC1, tolerance1),
            ),
            chi2_tolerance: 0.0,
        }
    }

    /// Covariance-weighted check accepting points within `sigma_max` standard
    /// deviations of the boundary.
    pub fn covariance(covariance: Matrix2<f64>, sigma_max: f64) -> Result<Self, BoundsError> {
        let weight = covariance
            .try_inverse()
            .ok_or(BoundsError::SingularCovariance)?;
        Ok(Self {
            kind: CheckKind::Chi2,
            weight,
            tolerance: Vec2::ZERO,
            chi2_tolerance: sigma_max * sigma_max,
        })
    }

    /// Kind of this check.
    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    /// Whether this check rejects anything at all.
    pub fn is_enabled(&self) -> bool {
        self.kind != CheckKind::None
    }

    /// Absolute per-axis tolerances; zero for non-absolute checks.
    pub fn tolerance(&self) -> Vec2 {
        match self.kind {
            CheckKind::Absolute => self.tolerance,
            CheckKind::None | CheckKind::Chi2 => Vec2::ZERO,
        }
    }

    /// Express this check in a new coordinate frame.
    ///
    /// `jacobian` maps offsets in the current frame to the new one. Absolute
    /// tolerances are projected through `|J|`, covariances through `J C Jᵀ`.
    /// A singular projection leaves a covariance check unchanged.
    pub fn transformed(&self, jacobian: &Matrix2<f64>) -> Self {
        let mut out = *self;
        match self.kind {
            CheckKind::None => {}
            CheckKind::Absolute => {
                let t = jacobian.abs() * Vector2::new(self.tolerance.x, self.tolerance.y);
                out.tolerance = Vec2::new(t.x, t.y);
            }
            CheckKind::Chi2 => {
                let projected = self
                    .weight
                    .try_inverse()
                    .map(|cov| jacobian * cov * jacobian.transpose())
                    .and_then(|cov| cov.try_inverse());
                if let Some(weight) = projected {
                    out.weight = weight;
                }
            }
        }
        out
    }

    /// Whether `point` lies in the box `[min, max]` within tolerance.
    pub fn is_inside_rectangle(&self, point: Point, min: Point, max: Point) -> bool {
        if self.kind == CheckKind::None || inside_rectangle(point, min, max) {
            return true;
        }
        let closest = match self.kind {
            CheckKind::Chi2 => self.closest_point_on_polygon(point, &rectangle_corners(min, max)),
            CheckKind::None | CheckKind::Absolute => clamp_to_rectangle(point, min, max),
        };
        self.is_tolerated(closest - point)
    }

    /// Whether `point` lies in the convex polygon `vertices` within tolerance.
    pub fn is_inside_polygon(&self, point: Point, vertices: &[Point]) -> bool {
        if self.kind == CheckKind::None || inside_polygon(point, vertices) {
            return true;
        }
        if self.kind == CheckKind::Absolute && self.tolerance == Vec2::ZERO {
            return false;
        }
        let closest = self.closest_point_on_polygon(point, vertices);
        self.is_tolerated(closest - point)
    }

    /// Signed distance from `point` to the box `[min, max]`.
    ///
    /// Negative inside, positive outside. Absolute and disabled checks use the
    /// Euclidean metric; covariance checks use the Mahalanobis metric.
    pub fn distance_to_rectangle(&self, point: Point, min: Point, max: Point) -> f64 {
        match self.kind {
            CheckKind::Chi2 => self.distance_to_polygon(point, &rectangle_corners(min, max)),
            CheckKind::None | CheckKind::Absolute => {
                if inside_rectangle(point, min, max) {
                    -(point.x - min.x)
                        .min(max.x - point.x)
                        .min(point.y - min.y)
                        .min(max.y - point.y)
                } else {
                    (point - clamp_to_rectangle(point, min, max)).hypot()
                }
            }
        }
    }

    /// Signed distance from `point` to the boundary of the convex polygon
    /// `vertices`, negative inside.
    pub fn distance_to_polygon(&self, point: Point, vertices: &[Point]) -> f64 {
        let closest = self.closest_point_on_polygon(point, vertices);
        let d = self.squared_norm(closest - point).sqrt();
        if inside_polygon(point, vertices) { -d } else { d }
    }

    fn is_tolerated(&self, delta: Vec2) -> bool {
        match self.kind {
            CheckKind::None => true,
            CheckKind::Absolute => {
                delta.x.abs() <= self.tolerance.x && delta.y.abs() <= self.tolerance.y
            }
            CheckKind::Chi2 => self.squared_norm(delta) <= self.chi2_tolerance,
        }
    }

    fn squared_norm(&self, v: Vec2) -> f64 {
        let v = Vector2::new(v.x, v.y);
        v.dot(&(self.weight * v))
    }

    /// Closest point on the polygon outline under this check's metric.
    fn closest_point_on_polygon(&self, point: Point, vertices: &[Point]) -> Point {
        let on_segment = |a: Point, b: Point| {
            let n = b - a;
            let weighted = self.weight * Vector2::new(n.x, n.y);
            let f = n.x * weighted.x + n.y * weighted.y;
            let d = point - a;
            let u = if f.is_normal() {
                (d.x * weighted.x + d.y * weighted.y) / f
            } else {
                // Degenerate segment; any point on it will do.
                0.5
            };
            a + n * u.clamp(0.0, 1.0)
        };
        edges(vertices)
            .map(|(a, b)| on_segment(a, b))
            .min_by(|p, q| {
                self.squared_norm(*p - point)
                    .total_cmp(&self.squared_norm(*q - point))
            })
            .unwrap_or(point)
    }
}

/// Closed-box membership, no tolerance.
pub fn inside_rectangle(point: Point, min: Point, max: Point) -> bool {
    min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
}

/// Convex-polygon membership, no tolerance.
///
/// Points on an edge are inside. The winding of `vertices` does not matter.
pub fn inside_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut side = 0.0_f64;
    for (a, b) in edges(vertices) {
        let c = (b - a).cross(point - a);
        if c == 0.0 {
            continue;
        }
        if side == 0.0 {
            side = c.signum();
        } else if c.signum() != side {
            return false;
        }
    }
    true
}

/// Corners of the box `[min, max]`, counter-clockwise from `min`.
pub fn rectangle_corners(min: Point, max: Point) -> [Point; 4] {
    [
        min,
        Point::new(max.x, min.y),
        max,
        Point::new(min.x, max.y),
    ]
}

fn clamp_to_rectangle(point: Point, min: Point, max: Point) -> Point {
    Point::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
}

/// Consecutive vertex pairs including the closing edge.
fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Point; 4] {
        rectangle_corners(Point::new(-1.0, -1.0), Point::new(1.0, 1.0))
    }

    #[test]
    fn exact_check_includes_the_boundary() {
        let bc = BoundaryCheck::exact();
        let (min, max) = (Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(bc.is_inside_rectangle(Point::new(1.0, 0.0), min, max));
        assert!(bc.is_inside_rectangle(Point::new(1.0, 1.0), min, max));
        assert!(!bc.is_inside_rectangle(Point::new(1.0 + 1e-9, 0.0), min, max));
        assert!(bc.is_inside_polygon(Point::new(1.0, 0.3), &square()));
        assert!(!bc.is_inside_polygon(Point::new(1.0 + 1e-9, 0.3), &square()));
    }

    #[test]
    fn disabled_check_accepts_everything() {
        let bc = BoundaryCheck::from(false);
        assert!(!bc.is_enabled());
        assert!(bc.is_inside_polygon(Point::new(100.0, -100.0), &square()));
        assert!(bc.is_inside_rectangle(
            Point::new(100.0, -100.0),
            Point::ZERO,
            Point::new(1.0, 1.0)
        ));
    }

    #[test]
    fn absolute_tolerance_is_per_axis() {
        let bc = BoundaryCheck::absolute(0.5, 0.0);
        let (min, max) = (Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(bc.is_inside_rectangle(Point::new(1.4, 0.0), min, max));
        assert!(!bc.is_inside_rectangle(Point::new(0.0, 1.1), min, max));
        assert!(bc.is_inside_polygon(Point::new(-1.4, 0.0), &square()));
        assert!(!bc.is_inside_polygon(Point::new(-1.6, 0.0), &square()));
    }

    #[test]
    fn unchecked_axis_accepts_any_offset() {
        let bc = BoundaryCheck::with_axes(CheckedAxes::LOC0, 0.0, 0.0);
        let (min, max) = (Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(bc.is_inside_rectangle(Point::new(0.0, 1e6), min, max));
        assert!(!bc.is_inside_rectangle(Point::new(1.5, 0.0), min, max));
    }

    #[test]
    fn rectangle_distance_is_signed() {
        let bc = BoundaryCheck::exact();
        let (min, max) = (Point::new(-10.0, -5.0), Point::new(10.0, 5.0));
        assert!((bc.distance_to_rectangle(Point::new(15.0, 0.0), min, max) - 5.0).abs() < 1e-12);
        assert!((bc.distance_to_rectangle(Point::new(13.0, 9.0), min, max) - 5.0).abs() < 1e-12);
        assert!((bc.distance_to_rectangle(Point::ZERO, min, max) + 5.0).abs() < 1e-12);
        assert!((bc.distance_to_rectangle(Point::new(8.0, 0.0), min, max) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn polygon_distance_matches_rectangle_distance() {
        let bc = BoundaryCheck::exact();
        let corners = square();
        for p in [
            Point::new(3.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.25, -0.5),
            Point::new(-0.9, 0.0),
        ] {
            let a = bc.distance_to_polygon(p, &corners);
            let b = bc.distance_to_rectangle(p, corners[0], corners[2]);
            assert!((a - b).abs() < 1e-12, "{p:?}: {a} vs {b}");
        }
    }

    #[test]
    fn polygon_membership_ignores_winding() {
        let mut cw = square();
        cw.reverse();
        assert!(inside_polygon(Point::new(0.5, 0.5), &cw));
        assert!(!inside_polygon(Point::new(1.5, 0.5), &cw));
        assert!(!inside_polygon(Point::ZERO, &cw[..2]));
    }

    #[test]
    fn covariance_check_scales_with_sigma() {
        let cov = Matrix2::new(0.25, 0.0, 0.0, 0.25);
        let one_sigma = BoundaryCheck::covariance(cov, 1.0).unwrap();
        let three_sigma = BoundaryCheck::covariance(cov, 3.0).unwrap();
        let (min, max) = (Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        // 1.0 beyond the edge is two standard deviations.
        let p = Point::new(2.0, 0.0);
        assert!(!one_sigma.is_inside_rectangle(p, min, max));
        assert!(three_sigma.is_inside_rectangle(p, min, max));
        assert!((one_sigma.distance_to_rectangle(p, min, max) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn singular_covariance_is_rejected() {
        let cov = Matrix2::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(
            BoundaryCheck::covariance(cov, 1.0),
            Err(BoundsError::SingularCovariance)
        );
    }

    #[test]
    fn transformed_projects_absolute_tolerances() {
        let bc = BoundaryCheck::absolute(1.0, 0.1);
        let jacobian = Matrix2::new(2.0, 0.0, 0.0, -3.0);
        let t = bc.transformed(&jacobian).tolerance();
        assert!((t.x - 2.0).abs() < 1e-12);
        assert!((t.y - 0.3).abs() < 1e-12);

        let unchecked = BoundaryCheck::with_axes(CheckedAxes::LOC0, 1.0, 0.0);
        let t = unchecked.transformed(&Matrix2::new(1.0, 0.0, 0.0, 0.0)).tolerance();
        assert!(t.x.is_finite() && !t.y.is_nan());
    }

    #[test]
    fn transformed_covariance_follows_the_jacobian() {
        let cov = Matrix2::identity();
        let bc = BoundaryCheck::covariance(cov, 1.0).unwrap();
        // Stretch the first axis by 10: one sigma becomes 10 units.
        let stretched = bc.transformed(&Matrix2::new(10.0, 0.0, 0.0, 1.0));
        let (min, max) = (Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(stretched.is_inside_rectangle(Point::new(9.0, 0.0), min, max));
        assert!(!bc.is_inside_rectangle(Point::new(9.0, 0.0), min, max));
    }
}
