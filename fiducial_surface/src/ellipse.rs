// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical annulus sector.

use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;

use kurbo::Point;

use crate::check::{BoundaryCheck, CheckKind};
use crate::error::{BoundsError, check_finite, check_length, check_ordered, log_rejection};
use crate::periodic::radian_sym;
use crate::rectangle::RectangleBounds;
use crate::types::{BoundsType, square};
use crate::vertices::ellipse_vertices;

const SHAPE: &str = "EllipseBounds";

/// Index into the [`EllipseBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EllipseValue {
    /// Inner radius along x.
    InnerRx = 0,
    /// Outer radius along x.
    OuterRx = 1,
    /// Inner radius along y.
    InnerRy = 2,
    /// Outer radius along y.
    OuterRy = 3,
    /// Half opening angle of the phi sector.
    HalfPhiSector = 4,
    /// Center of the phi sector.
    AveragePhi = 5,
}

/// Region between two axis-aligned ellipses, optionally cut to a phi sector.
///
/// An inner radius of zero on either axis means there is no hole.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 6]", into = "[f64; 6]")
)]
pub struct EllipseBounds {
    values: [f64; 6],
    bounding_box: RectangleBounds,
}

impl EllipseBounds {
    /// Elliptical annulus sector.
    ///
    /// `avg_phi` must already be normalized to `[-π, π)`, see
    /// [`radian_sym`](crate::radian_sym).
    pub fn new(
        inner_rx: f64,
        outer_rx: f64,
        inner_ry: f64,
        outer_ry: f64,
        half_phi: f64,
        avg_phi: f64,
    ) -> Result<Self, BoundsError> {
        Self::from_values([inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi])
    }

    /// Full elliptical ring.
    pub fn ring(
        inner_rx: f64,
        outer_rx: f64,
        inner_ry: f64,
        outer_ry: f64,
    ) -> Result<Self, BoundsError> {
        Self::new(inner_rx, outer_rx, inner_ry, outer_ry, PI, 0.0)
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 6]) -> Result<Self, BoundsError> {
        Self::validate(values).inspect_err(log_rejection)?;
        let [_, outer_rx, _, outer_ry, _, _] = values;
        Ok(Self {
            values,
            bounding_box: RectangleBounds::centered(outer_rx, outer_ry),
        })
    }

    fn validate(values: [f64; 6]) -> Result<(), BoundsError> {
        let [inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi] = values;
        check_length(SHAPE, "inner_rx", inner_rx)?;
        check_length(SHAPE, "outer_rx", outer_rx)?;
        check_length(SHAPE, "inner_ry", inner_ry)?;
        check_length(SHAPE, "outer_ry", outer_ry)?;
        check_ordered(SHAPE, "rx", inner_rx, outer_rx)?;
        check_ordered(SHAPE, "ry", inner_ry, outer_ry)?;
        check_finite(SHAPE, "half_phi", half_phi)?;
        if !(0.0..=PI).contains(&half_phi) {
            return Err(BoundsError::PhiSectorOutOfRange {
                shape: SHAPE,
                value: half_phi,
            });
        }
        check_finite(SHAPE, "avg_phi", avg_phi)?;
        if radian_sym(avg_phi) != avg_phi {
            return Err(BoundsError::PhiNotNormalized {
                shape: SHAPE,
                value: avg_phi,
            });
        }
        Ok(())
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::Ellipse
    }

    /// Parameters in canonical order
    /// `[inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi]`.
    pub fn values(&self) -> [f64; 6] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: EllipseValue) -> f64 {
        self.values[value as usize]
    }

    /// Whether the sector spans the full azimuth.
    pub fn covers_full_azimuth(&self) -> bool {
        self.get(EllipseValue::HalfPhiSector) >= PI
    }

    /// Whether `point` is inside under `check`.
    ///
    /// Only absolute tolerances are meaningful here: the first tolerance
    /// widens the radii, the second the phi sector. A covariance check is
    /// evaluated as an exact one.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        if check.kind() == CheckKind::None {
            return true;
        }
        let tol = check.tolerance();
        let [inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi] = self.values;

        if (point.x != 0.0 || point.y != 0.0) && !self.covers_full_azimuth() {
            let dphi = radian_sym(point.y.atan2(point.x) - avg_phi);
            if dphi.abs() > half_phi + tol.y {
                return false;
            }
        }
        let inside_outer = quadratic(point, outer_rx + tol.x, outer_ry + tol.x) <= 1.0;
        let outside_inner = inner_rx <= tol.x
            || inner_ry <= tol.x
            || quadratic(point, inner_rx - tol.x, inner_ry - tol.x) >= 1.0;
        inside_outer && outside_inner
    }

    /// Signed distance to the outline, negative inside.
    ///
    /// Radial parts are measured along the ray through the origin, so the
    /// value is exact for circular shapes and an approximation otherwise.
    /// Its sign always agrees with an exact [`inside`](Self::inside).
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        let [inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi] = self.values;
        let r = point.to_vec2().hypot();
        if r == 0.0 {
            return inner_rx.min(inner_ry);
        }

        let d_outer = r * (1.0 - 1.0 / quadratic(point, outer_rx, outer_ry).sqrt());
        let d_inner = if inner_rx > 0.0 && inner_ry > 0.0 {
            r * (1.0 / quadratic(point, inner_rx, inner_ry).sqrt() - 1.0)
        } else {
            f64::NEG_INFINITY
        };
        let radial = d_outer.max(d_inner);

        let d_phi = if self.covers_full_azimuth() {
            f64::NEG_INFINITY
        } else {
            let excess = radian_sym(point.y.atan2(point.x) - avg_phi).abs() - half_phi;
            if excess.abs() >= FRAC_PI_2 {
                r.copysign(excess)
            } else {
                r * excess.sin()
            }
        };

        if d_phi > 0.0 && radial > 0.0 {
            d_phi.hypot(radial)
        } else {
            d_phi.max(radial)
        }
    }

    /// Counter-clockwise outline with `segments` straight pieces per full
    /// turn on each arc. Sector edges and axis extrema are always vertices.
    pub fn vertices(&self, segments: u32) -> Vec<Point> {
        let [inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi] = self.values;
        ellipse_vertices(
            inner_rx, inner_ry, outer_rx, outer_ry, avg_phi, half_phi, segments,
        )
    }

    /// Cached enclosing rectangle.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }
}

/// `(x / rx)² + (y / ry)²`, with a zero coordinate contributing nothing even
/// on a collapsed axis.
fn quadratic(point: Point, rx: f64, ry: f64) -> f64 {
    let term = |v: f64, r: f64| if v == 0.0 { 0.0 } else { square(v / r) };
    term(point.x, rx) + term(point.y, ry)
}

impl TryFrom<[f64; 6]> for EllipseBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 6]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<EllipseBounds> for [f64; 6] {
    fn from(bounds: EllipseBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for EllipseBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi] = self.values;
        write!(
            f,
            "EllipseBounds: (inner_rx, outer_rx, inner_ry, outer_ry, half_phi, avg_phi) = \
             ({inner_rx:.7}, {outer_rx:.7}, {inner_ry:.7}, {outer_ry:.7}, {half_phi:.7}, {avg_phi:.7})"
        )
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_4;

    use super::*;

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(matches!(
            EllipseBounds::new(10.0, 15.0, 5.0, 8.0, 4.0, 0.0),
            Err(BoundsError::PhiSectorOutOfRange { .. })
        ));
        assert!(matches!(
            EllipseBounds::new(10.0, 15.0, 5.0, 8.0, 1.0, 4.0),
            Err(BoundsError::PhiNotNormalized { .. })
        ));
        assert!(matches!(
            EllipseBounds::new(16.0, 15.0, 5.0, 8.0, 1.0, 0.0),
            Err(BoundsError::InvertedRange { axis: "rx", .. })
        ));
        assert!(EllipseBounds::new(-1.0, 15.0, 5.0, 8.0, 1.0, 0.0).is_err());
        assert!(EllipseBounds::new(1.0, 15.0, 5.0, 8.0, -0.1, 0.0).is_err());
    }

    #[test]
    fn ring_membership_and_distance() {
        let e = EllipseBounds::ring(10.0, 15.0, 5.0, 8.0).unwrap();
        let exact = BoundaryCheck::exact();
        assert!(e.inside(Point::new(0.0, 6.0), &exact));
        assert!(!e.inside(Point::new(0.0, 4.0), &exact));
        assert!(!e.inside(Point::new(16.0, 0.0), &exact));
        assert!(e.inside(Point::new(0.0, 4.0), &BoundaryCheck::absolute(1.5, 0.0)));
        assert!((e.distance_to_boundary(Point::new(0.0, 4.0)) - 1.0).abs() < 1e-12);
        assert!((e.distance_to_boundary(Point::new(12.0, 0.0)) + 2.0).abs() < 1e-12);
        assert_eq!(e.distance_to_boundary(Point::ZERO), 5.0);
        assert_eq!(e.bounding_box(), &RectangleBounds::new(15.0, 8.0).unwrap());
    }

    #[test]
    fn sector_excludes_points_beyond_the_edge() {
        let e = EllipseBounds::new(0.0, 10.0, 0.0, 10.0, FRAC_PI_4, 0.0).unwrap();
        let exact = BoundaryCheck::exact();
        assert!(e.inside(Point::new(5.0, 4.0), &exact));
        assert!(!e.inside(Point::new(5.0, 6.0), &exact));
        assert!(e.inside(Point::new(5.0, 6.0), &BoundaryCheck::absolute(0.0, 0.2)));
        assert!(e.inside(Point::ZERO, &exact));
        assert!(e.distance_to_boundary(Point::new(5.0, 6.0)) > 0.0);
        assert!(e.distance_to_boundary(Point::new(-5.0, 0.0)) > 0.0);
    }

    #[test]
    fn disabled_check_accepts_everything() {
        let e = EllipseBounds::ring(1.0, 2.0, 1.0, 2.0).unwrap();
        assert!(e.inside(Point::new(100.0, 0.0), &BoundaryCheck::none()));
    }

    #[test]
    fn sector_vertices_include_the_axis_extremum() {
        let e = EllipseBounds::new(2.0, 4.0, 1.0, 3.0, 1.0, 0.6).unwrap();
        let v = e.vertices(12);
        assert!(v.iter().any(|p| p.x.abs() < 1e-12 && (p.y - 3.0).abs() < 1e-12));
        assert!(v.iter().all(|p| e.inside(*p, &BoundaryCheck::absolute(1e-9, 1e-9))));
    }

    #[test]
    fn zero_opening_sector_has_a_radial_outline() {
        let e = EllipseBounds::new(1.0, 2.0, 1.0, 2.0, 0.0, 0.3).unwrap();
        let v = e.vertices(12);
        assert_eq!(v.len(), 2);
        let (sin, cos) = 0.3_f64.sin_cos();
        assert!((v[0] - Point::new(2.0 * cos, 2.0 * sin)).hypot() < 1e-12);
        assert!((v[1] - Point::new(cos, sin)).hypot() < 1e-12);
    }
}
