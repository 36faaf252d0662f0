// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annulus sector on a disc.

use core::f64::consts::PI;
use core::fmt;

use kurbo::Point;

use crate::check::BoundaryCheck;
use crate::error::{BoundsError, check_finite, check_length, check_ordered, log_rejection};
use crate::periodic::radian_sym;
use crate::rectangle::RectangleBounds;
use crate::types::BoundsType;
use crate::vertices::ellipse_vertices;

const SHAPE: &str = "RadialBounds";

/// Index into the [`RadialBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RadialValue {
    /// Inner radius.
    MinR = 0,
    /// Outer radius.
    MaxR = 1,
    /// Center of the phi sector.
    AveragePhi = 2,
    /// Half opening angle of the phi sector.
    HalfPhiSector = 3,
}

/// Annulus `[min_r, max_r]` restricted to `avg_phi ± half_phi`.
///
/// Query points are polar: `x` is the radius and `y` the azimuth.
/// [`vertices`](Self::vertices) returns Cartesian points.
///
/// ```
/// use core::f64::consts::{FRAC_PI_2, PI};
/// use fiducial_surface::{BoundaryCheck, RadialBounds};
/// use kurbo::Point;
///
/// let half_disc = RadialBounds::new(5.0, 15.0, 0.0, FRAC_PI_2).unwrap();
/// assert!(!half_disc.inside(Point::new(10.0, PI), &BoundaryCheck::exact()));
/// assert!(RadialBounds::ring(5.0, 15.0).unwrap().covers_full_azimuth());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
pub struct RadialBounds {
    values: [f64; 4],
    bounding_box: RectangleBounds,
}

impl RadialBounds {
    /// Annulus sector; `avg_phi` is normalized to `[-π, π)`.
    ///
    /// Fails on negative radii, `min_r > max_r`, or `half_phi` outside `[0, π]`.
    pub fn new(min_r: f64, max_r: f64, avg_phi: f64, half_phi: f64) -> Result<Self, BoundsError> {
        Self::from_values([min_r, max_r, avg_phi, half_phi])
    }

    /// Full ring.
    pub fn ring(min_r: f64, max_r: f64) -> Result<Self, BoundsError> {
        Self::new(min_r, max_r, 0.0, PI)
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 4]) -> Result<Self, BoundsError> {
        Self::validate(values).inspect_err(log_rejection)?;
        let [min_r, max_r, avg_phi, half_phi] = values;
        let mut bounds = Self {
            values: [min_r, max_r, radian_sym(avg_phi), half_phi],
            bounding_box: RectangleBounds::centered(0.0, 0.0),
        };
        bounds.bounding_box = RectangleBounds::enclosing(&bounds.vertices(1));
        Ok(bounds)
    }

    fn validate(values: [f64; 4]) -> Result<(), BoundsError> {
        let [min_r, max_r, avg_phi, half_phi] = values;
        check_length(SHAPE, "min_r", min_r)?;
        check_length(SHAPE, "max_r", max_r)?;
        check_ordered(SHAPE, "r", min_r, max_r)?;
        check_finite(SHAPE, "avg_phi", avg_phi)?;
        check_finite(SHAPE, "half_phi", half_phi)?;
        if !(0.0..=PI).contains(&half_phi) {
            return Err(BoundsError::PhiSectorOutOfRange {
                shape: SHAPE,
                value: half_phi,
            });
        }
        Ok(())
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::Disc
    }

    /// Parameters in canonical order `[min_r, max_r, avg_phi, half_phi]`.
    pub fn values(&self) -> [f64; 4] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: RadialValue) -> f64 {
        self.values[value as usize]
    }

    /// Inner radius.
    pub fn r_min(&self) -> f64 {
        self.values[0]
    }

    /// Outer radius.
    pub fn r_max(&self) -> f64 {
        self.values[1]
    }

    /// Normalized center of the phi sector.
    pub fn average_phi(&self) -> f64 {
        self.values[2]
    }

    /// Half opening angle.
    pub fn half_phi_sector(&self) -> f64 {
        self.values[3]
    }

    /// True exactly when the half opening angle is π.
    pub fn covers_full_azimuth(&self) -> bool {
        self.half_phi_sector() == PI
    }

    /// Whether radius `r` lies between the radii, widened by `tolerance`.
    pub fn inside_radial_bounds(&self, r: f64, tolerance: f64) -> bool {
        r + tolerance > self.r_min() && r - tolerance < self.r_max()
    }

    /// Representative radius for binning.
    pub fn binning_value_r(&self) -> f64 {
        0.5 * (self.r_min() + self.r_max())
    }

    /// Representative azimuth for binning.
    pub fn binning_value_phi(&self) -> f64 {
        self.average_phi()
    }

    /// Whether the polar `point` is inside under `check`.
    ///
    /// The check sees `(r, phi - avg_phi)` against the box
    /// `[min_r, max_r] × [-half_phi, half_phi]`.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        let half_phi = self.half_phi_sector();
        check.is_inside_rectangle(
            self.shifted(point),
            Point::new(self.r_min(), -half_phi),
            Point::new(self.r_max(), half_phi),
        )
    }

    /// Signed distance in `(r, phi)` space, negative inside.
    ///
    /// A full ring has no phi edges, so only the radial distance counts.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        let half_phi = if self.covers_full_azimuth() {
            f64::INFINITY
        } else {
            self.half_phi_sector()
        };
        BoundaryCheck::exact().distance_to_rectangle(
            self.shifted(point),
            Point::new(self.r_min(), -half_phi),
            Point::new(self.r_max(), half_phi),
        )
    }

    /// Counter-clockwise Cartesian outline with `segments` pieces per full
    /// turn on each arc.
    ///
    /// The outer arc runs from `avg_phi - half_phi` to `avg_phi + half_phi`,
    /// then the inner arc back. A sector without a hole closes through the
    /// center. A full ring is cut open at `avg_phi - π`.
    pub fn vertices(&self, segments: u32) -> Vec<Point> {
        let (r_min, r_max) = (self.r_min(), self.r_max());
        ellipse_vertices(
            r_min,
            r_min,
            r_max,
            r_max,
            self.average_phi(),
            self.half_phi_sector(),
            segments,
        )
    }

    /// Cached enclosing rectangle of the outline.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }

    fn shifted(&self, point: Point) -> Point {
        Point::new(point.x, radian_sym(point.y - self.average_phi()))
    }
}

impl TryFrom<[f64; 4]> for RadialBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 4]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<RadialBounds> for [f64; 4] {
    fn from(bounds: RadialBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for RadialBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [min_r, max_r, avg_phi, half_phi] = self.values;
        write!(
            f,
            "RadialBounds: (min_r, max_r, avg_phi, half_phi) = \
             ({min_r:.7}, {max_r:.7}, {avg_phi:.7}, {half_phi:.7})"
        )
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;

    #[test]
    fn sector_coverage() {
        let full = RadialBounds::new(5.0, 15.0, 0.0, PI).unwrap();
        assert!(full.covers_full_azimuth());
        assert!(full.inside(Point::new(10.0, PI), &BoundaryCheck::exact()));

        let half = RadialBounds::new(5.0, 15.0, 0.0, FRAC_PI_2).unwrap();
        assert!(!half.covers_full_azimuth());
        assert!(!half.inside(Point::new(10.0, PI), &BoundaryCheck::exact()));
        assert!(half.inside(Point::new(10.0, 0.3), &BoundaryCheck::exact()));
        assert!(!half.inside(Point::new(16.0, 0.3), &BoundaryCheck::exact()));
    }

    #[test]
    fn sector_wraps_across_pi() {
        let r = RadialBounds::new(1.0, 2.0, PI - 0.1, 0.2).unwrap();
        let exact = BoundaryCheck::exact();
        assert!(r.inside(Point::new(1.5, -PI + 0.05), &exact));
        assert!(r.inside(Point::new(1.5, PI - 0.25), &exact));
        assert!(!r.inside(Point::new(1.5, -PI + 0.15), &exact));
    }

    #[test]
    fn average_phi_is_normalized() {
        let r = RadialBounds::new(1.0, 2.0, 3.0 * PI, 0.5).unwrap();
        assert!((r.average_phi() + PI).abs() < 1e-12);
        assert_eq!(RadialBounds::from_values(r.values()).unwrap(), r);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(matches!(
            RadialBounds::new(15.0, 5.0, 0.0, 1.0),
            Err(BoundsError::InvertedRange { axis: "r", .. })
        ));
        assert!(RadialBounds::new(-1.0, 5.0, 0.0, 1.0).is_err());
        assert!(matches!(
            RadialBounds::new(1.0, 5.0, 0.0, 3.5),
            Err(BoundsError::PhiSectorOutOfRange { .. })
        ));
    }

    #[test]
    fn distance_is_signed() {
        let ring = RadialBounds::ring(5.0, 15.0).unwrap();
        assert!((ring.distance_to_boundary(Point::new(20.0, 1.0)) - 5.0).abs() < 1e-12);
        assert!((ring.distance_to_boundary(Point::new(10.0, 3.1)) + 5.0).abs() < 1e-12);
        assert!((ring.distance_to_boundary(Point::new(3.0, -2.0)) - 2.0).abs() < 1e-12);

        let sector = RadialBounds::new(5.0, 15.0, 0.0, FRAC_PI_4).unwrap();
        assert!(sector.distance_to_boundary(Point::new(10.0, 1.0)) > 0.0);
        assert!(sector.distance_to_boundary(Point::new(10.0, 0.0)) < 0.0);
    }

    #[test]
    fn disc_extras() {
        let r = RadialBounds::new(2.0, 6.0, 0.5, 1.0).unwrap();
        assert!(r.inside_radial_bounds(1.95, 0.1));
        assert!(!r.inside_radial_bounds(1.85, 0.1));
        assert!(!r.inside_radial_bounds(6.2, 0.1));
        assert_eq!(r.binning_value_r(), 4.0);
        assert_eq!(r.binning_value_phi(), 0.5);
        assert_eq!(r.get(RadialValue::HalfPhiSector), 1.0);
    }

    #[test]
    fn sector_without_hole_includes_the_center() {
        let r = RadialBounds::new(0.0, 3.0, 0.0, FRAC_PI_4).unwrap();
        let v = r.vertices(16);
        assert_eq!(v.last(), Some(&Point::ORIGIN));
        let bb = r.bounding_box();
        assert!((bb.max().x - 3.0).abs() < 1e-12);
        assert_eq!(bb.min().x, 0.0);
        assert!((bb.max().y - 3.0 * FRAC_PI_4.sin()).abs() < 1e-12);
    }

    #[test]
    fn ring_bounding_box_is_the_outer_square() {
        let r = RadialBounds::ring(1.0, 4.0).unwrap();
        let bb = r.bounding_box();
        assert!((bb.min().x + 4.0).abs() < 1e-12 && (bb.max().y - 4.0).abs() < 1e-12);
        // Outer and inner arcs each close on themselves.
        let v = r.vertices(8);
        assert_eq!(v.len(), 2 * 9);
    }

    #[test]
    fn zero_opening_sector_keeps_its_radial_extent() {
        let r = RadialBounds::new(5.0, 15.0, 0.3, 0.0).unwrap();
        assert_eq!(r.vertices(16).len(), 2);
        let bb = r.bounding_box();
        let (sin, cos) = 0.3_f64.sin_cos();
        for radius in [5.0, 10.0, 15.0] {
            let p = Point::new(radius * cos, radius * sin);
            assert!(p.x >= bb.min().x - 1e-12 && p.x <= bb.max().x + 1e-12);
            assert!(p.y >= bb.min().y - 1e-12 && p.y <= bb.max().y + 1e-12);
        }
        assert!(bb.max().x > 14.0);
    }

    #[test]
    fn tiny_inner_radius_is_a_hole_in_the_outline() {
        let r = RadialBounds::new(5e-5, 3.0, 0.0, FRAC_PI_4).unwrap();
        assert!(!r.inside(Point::new(1e-5, 0.0), &BoundaryCheck::exact()));
        let v = r.vertices(16);
        assert!(!v.contains(&Point::ORIGIN));
        assert!(v.iter().any(|p| (p.to_vec2().hypot() - 5e-5).abs() < 1e-12));
    }
}
