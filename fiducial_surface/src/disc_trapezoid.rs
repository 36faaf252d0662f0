// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trapezoid placed on a disc, as used for wedge-shaped disc modules.

use core::fmt;

use kurbo::{Point, Vec2};
use nalgebra::Matrix2;

use crate::check::BoundaryCheck;
use crate::error::{BoundsError, check_finite, check_length, check_ordered, log_rejection};
use crate::periodic::radian_sym;
use crate::rectangle::RectangleBounds;
use crate::types::{BoundsType, square};

const SHAPE: &str = "DiscTrapezoidBounds";

/// Index into the [`DiscTrapezoidBounds`] parameter array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiscTrapezoidValue {
    /// Half-width of the edge at the inner radius.
    HalfLengthXMinR = 0,
    /// Half-width of the edge at the outer radius.
    HalfLengthXMaxR = 1,
    /// Inner radius.
    MinR = 2,
    /// Outer radius.
    MaxR = 3,
    /// Azimuth of the trapezoid axis.
    AveragePhi = 4,
    /// Rotation of the trapezoid about the midpoint of its axis.
    Stereo = 5,
}

/// Symmetric trapezoid on a disc, its parallel edges perpendicular to the
/// axis at `avg_phi`.
///
/// Query points are polar (`x` is the radius, `y` the azimuth) and are mapped
/// into a Cartesian frame centered on the disc, with `y` pointing outward
/// along `avg_phi`. In that frame the short edge lies at `y = min_r` and the
/// long edge at `y = max_r`, and the whole trapezoid is rotated by `stereo`
/// about the midpoint of its axis.
///
/// The derived [`r_center`](Self::r_center), [`half_length_y`](Self::half_length_y)
/// and [`half_phi_sector`](Self::half_phi_sector) describe the chords of length
/// `2 * half_x` on the two radii.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 6]", into = "[f64; 6]")
)]
pub struct DiscTrapezoidBounds {
    values: [f64; 6],
    bounding_box: RectangleBounds,
}

impl DiscTrapezoidBounds {
    /// Disc trapezoid; `avg_phi` is normalized to `[-π, π)`.
    ///
    /// Each half-width must fit its radius, and the chord at the inner
    /// radius must lie closer to the center than the one at the outer radius.
    pub fn new(
        half_x_min_r: f64,
        half_x_max_r: f64,
        min_r: f64,
        max_r: f64,
        avg_phi: f64,
        stereo: f64,
    ) -> Result<Self, BoundsError> {
        Self::from_values([half_x_min_r, half_x_max_r, min_r, max_r, avg_phi, stereo])
    }

    /// Rebuild from the array returned by [`values`](Self::values).
    pub fn from_values(values: [f64; 6]) -> Result<Self, BoundsError> {
        Self::validate(values).inspect_err(log_rejection)?;
        let [hx_min, hx_max, min_r, max_r, avg_phi, stereo] = values;
        let mut bounds = Self {
            values: [hx_min, hx_max, min_r, max_r, radian_sym(avg_phi), stereo],
            bounding_box: RectangleBounds::centered(0.0, 0.0),
        };
        bounds.bounding_box = RectangleBounds::enclosing(&bounds.vertices(1));
        Ok(bounds)
    }

    fn validate(values: [f64; 6]) -> Result<(), BoundsError> {
        let [hx_min, hx_max, min_r, max_r, avg_phi, stereo] = values;
        check_length(SHAPE, "half_x_min_r", hx_min)?;
        check_length(SHAPE, "half_x_max_r", hx_max)?;
        check_length(SHAPE, "min_r", min_r)?;
        check_length(SHAPE, "max_r", max_r)?;
        check_finite(SHAPE, "avg_phi", avg_phi)?;
        check_finite(SHAPE, "stereo", stereo)?;
        check_ordered(SHAPE, "r", min_r, max_r)?;
        for (half_x, r) in [(hx_min, min_r), (hx_max, max_r)] {
            if half_x > r {
                return Err(BoundsError::HalfWidthExceedsRadius { half_x, r });
            }
        }
        check_ordered(
            SHAPE,
            "chord distance",
            chord_distance(min_r, hx_min),
            chord_distance(max_r, hx_max),
        )
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        BoundsType::DiscTrapezoid
    }

    /// Parameters in canonical order
    /// `[half_x_min_r, half_x_max_r, min_r, max_r, avg_phi, stereo]`.
    pub fn values(&self) -> [f64; 6] {
        self.values
    }

    /// Single named parameter.
    pub fn get(&self, value: DiscTrapezoidValue) -> f64 {
        self.values[value as usize]
    }

    /// Half-width at the inner radius.
    pub fn half_length_x_min_r(&self) -> f64 {
        self.values[0]
    }

    /// Half-width at the outer radius.
    pub fn half_length_x_max_r(&self) -> f64 {
        self.values[1]
    }

    /// Inner radius.
    pub fn r_min(&self) -> f64 {
        self.values[2]
    }

    /// Outer radius.
    pub fn r_max(&self) -> f64 {
        self.values[3]
    }

    /// Normalized azimuth of the trapezoid axis.
    pub fn average_phi(&self) -> f64 {
        self.values[4]
    }

    /// Rotation of the local frame.
    pub fn stereo(&self) -> f64 {
        self.values[5]
    }

    /// Distance from the disc center to the trapezoid center.
    pub fn r_center(&self) -> f64 {
        let (inner, outer) = self.chord_distances();
        0.5 * (inner + outer)
    }

    /// Half the distance between the two parallel edges.
    pub fn half_length_y(&self) -> f64 {
        let (inner, outer) = self.chord_distances();
        0.5 * (outer - inner)
    }

    /// Half the azimuthal opening seen from the disc center.
    pub fn half_phi_sector(&self) -> f64 {
        let [hx_min, hx_max, min_r, max_r, _, _] = self.values;
        half_angle(hx_min, min_r).max(half_angle(hx_max, max_r))
    }

    /// A trapezoid never covers the full azimuth.
    pub fn covers_full_azimuth(&self) -> bool {
        false
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

    /// Map a polar point into the trapezoid's Cartesian frame.
    pub fn to_local_cartesian(&self, point: Point) -> Point {
        let (r, delta) = (point.x, point.y - self.average_phi());
        let pivot = self.pivot();
        let x = -r * delta.sin();
        let y = r * delta.cos() - pivot;
        let (sin_s, cos_s) = self.stereo().sin_cos();
        Point::new(x * cos_s + y * sin_s, -x * sin_s + y * cos_s + pivot)
    }

    /// Jacobian of [`to_local_cartesian`](Self::to_local_cartesian) with
    /// respect to `(r, phi)`.
    pub fn jacobian_to_local_cartesian(&self, point: Point) -> Matrix2<f64> {
        let (r, delta) = (point.x, point.y - self.average_phi());
        let (sin_d, cos_d) = delta.sin_cos();
        let (sin_s, cos_s) = self.stereo().sin_cos();
        let unrotated = Matrix2::new(-sin_d, -r * cos_d, cos_d, -r * sin_d);
        Matrix2::new(cos_s, sin_s, -sin_s, cos_s) * unrotated
    }

    /// Whether the polar `point` is inside under `check`.
    ///
    /// The check is carried into the Cartesian frame through the Jacobian,
    /// so its tolerances are given in `(r, phi)`.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        let local = self.to_local_cartesian(point);
        check
            .transformed(&self.jacobian_to_local_cartesian(point))
            .is_inside_polygon(local, &self.local_corners())
    }

    /// Signed Euclidean distance to the outline, negative inside.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        BoundaryCheck::exact()
            .distance_to_polygon(self.to_local_cartesian(point), &self.local_corners())
    }

    /// The four Cartesian corners counter-clockwise, starting at the inner
    /// edge. The segment count is ignored.
    pub fn vertices(&self, _segments: u32) -> Vec<Point> {
        let (sin_s, cos_s) = self.stereo().sin_cos();
        let (sin_a, cos_a) = self.average_phi().sin_cos();
        let normal = Vec2::new(sin_a, -cos_a);
        let radial = Vec2::new(cos_a, sin_a);
        let pivot = self.pivot();
        self.local_corners()
            .into_iter()
            .map(|c| {
                let y = c.y - pivot;
                let x = c.x * cos_s - y * sin_s;
                let y = c.x * sin_s + y * cos_s + pivot;
                (normal * x + radial * y).to_point()
            })
            .collect()
    }

    /// Cached enclosing rectangle of the corners.
    pub fn bounding_box(&self) -> &RectangleBounds {
        &self.bounding_box
    }

    fn chord_distances(&self) -> (f64, f64) {
        let [hx_min, hx_max, min_r, max_r, _, _] = self.values;
        (chord_distance(min_r, hx_min), chord_distance(max_r, hx_max))
    }

    /// Stereo rotations act about this point on the local `y` axis.
    fn pivot(&self) -> f64 {
        self.binning_value_r()
    }

    fn local_corners(&self) -> [Point; 4] {
        let [hx_min, hx_max, min_r, max_r, _, _] = self.values;
        [
            Point::new(-hx_min, min_r),
            Point::new(hx_min, min_r),
            Point::new(hx_max, max_r),
            Point::new(-hx_max, max_r),
        ]
    }
}

/// Distance from the center to a chord of half-length `half_x` on radius `r`.
fn chord_distance(r: f64, half_x: f64) -> f64 {
    (square(r) - square(half_x)).max(0.0).sqrt()
}

fn half_angle(half_x: f64, r: f64) -> f64 {
    if r > 0.0 { (half_x / r).asin() } else { 0.0 }
}

impl TryFrom<[f64; 6]> for DiscTrapezoidBounds {
    type Error = BoundsError;

    fn try_from(values: [f64; 6]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<DiscTrapezoidBounds> for [f64; 6] {
    fn from(bounds: DiscTrapezoidBounds) -> Self {
        bounds.values
    }
}

impl fmt::Display for DiscTrapezoidBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [hx_min, hx_max, min_r, max_r, avg_phi, stereo] = self.values;
        write!(
            f,
            "DiscTrapezoidBounds: (half_x_min_r, half_x_max_r, min_r, max_r, avg_phi, stereo) = \
             ({hx_min:.7}, {hx_max:.7}, {min_r:.7}, {max_r:.7}, {avg_phi:.7}, {stereo:.7})"
        )
    }
}
