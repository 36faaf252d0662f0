// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessellation helpers for curved boundaries.
//!
//! Arcs are sampled with a resolution given per full turn, so an arc covering
//! a quarter of the circle gets a quarter of the requested segments. Phi
//! ranges are always split at multiples of π/2 so the axis extrema of an
//! ellipse are exact vertices.
//!
//! Arcs are sampled by polar angle, not by the parametric angle of the
//! ellipse, so the straight edges of a sector meet the arc at the same phi
//! that containment uses.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::Point;

use crate::types::square;

/// Angles closer than this are considered the same split point.
const PHI_MERGE_TOLERANCE: f64 = 1e-6;

/// Split points for the phi range `[phi_min, phi_max]`.
///
/// The result is sorted, starts with `phi_min`, ends with `phi_max`, and
/// contains every multiple of π/2 strictly inside the range as well as every
/// reference angle strictly inside that is not already present.
pub fn phi_segments(phi_min: f64, phi_max: f64, references: &[f64]) -> Vec<f64> {
    let mut segments = vec![phi_min];
    let is_interior =
        |phi: f64| phi > phi_min + PHI_MERGE_TOLERANCE && phi < phi_max - PHI_MERGE_TOLERANCE;

    let mut k = (phi_min / FRAC_PI_2).ceil();
    while k * FRAC_PI_2 < phi_max {
        let phi = k * FRAC_PI_2;
        if is_interior(phi) {
            segments.push(phi);
        }
        k += 1.0;
    }
    for &phi in references {
        let known = segments
            .iter()
            .any(|s| (s - phi).abs() < PHI_MERGE_TOLERANCE);
        if is_interior(phi) && !known {
            segments.push(phi);
        }
    }
    if phi_max > phi_min {
        segments.push(phi_max);
    }
    segments.sort_by(f64::total_cmp);
    segments
}

/// Distance from the centre to the ellipse with half axes `rx`, `ry` along
/// the ray at polar angle `phi`; zero for a degenerate ellipse.
pub fn polar_radius(rx: f64, ry: f64, phi: f64) -> f64 {
    if rx <= 0.0 || ry <= 0.0 {
        return 0.0;
    }
    1.0 / (square(phi.cos() / rx) + square(phi.sin() / ry)).sqrt()
}

/// Append samples of the elliptical arc from `phi_start` to `phi_end`.
///
/// `segments_per_turn` is the resolution for a full turn; every arc gets at
/// least one segment. The end point is only emitted when `include_end` is
/// set, so consecutive arcs can be chained without duplicates.
pub fn arc_segment(
    out: &mut Vec<Point>,
    radius_x: f64,
    radius_y: f64,
    phi_start: f64,
    phi_end: f64,
    segments_per_turn: u32,
    include_end: bool,
) {
    let delta = phi_end - phi_start;
    let wanted = (delta.abs() / TAU * f64::from(segments_per_turn)).floor();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "segment counts are small and non-negative"
    )]
    let count = (wanted as u32).max(1);
    let step = delta / f64::from(count);
    let samples = if include_end { count + 1 } else { count };
    out.extend((0..samples).map(|i| {
        let phi = phi_start + f64::from(i) * step;
        let r = polar_radius(radius_x, radius_y, phi);
        Point::new(r * phi.cos(), r * phi.sin())
    }));
}

/// Counter-clockwise outline of an elliptical annulus sector.
///
/// Walks the outer arc from `avg_phi - half_phi` to `avg_phi + half_phi`,
/// then the inner arc back. Without an inner arc a sector closes through the
/// origin. A full ring is cut open at `avg_phi - π`, yielding a single
/// closed keyhole outline. A zero opening angle degenerates to the radial
/// segment at `avg_phi`.
pub fn ellipse_vertices(
    inner_rx: f64,
    inner_ry: f64,
    outer_rx: f64,
    outer_ry: f64,
    avg_phi: f64,
    half_phi: f64,
    segments_per_turn: u32,
) -> Vec<Point> {
    // Same threshold as containment: any positive inner axis opens a hole.
    let has_inner = inner_rx > 0.0 && inner_ry > 0.0;
    if half_phi <= 0.0 {
        let (sin, cos) = avg_phi.sin_cos();
        let outer = polar_radius(outer_rx, outer_ry, avg_phi);
        let inner = if has_inner {
            polar_radius(inner_rx, inner_ry, avg_phi)
        } else {
            0.0
        };
        return vec![
            Point::new(outer * cos, outer * sin),
            Point::new(inner * cos, inner * sin),
        ];
    }
    let full = half_phi >= PI;
    let phis = phi_segments(avg_phi - half_phi, avg_phi + half_phi, &[avg_phi]);
    let last = phis.len().saturating_sub(2);

    let mut out = Vec::new();
    for (i, pair) in phis.windows(2).enumerate() {
        // A full disc without a hole must not repeat its first point.
        let close = i == last && (has_inner || !full);
        arc_segment(
            &mut out,
            outer_rx,
            outer_ry,
            pair[0],
            pair[1],
            segments_per_turn,
            close,
        );
    }
    if has_inner {
        for (i, pair) in phis.windows(2).rev().enumerate() {
            arc_segment(
                &mut out,
                inner_rx,
                inner_ry,
                pair[1],
                pair[0],
                segments_per_turn,
                i == last,
            );
        }
    } else if !full {
        out.push(Point::ORIGIN);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn segments_split_at_quadrants() {
        let s = phi_segments(-PI, PI, &[]);
        assert_eq!(s.len(), 5);
        assert!((s[1] + FRAC_PI_2).abs() < EPS);
        assert!(s[2].abs() < EPS);
        assert!((s[3] - FRAC_PI_2).abs() < EPS);

        let s = phi_segments(0.1, 0.2, &[]);
        assert_eq!(s, vec![0.1, 0.2]);
    }

    #[test]
    fn references_are_merged_once() {
        let s = phi_segments(-1.0, 1.0, &[0.0, 0.5, 0.5 + 1e-9, 3.0]);
        assert_eq!(s, vec![-1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn arc_resolution_is_per_turn() {
        let mut out = Vec::new();
        arc_segment(&mut out, 1.0, 1.0, 0.0, FRAC_PI_2, 16, false);
        assert_eq!(out.len(), 4);
        out.clear();
        arc_segment(&mut out, 1.0, 1.0, 0.0, FRAC_PI_2, 1, true);
        assert_eq!(out.len(), 2);
        assert!((out[1].x).abs() < EPS && (out[1].y - 1.0).abs() < EPS);
    }

    #[test]
    fn sector_without_hole_closes_at_origin() {
        let v = ellipse_vertices(0.0, 0.0, 2.0, 1.0, 0.0, FRAC_PI_2, 4);
        assert_eq!(*v.last().unwrap(), Point::ORIGIN);
        // Quadrant split at 0 keeps the x extremum exact.
        assert!(v.iter().any(|p| (p.x - 2.0).abs() < EPS && p.y.abs() < EPS));
    }

    #[test]
    fn full_disc_does_not_repeat_points() {
        let v = ellipse_vertices(0.0, 0.0, 1.0, 1.0, 0.0, PI, 8);
        assert_eq!(v.len(), 8);
        for (i, a) in v.iter().enumerate() {
            for b in &v[i + 1..] {
                assert!((*a - *b).hypot() > 1e-6);
            }
        }
    }

    #[test]
    fn elliptical_arc_follows_the_polar_angle() {
        let mut out = Vec::new();
        arc_segment(&mut out, 2.0, 1.0, 0.0, FRAC_PI_2, 16, true);
        assert_eq!(out.len(), 5);
        for p in &out {
            let phi = p.y.atan2(p.x);
            assert!((p.to_vec2().hypot() - polar_radius(2.0, 1.0, phi)).abs() < EPS);
            assert!((square(p.x / 2.0) + square(p.y) - 1.0).abs() < 1e-9);
        }
        // Second sample sits at polar angle π/8, not at parameter π/8.
        let phi = out[1].y.atan2(out[1].x);
        assert!((phi - FRAC_PI_2 / 4.0).abs() < EPS);
    }

    #[test]
    fn zero_opening_is_a_radial_segment() {
        let v = ellipse_vertices(1.0, 1.0, 3.0, 3.0, FRAC_PI_2, 0.0, 16);
        assert_eq!(v.len(), 2);
        assert!(v[0].x.abs() < EPS && (v[0].y - 3.0).abs() < EPS);
        assert!(v[1].x.abs() < EPS && (v[1].y - 1.0).abs() < EPS);

        let v = ellipse_vertices(0.0, 0.0, 3.0, 3.0, 0.0, 0.0, 16);
        assert_eq!(v.len(), 2);
        assert!((v[0] - Point::new(3.0, 0.0)).hypot() < EPS);
        assert_eq!(v[1], Point::ORIGIN);
    }

    #[test]
    fn tiny_inner_radius_keeps_the_inner_arc() {
        let v = ellipse_vertices(5e-5, 5e-5, 3.0, 3.0, 0.0, FRAC_PI_2 / 2.0, 16);
        assert!(!v.contains(&Point::ORIGIN));
        let inner = v.iter().filter(|p| p.to_vec2().hypot() < 1e-4).count();
        assert!(inner >= 2);
    }

    #[test]
    fn ring_is_counter_clockwise() {
        let v = ellipse_vertices(1.0, 1.0, 3.0, 3.0, 0.3, 1.0, 24);
        let area: f64 = v
            .iter()
            .zip(v.iter().cycle().skip(1))
            .map(|(a, b)| a.to_vec2().cross(b.to_vec2()))
            .sum();
        assert!(area > 0.0);
    }
}
