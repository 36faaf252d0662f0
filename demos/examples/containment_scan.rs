// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment scan.
//!
//! Rasterize a disc sector and a diamond as ASCII art, comparing an exact
//! check with a tolerant one.
//!
//! Run:
//! - `cargo run -p fiducial_demos --example containment_scan`

use core::f64::consts::FRAC_PI_4;

use fiducial_surface::{BoundaryCheck, BoundsError, DiamondBounds, RadialBounds};
use kurbo::Point;

const COLUMNS: i32 = 64;
const ROWS: i32 = 32;

/// `#` inside exactly, `+` only inside with tolerance, `.` outside.
fn scan(extent: f64, inside: impl Fn(Point, &BoundaryCheck) -> bool, loose: &BoundaryCheck) {
    for row in (0..ROWS).rev() {
        let line: String = (0..COLUMNS)
            .map(|col| {
                let p = Point::new(
                    (f64::from(col) / f64::from(COLUMNS) - 0.5) * 2.0 * extent,
                    (f64::from(row) / f64::from(ROWS) - 0.5) * 2.0 * extent,
                );
                if inside(p, &BoundaryCheck::exact()) {
                    '#'
                } else if inside(p, loose) {
                    '+'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{line}");
    }
}

fn main() -> Result<(), BoundsError> {
    tracing_subscriber::fmt::init();

    let sector = RadialBounds::new(4.0, 14.0, 0.5, FRAC_PI_4)?;
    println!("{sector}");
    // Radial bounds take polar points.
    scan(
        16.0,
        |p, check| {
            let polar = Point::new(p.to_vec2().hypot(), p.y.atan2(p.x));
            sector.inside(polar, check)
        },
        &BoundaryCheck::absolute(1.0, 0.1),
    );

    let diamond = DiamondBounds::new(4.0, 12.0, 6.0, 8.0, 10.0)?;
    println!("{diamond}");
    scan(
        16.0,
        |p, check| diamond.inside(p, check),
        &BoundaryCheck::absolute(1.5, 1.5),
    );
    Ok(())
}
