// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessellation dump.
//!
//! Print the outline of each surface bounds type at two resolutions, the way
//! an export writer would consume it.
//!
//! Run:
//! - `cargo run -p fiducial_demos --example tessellation_dump`

use core::f64::consts::{FRAC_PI_4, PI};

use fiducial_surface::{
    BoundsError, ConvexPolygonBounds, DiamondBounds, DiscTrapezoidBounds, EllipseBounds,
    RadialBounds, RectangleBounds, SurfaceBounds, TriangleBounds,
};

fn main() -> Result<(), BoundsError> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let shapes: Vec<SurfaceBounds> = vec![
        RectangleBounds::new(10.0, 5.0)?.into(),
        DiamondBounds::new(10.0, 50.0, 30.0, 10.0, 20.0)?.into(),
        EllipseBounds::new(5.0, 15.0, 3.0, 8.0, FRAC_PI_4, 0.0)?.into(),
        RadialBounds::new(5.0, 15.0, 0.0, PI)?.into(),
        RadialBounds::new(0.0, 15.0, 1.0, FRAC_PI_4)?.into(),
        DiscTrapezoidBounds::new(1.0, 5.0, 2.0, 6.0, 0.0, 0.0)?.into(),
        TriangleBounds::from_values([1.0, 1.0, 4.0, 1.0, 4.0, 5.0])?.into(),
        ConvexPolygonBounds::from_values(&[0.0, 0.0, 1.0, 0.0, 0.9, 1.2, 0.5, 1.0])?.into(),
    ];

    for bounds in &shapes {
        println!("{bounds}");
        println!("  bounding box: {}", bounds.bounding_box());
        for segments in [1, 24] {
            let outline = bounds.vertices(segments);
            println!("  {segments:>2} segments/turn -> {} vertices", outline.len());
            for p in &outline {
                println!("    v {:>12.6} {:>12.6}", p.x, p.y);
            }
        }
    }

    // Rejected parameters are reported, and logged at debug level.
    if let Err(err) = DiamondBounds::new(5.0, 3.0, 5.0, 2.0, 2.0) {
        println!("rejected: {err}");
    }
    Ok(())
}
