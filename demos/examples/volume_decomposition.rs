// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Volume decomposition.
//!
//! Place a double trapezoid volume, split it into its boundary faces, and
//! print each face's bounds, center, and outward normal.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p fiducial_demos --example volume_decomposition`

use fiducial_surface::BoundsError;
use fiducial_volume::{DoubleTrapezoidFace, DoubleTrapezoidVolumeBounds};
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BoundsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let volume = DoubleTrapezoidVolumeBounds::new(5.0, 20.0, 10.0, 15.0, 25.0, 30.0)?;
    let placement = Isometry3::from_parts(
        Translation3::new(0.0, 0.0, 500.0),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.25),
    );
    println!("{volume}");

    let faces = volume.decompose_to_surfaces(&placement)?;
    for (kind, face) in DoubleTrapezoidFace::ALL.iter().zip(&faces) {
        let c = face.center();
        let n = face.normal();
        println!(
            "{kind:?}: {}\n  center ({:.3}, {:.3}, {:.3})  normal ({:.3}, {:.3}, {:.3})",
            face.bounds, c.x, c.y, c.z, n.x, n.y, n.z
        );
    }

    let bb = volume.bounding_box(Some(&placement), 1.0);
    println!("bounding box: min {} max {}", bb.min, bb.max);
    Ok(())
}
