// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fiducial Volume: 3D bounds assembled from surface bounds.
//!
//! A volume bounds type is a validated parameter array that can
//!
//! - test whether a point in the volume frame is inside, within an absolute tolerance,
//! - decompose itself into an ordered list of [`BoundarySurface`]s, each a
//!   [`SurfaceBounds`](fiducial_surface::SurfaceBounds) plus the placement of
//!   its local frame, with the local z axis as outward normal,
//! - compute an axis-aligned [`Aabb3D`] under an optional placement.
//!
//! The face order is fixed per volume family and documented on
//! [`CuboidFace`] and [`DoubleTrapezoidFace`].
//!
//! # Example
//!
//! ```rust
//! use fiducial_volume::{DoubleTrapezoidFace, DoubleTrapezoidVolumeBounds};
//! use nalgebra::{Isometry3, Point3};
//!
//! let volume = DoubleTrapezoidVolumeBounds::new(1.0, 4.0, 2.0, 2.0, 3.0, 5.0).unwrap();
//! assert!(volume.inside(&Point3::new(0.0, 5.0, 4.0), 0.0));
//!
//! let faces = volume.decompose_to_surfaces(&Isometry3::identity()).unwrap();
//! assert_eq!(faces.len(), DoubleTrapezoidFace::ALL.len());
//! let top = &faces[DoubleTrapezoidFace::PositiveZ as usize];
//! assert_eq!(top.center(), Point3::new(0.0, 0.0, 5.0));
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize volume bounds as their parameter arrays.

pub mod aabb;
pub mod bounds;
pub mod cuboid;
pub mod double_trapezoid;
pub mod face;
mod validate;

pub use aabb::Aabb3D;
pub use bounds::{VolumeBounds, VolumeBoundsType};
pub use cuboid::{CuboidFace, CuboidValue, CuboidVolumeBounds};
pub use double_trapezoid::{DoubleTrapezoidFace, DoubleTrapezoidValue, DoubleTrapezoidVolumeBounds};
pub use face::BoundarySurface;
