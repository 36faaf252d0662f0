// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fiducial Surface: immutable 2D bounds for detector surfaces.
//!
//! Each bounds type is a small value holding a fixed-size parameter array,
//! validated once at construction, plus a cached enclosing rectangle. Every
//! type answers the same three questions:
//!
//! - [`inside`](SurfaceBounds::inside): is a local point within the bounds,
//!   under a [`BoundaryCheck`] tolerance policy?
//! - [`distance_to_boundary`](SurfaceBounds::distance_to_boundary): signed
//!   distance to the outline, positive outside.
//! - [`vertices`](SurfaceBounds::vertices): a counter-clockwise polygon
//!   approximating the outline, for export and display.
//!
//! The shapes are [`RectangleBounds`], [`TrapezoidBounds`], [`DiamondBounds`],
//! [`EllipseBounds`], [`RadialBounds`], [`DiscTrapezoidBounds`],
//! [`TriangleBounds`] and [`ConvexPolygonBounds`]; [`SurfaceBounds`] is the
//! closed set of all of them. [`ConvexPolygonBounds`] holds a variable number
//! of corners and is the only shape that is not `Copy`.
//!
//! # Example
//!
//! ```rust
//! use fiducial_surface::{BoundaryCheck, BoundsType, RectangleBounds, SurfaceBounds};
//! use kurbo::Point;
//!
//! let rect = RectangleBounds::new(10.0, 5.0).unwrap();
//! assert!(rect.inside(Point::new(9.0, 4.0), &BoundaryCheck::exact()));
//! assert!(!rect.inside(Point::new(10.0001, 0.0), &BoundaryCheck::exact()));
//! assert!((rect.distance_to_boundary(Point::new(15.0, 0.0)) - 5.0).abs() < 1e-9);
//!
//! // Reconstruct through the closed variant set.
//! let bounds = SurfaceBounds::from(rect);
//! let again = SurfaceBounds::from_values(bounds.bounds_type(), &bounds.values()).unwrap();
//! assert_eq!(bounds, again);
//! assert_eq!(again.bounds_type(), BoundsType::Rectangle);
//! ```
//!
//! ## Coordinates
//!
//! Planar shapes take Cartesian local points. [`RadialBounds`] and
//! [`DiscTrapezoidBounds`] take polar points, `(r, phi)` stored as `(x, y)`.
//! All outlines are Cartesian.
//!
//! ## Features
//!
//! - `serde`: serialize every bounds type as its parameter array.
//!   Deserialization runs the same validation as construction.

pub mod bounds;
pub mod check;
pub mod convex_polygon;
pub mod diamond;
pub mod disc_trapezoid;
pub mod ellipse;
pub mod error;
pub mod periodic;
pub mod radial;
pub mod rectangle;
pub mod trapezoid;
pub mod triangle;
pub mod types;
pub mod vertices;

pub use bounds::SurfaceBounds;
pub use check::{BoundaryCheck, CheckKind, CheckedAxes};
pub use convex_polygon::ConvexPolygonBounds;
pub use diamond::{DiamondBounds, DiamondValue};
pub use disc_trapezoid::{DiscTrapezoidBounds, DiscTrapezoidValue};
pub use ellipse::{EllipseBounds, EllipseValue};
pub use error::BoundsError;
pub use periodic::{radian_pos, radian_sym, symmetric_delta, wrap_periodic};
pub use radial::{RadialBounds, RadialValue};
pub use rectangle::{RectangleBounds, RectangleValue};
pub use trapezoid::{TrapezoidBounds, TrapezoidValue};
pub use triangle::{TriangleBounds, TriangleValue};
pub use types::{BoundsType, ON_SURFACE_TOLERANCE};
