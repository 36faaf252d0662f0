// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared discriminants and constants.

/// Distance below which a point is considered to lie on a surface.
pub const ON_SURFACE_TOLERANCE: f64 = 1e-4;

/// Shape family discriminant.
///
/// The integer codes are stable and used for persistence; gaps belong to
/// shape families that are not provided by this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BoundsType {
    /// Hexagon symmetric in x, see [`DiamondBounds`](crate::DiamondBounds).
    Diamond = 2,
    /// Annulus sector in polar coordinates, see [`RadialBounds`](crate::RadialBounds).
    Disc = 3,
    /// Elliptical annulus sector, see [`EllipseBounds`](crate::EllipseBounds).
    Ellipse = 5,
    /// Axis-aligned box, see [`RectangleBounds`](crate::RectangleBounds).
    Rectangle = 7,
    /// Symmetric trapezoid, see [`TrapezoidBounds`](crate::TrapezoidBounds).
    Trapezoid = 8,
    /// Arbitrary triangle, see [`TriangleBounds`](crate::TriangleBounds).
    Triangle = 9,
    /// Trapezoid on a disc, see [`DiscTrapezoidBounds`](crate::DiscTrapezoidBounds).
    DiscTrapezoid = 10,
    /// Convex polygon, see [`ConvexPolygonBounds`](crate::ConvexPolygonBounds).
    ConvexPolygon = 11,
}

impl BoundsType {
    /// Number of parameters in the canonical value vector of this type, or
    /// `None` when it depends on the vertex count.
    pub const fn value_count(self) -> Option<usize> {
        match self {
            Self::Diamond => Some(5),
            Self::Disc => Some(4),
            Self::Ellipse => Some(6),
            Self::Rectangle => Some(4),
            Self::Trapezoid => Some(3),
            Self::Triangle => Some(6),
            Self::DiscTrapezoid => Some(6),
            Self::ConvexPolygon => None,
        }
    }

    /// Stable integer code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Square of `x`.
#[inline]
pub(crate) fn square(x: f64) -> f64 {
    x * x
}
