// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of surface bounds.

use core::fmt;

use kurbo::Point;

use crate::check::BoundaryCheck;
use crate::convex_polygon::ConvexPolygonBounds;
use crate::diamond::DiamondBounds;
use crate::disc_trapezoid::DiscTrapezoidBounds;
use crate::ellipse::EllipseBounds;
use crate::error::{BoundsError, log_rejection};
use crate::radial::RadialBounds;
use crate::rectangle::RectangleBounds;
use crate::trapezoid::TrapezoidBounds;
use crate::triangle::TriangleBounds;
use crate::types::BoundsType;

/// Any surface bounds, dispatched by shape family.
///
/// Equality compares the shape family and the parameter values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceBounds {
    /// Axis-aligned rectangle.
    Rectangle(RectangleBounds),
    /// Symmetric trapezoid.
    Trapezoid(TrapezoidBounds),
    /// Symmetric hexagon.
    Diamond(DiamondBounds),
    /// Elliptical annulus sector.
    Ellipse(EllipseBounds),
    /// Annulus sector on a disc.
    Radial(RadialBounds),
    /// Trapezoid on a disc.
    DiscTrapezoid(DiscTrapezoidBounds),
    /// Arbitrary triangle.
    Triangle(TriangleBounds),
    /// Convex polygon with any number of corners.
    ConvexPolygon(ConvexPolygonBounds),
}

macro_rules! each {
    ($self:expr, $b:ident => $body:expr) => {
        match $self {
            SurfaceBounds::Rectangle($b) => $body,
            SurfaceBounds::Trapezoid($b) => $body,
            SurfaceBounds::Diamond($b) => $body,
            SurfaceBounds::Ellipse($b) => $body,
            SurfaceBounds::Radial($b) => $body,
            SurfaceBounds::DiscTrapezoid($b) => $body,
            SurfaceBounds::Triangle($b) => $body,
            SurfaceBounds::ConvexPolygon($b) => $body,
        }
    };
}

impl SurfaceBounds {
    /// Rebuild bounds of `bounds_type` from the output of [`values`](Self::values).
    pub fn from_values(bounds_type: BoundsType, values: &[f64]) -> Result<Self, BoundsError> {
        Ok(match bounds_type {
            BoundsType::Rectangle => {
                RectangleBounds::from_values(fixed(bounds_type, values)?)?.into()
            }
            BoundsType::Trapezoid => {
                TrapezoidBounds::from_values(fixed(bounds_type, values)?)?.into()
            }
            BoundsType::Diamond => DiamondBounds::from_values(fixed(bounds_type, values)?)?.into(),
            BoundsType::Ellipse => EllipseBounds::from_values(fixed(bounds_type, values)?)?.into(),
            BoundsType::Disc => RadialBounds::from_values(fixed(bounds_type, values)?)?.into(),
            BoundsType::DiscTrapezoid => {
                DiscTrapezoidBounds::from_values(fixed(bounds_type, values)?)?.into()
            }
            BoundsType::Triangle => TriangleBounds::from_values(fixed(bounds_type, values)?)?.into(),
            BoundsType::ConvexPolygon => ConvexPolygonBounds::from_values(values)?.into(),
        })
    }

    /// Shape family discriminant.
    pub fn bounds_type(&self) -> BoundsType {
        each!(self, b => b.bounds_type())
    }

    /// Parameters in the canonical order of the shape family.
    pub fn values(&self) -> Vec<f64> {
        each!(self, b => b.values().to_vec())
    }

    /// Whether `point` is inside under `check`.
    ///
    /// Disc shapes take polar points, all others Cartesian ones.
    pub fn inside(&self, point: Point, check: &BoundaryCheck) -> bool {
        each!(self, b => b.inside(point, check))
    }

    /// Signed distance to the boundary, positive outside.
    pub fn distance_to_boundary(&self, point: Point) -> f64 {
        each!(self, b => b.distance_to_boundary(point))
    }

    /// Counter-clockwise Cartesian outline; `segments` sets the arc
    /// resolution per full turn and is ignored by polygonal shapes.
    pub fn vertices(&self, segments: u32) -> Vec<Point> {
        each!(self, b => b.vertices(segments))
    }

    /// Cached enclosing rectangle.
    pub fn bounding_box(&self) -> &RectangleBounds {
        each!(self, b => b.bounding_box())
    }
}

fn fixed<const N: usize>(bounds_type: BoundsType, values: &[f64]) -> Result<[f64; N], BoundsError> {
    values
        .try_into()
        .map_err(|_| BoundsError::ParameterCount {
            bounds_type,
            expected: N,
            actual: values.len(),
        })
        .inspect_err(log_rejection)
}

impl fmt::Display for SurfaceBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, b => fmt::Display::fmt(b, f))
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for SurfaceBounds {
                fn from(bounds: $ty) -> Self {
                    Self::$variant(bounds)
                }
            }
        )*
    };
}

impl_from!(
    Rectangle(RectangleBounds),
    Trapezoid(TrapezoidBounds),
    Diamond(DiamondBounds),
    Ellipse(EllipseBounds),
    Radial(RadialBounds),
    DiscTrapezoid(DiscTrapezoidBounds),
    Triangle(TriangleBounds),
    ConvexPolygon(ConvexPolygonBounds),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_parameter_count_is_rejected() {
        assert_eq!(
            SurfaceBounds::from_values(BoundsType::Diamond, &[1.0, 2.0, 1.0]),
            Err(BoundsError::ParameterCount {
                bounds_type: BoundsType::Diamond,
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn dispatch_reaches_the_variant() {
        let b: SurfaceBounds = RectangleBounds::new(2.0, 1.0).unwrap().into();
        assert_eq!(b.bounds_type(), BoundsType::Rectangle);
        assert_eq!(b.values(), vec![-2.0, -1.0, 2.0, 1.0]);
        assert!(b.inside(Point::new(1.0, 0.5), &BoundaryCheck::exact()));
        assert_eq!(b.bounding_box().half_length_x(), 2.0);
        assert!(b.to_string().starts_with("RectangleBounds:"));
    }

    #[test]
    fn equality_is_type_and_values() {
        let a: SurfaceBounds = TrapezoidBounds::new(1.0, 2.0, 3.0).unwrap().into();
        let b = SurfaceBounds::from_values(BoundsType::Trapezoid, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(a, b);
        let c: SurfaceBounds = RadialBounds::new(1.0, 2.0, 0.0, 3.0).unwrap().into();
        assert_ne!(a, c);
    }

    #[test]
    fn polygon_families_dispatch() {
        let t = SurfaceBounds::from_values(BoundsType::Triangle, &[1.0, 1.0, 4.0, 1.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(t.bounds_type(), BoundsType::Triangle);
        assert_eq!(t.vertices(0).len(), 3);

        let quad = [0.0, 0.0, 1.0, 0.0, 0.9, 1.2, 0.5, 1.0];
        let p = SurfaceBounds::from_values(BoundsType::ConvexPolygon, &quad).unwrap();
        assert_eq!(p.bounds_type(), BoundsType::ConvexPolygon);
        assert_eq!(p.values(), quad.to_vec());
        assert!(p.inside(Point::new(0.8, 0.8), &BoundaryCheck::exact()));
        assert_eq!(
            SurfaceBounds::from_values(BoundsType::ConvexPolygon, &quad[..3]),
            Err(BoundsError::PolygonParameterCount { actual: 3 })
        );
        assert!(matches!(
            SurfaceBounds::from_values(BoundsType::Triangle, &quad),
            Err(BoundsError::ParameterCount { expected: 6, actual: 8, .. })
        ));
    }
}
