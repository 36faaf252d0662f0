// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors shared by all bounds types.

use thiserror::Error;
use tracing::debug;

use crate::types::BoundsType;

/// Reason a set of bounds parameters was rejected.
///
/// Rejection is the only failure mode of this crate: every query on a
/// successfully constructed bounds object is total.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoundsError {
    /// A half-length or radius parameter was negative.
    #[error("{shape}: negative {parameter} ({value})")]
    NegativeLength {
        /// Shape that rejected the parameter.
        shape: &'static str,
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A parameter was NaN or infinite.
    #[error("{shape}: {parameter} is not finite ({value})")]
    NotFinite {
        /// Shape that rejected the parameter.
        shape: &'static str,
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A lower limit exceeded its upper counterpart.
    #[error("{shape}: inverted {axis} range [{min}, {max}]")]
    InvertedRange {
        /// Shape that rejected the parameters.
        shape: &'static str,
        /// Axis or quantity the range belongs to.
        axis: &'static str,
        /// Lower limit.
        min: f64,
        /// Upper limit.
        max: f64,
    },
    /// An end half-width of a diamond exceeded its central half-width.
    #[error("DiamondBounds: not a diamond shape (x_neg_y {neg}, x_zero_y {mid}, x_pos_y {pos})")]
    NotDiamond {
        /// Half-width at negative y.
        neg: f64,
        /// Half-width at y = 0.
        mid: f64,
        /// Half-width at positive y.
        pos: f64,
    },
    /// A half phi sector outside `[0, π]`.
    #[error("{shape}: half phi sector {value} outside [0, pi]")]
    PhiSectorOutOfRange {
        /// Shape that rejected the parameter.
        shape: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// An average phi that is not in its normalized form.
    #[error("{shape}: average phi {value} is not normalized to [-pi, pi)")]
    PhiNotNormalized {
        /// Shape that rejected the parameter.
        shape: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A half-width does not fit into the radius it is attached to.
    #[error("DiscTrapezoidBounds: half width {half_x} does not fit radius {r}")]
    HalfWidthExceedsRadius {
        /// Rejected half-width.
        half_x: f64,
        /// Radius at which the half-width applies.
        r: f64,
    },
    /// A derived angle disagreed with the value provided for it.
    #[error("{shape}: {parameter} {provided} does not match the derived value {derived}")]
    InconsistentDerived {
        /// Shape that rejected the parameters.
        shape: &'static str,
        /// Name of the derived parameter.
        parameter: &'static str,
        /// Value passed in.
        provided: f64,
        /// Value derived from the independent parameters.
        derived: f64,
    },
    /// A parameter slice of the wrong length was passed for reconstruction.
    #[error("{bounds_type:?}: expected {expected} parameters, got {actual}")]
    ParameterCount {
        /// Type being reconstructed.
        bounds_type: BoundsType,
        /// Required number of values.
        expected: usize,
        /// Number of values provided.
        actual: usize,
    },
    /// A flat vertex slice that does not hold at least three `(x, y)` pairs.
    #[error("ConvexPolygonBounds: expected an even number of at least 6 parameters, got {actual}")]
    PolygonParameterCount {
        /// Number of values provided.
        actual: usize,
    },
    /// Polygon corners that do not span a strictly convex, simple outline.
    #[error("{shape}: {vertices} vertices do not form a convex polygon")]
    NotConvex {
        /// Shape that rejected the corners.
        shape: &'static str,
        /// Number of corners provided.
        vertices: usize,
    },
    /// A volume parameter slice of the wrong length was passed for reconstruction.
    #[error("volume bounds: expected {expected} parameters, got {actual}")]
    VolumeParameterCount {
        /// Required number of values.
        expected: usize,
        /// Number of values provided.
        actual: usize,
    },
    /// A covariance matrix that cannot be inverted.
    #[error("BoundaryCheck: covariance matrix is singular")]
    SingularCovariance,
}

/// Record a rejected construction; used with `Result::inspect_err`.
pub(crate) fn log_rejection(err: &BoundsError) {
    debug!(error = %err, "rejected bounds parameters");
}

/// Reject negative or non-finite length parameters.
pub(crate) fn check_length(
    shape: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<(), BoundsError> {
    check_finite(shape, parameter, value)?;
    if value < 0.0 {
        return Err(BoundsError::NegativeLength {
            shape,
            parameter,
            value,
        });
    }
    Ok(())
}

/// Reject NaN and infinities.
pub(crate) fn check_finite(
    shape: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<(), BoundsError> {
    if !value.is_finite() {
        return Err(BoundsError::NotFinite {
            shape,
            parameter,
            value,
        });
    }
    Ok(())
}

/// Reject `min > max`.
pub(crate) fn check_ordered(
    shape: &'static str,
    axis: &'static str,
    min: f64,
    max: f64,
) -> Result<(), BoundsError> {
    if min > max {
        return Err(BoundsError::InvertedRange {
            shape,
            axis,
            min,
            max,
        });
    }
    Ok(())
}
