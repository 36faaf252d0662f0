// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter validation shared by the volume bounds.

use fiducial_surface::BoundsError;
use tracing::debug;

/// Record a rejected construction; used with `Result::inspect_err`.
pub(crate) fn log_rejection(err: &BoundsError) {
    debug!(error = %err, "rejected volume bounds parameters");
}

/// Reject negative or non-finite length parameters.
pub(crate) fn check_length(
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
    if value < 0.0 {
        return Err(BoundsError::NegativeLength {
            shape,
            parameter,
            value,
        });
    }
    Ok(())
}
