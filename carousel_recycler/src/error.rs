// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// A recycler configuration that cannot be used.
///
/// Everything that would otherwise poison the per-tick arithmetic (negative
/// extents, NaNs, a zero pitch) is rejected when it is set, never later.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An extent that must be non-negative was negative.
    #[error("`{name}` must not be negative, got {value}")]
    NegativeExtent {
        /// Name of the offending setting.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value was NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFiniteValue {
        /// Name of the offending setting.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Item extent, minimum cell size, and gap are all zero.
    #[error("item pitch is zero: item extent, minimum cell size, and gap are all zero")]
    ZeroPitch,
    /// A friction ratio was outside `[0, 1)`.
    #[error("`{name}` must lie in [0, 1), got {value}")]
    InvalidFriction {
        /// Name of the offending setting.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The renderer factory produced nothing when asked for a size sample.
    #[error("renderer factory produced no sample renderer")]
    FactorySampleFailed,
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_extent(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteValue { name, value });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeExtent { name, value });
    }
    Ok(value)
}

/// Checks that `value` is a ratio in `[0, 1)`.
pub(crate) fn check_friction(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !(0.0..1.0).contains(&value) {
        return Err(ConfigError::InvalidFriction { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_checks() {
        assert_eq!(check_extent("gap", 0.0), Ok(0.0));
        assert!(matches!(
            check_extent("gap", -1.0),
            Err(ConfigError::NegativeExtent { name: "gap", .. })
        ));
        assert!(matches!(
            check_extent("gap", f64::NAN),
            Err(ConfigError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn friction_checks() {
        assert!(check_friction("f", 0.0).is_ok());
        assert!(check_friction("f", 1.0).is_err());
        assert!(check_friction("f", f64::NAN).is_err());
    }
}
