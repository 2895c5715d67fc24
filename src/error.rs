// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the smart home library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation on device options, index resolution on the home, and
//! capacity enforcement.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when operating
/// on a [`SmartHome`](crate::SmartHome) and its devices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// An index does not resolve to a device in the home.
    #[error("device index {index} is out of bounds for {len} device(s)")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Number of devices currently in the home.
        len: usize,
    },

    /// The home already holds as many devices as its capacity allows.
    #[error("home is full, cannot add more than {max} device(s)")]
    CapacityReached {
        /// The capacity that was reached.
        max: usize,
    },
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create or update constrained
/// device options with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric option is outside the allowed range.
    #[error("{label} {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Human-readable name of the option.
        label: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A value of the wrong kind was supplied for an option.
    ///
    /// Kinds are never coerced: a textual `"true"` is not a boolean.
    #[error("{label} must be {expected}, got {actual}")]
    WrongKind {
        /// Human-readable name of the option.
        label: &'static str,
        /// Description of the expected domain.
        expected: &'static str,
        /// Rendering of the rejected value.
        actual: String,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A home capacity below the allowed minimum of one device.
    #[error("max capacity must be at least 1")]
    InvalidCapacity,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            label: "consumption rate",
            min: 0,
            max: 150,
            actual: 200,
        };
        assert_eq!(
            err.to_string(),
            "consumption rate 200 is out of range [0, 150]"
        );
    }

    #[test]
    fn wrong_kind_display() {
        let err = ValueError::WrongKind {
            label: "locked",
            expected: "true or false",
            actual: "yes".to_string(),
        };
        assert_eq!(err.to_string(), "locked must be true or false, got yes");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidCapacity;
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidCapacity)));
    }

    #[test]
    fn index_error_display() {
        let err = Error::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "device index 4 is out of bounds for 2 device(s)"
        );
    }

    #[test]
    fn capacity_error_display() {
        let err = Error::CapacityReached { max: 5 };
        assert_eq!(err.to_string(), "home is full, cannot add more than 5 device(s)");
    }
}
