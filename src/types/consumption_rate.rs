// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consumption rate type for smart plugs.
//!
//! This module provides a type-safe representation of a plug's power draw,
//! ensuring values are always within the valid range of 0-150 watts.

use std::fmt;

use crate::error::ValueError;

/// Power draw of a smart plug in watts (0-150).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::ConsumptionRate;
///
/// let rate = ConsumptionRate::new(45).unwrap();
/// assert_eq!(rate.value(), 45);
///
/// // Invalid values return error
/// assert!(ConsumptionRate::new(151).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ConsumptionRate(u8);

impl ConsumptionRate {
    /// Minimum consumption rate in watts.
    pub const MIN: u8 = 0;

    /// Maximum consumption rate in watts.
    pub const MAX: u8 = 150;

    pub(crate) const LABEL: &'static str = "consumption rate";

    /// Creates a new consumption rate.
    ///
    /// # Arguments
    ///
    /// * `value` - The power draw in watts (0-150)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 150.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                label: Self::LABEL,
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a consumption rate, clamping to the valid range.
    ///
    /// Values above 150 are clamped to 150.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX { Self(Self::MAX) } else { Self(value) }
    }

    /// Returns the power draw in watts.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ConsumptionRate {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for ConsumptionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ConsumptionRate {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for ConsumptionRate {
    type Error = ValueError;

    /// Checked conversion for dynamically-typed option updates, so that
    /// negative and overlarge values report the same range error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(ValueError::OutOfRange {
                label: Self::LABEL,
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: value,
            });
        }
        Ok(Self(value as u8))
    }
}
