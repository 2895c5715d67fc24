// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel type for smart TVs.

use std::fmt;

use crate::error::ValueError;

/// TV channel number (1-734).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::Channel;
///
/// let channel = Channel::new(5).unwrap();
/// assert_eq!(channel.value(), 5);
///
/// // Channel numbering starts at 1
/// assert!(Channel::new(0).is_err());
/// assert!(Channel::new(735).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Channel(u16);

impl Channel {
    /// Lowest channel number.
    pub const MIN: u16 = 1;

    /// Highest channel number.
    pub const MAX: u16 = 734;

    pub(crate) const LABEL: &'static str = "channel";

    /// Creates a new channel.
    ///
    /// # Arguments
    ///
    /// * `value` - The channel number (1-734)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1, 734].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                label: Self::LABEL,
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a channel, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the channel number.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Channel {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Channel {
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
        Ok(Self(value as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_valid_bounds() {
        assert_eq!(Channel::new(1).unwrap().value(), 1);
        assert_eq!(Channel::new(734).unwrap().value(), 734);
    }

    #[test]
    fn channel_invalid_bounds() {
        assert!(Channel::new(0).is_err());
        assert!(Channel::new(735).is_err());
    }

    #[test]
    fn channel_error_names_label_and_range() {
        let err = Channel::new(750).unwrap_err();
        assert_eq!(err.to_string(), "channel 750 is out of range [1, 734]");
    }

    #[test]
    fn channel_clamped() {
        assert_eq!(Channel::clamped(0).value(), 1);
        assert_eq!(Channel::clamped(800).value(), 734);
        assert_eq!(Channel::clamped(42).value(), 42);
    }

    #[test]
    fn channel_from_i64_bounds() {
        assert_eq!(Channel::try_from(1_i64).unwrap().value(), 1);
        assert!(Channel::try_from(0_i64).is_err());
        assert!(Channel::try_from(-60_i64).is_err());
        assert!(Channel::try_from(735_i64).is_err());
    }

    #[test]
    fn channel_default_is_first() {
        assert_eq!(Channel::default().value(), 1);
    }

    #[test]
    fn channel_display() {
        assert_eq!(Channel::new(5).unwrap().to_string(), "5");
    }
}
