// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart TV device.

use std::fmt;

use crate::error::ValueError;
use crate::types::{Channel, OptionValue, PowerState};

/// A television tuned to a channel (1-734).
///
/// # Examples
///
/// ```
/// use smarthome_lib::Tv;
///
/// let tv = Tv::new(5)?;
/// assert_eq!(tv.to_string(), "TV is off with channel 5");
///
/// // A fresh TV starts on channel 1
/// assert_eq!(Tv::default().channel().value(), 1);
/// # Ok::<(), smarthome_lib::ValueError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tv {
    power: PowerState,
    channel: Channel,
}

impl Tv {
    pub(crate) const NAME: &'static str = "TV";

    /// Creates a TV, switched off, tuned to the given channel.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the channel is outside [1, 734].
    pub fn new(channel: u16) -> Result<Self, ValueError> {
        Ok(Self {
            power: PowerState::Off,
            channel: Channel::new(channel)?,
        })
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the TV is switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Flips the power state.
    pub fn toggle(&mut self) {
        self.power = self.power.toggled();
    }

    /// Moves the TV to the given power state.
    ///
    /// Returns `true` if the state actually changed.
    pub fn set_power(&mut self, state: PowerState) -> bool {
        if self.power == state {
            return false;
        }
        self.power = state;
        true
    }

    /// Returns the tuned channel.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Tunes to the given channel.
    pub fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }

    /// Validates and applies a dynamically-typed option value.
    ///
    /// On error the previous channel is retained untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for integers outside [1, 734] and
    /// `ValueError::WrongKind` for non-integer payloads.
    pub fn set_option(&mut self, value: OptionValue) -> Result<(), ValueError> {
        match value {
            OptionValue::Integer(v) => {
                self.channel = Channel::try_from(v)?;
                Ok(())
            }
            other => Err(ValueError::WrongKind {
                label: Channel::LABEL,
                expected: "an integer",
                actual: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Tv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} with {} {}",
            Self::NAME,
            self.power,
            Channel::LABEL,
            self.channel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tv_starts_off() {
        let tv = Tv::new(45).unwrap();
        assert!(!tv.is_on());
        assert_eq!(tv.channel().value(), 45);
    }

    #[test]
    fn tv_invalid_init() {
        assert!(Tv::new(0).is_err());
        assert!(Tv::new(735).is_err());
    }

    #[test]
    fn tv_set_option_valid() {
        let mut tv = Tv::new(45).unwrap();
        tv.set_option(OptionValue::Integer(75)).unwrap();
        assert_eq!(tv.channel().value(), 75);
    }

    #[test]
    fn tv_set_option_out_of_range_keeps_old_value() {
        let mut tv = Tv::new(45).unwrap();
        assert!(tv.set_option(OptionValue::Integer(-10)).is_err());
        assert!(tv.set_option(OptionValue::Integer(750)).is_err());
        assert_eq!(tv.channel().value(), 45);
    }

    #[test]
    fn tv_set_option_rejects_wrong_kind() {
        let mut tv = Tv::new(45).unwrap();
        let err = tv
            .set_option(OptionValue::Text("five".to_string()))
            .unwrap_err();
        assert!(matches!(err, ValueError::WrongKind { .. }));
        assert_eq!(tv.channel().value(), 45);
    }

    #[test]
    fn tv_describe() {
        let mut tv = Tv::new(5).unwrap();
        assert_eq!(tv.to_string(), "TV is off with channel 5");
        tv.toggle();
        assert_eq!(tv.to_string(), "TV is on with channel 5");
    }
}
