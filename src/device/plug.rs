// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart plug device.

use std::fmt;

use crate::error::ValueError;
use crate::types::{ConsumptionRate, OptionValue, PowerState};

/// A switched socket with a configurable consumption rate (0-150 W).
///
/// # Examples
///
/// ```
/// use smarthome_lib::Plug;
///
/// let mut plug = Plug::new(45)?;
/// assert!(!plug.is_on());
/// assert_eq!(plug.to_string(), "Plug is off with consumption rate 45");
///
/// plug.toggle();
/// assert!(plug.is_on());
/// # Ok::<(), smarthome_lib::ValueError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Plug {
    power: PowerState,
    rate: ConsumptionRate,
}

impl Plug {
    pub(crate) const NAME: &'static str = "Plug";

    /// Creates a plug, switched off, drawing the given rate in watts.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the rate exceeds 150 W.
    pub fn new(rate: u8) -> Result<Self, ValueError> {
        Ok(Self {
            power: PowerState::Off,
            rate: ConsumptionRate::new(rate)?,
        })
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the plug is switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Flips the power state.
    pub fn toggle(&mut self) {
        self.power = self.power.toggled();
    }

    /// Moves the plug to the given power state.
    ///
    /// Returns `true` if the state actually changed.
    pub fn set_power(&mut self, state: PowerState) -> bool {
        if self.power == state {
            return false;
        }
        self.power = state;
        true
    }

    /// Returns the consumption rate.
    #[must_use]
    pub const fn rate(&self) -> ConsumptionRate {
        self.rate
    }

    /// Sets the consumption rate.
    pub fn set_rate(&mut self, rate: ConsumptionRate) {
        self.rate = rate;
    }

    /// Validates and applies a dynamically-typed option value.
    ///
    /// On error the previous rate is retained untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for integers outside [0, 150] and
    /// `ValueError::WrongKind` for non-integer payloads.
    pub fn set_option(&mut self, value: OptionValue) -> Result<(), ValueError> {
        match value {
            OptionValue::Integer(v) => {
                self.rate = ConsumptionRate::try_from(v)?;
                Ok(())
            }
            other => Err(ValueError::WrongKind {
                label: ConsumptionRate::LABEL,
                expected: "an integer",
                actual: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Plug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} with {} {}",
            Self::NAME,
            self.power,
            ConsumptionRate::LABEL,
            self.rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plug_starts_off() {
        let plug = Plug::new(45).unwrap();
        assert!(!plug.is_on());
        assert_eq!(plug.rate().value(), 45);
    }

    #[test]
    fn plug_invalid_init() {
        assert!(Plug::new(151).is_err());
        assert!(Plug::new(200).is_err());
    }

    #[test]
    fn plug_toggle_twice_restores_state() {
        let mut plug = Plug::new(10).unwrap();
        plug.toggle();
        assert!(plug.is_on());
        plug.toggle();
        assert!(!plug.is_on());
    }

    #[test]
    fn plug_set_power_reports_change() {
        let mut plug = Plug::new(10).unwrap();
        assert!(plug.set_power(PowerState::On));
        assert!(!plug.set_power(PowerState::On));
        assert!(plug.set_power(PowerState::Off));
    }

    #[test]
    fn plug_set_option_valid() {
        let mut plug = Plug::new(45).unwrap();
        plug.set_option(OptionValue::Integer(75)).unwrap();
        assert_eq!(plug.rate().value(), 75);
    }

    #[test]
    fn plug_set_option_out_of_range_keeps_old_value() {
        let mut plug = Plug::new(45).unwrap();
        assert!(plug.set_option(OptionValue::Integer(-10)).is_err());
        assert!(plug.set_option(OptionValue::Integer(200)).is_err());
        assert_eq!(plug.rate().value(), 45);
    }

    #[test]
    fn plug_set_option_rejects_wrong_kind() {
        let mut plug = Plug::new(45).unwrap();
        let err = plug.set_option(OptionValue::Boolean(true)).unwrap_err();
        assert!(matches!(err, ValueError::WrongKind { .. }));
        assert_eq!(plug.rate().value(), 45);
    }

    #[test]
    fn plug_describe() {
        let mut plug = Plug::new(45).unwrap();
        assert_eq!(plug.to_string(), "Plug is off with consumption rate 45");
        plug.toggle();
        assert_eq!(plug.to_string(), "Plug is on with consumption rate 45");
    }
}
