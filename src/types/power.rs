// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type for smart devices.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state of a device.
///
/// Every device starts [`Off`](PowerState::Off) and moves between the two
/// states through [`toggled`](PowerState::toggled).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::PowerState;
///
/// let state = PowerState::default();
/// assert_eq!(state, PowerState::Off);
/// assert_eq!(state.toggled(), PowerState::On);
/// assert_eq!(state.toggled().as_str(), "on");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the lowercase string representation used in descriptions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns the opposite state.
    ///
    /// Toggling twice returns to the original state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Returns `true` if the state is [`On`](PowerState::On).
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" | "false" => Ok(Self::Off),
            "on" | "1" | "true" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}
