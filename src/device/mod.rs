// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device abstraction and its variants.
//!
//! A [`Device`] is one of a closed set of appliances, each owning a power
//! state and a single validated option. All variant dispatch happens here:
//! containers and front ends call [`Device::set_option`] and never need to
//! know which concrete variant they are holding.

use std::fmt;

use crate::error::ValueError;
use crate::types::{OptionValue, PowerState};

mod door;
mod plug;
mod tv;

pub use door::Door;
pub use plug::Plug;
pub use tv::Tv;

/// A smart device: plug, TV, or door.
///
/// # Examples
///
/// ```
/// use smarthome_lib::Device;
///
/// let mut device = Device::plug(45)?;
/// device.toggle();
/// assert_eq!(device.to_string(), "Plug is on with consumption rate 45");
///
/// // Option updates go through the same validation as construction
/// assert!(device.set_option(200.into()).is_err());
/// assert_eq!(device.option(), 45.into());
/// # Ok::<(), smarthome_lib::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Device {
    /// A smart plug.
    Plug(Plug),
    /// A smart TV.
    Tv(Tv),
    /// A smart door.
    Door(Door),
}

impl Device {
    /// Creates a plug device, switched off, drawing the given rate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the rate exceeds 150 W.
    pub fn plug(rate: u8) -> Result<Self, ValueError> {
        Plug::new(rate).map(Self::Plug)
    }

    /// Creates a TV device, switched off, tuned to the given channel.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the channel is outside [1, 734].
    pub fn tv(channel: u16) -> Result<Self, ValueError> {
        Tv::new(channel).map(Self::Tv)
    }

    /// Creates a door device, switched off, with the given lock state.
    #[must_use]
    pub const fn door(locked: bool) -> Self {
        Self::Door(Door::new(locked))
    }

    /// Returns the variant name as shown in descriptions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Plug(_) => Plug::NAME,
            Self::Tv(_) => Tv::NAME,
            Self::Door(_) => Door::NAME,
        }
    }

    /// Returns the human-readable name of the variant's option.
    #[must_use]
    pub const fn option_label(&self) -> &'static str {
        match self {
            Self::Plug(_) => crate::types::ConsumptionRate::LABEL,
            Self::Tv(_) => crate::types::Channel::LABEL,
            Self::Door(_) => Door::LABEL,
        }
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        match self {
            Self::Plug(d) => d.power(),
            Self::Tv(d) => d.power(),
            Self::Door(d) => d.power(),
        }
    }

    /// Returns `true` if the device is switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power().is_on()
    }

    /// Flips the power state. Toggling twice restores the original state.
    pub fn toggle(&mut self) {
        match self {
            Self::Plug(d) => d.toggle(),
            Self::Tv(d) => d.toggle(),
            Self::Door(d) => d.toggle(),
        }
    }

    /// Moves the device to the given power state.
    ///
    /// Returns `true` if the state actually changed, which lets bulk
    /// operations stay idempotent and count their effect.
    pub fn set_power(&mut self, state: PowerState) -> bool {
        match self {
            Self::Plug(d) => d.set_power(state),
            Self::Tv(d) => d.set_power(state),
            Self::Door(d) => d.set_power(state),
        }
    }

    /// Validates and applies a dynamically-typed option value.
    ///
    /// Dispatches to the variant's own validation; on error the previous
    /// option is retained untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for numeric options outside the
    /// variant's range, or `ValueError::WrongKind` when the payload kind
    /// does not match the option (e.g. text for a boolean lock).
    pub fn set_option(&mut self, value: OptionValue) -> Result<(), ValueError> {
        match self {
            Self::Plug(d) => d.set_option(value),
            Self::Tv(d) => d.set_option(value),
            Self::Door(d) => d.set_option(value),
        }
    }

    /// Returns the current option as a dynamically-typed value.
    #[must_use]
    pub fn option(&self) -> OptionValue {
        match self {
            Self::Plug(d) => OptionValue::Integer(i64::from(d.rate().value())),
            Self::Tv(d) => OptionValue::Integer(i64::from(d.channel().value())),
            Self::Door(d) => OptionValue::Boolean(d.locked()),
        }
    }
}

impl From<Plug> for Device {
    fn from(device: Plug) -> Self {
        Self::Plug(device)
    }
}

impl From<Tv> for Device {
    fn from(device: Tv) -> Self {
        Self::Tv(device)
    }
}

impl From<Door> for Device {
    fn from(device: Door) -> Self {
        Self::Door(device)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plug(d) => d.fmt(f),
            Self::Tv(d) => d.fmt(f),
            Self::Door(d) => d.fmt(f),
        }
    }
}
