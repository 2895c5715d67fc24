// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The smart home container.
//!
//! A [`SmartHome`] owns an ordered, capacity-bounded collection of devices
//! and exposes the indexed operations a front end needs: add, remove,
//! retrieve, toggle, bulk power switching, and option updates.

use std::fmt;

use crate::device::Device;
use crate::error::{Error, ValueError};
use crate::types::{OptionValue, PowerState};

/// An ordered, capacity-bounded collection of smart devices.
///
/// Devices are addressed by their zero-based insertion index; removing a
/// device shifts every later device down by one. The home exclusively owns
/// its devices.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{Device, SmartHome};
///
/// fn main() -> smarthome_lib::Result<()> {
///     let mut home = SmartHome::new();
///     home.add_device(Device::plug(120)?)?;
///     home.add_device(Device::tv(5)?)?;
///
///     home.toggle_device(0)?;
///     assert!(home.device(0)?.is_on());
///
///     home.switch_all_off();
///     assert!(!home.device(0)?.is_on());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SmartHome {
    devices: Vec<Device>,
    max_capacity: usize,
}

impl SmartHome {
    /// Capacity of a home created with [`SmartHome::new`].
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Creates an empty home with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            max_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty home with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidCapacity` if `max_capacity` is zero.
    pub fn with_capacity(max_capacity: usize) -> Result<Self, ValueError> {
        if max_capacity == 0 {
            return Err(ValueError::InvalidCapacity);
        }
        Ok(Self {
            devices: Vec::new(),
            max_capacity,
        })
    }

    /// Appends a device at the end of the home.
    ///
    /// Returns the index the device now lives at.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityReached` if the home is full; the rejected
    /// device is discarded and the home is unchanged. Callers that need to
    /// keep the device can check [`is_full`](SmartHome::is_full) first.
    pub fn add_device(&mut self, device: impl Into<Device>) -> Result<usize, Error> {
        let device = device.into();
        if self.devices.len() >= self.max_capacity {
            return Err(Error::CapacityReached {
                max: self.max_capacity,
            });
        }
        tracing::debug!(index = self.devices.len(), device = %device, "Adding device");
        self.devices.push(device);
        Ok(self.devices.len() - 1)
    }

    /// Returns the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index` is not in `[0, len)`.
    pub fn device(&self, index: usize) -> Result<&Device, Error> {
        self.devices.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.devices.len(),
        })
    }

    /// Returns the device at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index` is not in `[0, len)`.
    pub fn device_mut(&mut self, index: usize) -> Result<&mut Device, Error> {
        let len = self.devices.len();
        self.devices
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Removes and returns the device at `index`.
    ///
    /// Devices after `index` shift down by one; the order of the rest is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index` is not in `[0, len)`.
    pub fn remove_device(&mut self, index: usize) -> Result<Device, Error> {
        if index >= self.devices.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.devices.len(),
            });
        }
        let device = self.devices.remove(index);
        tracing::debug!(index, device = %device, "Removed device");
        Ok(device)
    }

    /// Toggles the device at `index` and returns its new power state.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index` is not in `[0, len)`.
    pub fn toggle_device(&mut self, index: usize) -> Result<PowerState, Error> {
        let device = self.device_mut(index)?;
        device.toggle();
        Ok(device.power())
    }

    /// Switches every device on.
    ///
    /// Devices already on are left untouched, so the operation is
    /// idempotent. Returns how many devices actually changed state.
    pub fn switch_all_on(&mut self) -> usize {
        self.switch_all(PowerState::On)
    }

    /// Switches every device off.
    ///
    /// Devices already off are left untouched, so the operation is
    /// idempotent. Returns how many devices actually changed state.
    pub fn switch_all_off(&mut self) -> usize {
        self.switch_all(PowerState::Off)
    }

    fn switch_all(&mut self, target: PowerState) -> usize {
        let mut changed = 0;
        for device in &mut self.devices {
            if device.set_power(target) {
                changed += 1;
            }
        }
        tracing::debug!(state = %target, changed, "Switched all devices");
        changed
    }

    /// Updates the option of the device at `index`.
    ///
    /// The device's own validation decides whether the value fits its
    /// option; on error the device is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index` is not in `[0, len)`,
    /// or `Error::Value` if the device rejects the value.
    pub fn update_option(
        &mut self,
        index: usize,
        value: impl Into<OptionValue>,
    ) -> Result<(), Error> {
        let device = self.device_mut(index)?;
        device.set_option(value.into()).map_err(Error::from)
    }

    /// Returns the devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Returns the number of devices in the home.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the home holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns `true` if no more devices can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.devices.len() >= self.max_capacity
    }

    /// Returns the maximum number of devices the home accepts.
    #[must_use]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Sets the maximum number of devices the home accepts.
    ///
    /// Shrinking below the current device count keeps the existing
    /// devices; only future insertions see the new limit.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidCapacity` if `max_capacity` is zero.
    pub fn set_max_capacity(&mut self, max_capacity: usize) -> Result<(), ValueError> {
        if max_capacity == 0 {
            return Err(ValueError::InvalidCapacity);
        }
        self.max_capacity = max_capacity;
        Ok(())
    }
}

impl Default for SmartHome {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SmartHome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SmartHome with {} device(s):", self.devices.len())?;
        for (i, device) in self.devices.iter().enumerate() {
            write!(f, "\n{}- {device}", i + 1)?;
        }
        Ok(())
    }
}
