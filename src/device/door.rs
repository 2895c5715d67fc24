// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart door device.

use std::fmt;

use crate::error::ValueError;
use crate::types::{OptionValue, PowerState};

/// A door with a lock.
///
/// The lock state is a plain boolean, so construction cannot fail; the
/// type system is the range check. Validation still matters on the
/// dynamically-typed path: [`set_option`](Door::set_option) accepts only a
/// boolean payload and never coerces text such as `"yes"` or `"true"`.
///
/// # Examples
///
/// ```
/// use smarthome_lib::Door;
///
/// let mut door = Door::new(true);
/// assert_eq!(door.to_string(), "Door is off with locked true");
///
/// door.unlock();
/// assert!(!door.locked());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Door {
    power: PowerState,
    locked: bool,
}

impl Door {
    pub(crate) const NAME: &'static str = "Door";
    pub(crate) const LABEL: &'static str = "locked";

    /// Creates a door, switched off, with the given lock state.
    #[must_use]
    pub const fn new(locked: bool) -> Self {
        Self {
            power: PowerState::Off,
            locked,
        }
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the door is switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Flips the power state.
    pub fn toggle(&mut self) {
        self.power = self.power.toggled();
    }

    /// Moves the door to the given power state.
    ///
    /// Returns `true` if the state actually changed.
    pub fn set_power(&mut self, state: PowerState) -> bool {
        if self.power == state {
            return false;
        }
        self.power = state;
        true
    }

    /// Returns `true` if the door is locked.
    #[must_use]
    pub const fn locked(&self) -> bool {
        self.locked
    }

    /// Sets the lock state.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Locks the door.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlocks the door.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Validates and applies a dynamically-typed option value.
    ///
    /// On error the previous lock state is retained untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::WrongKind` for any non-boolean payload,
    /// including truthy-looking text.
    pub fn set_option(&mut self, value: OptionValue) -> Result<(), ValueError> {
        match value {
            OptionValue::Boolean(v) => {
                self.locked = v;
                Ok(())
            }
            other => Err(ValueError::WrongKind {
                label: Self::LABEL,
                expected: "true or false",
                actual: other.to_string(),
            }),
        }
    }
}

impl Default for Door {
    /// A door starts locked, matching the safe state for a fresh install.
    fn default() -> Self {
        Self::new(true)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} with {} {}",
            Self::NAME,
            self.power,
            Self::LABEL,
            self.locked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_starts_off() {
        let door = Door::new(false);
        assert!(!door.is_on());
        assert!(!door.locked());
    }

    #[test]
    fn door_default_is_locked() {
        assert!(Door::default().locked());
    }

    #[test]
    fn door_lock_and_unlock() {
        let mut door = Door::new(false);
        door.lock();
        assert!(door.locked());
        door.unlock();
        assert!(!door.locked());
    }

    #[test]
    fn door_set_option_accepts_booleans() {
        let mut door = Door::new(true);
        door.set_option(OptionValue::Boolean(false)).unwrap();
        assert!(!door.locked());
    }

    #[test]
    fn door_set_option_rejects_text() {
        let mut door = Door::new(true);
        let err = door
            .set_option(OptionValue::Text("yes".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), "locked must be true or false, got yes");
        assert!(door.locked());
    }

    #[test]
    fn door_set_option_never_coerces_truthy_text() {
        let mut door = Door::new(false);
        assert!(door.set_option(OptionValue::Text("true".to_string())).is_err());
        assert!(door.set_option(OptionValue::Integer(1)).is_err());
        assert!(!door.locked());
    }

    #[test]
    fn door_describe() {
        let mut door = Door::new(true);
        assert_eq!(door.to_string(), "Door is off with locked true");
        door.toggle();
        door.unlock();
        assert_eq!(door.to_string(), "Door is on with locked false");
    }
}
