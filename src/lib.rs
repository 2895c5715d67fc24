// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `SmartHome` Lib - A Rust library to simulate a home of smart devices.
//!
//! This library provides an in-memory model of configurable on/off
//! appliances and a bounded container that manages them. Every device
//! option is validated on construction and on every mutation, so invalid
//! state is never observable.
//!
//! # Devices
//!
//! - **Plug**: consumption rate in watts (0-150)
//! - **TV**: channel number (1-734)
//! - **Door**: lock state (true/false, never coerced from text)
//!
//! # Quick Start
//!
//! ```
//! use smarthome_lib::{Device, SmartHome};
//!
//! fn main() -> smarthome_lib::Result<()> {
//!     let mut home = SmartHome::new();
//!     home.add_device(Device::plug(45)?)?;
//!     home.add_device(Device::tv(5)?)?;
//!     home.add_device(Device::door(true))?;
//!
//!     // Indexed operations
//!     home.toggle_device(0)?;
//!     home.update_option(1, 42)?;
//!
//!     // Bulk power control is idempotent
//!     home.switch_all_on();
//!     assert_eq!(home.switch_all_on(), 0);
//!
//!     println!("{home}");
//!     Ok(())
//! }
//! ```
//!
//! # Validation
//!
//! Option updates arrive as an [`OptionValue`] so front ends can pass
//! loosely-typed user input; the device decides whether it fits:
//!
//! ```
//! use smarthome_lib::{Device, SmartHome};
//!
//! let mut home = SmartHome::new();
//! home.add_device(Device::door(true)).unwrap();
//!
//! // A truthy-looking string is rejected, not coerced
//! assert!(home.update_option(0, "yes").is_err());
//! assert_eq!(home.device(0).unwrap().option(), true.into());
//! ```

pub mod device;
pub mod error;
pub mod home;
pub mod types;

pub use device::{Device, Door, Plug, Tv};
pub use error::{Error, Result, ValueError};
pub use home::SmartHome;
pub use types::{Channel, ConsumptionRate, OptionValue, PowerState};
