// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for smart device options.
//!
//! This module provides type-safe representations of the values a device
//! can hold. Each constrained type ensures values are within their valid
//! range at construction time, preventing invalid device state.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of a device
//! - [`ConsumptionRate`] - Power draw of a plug in watts (0-150)
//! - [`Channel`] - TV channel number (1-734)
//! - [`OptionValue`] - Dynamically-typed option payload from a front end

mod channel;
mod consumption_rate;
mod option_value;
mod power;

pub use channel::Channel;
pub use consumption_rate::ConsumptionRate;
pub use option_value::OptionValue;
pub use power::PowerState;
