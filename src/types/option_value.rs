// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dynamically-typed option payload.
//!
//! Front ends collect option values as loosely-typed user input (a number
//! field, a checkbox, a text box). [`OptionValue`] carries that input to a
//! device's validation, which either accepts it for the device's own option
//! domain or rejects it. Kinds are never coerced: `Text("true")` is not a
//! boolean.

use std::fmt;

/// A candidate option value before device-side validation.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::OptionValue;
///
/// let number = OptionValue::from(45);
/// let flag = OptionValue::from(true);
/// let text = OptionValue::from("yes");
///
/// assert_eq!(number, OptionValue::Integer(45));
/// assert_eq!(flag, OptionValue::Boolean(true));
/// assert_eq!(text.to_string(), "yes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A numeric value, for range-constrained options.
    Integer(i64),
    /// A boolean value, for on/off style options.
    Boolean(bool),
    /// Free-form text. Devices accept no textual option, so this always
    /// fails validation; it exists so stringly-typed input is rejected
    /// rather than silently coerced.
    Text(String),
}

impl OptionValue {
    /// Short description of the payload kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "an integer",
            Self::Boolean(_) => "a boolean",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
