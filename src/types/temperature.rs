// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature unit and display precision.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Unit a device reports its temperatures in.
///
/// Values are never converted between units; the unit only selects the
/// label shown next to them.
///
/// # Examples
///
/// ```
/// use vsmart_lib::types::TemperatureUnit;
///
/// assert_eq!(TemperatureUnit::Celsius.to_string(), "°C");
/// assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the display symbol (`°C` or `°F`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" | "°C" | "CELSIUS" => Ok(Self::Celsius),
            "F" | "°F" | "FAHRENHEIT" => Ok(Self::Fahrenheit),
            _ => Err(ValueError::InvalidTemperatureUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for TemperatureUnit {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TemperatureUnit> for &'static str {
    fn from(unit: TemperatureUnit) -> Self {
        unit.symbol()
    }
}

/// Precision temperatures are displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Whole degrees.
    Whole,
    /// Half-degree increments.
    Halves,
    /// Tenth-degree increments.
    Tenths,
}

impl Precision {
    /// Returns the increment as a number.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Whole => 1.0,
            Self::Halves => 0.5,
            Self::Tenths => 0.1,
        }
    }
}
