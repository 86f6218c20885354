// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC mode and action types.
//!
//! A mode is what the user selected; an action is what the device is doing
//! right now. The two are reported independently.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// User-selectable operating mode of a climate entity.
///
/// The host knows the full set below. A `VSmart` thermostat only supports
/// [`HvacMode::Off`] and [`HvacMode::Heat`].
///
/// # Examples
///
/// ```
/// use vsmart_lib::types::HvacMode;
///
/// assert_eq!(HvacMode::Heat.as_str(), "heat");
/// assert_eq!("fan_only".parse::<HvacMode>().unwrap(), HvacMode::FanOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    /// All activity disabled.
    Off,
    /// Heating.
    Heat,
    /// Cooling.
    Cool,
    /// Heating or cooling to a range.
    HeatCool,
    /// Device-controlled schedule.
    Auto,
    /// Dehumidifying.
    Dry,
    /// Fan only.
    FanOnly,
}

impl HvacMode {
    /// Returns the literal the host uses for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::HeatCool => "heat_cool",
            Self::Auto => "auto",
            Self::Dry => "dry",
            Self::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "heat_cool" => Ok(Self::HeatCool),
            "auto" => Ok(Self::Auto),
            "dry" => Ok(Self::Dry),
            "fan_only" => Ok(Self::FanOnly),
            _ => Err(ValueError::InvalidHvacMode(s.to_string())),
        }
    }
}

/// What a climate device is currently doing.
///
/// A `VSmart` thermostat reports either [`HvacAction::Heating`] or
/// [`HvacAction::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacAction {
    /// Device is off.
    Off,
    /// Actively heating.
    Heating,
    /// Actively cooling.
    Cooling,
    /// Actively drying.
    Drying,
    /// Enabled but not doing anything.
    Idle,
    /// Running the fan.
    Fan,
}

impl HvacAction {
    /// Returns the literal the host uses for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heating => "heating",
            Self::Cooling => "cooling",
            Self::Drying => "drying",
            Self::Idle => "idle",
            Self::Fan => "fan",
        }
    }
}

impl fmt::Display for HvacAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacAction {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "heating" => Ok(Self::Heating),
            "cooling" => Ok(Self::Cooling),
            "drying" => Ok(Self::Drying),
            "idle" => Ok(Self::Idle),
            "fan" => Ok(Self::Fan),
            _ => Err(ValueError::InvalidHvacAction(s.to_string())),
        }
    }
}
