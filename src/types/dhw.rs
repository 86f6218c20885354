// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domestic hot water switch state.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DHW_OFF, DHW_ON};
use crate::error::ValueError;

/// On/off state of the domestic hot water feature.
///
/// # Examples
///
/// ```
/// use vsmart_lib::types::DhwState;
///
/// assert_eq!(DhwState::On.as_str(), "ON");
/// assert_eq!(DhwState::from(false), DhwState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DhwState {
    /// Hot water is off.
    Off,
    /// Hot water is on.
    On,
}

impl DhwState {
    /// Returns the literal the cloud API uses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => DHW_OFF,
            Self::On => DHW_ON,
        }
    }

    /// Returns `true` for [`DhwState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for DhwState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DhwState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValueError::InvalidDhwState(s.to_string())),
        }
    }
}

impl TryFrom<String> for DhwState {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DhwState> for &'static str {
    fn from(state: DhwState) -> Self {
        state.as_str()
    }
}

impl From<bool> for DhwState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dhw_state_as_str() {
        assert_eq!(DhwState::On.as_str(), "ON");
        assert_eq!(DhwState::Off.as_str(), "OFF");
    }

    #[test]
    fn dhw_state_from_str() {
        assert_eq!("on".parse::<DhwState>().unwrap(), DhwState::On);
        assert_eq!("OFF".parse::<DhwState>().unwrap(), DhwState::Off);
        assert_eq!("1".parse::<DhwState>().unwrap(), DhwState::On);
        assert_eq!("false".parse::<DhwState>().unwrap(), DhwState::Off);
    }

    #[test]
    fn dhw_state_from_str_invalid() {
        let result = "maybe".parse::<DhwState>();
        assert!(matches!(result, Err(ValueError::InvalidDhwState(_))));
    }

    #[test]
    fn dhw_state_from_bool() {
        assert_eq!(DhwState::from(true), DhwState::On);
        assert!(!DhwState::from(false).is_on());
    }

    #[test]
    fn dhw_state_serde_uses_api_literals() {
        assert_eq!(serde_json::to_string(&DhwState::On).unwrap(), "\"ON\"");
        let state: DhwState = serde_json::from_str("\"OFF\"").unwrap();
        assert_eq!(state, DhwState::Off);
        assert!(serde_json::from_str::<DhwState>("\"half\"").is_err());
    }
}
