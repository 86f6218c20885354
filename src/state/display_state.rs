// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User-facing climate state derived from a device status.

use crate::types::{HvacAction, HvacMode, TemperatureUnit};

use super::DeviceStatus;

/// Climate state shown to the user.
///
/// Every optional field is `None` until the coordinator has fetched a
/// status. The unit falls back to Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayState {
    /// Selected mode.
    pub hvac_mode: Option<HvacMode>,
    /// Observed activity.
    pub hvac_action: Option<HvacAction>,
    /// Current measured temperature.
    pub current_temperature: Option<f64>,
    /// Target temperature.
    pub target_temperature: Option<f64>,
    /// Unit both temperatures are expressed in.
    pub temperature_unit: TemperatureUnit,
}

impl DisplayState {
    /// State shown before any status has been received.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Derives the display state from the latest status, if any.
    ///
    /// Heating is reported as [`HvacAction::Idle`] once the water reaches
    /// the target, even though heating stays enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use vsmart_lib::state::{DeviceStatus, DisplayState};
    /// use vsmart_lib::types::{HvacAction, HvacMode, TemperatureUnit};
    ///
    /// let status = DeviceStatus::new(true, 18.0, 20.0, TemperatureUnit::Celsius);
    /// let state = DisplayState::from_status(Some(&status));
    /// assert_eq!(state.hvac_mode, Some(HvacMode::Heat));
    /// assert_eq!(state.hvac_action, Some(HvacAction::Heating));
    ///
    /// assert_eq!(DisplayState::from_status(None), DisplayState::unknown());
    /// ```
    #[must_use]
    pub fn from_status(status: Option<&DeviceStatus>) -> Self {
        let Some(status) = status else {
            return Self::unknown();
        };

        let hvac_mode = if status.heat_power {
            HvacMode::Heat
        } else {
            HvacMode::Off
        };
        let hvac_action = if status.is_below_target() {
            HvacAction::Heating
        } else {
            HvacAction::Idle
        };

        Self {
            hvac_mode: Some(hvac_mode),
            hvac_action: Some(hvac_action),
            current_temperature: Some(status.heat_temp_now),
            target_temperature: Some(status.heat_temp_set),
            temperature_unit: status.temp_set_unit,
        }
    }
}

impl From<&DeviceStatus> for DisplayState {
    fn from(status: &DeviceStatus) -> Self {
        Self::from_status(Some(status))
    }
}
