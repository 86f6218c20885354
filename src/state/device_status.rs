// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polled device status.

use crate::error::ParseError;
use crate::types::TemperatureUnit;

/// Latest status reported by a `VSmart` thermostat.
///
/// Owned by the coordinator; the thermostat only reads it. Both
/// temperatures are expressed in `temp_set_unit`.
///
/// # Examples
///
/// ```
/// use vsmart_lib::state::DeviceStatus;
/// use vsmart_lib::types::TemperatureUnit;
///
/// let status = DeviceStatus::from_json(
///     r#"{"heat_power":true,"heat_temp_now":36.5,"heat_temp_set":38.0,"temp_set_unit":"C"}"#,
/// )
/// .unwrap();
/// assert!(status.heat_power);
/// assert_eq!(status.temp_set_unit, TemperatureUnit::Celsius);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceStatus {
    /// Whether heating is enabled.
    pub heat_power: bool,
    /// Current measured temperature.
    pub heat_temp_now: f64,
    /// Target temperature.
    pub heat_temp_set: f64,
    /// Unit both temperatures are reported in.
    pub temp_set_unit: TemperatureUnit,
}

impl DeviceStatus {
    /// Creates a status record.
    #[must_use]
    pub fn new(
        heat_power: bool,
        heat_temp_now: f64,
        heat_temp_set: f64,
        temp_set_unit: TemperatureUnit,
    ) -> Self {
        Self {
            heat_power,
            heat_temp_now,
            heat_temp_set,
            temp_set_unit,
        }
    }

    /// Parses a status record from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the payload is malformed or a field is
    /// missing or has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Returns `true` while heating is enabled and the water is below target.
    #[must_use]
    pub fn is_below_target(&self) -> bool {
        self.heat_power && self.heat_temp_now < self.heat_temp_set
    }
}
