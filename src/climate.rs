// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity interfaces consumed by the host.
//!
//! A climate entity exposes two capabilities: [`ClimateState`] for reading
//! what to display and [`ClimateControl`] for accepting user commands. The
//! host registers entities explicitly instead of deriving from a base type.

use crate::capabilities::Capabilities;
use crate::error::Result;
use crate::state::DisplayState;
use crate::types::{HvacAction, HvacMode, TemperatureUnit};

/// Readable climate state.
///
/// Reads are synchronous and never fail. They return `None` while no device
/// status is available.
pub trait ClimateState {
    /// Stable identifier of the entity.
    fn unique_id(&self) -> &str;

    /// Display name of the entity.
    fn name(&self) -> &str;

    /// Static capabilities.
    fn capabilities(&self) -> &Capabilities;

    /// Selected mode.
    fn hvac_mode(&self) -> Option<HvacMode>;

    /// Observed activity.
    fn hvac_action(&self) -> Option<HvacAction>;

    /// Current measured temperature.
    fn current_temperature(&self) -> Option<f64>;

    /// Target temperature.
    fn target_temperature(&self) -> Option<f64>;

    /// Unit temperatures are displayed in.
    fn temperature_unit(&self) -> TemperatureUnit;

    /// Collects every read property into one snapshot.
    fn display_state(&self) -> DisplayState {
        DisplayState {
            hvac_mode: self.hvac_mode(),
            hvac_action: self.hvac_action(),
            current_temperature: self.current_temperature(),
            target_temperature: self.target_temperature(),
            temperature_unit: self.temperature_unit(),
        }
    }
}

/// Controllable climate entity.
#[allow(async_fn_in_trait)]
pub trait ClimateControl {
    /// Selects a new mode.
    ///
    /// # Errors
    ///
    /// Returns error if the remote command fails. A failed refresh after the
    /// command is logged, not returned.
    async fn set_hvac_mode(&self, mode: HvacMode) -> Result<()>;

    /// Sets a new target temperature.
    ///
    /// A request without a temperature does nothing.
    ///
    /// # Errors
    ///
    /// Returns error if the remote command fails. A failed refresh after the
    /// command is logged, not returned.
    async fn set_temperature(&self, request: SetTemperature) -> Result<()>;
}

/// Arguments of a set-temperature request.
///
/// # Examples
///
/// ```
/// use vsmart_lib::climate::SetTemperature;
///
/// assert_eq!(SetTemperature::to(21.5).temperature, Some(21.5));
/// assert_eq!(SetTemperature::empty().temperature, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SetTemperature {
    /// Requested target temperature, in the device's unit.
    pub temperature: Option<f64>,
}

impl SetTemperature {
    /// Request for a specific target temperature.
    #[must_use]
    pub const fn to(temperature: f64) -> Self {
        Self {
            temperature: Some(temperature),
        }
    }

    /// Request carrying no temperature.
    #[must_use]
    pub const fn empty() -> Self {
        Self { temperature: None }
    }
}

impl From<f64> for SetTemperature {
    fn from(temperature: f64) -> Self {
        Self::to(temperature)
    }
}

impl From<Option<f64>> for SetTemperature {
    fn from(temperature: Option<f64>) -> Self {
        Self { temperature }
    }
}
