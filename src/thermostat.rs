// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity for a `VSmart` spa thermostat.
//!
//! The thermostat keeps no state of its own. Every read is derived from the
//! coordinator's latest status, and every command is followed by a refresh
//! so the displayed state converges with the device.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::ThermostatApi;
use crate::capabilities::Capabilities;
use crate::climate::{ClimateControl, ClimateState, SetTemperature};
use crate::coordinator::Coordinator;
use crate::error::Result;
use crate::state::DisplayState;
use crate::types::{HvacAction, HvacMode, TemperatureUnit};

/// Display name of every thermostat entity.
pub const THERMOSTAT_NAME: &str = "VSmart Thermostat";

static CAPABILITIES: Capabilities = Capabilities::vsmart();

/// Thermostat entity of one spa.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use vsmart_lib::{ClimateControl, ClimateState, Thermostat};
/// use vsmart_lib::types::HvacMode;
///
/// let thermostat = Thermostat::new("spa-1", Arc::new(coordinator), Arc::new(api));
/// assert_eq!(thermostat.unique_id(), "spa-1_thermostat");
///
/// thermostat.set_hvac_mode(HvacMode::Heat).await?;
/// ```
pub struct Thermostat<C, A> {
    device_id: String,
    unique_id: String,
    coordinator: Arc<C>,
    api: Arc<A>,
}

impl<C: Coordinator, A: ThermostatApi> Thermostat<C, A> {
    /// Creates the thermostat entity of a device.
    #[must_use]
    pub fn new(device_id: impl Into<String>, coordinator: Arc<C>, api: Arc<A>) -> Self {
        let device_id = device_id.into();
        let unique_id = format!("{device_id}_thermostat");
        Self {
            device_id,
            unique_id,
            coordinator,
            api,
        }
    }

    /// Identifier of the device this entity controls.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    fn current(&self) -> DisplayState {
        DisplayState::from_status(self.coordinator.status(&self.device_id).as_ref())
    }

    /// Requests a coordinator refresh. A failed refresh is logged and left to
    /// the next poll; the command before it has already been applied.
    async fn refresh(&self) {
        debug!(device_id = %self.device_id, "requesting status refresh");
        if let Err(err) = self.coordinator.refresh().await {
            warn!(device_id = %self.device_id, error = %err, "status refresh failed");
        }
    }
}

impl<C: Coordinator, A: ThermostatApi> ClimateState for Thermostat<C, A> {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        THERMOSTAT_NAME
    }

    fn capabilities(&self) -> &Capabilities {
        &CAPABILITIES
    }

    fn hvac_mode(&self) -> Option<HvacMode> {
        self.current().hvac_mode
    }

    fn hvac_action(&self) -> Option<HvacAction> {
        self.current().hvac_action
    }

    fn current_temperature(&self) -> Option<f64> {
        self.current().current_temperature
    }

    fn target_temperature(&self) -> Option<f64> {
        self.current().target_temperature
    }

    fn temperature_unit(&self) -> TemperatureUnit {
        self.current().temperature_unit
    }

    fn display_state(&self) -> DisplayState {
        self.current()
    }
}

impl<C: Coordinator, A: ThermostatApi> ClimateControl for Thermostat<C, A> {
    async fn set_hvac_mode(&self, mode: HvacMode) -> Result<()> {
        let heat = mode == HvacMode::Heat;
        debug!(device_id = %self.device_id, %mode, heat, "setting heat power");

        self.api
            .set_heat(&self.device_id, heat)
            .await
            .inspect_err(|err| {
                warn!(device_id = %self.device_id, error = %err, "set heat power failed");
            })?;

        self.refresh().await;
        Ok(())
    }

    async fn set_temperature(&self, request: SetTemperature) -> Result<()> {
        let Some(temperature) = request.temperature else {
            return Ok(());
        };
        debug!(device_id = %self.device_id, temperature, "setting target temperature");

        self.api
            .set_heat_temp(&self.device_id, temperature)
            .await
            .inspect_err(|err| {
                warn!(device_id = %self.device_id, error = %err, "set target temperature failed");
            })?;

        self.refresh().await;
        Ok(())
    }
}

impl<C, A> Clone for Thermostat<C, A> {
    fn clone(&self) -> Self {
        Self {
            device_id: self.device_id.clone(),
            unique_id: self.unique_id.clone(),
            coordinator: Arc::clone(&self.coordinator),
            api: Arc::clone(&self.api),
        }
    }
}

impl<C, A> fmt::Debug for Thermostat<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thermostat")
            .field("device_id", &self.device_id)
            .field("unique_id", &self.unique_id)
            .finish_non_exhaustive()
    }
}
