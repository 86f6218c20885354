// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command interface of the cloud API client.
//!
//! The client itself (authentication, HTTP transport, timeouts) lives
//! outside this crate. A thermostat only needs the two commands below.

use crate::error::ApiError;

/// Remote commands a thermostat can issue.
#[allow(async_fn_in_trait)]
pub trait ThermostatApi {
    /// Enables or disables heating on a device.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the command could not be delivered or was
    /// rejected by the cloud API.
    async fn set_heat(&self, device_id: &str, enabled: bool) -> Result<(), ApiError>;

    /// Sets the target temperature of a device, in the device's unit.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the command could not be delivered or was
    /// rejected by the cloud API.
    async fn set_heat_temp(&self, device_id: &str, temperature: f64) -> Result<(), ApiError>;
}
