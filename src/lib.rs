// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `VSmart` Lib - Climate entities for `VSmart` spa thermostats.
//!
//! This library exposes cloud-connected `VSmart` spa thermostats as climate
//! entities for a home-automation host. Each entity derives its mode,
//! action and temperatures from the latest polled device status and
//! forwards the user's commands to the cloud API.
//!
//! The polling coordinator and the cloud API client are supplied by the
//! caller through the [`Coordinator`] and [`ThermostatApi`] traits.
//!
//! # Supported Features
//!
//! - **Mode control**: Off and heat
//! - **Target temperature**: Half-degree steps between 5 and 30
//! - **Status reporting**: Current temperature, heating activity, unit
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use vsmart_lib::{ClimateControl, ClimateState, SetTemperature, setup_entry};
//! use vsmart_lib::types::HvacMode;
//!
//! let coordinator = Arc::new(MyCoordinator::new(config));
//! let api = Arc::new(MyApiClient::new(config.api_root()));
//!
//! setup_entry(&coordinator, &api, |thermostats| {
//!     for thermostat in thermostats {
//!         host.register(thermostat);
//!     }
//! });
//!
//! // Later, from the host
//! thermostat.set_hvac_mode(HvacMode::Heat).await?;
//! thermostat.set_temperature(SetTemperature::to(37.5)).await?;
//! println!("{:?}", thermostat.display_state());
//! ```

pub mod api;
mod capabilities;
pub mod climate;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod platform;
pub mod state;
mod thermostat;
pub mod types;

pub use api::ThermostatApi;
pub use capabilities::Capabilities;
pub use climate::{ClimateControl, ClimateState, SetTemperature};
pub use config::VSmartConfig;
pub use coordinator::{Coordinator, StatusCache};
pub use error::{ApiError, Error, ParseError, RefreshError, Result, ValueError};
pub use platform::{PlatformChanges, ThermostatPlatform, setup_entry};
pub use state::{DeviceStatus, DisplayState};
pub use thermostat::{THERMOSTAT_NAME, Thermostat};
pub use types::{DhwState, HvacAction, HvacMode, Precision, Region, TemperatureUnit};
