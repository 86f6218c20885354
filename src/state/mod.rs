// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status and the climate state derived from it.
//!
//! [`DeviceStatus`] is the record the coordinator polls from the cloud.
//! [`DisplayState`] is what the host shows, computed from the latest
//! status on every read.
//!
//! # Examples
//!
//! ```
//! use vsmart_lib::state::{DeviceStatus, DisplayState};
//! use vsmart_lib::types::{HvacMode, TemperatureUnit};
//!
//! let status = DeviceStatus::new(false, 30.0, 37.0, TemperatureUnit::Celsius);
//! let state = DisplayState::from_status(Some(&status));
//!
//! assert_eq!(state.hvac_mode, Some(HvacMode::Off));
//! ```

mod device_status;
mod display_state;

pub use device_status::DeviceStatus;
pub use display_state::DisplayState;
