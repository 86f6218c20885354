// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for `VSmart` thermostats.
//!
//! # Types
//!
//! - [`HvacMode`] / [`HvacAction`] - Selected mode and observed activity
//! - [`TemperatureUnit`] - Celsius or Fahrenheit label
//! - [`Precision`] - Display increment for temperatures
//! - [`DhwState`] - Domestic hot water on/off
//! - [`Region`] - Regional cloud and its API root

mod dhw;
mod hvac;
mod region;
mod temperature;

pub use dhw::DhwState;
pub use hvac::{HvacAction, HvacMode};
pub use region::Region;
pub use temperature::{Precision, TemperatureUnit};
