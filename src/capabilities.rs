// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static climate capabilities.
//!
//! Capabilities are declarations the host reads to build its controls.
//! They are never used to validate requests: out-of-range temperatures are
//! forwarded to the cloud API as-is.

use crate::types::{HvacMode, Precision};

/// Capabilities of a climate entity.
///
/// # Examples
///
/// ```
/// use vsmart_lib::Capabilities;
/// use vsmart_lib::types::HvacMode;
///
/// let caps = Capabilities::vsmart();
/// assert!(caps.supports_hvac_mode(HvacMode::Heat));
/// assert!(!caps.supports_hvac_mode(HvacMode::Cool));
/// assert!(caps.supports_target_temperature());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    /// Modes the user can select.
    pub hvac_modes: &'static [HvacMode],

    /// Supports setting a single target temperature.
    pub target_temperature: bool,

    /// Increment for target temperature changes.
    pub target_temperature_step: f64,

    /// Lowest target temperature, in the device's unit.
    pub min_temp: f64,

    /// Highest target temperature, in the device's unit.
    pub max_temp: f64,

    /// Display precision of temperatures.
    pub precision: Precision,
}

impl Capabilities {
    /// Capabilities of a `VSmart` spa thermostat.
    ///
    /// - Off and heat modes
    /// - Target temperature in half-degree steps between 5 and 30
    #[must_use]
    pub const fn vsmart() -> Self {
        Self {
            hvac_modes: &[HvacMode::Off, HvacMode::Heat],
            target_temperature: true,
            target_temperature_step: 0.5,
            min_temp: 5.0,
            max_temp: 30.0,
            precision: Precision::Halves,
        }
    }

    /// Returns `true` if the mode can be selected.
    #[must_use]
    pub fn supports_hvac_mode(&self, mode: HvacMode) -> bool {
        self.hvac_modes.contains(&mode)
    }

    /// Returns `true` if a target temperature can be set.
    #[must_use]
    pub fn supports_target_temperature(&self) -> bool {
        self.target_temperature
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::vsmart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vsmart_modes() {
        let caps = Capabilities::vsmart();
        assert_eq!(caps.hvac_modes, &[HvacMode::Off, HvacMode::Heat]);
        assert!(caps.supports_hvac_mode(HvacMode::Off));
        assert!(caps.supports_hvac_mode(HvacMode::Heat));
        assert!(!caps.supports_hvac_mode(HvacMode::Auto));
        assert!(!caps.supports_hvac_mode(HvacMode::FanOnly));
    }

    #[test]
    fn vsmart_temperature_range() {
        let caps = Capabilities::vsmart();
        assert!(caps.supports_target_temperature());
        assert!((caps.target_temperature_step - 0.5).abs() < f64::EPSILON);
        assert!((caps.min_temp - 5.0).abs() < f64::EPSILON);
        assert!((caps.max_temp - 30.0).abs() < f64::EPSILON);
        assert_eq!(caps.precision, Precision::Halves);
    }

    #[test]
    fn default_is_vsmart() {
        assert_eq!(Capabilities::default(), Capabilities::vsmart());
    }
}
