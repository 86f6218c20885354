// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status coordinator interface.
//!
//! A coordinator polls the cloud for every device on the account and keeps
//! the latest [`DeviceStatus`] of each. Thermostats read from it and ask it
//! to refresh after sending a command.
//!
//! [`StatusCache`] is a shared snapshot map a coordinator implementation can
//! keep its statuses in.
//!
//! # Examples
//!
//! ```
//! use vsmart_lib::coordinator::StatusCache;
//! use vsmart_lib::state::DeviceStatus;
//! use vsmart_lib::types::TemperatureUnit;
//!
//! let cache = StatusCache::new();
//! cache.insert("spa-1", DeviceStatus::new(true, 35.0, 38.0, TemperatureUnit::Celsius));
//!
//! assert_eq!(cache.device_ids(), vec!["spa-1".to_string()]);
//! assert!(cache.get("spa-1").unwrap().heat_power);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::RefreshError;
use crate::state::DeviceStatus;

/// Source of device statuses that can be asked to refresh.
#[allow(async_fn_in_trait)]
pub trait Coordinator {
    /// Returns the latest status of a device, or `None` if none was fetched.
    fn status(&self, device_id: &str) -> Option<DeviceStatus>;

    /// Returns the identifiers of all known devices.
    fn device_ids(&self) -> Vec<String>;

    /// Fetches fresh statuses for all devices.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError` if the statuses could not be fetched.
    async fn refresh(&self) -> Result<(), RefreshError>;
}

/// Shared map from device identifier to its latest status.
///
/// Cloning the cache yields another handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct StatusCache {
    statuses: Arc<RwLock<HashMap<String, DeviceStatus>>>,
}

impl StatusCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of a device's latest status.
    #[must_use]
    pub fn get(&self, device_id: &str) -> Option<DeviceStatus> {
        self.statuses.read().get(device_id).cloned()
    }

    /// Stores the latest status of a device, returning the previous one.
    pub fn insert(&self, device_id: impl Into<String>, status: DeviceStatus) -> Option<DeviceStatus> {
        self.statuses.write().insert(device_id.into(), status)
    }

    /// Forgets a device.
    pub fn remove(&self, device_id: &str) -> Option<DeviceStatus> {
        self.statuses.write().remove(device_id)
    }

    /// Replaces every status with a freshly polled set.
    ///
    /// Returns the identifiers that were present before but are missing from
    /// the new set, sorted.
    pub fn replace_all(&self, statuses: HashMap<String, DeviceStatus>) -> Vec<String> {
        let mut guard = self.statuses.write();
        let mut gone: Vec<String> = guard
            .keys()
            .filter(|id| !statuses.contains_key(*id))
            .cloned()
            .collect();
        *guard = statuses;
        drop(guard);

        gone.sort();
        gone
    }

    /// Returns the identifiers of all cached devices, sorted.
    #[must_use]
    pub fn device_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.statuses.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns the number of cached devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.read().len()
    }

    /// Returns `true` if no device is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemperatureUnit;

    fn status(now: f64) -> DeviceStatus {
        DeviceStatus::new(true, now, 38.0, TemperatureUnit::Celsius)
    }

    #[test]
    fn insert_and_get() {
        let cache = StatusCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("spa").is_none());

        assert!(cache.insert("spa", status(30.0)).is_none());
        let previous = cache.insert("spa", status(31.0)).unwrap();

        assert!((previous.heat_temp_now - 30.0).abs() < f64::EPSILON);
        assert!((cache.get("spa").unwrap().heat_temp_now - 31.0).abs() < f64::EPSILON);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_the_same_map() {
        let cache = StatusCache::new();
        let handle = cache.clone();
        handle.insert("spa", status(30.0));
        assert!(cache.get("spa").is_some());
    }

    #[test]
    fn replace_all_reports_vanished_devices() {
        let cache = StatusCache::new();
        cache.insert("b", status(1.0));
        cache.insert("a", status(2.0));
        cache.insert("c", status(3.0));

        let fresh = HashMap::from([("c".to_string(), status(4.0)), ("d".to_string(), status(5.0))]);
        let gone = cache.replace_all(fresh);

        assert_eq!(gone, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cache.device_ids(), vec!["c".to_string(), "d".to_string()]);
    }

    #[test]
    fn remove_device() {
        let cache = StatusCache::new();
        cache.insert("spa", status(30.0));
        assert!(cache.remove("spa").is_some());
        assert!(cache.remove("spa").is_none());
        assert!(cache.is_empty());
    }
}
