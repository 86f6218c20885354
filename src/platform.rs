// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate platform setup.
//!
//! One [`Thermostat`] exists per device the coordinator knows about. Entities
//! are created when the device list is enumerated and dropped when a device
//! disappears from it or the platform is unloaded.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use vsmart_lib::platform::ThermostatPlatform;
//!
//! let mut platform = ThermostatPlatform::new(Arc::new(coordinator), Arc::new(api));
//! platform.setup(|entities| host.add_entities(entities));
//!
//! // After the coordinator polled a changed device list
//! let changes = platform.sync();
//! for device_id in &changes.removed {
//!     host.remove_entity(device_id);
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use crate::api::ThermostatApi;
use crate::coordinator::Coordinator;
use crate::thermostat::Thermostat;

/// Builds one thermostat per known device and registers them as a batch.
///
/// Returns the number of entities handed to `add_entities`.
pub fn setup_entry<C, A, F>(coordinator: &Arc<C>, api: &Arc<A>, add_entities: F) -> usize
where
    C: Coordinator,
    A: ThermostatApi,
    F: FnOnce(Vec<Thermostat<C, A>>),
{
    let entities: Vec<_> = coordinator
        .device_ids()
        .into_iter()
        .map(|device_id| Thermostat::new(device_id, Arc::clone(coordinator), Arc::clone(api)))
        .collect();

    let count = entities.len();
    info!(count, "setting up thermostat entities");
    add_entities(entities);
    count
}

/// Device identifiers affected by a [`ThermostatPlatform::sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformChanges {
    /// Devices that gained an entity.
    pub added: Vec<String>,
    /// Devices whose entity was dropped.
    pub removed: Vec<String>,
}

impl PlatformChanges {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Live set of thermostat entities, keyed by device identifier.
pub struct ThermostatPlatform<C, A> {
    coordinator: Arc<C>,
    api: Arc<A>,
    entities: BTreeMap<String, Thermostat<C, A>>,
}

impl<C: Coordinator, A: ThermostatApi> ThermostatPlatform<C, A> {
    /// Creates an empty platform.
    #[must_use]
    pub fn new(coordinator: Arc<C>, api: Arc<A>) -> Self {
        Self {
            coordinator,
            api,
            entities: BTreeMap::new(),
        }
    }

    /// Enumerates devices and registers an entity for each new one.
    ///
    /// Returns the number of entities handed to `add_entities`.
    pub fn setup<F>(&mut self, add_entities: F) -> usize
    where
        F: FnOnce(Vec<Thermostat<C, A>>),
    {
        let changes = self.sync();
        let added: Vec<_> = changes
            .added
            .iter()
            .filter_map(|device_id| self.entities.get(device_id).cloned())
            .collect();

        let count = added.len();
        add_entities(added);
        count
    }

    /// Re-enumerates devices, creating and dropping entities to match.
    pub fn sync(&mut self) -> PlatformChanges {
        let mut device_ids = self.coordinator.device_ids();
        device_ids.sort();
        device_ids.dedup();

        let removed: Vec<String> = self
            .entities
            .keys()
            .filter(|id| device_ids.binary_search(*id).is_err())
            .cloned()
            .collect();
        for device_id in &removed {
            self.entities.remove(device_id);
        }

        let mut added = Vec::new();
        for device_id in device_ids {
            if self.entities.contains_key(&device_id) {
                continue;
            }
            let entity = Thermostat::new(
                device_id.clone(),
                Arc::clone(&self.coordinator),
                Arc::clone(&self.api),
            );
            self.entities.insert(device_id.clone(), entity);
            added.push(device_id);
        }

        let changes = PlatformChanges { added, removed };
        if !changes.is_empty() {
            info!(
                added = changes.added.len(),
                removed = changes.removed.len(),
                "thermostat entities changed"
            );
        }
        changes
    }

    /// Returns the entity of a device.
    #[must_use]
    pub fn get(&self, device_id: &str) -> Option<&Thermostat<C, A>> {
        self.entities.get(device_id)
    }

    /// Iterates over all entities in device identifier order.
    pub fn entities(&self) -> impl Iterator<Item = &Thermostat<C, A>> {
        self.entities.values()
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if there are no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drops every entity, returning the device identifiers they belonged to.
    pub fn unload(&mut self) -> Vec<String> {
        let removed: Vec<String> = std::mem::take(&mut self.entities).into_keys().collect();
        info!(count = removed.len(), "unloaded thermostat entities");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::ClimateState;
    use crate::coordinator::StatusCache;
    use crate::error::{ApiError, RefreshError};
    use crate::state::DeviceStatus;
    use crate::types::TemperatureUnit;

    struct CacheCoordinator(StatusCache);

    impl Coordinator for CacheCoordinator {
        fn status(&self, device_id: &str) -> Option<DeviceStatus> {
            self.0.get(device_id)
        }

        fn device_ids(&self) -> Vec<String> {
            self.0.device_ids()
        }

        async fn refresh(&self) -> Result<(), RefreshError> {
            Ok(())
        }
    }

    struct NoopApi;

    impl ThermostatApi for NoopApi {
        async fn set_heat(&self, _: &str, _: bool) -> Result<(), ApiError> {
            Ok(())
        }

        async fn set_heat_temp(&self, _: &str, _: f64) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn status() -> DeviceStatus {
        DeviceStatus::new(false, 30.0, 37.0, TemperatureUnit::Celsius)
    }

    fn cache_with(ids: &[&str]) -> StatusCache {
        let cache = StatusCache::new();
        for id in ids {
            cache.insert(*id, status());
        }
        cache
    }

    #[test]
    fn setup_entry_creates_one_entity_per_device() {
        let coordinator = Arc::new(CacheCoordinator(cache_with(&["b", "a"])));
        let api = Arc::new(NoopApi);

        let mut registered = Vec::new();
        let count = setup_entry(&coordinator, &api, |entities| registered = entities);

        assert_eq!(count, 2);
        let ids: Vec<_> = registered.iter().map(ClimateState::unique_id).collect();
        assert_eq!(ids, vec!["a_thermostat", "b_thermostat"]);
    }

    #[test]
    fn setup_entry_without_devices() {
        let coordinator = Arc::new(CacheCoordinator(StatusCache::new()));
        let count = setup_entry(&coordinator, &Arc::new(NoopApi), |entities| {
            assert!(entities.is_empty());
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn sync_tracks_device_list() {
        let cache = cache_with(&["spa-1", "spa-2"]);
        let mut platform =
            ThermostatPlatform::new(Arc::new(CacheCoordinator(cache.clone())), Arc::new(NoopApi));

        let count = platform.setup(|entities| assert_eq!(entities.len(), 2));
        assert_eq!(count, 2);
        assert!(platform.get("spa-1").is_some());

        cache.remove("spa-1");
        cache.insert("spa-3", status());
        let changes = platform.sync();

        assert_eq!(changes.added, vec!["spa-3".to_string()]);
        assert_eq!(changes.removed, vec!["spa-1".to_string()]);
        assert!(platform.get("spa-1").is_none());
        assert_eq!(platform.len(), 2);

        assert!(platform.sync().is_empty());
    }

    #[test]
    fn unload_drops_everything() {
        let cache = cache_with(&["spa-1", "spa-2"]);
        let mut platform =
            ThermostatPlatform::new(Arc::new(CacheCoordinator(cache)), Arc::new(NoopApi));
        platform.setup(|_| {});

        let removed = platform.unload();
        assert_eq!(removed, vec!["spa-1".to_string(), "spa-2".to_string()]);
        assert!(platform.is_empty());
        assert_eq!(platform.entities().count(), 0);
    }
}
