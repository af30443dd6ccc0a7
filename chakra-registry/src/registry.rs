//! # Device registry — authoritative node inventory
//!
//! An ordered collection of devices: seed order is display order, decoys
//! append at the end. Supports lookup, copy-on-write update, and append.
//! There is deliberately no deletion operation — nodes never leave the
//! inventory once discovered or deployed.
//!
//! All writes originate from a single synchronous operator action at a
//! time; the lock is the house idiom for shared component state, not a
//! concurrency requirement of the model.

use crate::seed;
use crate::types::{Device, DeviceKind};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

pub struct DeviceRegistry {
    devices: RwLock<Vec<Device>>,
    total_appended: AtomicU64,
}

impl DeviceRegistry {
    /// An empty registry. Mostly useful in tests.
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(Vec::new()),
            total_appended: AtomicU64::new(0),
        }
    }

    /// A registry pre-populated with the seed topology.
    pub fn seeded() -> Self {
        Self::with_devices(seed::initial_devices())
    }

    pub fn with_devices(devices: Vec<Device>) -> Self {
        let count = devices.len() as u64;
        Self {
            devices: RwLock::new(devices),
            total_appended: AtomicU64::new(count),
        }
    }

    /// Lookup by id; returns a cloned snapshot.
    pub fn get(&self, id: &str) -> Option<Device> {
        self.devices.read().iter().find(|d| d.id == id).cloned()
    }

    /// Copy-on-write update: clones the stored device, applies `f` to the
    /// clone, replaces the stored value, and returns the new snapshot.
    /// Fields `f` does not touch are carried over untouched. Unknown ids
    /// are a silent no-op.
    pub fn update(&self, id: &str, f: impl FnOnce(&mut Device)) -> Option<Device> {
        let mut devices = self.devices.write();
        let slot = devices.iter_mut().find(|d| d.id == id)?;
        let mut updated = slot.clone();
        f(&mut updated);
        updated.last_seen = Some(chrono::Utc::now().timestamp());
        debug!(device = %id, status = updated.status.label(), "Device updated");
        *slot = updated.clone();
        Some(updated)
    }

    /// Append a new device (the honeypot deployment path). Ids are
    /// timestamp-derived upstream; duplicates are tolerated but logged.
    pub fn append(&self, device: Device) {
        let mut devices = self.devices.write();
        if devices.iter().any(|d| d.id == device.id) {
            warn!(device = %device.id, "Appending device with duplicate id");
        }
        devices.push(device);
        self.total_appended.fetch_add(1, Ordering::Relaxed);
    }

    /// Full inventory snapshot, in display order.
    pub fn devices(&self) -> Vec<Device> {
        self.devices.read().clone()
    }

    pub fn cameras(&self) -> Vec<Device> {
        self.devices
            .read()
            .iter()
            .filter(|d| d.kind == DeviceKind::Camera)
            .cloned()
            .collect()
    }

    pub fn honeypots(&self) -> Vec<Device> {
        self.devices
            .read()
            .iter()
            .filter(|d| d.is_honeypot)
            .cloned()
            .collect()
    }

    pub fn device_count(&self) -> usize {
        self.devices.read().len()
    }

    pub fn total_appended(&self) -> u64 {
        self.total_appended.load(Ordering::Relaxed)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeviceStatus, ThreatLevel};

    #[test]
    fn test_seeded_lookup() {
        let registry = DeviceRegistry::seeded();
        assert_eq!(registry.device_count(), 7);
        let hub = registry.get("2").unwrap();
        assert_eq!(hub.name, "Main Control Hub");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_update_is_copy_on_write() {
        let registry = DeviceRegistry::seeded();
        let before = registry.get("1").unwrap();

        let after = registry
            .update("1", |d| {
                d.status = DeviceStatus::Compromised;
                d.scene_integrity = Some(0);
            })
            .unwrap();

        // The prior snapshot is unaffected.
        assert_eq!(before.status, DeviceStatus::Online);
        assert_eq!(before.scene_integrity, Some(98));
        // The stored value matches the returned snapshot.
        let stored = registry.get("1").unwrap();
        assert_eq!(stored.status, DeviceStatus::Compromised);
        assert_eq!(stored.scene_integrity, Some(0));
        assert_eq!(stored.status, after.status);
        // Untouched fields survive.
        assert_eq!(stored.hardware_health, Some(100));
        assert_eq!(stored.name, before.name);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let registry = DeviceRegistry::seeded();
        assert!(registry.update("ghost", |d| d.status = DeviceStatus::Offline).is_none());
        assert_eq!(registry.device_count(), 7);
    }

    #[test]
    fn test_append_preserves_order() {
        let registry = DeviceRegistry::seeded();
        let decoy = crate::seed::initial_devices()[0].clone();
        let mut decoy = decoy;
        decoy.id = "trap-1".into();
        decoy.is_honeypot = true;
        registry.append(decoy);

        assert_eq!(registry.device_count(), 8);
        let all = registry.devices();
        assert_eq!(all.last().unwrap().id, "trap-1");
        assert_eq!(registry.honeypots().len(), 1);
    }

    #[test]
    fn test_camera_filter() {
        let registry = DeviceRegistry::seeded();
        let cams = registry.cameras();
        assert_eq!(cams.len(), 4);
        assert!(cams.iter().all(|c| c.kind == DeviceKind::Camera));
    }

    #[test]
    fn test_seed_profiles_carry_criticality() {
        let registry = DeviceRegistry::seeded();
        let perimeter = registry.get("6").unwrap();
        assert_eq!(perimeter.profile.unwrap().criticality, ThreatLevel::Critical);
        let lock = registry.get("3").unwrap();
        assert!(lock.profile.is_none());
    }
}
