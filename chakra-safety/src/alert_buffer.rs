//! Bounded buffer of structured security alerts.
//!
//! The human-readable log stream stays thin on purpose; this buffer is the
//! richer record — severity, framework mapping, confidence, forensic trace.
//! Oldest alerts are dropped once the cap is reached.

use chakra_registry::types::SecurityAlert;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

const MAX_ALERTS: usize = 5_000;

pub struct AlertBuffer {
    alerts: RwLock<Vec<SecurityAlert>>,
    next_id: AtomicU64,
}

impl AlertBuffer {
    pub fn new() -> Self {
        Self {
            alerts: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Assigns the alert its id and stores it. Returns the assigned id.
    pub fn push(&self, mut alert: SecurityAlert) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        alert.id = id;
        let mut alerts = self.alerts.write();
        if alerts.len() >= MAX_ALERTS {
            alerts.remove(0);
        }
        alerts.push(alert);
        id
    }

    pub fn alerts(&self) -> Vec<SecurityAlert> {
        self.alerts.read().clone()
    }

    pub fn for_device(&self, device_id: &str) -> Vec<SecurityAlert> {
        self.alerts
            .read()
            .iter()
            .filter(|a| a.device_id == device_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.alerts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.read().is_empty()
    }
}

impl Default for AlertBuffer {
    fn default() -> Self {
        Self::new()
    }
}
