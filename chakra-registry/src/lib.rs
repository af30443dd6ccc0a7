//! # Chakra Registry — device inventory layer
//!
//! Holds the authoritative list of monitored (and decoy) nodes plus the
//! static threat-profile catalog they reference. All mutation flows through
//! [`registry::DeviceRegistry`], which applies copy-on-write updates: one
//! device update produces a new device value, never an aliased in-place
//! mutation visible to prior snapshots.

pub mod registry;
pub mod seed;
pub mod types;

pub use registry::DeviceRegistry;
pub use types::{Device, DeviceKind, DeviceStatus, LifecycleStage, SecurityAlert, ThreatLevel, ThreatProfile};
