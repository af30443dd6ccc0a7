//! Seed topology: the fixed profile catalog and initial device inventory
//! the simulator boots with.

use crate::types::{Device, DeviceKind, ThreatLevel, ThreatProfile};

/// The three-entry profile catalog. Index 1 (High-Security Link) and
/// index 2 (Core Infrastructure) are the ones the seed devices reference;
/// honeypots always take the CRITICAL profile.
pub fn predefined_profiles() -> Vec<ThreatProfile> {
    vec![
        ThreatProfile {
            id: "p1".into(),
            name: "Standard Endpoint".into(),
            criticality: ThreatLevel::Low,
            description: "General IoT devices.".into(),
            expected_behavior: "Low bandwidth.".into(),
        },
        ThreatProfile {
            id: "p2".into(),
            name: "High-Security Link".into(),
            criticality: ThreatLevel::High,
            description: "Critical entry points.".into(),
            expected_behavior: "Constant stream.".into(),
        },
        ThreatProfile {
            id: "p3".into(),
            name: "Core Infrastructure".into(),
            criticality: ThreatLevel::Critical,
            description: "Vital network infra.".into(),
            expected_behavior: "24/7 uptime.".into(),
        },
    ]
}

/// The profile every deployed decoy carries.
pub fn honeypot_profile() -> ThreatProfile {
    predefined_profiles()
        .into_iter()
        .find(|p| p.criticality == ThreatLevel::Critical)
        .expect("catalog always contains a CRITICAL profile")
}

/// Initial monitored inventory: four cameras, the control hub, a door lock
/// and a gas valve. Order is the discovery-list display order.
pub fn initial_devices() -> Vec<Device> {
    let profiles = predefined_profiles();
    let high = profiles[1].clone();
    let critical = profiles[2].clone();

    vec![
        Device::new("1", "Alpha Cam - Gate", "192.168.1.50", "00:0c:29:ab:cd:ef", DeviceKind::Camera)
            .with_profile(high.clone())
            .with_health(100, 98),
        Device::new("5", "Beta Cam - Hallway", "192.168.1.51", "00:0c:29:ab:cc:11", DeviceKind::Camera)
            .with_profile(high.clone())
            .with_health(99, 100),
        Device::new("6", "Gamma Cam - Perimeter", "192.168.1.52", "00:0c:29:ab:cc:22", DeviceKind::Camera)
            .with_profile(critical.clone())
            .with_health(100, 95),
        Device::new("7", "Delta Cam - Lobby", "192.168.1.53", "00:0c:29:ab:cc:33", DeviceKind::Camera)
            .with_profile(high)
            .with_health(98, 99),
        Device::new("2", "Main Control Hub", "192.168.1.1", "00:0c:29:12:34:56", DeviceKind::Hub)
            .with_profile(critical)
            .with_health(98, 100),
        Device::new("3", "Front Door Lock", "192.168.1.10", "00:0c:29:12:34:AA", DeviceKind::Lock),
        Device::new("4", "Kitchen Gas Valve", "192.168.1.11", "00:0c:29:12:34:BB", DeviceKind::GasValve),
    ]
}
