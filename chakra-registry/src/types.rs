//! Shared types for the device inventory layer.

use chakra_core::mitre::MitreMapping;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Static catalog entry describing how critical a node is and how it is
/// expected to behave. Referenced by devices, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatProfile {
    pub id: String,
    pub name: String,
    pub criticality: ThreatLevel,
    pub description: String,
    pub expected_behavior: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    Camera,
    SmartPlug,
    Thermostat,
    Hub,
    Lock,
    GasValve,
}

impl DeviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Camera => "camera",
            DeviceKind::SmartPlug => "smart-plug",
            DeviceKind::Thermostat => "thermostat",
            DeviceKind::Hub => "hub",
            DeviceKind::Lock => "lock",
            DeviceKind::GasValve => "gas-valve",
        }
    }
}

/// Not a validated state machine: status is set independently of the health
/// fields, so "online with zero hardware health" is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    Compromised,
}

impl DeviceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Compromised => "compromised",
        }
    }
}

/// A monitored or decoy endpoint. Network identity is cosmetic — addresses
/// are never validated or used for real communication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub mac: String,
    pub kind: DeviceKind,
    pub status: DeviceStatus,
    /// Unix timestamp of the last observed mutation, if any.
    pub last_seen: Option<i64>,
    pub profile: Option<ThreatProfile>,
    /// Conventionally 0..=100; bounds are not enforced.
    pub hardware_health: Option<u8>,
    /// Conventionally 0..=100; bounds are not enforced.
    pub scene_integrity: Option<u8>,
    pub tamper_alerted: bool,
    pub is_honeypot: bool,
    /// Append-only trap-activity log; only populated on decoys.
    pub trap_logs: Vec<String>,
}

impl Device {
    pub fn new(id: &str, name: &str, ip: &str, mac: &str, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ip: ip.into(),
            mac: mac.into(),
            kind,
            status: DeviceStatus::Online,
            last_seen: None,
            profile: None,
            hardware_health: None,
            scene_integrity: None,
            tamper_alerted: false,
            is_honeypot: false,
            trap_logs: Vec::new(),
        }
    }

    pub fn with_profile(mut self, profile: ThreatProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_health(mut self, hardware_health: u8, scene_integrity: u8) -> Self {
        self.hardware_health = Some(hardware_health);
        self.scene_integrity = Some(scene_integrity);
        self
    }
}

/// Incident lifecycle phase carried on structured alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LifecycleStage {
    Detection,
    Analysis,
    Containment,
    Remediation,
    Forensics,
    Breach,
    Training,
}

/// Structured alert record produced by the anomaly pipeline. Richer than
/// the human-readable log stream: severity, framework mapping, confidence,
/// and a forensic trace of the field mutations that were applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: u64,
    pub timestamp: i64,
    pub device_id: String,
    pub alert_type: String,
    pub severity: ThreatLevel,
    pub description: String,
    pub reasoning: Option<String>,
    pub action_taken: Option<String>,
    pub forensic_trace: Vec<String>,
    pub is_honey_trigger: bool,
    pub current_stage: LifecycleStage,
    pub mitre: Option<MitreMapping>,
    pub confidence_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_level_ordering() {
        assert!(ThreatLevel::Low < ThreatLevel::Critical);
        assert!(ThreatLevel::High < ThreatLevel::Critical);
    }

    #[test]
    fn test_device_kind_labels_match_wire_names() {
        let json = serde_json::to_string(&DeviceKind::GasValve).unwrap();
        assert_eq!(json, "\"gas-valve\"");
        assert_eq!(DeviceKind::GasValve.label(), "gas-valve");
    }

    #[test]
    fn test_inconsistent_status_is_representable() {
        // Status and health are independent fields on purpose.
        let mut d = Device::new("x", "X", "10.0.0.1", "00:00:00:00:00:01", DeviceKind::Camera)
            .with_health(0, 0);
        d.status = DeviceStatus::Online;
        assert_eq!(d.status, DeviceStatus::Online);
        assert_eq!(d.hardware_health, Some(0));
    }
}
