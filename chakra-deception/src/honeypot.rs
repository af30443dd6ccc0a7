//! # Honeypot deployer
//!
//! Synthesizes a decoy device and appends it to the registry: a hub named
//! "Deception Cube" with a random last-octet address, the fixed deceptive
//! MAC marker, the CRITICAL profile, full hardware health, and a trap log
//! stamped with deployment time. Ids derive from a millisecond timestamp,
//! so collisions need sub-millisecond invocation rates — tolerated here.

use chakra_core::i18n::{Language, Phrase};
use chakra_core::mitre;
use chakra_core::narration::Narrator;
use chakra_core::oplog::OpsLog;
use chakra_registry::registry::DeviceRegistry;
use chakra_registry::seed;
use chakra_registry::types::{
    Device, DeviceKind, DeviceStatus, LifecycleStage, SecurityAlert, ThreatLevel,
};
use chakra_safety::AlertBuffer;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::warn;

/// The MAC every decoy advertises. Deliberately conspicuous in the
/// inventory, invisible to the simulated attacker.
const DECOY_MAC: &str = "FF:FF:FF:DE:AD:BE";

pub struct HoneypotDeployer {
    registry: Arc<DeviceRegistry>,
    oplog: Arc<OpsLog>,
    narrator: Arc<dyn Narrator>,
    alerts: Option<Arc<AlertBuffer>>,
    language: RwLock<Language>,
    speech_enabled: AtomicBool,
    total_deployed: AtomicU64,
}

impl HoneypotDeployer {
    pub fn new(registry: Arc<DeviceRegistry>, oplog: Arc<OpsLog>, narrator: Arc<dyn Narrator>) -> Self {
        Self {
            registry,
            oplog,
            narrator,
            alerts: None,
            language: RwLock::new(Language::En),
            speech_enabled: AtomicBool::new(true),
            total_deployed: AtomicU64::new(0),
        }
    }

    /// Attach the structured-alert sink. Without one, trap activity is
    /// still logged and narrated but produces no alert record.
    pub fn with_alerts(mut self, alerts: Arc<AlertBuffer>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// Deploy one decoy. Returns the synthesized device as appended.
    pub fn deploy(&self) -> Device {
        let now = chrono::Utc::now();
        let last_octet: u8 = rand::thread_rng().gen_range(2..=255);

        let mut decoy = Device::new(
            &format!("trap-{}", now.timestamp_millis()),
            "Deception Cube",
            &format!("192.168.1.{}", last_octet),
            DECOY_MAC,
            DeviceKind::Hub,
        )
        .with_profile(seed::honeypot_profile());
        decoy.status = DeviceStatus::Online;
        decoy.hardware_health = Some(100);
        decoy.is_honeypot = true;
        decoy.trap_logs.push(format!("DEPLOYED: {}", now.to_rfc3339()));

        self.registry.append(decoy.clone());
        self.total_deployed.fetch_add(1, Ordering::Relaxed);
        self.oplog
            .append("DEPLOYED: Honeypot 'Deception Cube' initialized at Discovery Layer.");
        self.narrate(Phrase::HoneypotDeployed);
        decoy
    }

    /// Record simulated attacker interaction against a deployed decoy.
    /// Silent no-op for unknown ids or non-decoy devices.
    pub fn record_trap_activity(&self, honeypot_id: &str, entry: &str) {
        let Some(device) = self.registry.get(honeypot_id) else {
            warn!(device = %honeypot_id, "Trap activity on unknown device ignored");
            return;
        };
        if !device.is_honeypot {
            warn!(device = %honeypot_id, "Trap activity on non-decoy device ignored");
            return;
        }
        let stamped = format!("{}: {}", chrono::Utc::now().to_rfc3339(), entry);
        self.registry.update(honeypot_id, |d| d.trap_logs.push(stamped));
        self.oplog
            .append("DECEPTION TRIGGERED: Attacker interaction detected.");
        self.narrate(Phrase::DeceptionTriggered);

        if let Some(alerts) = &self.alerts {
            alerts.push(SecurityAlert {
                id: 0,
                timestamp: chrono::Utc::now().timestamp(),
                device_id: honeypot_id.into(),
                alert_type: "DECEPTION_TRIGGERED".into(),
                severity: ThreatLevel::Critical,
                description: format!("Attacker interaction with decoy {}", device.name),
                reasoning: Some("Any contact with a decoy node is hostile".into()),
                action_taken: None,
                forensic_trace: vec![entry.into()],
                is_honey_trigger: true,
                current_stage: LifecycleStage::Detection,
                mitre: Some(mitre::decoy_interaction()),
                confidence_score: Some(1.0),
            });
        }
    }

    pub fn total_deployed(&self) -> u64 {
        self.total_deployed.load(Ordering::Relaxed)
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn set_language(&self, lang: Language) {
        *self.language.write() = lang;
    }

    pub fn set_speech_enabled(&self, enabled: bool) {
        self.speech_enabled.store(enabled, Ordering::Relaxed);
    }

    fn narrate(&self, phrase: Phrase) {
        if !self.speech_enabled.load(Ordering::Relaxed) {
            return;
        }
        let lang = self.language();
        self.narrator.speak(phrase.text(lang), lang);
    }
}
