//! # Anomaly dispatcher — the anomaly-to-interlock response pipeline
//!
//! Translates a manually selected anomaly into deterministic device-state
//! mutation, then consults the interlock table to decide whether to append
//! a response log line and narrate it. The interlock's declared action is
//! reported, never executed against the target device type.
//!
//! The dispatcher has no failure modes of its own: an unknown device id or
//! a missing/disarmed interlock degrades to a silent partial effect.

use crate::alert_buffer::AlertBuffer;
use crate::interlocks::InterlockTable;
use chakra_core::i18n::{Language, Phrase};
use chakra_core::mitre;
use chakra_core::narration::Narrator;
use chakra_core::oplog::OpsLog;
use chakra_registry::registry::DeviceRegistry;
use chakra_registry::types::{DeviceStatus, LifecycleStage, SecurityAlert, ThreatLevel};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// The closed set of manually triggerable anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnomalyKind {
    Hidden,
    Broken,
    Fire,
    Theft,
}

impl AnomalyKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "HIDDEN" => Some(Self::Hidden),
            "BROKEN" => Some(Self::Broken),
            "FIRE" => Some(Self::Fire),
            "THEFT" => Some(Self::Theft),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hidden => "HIDDEN",
            Self::Broken => "BROKEN",
            Self::Fire => "FIRE",
            Self::Theft => "THEFT",
        }
    }

    fn severity(&self) -> ThreatLevel {
        match self {
            Self::Hidden | Self::Broken => ThreatLevel::High,
            Self::Fire | Self::Theft => ThreatLevel::Critical,
        }
    }

    fn mitre_mapping(&self) -> chakra_core::mitre::MitreMapping {
        match self {
            Self::Hidden => mitre::camera_occluded(),
            Self::Broken => mitre::hardware_destroyed(),
            Self::Fire => mitre::fire_hazard(),
            Self::Theft => mitre::node_theft(),
        }
    }
}

pub struct AnomalyDispatcher {
    registry: Arc<DeviceRegistry>,
    interlocks: Arc<InterlockTable>,
    oplog: Arc<OpsLog>,
    narrator: Arc<dyn Narrator>,
    alerts: Arc<AlertBuffer>,
    fire_heatmap_active: AtomicBool,
    language: RwLock<Language>,
    speech_enabled: AtomicBool,
}

impl AnomalyDispatcher {
    pub fn new(
        registry: Arc<DeviceRegistry>,
        interlocks: Arc<InterlockTable>,
        oplog: Arc<OpsLog>,
        narrator: Arc<dyn Narrator>,
        alerts: Arc<AlertBuffer>,
    ) -> Self {
        Self {
            registry,
            interlocks,
            oplog,
            narrator,
            alerts,
            fire_heatmap_active: AtomicBool::new(false),
            language: RwLock::new(Language::En),
            speech_enabled: AtomicBool::new(true),
        }
    }

    /// Apply `kind` to the device identified by `device_id`.
    ///
    /// A no-op when no such device exists — that is the "no node selected"
    /// guard, not an error. Returns the mutated device snapshot otherwise.
    pub fn dispatch(&self, kind: AnomalyKind, device_id: &str) -> Option<chakra_registry::types::Device> {
        if self.registry.get(device_id).is_none() {
            warn!(device = %device_id, anomaly = kind.label(), "Dispatch ignored: no such device");
            return None;
        }

        let mut trace: Vec<String> = Vec::new();
        let updated = self.registry.update(device_id, |d| {
            d.tamper_alerted = false;
            match kind {
                AnomalyKind::Hidden => {
                    d.scene_integrity = Some(0);
                    d.status = DeviceStatus::Compromised;
                    trace.push("scene_integrity=0".into());
                    trace.push("status=compromised".into());
                }
                AnomalyKind::Broken => {
                    d.hardware_health = Some(0);
                    d.status = DeviceStatus::Offline;
                    trace.push("hardware_health=0".into());
                    trace.push("status=offline".into());
                }
                AnomalyKind::Fire => {
                    d.status = DeviceStatus::Compromised;
                    trace.push("status=compromised".into());
                }
                AnomalyKind::Theft => {
                    d.status = DeviceStatus::Offline;
                    d.hardware_health = Some(0);
                    d.scene_integrity = Some(0);
                    trace.push("status=offline".into());
                    trace.push("hardware_health=0".into());
                    trace.push("scene_integrity=0".into());
                }
            }
        })?;

        let mut action_taken = None;
        match kind {
            AnomalyKind::Fire => {
                self.fire_heatmap_active.store(true, Ordering::Relaxed);
                trace.push("fire_heatmap=active".into());
                if let Some(lock) = self.interlocks.find_by_trigger("FIRE_DETECTION") {
                    if lock.is_active {
                        self.oplog.append(format!(
                            "INTERLOCK: Executing {} on {}...",
                            lock.action, lock.device_type
                        ));
                        self.narrate(Phrase::FireInterlocksEngaged);
                        action_taken = Some(lock.action);
                    }
                }
            }
            AnomalyKind::Theft => {
                if let Some(lock) = self.interlocks.find_by_trigger("THEFT_ALERT") {
                    if lock.is_active {
                        self.oplog
                            .append(format!("INTERLOCK: Locking all {}s.", lock.device_type));
                        self.narrate(Phrase::TheftLockingExits);
                        action_taken = Some(lock.action);
                    }
                }
            }
            AnomalyKind::Hidden | AnomalyKind::Broken => {}
        }

        self.alerts.push(SecurityAlert {
            id: 0,
            timestamp: chrono::Utc::now().timestamp(),
            device_id: device_id.into(),
            alert_type: kind.label().into(),
            severity: kind.severity(),
            description: format!("{} anomaly on {}", kind.label(), updated.name),
            reasoning: Some("Manually triggered simulation".into()),
            action_taken,
            forensic_trace: trace,
            is_honey_trigger: updated.is_honeypot,
            current_stage: LifecycleStage::Detection,
            mitre: Some(kind.mitre_mapping()),
            confidence_score: Some(1.0),
        });

        Some(updated)
    }

    /// True once any FIRE dispatch has occurred. Set-only; repeated fires
    /// leave it set.
    pub fn fire_heatmap_active(&self) -> bool {
        self.fire_heatmap_active.load(Ordering::Relaxed)
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn set_language(&self, lang: Language) {
        *self.language.write() = lang;
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech_enabled.load(Ordering::Relaxed)
    }

    pub fn set_speech_enabled(&self, enabled: bool) {
        self.speech_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn alerts(&self) -> Arc<AlertBuffer> {
        self.alerts.clone()
    }

    fn narrate(&self, phrase: Phrase) {
        if !self.speech_enabled() {
            return;
        }
        let lang = self.language();
        self.narrator.speak(phrase.text(lang), lang);
    }
}
