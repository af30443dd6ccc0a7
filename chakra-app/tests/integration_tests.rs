//! End-to-end integration tests for the Sudarshan Chakra simulator.
//!
//! These exercise real multi-component scenarios across crate boundaries:
//! - Anomaly dispatch → registry mutation → interlock response → log/narration
//! - Interlock arming/disarming mid-scenario
//! - Honeypot deployment into the shared registry
//! - Voice command flow against PTZ state
//! - Config loading driving the bootstrap shape

use std::sync::Arc;

use chakra_core::i18n::{Language, Phrase};
use chakra_core::narration::RecordingNarrator;
use chakra_core::oplog::OpsLog;
use chakra_core::ChakraConfig;
use chakra_deception::HoneypotDeployer;
use chakra_registry::types::{DeviceStatus, ThreatLevel};
use chakra_registry::DeviceRegistry;
use chakra_safety::{AlertBuffer, AnomalyDispatcher, AnomalyKind, InterlockTable};
use chakra_vision::{VoiceCommand, VoiceControl};

struct Rig {
    registry: Arc<DeviceRegistry>,
    interlocks: Arc<InterlockTable>,
    oplog: Arc<OpsLog>,
    narrator: Arc<RecordingNarrator>,
    alerts: Arc<AlertBuffer>,
    dispatcher: AnomalyDispatcher,
    deployer: HoneypotDeployer,
}

fn rig() -> Rig {
    let registry = Arc::new(DeviceRegistry::seeded());
    let interlocks = Arc::new(InterlockTable::seeded());
    let oplog = Arc::new(OpsLog::new());
    let narrator = Arc::new(RecordingNarrator::new());
    let alerts = Arc::new(AlertBuffer::new());
    let dispatcher = AnomalyDispatcher::new(
        registry.clone(),
        interlocks.clone(),
        oplog.clone(),
        narrator.clone(),
        alerts.clone(),
    );
    let deployer = HoneypotDeployer::new(registry.clone(), oplog.clone(), narrator.clone())
        .with_alerts(alerts.clone());
    Rig {
        registry,
        interlocks,
        oplog,
        narrator,
        alerts,
        dispatcher,
        deployer,
    }
}

// ── Scenario: seed topology, HIDDEN on device 1 ──────────────────────────

#[test]
fn test_hidden_on_seed_device_one() {
    let r = rig();
    r.dispatcher.dispatch(AnomalyKind::Hidden, "1");

    let d = r.registry.get("1").unwrap();
    assert_eq!(d.scene_integrity, Some(0));
    assert_eq!(d.status, DeviceStatus::Compromised);
    // Hardware health unchanged from seed.
    assert_eq!(d.hardware_health, Some(100));
    // HIDDEN engages no interlock: no log line, no narration.
    assert!(r.oplog.is_empty());
    assert_eq!(r.narrator.count(), 0);
}

// ── Scenario: disarm int1, then FIRE on device 1 ─────────────────────────

#[test]
fn test_fire_with_disarmed_interlock() {
    let r = rig();
    r.interlocks.toggle("int1");
    r.dispatcher.dispatch(AnomalyKind::Fire, "1");

    let d = r.registry.get("1").unwrap();
    assert_eq!(d.status, DeviceStatus::Compromised);
    assert!(r.dispatcher.fire_heatmap_active());
    // Log stream unchanged: the response was skipped, not the mutation.
    assert!(r.oplog.is_empty());
    assert_eq!(r.narrator.count(), 0);
}

// ── Scenario: full theft response chain ──────────────────────────────────

#[test]
fn test_theft_response_chain() {
    let r = rig();
    r.dispatcher.dispatch(AnomalyKind::Theft, "6");

    let d = r.registry.get("6").unwrap();
    assert_eq!(d.status, DeviceStatus::Offline);
    assert_eq!(d.hardware_health, Some(0));
    assert_eq!(d.scene_integrity, Some(0));

    assert_eq!(r.oplog.entries(), vec!["INTERLOCK: Locking all locks.".to_string()]);
    assert_eq!(r.narrator.last().unwrap().0, Phrase::TheftLockingExits.text(Language::En));

    let alerts = r.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, ThreatLevel::Critical);
    assert_eq!(alerts[0].action_taken.as_deref(), Some("LOCK_ALL_EXITS"));
}

// ── Scenario: repeated fire is idempotent on the flag ────────────────────

#[test]
fn test_fire_twice_flag_stays_set_lines_accumulate() {
    let r = rig();
    r.dispatcher.dispatch(AnomalyKind::Fire, "2");
    r.dispatcher.dispatch(AnomalyKind::Fire, "2");
    assert!(r.dispatcher.fire_heatmap_active());
    assert_eq!(r.oplog.len(), 2);

    // Disarm mid-stream: further fires mutate but stop logging.
    r.interlocks.toggle("int1");
    r.dispatcher.dispatch(AnomalyKind::Fire, "2");
    assert_eq!(r.oplog.len(), 2);
    assert!(r.dispatcher.fire_heatmap_active());
}

// ── Scenario: honeypot joins the same registry the dispatcher mutates ────

#[test]
fn test_honeypot_is_dispatchable() {
    let r = rig();
    let decoy = r.deployer.deploy();
    assert_eq!(r.registry.device_count(), 8);

    r.dispatcher.dispatch(AnomalyKind::Theft, &decoy.id);
    let stored = r.registry.get(&decoy.id).unwrap();
    assert_eq!(stored.status, DeviceStatus::Offline);
    assert!(stored.is_honeypot);

    // The structured alert flags the honeypot origin.
    let alerts = r.alerts.for_device(&decoy.id);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].is_honey_trigger);
}

// ── Scenario: trap activity accumulates on the decoy only ────────────────

#[test]
fn test_trap_activity_chain() {
    let r = rig();
    let decoy = r.deployer.deploy();
    r.deployer.record_trap_activity(&decoy.id, "telnet login attempt");
    r.deployer.record_trap_activity(&decoy.id, "payload drop");

    let stored = r.registry.get(&decoy.id).unwrap();
    assert_eq!(stored.trap_logs.len(), 3); // DEPLOYED + 2 interactions
    assert_eq!(r.oplog.len(), 3); // deploy line + 2 trigger lines

    // Each interaction lands a structured alert mapped to decoy contact.
    let recorded = r.alerts.for_device(&decoy.id);
    assert_eq!(recorded.len(), 2);
    assert!(recorded.iter().all(|a| a.is_honey_trigger));
    assert!(recorded
        .iter()
        .all(|a| a.mitre.as_ref().unwrap().technique_id == "T0819"));
}

// ── Scenario: voice flow drives PTZ while anomalies run ──────────────────

#[test]
fn test_voice_flow_independent_of_pipeline() {
    let r = rig();
    let voice = VoiceControl::new(r.narrator.clone() as Arc<dyn chakra_core::narration::Narrator>);
    voice.set_listening(true);

    voice.handle_phrase("pan left");
    voice.handle_phrase("pan left");
    voice.handle_phrase("zoom in");
    r.dispatcher.dispatch(AnomalyKind::Broken, "5");
    voice.handle_phrase("tilt down");

    let ptz = voice.ptz();
    assert_eq!(ptz.pan, -20.0);
    assert_eq!(ptz.tilt, 10.0);
    assert!((ptz.zoom - 1.3).abs() < 1e-9);
    assert_eq!(r.registry.get("5").unwrap().status, DeviceStatus::Offline);

    voice.handle_phrase("reset");
    assert_eq!(voice.ptz(), chakra_vision::PtzState::default());
    assert_eq!(voice.ptz().zoom, 1.0);
}

// ── Scenario: parser accepts either language regardless of narration ─────

#[test]
fn test_voice_commands_bilingual() {
    let narrator = Arc::new(RecordingNarrator::new());
    let voice = VoiceControl::new(narrator.clone());
    voice.set_language(Language::Hi);
    voice.set_listening(true);

    assert_eq!(voice.handle_phrase("zoom out"), Some(VoiceCommand::ZoomOut));
    assert_eq!(voice.handle_phrase("ज़ूम बड़ा करें"), Some(VoiceCommand::ZoomIn));
    let (text, lang) = narrator.last().unwrap();
    assert_eq!(lang, Language::Hi);
    assert_eq!(text, Phrase::ZoomingIn.text(Language::Hi));
}

// ── Config-driven bootstrap shape ────────────────────────────────────────

#[test]
fn test_config_round_trip_drives_layers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chakra.toml");

    let mut config = ChakraConfig::default();
    config.deception.enabled = false;
    config.general.language = "hi".into();
    config.save(&path).unwrap();

    let loaded = ChakraConfig::load(&path).unwrap();
    assert!(!loaded.deception.enabled);
    assert_eq!(loaded.enabled_layer_count(), 3);
    assert_eq!(Language::parse(&loaded.general.language), Some(Language::Hi));
}

// ── No accidental clobbering across a long scenario ──────────────────────

#[test]
fn test_field_preservation_across_mixed_dispatches() {
    let r = rig();
    let names_before: Vec<String> = r.registry.devices().iter().map(|d| d.name.clone()).collect();

    r.dispatcher.dispatch(AnomalyKind::Hidden, "1");
    r.dispatcher.dispatch(AnomalyKind::Broken, "5");
    r.dispatcher.dispatch(AnomalyKind::Fire, "2");
    r.dispatcher.dispatch(AnomalyKind::Theft, "7");

    let devices = r.registry.devices();
    let names_after: Vec<String> = devices.iter().map(|d| d.name.clone()).collect();
    assert_eq!(names_before, names_after);

    // Untouched devices keep their seed state entirely.
    let valve = r.registry.get("4").unwrap();
    assert_eq!(valve.status, DeviceStatus::Online);
    assert_eq!(valve.hardware_health, None);
    // HIDDEN left device 1's hardware alone; BROKEN left device 5's scene alone.
    assert_eq!(r.registry.get("1").unwrap().hardware_health, Some(100));
    assert_eq!(r.registry.get("5").unwrap().scene_integrity, Some(100));
}
