//! Component bootstrap: builds every simulator layer from configuration
//! and wires them to the shared log stream and narration seam.

use std::sync::Arc;

use chakra_core::i18n::Language;
use chakra_core::narration::Narrator;
use chakra_core::oplog::OpsLog;
use chakra_core::session::SessionStore;
use chakra_core::ChakraConfig;
use chakra_deception::HoneypotDeployer;
use chakra_registry::DeviceRegistry;
use chakra_safety::{AlertBuffer, AnomalyDispatcher, InterlockTable};
use chakra_vision::VoiceControl;
use tracing::info;

/// The full simulator stack. Everything hangs off the registry, the
/// shared ops log, and one narrator; disabled layers are simply absent.
pub struct ChakraStack {
    pub registry: Arc<DeviceRegistry>,
    pub oplog: Arc<OpsLog>,
    pub interlocks: Option<Arc<InterlockTable>>,
    pub alerts: Option<Arc<AlertBuffer>>,
    pub dispatcher: Option<Arc<AnomalyDispatcher>>,
    pub deployer: Option<Arc<HoneypotDeployer>>,
    pub voice: Option<Arc<VoiceControl>>,
    pub session: Arc<SessionStore>,
    pub language: Language,
}

/// Build all layers per config. Disabled layers simply are not constructed.
pub fn bootstrap(config: &ChakraConfig, narrator: Arc<dyn Narrator>) -> ChakraStack {
    let language = Language::parse(&config.general.language).unwrap_or_default();
    let speech = config.general.speech_enabled;

    let oplog = Arc::new(OpsLog::new());
    let registry = if config.registry.enabled {
        Arc::new(DeviceRegistry::seeded())
    } else {
        Arc::new(DeviceRegistry::new())
    };

    let safety = config.safety.enabled.then(|| {
        let interlocks = Arc::new(InterlockTable::seeded());
        let alerts = Arc::new(AlertBuffer::new());
        let dispatcher = Arc::new(AnomalyDispatcher::new(
            registry.clone(),
            interlocks.clone(),
            oplog.clone(),
            narrator.clone(),
            alerts.clone(),
        ));
        dispatcher.set_language(language);
        dispatcher.set_speech_enabled(speech);
        (interlocks, alerts, dispatcher)
    });
    let (interlocks, alerts, dispatcher) = match safety {
        Some((i, a, d)) => (Some(i), Some(a), Some(d)),
        None => (None, None, None),
    };

    let deployer = config.deception.enabled.then(|| {
        let mut d = HoneypotDeployer::new(registry.clone(), oplog.clone(), narrator.clone());
        if let Some(alerts) = &alerts {
            d = d.with_alerts(alerts.clone());
        }
        let d = Arc::new(d);
        d.set_language(language);
        d.set_speech_enabled(speech);
        d
    });

    let voice = config.vision.enabled.then(|| {
        let v = Arc::new(VoiceControl::new(narrator.clone()));
        v.set_language(language);
        v.set_speech_enabled(speech);
        v
    });

    info!(
        devices = registry.device_count(),
        safety = dispatcher.is_some(),
        deception = deployer.is_some(),
        vision = voice.is_some(),
        "Simulator stack bootstrapped"
    );

    ChakraStack {
        registry,
        oplog,
        interlocks,
        alerts,
        dispatcher,
        deployer,
        voice,
        session: Arc::new(SessionStore::new()),
        language,
    }
}

impl ChakraStack {
    /// Switch the interface language everywhere at once.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Some(d) = &self.dispatcher {
            d.set_language(language);
        }
        if let Some(d) = &self.deployer {
            d.set_language(language);
        }
        if let Some(v) = &self.voice {
            v.set_language(language);
        }
    }
}
