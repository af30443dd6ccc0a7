//! # Config loader — loads and validates TOML configuration
//!
//! Reads `chakra.toml` (or a custom path) and deserializes into typed config
//! structs. Each simulator layer gets its own section with an enable flag
//! plus arbitrary layer-specific settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChakraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub registry: LayerConfig,
    #[serde(default)]
    pub safety: LayerConfig,
    #[serde(default)]
    pub deception: LayerConfig,
    #[serde(default)]
    pub vision: LayerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_level: String,
    /// Interface language: "en" or "hi".
    pub language: String,
    /// Master switch for narration output.
    pub speech_enabled: bool,
    /// Where the analyst session record is persisted.
    pub session_file: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            language: "en".into(),
            speech_enabled: true,
            session_file: "~/.chakra/session.json".into(),
        }
    }
}

/// Generic per-layer config — each layer has at minimum an `enabled` flag
/// plus arbitrary key-value settings that the layer can interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(flatten)]
    pub settings: HashMap<String, toml::Value>,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settings: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl ChakraConfig {
    /// Load config from a TOML file path. A missing file falls back to
    /// defaults; a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config: {}", e))?;
        let config: ChakraConfig =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))?;
        info!(
            path = %path.display(),
            layers_enabled = config.enabled_layer_count(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Save current config to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;
        Ok(())
    }

    pub fn enabled_layer_count(&self) -> usize {
        [
            self.registry.enabled,
            self.safety.enabled,
            self.deception.enabled,
            self.vision.enabled,
        ]
        .iter()
        .filter(|&&e| e)
        .count()
    }

    pub fn layer(&self, name: &str) -> Option<&LayerConfig> {
        match name {
            "registry" => Some(&self.registry),
            "safety" => Some(&self.safety),
            "deception" => Some(&self.deception),
            "vision" => Some(&self.vision),
            _ => None,
        }
    }

    /// Check if a specific layer setting is truthy.
    pub fn layer_setting_bool(&self, layer: &str, key: &str) -> bool {
        self.layer(layer)
            .and_then(|l| l.settings.get(key))
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChakraConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.enabled_layer_count(), 4);
        assert!(config.general.speech_enabled);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_src = r#"
            [general]
            log_level = "debug"
            language = "hi"
            speech_enabled = false
            session_file = "/tmp/session.json"

            [deception]
            enabled = false
        "#;
        let config: ChakraConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.general.language, "hi");
        assert!(!config.deception.enabled);
        assert!(config.safety.enabled);
        assert_eq!(config.enabled_layer_count(), 3);
    }

    #[test]
    fn test_layer_settings_flatten() {
        let toml_src = r#"
            [safety]
            enabled = true
            narrate_responses = true
        "#;
        let config: ChakraConfig = toml::from_str(toml_src).unwrap();
        assert!(config.layer_setting_bool("safety", "narrate_responses"));
        assert!(!config.layer_setting_bool("safety", "missing_key"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chakra.toml");
        let mut config = ChakraConfig::default();
        config.general.language = "hi".into();
        config.save(&path).unwrap();
        let loaded = ChakraConfig::load(&path).unwrap();
        assert_eq!(loaded.general.language, "hi");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let loaded = ChakraConfig::load("/nonexistent/chakra.toml").unwrap();
        assert_eq!(loaded.general.log_level, "info");
    }
}
