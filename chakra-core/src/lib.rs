//! # Chakra Core — shared backbone for the Sudarshan Chakra defense simulator
//!
//! Every domain crate links against this library. It carries the concerns
//! the pipeline crates share rather than any detection logic of its own:
//! - Error type and result alias
//! - TOML configuration loading
//! - The append-only operational log stream shown to the analyst
//! - The narration seam (text-to-speech is an external collaborator)
//! - Bilingual message catalog (English / Hindi)
//! - MITRE ATT&CK mappings for simulated anomalies
//! - The trivial analyst session store

pub mod config_loader;
pub mod error;
pub mod i18n;
pub mod mitre;
pub mod narration;
pub mod oplog;
pub mod session;

pub use config_loader::ChakraConfig;
pub use error::{ChakraError, ChakraResult};
pub use i18n::{Language, Phrase};
pub use narration::{Narrator, RecordingNarrator, TracingNarrator};
pub use oplog::OpsLog;
