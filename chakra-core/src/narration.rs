//! # Narration seam
//!
//! Text-to-speech is an external collaborator: it accepts (text, language
//! tag), speaks asynchronously, returns nothing, and surfaces no errors.
//! A new utterance cancels any in-progress one. Components hold a
//! `dyn Narrator` so the pipeline stays testable without a speech engine.

use crate::i18n::Language;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Fire-and-forget speech output.
pub trait Narrator: Send + Sync {
    fn speak(&self, text: &str, lang: Language);
}

/// Default narrator: routes utterances to the log. Stands in for the real
/// speech synthesizer, which lives outside this repository.
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn speak(&self, text: &str, lang: Language) {
        info!(lang = lang.tag(), utterance = %text, "Narration");
    }
}

/// Test narrator: records every utterance. `last()` models the
/// cancel-on-new-utterance contract — only the most recent call is the one
/// actually heard.
pub struct RecordingNarrator {
    utterances: RwLock<Vec<(String, Language)>>,
    total: AtomicU64,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self {
            utterances: RwLock::new(Vec::new()),
            total: AtomicU64::new(0),
        }
    }

    pub fn utterances(&self) -> Vec<(String, Language)> {
        self.utterances.read().clone()
    }

    /// The utterance currently being spoken, if any.
    pub fn last(&self) -> Option<(String, Language)> {
        self.utterances.read().last().cloned()
    }

    pub fn count(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

impl Default for RecordingNarrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator for RecordingNarrator {
    fn speak(&self, text: &str, lang: Language) {
        self.utterances.write().push((text.to_string(), lang));
        self.total.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_narrator_supersedes() {
        let n = RecordingNarrator::new();
        n.speak("first", Language::En);
        n.speak("second", Language::Hi);
        assert_eq!(n.count(), 2);
        let (text, lang) = n.last().unwrap();
        assert_eq!(text, "second");
        assert_eq!(lang, Language::Hi);
    }
}
