//! # Voice command parsing and dispatch
//!
//! The recognition stream (external) delivers transcribed lowercase
//! phrases. Rather than scattering substring checks across the handler,
//! phrases parse into the closed [`VoiceCommand`] set and dispatch is an
//! exhaustive match. English and Hindi command phrases are both accepted
//! regardless of the active narration language.

use crate::ptz::{
    PtzState, NUDGE_PAN_STEP, NUDGE_TILT_STEP, NUDGE_ZOOM_STEP, VOICE_PAN_STEP, VOICE_TILT_STEP,
    VOICE_ZOOM_STEP,
};
use chakra_core::i18n::{Language, Phrase};
use chakra_core::narration::Narrator;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Every camera-control command the recognizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceCommand {
    PanLeft,
    PanRight,
    TiltUp,
    TiltDown,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl VoiceCommand {
    /// Match a transcribed phrase against the known command substrings.
    /// First match wins, in a fixed order, mirroring how an operator
    /// phrase like "please pan left now" should still land.
    pub fn parse(phrase: &str) -> Option<Self> {
        let phrase = phrase.to_lowercase();
        const TABLE: &[(VoiceCommand, &str, &str)] = &[
            (VoiceCommand::PanLeft, "pan left", "बाएं"),
            (VoiceCommand::PanRight, "pan right", "दाएं"),
            (VoiceCommand::TiltUp, "tilt up", "ऊपर"),
            (VoiceCommand::TiltDown, "tilt down", "नीचे"),
            (VoiceCommand::ZoomIn, "zoom in", "बड़ा करें"),
            (VoiceCommand::ZoomOut, "zoom out", "छोटा करें"),
            (VoiceCommand::Reset, "reset", "रीसेट"),
        ];
        TABLE
            .iter()
            .find(|(_, en, hi)| phrase.contains(en) || phrase.contains(hi))
            .map(|(cmd, _, _)| *cmd)
    }

    /// The narration acknowledgement for this command.
    pub fn ack(&self) -> Phrase {
        match self {
            VoiceCommand::PanLeft => Phrase::PanningLeft,
            VoiceCommand::PanRight => Phrase::PanningRight,
            VoiceCommand::TiltUp => Phrase::TiltingUp,
            VoiceCommand::TiltDown => Phrase::TiltingDown,
            VoiceCommand::ZoomIn => Phrase::ZoomingIn,
            VoiceCommand::ZoomOut => Phrase::ZoomingOut,
            VoiceCommand::Reset => Phrase::ResettingVision,
        }
    }
}

/// Owns the PTZ state of the selected camera and applies commands to it,
/// acknowledging each through the narration seam.
pub struct VoiceControl {
    ptz: RwLock<PtzState>,
    narrator: Arc<dyn Narrator>,
    language: RwLock<Language>,
    speech_enabled: AtomicBool,
    listening: AtomicBool,
}

impl VoiceControl {
    pub fn new(narrator: Arc<dyn Narrator>) -> Self {
        Self {
            ptz: RwLock::new(PtzState::default()),
            narrator,
            language: RwLock::new(Language::En),
            speech_enabled: AtomicBool::new(true),
            listening: AtomicBool::new(false),
        }
    }

    /// Parse and apply one transcribed phrase. Unrecognized phrases are a
    /// silent no-op returning None. Ignored entirely while not listening.
    pub fn handle_phrase(&self, phrase: &str) -> Option<VoiceCommand> {
        if !self.listening.load(Ordering::Relaxed) {
            debug!(phrase = %phrase, "Voice phrase ignored: not listening");
            return None;
        }
        let command = VoiceCommand::parse(phrase)?;
        self.apply(command);
        Some(command)
    }

    /// Apply a command with voice-step deltas and narrate the acknowledgement.
    pub fn apply(&self, command: VoiceCommand) {
        {
            let mut ptz = self.ptz.write();
            match command {
                VoiceCommand::PanLeft => ptz.pan_by(-VOICE_PAN_STEP),
                VoiceCommand::PanRight => ptz.pan_by(VOICE_PAN_STEP),
                VoiceCommand::TiltUp => ptz.tilt_by(-VOICE_TILT_STEP),
                VoiceCommand::TiltDown => ptz.tilt_by(VOICE_TILT_STEP),
                VoiceCommand::ZoomIn => ptz.zoom_by(VOICE_ZOOM_STEP),
                VoiceCommand::ZoomOut => ptz.zoom_by(-VOICE_ZOOM_STEP),
                VoiceCommand::Reset => ptz.reset(),
            }
        }
        self.narrate(command.ack());
    }

    /// Fine-step nudges for the console overlay controls. No narration.
    pub fn nudge(&self, command: VoiceCommand) {
        let mut ptz = self.ptz.write();
        match command {
            VoiceCommand::PanLeft => ptz.pan_by(-NUDGE_PAN_STEP),
            VoiceCommand::PanRight => ptz.pan_by(NUDGE_PAN_STEP),
            VoiceCommand::TiltUp => ptz.tilt_by(-NUDGE_TILT_STEP),
            VoiceCommand::TiltDown => ptz.tilt_by(NUDGE_TILT_STEP),
            VoiceCommand::ZoomIn => ptz.zoom_by(NUDGE_ZOOM_STEP),
            VoiceCommand::ZoomOut => ptz.zoom_by(-NUDGE_ZOOM_STEP),
            VoiceCommand::Reset => ptz.reset(),
        }
    }

    pub fn ptz(&self) -> PtzState {
        *self.ptz.read()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Relaxed)
    }

    /// Toggle the recognition stream on or off, announcing the new state.
    pub fn set_listening(&self, listening: bool) {
        self.listening.store(listening, Ordering::Relaxed);
        self.narrate(if listening {
            Phrase::VoiceControlActive
        } else {
            Phrase::VoiceControlDisabled
        });
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

#[cfg(test)]
mod tests {
    use super::*;
    use chakra_core::narration::RecordingNarrator;

    fn control() -> (Arc<RecordingNarrator>, VoiceControl) {
        let narrator = Arc::new(RecordingNarrator::new());
        let control = VoiceControl::new(narrator.clone());
        (narrator, control)
    }

    #[test]
    fn test_parse_english_phrases() {
        assert_eq!(VoiceCommand::parse("pan left"), Some(VoiceCommand::PanLeft));
        assert_eq!(VoiceCommand::parse("please zoom in now"), Some(VoiceCommand::ZoomIn));
        assert_eq!(VoiceCommand::parse("RESET"), Some(VoiceCommand::Reset));
        assert_eq!(VoiceCommand::parse("open the gates"), None);
    }

    #[test]
    fn test_parse_hindi_phrases() {
        assert_eq!(VoiceCommand::parse("बाएं"), Some(VoiceCommand::PanLeft));
        assert_eq!(VoiceCommand::parse("दाएं"), Some(VoiceCommand::PanRight));
        assert_eq!(VoiceCommand::parse("ऊपर"), Some(VoiceCommand::TiltUp));
        assert_eq!(VoiceCommand::parse("नीचे"), Some(VoiceCommand::TiltDown));
        assert_eq!(VoiceCommand::parse("बड़ा करें"), Some(VoiceCommand::ZoomIn));
        assert_eq!(VoiceCommand::parse("छोटा करें"), Some(VoiceCommand::ZoomOut));
        assert_eq!(VoiceCommand::parse("रीसेट"), Some(VoiceCommand::Reset));
    }

    #[test]
    fn test_phrases_ignored_until_listening() {
        let (_, control) = control();
        assert_eq!(control.handle_phrase("pan left"), None);
        assert_eq!(control.ptz().pan, 0.0);

        control.set_listening(true);
        assert_eq!(control.handle_phrase("pan left"), Some(VoiceCommand::PanLeft));
        assert_eq!(control.ptz().pan, -VOICE_PAN_STEP);
    }

    #[test]
    fn test_voice_steps_and_acks() {
        let (narrator, control) = control();
        control.set_listening(true);
        control.handle_phrase("tilt down");
        control.handle_phrase("zoom in");
        let ptz = control.ptz();
        assert_eq!(ptz.tilt, VOICE_TILT_STEP);
        assert!((ptz.zoom - 1.3).abs() < 1e-9);
        assert_eq!(narrator.last().unwrap().0, "Zooming in");
    }

    #[test]
    fn test_reset_phrase_restores_home() {
        let (_, control) = control();
        control.set_listening(true);
        control.handle_phrase("pan right");
        control.handle_phrase("zoom in");
        control.handle_phrase("reset please");
        assert_eq!(control.ptz(), PtzState::default());
    }

    #[test]
    fn test_nudge_uses_fine_steps_without_narration() {
        let (narrator, control) = control();
        control.nudge(VoiceCommand::PanRight);
        control.nudge(VoiceCommand::ZoomIn);
        let ptz = control.ptz();
        assert_eq!(ptz.pan, NUDGE_PAN_STEP);
        assert!((ptz.zoom - 1.2).abs() < 1e-9);
        assert_eq!(narrator.count(), 0);
    }

    #[test]
    fn test_hindi_acknowledgement_language() {
        let (narrator, control) = control();
        control.set_language(Language::Hi);
        control.set_listening(true);
        control.handle_phrase("pan left");
        let (text, lang) = narrator.last().unwrap();
        assert_eq!(lang, Language::Hi);
        assert_eq!(text, Phrase::PanningLeft.text(Language::Hi));
    }
}
