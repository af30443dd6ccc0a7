//! Bilingual message catalog for operator-facing narration.
//!
//! The simulator narrates in English or Hindi. Phrases are a closed set so
//! call sites cannot drift from the catalog, and the catalog owns the exact
//! wording for both languages.

use serde::{Deserialize, Serialize};

/// Active interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// BCP-47 tag handed to the speech collaborator.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Language::En),
            "hi" | "hi-in" | "hindi" => Some(Language::Hi),
            _ => None,
        }
    }
}

/// Every phrase the simulator can narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    FireInterlocksEngaged,
    TheftLockingExits,
    HoneypotDeployed,
    DeceptionTriggered,
    PanningLeft,
    PanningRight,
    TiltingUp,
    TiltingDown,
    ZoomingIn,
    ZoomingOut,
    ResettingVision,
    VoiceControlActive,
    VoiceControlDisabled,
}

impl Phrase {
    pub fn text(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Phrase::FireInterlocksEngaged, Language::En) => "Fire detected. Interlocks engaged.",
            (Phrase::FireInterlocksEngaged, Language::Hi) => "आग का पता चला। इंटरलॉक्स सक्रिय।",
            (Phrase::TheftLockingExits, Language::En) => "Security breach. Locking all exits.",
            (Phrase::TheftLockingExits, Language::Hi) => "सुरक्षा उल्लंघन। सभी निकास द्वार बंद।",
            (Phrase::HoneypotDeployed, Language::En) => {
                "Deception Cube deployed. Threat monitoring active."
            }
            (Phrase::HoneypotDeployed, Language::Hi) => {
                "डिसेप्शन क्यूब तैनात। खतरा निगरानी सक्रिय।"
            }
            (Phrase::DeceptionTriggered, Language::En) => {
                "Deception triggered. Attacker interaction detected."
            }
            (Phrase::DeceptionTriggered, Language::Hi) => {
                "धोखाधड़ी शुरू। हमलावर की गतिविधि का पता चला।"
            }
            (Phrase::PanningLeft, Language::En) => "Panning left",
            (Phrase::PanningLeft, Language::Hi) => "बाएं घूम रहा है",
            (Phrase::PanningRight, Language::En) => "Panning right",
            (Phrase::PanningRight, Language::Hi) => "दाएं घूम रहा है",
            (Phrase::TiltingUp, Language::En) => "Tilting up",
            (Phrase::TiltingUp, Language::Hi) => "ऊपर झुक रहा है",
            (Phrase::TiltingDown, Language::En) => "Tilting down",
            (Phrase::TiltingDown, Language::Hi) => "नीचे झुक रहा है",
            (Phrase::ZoomingIn, Language::En) => "Zooming in",
            (Phrase::ZoomingIn, Language::Hi) => "ज़ूम इन",
            (Phrase::ZoomingOut, Language::En) => "Zooming out",
            (Phrase::ZoomingOut, Language::Hi) => "ज़ूम आउट",
            (Phrase::ResettingVision, Language::En) => "Resetting vision",
            (Phrase::ResettingVision, Language::Hi) => "दृष्टि रीसेट",
            (Phrase::VoiceControlActive, Language::En) => "Sentinel Listening...",
            (Phrase::VoiceControlActive, Language::Hi) => "सेंटिनल सुन रहा है...",
            (Phrase::VoiceControlDisabled, Language::En) => "Voice Control: Offline",
            (Phrase::VoiceControlDisabled, Language::Hi) => "वॉयस कंट्रोल: ऑफलाइन",
        }
    }
}
