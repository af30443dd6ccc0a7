//! # Chakra Vision — camera-control state
//!
//! Pan/tilt/zoom state for the selected camera plus the voice-command
//! parser. Speech recognition itself is an external collaborator that
//! delivers transcribed lowercase phrases; this crate turns those phrases
//! into a closed command set so dispatch is exhaustive and testable
//! without a microphone.

pub mod ptz;
pub mod voice;

pub use ptz::PtzState;
pub use voice::{VoiceCommand, VoiceControl};
