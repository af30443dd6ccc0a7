//! Pan/tilt/zoom state for the selected camera.
//!
//! Pan and tilt are percentage offsets of the viewport; zoom is a scale
//! factor clamped to [1.0, 3.0]. Voice commands move in coarse steps,
//! the on-screen nudge controls in fine steps.

use serde::{Deserialize, Serialize};

pub const ZOOM_MIN: f64 = 1.0;
pub const ZOOM_MAX: f64 = 3.0;

/// Coarse steps used by voice commands.
pub const VOICE_PAN_STEP: f64 = 10.0;
pub const VOICE_TILT_STEP: f64 = 10.0;
pub const VOICE_ZOOM_STEP: f64 = 0.3;

/// Fine steps used by the console nudge controls.
pub const NUDGE_PAN_STEP: f64 = 5.0;
pub const NUDGE_TILT_STEP: f64 = 5.0;
pub const NUDGE_ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PtzState {
    pub pan: f64,
    pub tilt: f64,
    pub zoom: f64,
}

impl Default for PtzState {
    fn default() -> Self {
        Self {
            pan: 0.0,
            tilt: 0.0,
            zoom: ZOOM_MIN,
        }
    }
}

impl PtzState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan_by(&mut self, delta: f64) {
        self.pan += delta;
    }

    pub fn tilt_by(&mut self, delta: f64) {
        self.tilt += delta;
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restore the home position.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
