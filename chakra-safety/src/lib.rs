//! # Chakra Safety — response interlocks and the anomaly dispatch pipeline
//!
//! The structural core of the simulator: a table of trigger→action rules
//! the analyst can arm and disarm, and a dispatcher that translates a
//! manually selected anomaly into deterministic device-state mutation plus
//! a conditional interlock response (log line, narration, structured alert).

pub mod alert_buffer;
pub mod dispatcher;
pub mod interlocks;

pub use alert_buffer::AlertBuffer;
pub use dispatcher::{AnomalyDispatcher, AnomalyKind};
pub use interlocks::{InterlockTable, SafetyInterlock};
