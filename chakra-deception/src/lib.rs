//! # Chakra Deception — decoy node deployment
//!
//! Synthesizes "Deception Cube" decoys into the device registry and logs
//! simulated attacker interaction against them.

pub mod honeypot;

pub use honeypot::HoneypotDeployer;
