//! MITRE ATT&CK mappings for simulated anomalies.
//!
//! Every structured alert the pipeline produces carries a technique mapping
//! so findings line up with the framework vocabulary analysts already use.
//! The simulated physical anomalies map onto the ICS matrix techniques,
//! which cover loss-of-view and loss-of-safety conditions directly.

use serde::{Deserialize, Serialize};

/// ATT&CK tactic (kill-chain phase). Only the phases the simulator can
/// produce are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MitreTactic {
    InitialAccess,
    DefenseEvasion,
    Impact,
}

impl MitreTactic {
    pub fn id(&self) -> &'static str {
        match self {
            Self::InitialAccess => "TA0001",
            Self::DefenseEvasion => "TA0005",
            Self::Impact => "TA0040",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InitialAccess => "Initial Access",
            Self::DefenseEvasion => "Defense Evasion",
            Self::Impact => "Impact",
        }
    }
}

/// A finding-to-technique mapping attached to structured alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitreMapping {
    pub tactic: MitreTactic,
    pub technique: String,
    pub technique_id: String,
}

impl MitreMapping {
    pub fn new(tactic: MitreTactic, technique: &str, technique_id: &str) -> Self {
        Self {
            tactic,
            technique: technique.into(),
            technique_id: technique_id.into(),
        }
    }
}

/// Mapping for a camera whose scene has been occluded.
pub fn camera_occluded() -> MitreMapping {
    MitreMapping::new(MitreTactic::DefenseEvasion, "Manipulation of View", "T0832")
}

/// Mapping for physically damaged monitoring hardware.
pub fn hardware_destroyed() -> MitreMapping {
    MitreMapping::new(MitreTactic::Impact, "Loss of View", "T0829")
}

/// Mapping for a fire hazard threatening safety interlocks.
pub fn fire_hazard() -> MitreMapping {
    MitreMapping::new(MitreTactic::Impact, "Loss of Safety", "T0880")
}

/// Mapping for physical theft of a monitored node.
pub fn node_theft() -> MitreMapping {
    MitreMapping::new(MitreTactic::Impact, "Loss of Availability", "T0826")
}

/// Mapping for attacker interaction with a deployed decoy.
pub fn decoy_interaction() -> MitreMapping {
    MitreMapping::new(MitreTactic::InitialAccess, "Exploit Public-Facing Application", "T0819")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tactic_ids_are_stable() {
        assert_eq!(MitreTactic::Impact.id(), "TA0040");
        assert_eq!(MitreTactic::DefenseEvasion.id(), "TA0005");
    }

    #[test]
    fn test_anomaly_mappings_distinct() {
        let ids = [
            camera_occluded().technique_id,
            hardware_destroyed().technique_id,
            fire_hazard().technique_id,
            node_theft().technique_id,
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
