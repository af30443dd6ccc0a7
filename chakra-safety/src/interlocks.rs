//! # Interlock table — trigger→action response rules
//!
//! A fixed-size rule list: each rule maps a named trigger condition to a
//! named response action against a device-type label, and can be armed or
//! disarmed independently. There is no create/delete path; the analyst only
//! toggles the seed set.
//!
//! The declared action is descriptive. The dispatcher logs and narrates it
//! but never executes it against devices of the target type; whether the
//! actions were ever meant to run for real is an open question inherited
//! from the system this models.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyInterlock {
    pub id: String,
    /// Matched by exact string equality against dispatch triggers.
    pub trigger: String,
    /// Descriptive response name; never executed.
    pub action: String,
    pub is_active: bool,
    /// Target device-type label the action names.
    pub device_type: String,
}

pub struct InterlockTable {
    interlocks: RwLock<Vec<SafetyInterlock>>,
}

impl InterlockTable {
    /// The seed rule set the simulator boots with.
    pub fn seeded() -> Self {
        Self::with_interlocks(vec![
            SafetyInterlock {
                id: "int1".into(),
                trigger: "FIRE_DETECTION".into(),
                action: "OPEN_GAS_VENTS".into(),
                is_active: true,
                device_type: "gas-valve".into(),
            },
            SafetyInterlock {
                id: "int2".into(),
                trigger: "THEFT_ALERT".into(),
                action: "LOCK_ALL_EXITS".into(),
                is_active: true,
                device_type: "lock".into(),
            },
            SafetyInterlock {
                id: "int3".into(),
                trigger: "SUDDEN_SILENCE".into(),
                action: "SNAPSHOT_BACKUP".into(),
                is_active: false,
                device_type: "camera".into(),
            },
        ])
    }

    pub fn with_interlocks(interlocks: Vec<SafetyInterlock>) -> Self {
        Self {
            interlocks: RwLock::new(interlocks),
        }
    }

    /// Flip the `is_active` flag of exactly one rule, leaving all others
    /// untouched. Returns the new value, or None for an unknown id.
    pub fn toggle(&self, id: &str) -> Option<bool> {
        let mut interlocks = self.interlocks.write();
        let rule = interlocks.iter_mut().find(|i| i.id == id)?;
        rule.is_active = !rule.is_active;
        info!(interlock = %id, trigger = %rule.trigger, active = rule.is_active, "Interlock toggled");
        Some(rule.is_active)
    }

    /// First rule whose trigger exactly equals `trigger_name`. If multiple
    /// rules share a trigger, later ones are unreachable through this path.
    pub fn find_by_trigger(&self, trigger_name: &str) -> Option<SafetyInterlock> {
        self.interlocks
            .read()
            .iter()
            .find(|i| i.trigger == trigger_name)
            .cloned()
    }

    pub fn get(&self, id: &str) -> Option<SafetyInterlock> {
        self.interlocks.read().iter().find(|i| i.id == id).cloned()
    }

    pub fn interlocks(&self) -> Vec<SafetyInterlock> {
        self.interlocks.read().clone()
    }

    pub fn len(&self) -> usize {
        self.interlocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.interlocks.read().is_empty()
    }
}

impl Default for InterlockTable {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rules() {
        let table = InterlockTable::seeded();
        assert_eq!(table.len(), 3);
        assert!(table.get("int1").unwrap().is_active);
        assert!(table.get("int2").unwrap().is_active);
        assert!(!table.get("int3").unwrap().is_active);
    }

    #[test]
    fn test_double_toggle_restores() {
        let table = InterlockTable::seeded();
        let original = table.get("int1").unwrap().is_active;
        assert_eq!(table.toggle("int1"), Some(!original));
        assert_eq!(table.toggle("int1"), Some(original));
    }

    #[test]
    fn test_toggle_isolated_to_one_rule() {
        let table = InterlockTable::seeded();
        let others_before: Vec<_> = table
            .interlocks()
            .into_iter()
            .filter(|i| i.id != "int2")
            .collect();
        table.toggle("int2");
        let others_after: Vec<_> = table
            .interlocks()
            .into_iter()
            .filter(|i| i.id != "int2")
            .collect();
        assert_eq!(others_before, others_after);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let table = InterlockTable::seeded();
        assert_eq!(table.toggle("int99"), None);
    }

    #[test]
    fn test_find_by_trigger_exact_match_only() {
        let table = InterlockTable::seeded();
        assert_eq!(table.find_by_trigger("FIRE_DETECTION").unwrap().id, "int1");
        assert!(table.find_by_trigger("fire_detection").is_none());
        assert!(table.find_by_trigger("FIRE").is_none());
    }

    #[test]
    fn test_find_by_trigger_first_match_wins() {
        let table = InterlockTable::with_interlocks(vec![
            SafetyInterlock {
                id: "a".into(),
                trigger: "DUP".into(),
                action: "FIRST".into(),
                is_active: false,
                device_type: "camera".into(),
            },
            SafetyInterlock {
                id: "b".into(),
                trigger: "DUP".into(),
                action: "SECOND".into(),
                is_active: true,
                device_type: "lock".into(),
            },
        ]);
        // The second rule is unreachable even though it is the active one.
        assert_eq!(table.find_by_trigger("DUP").unwrap().action, "FIRST");
    }
}
