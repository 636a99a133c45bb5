//! Entity implementation
//!
//! Host objects are identified by generational keys: despawning an entity
//! retires its key forever, so stale ids can be detected in O(1).

use serde::{Deserialize, Serialize};

slotmap::new_key_type! {
    /// Generational identifier for a host object
    pub struct Entity;
}

/// Per-entity bookkeeping carried by the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Human-readable name, for logs and tooling
    pub name: String,

    /// Whether the entity participates in updates
    pub active: bool,
}

impl EntityRecord {
    /// Create a record with the given name, active by default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_to_active() {
        let record = EntityRecord::new("player");
        assert_eq!(record.name, "player");
        assert!(record.active);
    }
}
