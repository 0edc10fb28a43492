//! Session context

use serde::{Deserialize, Serialize};

/// Identity of the logged-in engineer
///
/// Passed explicitly into every lifecycle mutation instead of being read
/// from ambient session state, so tests stay deterministic and the coupling
/// to the auth collaborator is visible at the call site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    pub engineer_id: i64,
    /// Display name recorded as the receipt manager on start
    pub name: String,
}

impl SessionContext {
    pub fn new(engineer_id: i64, name: impl Into<String>) -> Self {
        Self {
            engineer_id,
            name: name.into(),
        }
    }
}
