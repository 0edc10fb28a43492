//! Repair receipt model

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::completion::CompletionSummary;

/// Repair lifecycle status
///
/// The status is monotonic: `CheckedIn` → `InProgress` → `Completed`, no
/// backward edges and no skipping. Transitions are enforced by the
/// lifecycle module in `wrench-core`; this type only carries the value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepairStatus {
    /// Vehicle received, repair not started
    #[default]
    CheckedIn,
    /// Repair underway, manager assigned
    InProgress,
    /// Repair finished, completion summary recorded
    Completed,
}

impl RepairStatus {
    /// Normalize a backend status string to a closed enum value.
    ///
    /// The receipt backend sends either the Korean display value or a loose
    /// ASCII alias. Anything unrecognized falls back to `CheckedIn` (the
    /// backend's own default for fresh receipts) so a raw string never
    /// travels through the core.
    pub fn from_backend(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "접수" => return RepairStatus::CheckedIn,
            "수리중" => return RepairStatus::InProgress,
            "완료" => return RepairStatus::Completed,
            _ => {}
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "receipt" => RepairStatus::CheckedIn,
            "inprogress" => RepairStatus::InProgress,
            "completed" => RepairStatus::Completed,
            other => {
                warn!(status = %other, "Unrecognized receipt status, defaulting to CheckedIn");
                RepairStatus::CheckedIn
            }
        }
    }

    /// Display text shown in receipt lists and detail headers
    pub fn display_text(&self) -> &'static str {
        match self {
            RepairStatus::CheckedIn => "접수",
            RepairStatus::InProgress => "수리중",
            RepairStatus::Completed => "완료",
        }
    }
}

/// Repair receipt entity
///
/// Created from a list or detail fetch; mutated only through the lifecycle
/// module. Intake metadata is immutable after creation.
///
/// Invariants: `completion` and `lead_time_days` are populated on the
/// transition to `Completed` and never before; `manager` is assigned on the
/// transition to `InProgress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairRecord {
    /// Backend-assigned receipt identifier
    pub id: String,
    pub vehicle_plate: String,
    pub owner_name: String,
    pub vehicle_model: String,
    pub phone_number: String,
    pub request_description: String,
    /// Civil intake date, `yyyy-MM-dd`
    pub intake_date: String,
    /// Assigned manager, set when the repair starts
    pub manager: Option<String>,
    pub status: RepairStatus,
    /// Completion summary, present only for completed receipts
    pub completion: Option<CompletionSummary>,
    /// Whole days between intake and completion; derived, never set directly
    pub lead_time_days: Option<i64>,
}

impl RepairRecord {
    pub fn is_completed(&self) -> bool {
        self.status == RepairStatus::Completed
    }
}
