//! Repair lifecycle state machine
//!
//! The single authority for receipt status transitions. The machine has
//! exactly two directed edges: `CheckedIn` → `InProgress` via
//! [`start_repair`] and `InProgress` → `Completed` via [`complete`]. There
//! is no cancellation or rollback edge, and a completed receipt is never
//! mutated again.

use shared::models::{CompletionSummary, RepairRecord, RepairStatus, SessionContext};
use thiserror::Error;
use tracing::{debug, warn};

use crate::leadtime::days_between;
use crate::validate::{ValidationIssue, validate_summary};

/// Lifecycle errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The attempted transition violates the state machine; a caller bug or
    /// a stale-state race, surfaced as "action not available"
    #[error("cannot {action} a receipt in {from:?} status")]
    InvalidTransition {
        from: RepairStatus,
        action: &'static str,
    },

    /// Completion data failed one or more business rules; the caller
    /// corrects the input and resubmits
    #[error("completion data failed validation ({} issue(s))", .0.len())]
    ValidationFailed(Vec<ValidationIssue>),
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Start a repair: `CheckedIn` → `InProgress`, assigning the manager from
/// the session.
///
/// The record is untouched on error. Fetching the already-ordered parts for
/// the receipt becomes relevant after this transition; that is the caller's
/// concern, not enforced here.
pub fn start_repair(record: &mut RepairRecord, session: &SessionContext) -> LifecycleResult<()> {
    match record.status {
        RepairStatus::CheckedIn => {}
        from => {
            return Err(LifecycleError::InvalidTransition {
                from,
                action: "start",
            });
        }
    }

    record.status = RepairStatus::InProgress;
    record.manager = Some(session.name.clone());
    debug!(receipt_id = %record.id, manager = %session.name, "Repair started");
    Ok(())
}

/// Complete a repair: `InProgress` → `Completed`.
///
/// Validates the summary first, collecting every violated rule so the form
/// can surface all problems at once; the record is mutated only when the
/// summary is acceptable. On success the completion summary is attached and
/// the lead time is derived from the intake and completion dates.
///
/// Calling this on an already-completed receipt is an `InvalidTransition`
/// error, not a silent no-op.
pub fn complete(record: &mut RepairRecord, summary: CompletionSummary) -> LifecycleResult<()> {
    match record.status {
        RepairStatus::InProgress => {}
        from => {
            return Err(LifecycleError::InvalidTransition {
                from,
                action: "complete",
            });
        }
    }

    let issues = validate_summary(&summary);
    if !issues.is_empty() {
        return Err(LifecycleError::ValidationFailed(issues));
    }

    // The completion date is known valid here; lead time is None only when
    // the intake date itself is malformed, and callers treat that as
    // "unknown" rather than zero.
    let lead_time_days = days_between(&record.intake_date, &summary.completion_date);
    match lead_time_days {
        Some(days) if days < 0 => {
            // Permitted but suspicious: completion recorded before intake.
            warn!(
                receipt_id = %record.id,
                intake_date = %record.intake_date,
                completion_date = %summary.completion_date,
                days,
                "Negative lead time on completion"
            );
        }
        None => {
            warn!(
                receipt_id = %record.id,
                intake_date = %record.intake_date,
                "Intake date unparseable, lead time unknown"
            );
        }
        _ => {}
    }

    record.status = RepairStatus::Completed;
    record.completion = Some(summary);
    record.lead_time_days = lead_time_days;
    debug!(receipt_id = %record.id, lead_time_days = ?record.lead_time_days, "Repair completed");
    Ok(())
}
