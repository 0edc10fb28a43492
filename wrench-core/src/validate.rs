//! Completion data validation
//!
//! Validation collects every violated rule instead of stopping at the first
//! so the form can surface all problems at once.

use shared::models::{CompletionSummary, PartLine, PartProvenance};
use thiserror::Error;

use crate::leadtime::is_valid_date;

/// A single violated completion rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("repair description must not be empty")]
    EmptyRepairDescription,

    #[error("repair cause must not be empty")]
    EmptyCause,

    #[error("completion date '{0}' is not a valid yyyy-MM-dd date")]
    MalformedCompletionDate(String),

    #[error("at least one part line with a positive quantity is required")]
    NoUsableParts,

    #[error("{bucket} part line {index}: part code must not be empty")]
    EmptyPartCode { bucket: PartProvenance, index: usize },

    #[error("{bucket} part line {index}: part name must not be empty")]
    EmptyPartName { bucket: PartProvenance, index: usize },

    #[error("{bucket} part line {index}: quantity must be positive, got {quantity}")]
    NonPositiveQuantity {
        bucket: PartProvenance,
        index: usize,
        quantity: i32,
    },

    #[error("{bucket} part line {index}: unit price must be a finite, non-negative amount")]
    InvalidUnitPrice { bucket: PartProvenance, index: usize },
}

fn check_lines(bucket: PartProvenance, lines: &[PartLine], issues: &mut Vec<ValidationIssue>) {
    for (index, line) in lines.iter().enumerate() {
        if line.part_code.trim().is_empty() {
            issues.push(ValidationIssue::EmptyPartCode { bucket, index });
        }
        if line.part_name.trim().is_empty() {
            issues.push(ValidationIssue::EmptyPartName { bucket, index });
        }
        if line.quantity <= 0 {
            issues.push(ValidationIssue::NonPositiveQuantity {
                bucket,
                index,
                quantity: line.quantity,
            });
        }
        if !line.unit_price.is_finite() || line.unit_price < 0.0 {
            issues.push(ValidationIssue::InvalidUnitPrice { bucket, index });
        }
    }
}

/// Validate a completion summary against the business rules.
///
/// Returns every violated rule; an empty vec means the summary is
/// acceptable for the transition to `Completed`.
pub fn validate_summary(summary: &CompletionSummary) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if summary.repair_description.trim().is_empty() {
        issues.push(ValidationIssue::EmptyRepairDescription);
    }
    if summary.cause.trim().is_empty() {
        issues.push(ValidationIssue::EmptyCause);
    }
    if !is_valid_date(&summary.completion_date) {
        issues.push(ValidationIssue::MalformedCompletionDate(
            summary.completion_date.clone(),
        ));
    }
    if !summary.has_usable_parts() {
        issues.push(ValidationIssue::NoUsableParts);
    }

    check_lines(PartProvenance::Ordered, &summary.ordered_lines, &mut issues);
    check_lines(PartProvenance::Extra, &summary.extra_lines, &mut issues);

    issues
}
