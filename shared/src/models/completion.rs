//! Completion summary model

use serde::{Deserialize, Serialize};

use super::part::PartLine;

/// Data recorded when a repair finishes
///
/// Part lines are kept in two provenance buckets with independent subtotals.
/// A part code appearing in both buckets represents pre-ordered stock plus
/// additionally consumed stock and is intentionally not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionSummary {
    /// Civil completion date, `yyyy-MM-dd`
    pub completion_date: String,
    pub repair_description: String,
    pub cause: String,
    /// Lines sourced from reconciled purchase orders
    pub ordered_lines: Vec<PartLine>,
    /// Lines entered manually at completion time
    pub extra_lines: Vec<PartLine>,
}

impl CompletionSummary {
    /// Total number of part lines across both buckets
    pub fn line_count(&self) -> usize {
        self.ordered_lines.len() + self.extra_lines.len()
    }

    /// Whether any line in either bucket carries a positive quantity
    pub fn has_usable_parts(&self) -> bool {
        self.ordered_lines
            .iter()
            .chain(self.extra_lines.iter())
            .any(|line| line.quantity > 0)
    }
}
