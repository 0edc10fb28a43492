//! Completion ledger
//!
//! Builds and totals a completion summary from the two part-line buckets.
//! All arithmetic runs in `Decimal`; nothing here rounds intermediate sums.

use rust_decimal::Decimal;
use shared::models::{CompletionSummary, PartLine};

/// Build a completion summary from the two provenance buckets.
///
/// The buckets are concatenated as-is: no deduplication, no merging. A part
/// code present in both `ordered` and `extra` represents pre-ordered stock
/// plus additionally consumed stock and must stay two separate lines.
pub fn merge(
    ordered: Vec<PartLine>,
    extra: Vec<PartLine>,
    completion_date: impl Into<String>,
    repair_description: impl Into<String>,
    cause: impl Into<String>,
) -> CompletionSummary {
    CompletionSummary {
        completion_date: completion_date.into(),
        repair_description: repair_description.into(),
        cause: cause.into(),
        ordered_lines: ordered,
        extra_lines: extra,
    }
}

/// Sum of line totals over a sequence of part lines; empty yields zero
pub fn subtotal(lines: &[PartLine]) -> Decimal {
    lines.iter().map(PartLine::line_total).sum()
}

/// Ordered subtotal plus extra subtotal
pub fn grand_total(summary: &CompletionSummary) -> Decimal {
    subtotal(&summary.ordered_lines) + subtotal(&summary.extra_lines)
}
