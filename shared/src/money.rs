//! Money conversion helpers using rust_decimal for precision
//!
//! Monetary values are stored and serialized as `f64` but every calculation
//! runs in `Decimal`. Rounding to two decimal places happens only at the
//! presentation boundary, never on intermediate sums.

use rust_decimal::prelude::*;

/// Rounding for monetary display values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Inputs are validated as finite at the boundary. If NaN/Infinity somehow
/// reaches here, logs an error and returns ZERO instead of corrupting a
/// total.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage or display, rounded to 2 decimal
/// places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}
