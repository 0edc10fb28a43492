//! Part line model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::to_decimal;

/// Which bucket a part line came from
///
/// Ordered lines were formally purchase-ordered for the receipt; extra lines
/// are entered by hand at completion time. The same part code may appear in
/// both buckets and the buckets are never merged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartProvenance {
    Ordered,
    Extra,
}

impl fmt::Display for PartProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartProvenance::Ordered => write!(f, "ordered"),
            PartProvenance::Extra => write!(f, "extra"),
        }
    }
}

/// A single parts usage line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartLine {
    /// Part identifier, unique within its owning list
    pub part_code: String,
    pub part_name: String,
    pub quantity: i32,
    /// Price per unit in currency units; arithmetic happens in `Decimal`
    pub unit_price: f64,
}

impl PartLine {
    pub fn new(
        part_code: impl Into<String>,
        part_name: impl Into<String>,
        quantity: i32,
        unit_price: f64,
    ) -> Self {
        Self {
            part_code: part_code.into(),
            part_name: part_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total: `quantity * unit_price`, computed in decimal
    pub fn line_total(&self) -> Decimal {
        to_decimal(self.unit_price) * Decimal::from(self.quantity)
    }
}
