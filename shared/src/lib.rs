//! Shared types for the Wrench repair-shop client
//!
//! Models mirroring the receipt/order backend DTOs, the status
//! normalization table, and the API response envelope used by every crate.

pub mod dto;
pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CompletionSummary, PartLine, PartProvenance, RepairRecord, RepairStatus, SessionContext,
};
pub use response::ApiResponse;
