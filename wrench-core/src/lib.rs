//! Wrench Core - repair lifecycle and completion logic
//!
//! The state machine governing receipt transitions, completion validation,
//! the two-bucket parts ledger, lead-time derivation, and the per-record
//! ownership registry.

pub mod ledger;
pub mod leadtime;
pub mod lifecycle;
pub mod registry;
pub mod validate;

pub use ledger::{grand_total, merge, subtotal};
pub use leadtime::days_between;
pub use lifecycle::{LifecycleError, LifecycleResult, complete, start_repair};
pub use registry::{RecordHandle, RecordRegistry};
pub use validate::{ValidationIssue, validate_summary};
