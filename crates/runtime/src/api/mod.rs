//! Types downstream clients interact with.
mod errors;
mod summary;

pub use errors::{Result, RuntimeError};
pub use summary::{DuelOutcome, DuelSummary};
