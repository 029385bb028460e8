//! Minimal behavior tree for frame-driven encounter AI.
//!
//! Every node is evaluated against a caller-owned blackboard once per frame.
//! The tree never keeps per-frame state of its own, so the same tree can be
//! built once and ticked for the whole lifetime of an encounter.
//!
//! - **Total order**: [`Selector`] tries children strictly top to bottom and
//!   stops at the first success, which makes a priority table auditable
//! - **No Running state**: long actions are modelled outside the tree as
//!   scheduled continuations
//! - **Zero dependencies**
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - [`Selector`]: the priority table
//! - [`Guarded`]: one guarded rule of the table

pub mod behavior;
pub mod composite;
pub mod guard;
pub mod status;

pub use behavior::Behavior;
pub use composite::Selector;
pub use guard::Guarded;
pub use status::Status;
