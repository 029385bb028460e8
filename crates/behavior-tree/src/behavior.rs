//! Core behavior trait.

use crate::Status;

/// A node that can be evaluated against a blackboard of type `C`.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node once.
    ///
    /// Nodes may read the blackboard and record their outcome in it; the
    /// returned [`Status`] only drives control flow of the parent composite.
    fn tick(&self, ctx: &mut C) -> Status;

    /// Short label used in traces and priority listings.
    fn label(&self) -> &'static str {
        "node"
    }
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn label(&self) -> &'static str {
        (**self).label()
    }
}
