//! Guarded rule node built from plain functions.

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Effect<C> = Box<dyn Fn(&mut C) + Send + Sync>;

/// A guarded transition: when the guard holds, `on_pass` writes the decision
/// into the blackboard and the node succeeds.
///
/// A selector of `Guarded` nodes is an ordered list of guarded transitions
/// evaluated top to bottom.
pub struct Guarded<C> {
    label: &'static str,
    guard: Predicate<C>,
    on_pass: Effect<C>,
}

impl<C> Guarded<C> {
    pub fn new(
        label: &'static str,
        guard: impl Fn(&C) -> bool + Send + Sync + 'static,
        on_pass: impl Fn(&mut C) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            guard: Box::new(guard),
            on_pass: Box::new(on_pass),
        }
    }
}

impl<C> Behavior<C> for Guarded<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if !(self.guard)(ctx) {
            return Status::Failure;
        }
        (self.on_pass)(ctx);
        Status::Success
    }

    fn label(&self) -> &'static str {
        self.label
    }
}
