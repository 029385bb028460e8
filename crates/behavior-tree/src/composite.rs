//! Composite behavior nodes.
//!
//! [`Selector`] is the priority table: children are tried in declaration
//! order and the first success wins.

use crate::{Behavior, Status};

/// Runs children in order until one succeeds (logical OR).
///
/// Because evaluation stops at the first success, the child order *is* the
/// priority order. [`Selector::tick_indexed`] additionally reports which
/// child won, which lets callers assert on the priority table directly.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self { children }
    }

    /// Ticks children in priority order and returns the index of the first
    /// one that succeeded, if any.
    pub fn tick_indexed(&self, ctx: &mut C) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.tick(ctx).is_success())
    }

    /// Labels of the children in priority order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.children.iter().map(|child| child.label()).collect()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool(self.tick_indexed(ctx).is_some())
    }

    fn label(&self) -> &'static str {
        "selector"
    }
}
