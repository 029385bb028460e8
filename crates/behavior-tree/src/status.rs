//! Status returned by behavior nodes.

/// Outcome of evaluating a node for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The condition held, or the action was chosen.
    Success,
    /// The condition did not hold; a selector moves on to the next child.
    Failure,
}

impl Status {
    /// Maps a boolean condition onto a status.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}
