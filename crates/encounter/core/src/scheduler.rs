//! Suspended multi-frame work.
//!
//! Anything the boss does "after N seconds" is a [`Continuation`] parked in
//! the [`Scheduler`] until its resume time. The controller drains due tasks
//! at the start of every tick, before deciding anything new.

use crate::time::GameTime;

/// Handle for cancelling a scheduled continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Work resumed on a later frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Continuation {
    /// Re-enable the navigation agent after a swing or slam.
    ResumeMovement,
    /// Apply melee damage if the target is still in range.
    MeleeStrike,
    /// End the heal flash and let the pulse or base tint show again.
    RestoreTint,
    /// Remove the boss entity after death.
    Despawn,
    /// Ask progression to load the next scene.
    SceneTransition,
}

impl Continuation {
    /// Death-sequence tasks keep running after the boss dies; all others
    /// are dropped.
    pub const fn survives_death(self) -> bool {
        matches!(self, Self::Despawn | Self::SceneTransition)
    }

    /// Kinds where a newer task supersedes the pending one.
    const fn is_exclusive(self) -> bool {
        matches!(self, Self::ResumeMovement | Self::RestoreTint)
    }
}

#[derive(Clone, Copy, Debug)]
struct Task {
    id: TaskId,
    resume_at: GameTime,
    continuation: Continuation,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks `continuation` until `resume_at`.
    ///
    /// At most one movement resume or tint restore is pending. The one
    /// that resumes later is kept, so a short recovery never cuts a longer
    /// one short; when the pending task wins, its id is returned.
    pub fn schedule(&mut self, resume_at: GameTime, continuation: Continuation) -> TaskId {
        if continuation.is_exclusive() {
            if let Some(pending) = self
                .tasks
                .iter()
                .find(|task| task.continuation == continuation && task.resume_at >= resume_at)
            {
                tracing::trace!(
                    %continuation,
                    %resume_at,
                    kept = %pending.resume_at,
                    "later resume already pending"
                );
                return pending.id;
            }
            self.cancel_kind(continuation);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            resume_at,
            continuation,
        });
        tracing::trace!(%continuation, %resume_at, "continuation scheduled");
        id
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_kind(&mut self, continuation: Continuation) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.continuation != continuation);
        before - self.tasks.len()
    }

    /// Drops every task that does not survive death.
    pub fn cancel_on_death(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.continuation.survives_death());
        before - self.tasks.len()
    }

    /// Removes and returns tasks due at `now`, oldest resume time first.
    /// Tasks due at the same instant keep their scheduling order.
    pub fn take_due(&mut self, now: GameTime) -> Vec<(TaskId, Continuation)> {
        let mut due: Vec<Task> = Vec::new();
        self.tasks.retain(|task| {
            if task.resume_at <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| {
            a.resume_at
                .partial_cmp(&b.resume_at)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        due.into_iter()
            .map(|task| (task.id, task.continuation))
            .collect()
    }

    pub fn is_pending(&self, continuation: Continuation) -> bool {
        self.tasks.iter().any(|task| task.continuation == continuation)
    }

    /// Earliest resume time of a pending `continuation`.
    pub fn next_resume(&self, continuation: Continuation) -> Option<GameTime> {
        self.tasks
            .iter()
            .filter(|task| task.continuation == continuation)
            .map(|task| task.resume_at)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
