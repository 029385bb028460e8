//! Action arbiter: the per-tick priority table.
//!
//! Each tick the controller takes a [`Blackboard`] snapshot of everything a
//! decision depends on and runs it through a [`Selector`] of guarded rules,
//! one per row of [`PRIORITY`]. The first rule whose guard holds writes its
//! [`Decision`]; the controller then carries it out against the
//! collaborators. Keeping the choice separate from its execution lets the
//! table be tested without any collaborator.

use std::fmt;

use behavior_tree::{Behavior, Guarded, Selector};

use crate::config::BossConfig;
use crate::movement::MovementPattern;
use crate::phase::{self, Phase};
use crate::state::BossState;
use crate::time::GameTime;
use crate::timers::Cooldown;

/// Rows of the priority table, highest first.
pub const PRIORITY: [&str; 8] = [
    "inactive",
    "phase_transition",
    "teleport",
    "area_attack",
    "heal",
    "melee",
    "chase",
    "idle",
];

/// What the boss is currently doing, as last decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArbiterState {
    #[default]
    Idle,
    Transitioning,
    Teleporting,
    AreaAttacking,
    Healing,
    Chasing(MovementPattern),
    MeleeAttacking,
    Dead,
}

impl fmt::Display for ArbiterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Transitioning => f.write_str("transitioning"),
            Self::Teleporting => f.write_str("teleporting"),
            Self::AreaAttacking => f.write_str("area_attacking"),
            Self::Healing => f.write_str("healing"),
            Self::Chasing(pattern) => write!(f, "chasing({pattern})"),
            Self::MeleeAttacking => f.write_str("melee_attacking"),
            Self::Dead => f.write_str("dead"),
        }
    }
}

/// Outcome of one arbiter evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Dead or no target: do nothing.
    Hold,
    Transition(Phase),
    Teleport,
    AreaAttack,
    Heal,
    Melee,
    Chase,
    Idle,
}

/// Owned snapshot the priority rules read.
#[derive(Clone, Debug, PartialEq)]
pub struct Blackboard {
    pub now: GameTime,
    pub is_dead: bool,
    pub has_target: bool,
    pub distance: f32,
    pub attack_range: f32,
    pub chase_range: f32,
    pub pending_transition: Option<Phase>,
    pub teleport_ready: bool,
    pub area_attack_ready: bool,
    pub heal_ready: bool,
    pub decision: Option<Decision>,
}

impl Blackboard {
    /// Snapshots `state` against the current target distance.
    ///
    /// `distance` is `None` when the encounter has no target.
    pub fn observe(
        state: &BossState,
        config: &BossConfig,
        distance: Option<f32>,
        now: GameTime,
    ) -> Self {
        let ready = |cooldown| state.cooldowns.is_ready(cooldown, now);
        Self {
            now,
            is_dead: state.is_dead,
            has_target: distance.is_some(),
            distance: distance.unwrap_or(f32::INFINITY),
            attack_range: config.stats.attack_range,
            chase_range: config.stats.chase_range,
            pending_transition: phase::pending_transition(state.health, state.flags, config),
            teleport_ready: phase::teleport_unlocked(state.phase, config)
                && ready(Cooldown::Teleport),
            area_attack_ready: config.shockwave.enabled && ready(Cooldown::Shockwave),
            heal_ready: phase::healing_unlocked(state.phase, config)
                && ready(Cooldown::Heal)
                && state.is_wounded(),
            decision: None,
        }
    }

    fn in_attack_range(&self) -> bool {
        self.distance <= self.attack_range
    }

    fn in_chase_range(&self) -> bool {
        self.distance <= self.chase_range
    }
}

type Rule = Box<dyn Behavior<Blackboard>>;

fn rule(
    label: &'static str,
    guard: impl Fn(&Blackboard) -> bool + Send + Sync + 'static,
    decision: impl Fn(&Blackboard) -> Decision + Send + Sync + 'static,
) -> Rule {
    Box::new(Guarded::new(label, guard, move |board: &mut Blackboard| {
        board.decision = Some(decision(board));
    }))
}

/// The priority table, built once per controller.
pub struct ActionArbiter {
    table: Selector<Blackboard>,
}

impl ActionArbiter {
    pub fn new() -> Self {
        let rules = vec![
            rule(
                PRIORITY[0],
                |b| b.is_dead || !b.has_target,
                |_| Decision::Hold,
            ),
            rule(
                PRIORITY[1],
                |b| b.pending_transition.is_some(),
                |b| b.pending_transition.map_or(Decision::Hold, Decision::Transition),
            ),
            rule(PRIORITY[2], |b| b.teleport_ready, |_| Decision::Teleport),
            rule(
                PRIORITY[3],
                |b| b.area_attack_ready && b.in_chase_range(),
                |_| Decision::AreaAttack,
            ),
            rule(PRIORITY[4], |b| b.heal_ready, |_| Decision::Heal),
            rule(PRIORITY[5], Blackboard::in_attack_range, |_| Decision::Melee),
            rule(PRIORITY[6], Blackboard::in_chase_range, |_| Decision::Chase),
            rule(PRIORITY[7], |_| true, |_| Decision::Idle),
        ];
        Self {
            table: Selector::new(rules),
        }
    }

    /// Evaluates the table top to bottom and returns the first decision.
    pub fn decide(&self, board: &mut Blackboard) -> Decision {
        board.decision = None;
        match self.table.tick_indexed(board) {
            Some(row) => {
                let decision = board.decision.unwrap_or(Decision::Hold);
                tracing::trace!(rule = PRIORITY[row], ?decision, "arbiter decided");
                decision
            }
            None => Decision::Hold,
        }
    }

    /// Rule labels in evaluation order.
    pub fn rules(&self) -> Vec<&'static str> {
        self.table.labels()
    }
}

impl Default for ActionArbiter {
    fn default() -> Self {
        Self::new()
    }
}
