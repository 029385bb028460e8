//! Fixed-step headless duel.

use std::collections::BTreeMap;

use encounter_core::{BossController, DefenseOutcome, EventRecord, GameTime, NavigationOracle};

use crate::api::{DuelOutcome, DuelSummary};
use crate::oracle::OracleBundle;
use crate::scenario::DuelScenario;

/// A boss, its collaborators and a clock.
///
/// Each [`step`](Self::step) advances the clock by one frame, lets the
/// player act, runs one boss update and then moves the collaborators. The
/// whole run is a pure function of the scenario, the boss config and the
/// seed.
pub struct Simulation {
    boss: BossController,
    oracles: OracleBundle,
    scenario: DuelScenario,
    clock: GameTime,
    frame: u64,
    damage_to_boss: f32,
    counts: BTreeMap<String, usize>,
}

impl Simulation {
    pub fn new(boss: BossController, oracles: OracleBundle, scenario: DuelScenario) -> Self {
        Self {
            boss,
            oracles,
            scenario,
            clock: GameTime::ZERO,
            frame: 0,
            damage_to_boss: 0.0,
            counts: BTreeMap::new(),
        }
    }

    /// Advances one frame and returns the events it produced.
    pub fn step(&mut self) -> Vec<EventRecord> {
        let dt = self.scenario.step;
        self.frame += 1;
        self.clock = self.clock + dt;
        let now = self.clock;

        let boss_position = self.oracles.navigator.position();
        self.oracles.effects.set_time(now);
        self.oracles.player.advance(now, dt, boss_position);

        if !self.boss.is_dead()
            && let Some(damage) = self.oracles.player.try_fire(now, boss_position)
        {
            let before = self.boss.health();
            let outcome = self.boss.take_damage(damage, now, &mut self.oracles.env());
            self.damage_to_boss += before - self.boss.health();
            tracing::trace!(?outcome, damage, frame = self.frame, "player shot");
        }

        self.boss.update(now, &mut self.oracles.env());
        self.oracles.step(dt);

        let records = self.boss.drain_events();
        for record in &records {
            *self.counts.entry(record.event.name().to_owned()).or_default() += 1;
        }
        records
    }

    /// How the duel ended, or `None` while it is still running.
    pub fn outcome(&self) -> Option<DuelOutcome> {
        let death_sequence_done = self.boss.is_despawned() && self.boss.scheduler().is_empty();
        if death_sequence_done {
            Some(DuelOutcome::BossDefeated)
        } else if !self.oracles.player.is_alive() {
            Some(DuelOutcome::PlayerDefeated)
        } else if self.clock.as_secs() >= self.scenario.time_limit {
            Some(if self.boss.is_dead() {
                DuelOutcome::BossDefeated
            } else {
                DuelOutcome::TimedOut
            })
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Steps until the duel ends.
    pub fn run_to_end(&mut self) -> DuelSummary {
        while !self.is_finished() {
            self.step();
        }
        self.summary()
    }

    pub fn summary(&self) -> DuelSummary {
        DuelSummary {
            seed: self.scenario.seed,
            outcome: self.outcome().unwrap_or(DuelOutcome::TimedOut),
            elapsed: self.clock.as_secs(),
            frames: self.frame,
            boss_health: self.boss.health(),
            final_phase: self.boss.phase(),
            player_health: self.oracles.player.health(),
            damage_to_boss: self.damage_to_boss,
            damage_to_player: self.oracles.player.damage_taken(),
            next_scene: self.oracles.director.requested().last().cloned(),
            events: self.counts.clone(),
        }
    }

    pub fn boss(&self) -> &BossController {
        &self.boss
    }

    /// Hits the boss outside the player's fire cadence, at the current
    /// clock.
    pub fn strike(&mut self, amount: f32) -> DefenseOutcome {
        let before = self.boss.health();
        let outcome = self.boss.take_damage(amount, self.clock, &mut self.oracles.env());
        self.damage_to_boss += before - self.boss.health();
        outcome
    }

    pub fn oracles(&self) -> &OracleBundle {
        &self.oracles
    }

    pub fn clock(&self) -> GameTime {
        self.clock
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scenario(&self) -> &DuelScenario {
        &self.scenario
    }
}
