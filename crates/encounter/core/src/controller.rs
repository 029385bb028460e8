//! The boss encounter controller.
//!
//! [`BossController`] owns the boss state and composes the phase policy,
//! the arbiter, the defense pipeline and the continuation scheduler into
//! two entry points: [`update`](BossController::update), called once per
//! frame, and [`take_damage`](BossController::take_damage).

use crate::arbiter::{ActionArbiter, ArbiterState, Blackboard, Decision};
use crate::config::{BossConfig, ConfigError};
use crate::env::EncounterEnv;
use crate::error::EncounterError;
use crate::events::{EncounterEvent, EventLog, EventRecord};
use crate::phase::Phase;
use crate::rng::RandomSource;
use crate::scheduler::{Continuation, Scheduler};
use crate::state::BossState;
use crate::tint::{Color, TintChannel};
use crate::time::GameTime;

pub struct BossController {
    pub(crate) config: BossConfig,
    pub(crate) state: BossState,
    pub(crate) rng: Box<dyn RandomSource>,
    pub(crate) scheduler: Scheduler,
    pub(crate) tint: TintChannel,
    pub(crate) events: EventLog,
    arbiter: ActionArbiter,
}

impl BossController {
    /// Spawns a boss at full health in phase 1.
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`BossConfig::validate`].
    pub fn new(config: BossConfig, rng: impl RandomSource + 'static) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = BossState::new(&config);
        Ok(Self {
            config,
            state,
            rng: Box::new(rng),
            scheduler: Scheduler::new(),
            tint: TintChannel::new(),
            events: EventLog::default(),
            arbiter: ActionArbiter::new(),
        })
    }

    /// Advances the boss by one frame.
    ///
    /// Due continuations run first, then the arbiter picks at most one
    /// top-level action, then the tint channel writes this frame's color.
    ///
    /// Events recorded here wait for [`drain_events`](Self::drain_events);
    /// drain once per frame, since only the newest
    /// [`EventLog::CAPACITY`] are kept.
    pub fn update(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        if self.state.despawned && self.scheduler.is_empty() {
            return;
        }

        self.sync_position(env);
        self.run_continuations(now, env);

        if !self.state.is_dead {
            let distance = env
                .target_position()
                .map(|target| self.state.position.distance(target));
            let mut board = Blackboard::observe(&self.state, &self.config, distance, now);
            let decision = self.arbiter.decide(&mut board);
            self.execute(decision, now, env);
        }

        self.refresh_tint(now, env);
    }

    fn execute(&mut self, decision: Decision, now: GameTime, env: &mut EncounterEnv<'_>) {
        let result = match decision {
            Decision::Hold => {
                if !env.has_target() {
                    tracing::trace!("no target; holding");
                }
                return;
            }
            Decision::Transition(phase) => {
                self.enter_phase(phase, now, env);
                Ok(())
            }
            Decision::Teleport => self.teleport(now, env, false).map(|_| ()),
            Decision::AreaAttack => self.area_attack(now, env).map(|_| ()),
            Decision::Heal => {
                self.heal(now, env);
                Ok(())
            }
            Decision::Melee => self.melee(now, env).map(|_| ()),
            Decision::Chase => self.chase(now, env),
            Decision::Idle => {
                self.idle(env);
                Ok(())
            }
        };

        if let Err(err) = result {
            tracing::debug!(
                ?decision,
                code = err.error_code(),
                severity = err.severity().as_str(),
                "action skipped: {err}"
            );
        }
    }

    pub(crate) fn sync_position(&mut self, env: &EncounterEnv<'_>) {
        self.state.position = env.navigation_ref().position();
    }

    fn run_continuations(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        for (_, continuation) in self.scheduler.take_due(now) {
            if self.state.is_dead && !continuation.survives_death() {
                continue;
            }
            match continuation {
                Continuation::ResumeMovement => env.navigation().resume(),
                Continuation::MeleeStrike => self.resolve_strike(now, env),
                Continuation::RestoreTint => self.tint.end_flash(),
                Continuation::Despawn => {
                    self.state.despawned = true;
                    self.events.push(now, EncounterEvent::Despawned);
                    tracing::info!("boss despawned");
                }
                Continuation::SceneTransition => {
                    let scene = self.config.death.next_scene.clone();
                    match env.progression() {
                        Ok(progression) => progression.request_scene(&scene),
                        Err(err) => tracing::warn!("cannot load {scene}: {err}"),
                    }
                    self.events.push(now, EncounterEvent::SceneTransition { scene });
                }
            }
        }
    }

    fn refresh_tint(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        let base = self.base_tint(env);
        if let Some(color) = self.tint.frame(now, base) {
            match env.effects() {
                Ok(effects) => effects.set_tint(color),
                Err(err) => tracing::trace!("tint not shown: {err}"),
            }
        }
    }

    pub(crate) fn base_tint(&self, env: &EncounterEnv<'_>) -> Color {
        env.effects_ref().map_or(Color::WHITE, |effects| effects.base_tint())
    }

    pub(crate) fn set_activity(&mut self, activity: ArbiterState) {
        if self.state.activity != activity {
            tracing::debug!(from = %self.state.activity, to = %activity, "activity changed");
            self.state.activity = activity;
        }
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead
    }

    /// `true` once the despawn delay after death has elapsed.
    pub fn is_despawned(&self) -> bool {
        self.state.despawned
    }

    pub fn health(&self) -> f32 {
        self.state.health
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn activity(&self) -> ArbiterState {
        self.state.activity
    }

    pub fn state(&self) -> &BossState {
        &self.state
    }

    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn tint(&self) -> &TintChannel {
        &self.tint
    }

    /// Labels of the arbiter's priority table, highest first.
    pub fn priority_table(&self) -> Vec<&'static str> {
        self.arbiter.rules()
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        self.events.drain()
    }
}
