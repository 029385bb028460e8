//! In-memory collaborators and a harness for controller tests.

use crate::animation::Clip;
use crate::config::BossConfig;
use crate::controller::BossController;
use crate::defense::DefenseOutcome;
use crate::env::{
    AnimationOracle, EffectKind, EffectsOracle, EncounterEnv, NavigationOracle, ProgressionOracle,
    TargetOracle,
};
use crate::events::EncounterEvent;
use crate::math::Vec3;
use crate::phase::Phase;
use crate::rng::ScriptedRandom;
use crate::time::GameTime;
use crate::tint::Color;

#[derive(Debug)]
pub(crate) struct MockNav {
    pub position: Vec3,
    pub destination: Option<Vec3>,
    pub halted: bool,
    pub speed: f32,
    /// When `false`, no point samples as navigable.
    pub navigable: bool,
    pub warps: usize,
    pub facing: Vec3,
    pub collision: bool,
    pub disabled: bool,
}

impl Default for MockNav {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            destination: None,
            halted: false,
            speed: 2.0,
            navigable: true,
            warps: 0,
            facing: Vec3::FORWARD,
            collision: true,
            disabled: false,
        }
    }
}

impl NavigationOracle for MockNav {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    fn velocity(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn is_path_pending(&self) -> bool {
        false
    }

    fn halt(&mut self) {
        self.halted = true;
    }

    fn resume(&mut self) {
        self.halted = false;
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn sample_navigable_point(&self, near: Vec3, _radius: f32) -> Option<Vec3> {
        self.navigable.then_some(near)
    }

    fn warp(&mut self, point: Vec3) {
        self.position = point;
        self.destination = None;
        self.warps += 1;
    }

    fn face(&mut self, direction: Vec3) {
        self.facing = direction;
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision = enabled;
    }

    fn disable(&mut self) {
        self.disabled = true;
    }
}

/// Clips never finish on their own; tests clear `current` to end one.
#[derive(Debug, Default)]
pub(crate) struct MockAnim {
    pub current: Option<Clip>,
    pub played: Vec<Clip>,
}

impl AnimationOracle for MockAnim {
    fn play_clip(&mut self, clip: Clip) {
        if self.current != Some(clip) {
            self.played.push(clip);
        }
        self.current = Some(clip);
    }

    fn is_playing_any_of(&self, clips: &[Clip]) -> bool {
        self.current.is_some_and(|clip| clips.contains(&clip))
    }

    fn current_clip(&self) -> Option<Clip> {
        self.current
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockEffects {
    pub spawned: Vec<(EffectKind, Vec3)>,
    pub tints: Vec<Color>,
}

impl EffectsOracle for MockEffects {
    fn spawn_effect(&mut self, kind: EffectKind, position: Vec3) {
        self.spawned.push((kind, position));
    }

    fn set_tint(&mut self, color: Color) {
        self.tints.push(color);
    }
}

#[derive(Debug)]
pub(crate) struct MockTarget {
    pub position: Vec3,
    pub forward: Vec3,
    pub insta_kill: bool,
    pub damage_taken: Vec<f32>,
}

impl Default for MockTarget {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            forward: Vec3::FORWARD,
            insta_kill: false,
            damage_taken: Vec::new(),
        }
    }
}

impl TargetOracle for MockTarget {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn is_insta_kill_active(&self) -> bool {
        self.insta_kill
    }

    fn receive_damage(&mut self, amount: f32) {
        self.damage_taken.push(amount);
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockProgression {
    pub ended: usize,
    pub scenes: Vec<String>,
}

impl ProgressionOracle for MockProgression {
    fn encounter_ended(&mut self) {
        self.ended += 1;
    }

    fn request_scene(&mut self, scene: &str) {
        self.scenes.push(scene.to_owned());
    }
}

/// Default tuning without the shockwave, so melee and movement tests are not
/// pre-empted by a slam on the first tick.
pub(crate) fn calm_config() -> BossConfig {
    let mut config = BossConfig::default();
    config.shockwave.enabled = false;
    config
}

/// A boss plus one of every collaborator.
pub(crate) struct Harness {
    pub boss: BossController,
    pub nav: MockNav,
    pub anim: MockAnim,
    pub effects: MockEffects,
    pub target: MockTarget,
    pub progression: MockProgression,
    /// When `false`, calls run without a target collaborator.
    pub target_present: bool,
}

impl Harness {
    /// `rolls` are the unit values the boss draws, in order; once they run
    /// out every draw is `0.999`.
    pub fn new(config: BossConfig, rolls: impl IntoIterator<Item = f32>) -> Self {
        let boss = match BossController::new(config, ScriptedRandom::new(rolls)) {
            Ok(boss) => boss,
            Err(err) => panic!("test config rejected: {err}"),
        };
        Self {
            boss,
            nav: MockNav::default(),
            anim: MockAnim::default(),
            effects: MockEffects::default(),
            target: MockTarget::default(),
            progression: MockProgression::default(),
            target_present: true,
        }
    }

    /// Replaces the roll script with a constant value.
    pub fn with_constant_rolls(mut self, value: f32) -> Self {
        self.boss.rng = Box::new(ScriptedRandom::constant(value));
        self
    }

    pub fn run<R>(&mut self, f: impl FnOnce(&mut BossController, &mut EncounterEnv<'_>) -> R) -> R {
        let mut env = EncounterEnv::new(&mut self.nav, &mut self.anim)
            .with_effects(&mut self.effects)
            .with_progression(&mut self.progression);
        if self.target_present {
            env = env.with_target(&mut self.target);
        }
        f(&mut self.boss, &mut env)
    }

    pub fn tick(&mut self, t: f32) {
        self.run(|boss, env| boss.update(GameTime(t), env));
    }

    pub fn hit(&mut self, amount: f32, t: f32) -> DefenseOutcome {
        self.run(|boss, env| boss.take_damage(amount, GameTime(t), env))
    }

    /// Puts the boss straight into `phase` without running the transition
    /// side effects.
    pub fn force_phase(&mut self, phase: Phase) {
        let config = self.boss.config.clone();
        for step in [Phase::Two, Phase::Three] {
            if step <= phase {
                self.boss.state.enter_phase(step, &config);
            }
        }
    }

    /// Copies the mock agent position into the boss state.
    pub fn sync(&mut self) {
        self.boss.state.position = self.nav.position;
    }

    pub fn events(&mut self) -> Vec<EncounterEvent> {
        self.boss
            .drain_events()
            .into_iter()
            .map(|record| record.event)
            .collect()
    }
}
