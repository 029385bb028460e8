//! Damage and defense pipeline.
//!
//! Incoming hits go through, in order: the dead check, dodge, reflection,
//! health subtraction, the lethal check, and finally the reaction to a
//! survived hit (phase transition, emergency teleport or a hit clip). The
//! first stage that handles the hit ends the pipeline.

use crate::animation::Clip;
use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::{EffectKind, EncounterEnv};
use crate::events::EncounterEvent;
use crate::math::Vec3;
use crate::phase;
use crate::scheduler::Continuation;
use crate::time::GameTime;
use crate::timers::Cooldown;

/// What happened to one incoming hit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefenseOutcome {
    /// The boss is dead or the amount was not a valid damage value.
    Ignored,
    Dodged,
    /// Damage went back to the attacker instead.
    Reflected { damage: f32 },
    Damaged { health: f32 },
    Killed,
}

impl BossController {
    /// Applies an incoming hit of `amount`.
    ///
    /// Like [`update`](Self::update), records events that the caller is
    /// expected to take with [`drain_events`](Self::drain_events).
    pub fn take_damage(
        &mut self,
        amount: f32,
        now: GameTime,
        env: &mut EncounterEnv<'_>,
    ) -> DefenseOutcome {
        if self.state.is_dead {
            return DefenseOutcome::Ignored;
        }
        if !amount.is_finite() || amount < 0.0 {
            tracing::warn!(amount, "ignoring invalid damage amount");
            return DefenseOutcome::Ignored;
        }
        self.sync_position(env);

        let dodge_roll = self.rng.unit();
        if dodge_roll < self.state.profile.dodge_chance
            && self.state.cooldowns.is_ready(Cooldown::Dodge, now)
        {
            let cooldown = self.config.dodge.cooldown;
            self.state.cooldowns.consume(Cooldown::Dodge, now, cooldown);
            self.dodge(now, env);
            return DefenseOutcome::Dodged;
        }

        if self.can_reflect(env) && self.rng.roll(self.config.reflection.chance) {
            return self.reflect(now, env);
        }

        let health = self.state.apply_damage(amount);
        tracing::debug!(amount, health, "boss took damage");
        self.events.push(now, EncounterEvent::Damaged { amount, health });

        if health <= 0.0 {
            self.die(now, env);
            return DefenseOutcome::Killed;
        }

        let pending = phase::pending_transition(health, self.state.flags, &self.config);
        let transitioned = pending.is_some_and(|next| self.enter_phase(next, now, env));
        if !transitioned {
            self.react_to_hit(now, env);
        }
        DefenseOutcome::Damaged { health }
    }

    fn can_reflect(&self, env: &EncounterEnv<'_>) -> bool {
        phase::reflection_unlocked(self.state.phase, &self.config)
            && !env
                .target_ref()
                .is_some_and(|target| target.is_insta_kill_active())
    }

    fn reflect(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) -> DefenseOutcome {
        let damage = self.config.reflection.damage;
        match env.target() {
            Ok(target) => target.receive_damage(damage),
            Err(err) => tracing::warn!("reflected damage has no receiver: {err}"),
        }
        env.spawn_effect(EffectKind::Reflect, self.state.position);
        tracing::debug!(damage, "boss reflected a hit");
        self.events.push(now, EncounterEvent::Reflected { damage });
        DefenseOutcome::Reflected { damage }
    }

    /// Hops sideways if the ground allows it, otherwise dodges in place.
    fn dodge(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        let from = self.state.position;
        let mut to = from;

        let dodge = &self.config.dodge;
        let (distance, radius) = (dodge.sidestep_distance, dodge.search_radius);
        if distance > 0.0 {
            let heading = env
                .target_position()
                .map_or(Vec3::FORWARD, |target| from.heading_to(target));
            let side = if self.rng.coin() {
                heading.cross(Vec3::UP)
            } else {
                Vec3::UP.cross(heading)
            };
            let candidate = from + side * distance;
            match env
                .navigation_ref()
                .sample_navigable_point(candidate, radius)
            {
                Some(point) => {
                    env.navigation().warp(point);
                    self.state.position = point;
                    self.state.destination = None;
                    to = point;
                }
                None => tracing::debug!(%candidate, "sidestep blocked; dodging in place"),
            }
        }

        env.spawn_effect(EffectKind::Dodge, from);
        tracing::debug!(%from, %to, "boss dodged");
        self.events.push(now, EncounterEvent::Dodged { from, to });
    }

    /// Emergency teleport or a hit clip.
    fn react_to_hit(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        if phase::teleport_unlocked(self.state.phase, &self.config)
            && self.rng.roll(self.state.profile.emergency_teleport_chance)
            && self.state.cooldowns.is_ready(Cooldown::Teleport, now)
        {
            self.state.cooldowns.force_reset(Cooldown::Teleport);
            match self.teleport(now, env, true) {
                Ok(_) => return,
                Err(err) => tracing::debug!("emergency teleport failed: {err}"),
            }
        }

        let clip = Clip::HITS[self.rng.pick_index(Clip::HITS.len())];
        env.animation().play_clip(clip);
    }

    fn die(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        self.state.is_dead = true;
        self.state.health = 0.0;
        self.set_activity(ArbiterState::Dead);

        let navigation = env.navigation();
        navigation.halt();
        navigation.disable();
        navigation.set_collision_enabled(false);

        let clip = Clip::DEATHS[self.rng.pick_index(Clip::DEATHS.len())];
        env.animation().play_clip(clip);

        self.tint.cancel_all();
        let dropped = self.scheduler.cancel_on_death();

        match env.progression() {
            Ok(progression) => progression.encounter_ended(),
            Err(err) => tracing::warn!("encounter end not reported: {err}"),
        }

        let death = &self.config.death;
        self.scheduler
            .schedule(now + death.despawn_delay, Continuation::Despawn);
        self.scheduler.schedule(
            now + death.scene_transition_delay,
            Continuation::SceneTransition,
        );

        tracing::info!(%clip, dropped, "boss died");
        self.events.push(now, EncounterEvent::Died { clip });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BossConfig;
    use crate::phase::{Phase, PhaseFlags};
    use crate::testing::{Harness, calm_config};

    fn always_dodges() -> BossConfig {
        let mut config = calm_config();
        config.phase1.dodge_chance = 1.0;
        config
    }

    fn never_dodges() -> BossConfig {
        let mut config = calm_config();
        config.phase1.dodge_chance = 0.0;
        config.phase2.dodge_chance = 0.0;
        config.phase3.dodge_chance = 0.0;
        config
    }

    #[test]
    fn dodge_discards_damage_until_cooldown_opens_a_window() {
        let mut h = Harness::new(always_dodges(), []).with_constant_rolls(0.5);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);

        assert_eq!(h.hit(100.0, 0.0), DefenseOutcome::Dodged);
        assert_eq!(h.boss.health(), 1000.0);

        // Dodge cooldown is 4s: the next hit lands.
        assert_eq!(h.hit(100.0, 1.0), DefenseOutcome::Damaged { health: 900.0 });
        assert_eq!(h.hit(100.0, 4.0), DefenseOutcome::Dodged);
        assert_eq!(h.boss.health(), 900.0);
    }

    #[test]
    fn successful_dodge_sidesteps_on_navigable_ground() {
        // Dodge roll, then the side coin (0.2 picks left).
        let mut h = Harness::new(always_dodges(), [0.0, 0.2]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);

        h.hit(10.0, 0.0);
        assert_eq!(h.nav.position, Vec3::new(-2.5, 0.0, 0.0));
        assert_eq!(h.effects.spawned[0].0, EffectKind::Dodge);
    }

    #[test]
    fn blocked_sidestep_dodges_in_place() {
        let mut h = Harness::new(always_dodges(), [0.0, 0.2]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.nav.navigable = false;

        assert_eq!(h.hit(10.0, 0.0), DefenseOutcome::Dodged);
        assert_eq!(h.nav.position, Vec3::ZERO);
        assert_eq!(h.boss.health(), 1000.0);
    }

    #[test]
    fn damage_is_clamped_at_zero_and_kills_once() {
        let mut h = Harness::new(never_dodges(), []);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);

        assert_eq!(h.hit(5000.0, 0.0), DefenseOutcome::Killed);
        assert_eq!(h.boss.health(), 0.0);
        assert!(h.boss.is_dead());
        assert_eq!(h.hit(5000.0, 0.1), DefenseOutcome::Ignored);

        assert_eq!(h.progression.ended, 1);
        assert!(h.nav.disabled);
        assert!(!h.nav.collision);
        let deaths = h
            .anim
            .played
            .iter()
            .filter(|clip| Clip::DEATHS.contains(clip))
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn invalid_amounts_are_ignored() {
        let mut h = Harness::new(never_dodges(), []);
        assert_eq!(h.hit(-5.0, 0.0), DefenseOutcome::Ignored);
        assert_eq!(h.hit(f32::NAN, 0.0), DefenseOutcome::Ignored);
        assert_eq!(h.boss.health(), 1000.0);
    }

    #[test]
    fn hit_on_threshold_enters_phase_two_once() {
        let mut config = never_dodges();
        config.stats.max_health = 500.0;
        config.phase2.health_threshold = 500.0;
        config.phase3.health_threshold = 0.0;
        let mut h = Harness::new(config, []);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.nav.speed = 2.0;

        h.hit(1.0, 0.0);
        assert_eq!(h.boss.phase(), Phase::Two);
        assert_eq!(h.boss.state().profile.damage, 50.0);
        assert_eq!(h.boss.state().profile.speeds.run, 6.0);
        assert_eq!(h.nav.speed, 3.0);
        assert_eq!(h.anim.current, Some(Clip::Rage));

        h.tick(0.1);
        h.hit(1.0, 0.2);
        h.tick(0.3);
        assert_eq!(h.boss.state().flags, PhaseFlags::ENTERED_PHASE_2);
        assert_eq!(h.boss.state().profile.damage, 50.0);
        assert_eq!(h.nav.speed, 3.0);
    }

    #[test]
    fn reflection_returns_damage_to_the_attacker() {
        let mut config = never_dodges();
        config.reflection.chance = 1.0;
        let mut h = Harness::new(config, []);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.force_phase(Phase::Two);

        assert_eq!(
            h.hit(100.0, 0.0),
            DefenseOutcome::Reflected { damage: 10.0 }
        );
        assert_eq!(h.boss.health(), 1000.0);
        assert_eq!(h.target.damage_taken, vec![10.0]);
    }

    #[test]
    fn no_reflection_while_insta_kill_is_active() {
        let mut config = never_dodges();
        config.reflection.chance = 1.0;
        config.phase2.emergency_teleport_chance = 0.0;
        let mut h = Harness::new(config, []);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.target.insta_kill = true;
        h.force_phase(Phase::Two);

        assert_eq!(h.hit(100.0, 0.0), DefenseOutcome::Damaged { health: 900.0 });
        assert!(h.target.damage_taken.is_empty());
    }

    #[test]
    fn reflection_is_locked_in_phase_one() {
        let mut config = never_dodges();
        config.reflection.chance = 1.0;
        let mut h = Harness::new(config, []);
        assert_eq!(h.hit(100.0, 0.0), DefenseOutcome::Damaged { health: 900.0 });
    }

    #[test]
    fn emergency_teleport_replaces_the_hit_reaction() {
        let mut config = never_dodges();
        config.reflection.enabled = false;
        config.phase2.emergency_teleport_chance = 1.0;
        config.teleport.attack_chance = 0.0;
        let mut h = Harness::new(config, []).with_constant_rolls(0.5);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.force_phase(Phase::Two);

        h.hit(100.0, 0.0);

        let events = h.events();
        assert!(events.iter().any(|e| matches!(
            e,
            EncounterEvent::Teleported {
                emergency: true,
                ..
            }
        )));
        assert!(!h.anim.played.iter().any(|clip| Clip::HITS.contains(clip)));
    }

    #[test]
    fn death_sequence_outlives_the_boss() {
        let mut h = Harness::new(never_dodges(), []);
        h.target.position = Vec3::new(0.0, 0.0, 2.0);

        // A swing is in flight when the boss dies.
        h.tick(0.0);
        h.hit(5000.0, 0.1);
        h.tick(0.5);
        assert!(h.target.damage_taken.is_empty());

        h.tick(4.9);
        assert!(!h.boss.is_despawned());
        h.tick(5.2);
        assert!(h.boss.is_despawned());
        assert_eq!(h.progression.scenes, vec!["MainMenu".to_owned()]);
    }
}
