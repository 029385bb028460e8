use std::f32::consts::TAU;

use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::{EffectKind, EncounterEnv, OracleError};
use crate::error::ActionError;
use crate::events::{EncounterEvent, TeleportKind};
use crate::math::Vec3;
use crate::time::GameTime;
use crate::timers::Cooldown;

impl BossController {
    /// Teleports next to the target.
    ///
    /// The cooldown is consumed before anything else, so an aborted
    /// teleport still waits a full cycle. The destination must pass the
    /// navigable-surface check or the boss stays where it is.
    pub(crate) fn teleport(
        &mut self,
        now: GameTime,
        env: &mut EncounterEnv<'_>,
        emergency: bool,
    ) -> Result<TeleportKind, ActionError> {
        let (target, target_forward) = env
            .target_ref()
            .map(|target| (target.position(), target.forward()))
            .ok_or(OracleError::TargetNotAvailable)?;

        let cooldown = self.state.profile.teleport_cooldown;
        self.state.cooldowns.consume(Cooldown::Teleport, now, cooldown);

        let teleport = &self.config.teleport;
        let kind = if self.rng.roll(teleport.attack_chance) {
            TeleportKind::Ambush
        } else {
            TeleportKind::Reposition
        };
        let candidate = match kind {
            TeleportKind::Ambush => {
                target - target_forward.flat().normalize_or_zero() * teleport.behind_offset
            }
            TeleportKind::Reposition => {
                let angle = self.rng.range(0.0, TAU);
                let distance = self.rng.range(teleport.min_distance, teleport.max_distance);
                Vec3::new(
                    target.x + angle.cos() * distance,
                    self.state.position.y,
                    target.z + angle.sin() * distance,
                )
            }
        };

        let radius = teleport.search_radius;
        let Some(destination) = env.navigation_ref().sample_navigable_point(candidate, radius)
        else {
            tracing::debug!(%candidate, %kind, "no navigable point near teleport destination");
            let aborted = EncounterEvent::TeleportAborted { kind, emergency };
            self.events.push(now, aborted);
            return Err(ActionError::NoNavigableSurface { radius });
        };

        self.set_activity(ArbiterState::Teleporting);
        let origin = self.state.position;
        env.spawn_effect(EffectKind::TeleportOrigin, origin);

        let navigation = env.navigation();
        navigation.warp(destination);
        navigation.face(destination.heading_to(target));
        self.state.position = destination;
        self.state.destination = None;

        env.spawn_effect(EffectKind::TeleportArrival, destination);
        tracing::debug!(%origin, %destination, %kind, emergency, "boss teleported");
        self.events.push(
            now,
            EncounterEvent::Teleported {
                kind,
                from: origin,
                to: destination,
                emergency,
            },
        );

        if kind == TeleportKind::Ambush {
            if let Err(err) = self.melee(now, env) {
                tracing::debug!("ambush strike skipped: {err}");
            }
        }
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::events::{EncounterEvent, TeleportKind};
    use crate::math::Vec3;
    use crate::phase::Phase;
    use crate::testing::{Harness, calm_config};
    use crate::time::GameTime;
    use crate::timers::Cooldown;

    #[test]
    fn ambush_lands_behind_target_and_strikes() {
        // 0.1 passes the ambush roll; 0.0 picks the first attack clip.
        let mut h = Harness::new(calm_config(), [0.1, 0.0]);
        h.target.position = Vec3::new(0.0, 0.0, 10.0);
        h.target.forward = Vec3::FORWARD;
        h.force_phase(Phase::Two);

        let kind = h.run(|boss, env| boss.teleport(GameTime(1.0), env, false));

        assert_eq!(kind, Ok(TeleportKind::Ambush));
        assert_eq!(h.nav.position, Vec3::new(0.0, 0.0, 7.0));
        assert_eq!(h.boss.state().position, Vec3::new(0.0, 0.0, 7.0));
        let events = h.events();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, EncounterEvent::MeleeStarted { .. }))
        );
    }

    #[test]
    fn reposition_lands_on_ring_at_boss_height() {
        // 0.9 fails the ambush roll; angle 0, distance halfway along the ring.
        let mut h = Harness::new(calm_config(), [0.9, 0.0, 0.5]);
        h.nav.position = Vec3::new(3.0, 2.0, 0.0);
        h.target.position = Vec3::ZERO;
        h.force_phase(Phase::Two);
        h.sync();

        let kind = h.run(|boss, env| boss.teleport(GameTime(1.0), env, false));

        assert_eq!(kind, Ok(TeleportKind::Reposition));
        assert!(h.nav.position.distance(Vec3::new(12.5, 2.0, 0.0)) < 1e-4);
    }

    #[test]
    fn off_surface_teleport_aborts_without_moving() {
        let mut h = Harness::new(calm_config(), [0.1]);
        h.nav.navigable = false;
        h.nav.position = Vec3::new(20.0, 0.0, 0.0);
        h.force_phase(Phase::Two);
        h.sync();

        let result = h.run(|boss, env| boss.teleport(GameTime(1.0), env, false));

        assert!(result.is_err());
        assert_eq!(h.nav.position, Vec3::new(20.0, 0.0, 0.0));
        assert_eq!(h.nav.warps, 0);
        assert!(h.effects.spawned.is_empty());
        assert!(
            h.events()
                .iter()
                .any(|e| matches!(e, EncounterEvent::TeleportAborted { .. }))
        );
        // The attempt still costs the cooldown.
        let cooldowns = &h.boss.state().cooldowns;
        assert!(!cooldowns.is_ready(Cooldown::Teleport, GameTime(2.0)));
    }
}
