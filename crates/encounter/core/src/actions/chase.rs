use crate::animation::Clip;
use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::{EncounterEnv, OracleError};
use crate::error::ActionError;
use crate::events::EncounterEvent;
use crate::movement::MovementPattern;
use crate::time::GameTime;
use crate::timers::Cooldown;

impl BossController {
    /// Moves with the current pattern, re-rolling it when the pattern
    /// cooldown allows.
    pub(crate) fn chase(
        &mut self,
        now: GameTime,
        env: &mut EncounterEnv<'_>,
    ) -> Result<(), ActionError> {
        let target = env.target_position().ok_or(OracleError::TargetNotAvailable)?;

        if self.state.cooldowns.is_ready(Cooldown::PatternChange, now) {
            let interval = self.config.movement.pattern_interval;
            self.state.cooldowns.consume(Cooldown::PatternChange, now, interval);

            let pattern =
                MovementPattern::select(self.rng.as_mut(), self.state.phase, &self.config.movement);
            if pattern != self.state.pattern {
                tracing::debug!(
                    from = %self.state.pattern,
                    to = %pattern,
                    "movement pattern changed"
                );
                self.events.push(now, EncounterEvent::PatternChanged { pattern });
            }
            self.state.pattern = pattern;
            self.state.destination = None;
        }

        let pattern = self.state.pattern;
        self.set_activity(ArbiterState::Chasing(pattern));
        if env.animation_ref().is_playing_any_of(&Clip::uninterruptible()) {
            return Err(ActionError::AnimationLocked);
        }

        let destination = match self.state.destination {
            Some(fixed) if !pattern.tracks_target() => fixed,
            _ => pattern.destination(self.state.position, target, &self.config.movement),
        };
        self.state.destination = Some(destination);

        let navigation = env.navigation();
        navigation.set_speed(pattern.speed(&self.state.profile.speeds));
        navigation.set_destination(destination);
        env.animation().play_clip(pattern.clip());
        Ok(())
    }

    /// Target out of chase range: stand still and drop back to approaching.
    pub(crate) fn idle(&mut self, env: &mut EncounterEnv<'_>) {
        self.set_activity(ArbiterState::Idle);
        self.state.pattern = MovementPattern::Approach;
        self.state.destination = None;
        if !env.animation_ref().is_playing_any_of(&Clip::uninterruptible()) {
            env.animation().play_clip(Clip::Idle1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::Clip;
    use crate::math::Vec3;
    use crate::movement::MovementPattern;
    use crate::phase::Phase;
    use crate::testing::{Harness, calm_config};
    use crate::time::GameTime;
    use crate::timers::Cooldown;

    #[test]
    fn approach_follows_the_target_at_run_speed() {
        let mut h = Harness::new(calm_config(), [0.9]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);

        h.tick(0.0);
        assert_eq!(h.nav.destination, Some(Vec3::new(0.0, 0.0, 20.0)));
        assert_eq!(h.nav.speed, 4.0);
        assert_eq!(h.anim.current, Some(Clip::Run));

        h.target.position = Vec3::new(5.0, 0.0, 20.0);
        h.tick(0.1);
        assert_eq!(h.nav.destination, Some(Vec3::new(5.0, 0.0, 20.0)));
    }

    #[test]
    fn strafe_keeps_its_point_until_the_next_roll() {
        // 0.1 strafes, 0.2 picks the left side; later rolls approach.
        let mut h = Harness::new(calm_config(), [0.1, 0.2]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);

        h.tick(0.0);
        assert_eq!(h.boss.state().pattern, MovementPattern::StrafeLeft);
        assert_eq!(h.nav.destination, Some(Vec3::new(-5.0, 0.0, 0.0)));
        assert_eq!(h.nav.speed, 3.0);

        h.nav.position = Vec3::new(-1.0, 0.0, 0.0);
        h.tick(1.0);
        assert_eq!(h.nav.destination, Some(Vec3::new(-5.0, 0.0, 0.0)));

        h.tick(2.0);
        assert_eq!(h.boss.state().pattern, MovementPattern::Approach);
    }

    #[test]
    fn phase_two_speeds_apply_to_patterns() {
        let mut h = Harness::new(calm_config(), [0.9]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.force_phase(Phase::Two);
        h.boss.state.cooldowns.delay_until(Cooldown::Teleport, GameTime(100.0));

        h.tick(0.0);
        assert_eq!(h.nav.speed, 6.0);
    }

    #[test]
    fn movement_waits_for_uninterruptible_clips() {
        let mut h = Harness::new(calm_config(), [0.9]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.anim.current = Some(Clip::Rage);

        h.tick(0.0);
        assert_eq!(h.nav.destination, None);
        assert_eq!(h.anim.current, Some(Clip::Rage));
    }

    #[test]
    fn far_target_idles_and_resets_pattern() {
        let mut h = Harness::new(calm_config(), [0.1, 0.2]);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.tick(0.0);
        assert_eq!(h.boss.state().pattern, MovementPattern::StrafeLeft);

        h.target.position = Vec3::new(0.0, 0.0, 50.0);
        h.tick(0.5);
        assert_eq!(h.boss.state().pattern, MovementPattern::Approach);
        assert_eq!(h.anim.current, Some(Clip::Idle1));
    }
}
