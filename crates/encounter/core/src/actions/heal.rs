use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::{EffectKind, EncounterEnv};
use crate::events::EncounterEvent;
use crate::scheduler::Continuation;
use crate::time::GameTime;
use crate::timers::Cooldown;

impl BossController {
    /// Restores health and flashes the heal tint. Returns the amount healed.
    pub(crate) fn heal(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) -> f32 {
        let healing = &self.config.healing;
        let (amount, flash_tint, flash_duration) =
            (healing.amount, healing.flash_tint, healing.flash_duration);
        self.state.cooldowns.consume(Cooldown::Heal, now, healing.cooldown);
        self.set_activity(ArbiterState::Healing);

        let healed = self.state.heal(amount);
        self.tint.flash(flash_tint);
        self.scheduler.schedule(now + flash_duration, Continuation::RestoreTint);
        env.spawn_effect(EffectKind::Heal, self.state.position);

        tracing::debug!(healed, health = self.state.health, "boss healed");
        self.events.push(
            now,
            EncounterEvent::Healed {
                amount: healed,
                health: self.state.health,
            },
        );
        healed
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Vec3;
    use crate::phase::Phase;
    use crate::testing::{Harness, calm_config};
    use crate::time::GameTime;
    use crate::timers::Cooldown;
    use crate::tint::Color;

    #[test]
    fn heal_is_clamped_and_flashes() {
        let mut h = Harness::new(calm_config(), []);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.force_phase(Phase::Three);
        h.boss.state.apply_damage(20.0);
        h.boss.state.cooldowns.delay_until(Cooldown::Teleport, GameTime(100.0));

        h.tick(0.0);
        assert_eq!(h.boss.health(), 1000.0);
        assert_eq!(h.effects.tints.last(), Some(&Color::GREEN));

        h.tick(0.4);
        assert_ne!(h.effects.tints.last(), Some(&Color::GREEN));
    }

    #[test]
    fn heal_is_locked_before_phase_three() {
        let mut h = Harness::new(calm_config(), []);
        h.target.position = Vec3::new(0.0, 0.0, 20.0);
        h.boss.state.apply_damage(20.0);
        h.tick(0.0);
        assert_eq!(h.boss.health(), 980.0);
    }
}
