use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::{EffectKind, EncounterEnv};
use crate::error::ActionError;
use crate::events::EncounterEvent;
use crate::scheduler::Continuation;
use crate::time::GameTime;
use crate::timers::Cooldown;

impl BossController {
    /// Ground slam around the boss.
    ///
    /// Returns whether the target was inside the splash radius.
    pub(crate) fn area_attack(
        &mut self,
        now: GameTime,
        env: &mut EncounterEnv<'_>,
    ) -> Result<bool, ActionError> {
        if self.state.is_dead {
            return Err(ActionError::Dead);
        }
        let shockwave = &self.config.shockwave;
        let (radius, damage, recovery) = (shockwave.radius, shockwave.damage, shockwave.recovery);
        self.state.cooldowns.consume(Cooldown::Shockwave, now, shockwave.cooldown);
        self.set_activity(ArbiterState::AreaAttacking);

        let center = self.state.position;
        env.spawn_effect(EffectKind::Shockwave, center);
        env.navigation().halt();
        self.scheduler.schedule(now + recovery, Continuation::ResumeMovement);

        let hit = match env.target() {
            Ok(target) if target.position().distance(center) <= radius => {
                target.receive_damage(damage);
                true
            }
            Ok(_) => false,
            Err(err) => {
                tracing::warn!("shockwave has nothing to hit: {err}");
                false
            }
        };

        tracing::debug!(hit, damage, radius, "shockwave");
        self.events.push(now, EncounterEvent::AreaAttack { hit, damage });
        Ok(hit)
    }
}
