use crate::animation::Clip;
use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::{EncounterEnv, OracleError};
use crate::error::ActionError;
use crate::events::EncounterEvent;
use crate::scheduler::Continuation;
use crate::time::GameTime;
use crate::timers::Cooldown;

impl BossController {
    /// Starts a swing at the target. Damage lands after the strike delay.
    ///
    /// There is no range check here: the arbiter only picks melee in range,
    /// and the ambush teleport lands in range by construction.
    pub(crate) fn melee(
        &mut self,
        now: GameTime,
        env: &mut EncounterEnv<'_>,
    ) -> Result<Clip, ActionError> {
        if self.state.is_dead {
            return Err(ActionError::Dead);
        }
        let target = env.target_position().ok_or(OracleError::TargetNotAvailable)?;
        if !self.state.cooldowns.is_ready(Cooldown::Attack, now) {
            return Err(ActionError::OnCooldown(Cooldown::Attack));
        }
        if env.animation_ref().is_playing_any_of(&Clip::uninterruptible()) {
            return Err(ActionError::AnimationLocked);
        }

        let cooldown = self.state.profile.attack_cooldown;
        self.state.cooldowns.consume(Cooldown::Attack, now, cooldown);
        self.set_activity(ArbiterState::MeleeAttacking);

        let navigation = env.navigation();
        navigation.halt();
        navigation.face(self.state.position.heading_to(target));

        let clip = Clip::ATTACKS[self.rng.pick_index(Clip::ATTACKS.len())];
        env.animation().play_clip(clip);

        let melee = &self.config.melee;
        self.scheduler.schedule(now + melee.strike_delay, Continuation::MeleeStrike);
        self.scheduler.schedule(now + melee.recovery, Continuation::ResumeMovement);

        tracing::debug!(%clip, damage = self.state.profile.damage, "melee swing started");
        self.events.push(now, EncounterEvent::MeleeStarted { clip });
        Ok(clip)
    }

    /// Lands a pending swing if the target is still in range.
    pub(crate) fn resolve_strike(&mut self, now: GameTime, env: &mut EncounterEnv<'_>) {
        if self.state.is_dead {
            return;
        }
        let position = self.state.position;
        let damage = self.state.profile.damage;
        let range = self.config.stats.attack_range;

        let target = match env.target() {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!("melee strike dropped: {err}");
                return;
            }
        };
        let distance = position.distance(target.position());
        if distance <= range {
            target.receive_damage(damage);
            tracing::debug!(damage, distance, "melee strike landed");
            self.events.push(now, EncounterEvent::MeleeLanded { damage });
        } else {
            tracing::debug!(distance, range, "target left range before the strike");
            self.events.push(now, EncounterEvent::MeleeMissed { distance });
        }
    }
}
