use crate::animation::Clip;
use crate::arbiter::ArbiterState;
use crate::controller::BossController;
use crate::env::EncounterEnv;
use crate::events::EncounterEvent;
use crate::phase::Phase;
use crate::time::GameTime;
use crate::timers::Cooldown;
use crate::tint::TintPulse;

impl BossController {
    /// Runs a one-shot phase transition.
    ///
    /// Returns `false` if the transition had already run.
    pub(crate) fn enter_phase(
        &mut self,
        phase: Phase,
        now: GameTime,
        env: &mut EncounterEnv<'_>,
    ) -> bool {
        let from = self.state.phase;
        let old_multiplier = self.state.profile.speed_multiplier;
        if !self.state.enter_phase(phase, &self.config) {
            return false;
        }
        self.set_activity(ArbiterState::Transitioning);

        let profile = self.state.profile.clone();
        tracing::info!(
            %from,
            to = %phase,
            health = self.state.health,
            damage = profile.damage,
            "boss entered {phase}"
        );
        self.events.push(now, EncounterEvent::PhaseChanged { from, to: phase });

        // Pattern speeds come from the profile; only the agent's live speed
        // carries over from the previous phase.
        let navigation = env.navigation();
        let live_speed = navigation.speed();
        navigation.set_speed(live_speed * profile.speed_multiplier / old_multiplier);

        env.animation().play_clip(Clip::Rage);

        if let Some(target_tint) = profile.tint {
            let from_tint = self.tint.current().unwrap_or_else(|| self.base_tint(env));
            self.tint.start_pulse(TintPulse::new(
                from_tint,
                target_tint,
                now,
                &self.config.pulse,
            ));
        }

        match phase {
            Phase::One => {}
            Phase::Two => {
                let first = self.config.teleport.cooldown * self.config.teleport.first_delay_scale;
                self.state.cooldowns.delay_until(Cooldown::Teleport, now + first);

                if self.config.shockwave.on_phase_two && self.config.shockwave.enabled {
                    if let Err(err) = self.area_attack(now, env) {
                        tracing::debug!("phase 2 shockwave skipped: {err}");
                    }
                    self.set_activity(ArbiterState::Transitioning);
                }
            }
            Phase::Three => {
                // A shorter phase-3 cooldown also shortens the wait already
                // running.
                let cap = now + profile.teleport_cooldown;
                if self.state.cooldowns.next_allowed(Cooldown::Teleport) > cap {
                    self.state.cooldowns.delay_until(Cooldown::Teleport, cap);
                }
            }
        }
        true
    }
}
