//! Traits describing the collaborators the boss drives.
//!
//! The boss owns none of them: navigation, animation, effects, the target
//! and level progression are all reached through these oracles. The
//! [`EncounterEnv`] aggregate bundles them for one call into the controller.
//! Navigation and animation belong to the boss entity itself and are always
//! present; the rest may be missing and every use checks first.
mod animation;
mod effects;
mod error;
mod navigation;
mod progression;
mod target;

pub use animation::AnimationOracle;
pub use effects::{EffectKind, EffectsOracle};
pub use error::OracleError;
pub use navigation::NavigationOracle;
pub use progression::ProgressionOracle;
pub use target::TargetOracle;

use crate::math::Vec3;

/// Mutable access to every collaborator for the duration of one call.
pub struct EncounterEnv<'a> {
    navigation: &'a mut dyn NavigationOracle,
    animation: &'a mut dyn AnimationOracle,
    effects: Option<&'a mut dyn EffectsOracle>,
    target: Option<&'a mut dyn TargetOracle>,
    progression: Option<&'a mut dyn ProgressionOracle>,
}

impl<'a> EncounterEnv<'a> {
    pub fn new(
        navigation: &'a mut dyn NavigationOracle,
        animation: &'a mut dyn AnimationOracle,
    ) -> Self {
        Self {
            navigation,
            animation,
            effects: None,
            target: None,
            progression: None,
        }
    }

    pub fn with_effects(mut self, effects: &'a mut dyn EffectsOracle) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn with_target(mut self, target: &'a mut dyn TargetOracle) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_progression(mut self, progression: &'a mut dyn ProgressionOracle) -> Self {
        self.progression = Some(progression);
        self
    }

    pub fn navigation(&mut self) -> &mut dyn NavigationOracle {
        &mut *self.navigation
    }

    pub fn navigation_ref(&self) -> &dyn NavigationOracle {
        &*self.navigation
    }

    pub fn animation(&mut self) -> &mut dyn AnimationOracle {
        &mut *self.animation
    }

    pub fn animation_ref(&self) -> &dyn AnimationOracle {
        &*self.animation
    }

    /// Returns the target, or an error if the encounter has none.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TargetNotAvailable` if no target was provided.
    pub fn target(&mut self) -> Result<&mut dyn TargetOracle, OracleError> {
        match self.target.as_mut() {
            Some(target) => Ok(&mut **target),
            None => Err(OracleError::TargetNotAvailable),
        }
    }

    pub fn target_ref(&self) -> Option<&dyn TargetOracle> {
        self.target.as_deref().map(|target| target as _)
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Current target position, if a target exists.
    pub fn target_position(&self) -> Option<Vec3> {
        self.target_ref().map(|target| target.position())
    }

    /// Returns the effects renderer.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EffectsNotAvailable` if no renderer was provided.
    pub fn effects(&mut self) -> Result<&mut dyn EffectsOracle, OracleError> {
        match self.effects.as_mut() {
            Some(effects) => Ok(&mut **effects),
            None => Err(OracleError::EffectsNotAvailable),
        }
    }

    pub fn effects_ref(&self) -> Option<&dyn EffectsOracle> {
        self.effects.as_deref().map(|effects| effects as _)
    }

    /// Returns the progression collaborator.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ProgressionNotAvailable` if none was provided.
    pub fn progression(&mut self) -> Result<&mut dyn ProgressionOracle, OracleError> {
        match self.progression.as_mut() {
            Some(progression) => Ok(&mut **progression),
            None => Err(OracleError::ProgressionNotAvailable),
        }
    }

    /// Spawns an effect, logging instead of failing when no renderer exists.
    pub fn spawn_effect(&mut self, kind: EffectKind, position: Vec3) {
        match self.effects() {
            Ok(effects) => effects.spawn_effect(kind, position),
            Err(err) => tracing::debug!("skipping {kind} effect: {err}"),
        }
    }
}
