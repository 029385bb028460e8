//! In-memory collaborators for headless encounters.
//!
//! Each type implements one of the oracle traits from
//! [`encounter_core::env`] without an engine behind it. [`OracleBundle`]
//! owns one of each and lends them out as an [`EncounterEnv`] per call.
mod clips;
mod director;
mod dummy;
mod effects;
mod navigator;

pub use clips::{ClipPlayer, clip_length};
pub use director::SceneDirector;
pub use dummy::{PlayerSpec, TrainingDummy};
pub use effects::{EffectEntry, EffectLog};
pub use navigator::{Arena, ArenaNavigator};

use encounter_core::EncounterEnv;

/// Every collaborator the boss talks to.
#[derive(Clone, Debug)]
pub struct OracleBundle {
    pub navigator: ArenaNavigator,
    pub clips: ClipPlayer,
    pub effects: EffectLog,
    pub player: TrainingDummy,
    pub director: SceneDirector,
}

impl OracleBundle {
    pub fn env(&mut self) -> EncounterEnv<'_> {
        EncounterEnv::new(&mut self.navigator, &mut self.clips)
            .with_effects(&mut self.effects)
            .with_target(&mut self.player)
            .with_progression(&mut self.director)
    }

    /// Advances the collaborators that move on their own.
    pub fn step(&mut self, dt: f32) {
        self.navigator.step(dt);
        self.clips.step(dt);
    }
}
