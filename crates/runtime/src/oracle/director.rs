use encounter_core::ProgressionOracle;

/// Level progression stand-in that remembers what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct SceneDirector {
    encounters_ended: u32,
    requested: Vec<String>,
}

impl SceneDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encounters_ended(&self) -> u32 {
        self.encounters_ended
    }

    /// Scenes requested so far, oldest first.
    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

impl ProgressionOracle for SceneDirector {
    fn encounter_ended(&mut self) {
        self.encounters_ended += 1;
        tracing::info!("encounter ended");
    }

    fn request_scene(&mut self, scene: &str) {
        tracing::info!(scene, "scene requested");
        self.requested.push(scene.to_owned());
    }
}
