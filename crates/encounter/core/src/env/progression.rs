/// Level progression and scene loading.
pub trait ProgressionOracle {
    /// The boss died; the encounter is over.
    fn encounter_ended(&mut self);

    fn request_scene(&mut self, scene: &str);
}
