use crate::animation::Clip;

/// Clip playback for the boss model.
pub trait AnimationOracle {
    /// Crossfades into `clip`. Replaying the clip that is already playing
    /// is a no-op.
    fn play_clip(&mut self, clip: Clip);

    fn is_playing_any_of(&self, clips: &[Clip]) -> bool;

    fn current_clip(&self) -> Option<Clip> {
        None
    }
}
