use encounter_core::{AnimationOracle, Clip};

/// Length in seconds of a one-shot clip; `None` for clips that loop or
/// hold their last frame.
pub fn clip_length(clip: Clip) -> Option<f32> {
    match clip {
        Clip::Attack1 | Clip::Attack2 => Some(1.0),
        Clip::Attack3 | Clip::Attack4 => Some(1.2),
        Clip::GetHit1 | Clip::GetHit2 | Clip::GetHit3 => Some(0.6),
        Clip::Rage => Some(1.5),
        Clip::Death1 | Clip::Death2 | Clip::Death3 => None,
        Clip::Run | Clip::Idle1 | Clip::WalkBack | Clip::StrafeLeft | Clip::StrafeRight => None,
    }
}

/// Animator stand-in: one clip at a time, one-shots fall back to idle.
#[derive(Clone, Debug, Default)]
pub struct ClipPlayer {
    current: Option<Clip>,
    elapsed: f32,
    started: usize,
}

impl ClipPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, dt: f32) {
        let Some(clip) = self.current else {
            return;
        };
        self.elapsed += dt;
        if let Some(length) = clip_length(clip)
            && self.elapsed >= length
        {
            tracing::trace!(%clip, "clip finished");
            self.current = Some(Clip::Idle1);
            self.elapsed = 0.0;
        }
    }

    /// Number of clip starts so far; replaying the current clip does not count.
    pub fn started(&self) -> usize {
        self.started
    }
}

impl AnimationOracle for ClipPlayer {
    fn play_clip(&mut self, clip: Clip) {
        if self.current == Some(clip) {
            return;
        }
        self.current = Some(clip);
        self.elapsed = 0.0;
        self.started += 1;
    }

    fn is_playing_any_of(&self, clips: &[Clip]) -> bool {
        self.current.is_some_and(|clip| clips.contains(&clip))
    }

    fn current_clip(&self) -> Option<Clip> {
        self.current
    }
}
