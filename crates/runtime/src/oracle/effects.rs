use encounter_core::{Color, EffectKind, EffectsOracle, GameTime, Vec3};

/// One spawned effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectEntry {
    pub kind: EffectKind,
    pub position: Vec3,
    pub at: GameTime,
}

/// Records effects instead of rendering them.
#[derive(Clone, Debug)]
pub struct EffectLog {
    entries: Vec<EffectEntry>,
    base: Color,
    tint: Color,
    tint_writes: usize,
    now: GameTime,
}

impl EffectLog {
    pub fn new(base: Color) -> Self {
        Self {
            entries: Vec::new(),
            base,
            tint: base,
            tint_writes: 0,
            now: GameTime::ZERO,
        }
    }

    /// Stamps entries spawned from now on.
    pub fn set_time(&mut self, now: GameTime) {
        self.now = now;
    }

    pub fn entries(&self) -> &[EffectEntry] {
        &self.entries
    }

    pub fn count(&self, kind: EffectKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn tint_writes(&self) -> usize {
        self.tint_writes
    }
}

impl Default for EffectLog {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl EffectsOracle for EffectLog {
    fn spawn_effect(&mut self, kind: EffectKind, position: Vec3) {
        self.entries.push(EffectEntry {
            kind,
            position,
            at: self.now,
        });
    }

    fn set_tint(&mut self, color: Color) {
        self.tint = color;
        self.tint_writes += 1;
    }

    fn base_tint(&self) -> Color {
        self.base
    }
}
