//! Command implementations.
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic.

mod check;
mod duel;
mod presets;

pub use check::CheckConfig;
pub use duel::Duel;
pub use presets::Presets;

use std::path::PathBuf;

use anyhow::{Context, Result};
use encounter_content::{ConfigLoader, Preset};
use encounter_core::BossConfig;

/// Loads a config file if one was given, otherwise the named preset.
pub(crate) fn load_boss(config: Option<&PathBuf>, preset: &str) -> Result<BossConfig> {
    match config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading boss config {}", path.display())),
        None => {
            let preset = Preset::from_name(preset).with_context(|| {
                let known: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset {preset:?} (known: {})", known.join(", "))
            })?;
            ConfigLoader::preset(preset)
        }
    }
}
