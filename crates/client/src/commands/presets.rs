use anyhow::Result;
use clap::Parser;
use encounter_content::{ConfigLoader, Preset};

/// List the bundled boss presets
#[derive(Parser, Debug)]
pub struct Presets {}

impl Presets {
    pub fn execute(self) -> Result<()> {
        for preset in Preset::ALL {
            let config = ConfigLoader::preset(preset)?;
            println!(
                "{:<12} {:>6.0} hp, phase 2 at {:.0}, phase 3 at {}",
                preset.name(),
                config.stats.max_health,
                config.phase2.health_threshold,
                if config.phase3_enabled() {
                    format!("{:.0}", config.phase3.health_threshold)
                } else {
                    "never".to_owned()
                }
            );
        }
        Ok(())
    }
}
