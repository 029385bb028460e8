use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use encounter_core::{Phase, PhaseProfile};

use super::load_boss;

/// Validate a boss config file and print its phase table
#[derive(Parser, Debug)]
pub struct CheckConfig {
    /// Config file (.toml or .ron); defaults to the preset
    pub config: Option<PathBuf>,

    /// Bundled preset used when no file is given
    #[arg(long, default_value = "final_boss")]
    pub preset: String,
}

impl CheckConfig {
    pub fn execute(self) -> Result<()> {
        let config = load_boss(self.config.as_ref(), &self.preset)?;

        println!(
            "{:<8} {:>10} {:>8} {:>8} {:>8} {:>10} {:>10}",
            "phase", "threshold", "damage", "run", "dodge", "attack cd", "teleport cd"
        );
        for phase in [Phase::One, Phase::Two, Phase::Three] {
            if phase == Phase::Three && !config.phase3_enabled() {
                println!("{:<8} disabled", phase.number());
                continue;
            }
            let profile = PhaseProfile::for_phase(phase, &config);
            let threshold = match phase {
                Phase::One => config.stats.max_health,
                _ => config.tuning(phase).health_threshold,
            };
            println!(
                "{:<8} {:>10.0} {:>8.1} {:>8.2} {:>8.2} {:>10.2} {:>10.2}",
                phase.number(),
                threshold,
                profile.damage,
                profile.speeds.run,
                profile.dodge_chance,
                profile.attack_cooldown,
                profile.teleport_cooldown
            );
        }
        println!("config ok");
        Ok(())
    }
}
