use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::{DuelScenario, FrameLoop, Topic};
use tokio::sync::broadcast::error::RecvError;

use super::load_boss;

/// Simulate a duel between the boss and a scripted player
#[derive(Parser, Debug)]
pub struct Duel {
    /// Boss config file (.toml or .ron)
    #[arg(long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Bundled boss preset
    #[arg(long, default_value = "final_boss")]
    pub preset: String,

    /// Scenario file (.ron or .json); defaults to the built-in arena
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Seed for the boss's rolls; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the scenario's time limit in seconds
    #[arg(long)]
    pub time_limit: Option<f32>,

    /// Pace frames in real time instead of running flat out
    #[arg(long)]
    pub realtime: bool,

    /// Frames per second when pacing
    #[arg(long, default_value_t = 60, requires = "realtime")]
    pub fps: u32,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Log every phase and lifecycle event as it happens
    #[arg(long, short)]
    pub verbose: bool,
}

impl Duel {
    pub async fn execute(self) -> Result<()> {
        let config = load_boss(self.config.as_ref(), &self.preset)?;

        let mut scenario = match &self.scenario {
            Some(path) => DuelScenario::load(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None => DuelScenario::default(),
        };
        scenario = scenario.with_seed(self.seed.unwrap_or_else(rand::random));
        if let Some(limit) = self.time_limit {
            scenario.time_limit = limit;
        }

        let simulation = scenario.build(config).context("building duel")?;
        let mut frame_loop = FrameLoop::new(simulation);
        if self.realtime {
            anyhow::ensure!(self.fps > 0, "--fps must be positive");
            frame_loop = frame_loop.paced(Duration::from_secs_f64(1.0 / f64::from(self.fps)));
        }

        if self.verbose {
            for (topic, mut rx) in frame_loop
                .bus()
                .subscribe_multiple(&[Topic::Phase, Topic::Lifecycle])
            {
                tokio::spawn(async move {
                    loop {
                        match rx.recv().await {
                            Ok(event) => tracing::info!(
                                ?topic,
                                frame = event.frame,
                                at = %event.record.at,
                                event = ?event.record.event,
                                "encounter event"
                            ),
                            Err(RecvError::Lagged(skipped)) => {
                                tracing::warn!(?topic, skipped, "event log fell behind");
                            }
                            Err(RecvError::Closed) => break,
                        }
                    }
                });
            }
        }

        let stop = frame_loop.stop_handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted, stopping duel");
                stop.stop();
            }
        });

        let summary = frame_loop.run().await;

        if self.json {
            println!("{}", summary.to_json()?);
        } else {
            println!("{summary}");
        }
        Ok(())
    }
}
