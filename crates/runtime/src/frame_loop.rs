//! Real-time driver for a [`Simulation`].

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::api::DuelSummary;
use crate::events::{Event, EventBus};
use crate::simulation::Simulation;

/// Stops a running [`FrameLoop`] after its current frame.
#[derive(Clone, Debug)]
pub struct StopHandle {
    stop: watch::Sender<bool>,
}

impl StopHandle {
    pub fn stop(&self) {
        // The loop may already have finished; nothing to stop then.
        let _ = self.stop.send(true);
    }
}

/// Steps a simulation once per frame and publishes its events.
///
/// Paced loops wait on a [`tokio::time::interval`] between frames; unpaced
/// loops run as fast as possible, yielding to the scheduler every frame.
pub struct FrameLoop {
    simulation: Simulation,
    bus: EventBus,
    pace: Option<Duration>,
    stop_tx: watch::Sender<bool>,
    stop_rx: watch::Receiver<bool>,
}

impl FrameLoop {
    pub fn new(simulation: Simulation) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        Self {
            simulation,
            bus: EventBus::new(),
            pace: None,
            stop_tx,
            stop_rx,
        }
    }

    /// Publishes on `bus` instead of a private one.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    /// Waits `frame` between steps.
    pub fn paced(mut self, frame: Duration) -> Self {
        self.pace = Some(frame);
        self
    }

    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: self.stop_tx.clone(),
        }
    }

    /// Runs until the duel ends or a [`StopHandle`] fires.
    pub async fn run(mut self) -> DuelSummary {
        let mut ticker = self.pace.map(|frame| {
            let mut ticker = time::interval(frame);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        tracing::info!(pace = ?self.pace, "frame loop started");
        while !self.simulation.is_finished() {
            if *self.stop_rx.borrow() {
                tracing::info!(frame = self.simulation.frame(), "frame loop stopped");
                break;
            }
            match ticker.as_mut() {
                Some(ticker) => {
                    ticker.tick().await;
                }
                None => tokio::task::yield_now().await,
            }

            let records = self.simulation.step();
            let frame = self.simulation.frame();
            for record in records {
                self.bus.publish(Event { frame, record });
            }
        }

        let summary = self.simulation.summary();
        tracing::info!(
            outcome = %summary.outcome,
            elapsed = summary.elapsed,
            frames = summary.frames,
            "frame loop finished"
        );
        summary
    }
}
