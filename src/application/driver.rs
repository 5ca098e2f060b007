//! The refresh loop: render, step, pause, until told to stop.

use super::Simulation;
use crate::rendering::{FrameSink, Glyphs, render_frame};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Default pause between generations
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Shared stop flag. Clones observe the same signal.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverOptions {
    pub interval: Duration,
    /// Stop after this many steps; `None` runs until cancelled
    pub max_generations: Option<u64>,
    pub glyphs: Glyphs,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            max_generations: None,
            glyphs: Glyphs::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_advanced: u64,
    pub final_generation: u64,
    pub final_population: usize,
}

pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    fn draw(&self, simulation: &Simulation, sink: &mut dyn FrameSink) -> io::Result<()> {
        sink.show(&render_frame(simulation.current(), &self.options.glyphs))
    }

    fn limit_reached(&self, advanced: u64) -> bool {
        self.options.max_generations.is_some_and(|max| advanced >= max)
    }

    /// Show the current generation, then step and redraw until `cancel` fires
    /// or the generation limit is hit. With neither, this never returns.
    pub fn run(
        &self,
        simulation: &mut Simulation,
        sink: &mut dyn FrameSink,
        cancel: &CancelToken,
    ) -> io::Result<RunSummary> {
        info!(
            interval_ms = self.options.interval.as_millis() as u64,
            max_generations = ?self.options.max_generations,
            "starting simulation loop"
        );
        self.draw(simulation, sink)?;

        let mut advanced = 0u64;
        while !cancel.is_cancelled() && !self.limit_reached(advanced) {
            let generation = simulation.step();
            debug!(generation = generation.number(), "advanced");
            advanced += 1;
            self.draw(simulation, sink)?;
            if !self.options.interval.is_zero() {
                thread::sleep(self.options.interval);
            }
        }

        let current = simulation.current();
        let summary = RunSummary {
            generations_advanced: advanced,
            final_generation: current.number(),
            final_population: current.grid().population(),
        };
        info!(?summary, cancelled = cancel.is_cancelled(), "simulation loop stopped");
        Ok(summary)
    }
}
