//! Simulation driver: owns the dispatcher and the statistics side-by-side.
//!
//! Keeps the dispatch engine free of bookkeeping concerns: every event that
//! leaves the dispatcher is folded into [`DispatchStats`] here before the
//! caller sees it.

use crate::config::Config;
use crate::core::dispatcher::{DispatchEvent, Dispatcher};
use crate::core::process::Process;
use crate::stats::DispatchStats;

/// Top-level simulation: dispatch engine plus statistics.
#[derive(Debug)]
pub struct Simulation {
    dispatcher: Dispatcher,
    stats: DispatchStats,
}

impl Simulation {
    /// Creates a simulation with the given processes queued in input order.
    pub fn new(config: &Config, processes: Vec<Process>) -> Self {
        let mut dispatcher = Dispatcher::new(config);
        for process in processes {
            dispatcher.enqueue(process);
        }
        Self {
            dispatcher,
            stats: DispatchStats::default(),
        }
    }

    /// Advances the simulation by one dispatch round.
    ///
    /// Returns `None` once every queue has drained.
    pub fn step(&mut self) -> Option<DispatchEvent> {
        let event = self.dispatcher.step()?;
        self.stats.record(&event);
        Some(event)
    }

    /// Drives the simulation to completion and returns the ordered event log.
    pub fn run(&mut self) -> Vec<DispatchEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step() {
            events.push(event);
        }
        events
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// The underlying dispatcher, for observation.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
