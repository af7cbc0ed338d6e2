//! Dispatch statistics collection and reporting.
//!
//! This module tracks counters for a simulation run. It provides:
//! 1. **Round counts:** Total rounds and their outcomes (completed, requeued, rejected).
//! 2. **Splits:** Completions by process class, rejections by failed check.
//! 3. **Derived metrics:** Completion and rejection rates as methods.

use serde::Serialize;

use crate::core::dispatcher::{DispatchEvent, DispatchOutcome, RejectReason};

/// Counters accumulated over a simulation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchStats {
    /// Dispatch rounds executed.
    pub rounds: u64,
    /// Real-time processes completed.
    pub completed_realtime: u64,
    /// User processes completed.
    pub completed_user: u64,
    /// Rounds that ended in demotion and requeue.
    pub requeued: u64,
    /// Rejections caused by the device pool.
    pub rejected_devices: u64,
    /// Rejections caused by the memory arena.
    pub rejected_memory: u64,
    /// Processes discarded for good after a rejection.
    pub dropped: u64,
    /// Quanta consumed by user processes across all rounds.
    pub quanta_consumed: u64,
}

impl DispatchStats {
    /// Folds one dispatch event into the counters.
    pub fn record(&mut self, event: &DispatchEvent) {
        self.rounds += 1;
        match event.outcome {
            DispatchOutcome::Completed => {
                if event.process.priority.is_real_time() {
                    self.completed_realtime += 1;
                } else {
                    self.completed_user += 1;
                    self.quanta_consumed += 1;
                }
            }
            DispatchOutcome::Requeued { .. } => {
                self.requeued += 1;
                self.quanta_consumed += 1;
            }
            DispatchOutcome::Rejected { reason, dropped } => {
                match reason {
                    RejectReason::Devices => self.rejected_devices += 1,
                    RejectReason::Memory => self.rejected_memory += 1,
                }
                if dropped {
                    self.dropped += 1;
                }
            }
        }
    }

    /// Processes completed, of either class.
    pub fn completed(&self) -> u64 {
        self.completed_realtime + self.completed_user
    }

    /// Rounds rejected, for either reason.
    pub fn rejected(&self) -> u64 {
        self.rejected_devices + self.rejected_memory
    }

    /// Fraction of rounds that ended in rejection.
    pub fn rejection_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.rejected() as f64 / self.rounds as f64
        }
    }

    /// Fraction of finished processes that completed rather than being dropped.
    pub fn completion_rate(&self) -> f64 {
        let finished = self.completed() + self.dropped;
        if finished == 0 {
            0.0
        } else {
            self.completed() as f64 / finished as f64
        }
    }
}
