//! Per-round dispatch state machine.
//!
//! The dispatcher owns the queue set, the memory arena, and the device pool as
//! one explicit context object, and advances one round at a time:
//! 1. **Select:** Pop the head of the highest-priority non-empty queue.
//! 2. **Admit:** Acquire devices, then memory. Either failure rejects the
//!    round; devices acquired before a memory failure are returned first.
//! 3. **Execute:** Real-time processes complete outright; user processes burn
//!    one quantum and either complete or demote one level and requeue.
//! 4. **Release:** Whatever was held for the round is released before the next
//!    round begins. Nothing is ever held across rounds.
//!
//! Each round emits exactly one [`DispatchEvent`]; rendering is the caller's
//! concern.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::{Config, RejectionPolicy};
use crate::core::devices::DevicePool;
use crate::core::memory::MemoryArena;
use crate::core::process::{DeviceCounts, Priority, Process};
use crate::core::queue::QueueSet;

/// Which admission check turned a process away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// The device pool could not cover the request.
    Devices,
    /// No qualifying free memory block existed.
    Memory,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Devices => write!(f, "devices"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// What happened to the selected process this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DispatchOutcome {
    /// The process finished and leaves the system.
    Completed,
    /// An unfinished user process was demoted and re-entered the queue set.
    Requeued {
        /// Level the process was requeued at.
        new_priority: Priority,
    },
    /// Admission failed; the process did not execute this round.
    Rejected {
        /// Which check failed.
        reason: RejectReason,
        /// Whether the rejection policy discarded the process for good.
        dropped: bool,
    },
}

/// One dispatch round: the process as selected, and what became of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchEvent {
    /// One-based round counter.
    pub round: u64,
    /// Snapshot of the process at selection time, before any mutation.
    pub process: Process,
    /// Outcome of the round.
    pub outcome: DispatchOutcome,
}

/// The dispatch engine: queues, arena, pool, and scheduling parameters.
#[derive(Debug)]
pub struct Dispatcher {
    queues: QueueSet,
    arena: MemoryArena,
    pool: DevicePool,
    quantum: u64,
    lowest: Priority,
    rejection: RejectionPolicy,
    round: u64,
}

impl Dispatcher {
    /// Creates an idle dispatcher from a validated configuration.
    pub fn new(config: &Config) -> Self {
        let queues = QueueSet::new(config.scheduler.user_levels);
        let lowest = queues.lowest_level();
        Self {
            queues,
            arena: MemoryArena::new(config.memory.capacity, config.memory.realtime_reserved),
            pool: DevicePool::new(DeviceCounts::new(
                config.devices.printers,
                config.devices.scanners,
                config.devices.modems,
                config.devices.cd_drives,
            )),
            quantum: config.scheduler.quantum,
            lowest,
            rejection: config.scheduler.rejection,
            round: 0,
        }
    }

    /// Appends a process to the tail of its priority's queue.
    pub fn enqueue(&mut self, process: Process) {
        self.queues.enqueue(process);
    }

    /// Processes still waiting in the queue set.
    pub fn pending(&self) -> usize {
        self.queues.len()
    }

    /// The memory arena, for observation.
    pub fn arena(&self) -> &MemoryArena {
        &self.arena
    }

    /// The device pool, for observation.
    pub fn pool(&self) -> &DevicePool {
        &self.pool
    }

    /// Runs one dispatch round.
    ///
    /// Returns `None` once every queue is empty, the terminal state. Each
    /// `Some` carries the round's event record.
    pub fn step(&mut self) -> Option<DispatchEvent> {
        let process = self.queues.select_next()?;
        self.round += 1;
        let round = self.round;
        let snapshot = process;
        debug!(round, priority = %process.priority, remaining = process.remaining_time, "selected process");

        // Admission: devices first, then memory.
        if !self.pool.try_acquire(process.devices) {
            return Some(self.reject(round, snapshot, RejectReason::Devices));
        }
        let Some(region) = self
            .arena
            .try_allocate(process.memory, process.priority.is_real_time())
        else {
            self.pool.release(process.devices);
            return Some(self.reject(round, snapshot, RejectReason::Memory));
        };

        let outcome = self.execute(process);
        debug!(round, ?outcome, "round finished");

        // Holds last exactly one execution attempt.
        self.arena.release(region);
        self.pool.release(process.devices);

        Some(DispatchEvent {
            round,
            process: snapshot,
            outcome,
        })
    }

    /// Drives rounds until the queue set drains, collecting every event.
    pub fn run(&mut self) -> Vec<DispatchEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step() {
            events.push(event);
        }
        events
    }

    fn execute(&mut self, mut process: Process) -> DispatchOutcome {
        if process.priority.is_real_time() {
            // Real-time work runs to completion in its one and only round.
            return DispatchOutcome::Completed;
        }

        process.remaining_time = process.remaining_time.saturating_sub(self.quantum);
        if process.remaining_time == 0 {
            return DispatchOutcome::Completed;
        }

        let new_priority = process.priority.demoted(self.lowest);
        process.priority = new_priority;
        self.queues.enqueue(process);
        DispatchOutcome::Requeued { new_priority }
    }

    fn reject(&mut self, round: u64, snapshot: Process, reason: RejectReason) -> DispatchEvent {
        let dropped = match self.rejection {
            RejectionPolicy::Drop => true,
            RejectionPolicy::Requeue { max_attempts } => {
                let mut process = snapshot;
                process.rejections += 1;
                if process.rejections < max_attempts {
                    self.queues.enqueue(process);
                    false
                } else {
                    true
                }
            }
        };
        debug!(round, %reason, dropped, "admission rejected");
        DispatchEvent {
            round,
            process: snapshot,
            outcome: DispatchOutcome::Rejected { reason, dropped },
        }
    }
}
