//! Multilevel FIFO queue set.
//!
//! One FIFO per priority level: the real-time level plus a configured number of
//! user levels. Selection scans levels in ascending numeric order, so the
//! real-time queue always drains first. Within a level, order is strictly
//! arrival order; a demoted process re-enters at the tail of its new level,
//! never the head.

use std::collections::VecDeque;

use crate::core::process::{Priority, Process};

/// Ordered FIFO queues keyed by priority level.
#[derive(Debug)]
pub struct QueueSet {
    queues: Vec<VecDeque<Process>>,
}

impl QueueSet {
    /// Creates an empty queue set with the real-time level plus `user_levels` user levels.
    pub fn new(user_levels: u8) -> Self {
        Self {
            queues: (0..=user_levels).map(|_| VecDeque::new()).collect(),
        }
    }

    /// The lowest (least urgent) configured priority level.
    pub fn lowest_level(&self) -> Priority {
        debug_assert!(!self.queues.is_empty());
        Priority::new((self.queues.len() - 1) as u8)
    }

    /// Appends a process to the tail of the queue for its priority.
    ///
    /// The loader validates priorities against the configured level count, so a
    /// process with a level beyond the lowest queue is a caller bug.
    pub fn enqueue(&mut self, process: Process) {
        let level = usize::from(process.priority.level());
        assert!(
            level < self.queues.len(),
            "no queue for priority level {level}"
        );
        self.queues[level].push_back(process);
    }

    /// Removes and returns the head of the highest-priority non-empty queue.
    ///
    /// Levels are scanned in ascending numeric order; `None` means every queue
    /// is empty.
    pub fn select_next(&mut self) -> Option<Process> {
        self.queues.iter_mut().find_map(VecDeque::pop_front)
    }

    /// Total processes currently queued across all levels.
    pub fn len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// Whether every queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }
}
