//! Process entity and its request descriptors.

use std::fmt;

use serde::Serialize;

/// Scheduling priority level.
///
/// Level 0 is real-time; levels `1..=lowest` are user levels in descending
/// precedence. Lower numeric level means earlier selection. The number of user
/// levels is configuration, so the type carries a raw level rather than a
/// closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    /// The real-time level.
    pub const REAL_TIME: Self = Self(0);

    /// Creates a priority from a raw level number.
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Raw level number (0 = real-time).
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Whether this is the real-time level.
    pub const fn is_real_time(self) -> bool {
        self.0 == 0
    }

    /// One level lower in precedence, saturating at `lowest`.
    ///
    /// A process already at the lowest level stays there; demotion never wraps.
    pub fn demoted(self, lowest: Self) -> Self {
        if self.0 >= lowest.0 { lowest } else { Self(self.0 + 1) }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real_time() {
            write!(f, "RT")
        } else {
            write!(f, "U{}", self.0)
        }
    }
}

/// Counts of the four peripheral device types.
///
/// Used both as a process's request and as the pool's capacity/availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeviceCounts {
    /// Printers.
    pub printers: u32,
    /// Scanners.
    pub scanners: u32,
    /// Modems.
    pub modems: u32,
    /// CD drives.
    pub cd_drives: u32,
}

impl DeviceCounts {
    /// A request for no devices at all.
    pub const NONE: Self = Self::new(0, 0, 0, 0);

    /// Creates a set of device counts.
    pub const fn new(printers: u32, scanners: u32, modems: u32, cd_drives: u32) -> Self {
        Self {
            printers,
            scanners,
            modems,
            cd_drives,
        }
    }

    /// Whether every counter in `self` is covered by the matching counter in `other`.
    pub const fn fits_within(self, other: Self) -> bool {
        self.printers <= other.printers
            && self.scanners <= other.scanners
            && self.modems <= other.modems
            && self.cd_drives <= other.cd_drives
    }

    /// Component-wise sum.
    pub const fn plus(self, other: Self) -> Self {
        Self::new(
            self.printers + other.printers,
            self.scanners + other.scanners,
            self.modems + other.modems,
            self.cd_drives + other.cd_drives,
        )
    }

    /// Component-wise difference. Callers check [`fits_within`](Self::fits_within) first.
    pub const fn minus(self, other: Self) -> Self {
        Self::new(
            self.printers - other.printers,
            self.scanners - other.scanners,
            self.modems - other.modems,
            self.cd_drives - other.cd_drives,
        )
    }
}

/// A simulated process descriptor.
///
/// Pure value entity: created by the loader from one input record, mutated by
/// the dispatcher (quantum decrement, demotion) while it remains unfinished,
/// and dropped on completion or rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Arrival time from the input record. Informational only; all processes
    /// are enqueued before the dispatch loop starts.
    pub arrival_time: u64,
    /// Current priority level; doubles as the active queue selector.
    pub priority: Priority,
    /// Processor time still owed. A user process terminates when this reaches zero.
    pub remaining_time: u64,
    /// Memory units requested for each execution attempt.
    pub memory: u64,
    /// Peripheral devices requested for each execution attempt.
    pub devices: DeviceCounts,
    /// Admission failures so far; only advances under the requeue rejection policy.
    pub rejections: u32,
}

impl Process {
    /// Creates a process from the fields of one dispatch-list record.
    pub const fn new(
        arrival_time: u64,
        priority: Priority,
        processor_time: u64,
        memory: u64,
        devices: DeviceCounts,
    ) -> Self {
        Self {
            arrival_time,
            priority,
            remaining_time: processor_time,
            memory,
            devices,
            rejections: 0,
        }
    }
}
