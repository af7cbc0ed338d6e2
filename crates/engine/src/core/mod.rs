//! Scheduling and resource-allocation engine.
//!
//! This module owns the parts of the simulator with real invariants:
//! 1. **Process:** The value entity moved between queues and the dispatcher.
//! 2. **Queues:** One FIFO per priority level, scanned in fixed priority order.
//! 3. **Memory:** Best-fit arena with a reserved real-time suffix and exact release.
//! 4. **Devices:** All-or-nothing acquisition over four peripheral counters.
//! 5. **Dispatcher:** The per-round admission/execution/release state machine.

/// All-or-nothing peripheral device pool.
pub mod devices;
/// Per-round dispatch state machine and its event records.
pub mod dispatcher;
/// Best-fit memory arena with a reserved real-time region.
pub mod memory;
/// Process entity, priority levels, and device request counts.
pub mod process;
/// Multilevel FIFO queue set.
pub mod queue;

pub use devices::DevicePool;
pub use dispatcher::{DispatchEvent, DispatchOutcome, Dispatcher, RejectReason};
pub use memory::{MemoryArena, Region};
pub use process::{DeviceCounts, Priority, Process};
pub use queue::QueueSet;
