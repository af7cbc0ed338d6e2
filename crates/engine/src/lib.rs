//! Multilevel-feedback process dispatcher simulation library.
//!
//! This crate implements a single-machine process dispatcher simulator with the following:
//! 1. **Core:** Priority queue set, best-fit memory arena, device pool, and the dispatch state machine.
//! 2. **Simulation:** Dispatch-list loader and the simulation driver that folds events into statistics.
//! 3. **Configuration:** Hierarchical JSON configuration with validated defaults.
//! 4. **Events:** One structured event per dispatch round; rendering is the caller's concern.

/// Shared error taxonomy (configuration, loading, per-record validation).
pub mod common;
/// Simulator configuration (defaults, sections, rejection policy).
pub mod config;
/// Scheduling and resource-allocation engine (queues, arena, devices, dispatcher).
pub mod core;
/// Outer simulation layer (dispatch-list loader, simulation driver).
pub mod sim;
/// Dispatch statistics collection and derived metrics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Dispatch engine and the per-round event records it emits.
pub use crate::core::dispatcher::{DispatchEvent, DispatchOutcome, Dispatcher, RejectReason};
/// Process entity and its priority/device request types.
pub use crate::core::process::{DeviceCounts, Priority, Process};
/// Simulation driver; owns a [`Dispatcher`] plus statistics.
pub use crate::sim::simulator::Simulation;
