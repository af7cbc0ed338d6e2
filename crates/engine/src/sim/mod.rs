//! Outer simulation layer.
//!
//! Connects the engine to its surroundings:
//! 1. **Loader:** Parses dispatch-list text into processes, skipping and
//!    reporting malformed records.
//! 2. **Simulation:** Owns a dispatcher plus statistics and drives the run.

/// Dispatch-list parsing and validation.
pub mod loader;
/// Simulation driver.
pub mod simulator;

pub use loader::{LoadReport, load_dispatch_file, parse_dispatch_list};
pub use simulator::Simulation;
