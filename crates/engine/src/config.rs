//! Configuration system for the dispatcher simulator.
//!
//! This module defines all configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants matching the classic dispatcher setup (1024-unit arena,
//!    64-unit real-time region, quantum of one, 2/1/1/2 device pools, three user levels).
//! 2. **Structures:** Hierarchical config for memory, devices, and scheduler policy.
//! 3. **Validation:** A pass that rejects configurations the engine cannot honour.
//!
//! Configuration is supplied via JSON (`Config::from_json_str`) or `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline setup when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Total memory arena capacity in allocation units (1024 MB).
    pub const MEMORY_CAPACITY: u64 = 1024;

    /// Suffix of the arena reserved exclusively for real-time processes (64 MB).
    pub const REALTIME_RESERVED: u64 = 64;

    /// Processor time consumed by a user process per dispatch round.
    pub const TIME_QUANTUM: u64 = 1;

    /// Number of user priority levels below the real-time level.
    pub const USER_LEVELS: u8 = 3;

    /// Printers available in the device pool.
    pub const PRINTERS: u32 = 2;

    /// Scanners available in the device pool.
    pub const SCANNERS: u32 = 1;

    /// Modems available in the device pool.
    pub const MODEMS: u32 = 1;

    /// CD drives available in the device pool.
    pub const CD_DRIVES: u32 = 2;
}

/// Policy applied to a process whose admission (devices or memory) fails.
///
/// The classic dispatcher silently discards such a process; `Drop` keeps that
/// behaviour and is the default. `Requeue` retries the process from the tail of
/// its current queue a bounded number of times before giving up, so a request
/// that can never be satisfied cannot keep a run alive forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum RejectionPolicy {
    /// Discard a rejected process permanently.
    #[default]
    Drop,
    /// Re-append a rejected process at the tail of its current queue.
    Requeue {
        /// Total admission failures allowed before the process is discarded.
        max_attempts: u32,
    },
}

/// Root configuration structure containing all simulator settings.
///
/// Every section and field carries a serde default, so partial JSON configs
/// deserialize against the baseline.
///
/// # Examples
///
/// ```
/// use dispatch_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.capacity, 1024);
/// assert_eq!(config.devices.printers, 2);
///
/// let partial: Config = Config::from_json_str(r#"{ "memory": { "capacity": 2048 } }"#).unwrap();
/// assert_eq!(partial.memory.capacity, 2048);
/// assert_eq!(partial.memory.realtime_reserved, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Memory arena geometry.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Peripheral device pool maximums.
    #[serde(default)]
    pub devices: DeviceConfig,
    /// Quantum, priority levels, and rejection policy.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl Config {
    /// Deserializes a configuration from JSON and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.memory.realtime_reserved >= self.memory.capacity {
            return Err(ConfigError::ReservedExceedsCapacity {
                reserved: self.memory.realtime_reserved,
                capacity: self.memory.capacity,
            });
        }
        if self.scheduler.quantum == 0 {
            return Err(ConfigError::ZeroQuantum);
        }
        if self.scheduler.user_levels == 0 {
            return Err(ConfigError::NoUserLevels);
        }
        Ok(())
    }
}

/// Memory arena geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Total arena capacity in allocation units.
    #[serde(default = "MemoryConfig::default_capacity")]
    pub capacity: u64,

    /// Size of the arena suffix reserved for real-time processes.
    /// User processes allocate only from the remaining prefix.
    #[serde(default = "MemoryConfig::default_realtime_reserved")]
    pub realtime_reserved: u64,
}

impl MemoryConfig {
    fn default_capacity() -> u64 {
        defaults::MEMORY_CAPACITY
    }

    fn default_realtime_reserved() -> u64 {
        defaults::REALTIME_RESERVED
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::MEMORY_CAPACITY,
            realtime_reserved: defaults::REALTIME_RESERVED,
        }
    }
}

/// Peripheral device pool maximums.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Printers in the pool.
    #[serde(default = "DeviceConfig::default_printers")]
    pub printers: u32,
    /// Scanners in the pool.
    #[serde(default = "DeviceConfig::default_scanners")]
    pub scanners: u32,
    /// Modems in the pool.
    #[serde(default = "DeviceConfig::default_modems")]
    pub modems: u32,
    /// CD drives in the pool.
    #[serde(default = "DeviceConfig::default_cd_drives")]
    pub cd_drives: u32,
}

impl DeviceConfig {
    fn default_printers() -> u32 {
        defaults::PRINTERS
    }

    fn default_scanners() -> u32 {
        defaults::SCANNERS
    }

    fn default_modems() -> u32 {
        defaults::MODEMS
    }

    fn default_cd_drives() -> u32 {
        defaults::CD_DRIVES
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            printers: defaults::PRINTERS,
            scanners: defaults::SCANNERS,
            modems: defaults::MODEMS,
            cd_drives: defaults::CD_DRIVES,
        }
    }
}

/// Quantum, priority levels, and rejection policy.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Processor time consumed by a user process per dispatch round.
    #[serde(default = "SchedulerConfig::default_quantum")]
    pub quantum: u64,

    /// Number of user priority levels below the real-time level.
    /// The lowest level is the demotion floor.
    #[serde(default = "SchedulerConfig::default_user_levels")]
    pub user_levels: u8,

    /// What happens to a process whose admission fails.
    #[serde(default)]
    pub rejection: RejectionPolicy,
}

impl SchedulerConfig {
    fn default_quantum() -> u64 {
        defaults::TIME_QUANTUM
    }

    fn default_user_levels() -> u8 {
        defaults::USER_LEVELS
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: defaults::TIME_QUANTUM,
            user_levels: defaults::USER_LEVELS,
            rejection: RejectionPolicy::default(),
        }
    }
}
