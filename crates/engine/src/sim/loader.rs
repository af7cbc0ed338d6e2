//! Dispatch-list loading.
//!
//! A dispatch list is plain text, one record per line, eight comma-separated
//! integer fields in fixed order:
//!
//! ```text
//! arrival_time, priority, processor_time, memory, printers, scanners, modems, cd_drives
//! ```
//!
//! Validation happens entirely here; the engine never sees an invalid record.
//! A malformed record is reported with its line number and skipped; loading
//! always continues to the end of the input.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::common::error::{LoadError, RecordError, RecordErrorKind};
use crate::config::Config;
use crate::core::process::{DeviceCounts, Priority, Process};

/// Number of fields in a record.
const FIELD_COUNT: usize = 8;

/// Field names in record order, for error reporting.
const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "arrival_time",
    "priority",
    "processor_time",
    "memory",
    "printers",
    "scanners",
    "modems",
    "cd_drives",
];

/// Outcome of loading a dispatch list: the good records and the skipped ones.
#[derive(Debug)]
pub struct LoadReport {
    /// Processes parsed from valid records, in input order.
    pub processes: Vec<Process>,
    /// Per-line validation failures, in input order.
    pub skipped: Vec<RecordError>,
}

/// Parses dispatch-list text against a configuration.
///
/// Blank lines are ignored. Each malformed record yields one entry in
/// [`LoadReport::skipped`] and is dropped; parsing never aborts early.
pub fn parse_dispatch_list(input: &str, config: &Config) -> LoadReport {
    let mut processes = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        match parse_record(record, config) {
            Ok(process) => processes.push(process),
            Err(kind) => {
                warn!(line = line_number, error = %kind, "skipping malformed record");
                skipped.push(RecordError {
                    line: line_number,
                    kind,
                });
            }
        }
    }

    LoadReport { processes, skipped }
}

/// Reads and parses a dispatch list from disk.
///
/// File-level I/O failure is fatal; record-level failures are collected in the
/// report exactly as with [`parse_dispatch_list`].
pub fn load_dispatch_file(path: &Path, config: &Config) -> Result<LoadReport, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_dispatch_list(&text, config))
}

fn parse_record(record: &str, config: &Config) -> Result<Process, RecordErrorKind> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordErrorKind::FieldCount(fields.len()));
    }

    let mut values = [0u64; FIELD_COUNT];
    for (index, field) in fields.iter().enumerate() {
        values[index] = field
            .parse()
            .map_err(|_| RecordErrorKind::InvalidInteger {
                field: FIELD_NAMES[index],
                value: (*field).to_string(),
            })?;
    }
    let [arrival_time, priority, processor_time, memory, printers, scanners, modems, cd_drives] =
        values;

    let lowest = config.scheduler.user_levels;
    if priority > u64::from(lowest) {
        return Err(RecordErrorKind::PriorityOutOfRange {
            found: priority,
            lowest,
        });
    }
    let priority = Priority::new(priority as u8);

    // Real-time records carry the processor_time field but never consume it.
    if !priority.is_real_time() && processor_time == 0 {
        return Err(RecordErrorKind::ZeroProcessorTime);
    }

    let capacity = config.memory.capacity;
    if memory == 0 || memory > capacity {
        return Err(RecordErrorKind::MemoryOutOfRange {
            requested: memory,
            capacity,
        });
    }

    let devices = DeviceCounts::new(
        narrow(printers, "printers")?,
        narrow(scanners, "scanners")?,
        narrow(modems, "modems")?,
        narrow(cd_drives, "cd_drives")?,
    );

    Ok(Process::new(
        arrival_time,
        priority,
        processor_time,
        memory,
        devices,
    ))
}

fn narrow(value: u64, field: &'static str) -> Result<u32, RecordErrorKind> {
    u32::try_from(value).map_err(|_| RecordErrorKind::InvalidInteger {
        field,
        value: value.to_string(),
    })
}
