//! Process dispatcher simulator CLI.
//!
//! This binary is the rendering layer over the `dispatch-core` engine. It performs:
//! 1. **Run:** Load a config and a dispatch list, drive the simulation to completion,
//!    and print one line per dispatch round plus a final summary.
//! 2. **Validate:** Parse and validate a dispatch list without running it.
//!
//! Structured engine events become text (or JSON lines) here and nowhere else.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dispatch_core::common::RecordError;
use dispatch_core::sim::loader::{self, LoadReport};
use dispatch_core::stats::DispatchStats;
use dispatch_core::{Config, DispatchEvent, DispatchOutcome, Simulation};

#[derive(Parser, Debug)]
#[command(
    name = "dispatch",
    version,
    about = "Multilevel-feedback process dispatcher simulator",
    long_about = "Schedule a dispatch list across a real-time queue and a multilevel feedback queue,\ntracking a fixed memory arena and four peripheral device pools.\n\nExamples:\n  dispatch run -f dispatch_list.txt\n  dispatch run -f dispatch_list.txt -c config.json --quantum 2\n  dispatch validate -f dispatch_list.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a dispatch list to completion and print per-round events.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Print dispatch events as JSON lines instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Parse and validate a dispatch list without running it.
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Dispatch list file (one record per line, eight comma-separated fields).
    #[arg(short, long)]
    file: PathBuf,

    /// JSON configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the time quantum.
    #[arg(long)]
    quantum: Option<u64>,

    /// Override the memory arena capacity.
    #[arg(long)]
    capacity: Option<u64>,

    /// Override the reserved real-time region size.
    #[arg(long)]
    reserved: Option<u64>,

    /// Override the number of user priority levels.
    #[arg(long)]
    levels: Option<u8>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { input, json } => cmd_run(&input, json),
        Commands::Validate { input } => cmd_validate(&input),
    }
}

fn cmd_run(input: &InputArgs, json: bool) {
    let config = load_config(input);
    let report = load_list(&input.file, &config);
    report_skipped(&report.skipped);

    let mut simulation = Simulation::new(&config, report.processes);
    while let Some(event) = simulation.step() {
        if json {
            let line = serde_json::to_string(&event).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: could not encode event: {e}");
                process::exit(1);
            });
            println!("{line}");
        } else {
            println!("{}", render_event(&event));
        }
    }

    println!("All processes completed.");
    print_summary(simulation.stats());
}

fn cmd_validate(input: &InputArgs) {
    let config = load_config(input);
    let report = load_list(&input.file, &config);

    for error in &report.skipped {
        println!("invalid: {error}");
    }
    println!(
        "{} valid record(s), {} skipped",
        report.processes.len(),
        report.skipped.len()
    );
    if !report.skipped.is_empty() {
        process::exit(1);
    }
}

/// Loads the configuration file (or defaults) and applies flag overrides.
fn load_config(input: &InputArgs) -> Config {
    let mut config = match &input.config {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: could not read config '{}': {}", path.display(), e);
                process::exit(1);
            });
            Config::from_json_str(&text).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: {e}");
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if let Some(quantum) = input.quantum {
        config.scheduler.quantum = quantum;
    }
    if let Some(capacity) = input.capacity {
        config.memory.capacity = capacity;
    }
    if let Some(reserved) = input.reserved {
        config.memory.realtime_reserved = reserved;
    }
    if let Some(levels) = input.levels {
        config.scheduler.user_levels = levels;
    }

    // Overrides can invalidate a config that deserialized cleanly.
    if let Err(e) = config.validate() {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
    config
}

fn load_list(path: &Path, config: &Config) -> LoadReport {
    loader::load_dispatch_file(path, config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    })
}

fn report_skipped(skipped: &[RecordError]) {
    for error in skipped {
        eprintln!("[loader] skipped {error}");
    }
}

fn render_event(event: &DispatchEvent) -> String {
    let p = &event.process;
    let header = format!(
        "round {:>4} | {:>3} arrival={} cpu={} mem={}",
        event.round,
        p.priority.to_string(),
        p.arrival_time,
        p.remaining_time,
        p.memory
    );
    match event.outcome {
        DispatchOutcome::Completed => format!("{header} -> completed"),
        DispatchOutcome::Requeued { new_priority } => {
            format!("{header} -> requeued at {new_priority}")
        }
        DispatchOutcome::Rejected { reason, dropped } => {
            if dropped {
                format!("{header} -> rejected ({reason}), dropped")
            } else {
                format!("{header} -> rejected ({reason}), will retry")
            }
        }
    }
}

fn print_summary(stats: &DispatchStats) {
    println!();
    println!("── summary ──────────────────────────────");
    println!("rounds            {}", stats.rounds);
    println!(
        "completed         {} (real-time {}, user {})",
        stats.completed(),
        stats.completed_realtime,
        stats.completed_user
    );
    println!("requeued          {}", stats.requeued);
    println!(
        "rejected          {} (devices {}, memory {})",
        stats.rejected(),
        stats.rejected_devices,
        stats.rejected_memory
    );
    println!("dropped           {}", stats.dropped);
    println!("quanta consumed   {}", stats.quanta_consumed);
}
