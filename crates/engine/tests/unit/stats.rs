//! Statistics Unit Tests.
//!
//! Verifies event folding, outcome splits, and derived rates.

use dispatch_core::stats::DispatchStats;
use dispatch_core::{
    Config, DispatchEvent, DispatchOutcome, Priority, RejectReason, Simulation,
};

use crate::common::{realtime, user};

fn rejected_event(round: u64, reason: RejectReason, dropped: bool) -> DispatchEvent {
    DispatchEvent {
        round,
        process: user(1, 1, 10),
        outcome: DispatchOutcome::Rejected { reason, dropped },
    }
}

// ══════════════════════════════════════════════════════════
// 1. Zero state
// ══════════════════════════════════════════════════════════

#[test]
fn fresh_stats_are_all_zero() {
    let stats = DispatchStats::default();
    assert_eq!(stats.rounds, 0);
    assert_eq!(stats.completed(), 0);
    assert_eq!(stats.rejected(), 0);
    assert_eq!(stats.rejection_rate(), 0.0);
    assert_eq!(stats.completion_rate(), 0.0);
}

// ══════════════════════════════════════════════════════════
// 2. Folding events
// ══════════════════════════════════════════════════════════

#[test]
fn completions_split_by_process_class() {
    let config = Config::default();
    let mut simulation = Simulation::new(&config, vec![realtime(100), user(1, 2, 50)]);
    let _ = simulation.run();

    let stats = simulation.stats();
    assert_eq!(stats.rounds, 3);
    assert_eq!(stats.completed_realtime, 1);
    assert_eq!(stats.completed_user, 1);
    assert_eq!(stats.completed(), 2);
    assert_eq!(stats.requeued, 1);
    assert_eq!(stats.quanta_consumed, 2);
}

#[test]
fn rejections_split_by_reason() {
    let mut stats = DispatchStats::default();
    stats.record(&rejected_event(1, RejectReason::Devices, false));
    stats.record(&rejected_event(2, RejectReason::Memory, true));

    assert_eq!(stats.rejected_devices, 1);
    assert_eq!(stats.rejected_memory, 1);
    assert_eq!(stats.rejected(), 2);
    assert_eq!(stats.dropped, 1);
}

#[test]
fn requeue_events_count_quanta_but_not_completions() {
    let mut stats = DispatchStats::default();
    stats.record(&DispatchEvent {
        round: 1,
        process: user(1, 3, 10),
        outcome: DispatchOutcome::Requeued {
            new_priority: Priority::new(2),
        },
    });

    assert_eq!(stats.requeued, 1);
    assert_eq!(stats.quanta_consumed, 1);
    assert_eq!(stats.completed(), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Derived rates
// ══════════════════════════════════════════════════════════

#[test]
fn rejection_rate_is_rejected_over_rounds() {
    let mut stats = DispatchStats::default();
    stats.record(&rejected_event(1, RejectReason::Memory, true));
    stats.record(&DispatchEvent {
        round: 2,
        process: realtime(10),
        outcome: DispatchOutcome::Completed,
    });

    assert_eq!(stats.rejection_rate(), 0.5);
}

#[test]
fn completion_rate_weighs_completed_against_dropped() {
    let mut stats = DispatchStats::default();
    stats.record(&DispatchEvent {
        round: 1,
        process: realtime(10),
        outcome: DispatchOutcome::Completed,
    });
    stats.record(&rejected_event(2, RejectReason::Devices, true));
    stats.record(&rejected_event(3, RejectReason::Devices, false));

    // One completed, one dropped; the undropped rejection is still in flight.
    assert_eq!(stats.completion_rate(), 0.5);
}
