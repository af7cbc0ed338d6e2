//! Queue Set Unit Tests.
//!
//! Verifies strict priority scanning order, FIFO order within a level,
//! and tail insertion on requeue.

use dispatch_core::core::queue::QueueSet;
use dispatch_core::Priority;

use crate::common::user;

// ══════════════════════════════════════════════════════════
// 1. Empty and single-process behaviour
// ══════════════════════════════════════════════════════════

#[test]
fn select_from_empty_returns_none() {
    let mut queues = QueueSet::new(3);
    assert!(queues.select_next().is_none());
    assert!(queues.is_empty());
}

#[test]
fn single_process_round_trips() {
    let mut queues = QueueSet::new(3);
    let process = user(2, 5, 64);
    queues.enqueue(process);
    assert_eq!(queues.len(), 1);
    assert_eq!(queues.select_next(), Some(process));
    assert!(queues.select_next().is_none());
}

// ══════════════════════════════════════════════════════════
// 2. Priority scanning order
// ══════════════════════════════════════════════════════════

#[test]
fn realtime_selected_before_user_regardless_of_insertion_order() {
    let mut queues = QueueSet::new(3);
    queues.enqueue(user(1, 5, 64));
    let mut rt = user(0, 1, 32);
    rt.arrival_time = 9;
    queues.enqueue(rt);

    let first = queues.select_next().unwrap();
    assert!(first.priority.is_real_time());
}

#[test]
fn levels_scanned_in_ascending_numeric_order() {
    let mut queues = QueueSet::new(3);
    queues.enqueue(user(3, 1, 10));
    queues.enqueue(user(2, 1, 10));

    assert_eq!(queues.select_next().unwrap().priority, Priority::new(2));
    assert_eq!(queues.select_next().unwrap().priority, Priority::new(3));
}

// ══════════════════════════════════════════════════════════
// 3. FIFO order within a level
// ══════════════════════════════════════════════════════════

#[test]
fn fifo_order_within_a_level() {
    let mut queues = QueueSet::new(3);
    for arrival in 0..3 {
        let mut process = user(1, 5, 64);
        process.arrival_time = arrival;
        queues.enqueue(process);
    }

    for arrival in 0..3 {
        assert_eq!(queues.select_next().unwrap().arrival_time, arrival);
    }
}

#[test]
fn fifo_preserved_across_interleaved_operations() {
    let mut queues = QueueSet::new(3);
    let mut a = user(2, 1, 10);
    a.arrival_time = 1;
    let mut b = user(2, 1, 10);
    b.arrival_time = 2;
    let mut c = user(2, 1, 10);
    c.arrival_time = 3;

    queues.enqueue(a);
    queues.enqueue(b);
    assert_eq!(queues.select_next().unwrap().arrival_time, 1);
    queues.enqueue(c);
    assert_eq!(queues.select_next().unwrap().arrival_time, 2);
    assert_eq!(queues.select_next().unwrap().arrival_time, 3);
}

#[test]
fn requeued_process_joins_the_tail() {
    let mut queues = QueueSet::new(3);
    let mut first = user(2, 5, 64);
    first.arrival_time = 1;
    let mut second = user(2, 5, 64);
    second.arrival_time = 2;

    queues.enqueue(first);
    queues.enqueue(second);
    let popped = queues.select_next().unwrap();
    queues.enqueue(popped);

    assert_eq!(queues.select_next().unwrap().arrival_time, 2);
    assert_eq!(queues.select_next().unwrap().arrival_time, 1);
}

// ══════════════════════════════════════════════════════════
// 4. Level bookkeeping
// ══════════════════════════════════════════════════════════

#[test]
fn lowest_level_matches_configured_user_levels() {
    let queues = QueueSet::new(3);
    assert_eq!(queues.lowest_level(), Priority::new(3));

    let wide = QueueSet::new(7);
    assert_eq!(wide.lowest_level(), Priority::new(7));
}

#[test]
#[should_panic(expected = "no queue for priority level")]
fn enqueue_beyond_lowest_level_panics() {
    let mut queues = QueueSet::new(3);
    queues.enqueue(user(4, 1, 10));
}

#[test]
fn len_tracks_contents_across_levels() {
    let mut queues = QueueSet::new(3);
    queues.enqueue(user(1, 1, 10));
    queues.enqueue(user(3, 1, 10));
    assert_eq!(queues.len(), 2);
    let _ = queues.select_next();
    assert_eq!(queues.len(), 1);
    assert!(!queues.is_empty());
}
