//! Device Pool Unit Tests.
//!
//! Verifies all-or-nothing acquisition, counter bounds, and the
//! release contract.

use dispatch_core::core::devices::DevicePool;
use dispatch_core::DeviceCounts;
use proptest::prelude::*;

fn classic_pool() -> DevicePool {
    DevicePool::new(DeviceCounts::new(2, 1, 1, 2))
}

// ══════════════════════════════════════════════════════════
// 1. Acquisition
// ══════════════════════════════════════════════════════════

#[test]
fn request_within_capacity_succeeds() {
    let mut pool = classic_pool();
    assert!(pool.try_acquire(DeviceCounts::new(1, 1, 0, 2)));
    assert_eq!(pool.available(), DeviceCounts::new(1, 0, 1, 0));
}

#[test]
fn empty_request_always_succeeds() {
    let mut pool = classic_pool();
    assert!(pool.try_acquire(DeviceCounts::NONE));
    assert_eq!(pool.available(), pool.capacity());
}

#[test]
fn acquisition_is_all_or_nothing() {
    let mut pool = classic_pool();
    // Printers are available, scanners are not: nothing may be decremented.
    assert!(!pool.try_acquire(DeviceCounts::new(1, 2, 0, 0)));
    assert_eq!(pool.available(), pool.capacity());
}

#[test]
fn exhausted_pool_rejects_until_release() {
    let mut pool = classic_pool();
    let printers = DeviceCounts::new(2, 0, 0, 0);

    assert!(pool.try_acquire(printers));
    assert!(!pool.try_acquire(printers));
    pool.release(printers);
    assert!(pool.try_acquire(printers));
}

// ══════════════════════════════════════════════════════════
// 2. Release contract
// ══════════════════════════════════════════════════════════

#[test]
fn release_restores_availability() {
    let mut pool = classic_pool();
    let request = DeviceCounts::new(1, 1, 1, 1);
    assert!(pool.try_acquire(request));
    pool.release(request);
    assert_eq!(pool.available(), pool.capacity());
}

#[test]
#[should_panic(expected = "device release contract violated")]
fn releasing_devices_never_acquired_panics() {
    let mut pool = classic_pool();
    pool.release(DeviceCounts::new(1, 0, 0, 0));
}

// ══════════════════════════════════════════════════════════
// 3. Counter bounds under arbitrary sequences
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn counters_never_go_negative_or_exceed_capacity(
        ops in prop::collection::vec((0u32..4, 0u32..3, 0u32..3, 0u32..4), 1..50)
    ) {
        let capacity = DeviceCounts::new(2, 1, 1, 2);
        let mut pool = DevicePool::new(capacity);
        let mut held: Vec<DeviceCounts> = Vec::new();

        for (printers, scanners, modems, cd_drives) in ops {
            let request = DeviceCounts::new(printers, scanners, modems, cd_drives);
            let before = pool.available();
            if pool.try_acquire(request) {
                held.push(request);
            } else {
                // A failed acquire must not have touched any counter.
                prop_assert_eq!(pool.available(), before);
                if let Some(request) = held.pop() {
                    pool.release(request);
                }
            }
            prop_assert!(pool.available().fits_within(capacity));
        }

        for request in held {
            pool.release(request);
        }
        prop_assert_eq!(pool.available(), capacity);
    }
}
