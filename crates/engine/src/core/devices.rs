//! All-or-nothing peripheral device pool.
//!
//! Four independent counters (printers, scanners, modems, CD drives) with fixed
//! maximums. Acquisition checks every counter before touching any of them: a
//! single shortfall grants nothing, so a failed admission can never leak a
//! partial hold.

use tracing::trace;

use crate::core::process::DeviceCounts;

/// Fixed-maximum counters for the four peripheral device types.
#[derive(Debug)]
pub struct DevicePool {
    capacity: DeviceCounts,
    available: DeviceCounts,
}

impl DevicePool {
    /// Creates a full pool with the given maximums.
    pub const fn new(capacity: DeviceCounts) -> Self {
        Self {
            capacity,
            available: capacity,
        }
    }

    /// Configured maximums.
    pub const fn capacity(&self) -> DeviceCounts {
        self.capacity
    }

    /// Counts currently available.
    pub const fn available(&self) -> DeviceCounts {
        self.available
    }

    /// Attempts to acquire all four counts at once.
    ///
    /// On any single shortfall nothing is decremented and `false` is returned.
    pub fn try_acquire(&mut self, request: DeviceCounts) -> bool {
        if !request.fits_within(self.available) {
            return false;
        }
        self.available = self.available.minus(request);
        trace!(?request, "acquired devices");
        true
    }

    /// Returns previously acquired counts to the pool.
    ///
    /// # Panics
    ///
    /// Panics if the release would push any counter beyond its maximum, i.e.
    /// the caller is returning devices it never acquired. That is a
    /// programming bug, not a runtime condition.
    pub fn release(&mut self, request: DeviceCounts) {
        let returned = self.available.plus(request);
        assert!(
            returned.fits_within(self.capacity),
            "device release contract violated: returning {request:?} would exceed pool capacity {:?}",
            self.capacity
        );
        self.available = returned;
        trace!(?request, "released devices");
    }
}
