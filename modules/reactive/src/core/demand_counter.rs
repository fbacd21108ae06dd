//! Atomic demand accounting.


use portable_atomic::{AtomicU64, Ordering};

use super::Demand;

/// Requested-but-undelivered element count shared between a consumer and its producer.
///
/// Additions saturate at [`DemandCounter::UNBOUNDED`]. Once unbounded, the counter is never
/// decremented again.
#[derive(Debug)]
pub struct DemandCounter {
  requested: AtomicU64,
}

impl DemandCounter {
  /// Sentinel for unbounded demand.
  pub const UNBOUNDED: u64 = Demand::UNBOUNDED_RAW;

  /// Creates a counter with zero demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { requested: AtomicU64::new(0) }
  }

  /// Adds `amount` and returns the value observed before the addition.
  ///
  /// A previous value of zero tells the caller that no emission loop was running.
  pub fn add(&self, amount: u64) -> u64 {
    let mut current = self.requested.load(Ordering::Acquire);
    loop {
      if Demand::from_raw(current).is_unbounded() {
        return Self::UNBOUNDED;
      }
      let next = current.saturating_add(amount);
      match self.requested.compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(previous) => return previous,
        | Err(actual) => current = actual,
      }
    }
  }

  /// Records `amount` delivered elements and returns the remaining demand.
  pub fn produced(&self, amount: u64) -> u64 {
    let mut current = self.requested.load(Ordering::Acquire);
    loop {
      if Demand::from_raw(current).is_unbounded() {
        return Self::UNBOUNDED;
      }
      let next = current.saturating_sub(amount);
      match self.requested.compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return next,
        | Err(actual) => current = actual,
      }
    }
  }

  /// Returns the raw counter value.
  #[must_use]
  fn raw(&self) -> u64 {
    self.requested.load(Ordering::Acquire)
  }

  /// Returns the current demand.
  #[must_use]
  pub fn current(&self) -> Demand {
    Demand::from_raw(self.raw())
  }
}

impl Default for DemandCounter {
  fn default() -> Self {
    Self::new()
  }
}
