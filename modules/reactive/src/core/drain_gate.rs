//! Drain loop serialization.


use portable_atomic::{AtomicUsize, Ordering};

/// Work-in-progress counter that lets exactly one thread run a drain loop at a time.
///
/// Callers that lose the race only record missed work; the thread inside the loop picks it up
/// before leaving.
#[derive(Debug)]
pub struct DrainGate {
  wip: AtomicUsize,
}

impl DrainGate {
  /// Creates an idle gate.
  #[must_use]
  pub const fn new() -> Self {
    Self { wip: AtomicUsize::new(0) }
  }

  /// Registers work and returns `true` when the caller now owns the drain loop.
  pub fn enter(&self) -> bool {
    self.wip.fetch_add(1, Ordering::AcqRel) == 0
  }

  /// Retires `missed` units of work and returns how many arrived meanwhile.
  ///
  /// The drain loop exits when this returns zero.
  pub fn leave(&self, missed: usize) -> usize {
    self.wip.fetch_sub(missed, Ordering::AcqRel) - missed
  }

  /// Returns `true` while a drain loop is running.
  #[must_use]
  pub fn is_busy(&self) -> bool {
    self.wip.load(Ordering::Acquire) != 0
  }
}

impl Default for DrainGate {
  fn default() -> Self {
    Self::new()
  }
}
