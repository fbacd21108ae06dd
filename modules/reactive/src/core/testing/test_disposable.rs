use portable_atomic::{AtomicUsize, Ordering};

use crate::core::Disposable;

/// Disposable that counts how often it was released.
#[derive(Debug, Default)]
pub struct TestDisposable {
  disposals: AtomicUsize,
}

impl TestDisposable {
  /// Creates an undisposed resource.
  #[must_use]
  pub const fn new() -> Self {
    Self { disposals: AtomicUsize::new(0) }
  }

  /// Returns how many times `dispose` was called.
  #[must_use]
  pub fn disposals(&self) -> usize {
    self.disposals.load(Ordering::Acquire)
  }
}

impl Disposable for TestDisposable {
  fn dispose(&self) {
    self.disposals.fetch_add(1, Ordering::AcqRel);
  }

  fn is_disposed(&self) -> bool {
    self.disposals() > 0
  }
}
