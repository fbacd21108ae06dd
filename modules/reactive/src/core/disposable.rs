use alloc::sync::Arc;

use super::Cancellable;

/// Resource handle held by a single-result source.
pub trait Disposable: Send + Sync {
  /// Releases the resource.
  fn dispose(&self);

  /// Returns `true` once the resource has been released.
  fn is_disposed(&self) -> bool;
}

impl Cancellable for Arc<dyn Disposable> {
  fn cancel(&self) {
    self.dispose();
  }
}
