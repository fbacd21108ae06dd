use alloc::{boxed::Box, sync::Arc};

use super::SingleObserver;

/// Source that yields exactly one value or one error.
pub trait SingleSource<T>: Send + Sync {
  /// Subscribes `observer`.
  fn subscribe(&self, observer: Box<dyn SingleObserver<T>>);
}

impl<T, S: SingleSource<T> + ?Sized> SingleSource<T> for Arc<S> {
  fn subscribe(&self, observer: Box<dyn SingleObserver<T>>) {
    (**self).subscribe(observer);
  }
}
