use alloc::{boxed::Box, sync::Arc};

use super::Observer;

/// Source that pushes elements as fast as it produces them.
pub trait ObservableSource<T>: Send + Sync {
  /// Subscribes `observer`.
  fn subscribe(&self, observer: Box<dyn Observer<T>>);
}

impl<T, S: ObservableSource<T> + ?Sized> ObservableSource<T> for Arc<S> {
  fn subscribe(&self, observer: Box<dyn Observer<T>>) {
    (**self).subscribe(observer);
  }
}
