use alloc::sync::Arc;

use super::{Disposable, StreamError};

/// Consumer of a source that yields at most one value.
pub trait SingleObserver<T>: Send {
  /// Receives the resource handle of the source.
  fn on_subscribe(&mut self, resource: Arc<dyn Disposable>);

  /// Receives the single value.
  fn on_success(&mut self, value: T);

  /// Receives the failure.
  fn on_error(&mut self, error: StreamError);
}
