use alloc::sync::Arc;

use super::{Disposable, StreamError};

/// Consumer of a source that pushes without backpressure.
///
/// Cancellation goes through the resource handed to `on_subscribe`; there is no demand channel.
pub trait Observer<T>: Send {
  /// Receives the resource handle of the source.
  fn on_subscribe(&mut self, resource: Arc<dyn Disposable>);

  /// Receives the next element.
  fn on_next(&mut self, value: T);

  /// Receives the terminal failure.
  fn on_error(&mut self, error: StreamError);

  /// Receives the terminal completion.
  fn on_complete(&mut self);
}
