use super::{StreamError, SubscriptionHandle};

/// Consumer side of the push protocol.
///
/// A producer never invokes these methods concurrently for the same subscriber. After
/// `on_error` or `on_complete` no further signal arrives.
pub trait Subscriber<T>: Send {
  /// Receives the upstream handle. Called exactly once, before any other signal.
  fn on_subscribe(&mut self, subscription: SubscriptionHandle<T>);

  /// Receives the next element. Never exceeds the requested demand.
  fn on_next(&mut self, value: T);

  /// Signals that elements can be polled from the fused upstream queue.
  ///
  /// Replaces `on_next` once asynchronous fusion was granted.
  fn on_ready(&mut self) {}

  /// Receives the terminal failure.
  fn on_error(&mut self, error: StreamError);

  /// Receives the terminal completion.
  fn on_complete(&mut self);
}
