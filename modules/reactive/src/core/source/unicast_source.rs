
use alloc::{boxed::Box, sync::Arc};

use super::{UnicastSourceConfig, unicast_state::UnicastState};
use crate::core::{Publisher, StreamError, Subscriber};

/// Buffered source that accepts exactly one subscriber.
///
/// Calling code pushes elements with [`emit`](Self::emit) and terminates with
/// [`complete`](Self::complete) or [`fail`](Self::fail), from any thread. Elements are buffered
/// until the subscriber requests them. A second subscriber is rejected with
/// [`StreamError::SingleSubscriberOnly`] without disturbing the first. The source grants
/// asynchronous fusion.
pub struct UnicastSource<T> {
  inner: Arc<UnicastState<T>>,
}

impl<T: Send + 'static> UnicastSource<T> {
  /// Creates a source with the given configuration.
  #[must_use]
  pub fn new(config: UnicastSourceConfig) -> Self {
    Self { inner: Arc::new(UnicastState::new(config)) }
  }

  /// Buffers `value` for the subscriber. Ignored once terminated or cancelled.
  pub fn emit(&self, value: T) {
    self.inner.push(value);
  }

  /// Completes the stream after the buffered elements.
  pub fn complete(&self) {
    self.inner.complete();
  }

  /// Fails the stream.
  ///
  /// A failure after termination or cancellation is routed to
  /// [`UndeliverableErrors`](crate::core::UndeliverableErrors).
  pub fn fail(&self, error: StreamError) {
    self.inner.fail(error);
  }

  /// Returns `true` once the subscriber cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.inner.is_cancelled()
  }

  /// Returns `true` once a subscriber was accepted.
  #[must_use]
  pub fn has_subscriber(&self) -> bool {
    self.inner.has_subscriber()
  }
}

impl<T: Send + 'static> Default for UnicastSource<T> {
  fn default() -> Self {
    Self::new(UnicastSourceConfig::default())
  }
}

impl<T> Clone for UnicastSource<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T: Send + 'static> Publisher<T> for UnicastSource<T> {
  fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
    UnicastState::attach(&self.inner, subscriber);
  }
}
