use alloc::boxed::Box;

use super::push_only_subscriber::PushOnlySubscriber;
use crate::core::{Publisher, Subscriber};

/// Wraps a publisher so that its subscribers only ever see a plain, non-fuseable handle.
///
/// Lets a stage be exercised against an upstream that refuses every fusion request.
pub struct PushOnlyPublisher<P> {
  inner: P,
}

impl<P> PushOnlyPublisher<P> {
  /// Hides the queue view of `inner`.
  #[must_use]
  pub const fn new(inner: P) -> Self {
    Self { inner }
  }
}

impl<T, P> Publisher<T> for PushOnlyPublisher<P>
where
  T: Send + 'static,
  P: Publisher<T>,
{
  fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
    self.inner.subscribe(Box::new(PushOnlySubscriber::new(subscriber)));
  }
}
