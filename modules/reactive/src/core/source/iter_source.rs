
use alloc::boxed::Box;

use super::iter_subscription::IterSubscription;
use crate::core::{EmptySubscription, Publisher, Subscriber};

/// Cold source that replays a cloneable collection to every subscriber.
///
/// Each subscriber gets its own iterator and is served under its own demand. An exhausted
/// iterator completes the subscriber right after its last element, without waiting for more
/// demand. The source grants synchronous fusion.
pub struct IterSource<I> {
  items: I,
}

impl<I> IterSource<I>
where
  I: IntoIterator + Clone + Send + Sync,
  I::IntoIter: Send + 'static,
  I::Item: Send + 'static,
{
  /// Creates a source over `items`.
  #[must_use]
  pub const fn new(items: I) -> Self {
    Self { items }
  }
}

impl<I> Publisher<I::Item> for IterSource<I>
where
  I: IntoIterator + Clone + Send + Sync,
  I::IntoIter: Send + 'static,
  I::Item: Send + 'static,
{
  fn subscribe(&self, mut subscriber: Box<dyn Subscriber<I::Item>>) {
    let mut items = self.items.clone().into_iter().peekable();
    if items.peek().is_none() {
      EmptySubscription::complete(subscriber.as_mut());
      return;
    }
    IterSubscription::attach(items, subscriber);
  }
}
