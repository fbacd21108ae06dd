use alloc::{boxed::Box, sync::Arc};

use super::Subscriber;

/// Producer side of the push protocol.
pub trait Publisher<T>: Send + Sync {
  /// Subscribes `subscriber`.
  ///
  /// Failures, including protocol violations, are signalled to the subscriber and never to the
  /// caller.
  fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>);
}

impl<T, P: Publisher<T> + ?Sized> Publisher<T> for Arc<P> {
  fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
    (**self).subscribe(subscriber);
  }
}
