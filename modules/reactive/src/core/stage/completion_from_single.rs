#[cfg(test)]
mod tests;

use alloc::{boxed::Box, sync::Arc};
use core::{convert::Infallible, marker::PhantomData};

use super::{disposable_subscription::DisposableSubscription, from_single_observer::FromSingleObserver};
use crate::core::{Publisher, SingleSource, Subscriber};

/// Turns a single-result source into a stream that only signals completion.
///
/// A successful result is discarded and the consumer completes without elements; a failure is
/// forwarded as is. Cancelling the stream disposes the resource of the wrapped source.
pub struct CompletionFromSingle<T, S> {
  source: S,
  _pd:    PhantomData<fn(T)>,
}

impl<T, S> CompletionFromSingle<T, S>
where
  T: Send + 'static,
  S: SingleSource<T>,
{
  /// Wraps `source`.
  #[must_use]
  pub const fn new(source: S) -> Self {
    Self { source, _pd: PhantomData }
  }
}

impl<T, S> Publisher<Infallible> for CompletionFromSingle<T, S>
where
  T: Send + 'static,
  S: SingleSource<T>,
{
  fn subscribe(&self, subscriber: Box<dyn Subscriber<Infallible>>) {
    let subscription = Arc::new(DisposableSubscription::new());
    self.source.subscribe(Box::new(FromSingleObserver::new(subscription, subscriber)));
  }
}
