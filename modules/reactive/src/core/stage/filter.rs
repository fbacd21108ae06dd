
use alloc::{boxed::Box, sync::Arc};

use super::filter_subscriber::FilterSubscriber;
use crate::core::{Publisher, StreamError, Subscriber};

/// Shared, fallible element predicate.
pub type Predicate<T> = Arc<dyn Fn(&T) -> Result<bool, StreamError> + Send + Sync>;

/// Forwards only the upstream elements that satisfy a predicate.
///
/// Rejected elements do not consume downstream demand: in push mode every rejection requests one
/// replacement element from the upstream. When the downstream asks for fusion and the upstream
/// supports it, the filter stays in the fused chain and applies the predicate while polling,
/// pulling until an element passes or the upstream runs dry. A failing predicate cancels the
/// upstream and fails the downstream.
pub struct Filter<T, P> {
  upstream:  P,
  predicate: Predicate<T>,
}

impl<T, P> Filter<T, P>
where
  T: Send + 'static,
  P: Publisher<T>,
{
  /// Creates a filter over `upstream` with an infallible predicate.
  #[must_use]
  pub fn new<F>(upstream: P, predicate: F) -> Self
  where
    F: Fn(&T) -> bool + Send + Sync + 'static, {
    Self::try_new(upstream, move |value: &T| -> Result<bool, StreamError> { Ok(predicate(value)) })
  }

  /// Creates a filter over `upstream` with a predicate that may fail.
  #[must_use]
  pub fn try_new<F>(upstream: P, predicate: F) -> Self
  where
    F: Fn(&T) -> Result<bool, StreamError> + Send + Sync + 'static, {
    Self { upstream, predicate: Arc::new(predicate) }
  }
}

impl<T, P> Publisher<T> for Filter<T, P>
where
  T: Send + 'static,
  P: Publisher<T>,
{
  fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
    self.upstream.subscribe(Box::new(FilterSubscriber::new(subscriber, self.predicate.clone())));
  }
}
