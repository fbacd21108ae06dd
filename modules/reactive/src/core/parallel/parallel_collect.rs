#[cfg(test)]
mod tests;

use alloc::{boxed::Box, sync::Arc, vec::Vec};

use super::{ParallelPublisher, parallel_collect_subscriber::ParallelCollectSubscriber, validate_rails};
use crate::core::{EmptySubscription, StreamError, Subscriber};

/// Creates the initial collection of a rail; `Ok(None)` counts as a failure.
pub type InitialValueFactory<C> = Arc<dyn Fn() -> Result<Option<C>, StreamError> + Send + Sync>;

/// Folds one element into a rail's collection.
pub type Collector<C, T> = Arc<dyn Fn(&mut C, T) -> Result<(), StreamError> + Send + Sync>;

/// Reduces every rail of a parallel publisher into one collection per rail.
///
/// All initial collections are created before any rail starts. If one of them cannot be created,
/// every subscriber is failed and the upstream is never subscribed. Once started, rails are
/// independent: a failing collector or a cancellation only affects its own rail. Each rail
/// consumes its upstream with unbounded demand and emits its collection under its own
/// subscriber's demand.
pub struct ParallelCollect<P, C, T> {
  upstream:  P,
  initial:   InitialValueFactory<C>,
  collector: Collector<C, T>,
}

impl<P, C, T> ParallelCollect<P, C, T>
where
  P: ParallelPublisher<T>,
  C: Send + 'static,
  T: Send + 'static,
{
  /// Creates a reduction with infallible callbacks.
  #[must_use]
  pub fn new<F, G>(upstream: P, initial: F, collector: G) -> Self
  where
    F: Fn() -> C + Send + Sync + 'static,
    G: Fn(&mut C, T) + Send + Sync + 'static, {
    Self::try_new(
      upstream,
      move || -> Result<Option<C>, StreamError> { Ok(Some(initial())) },
      move |collection: &mut C, value: T| -> Result<(), StreamError> {
        collector(collection, value);
        Ok(())
      },
    )
  }

  /// Creates a reduction whose callbacks may fail.
  #[must_use]
  pub fn try_new<F, G>(upstream: P, initial: F, collector: G) -> Self
  where
    F: Fn() -> Result<Option<C>, StreamError> + Send + Sync + 'static,
    G: Fn(&mut C, T) -> Result<(), StreamError> + Send + Sync + 'static, {
    Self { upstream, initial: Arc::new(initial), collector: Arc::new(collector) }
  }

  fn initial_collections(&self, rails: usize) -> Result<Vec<C>, StreamError> {
    let mut collections = Vec::with_capacity(rails);
    for _ in 0..rails {
      match (self.initial)()? {
        | Some(collection) => collections.push(collection),
        | None => return Err(StreamError::MissingValue("initial value factory")),
      }
    }
    Ok(collections)
  }
}

impl<P, C, T> ParallelPublisher<C> for ParallelCollect<P, C, T>
where
  P: ParallelPublisher<T>,
  C: Send + 'static,
  T: Send + 'static,
{
  fn parallelism(&self) -> usize {
    self.upstream.parallelism()
  }

  fn subscribe(&self, mut subscribers: Vec<Box<dyn Subscriber<C>>>) {
    if !validate_rails(self.parallelism(), &mut subscribers) {
      return;
    }
    let collections = match self.initial_collections(subscribers.len()) {
      | Ok(collections) => collections,
      | Err(error) => {
        tracing::debug!(%error, "rail startup aborted");
        for subscriber in &mut subscribers {
          EmptySubscription::error(subscriber.as_mut(), error.clone());
        }
        return;
      },
    };
    let rails = subscribers
      .into_iter()
      .zip(collections)
      .map(|(downstream, collection)| -> Box<dyn Subscriber<T>> {
        Box::new(ParallelCollectSubscriber::new(downstream, collection, self.collector.clone()))
      })
      .collect();
    self.upstream.subscribe(rails);
  }
}
