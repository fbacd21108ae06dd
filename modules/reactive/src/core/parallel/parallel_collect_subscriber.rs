use alloc::{boxed::Box, sync::Arc};

use super::Collector;
use crate::core::{
  DeferredScalarCell, DemandCounter, StreamError, Subscriber, SubscriptionHandle, UndeliverableErrors,
};

/// Folds one rail into its collection.
pub(crate) struct ParallelCollectSubscriber<C, T> {
  cell:       Arc<DeferredScalarCell<C>>,
  downstream: Option<Box<dyn Subscriber<C>>>,
  collection: Option<C>,
  collector:  Collector<C, T>,
}

impl<C, T> ParallelCollectSubscriber<C, T>
where
  C: Send + 'static,
  T: Send + 'static,
{
  pub(crate) fn new(downstream: Box<dyn Subscriber<C>>, collection: C, collector: Collector<C, T>) -> Self {
    Self {
      cell:       Arc::new(DeferredScalarCell::new()),
      downstream: Some(downstream),
      collection: Some(collection),
      collector,
    }
  }
}

impl<C, T> Subscriber<T> for ParallelCollectSubscriber<C, T>
where
  C: Send + 'static,
  T: Send + 'static,
{
  fn on_subscribe(&mut self, subscription: SubscriptionHandle<T>) {
    if self.cell.bind_upstream(subscription.clone()).is_err() {
      return;
    }
    if let Some(downstream) = self.downstream.take() {
      self.cell.start(downstream);
    }
    subscription.request(DemandCounter::UNBOUNDED);
  }

  fn on_next(&mut self, value: T) {
    let Some(collection) = self.collection.as_mut() else {
      return;
    };
    if let Err(error) = (self.collector)(collection, value) {
      tracing::debug!(%error, "rail collector failed");
      self.collection = None;
      self.cell.cancel_upstream();
      self.cell.fail(error);
    }
  }

  fn on_error(&mut self, error: StreamError) {
    if self.collection.take().is_none() {
      UndeliverableErrors::report(error);
      return;
    }
    self.cell.fail(error);
  }

  fn on_complete(&mut self) {
    let Some(collection) = self.collection.take() else {
      return;
    };
    if let Err(error) = self.cell.produce(collection) {
      UndeliverableErrors::report(error);
    }
  }
}
