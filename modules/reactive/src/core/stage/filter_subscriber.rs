use alloc::{boxed::Box, sync::Arc};

use super::{Predicate, filter_subscription::FilterSubscription};
use crate::core::{StreamError, Subscriber, SubscriptionHandle, UndeliverableErrors};

/// Upstream-facing half of [`Filter`](super::Filter).
pub(crate) struct FilterSubscriber<T> {
  downstream:   Box<dyn Subscriber<T>>,
  subscription: Arc<FilterSubscription<T>>,
  done:         bool,
}

impl<T: Send + 'static> FilterSubscriber<T> {
  pub(crate) fn new(downstream: Box<dyn Subscriber<T>>, predicate: Predicate<T>) -> Self {
    Self { downstream, subscription: Arc::new(FilterSubscription::new(predicate)), done: false }
  }
}

impl<T: Send + 'static> Subscriber<T> for FilterSubscriber<T> {
  fn on_subscribe(&mut self, subscription: SubscriptionHandle<T>) {
    if self.subscription.bind(subscription).is_err() {
      return;
    }
    self.downstream.on_subscribe(SubscriptionHandle::fuseable(self.subscription.clone()));
  }

  fn on_next(&mut self, value: T) {
    if self.done {
      return;
    }
    match self.subscription.test(&value) {
      | Ok(true) => self.downstream.on_next(value),
      | Ok(false) => self.subscription.request_upstream(1),
      | Err(error) => {
        self.done = true;
        self.subscription.cancel_upstream();
        self.downstream.on_error(error);
      },
    }
  }

  fn on_ready(&mut self) {
    if !self.done {
      self.downstream.on_ready();
    }
  }

  fn on_error(&mut self, error: StreamError) {
    if self.done {
      UndeliverableErrors::report(error);
      return;
    }
    self.done = true;
    self.downstream.on_error(error);
  }

  fn on_complete(&mut self) {
    if self.done {
      return;
    }
    self.done = true;
    self.downstream.on_complete();
  }
}
