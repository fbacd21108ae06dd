use alloc::{boxed::Box, sync::Arc};
use core::convert::Infallible;

use super::disposable_subscription::DisposableSubscription;
use crate::core::{Disposable, SingleObserver, StreamError, Subscriber, SubscriptionHandle, UndeliverableErrors};

/// Observer side of [`CompletionFromSingle`](super::CompletionFromSingle).
pub(crate) struct FromSingleObserver {
  subscription: Arc<DisposableSubscription>,
  downstream:   Box<dyn Subscriber<Infallible>>,
  done:         bool,
}

impl FromSingleObserver {
  pub(crate) fn new(subscription: Arc<DisposableSubscription>, downstream: Box<dyn Subscriber<Infallible>>) -> Self {
    Self { subscription, downstream, done: false }
  }

  fn is_silenced(&self) -> bool {
    self.done || self.subscription.is_cancelled()
  }
}

impl<T> SingleObserver<T> for FromSingleObserver {
  fn on_subscribe(&mut self, resource: Arc<dyn Disposable>) {
    if self.subscription.bind(resource).is_err() {
      return;
    }
    self.downstream.on_subscribe(SubscriptionHandle::fuseable(self.subscription.clone()));
  }

  fn on_success(&mut self, _value: T) {
    if self.is_silenced() {
      return;
    }
    self.done = true;
    self.downstream.on_complete();
  }

  fn on_error(&mut self, error: StreamError) {
    if self.is_silenced() {
      UndeliverableErrors::report(error);
      return;
    }
    self.done = true;
    self.downstream.on_error(error);
  }
}
