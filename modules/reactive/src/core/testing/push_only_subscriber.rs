use alloc::{boxed::Box, sync::Arc};

use super::push_only_subscription::PushOnlySubscription;
use crate::core::{StreamError, Subscriber, SubscriptionHandle};

/// Relays every signal, downgrading the upstream handle to [`SubscriptionHandle::Plain`].
pub(crate) struct PushOnlySubscriber<T> {
  downstream: Box<dyn Subscriber<T>>,
}

impl<T> PushOnlySubscriber<T> {
  pub(crate) const fn new(downstream: Box<dyn Subscriber<T>>) -> Self {
    Self { downstream }
  }
}

impl<T: Send + 'static> Subscriber<T> for PushOnlySubscriber<T> {
  fn on_subscribe(&mut self, subscription: SubscriptionHandle<T>) {
    let plain = Arc::new(PushOnlySubscription::new(subscription));
    self.downstream.on_subscribe(SubscriptionHandle::plain(plain));
  }

  fn on_next(&mut self, value: T) {
    self.downstream.on_next(value);
  }

  fn on_error(&mut self, error: StreamError) {
    self.downstream.on_error(error);
  }

  fn on_complete(&mut self) {
    self.downstream.on_complete();
  }
}
