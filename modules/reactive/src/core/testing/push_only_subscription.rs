use crate::core::{Subscription, SubscriptionHandle};

pub(crate) struct PushOnlySubscription<T> {
  upstream: SubscriptionHandle<T>,
}

impl<T> PushOnlySubscription<T> {
  pub(crate) const fn new(upstream: SubscriptionHandle<T>) -> Self {
    Self { upstream }
  }
}

impl<T: Send + 'static> Subscription for PushOnlySubscription<T> {
  fn request(&self, amount: u64) {
    self.upstream.request(amount);
  }

  fn cancel(&self) {
    self.upstream.cancel();
  }
}
