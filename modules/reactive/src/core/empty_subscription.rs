use alloc::sync::Arc;

use super::{
  FusedQueue, FusionMode, FusionRequest, QueueSubscription, StreamError, Subscriber, Subscription, SubscriptionHandle,
};

/// Subscription with nothing behind it, used to terminate subscribers that never obtained a real
/// upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySubscription;

impl EmptySubscription {
  /// Subscribes `subscriber` to nothing and fails it immediately.
  pub fn error<T: 'static>(subscriber: &mut dyn Subscriber<T>, error: StreamError) {
    subscriber.on_subscribe(SubscriptionHandle::fuseable(Arc::new(EmptySubscription)));
    subscriber.on_error(error);
  }

  /// Subscribes `subscriber` to nothing and completes it immediately.
  pub fn complete<T: 'static>(subscriber: &mut dyn Subscriber<T>) {
    subscriber.on_subscribe(SubscriptionHandle::fuseable(Arc::new(EmptySubscription)));
    subscriber.on_complete();
  }
}

impl Subscription for EmptySubscription {
  fn request(&self, _amount: u64) {}

  fn cancel(&self) {}
}

impl<T> FusedQueue<T> for EmptySubscription {
  fn poll(&self) -> Result<Option<T>, StreamError> {
    Ok(None)
  }

  fn is_empty(&self) -> bool {
    true
  }

  fn clear(&self) {}
}

impl<T> QueueSubscription<T> for EmptySubscription {
  fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    if request.mode().accepts_async() { FusionMode::Async } else { FusionMode::None }
  }
}
