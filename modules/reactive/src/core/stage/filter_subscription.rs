use super::Predicate;
use crate::core::{
  FusedQueue, FusionMode, FusionNegotiator, FusionRequest, LifecycleGuard, QueueSubscription, StreamError, Subscription,
  SubscriptionHandle,
};

/// Downstream-facing half of [`Filter`](super::Filter).
///
/// Relays demand and cancellation to the bound upstream and, once fused, exposes the upstream
/// queue with the predicate applied.
pub(crate) struct FilterSubscription<T> {
  upstream:   LifecycleGuard<SubscriptionHandle<T>>,
  predicate:  Predicate<T>,
  negotiator: FusionNegotiator,
}

impl<T: Send + 'static> FilterSubscription<T> {
  pub(crate) const fn new(predicate: Predicate<T>) -> Self {
    Self { upstream: LifecycleGuard::new(), predicate, negotiator: FusionNegotiator::new() }
  }

  pub(crate) fn bind(&self, upstream: SubscriptionHandle<T>) -> Result<(), StreamError> {
    self.upstream.bind(upstream)
  }

  pub(crate) fn test(&self, value: &T) -> Result<bool, StreamError> {
    (self.predicate)(value)
  }

  pub(crate) fn request_upstream(&self, amount: u64) {
    self.upstream.request(amount);
  }

  pub(crate) fn cancel_upstream(&self) {
    self.upstream.cancel();
  }
}

impl<T: Send + 'static> Subscription for FilterSubscription<T> {
  fn request(&self, amount: u64) {
    self.upstream.request(amount);
  }

  fn cancel(&self) {
    self.upstream.cancel();
  }
}

impl<T: Send + 'static> FusedQueue<T> for FilterSubscription<T> {
  fn poll(&self) -> Result<Option<T>, StreamError> {
    let Some(queue) = self.upstream.queue() else {
      return Ok(None);
    };
    let replenish = self.negotiator.granted() == FusionMode::Async;
    loop {
      let Some(value) = queue.poll()? else {
        return Ok(None);
      };
      if (self.predicate)(&value)? {
        return Ok(Some(value));
      }
      if replenish {
        queue.request(1);
      }
    }
  }

  fn is_empty(&self) -> bool {
    self.upstream.queue().is_none_or(|queue| queue.is_empty())
  }

  fn clear(&self) {
    if let Some(queue) = self.upstream.queue() {
      queue.clear();
    }
  }

  fn size(&self) -> usize {
    self.upstream.queue().map_or(0, |queue| queue.size())
  }
}

impl<T: Send + 'static> QueueSubscription<T> for FilterSubscription<T> {
  fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    self.negotiator.negotiate(|| {
      if request.crosses_thread_boundary() {
        return FusionMode::None;
      }
      self.upstream.queue().map_or(FusionMode::None, |queue| queue.request_fusion(request))
    })
  }
}
