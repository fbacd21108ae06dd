use alloc::sync::Arc;
use core::convert::Infallible;

use crate::core::{
  Disposable, FusedQueue, FusionMode, FusionRequest, LifecycleGuard, QueueSubscription, StreamError, Subscription,
  UndeliverableErrors, validate_demand,
};

/// Element-less subscription whose cancellation disposes a single-result resource.
pub(crate) struct DisposableSubscription {
  resource: LifecycleGuard<Arc<dyn Disposable>>,
}

impl DisposableSubscription {
  pub(crate) const fn new() -> Self {
    Self { resource: LifecycleGuard::new() }
  }

  pub(crate) fn bind(&self, resource: Arc<dyn Disposable>) -> Result<(), StreamError> {
    self.resource.bind(resource)
  }

  pub(crate) fn is_cancelled(&self) -> bool {
    self.resource.is_cancelled()
  }
}

impl Subscription for DisposableSubscription {
  fn request(&self, amount: u64) {
    if let Err(error) = validate_demand(amount) {
      UndeliverableErrors::report(error);
    }
  }

  fn cancel(&self) {
    self.resource.cancel();
  }
}

impl FusedQueue<Infallible> for DisposableSubscription {
  fn poll(&self) -> Result<Option<Infallible>, StreamError> {
    Ok(None)
  }

  fn is_empty(&self) -> bool {
    true
  }

  fn clear(&self) {}
}

impl QueueSubscription<Infallible> for DisposableSubscription {
  fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    if request.mode().accepts_async() { FusionMode::Async } else { FusionMode::None }
  }
}
