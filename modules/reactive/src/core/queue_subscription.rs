use super::{FusedQueue, FusionMode, FusionRequest, Subscription};

/// Subscription that can expose its buffer for direct polling.
pub trait QueueSubscription<T>: Subscription + FusedQueue<T> {
  /// Negotiates fusion. Returns the granted mode, [`FusionMode::None`] to keep push mode.
  ///
  /// Must be called from within `on_subscribe`, before any demand is issued.
  fn request_fusion(&self, request: FusionRequest) -> FusionMode;
}
