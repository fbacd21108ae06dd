
use alloc::sync::Arc;

use super::{Cancellable, FusionMode, FusionRequest, QueueSubscription, Subscription};

/// Upstream handle delivered to [`Subscriber::on_subscribe`](super::Subscriber::on_subscribe).
pub enum SubscriptionHandle<T> {
  /// Demand channel without a pollable queue.
  Plain(Arc<dyn Subscription>),
  /// Demand channel that can also be fused into a pull-style queue.
  Fuseable(Arc<dyn QueueSubscription<T>>),
}

impl<T> SubscriptionHandle<T> {
  /// Wraps a push-only subscription.
  pub fn plain<S>(subscription: Arc<S>) -> Self
  where
    S: Subscription + 'static, {
    Self::Plain(subscription)
  }

  /// Wraps a queue-capable subscription.
  pub fn fuseable<Q>(subscription: Arc<Q>) -> Self
  where
    Q: QueueSubscription<T> + 'static, {
    Self::Fuseable(subscription)
  }

  /// Forwards demand to the producer.
  pub fn request(&self, amount: u64) {
    match self {
      | Self::Plain(subscription) => subscription.request(amount),
      | Self::Fuseable(subscription) => subscription.request(amount),
    }
  }

  /// Cancels the producer.
  pub fn cancel(&self) {
    match self {
      | Self::Plain(subscription) => subscription.cancel(),
      | Self::Fuseable(subscription) => subscription.cancel(),
    }
  }

  /// Returns the queue view when the producer supports fusion.
  #[must_use]
  pub const fn queue(&self) -> Option<&Arc<dyn QueueSubscription<T>>> {
    match self {
      | Self::Plain(_) => None,
      | Self::Fuseable(subscription) => Some(subscription),
    }
  }

  /// Negotiates fusion; push-only producers always grant [`FusionMode::None`].
  #[must_use]
  pub fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    match self {
      | Self::Plain(_) => FusionMode::None,
      | Self::Fuseable(subscription) => subscription.request_fusion(request),
    }
  }
}

impl<T> Clone for SubscriptionHandle<T> {
  fn clone(&self) -> Self {
    match self {
      | Self::Plain(subscription) => Self::Plain(subscription.clone()),
      | Self::Fuseable(subscription) => Self::Fuseable(subscription.clone()),
    }
  }
}

impl<T> Cancellable for SubscriptionHandle<T> {
  fn cancel(&self) {
    match self {
      | Self::Plain(subscription) => subscription.cancel(),
      | Self::Fuseable(subscription) => subscription.cancel(),
    }
  }
}
