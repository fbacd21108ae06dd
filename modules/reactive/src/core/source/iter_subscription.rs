use alloc::{boxed::Box, sync::Arc};
use core::iter::Peekable;

use portable_atomic::{AtomicBool, Ordering};
use spin::Mutex;

use crate::core::{
  DemandCounter, DrainGate, FusedQueue, FusionMode, FusionNegotiator, FusionRequest, QueueSubscription, StreamError,
  Subscriber, Subscription, SubscriptionHandle, UndeliverableErrors, validate_demand,
};

/// Serves one subscriber of an [`IterSource`](super::IterSource).
pub(crate) struct IterSubscription<It: Iterator> {
  items:      Mutex<Peekable<It>>,
  requested:  DemandCounter,
  gate:       DrainGate,
  cancelled:  AtomicBool,
  cleared:    AtomicBool,
  negotiator: FusionNegotiator,
  downstream: Mutex<Option<Box<dyn Subscriber<It::Item>>>>,
}

impl<It> IterSubscription<It>
where
  It: Iterator + Send + 'static,
  It::Item: Send + 'static,
{
  /// Subscribes `subscriber` to the non-empty `items`.
  pub(crate) fn attach(items: Peekable<It>, mut subscriber: Box<dyn Subscriber<It::Item>>) {
    let subscription = Arc::new(Self {
      items:      Mutex::new(items),
      requested:  DemandCounter::new(),
      gate:       DrainGate::new(),
      cancelled:  AtomicBool::new(false),
      cleared:    AtomicBool::new(false),
      negotiator: FusionNegotiator::new(),
      downstream: Mutex::new(None),
    });
    subscriber.on_subscribe(SubscriptionHandle::fuseable(subscription.clone()));
    if subscription.negotiator.granted() == FusionMode::Sync {
      // the subscriber pulls through the queue from here on
      return;
    }
    *subscription.downstream.lock() = Some(subscriber);
    subscription.drain();
  }

  fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }

  fn drain(&self) {
    if !self.gate.enter() {
      return;
    }
    let mut missed = 1;
    loop {
      let released = {
        let mut slot = self.downstream.lock();
        let finished = match slot.as_mut() {
          | Some(downstream) => self.emit(downstream.as_mut()),
          | None => false,
        };
        if finished { slot.take() } else { None }
      };
      if released.is_some() {
        return;
      }
      missed = self.gate.leave(missed);
      if missed == 0 {
        return;
      }
    }
  }

  /// Emits up to the outstanding demand. Returns `true` once the subscriber is finished with.
  fn emit(&self, downstream: &mut dyn Subscriber<It::Item>) -> bool {
    let demand = self.requested.current();
    let mut emitted = 0_u64;
    loop {
      if self.is_cancelled() {
        return true;
      }
      if demand.is_satisfied_by(emitted) {
        break;
      }
      let next = self.items.lock().next();
      let Some(value) = next else {
        downstream.on_complete();
        return true;
      };
      downstream.on_next(value);
      emitted += 1;
      if self.is_cancelled() {
        return true;
      }
      if self.items.lock().peek().is_none() {
        downstream.on_complete();
        return true;
      }
    }
    if emitted > 0 && !demand.is_unbounded() {
      self.requested.produced(emitted);
    }
    false
  }
}

impl<It> Subscription for IterSubscription<It>
where
  It: Iterator + Send + 'static,
  It::Item: Send + 'static,
{
  fn request(&self, amount: u64) {
    if let Err(error) = validate_demand(amount) {
      UndeliverableErrors::report(error);
      return;
    }
    self.requested.add(amount);
    self.drain();
  }

  fn cancel(&self) {
    if self.cancelled.swap(true, Ordering::AcqRel) {
      return;
    }
    self.drain();
  }
}

impl<It> FusedQueue<It::Item> for IterSubscription<It>
where
  It: Iterator + Send + 'static,
  It::Item: Send + 'static,
{
  fn poll(&self) -> Result<Option<It::Item>, StreamError> {
    if self.cleared.load(Ordering::Acquire) || self.is_cancelled() {
      return Ok(None);
    }
    Ok(self.items.lock().next())
  }

  fn is_empty(&self) -> bool {
    self.cleared.load(Ordering::Acquire) || self.items.lock().peek().is_none()
  }

  fn clear(&self) {
    self.cleared.store(true, Ordering::Release);
  }
}

impl<It> QueueSubscription<It::Item> for IterSubscription<It>
where
  It: Iterator + Send + 'static,
  It::Item: Send + 'static,
{
  fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    self.negotiator.negotiate(|| if request.mode().accepts_sync() { FusionMode::Sync } else { FusionMode::None })
  }
}
