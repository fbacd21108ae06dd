use alloc::{boxed::Box, collections::VecDeque, sync::Arc};

use portable_atomic::{AtomicBool, Ordering};
use spin::Mutex;

use super::UnicastSourceConfig;
use crate::core::{
  DemandCounter, DrainGate, EmptySubscription, FusedQueue, FusionMode, FusionNegotiator, FusionRequest,
  QueueSubscription, StreamError, Subscriber, Subscription, SubscriptionHandle, UndeliverableErrors, validate_demand,
};

/// Buffer, terminal state and subscriber slot of a [`UnicastSource`](super::UnicastSource).
///
/// `done` is only raised while holding the `error` slot, so a terminal error is always visible to
/// a drain loop that observed `done`.
pub(crate) struct UnicastState<T> {
  queue:       Mutex<VecDeque<T>>,
  downstream:  Mutex<Option<Box<dyn Subscriber<T>>>>,
  subscribed:  AtomicBool,
  requested:   DemandCounter,
  gate:        DrainGate,
  done:        AtomicBool,
  error:       Mutex<Option<StreamError>>,
  cancelled:   AtomicBool,
  negotiator:  FusionNegotiator,
  delay_error: bool,
}

impl<T: Send + 'static> UnicastState<T> {
  pub(crate) fn new(config: UnicastSourceConfig) -> Self {
    Self {
      queue:       Mutex::new(VecDeque::with_capacity(config.capacity_hint())),
      downstream:  Mutex::new(None),
      subscribed:  AtomicBool::new(false),
      requested:   DemandCounter::new(),
      gate:        DrainGate::new(),
      done:        AtomicBool::new(false),
      error:       Mutex::new(None),
      cancelled:   AtomicBool::new(false),
      negotiator:  FusionNegotiator::new(),
      delay_error: config.delay_error(),
    }
  }

  pub(crate) fn attach(this: &Arc<Self>, mut subscriber: Box<dyn Subscriber<T>>) {
    if this.subscribed.swap(true, Ordering::AcqRel) {
      tracing::debug!("rejected second subscriber of a unicast source");
      EmptySubscription::error(subscriber.as_mut(), StreamError::SingleSubscriberOnly);
      return;
    }
    subscriber.on_subscribe(SubscriptionHandle::fuseable(this.clone()));
    *this.downstream.lock() = Some(subscriber);
    this.drain();
  }

  pub(crate) fn push(&self, value: T) {
    if self.done.load(Ordering::Acquire) || self.is_cancelled() {
      return;
    }
    self.queue.lock().push_back(value);
    self.drain();
  }

  pub(crate) fn complete(&self) {
    {
      let _terminal = self.error.lock();
      if self.done.load(Ordering::Acquire) || self.is_cancelled() {
        return;
      }
      self.done.store(true, Ordering::Release);
    }
    self.drain();
  }

  pub(crate) fn fail(&self, error: StreamError) {
    {
      let mut terminal = self.error.lock();
      if self.done.load(Ordering::Acquire) || self.is_cancelled() {
        drop(terminal);
        UndeliverableErrors::report(error);
        return;
      }
      *terminal = Some(error);
      self.done.store(true, Ordering::Release);
    }
    self.drain();
  }

  pub(crate) fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }

  pub(crate) fn has_subscriber(&self) -> bool {
    self.subscribed.load(Ordering::Acquire)
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
          | Some(downstream) if self.negotiator.granted() == FusionMode::Async => self.drain_fused(downstream.as_mut()),
          | Some(downstream) => self.drain_regular(downstream.as_mut()),
          | None => {
            if self.is_cancelled() {
              self.queue.lock().clear();
            }
            false
          },
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

  fn drain_regular(&self, downstream: &mut dyn Subscriber<T>) -> bool {
    let demand = self.requested.current();
    let mut emitted = 0_u64;
    while !demand.is_satisfied_by(emitted) {
      let done = self.done.load(Ordering::Acquire);
      let next = self.queue.lock().pop_front();
      if self.check_terminated(done, next.is_none(), downstream) {
        return true;
      }
      let Some(value) = next else {
        break;
      };
      downstream.on_next(value);
      emitted += 1;
    }
    if demand.is_satisfied_by(emitted) {
      let done = self.done.load(Ordering::Acquire);
      let empty = self.queue.lock().is_empty();
      if self.check_terminated(done, empty, downstream) {
        return true;
      }
    }
    if emitted > 0 && !demand.is_unbounded() {
      self.requested.produced(emitted);
    }
    false
  }

  fn drain_fused(&self, downstream: &mut dyn Subscriber<T>) -> bool {
    if self.is_cancelled() {
      return true;
    }
    let done = self.done.load(Ordering::Acquire);
    if done && !self.delay_error {
      let error = self.error.lock().take();
      if let Some(error) = error {
        self.queue.lock().clear();
        downstream.on_error(error);
        return true;
      }
    }
    downstream.on_ready();
    if done {
      let error = self.error.lock().take();
      match error {
        | Some(error) => downstream.on_error(error),
        | None => downstream.on_complete(),
      }
      return true;
    }
    false
  }

  fn check_terminated(&self, done: bool, empty: bool, downstream: &mut dyn Subscriber<T>) -> bool {
    if self.is_cancelled() {
      self.queue.lock().clear();
      return true;
    }
    if !done {
      return false;
    }
    if !self.delay_error {
      let error = self.error.lock().take();
      if let Some(error) = error {
        self.queue.lock().clear();
        downstream.on_error(error);
        return true;
      }
    }
    if empty {
      let error = self.error.lock().take();
      match error {
        | Some(error) => downstream.on_error(error),
        | None => downstream.on_complete(),
      }
      return true;
    }
    false
  }
}

impl<T: Send + 'static> Subscription for UnicastState<T> {
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

impl<T: Send + 'static> FusedQueue<T> for UnicastState<T> {
  fn poll(&self) -> Result<Option<T>, StreamError> {
    Ok(self.queue.lock().pop_front())
  }

  fn is_empty(&self) -> bool {
    self.queue.lock().is_empty()
  }

  fn clear(&self) {
    self.queue.lock().clear();
  }

  fn size(&self) -> usize {
    self.queue.lock().len()
  }
}

impl<T: Send + 'static> QueueSubscription<T> for UnicastState<T> {
  fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    self.negotiator.negotiate(|| if request.mode().accepts_async() { FusionMode::Async } else { FusionMode::None })
  }
}
