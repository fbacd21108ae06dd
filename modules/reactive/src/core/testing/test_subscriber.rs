use alloc::{sync::Arc, vec::Vec};

use spin::Mutex;

use crate::core::{
  DemandCounter, Disposable, FusionMode, FusionRequest, Observer, StreamError, Subscriber, SubscriptionHandle,
};

/// Recording subscriber used to observe a stage from the consumer side.
///
/// Clones share the recorded state, so one clone can be handed to a publisher while the test
/// keeps another to issue demand and inspect signals. By default the probe requests unbounded
/// demand on subscription; fused modes are drained automatically unless
/// [`with_manual_drain`](Self::with_manual_drain) is set.
///
/// It also records a non-backpressured source as an [`Observer`]; `cancel` then disposes the
/// received resource.
pub struct TestSubscriber<T> {
  state:           Arc<Mutex<ProbeState<T>>>,
  initial_request: u64,
  fusion:          Option<FusionRequest>,
  manual_drain:    bool,
}

struct ProbeState<T> {
  values:        Vec<T>,
  errors:        Vec<StreamError>,
  completions:   usize,
  subscriptions: usize,
  ready_signals: usize,
  late_signals:  usize,
  fusion_mode:   FusionMode,
  subscription:  Option<SubscriptionHandle<T>>,
  resource:      Option<Arc<dyn Disposable>>,
}

impl<T> ProbeState<T> {
  const fn is_terminated(&self) -> bool {
    self.completions > 0 || !self.errors.is_empty()
  }
}

impl<T: Send + 'static> TestSubscriber<T> {
  /// Creates a probe that requests unbounded demand.
  #[must_use]
  pub fn new() -> Self {
    Self {
      state:           Arc::new(Mutex::new(ProbeState {
        values:        Vec::new(),
        errors:        Vec::new(),
        completions:   0,
        subscriptions: 0,
        ready_signals: 0,
        late_signals:  0,
        fusion_mode:   FusionMode::None,
        subscription:  None,
        resource:      None,
      })),
      initial_request: DemandCounter::UNBOUNDED,
      fusion:          None,
      manual_drain:    false,
    }
  }

  /// Sets the demand issued on subscription; zero issues none.
  #[must_use]
  pub const fn with_initial_request(mut self, amount: u64) -> Self {
    self.initial_request = amount;
    self
  }

  /// Requests fusion on subscription.
  #[must_use]
  pub const fn with_fusion(mut self, request: FusionRequest) -> Self {
    self.fusion = Some(request);
    self
  }

  /// Leaves fused queues for the test to poll.
  #[must_use]
  pub const fn with_manual_drain(mut self) -> Self {
    self.manual_drain = true;
    self
  }

  /// Issues demand through the received subscription.
  pub fn request(&self, amount: u64) {
    if let Some(subscription) = self.subscription() {
      subscription.request(amount);
    }
  }

  /// Cancels the received subscription or disposes the received resource.
  pub fn cancel(&self) {
    if let Some(subscription) = self.subscription() {
      subscription.cancel();
    }
    let resource = self.state.lock().resource.clone();
    if let Some(resource) = resource {
      resource.dispose();
    }
  }

  /// Returns the received subscription.
  #[must_use]
  pub fn subscription(&self) -> Option<SubscriptionHandle<T>> {
    self.state.lock().subscription.clone()
  }

  /// Returns the errors received.
  #[must_use]
  pub fn errors(&self) -> Vec<StreamError> {
    self.state.lock().errors.clone()
  }

  /// Returns the number of completions received.
  #[must_use]
  pub fn completions(&self) -> usize {
    self.state.lock().completions
  }

  /// Returns the number of terminal signals received.
  #[must_use]
  pub fn terminal_signals(&self) -> usize {
    let state = self.state.lock();
    state.completions + state.errors.len()
  }

  /// Returns `true` once a terminal signal arrived.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.state.lock().is_terminated()
  }

  /// Returns how many times `on_subscribe` was invoked.
  #[must_use]
  pub fn subscriptions(&self) -> usize {
    self.state.lock().subscriptions
  }

  /// Returns how many readiness signals arrived.
  #[must_use]
  pub fn ready_signals(&self) -> usize {
    self.state.lock().ready_signals
  }

  /// Returns how many signals arrived after a terminal signal.
  #[must_use]
  pub fn late_signals(&self) -> usize {
    self.state.lock().late_signals
  }

  /// Returns the fusion mode granted on subscription.
  #[must_use]
  pub fn fusion_mode(&self) -> FusionMode {
    self.state.lock().fusion_mode
  }

  fn push_value(&self, value: T) {
    let mut state = self.state.lock();
    if state.is_terminated() {
      state.late_signals += 1;
    }
    state.values.push(value);
  }

  fn push_error(&self, error: StreamError) {
    let mut state = self.state.lock();
    if state.is_terminated() {
      state.late_signals += 1;
    }
    state.errors.push(error);
  }

  fn push_completion(&self) {
    let mut state = self.state.lock();
    if state.is_terminated() {
      state.late_signals += 1;
    }
    state.completions += 1;
  }

  fn drain_fused(&self, subscription: &SubscriptionHandle<T>, sync: bool) {
    let Some(queue) = subscription.queue() else {
      return;
    };
    loop {
      match queue.poll() {
        | Ok(Some(value)) => self.push_value(value),
        | Ok(None) => {
          if sync {
            self.push_completion();
          }
          return;
        },
        | Err(error) => {
          queue.cancel();
          self.push_error(error);
          return;
        },
      }
    }
  }
}

impl<T: Clone + Send + 'static> TestSubscriber<T> {
  /// Returns the elements received.
  #[must_use]
  pub fn values(&self) -> Vec<T> {
    self.state.lock().values.clone()
  }
}

impl<T: Send + 'static> Default for TestSubscriber<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for TestSubscriber<T> {
  fn clone(&self) -> Self {
    Self {
      state:           self.state.clone(),
      initial_request: self.initial_request,
      fusion:          self.fusion,
      manual_drain:    self.manual_drain,
    }
  }
}

impl<T: Send + 'static> Subscriber<T> for TestSubscriber<T> {
  fn on_subscribe(&mut self, subscription: SubscriptionHandle<T>) {
    {
      let mut state = self.state.lock();
      state.subscriptions += 1;
      if state.subscription.is_some() {
        drop(state);
        subscription.cancel();
        self.push_error(StreamError::AlreadySubscribed);
        return;
      }
      state.subscription = Some(subscription.clone());
    }

    let mode = self.fusion.map_or(FusionMode::None, |request| subscription.request_fusion(request));
    self.state.lock().fusion_mode = mode;

    if mode == FusionMode::Sync {
      if !self.manual_drain {
        self.drain_fused(&subscription, true);
      }
      return;
    }
    if self.initial_request > 0 {
      subscription.request(self.initial_request);
    }
  }

  fn on_next(&mut self, value: T) {
    self.push_value(value);
  }

  fn on_ready(&mut self) {
    self.state.lock().ready_signals += 1;
    if self.manual_drain {
      return;
    }
    if let Some(subscription) = self.subscription() {
      self.drain_fused(&subscription, false);
    }
  }

  fn on_error(&mut self, error: StreamError) {
    self.push_error(error);
  }

  fn on_complete(&mut self) {
    self.push_completion();
  }
}

impl<T: Send + 'static> Observer<T> for TestSubscriber<T> {
  fn on_subscribe(&mut self, resource: Arc<dyn Disposable>) {
    let mut state = self.state.lock();
    state.subscriptions += 1;
    if state.resource.is_some() {
      drop(state);
      resource.dispose();
      self.push_error(StreamError::AlreadySubscribed);
      return;
    }
    state.resource = Some(resource);
  }

  fn on_next(&mut self, value: T) {
    self.push_value(value);
  }

  fn on_error(&mut self, error: StreamError) {
    self.push_error(error);
  }

  fn on_complete(&mut self) {
    self.push_completion();
  }
}
