//! Deferred single-value emission cell.


use alloc::{boxed::Box, sync::Arc};

use portable_atomic::AtomicU8;
use spin::Mutex;

use super::{
  Cancellable, DeferredState, FusedQueue, FusionMode, FusionRequest, LifecycleGuard, QueueSubscription, StreamError,
  Subscriber, Subscription, SubscriptionHandle, UndeliverableErrors, validate_demand,
};

/// Holds a single terminal value until the consumer has demand for it.
///
/// The cell is the downstream subscription of a reducing stage: the stage calls
/// [`produce`](Self::produce), [`complete`](Self::complete) or [`fail`](Self::fail) while the
/// consumer calls `request` and `cancel`. Every race between those is decided by one
/// compare-and-exchange on the state byte; the winner is the only caller that touches the
/// downstream subscriber afterwards. The first terminal transition wins.
///
/// The cell also grants asynchronous fusion: the value then becomes pollable and the consumer is
/// signalled through `on_ready`.
pub struct DeferredScalarCell<T> {
  state:      AtomicU8,
  value:      Mutex<Option<T>>,
  downstream: Mutex<Option<Box<dyn Subscriber<T>>>>,
  upstream:   LifecycleGuard<Box<dyn Cancellable>>,
}

impl<T: Send + 'static> DeferredScalarCell<T> {
  /// Creates an empty cell.
  #[must_use]
  pub fn new() -> Self {
    Self {
      state:      AtomicU8::new(DeferredState::Empty.as_u8()),
      value:      Mutex::new(None),
      downstream: Mutex::new(None),
      upstream:   LifecycleGuard::new(),
    }
  }

  /// Binds the upstream handle that `cancel` releases.
  ///
  /// # Errors
  ///
  /// See [`LifecycleGuard::bind`].
  pub fn bind_upstream<H>(&self, upstream: H) -> Result<(), StreamError>
  where
    H: Cancellable + 'static, {
    self.upstream.bind(Box::new(upstream))
  }

  /// Cancels the upstream without cancelling the consumer side.
  ///
  /// Used by the owning stage when it gives up on its input but still has a terminal signal to
  /// deliver.
  pub fn cancel_upstream(&self) {
    self.upstream.cancel();
  }

  /// Hands the cell to `downstream` as its subscription.
  ///
  /// Must run before the producing side can reach [`produce`](Self::produce),
  /// [`complete`](Self::complete) or [`fail`](Self::fail).
  pub fn start(self: &Arc<Self>, mut downstream: Box<dyn Subscriber<T>>) {
    downstream.on_subscribe(SubscriptionHandle::fuseable(self.clone()));
    *self.downstream.lock() = Some(downstream);
    if self.state() == DeferredState::Cancelled {
      self.release_downstream();
    }
  }

  /// Returns the current state.
  #[must_use]
  pub fn state(&self) -> DeferredState {
    DeferredState::load(&self.state)
  }

  /// Offers the terminal value.
  ///
  /// Emits immediately when demand is pending; otherwise buffers until the first request.
  /// A value offered after cancellation is dropped.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::ValueAlreadyProduced`] when a value was already offered or the cell
  /// already terminated. The stored value and the consumer are left untouched.
  pub fn produce(&self, value: T) -> Result<(), StreamError> {
    let mut pending = Some(value);
    loop {
      let state = self.state();
      match state {
        | DeferredState::Cancelled => return Ok(()),
        | DeferredState::Requested => {
          if DeferredState::transition(DeferredState::Requested, DeferredState::Emitted, &self.state) {
            if let Some(value) = pending.take() {
              self.emit_value(value);
            }
            return Ok(());
          }
        },
        | DeferredState::Empty | DeferredState::FusedEmpty => {
          *self.value.lock() = pending.take();
          let ready = if state == DeferredState::Empty { DeferredState::HasValue } else { DeferredState::FusedReady };
          if DeferredState::transition(state, ready, &self.state) {
            if ready == DeferredState::FusedReady {
              self.signal_ready();
            }
            return Ok(());
          }
          pending = self.value.lock().take();
        },
        | DeferredState::HasValue
        | DeferredState::Emitted
        | DeferredState::Terminated
        | DeferredState::FusedReady
        | DeferredState::FusedConsumed => {
          tracing::debug!(?state, "deferred value produced twice");
          return Err(StreamError::ValueAlreadyProduced);
        },
      }
    }
  }

  /// Completes without a value.
  pub fn complete(&self) {
    loop {
      let state = self.state();
      match state {
        | DeferredState::Empty | DeferredState::Requested | DeferredState::FusedEmpty => {
          if DeferredState::transition(state, DeferredState::Terminated, &self.state) {
            self.emit_terminal(|downstream| downstream.on_complete());
            return;
          }
        },
        | _ => return,
      }
    }
  }

  /// Fails the consumer, discarding any buffered value.
  ///
  /// Errors arriving after a terminal signal or a cancellation are routed to
  /// [`UndeliverableErrors`]. A fused consumer that was already told to poll keeps its value.
  pub fn fail(&self, error: StreamError) {
    loop {
      let state = self.state();
      if state.is_final() || state == DeferredState::FusedReady {
        UndeliverableErrors::report(error);
        return;
      }
      if DeferredState::transition(state, DeferredState::Terminated, &self.state) {
        self.value.lock().take();
        self.emit_terminal(|downstream| downstream.on_error(error));
        return;
      }
    }
  }

  fn emit_value(&self, value: T) {
    self.emit_terminal(|downstream| {
      downstream.on_next(value);
      if self.state() != DeferredState::Cancelled {
        downstream.on_complete();
      }
    });
  }

  fn signal_ready(&self) {
    self.emit_terminal(|downstream| {
      downstream.on_ready();
      if self.state() != DeferredState::Cancelled {
        downstream.on_complete();
      }
    });
  }

  fn emit_terminal<F>(&self, signal: F)
  where
    F: FnOnce(&mut dyn Subscriber<T>), {
    let released = {
      let mut downstream = self.downstream.lock();
      if let Some(subscriber) = downstream.as_mut() {
        signal(subscriber.as_mut());
      }
      downstream.take()
    };
    drop(released);
  }

  fn release_downstream(&self) {
    // the emitting thread releases it itself when the slot is busy
    let released = self.downstream.try_lock().and_then(|mut downstream| downstream.take());
    drop(released);
  }
}

impl<T: Send + 'static> Default for DeferredScalarCell<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Send + 'static> Subscription for DeferredScalarCell<T> {
  fn request(&self, amount: u64) {
    if let Err(error) = validate_demand(amount) {
      UndeliverableErrors::report(error);
      return;
    }
    loop {
      match self.state() {
        | DeferredState::Empty => {
          if DeferredState::transition(DeferredState::Empty, DeferredState::Requested, &self.state) {
            return;
          }
        },
        | DeferredState::HasValue => {
          if DeferredState::transition(DeferredState::HasValue, DeferredState::Emitted, &self.state) {
            let value = self.value.lock().take();
            if let Some(value) = value {
              self.emit_value(value);
            }
            return;
          }
        },
        | _ => return,
      }
    }
  }

  fn cancel(&self) {
    if DeferredState::Cancelled.swap(&self.state) == DeferredState::Cancelled {
      return;
    }
    self.value.lock().take();
    self.upstream.cancel();
    self.release_downstream();
  }
}

impl<T: Send + 'static> FusedQueue<T> for DeferredScalarCell<T> {
  fn poll(&self) -> Result<Option<T>, StreamError> {
    if DeferredState::transition(DeferredState::FusedReady, DeferredState::FusedConsumed, &self.state) {
      return Ok(self.value.lock().take());
    }
    Ok(None)
  }

  fn is_empty(&self) -> bool {
    self.state() != DeferredState::FusedReady
  }

  fn clear(&self) {
    DeferredState::FusedConsumed.store(&self.state);
    self.value.lock().take();
  }

  fn size(&self) -> usize {
    usize::from(self.state() == DeferredState::FusedReady)
  }
}

impl<T: Send + 'static> QueueSubscription<T> for DeferredScalarCell<T> {
  fn request_fusion(&self, request: FusionRequest) -> FusionMode {
    if request.mode().accepts_async()
      && DeferredState::transition(DeferredState::Empty, DeferredState::FusedEmpty, &self.state)
    {
      return FusionMode::Async;
    }
    FusionMode::None
  }
}
