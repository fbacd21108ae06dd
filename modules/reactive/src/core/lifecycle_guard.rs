//! One-shot upstream binding guard.


use alloc::sync::Arc;

use portable_atomic::AtomicU8;
use spin::Once;

use super::{
  Cancellable, QueueSubscription, StreamError, SubscriptionHandle, UndeliverableErrors, lifecycle_state::LifecycleState,
};

/// Exactly-once binding slot for an upstream handle.
///
/// `bind` succeeds at most once per guard. `cancel` releases the bound handle at most once, even
/// when it races with `bind` or with other `cancel` calls. All transitions go through a single
/// atomic state byte; the handle itself is published before the state reaches `Bound`, so a
/// concurrent reader never sees a half-initialised binding.
pub struct LifecycleGuard<H> {
  state:  AtomicU8,
  handle: Once<H>,
}

impl<H: Cancellable> LifecycleGuard<H> {
  /// Creates an unbound guard.
  #[must_use]
  pub const fn new() -> Self {
    Self { state: AtomicU8::new(LifecycleState::Empty.as_u8()), handle: Once::new() }
  }

  /// Binds `handle`.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::AlreadySubscribed`] when a handle is already bound; the existing
  /// binding is left untouched, `handle` is cancelled and the violation is reported to
  /// [`UndeliverableErrors`]. Returns [`StreamError::Cancelled`] when the guard was cancelled
  /// first; `handle` is cancelled.
  pub fn bind(&self, handle: H) -> Result<(), StreamError> {
    match LifecycleState::compare_exchange(LifecycleState::Empty, LifecycleState::Binding, &self.state) {
      | Ok(_) => {
        let bound = self.handle.call_once(|| handle);
        if LifecycleState::compare_exchange(LifecycleState::Binding, LifecycleState::Bound, &self.state).is_err() {
          // cancelled while publishing
          bound.cancel();
        }
        Ok(())
      },
      | Err(LifecycleState::Cancelled) => {
        handle.cancel();
        Err(StreamError::Cancelled)
      },
      | Err(_) => {
        handle.cancel();
        tracing::debug!("rejected second upstream binding");
        UndeliverableErrors::report(StreamError::AlreadySubscribed);
        Err(StreamError::AlreadySubscribed)
      },
    }
  }

  /// Cancels the guard and the bound handle, if any.
  ///
  /// Returns `true` only for the call that performed the cancellation.
  pub fn cancel(&self) -> bool {
    match LifecycleState::Cancelled.swap(&self.state) {
      | LifecycleState::Bound => {
        if let Some(handle) = self.handle.get() {
          handle.cancel();
        }
        true
      },
      | LifecycleState::Empty | LifecycleState::Binding => true,
      | LifecycleState::Cancelled => false,
    }
  }

  /// Returns the bound handle while the guard is bound and not cancelled.
  #[must_use]
  pub fn get(&self) -> Option<&H> {
    match LifecycleState::load(&self.state) {
      | LifecycleState::Bound => self.handle.get(),
      | _ => None,
    }
  }

  /// Returns `true` once a handle is bound and not cancelled.
  #[must_use]
  pub fn is_bound(&self) -> bool {
    LifecycleState::load(&self.state) == LifecycleState::Bound
  }

  /// Returns `true` once the guard is cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    LifecycleState::load(&self.state) == LifecycleState::Cancelled
  }
}

impl<T> LifecycleGuard<SubscriptionHandle<T>> {
  /// Forwards demand to the bound upstream; dropped when unbound or cancelled.
  pub fn request(&self, amount: u64) {
    if let Some(handle) = self.get() {
      handle.request(amount);
    }
  }

  /// Returns the bound upstream queue when the upstream supports fusion.
  #[must_use]
  pub fn queue(&self) -> Option<&Arc<dyn QueueSubscription<T>>> {
    self.get().and_then(SubscriptionHandle::queue)
  }
}

impl<H: Cancellable> Default for LifecycleGuard<H> {
  fn default() -> Self {
    Self::new()
  }
}
