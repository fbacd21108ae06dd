use alloc::{boxed::Box, sync::Arc};

use spin::Mutex;

use super::TestDisposable;
use crate::core::{SingleObserver, SingleSource, StreamError};

/// Single-result source whose outcome is scripted by the test.
///
/// Outcomes set before subscription are delivered during `subscribe`; otherwise
/// [`resolve`](Self::resolve) delivers them later.
pub struct ScriptedSingle<T> {
  outcome:  Mutex<Option<Result<T, StreamError>>>,
  observer: Mutex<Option<Box<dyn SingleObserver<T>>>>,
  resource: Arc<TestDisposable>,
}

impl<T: Send + 'static> ScriptedSingle<T> {
  /// Source that succeeds with `value`.
  #[must_use]
  pub fn succeeding(value: T) -> Self {
    Self::with_outcome(Some(Ok(value)))
  }

  /// Source that fails with `error`.
  #[must_use]
  pub fn failing(error: StreamError) -> Self {
    Self::with_outcome(Some(Err(error)))
  }

  /// Source that waits for [`resolve`](Self::resolve).
  #[must_use]
  pub fn pending() -> Self {
    Self::with_outcome(None)
  }

  fn with_outcome(outcome: Option<Result<T, StreamError>>) -> Self {
    Self { outcome: Mutex::new(outcome), observer: Mutex::new(None), resource: Arc::new(TestDisposable::new()) }
  }

  /// Delivers `outcome` to the subscribed observer, or stores it for the next subscriber.
  pub fn resolve(&self, outcome: Result<T, StreamError>) {
    let observer = self.observer.lock().take();
    match observer {
      | Some(mut observer) => deliver(observer.as_mut(), outcome),
      | None => *self.outcome.lock() = Some(outcome),
    }
  }

  /// Returns the resource handed to observers.
  #[must_use]
  pub fn resource(&self) -> Arc<TestDisposable> {
    self.resource.clone()
  }
}

impl<T: Send + 'static> SingleSource<T> for ScriptedSingle<T> {
  fn subscribe(&self, mut observer: Box<dyn SingleObserver<T>>) {
    observer.on_subscribe(self.resource.clone());
    let outcome = self.outcome.lock().take();
    match outcome {
      | Some(outcome) => deliver(observer.as_mut(), outcome),
      | None => *self.observer.lock() = Some(observer),
    }
  }
}

fn deliver<T>(observer: &mut dyn SingleObserver<T>, outcome: Result<T, StreamError>) {
  match outcome {
    | Ok(value) => observer.on_success(value),
    | Err(error) => observer.on_error(error),
  }
}
