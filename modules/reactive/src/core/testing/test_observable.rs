use alloc::{boxed::Box, sync::Arc, vec::Vec};

use spin::Mutex;

use super::TestDisposable;
use crate::core::{Disposable, ObservableSource, Observer, StreamError};

/// Non-backpressured source that pushes scripted elements and leaves the terminal signal to the
/// test.
///
/// Elements are pushed during `subscribe` until the resource is disposed. [`complete`](Self::complete)
/// and [`fail`](Self::fail) reach the observer even after disposal, so late signals can be checked.
pub struct TestObservable<T> {
  items:    Vec<T>,
  observer: Mutex<Option<Box<dyn Observer<T>>>>,
  resource: Arc<TestDisposable>,
}

impl<T: Clone + Send + Sync + 'static> TestObservable<T> {
  /// Source that pushes `items` on subscription.
  #[must_use]
  pub fn new(items: Vec<T>) -> Self {
    Self { items, observer: Mutex::new(None), resource: Arc::new(TestDisposable::new()) }
  }

  /// Returns the resource handed to the observer.
  #[must_use]
  pub fn resource(&self) -> Arc<TestDisposable> {
    self.resource.clone()
  }

  /// Completes the subscribed observer.
  pub fn complete(&self) {
    let observer = self.observer.lock().take();
    if let Some(mut observer) = observer {
      observer.on_complete();
    }
  }

  /// Fails the subscribed observer.
  pub fn fail(&self, error: StreamError) {
    let observer = self.observer.lock().take();
    if let Some(mut observer) = observer {
      observer.on_error(error);
    }
  }
}

impl<T: Clone + Send + Sync + 'static> ObservableSource<T> for TestObservable<T> {
  fn subscribe(&self, mut observer: Box<dyn Observer<T>>) {
    let resource: Arc<dyn Disposable> = self.resource.clone();
    observer.on_subscribe(resource);
    for item in &self.items {
      if self.resource.is_disposed() {
        break;
      }
      observer.on_next(item.clone());
    }
    *self.observer.lock() = Some(observer);
  }
}
