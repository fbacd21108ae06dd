use alloc::{boxed::Box, sync::Arc};

use crate::core::{Disposable, Observer, StreamError, UndeliverableErrors};

pub(crate) struct SumF64Observer {
  downstream: Box<dyn Observer<f64>>,
  upstream:   Option<Arc<dyn Disposable>>,
  sum:        f64,
  has_value:  bool,
  done:       bool,
}

impl SumF64Observer {
  pub(crate) fn new(downstream: Box<dyn Observer<f64>>) -> Self {
    Self { downstream, upstream: None, sum: 0.0, has_value: false, done: false }
  }

  fn is_disposed(&self) -> bool {
    self.upstream.as_ref().is_some_and(|upstream| upstream.is_disposed())
  }
}

impl Observer<f64> for SumF64Observer {
  fn on_subscribe(&mut self, resource: Arc<dyn Disposable>) {
    if self.upstream.is_some() {
      resource.dispose();
      UndeliverableErrors::report(StreamError::AlreadySubscribed);
      return;
    }
    self.upstream = Some(resource.clone());
    self.downstream.on_subscribe(resource);
  }

  fn on_next(&mut self, value: f64) {
    if self.done {
      return;
    }
    self.sum += value;
    self.has_value = true;
  }

  fn on_error(&mut self, error: StreamError) {
    if self.done || self.is_disposed() {
      UndeliverableErrors::report(error);
      return;
    }
    self.done = true;
    self.downstream.on_error(error);
  }

  fn on_complete(&mut self) {
    if self.done {
      return;
    }
    self.done = true;
    if self.is_disposed() {
      return;
    }
    if self.has_value {
      self.downstream.on_next(self.sum);
    }
    self.downstream.on_complete();
  }
}
