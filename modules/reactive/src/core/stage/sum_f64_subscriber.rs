use alloc::{boxed::Box, sync::Arc};

use crate::core::{
  DeferredScalarCell, DemandCounter, StreamError, Subscriber, SubscriptionHandle, UndeliverableErrors,
};

pub(crate) struct SumF64Subscriber {
  cell:       Arc<DeferredScalarCell<f64>>,
  downstream: Option<Box<dyn Subscriber<f64>>>,
  sum:        f64,
  has_value:  bool,
  done:       bool,
}

impl SumF64Subscriber {
  pub(crate) fn new(cell: Arc<DeferredScalarCell<f64>>, downstream: Box<dyn Subscriber<f64>>) -> Self {
    Self { cell, downstream: Some(downstream), sum: 0.0, has_value: false, done: false }
  }
}

impl Subscriber<f64> for SumF64Subscriber {
  fn on_subscribe(&mut self, subscription: SubscriptionHandle<f64>) {
    if self.cell.bind_upstream(subscription.clone()).is_err() {
      return;
    }
    if let Some(downstream) = self.downstream.take() {
      self.cell.start(downstream);
    }
    subscription.request(DemandCounter::UNBOUNDED);
  }

  fn on_next(&mut self, value: f64) {
    if self.done {
      return;
    }
    self.sum += value;
    self.has_value = true;
  }

  fn on_error(&mut self, error: StreamError) {
    if self.done {
      UndeliverableErrors::report(error);
      return;
    }
    self.done = true;
    self.cell.fail(error);
  }

  fn on_complete(&mut self) {
    if self.done {
      return;
    }
    self.done = true;
    if !self.has_value {
      self.cell.complete();
      return;
    }
    if let Err(error) = self.cell.produce(self.sum) {
      UndeliverableErrors::report(error);
    }
  }
}
