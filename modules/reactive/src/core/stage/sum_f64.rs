
use alloc::{boxed::Box, sync::Arc};

use super::sum_f64_subscriber::SumF64Subscriber;
use crate::core::{DeferredScalarCell, Publisher, Subscriber};

/// Reduces a stream of `f64` to its sum.
///
/// The whole upstream is consumed with unbounded demand; the sum is emitted under the
/// downstream's demand once the upstream completes. An empty upstream completes without a value,
/// so it stays distinguishable from a sequence summing to zero.
pub struct SumF64<P> {
  upstream: P,
}

impl<P: Publisher<f64>> SumF64<P> {
  /// Creates a sum over `upstream`.
  #[must_use]
  pub const fn new(upstream: P) -> Self {
    Self { upstream }
  }
}

impl<P: Publisher<f64>> Publisher<f64> for SumF64<P> {
  fn subscribe(&self, subscriber: Box<dyn Subscriber<f64>>) {
    let cell = Arc::new(DeferredScalarCell::new());
    self.upstream.subscribe(Box::new(SumF64Subscriber::new(cell, subscriber)));
  }
}
