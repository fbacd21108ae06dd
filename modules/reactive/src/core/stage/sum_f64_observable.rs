#[cfg(test)]
mod tests;

use alloc::boxed::Box;

use super::sum_f64_observer::SumF64Observer;
use crate::core::{ObservableSource, Observer};

/// Sums an `f64` source that pushes without backpressure.
///
/// The sum is pushed as soon as the upstream completes. An empty upstream completes without a
/// value. Disposing the resource handed downstream disposes the upstream and suppresses the sum.
pub struct SumF64Observable<S> {
  upstream: S,
}

impl<S: ObservableSource<f64>> SumF64Observable<S> {
  /// Creates a sum over `upstream`.
  #[must_use]
  pub const fn new(upstream: S) -> Self {
    Self { upstream }
  }
}

impl<S: ObservableSource<f64>> ObservableSource<f64> for SumF64Observable<S> {
  fn subscribe(&self, observer: Box<dyn Observer<f64>>) {
    self.upstream.subscribe(Box::new(SumF64Observer::new(observer)));
  }
}
