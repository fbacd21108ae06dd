use alloc::{boxed::Box, vec::Vec};

use super::{ParallelPublisher, validate_rails};
use crate::core::{Publisher, Subscriber};

/// Rails backed by one independent publisher each.
pub struct ParallelFromRails<P> {
  rails: Vec<P>,
}

impl<P> ParallelFromRails<P> {
  /// Creates rails from `rails`, in order.
  #[must_use]
  pub const fn new(rails: Vec<P>) -> Self {
    Self { rails }
  }
}

impl<T, P> ParallelPublisher<T> for ParallelFromRails<P>
where
  T: 'static,
  P: Publisher<T>,
{
  fn parallelism(&self) -> usize {
    self.rails.len()
  }

  fn subscribe(&self, mut subscribers: Vec<Box<dyn Subscriber<T>>>) {
    if !validate_rails(self.rails.len(), &mut subscribers) {
      return;
    }
    for (rail, subscriber) in self.rails.iter().zip(subscribers) {
      rail.subscribe(subscriber);
    }
  }
}
