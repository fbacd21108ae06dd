use alloc::{boxed::Box, vec::Vec};

use crate::core::Subscriber;

/// Publisher that splits its output into a fixed number of independent rails.
pub trait ParallelPublisher<T>: Send + Sync {
  /// Returns the number of rails.
  fn parallelism(&self) -> usize;

  /// Subscribes one subscriber per rail, in rail order.
  ///
  /// When the number of subscribers differs from [`parallelism`](Self::parallelism), every
  /// subscriber is failed with
  /// [`StreamError::RailCountMismatch`](crate::core::StreamError::RailCountMismatch) and no rail
  /// is started.
  fn subscribe(&self, subscribers: Vec<Box<dyn Subscriber<T>>>);
}
