#[cfg(test)]
mod tests;

use alloc::boxed::Box;

use crate::core::{EmptySubscription, StreamError, Subscriber};

/// Checks that one subscriber was supplied per rail.
///
/// Returns `false` after failing every subscriber with [`StreamError::RailCountMismatch`].
pub fn validate_rails<T: 'static>(parallelism: usize, subscribers: &mut [Box<dyn Subscriber<T>>]) -> bool {
  if subscribers.len() == parallelism {
    return true;
  }
  let error = StreamError::RailCountMismatch { expected: parallelism, actual: subscribers.len() };
  tracing::debug!(%error, "rail subscribers rejected");
  for subscriber in subscribers.iter_mut() {
    EmptySubscription::error(subscriber.as_mut(), error.clone());
  }
  false
}
