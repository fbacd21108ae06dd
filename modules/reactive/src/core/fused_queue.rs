use super::StreamError;

/// Pull-side view of a stage's internal buffer.
pub trait FusedQueue<T>: Send + Sync {
  /// Takes the next element.
  ///
  /// `Ok(None)` means "nothing more": in synchronous mode the sequence has ended, in asynchronous
  /// mode nothing is available until the next readiness signal. Implementations that filter must
  /// keep pulling until an element passes or the upstream reports `Ok(None)`.
  ///
  /// # Errors
  ///
  /// Returns the failure of a transform applied while pulling.
  fn poll(&self) -> Result<Option<T>, StreamError>;

  /// Returns `true` when no element is currently available.
  fn is_empty(&self) -> bool;

  /// Discards every buffered element.
  fn clear(&self);

  /// Advisory count of buffered elements.
  fn size(&self) -> usize {
    0
  }
}
