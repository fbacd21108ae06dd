use super::StreamError;

/// Receives errors that can no longer be delivered to their consumer.
///
/// Implementations are invoked from whichever thread produced the error.
pub trait UndeliverableErrorHook: Send + Sync {
  /// Handles one undeliverable error.
  fn on_undeliverable(&self, error: &StreamError);
}
