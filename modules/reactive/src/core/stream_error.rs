//! Stream error definitions.


use alloc::string::String;

/// Errors signalled through the push protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
  /// A second upstream handle was offered to a stage that is already bound.
  #[error("subscription already set")]
  AlreadySubscribed,
  /// A single-subscriber source was subscribed more than once.
  #[error("source allows only a single subscriber")]
  SingleSubscriberOnly,
  /// A deferred value was produced more than once.
  #[error("deferred value already produced")]
  ValueAlreadyProduced,
  /// Demand request is not strictly positive.
  #[error("invalid demand request: {0}")]
  InvalidDemand(u64),
  /// The number of rail subscribers differs from the rail count.
  #[error("rail count mismatch: expected {expected}, got {actual}")]
  RailCountMismatch {
    /// Rail count of the parallel source.
    expected: usize,
    /// Number of subscribers supplied.
    actual:   usize,
  },
  /// A factory or transform produced no value.
  #[error("{0} returned no value")]
  MissingValue(&'static str),
  /// A user-supplied callback failed.
  #[error("callback failed: {0}")]
  CallbackFailed(String),
  /// Failure raised by a producer.
  #[error("stream failed: {0}")]
  Failed(String),
  /// The binding target was cancelled before the handle arrived.
  #[error("subscription cancelled")]
  Cancelled,
}

impl StreamError {
  /// Creates a producer failure with the given message.
  #[must_use]
  pub fn failed(message: impl Into<String>) -> Self {
    Self::Failed(message.into())
  }

  /// Creates a callback failure with the given message.
  #[must_use]
  pub fn callback(message: impl Into<String>) -> Self {
    Self::CallbackFailed(message.into())
  }

  /// Returns `true` for errors caused by a party breaking the protocol rules.
  #[must_use]
  pub const fn is_protocol_violation(&self) -> bool {
    matches!(
      self,
      Self::AlreadySubscribed
        | Self::SingleSubscriberOnly
        | Self::ValueAlreadyProduced
        | Self::InvalidDemand(_)
        | Self::RailCountMismatch { .. }
    )
  }
}
