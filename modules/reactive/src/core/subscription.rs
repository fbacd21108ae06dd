/// Demand channel between a consumer and its producer.
///
/// Only the consumer calls these methods; both may be invoked from any thread.
pub trait Subscription: Send + Sync {
  /// Authorizes the producer to deliver `amount` more elements.
  ///
  /// Requests are additive and saturate at unbounded demand. A zero request is a protocol
  /// violation and is routed to [`UndeliverableErrors`](super::UndeliverableErrors).
  fn request(&self, amount: u64);

  /// Stops delivery. Idempotent and irreversible.
  fn cancel(&self);
}
