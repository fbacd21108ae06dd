use portable_atomic::{AtomicU8, Ordering};

/// State of a [`DeferredScalarCell`](super::DeferredScalarCell).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DeferredState {
  /// Neither a value nor demand has arrived.
  Empty         = 0,
  /// A value is buffered, waiting for demand.
  HasValue      = 1,
  /// Demand arrived before the value.
  Requested     = 2,
  /// The value was handed downstream.
  Emitted       = 3,
  /// Completed without a value, or failed.
  Terminated    = 4,
  /// Cancelled by the consumer.
  Cancelled     = 5,
  /// Fused; waiting for the value.
  FusedEmpty    = 6,
  /// Fused; the value can be polled.
  FusedReady    = 7,
  /// Fused; the value was polled or cleared.
  FusedConsumed = 8,
}

impl DeferredState {
  /// Returns `true` when no further value can be accepted.
  #[must_use]
  pub const fn is_final(self) -> bool {
    matches!(self, Self::Emitted | Self::Terminated | Self::Cancelled | Self::FusedConsumed)
  }

  pub(crate) const fn as_u8(self) -> u8 {
    self as u8
  }

  pub(crate) fn load(atomic: &AtomicU8) -> DeferredState {
    DeferredState::from_u8(atomic.load(Ordering::Acquire))
  }

  pub(crate) fn store(self, atomic: &AtomicU8) {
    atomic.store(self.as_u8(), Ordering::Release);
  }

  pub(crate) fn swap(self, atomic: &AtomicU8) -> DeferredState {
    DeferredState::from_u8(atomic.swap(self.as_u8(), Ordering::AcqRel))
  }

  pub(crate) fn transition(expected: DeferredState, desired: DeferredState, atomic: &AtomicU8) -> bool {
    atomic.compare_exchange(expected.as_u8(), desired.as_u8(), Ordering::AcqRel, Ordering::Acquire).is_ok()
  }

  pub(crate) const fn from_u8(value: u8) -> DeferredState {
    match value {
      | 0 => DeferredState::Empty,
      | 1 => DeferredState::HasValue,
      | 2 => DeferredState::Requested,
      | 3 => DeferredState::Emitted,
      | 4 => DeferredState::Terminated,
      | 5 => DeferredState::Cancelled,
      | 6 => DeferredState::FusedEmpty,
      | 7 => DeferredState::FusedReady,
      | 8 => DeferredState::FusedConsumed,
      | _ => panic!("invalid deferred state value"),
    }
  }
}
