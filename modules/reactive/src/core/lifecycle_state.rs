use portable_atomic::{AtomicU8, Ordering};

/// Binding state of a [`LifecycleGuard`](super::LifecycleGuard).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum LifecycleState {
  /// Nothing bound yet.
  Empty     = 0,
  /// A bind is publishing its handle.
  Binding   = 1,
  /// A handle is bound.
  Bound     = 2,
  /// Cancelled; terminal.
  Cancelled = 3,
}

impl LifecycleState {
  pub(crate) const fn as_u8(self) -> u8 {
    self as u8
  }

  pub(crate) fn load(atomic: &AtomicU8) -> LifecycleState {
    LifecycleState::from_u8(atomic.load(Ordering::Acquire))
  }

  pub(crate) fn swap(self, atomic: &AtomicU8) -> LifecycleState {
    LifecycleState::from_u8(atomic.swap(self.as_u8(), Ordering::AcqRel))
  }

  pub(crate) fn compare_exchange(
    expected: LifecycleState,
    desired: LifecycleState,
    atomic: &AtomicU8,
  ) -> Result<LifecycleState, LifecycleState> {
    let result = atomic.compare_exchange(expected.as_u8(), desired.as_u8(), Ordering::AcqRel, Ordering::Acquire);
    result.map(LifecycleState::from_u8).map_err(LifecycleState::from_u8)
  }

  pub(crate) const fn from_u8(value: u8) -> LifecycleState {
    match value {
      | 0 => LifecycleState::Empty,
      | 1 => LifecycleState::Binding,
      | 2 => LifecycleState::Bound,
      | 3 => LifecycleState::Cancelled,
      | _ => panic!("invalid lifecycle state value"),
    }
  }
}
