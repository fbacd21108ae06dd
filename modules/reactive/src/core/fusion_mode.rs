/// Fusion mode requested by a consumer or granted by a producer.
///
/// Only [`FusionMode::None`], [`FusionMode::Sync`] and [`FusionMode::Async`] are ever granted;
/// [`FusionMode::Any`] is a request for either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FusionMode {
  /// Push notifications only.
  None  = 0,
  /// The consumer pulls until the queue reports the end; no demand is exchanged.
  Sync  = 1,
  /// The producer signals readiness and the consumer pulls what is currently available.
  Async = 2,
  /// Either synchronous or asynchronous fusion.
  Any   = 3,
}

impl FusionMode {
  /// Returns `true` when a synchronous grant satisfies this request.
  #[must_use]
  pub const fn accepts_sync(self) -> bool {
    matches!(self, Self::Sync | Self::Any)
  }

  /// Returns `true` when an asynchronous grant satisfies this request.
  #[must_use]
  pub const fn accepts_async(self) -> bool {
    matches!(self, Self::Async | Self::Any)
  }

  /// Returns `true` when the mode replaces push notifications.
  #[must_use]
  pub const fn is_fused(self) -> bool {
    !matches!(self, Self::None)
  }

  pub(crate) const fn as_u8(self) -> u8 {
    self as u8
  }

  pub(crate) const fn from_u8(value: u8) -> FusionMode {
    match value {
      | 0 => FusionMode::None,
      | 1 => FusionMode::Sync,
      | 2 => FusionMode::Async,
      | 3 => FusionMode::Any,
      | _ => panic!("invalid fusion mode value"),
    }
  }
}
