/// Outstanding demand as seen by an emission loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
  /// At most this many elements may still be emitted.
  Finite(u64),
  /// Emission is never bounded again.
  Unbounded,
}

impl Demand {
  /// Raw counter value representing unbounded demand.
  pub const UNBOUNDED_RAW: u64 = u64::MAX;

  /// Interprets a raw counter value, mapping the saturation sentinel to [`Demand::Unbounded`].
  #[must_use]
  pub const fn from_raw(raw: u64) -> Self {
    if raw == Self::UNBOUNDED_RAW { Self::Unbounded } else { Self::Finite(raw) }
  }

  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` once `emitted` elements use up this demand.
  #[must_use]
  pub const fn is_satisfied_by(&self, emitted: u64) -> bool {
    match self {
      | Self::Finite(limit) => emitted >= *limit,
      | Self::Unbounded => false,
    }
  }
}
