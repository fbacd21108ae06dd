//! Fusion negotiation cell.

#[cfg(test)]
mod tests;

use portable_atomic::{AtomicU8, Ordering};

use super::FusionMode;

const UNSET: u8 = 0xFF;
const PENDING: u8 = 0xFE;

/// Records the outcome of the one fusion negotiation a subscription may run.
///
/// The granted mode is immutable once stored.
#[derive(Debug)]
pub struct FusionNegotiator {
  granted: AtomicU8,
}

impl FusionNegotiator {
  /// Creates a negotiator that has not been asked yet.
  #[must_use]
  pub const fn new() -> Self {
    Self { granted: AtomicU8::new(UNSET) }
  }

  /// Runs `negotiate` for the first request and stores its grant.
  ///
  /// Later requests do not run `negotiate` and observe the stored grant instead.
  pub fn negotiate<F>(&self, negotiate: F) -> FusionMode
  where
    F: FnOnce() -> FusionMode, {
    match self.granted.compare_exchange(UNSET, PENDING, Ordering::AcqRel, Ordering::Acquire) {
      | Ok(_) => {
        let granted = match negotiate() {
          | FusionMode::Any => FusionMode::None,
          | mode => mode,
        };
        self.granted.store(granted.as_u8(), Ordering::Release);
        tracing::trace!(?granted, "fusion negotiated");
        granted
      },
      | Err(PENDING) => FusionMode::None,
      | Err(current) => FusionMode::from_u8(current),
    }
  }

  /// Returns the granted mode; [`FusionMode::None`] until negotiation finished.
  #[must_use]
  pub fn granted(&self) -> FusionMode {
    match self.granted.load(Ordering::Acquire) {
      | UNSET | PENDING => FusionMode::None,
      | value => FusionMode::from_u8(value),
    }
  }

  /// Returns `true` once a negotiation completed.
  #[must_use]
  pub fn is_negotiated(&self) -> bool {
    !matches!(self.granted.load(Ordering::Acquire), UNSET | PENDING)
  }
}

impl Default for FusionNegotiator {
  fn default() -> Self {
    Self::new()
  }
}
