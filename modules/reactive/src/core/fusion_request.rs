use super::FusionMode;

/// Fusion request issued by a downstream stage while it is being subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusionRequest {
  mode:            FusionMode,
  thread_boundary: bool,
}

impl FusionRequest {
  /// Creates a request for `mode` that does not cross a thread boundary.
  #[must_use]
  pub const fn new(mode: FusionMode) -> Self {
    Self { mode, thread_boundary: false }
  }

  /// Marks whether the consumer will poll from a different thread than the producer runs on.
  ///
  /// Transforming stages refuse fusion across a boundary, because polling would move their
  /// transform onto the consumer's thread.
  #[must_use]
  pub const fn with_thread_boundary(mut self, thread_boundary: bool) -> Self {
    self.thread_boundary = thread_boundary;
    self
  }

  /// Returns the requested mode.
  #[must_use]
  pub const fn mode(&self) -> FusionMode {
    self.mode
  }

  /// Returns `true` when the request crosses a thread boundary.
  #[must_use]
  pub const fn crosses_thread_boundary(&self) -> bool {
    self.thread_boundary
  }
}
