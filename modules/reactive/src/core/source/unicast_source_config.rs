/// Configuration for [`UnicastSource`](super::UnicastSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicastSourceConfig {
  capacity_hint: usize,
  delay_error:   bool,
}

impl UnicastSourceConfig {
  /// Creates a new configuration with the provided buffer hint and error ordering.
  #[must_use]
  pub const fn new(capacity_hint: usize, delay_error: bool) -> Self {
    Self { capacity_hint, delay_error }
  }

  /// Returns the initial buffer capacity.
  #[must_use]
  pub const fn capacity_hint(&self) -> usize {
    self.capacity_hint
  }

  /// Returns `true` when buffered elements are drained before an error is signalled.
  #[must_use]
  pub const fn delay_error(&self) -> bool {
    self.delay_error
  }

  /// Updates the initial buffer capacity.
  #[must_use]
  pub const fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
    self.capacity_hint = capacity_hint;
    self
  }

  /// Updates the error ordering.
  #[must_use]
  pub const fn with_delay_error(mut self, delay_error: bool) -> Self {
    self.delay_error = delay_error;
    self
  }
}

impl Default for UnicastSourceConfig {
  fn default() -> Self {
    Self { capacity_hint: 16, delay_error: false }
  }
}
