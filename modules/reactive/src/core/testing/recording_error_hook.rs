use alloc::vec::Vec;

use spin::Mutex;

use crate::core::{StreamError, UndeliverableErrorHook};

/// Undeliverable error hook that keeps every report.
#[derive(Default)]
pub struct RecordingErrorHook {
  errors: Mutex<Vec<StreamError>>,
}

impl RecordingErrorHook {
  /// Creates an empty recorder.
  #[must_use]
  pub const fn new() -> Self {
    Self { errors: Mutex::new(Vec::new()) }
  }

  /// Returns the recorded errors in arrival order.
  #[must_use]
  pub fn errors(&self) -> Vec<StreamError> {
    self.errors.lock().clone()
  }
}

impl UndeliverableErrorHook for RecordingErrorHook {
  fn on_undeliverable(&self, error: &StreamError) {
    self.errors.lock().push(error.clone());
  }
}
