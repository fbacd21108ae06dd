//! `tracing`-backed undeliverable error hook for standard environments.

#[cfg(test)]
mod tests;

use alloc::sync::Arc;

use tracing::{Level, event};

use crate::core::{StreamError, UndeliverableErrorHook, UndeliverableErrors};

/// Undeliverable error hook that forwards every report to the `tracing` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingUndeliverableErrorHook;

impl TracingUndeliverableErrorHook {
  /// Default target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "fraktor::reactive::undeliverable_error";

  /// Installs the hook process-wide, returning the hook it replaces.
  pub fn install() -> Option<Arc<dyn UndeliverableErrorHook>> {
    UndeliverableErrors::install(Arc::new(Self))
  }
}

impl UndeliverableErrorHook for TracingUndeliverableErrorHook {
  fn on_undeliverable(&self, error: &StreamError) {
    event!(
      target: TracingUndeliverableErrorHook::DEFAULT_TARGET,
      Level::ERROR,
      protocol_violation = error.is_protocol_violation(),
      "{}",
      error
    );
  }
}
