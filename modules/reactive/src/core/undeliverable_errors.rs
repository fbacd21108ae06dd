//! Process-wide undeliverable error route.

#[cfg(test)]
mod tests;

use alloc::sync::Arc;

use spin::RwLock;

use super::{StreamError, UndeliverableErrorHook};

static HOOK: RwLock<Option<Arc<dyn UndeliverableErrorHook>>> = RwLock::new(None);

/// Process-wide route for errors that arrive after their consumer already terminated, or that
/// describe a protocol violation no consumer can receive.
///
/// Install a hook once at process start with [`UndeliverableErrors::install`]. Until then, reports
/// are logged through `tracing` at error level.
pub struct UndeliverableErrors;

impl UndeliverableErrors {
  /// Target used when no hook is installed.
  pub const DEFAULT_TARGET: &'static str = "fraktor::reactive::undeliverable";

  /// Installs `hook`, returning the one it replaces.
  pub fn install(hook: Arc<dyn UndeliverableErrorHook>) -> Option<Arc<dyn UndeliverableErrorHook>> {
    HOOK.write().replace(hook)
  }

  /// Removes the installed hook, returning it.
  pub fn uninstall() -> Option<Arc<dyn UndeliverableErrorHook>> {
    HOOK.write().take()
  }

  /// Returns `true` while a hook is installed.
  #[must_use]
  pub fn is_installed() -> bool {
    HOOK.read().is_some()
  }

  /// Routes `error` to the installed hook.
  pub fn report(error: StreamError) {
    let hook = HOOK.read().clone();
    match hook {
      | Some(hook) => hook.on_undeliverable(&error),
      | None => tracing::error!(target: UndeliverableErrors::DEFAULT_TARGET, %error, "undeliverable stream error"),
    }
  }
}
