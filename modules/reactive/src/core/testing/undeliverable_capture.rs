use alloc::{sync::Arc, vec::Vec};

use spin::Mutex;

use super::RecordingErrorHook;
use crate::core::{StreamError, UndeliverableErrors};

static CAPTURE_LOCK: Mutex<()> = Mutex::new(());

/// Runs `body` with a recording hook installed and returns what it captured.
///
/// Captures are serialized process-wide, and the previously installed hook is restored
/// afterwards. Reports raised concurrently by unrelated code may still be captured.
pub fn capture_undeliverable_errors<R, F>(body: F) -> (R, Vec<StreamError>)
where
  F: FnOnce() -> R, {
  let _serial = CAPTURE_LOCK.lock();
  let recorder = Arc::new(RecordingErrorHook::new());
  let previous = UndeliverableErrors::install(recorder.clone());
  let result = body();
  match previous {
    | Some(previous) => {
      UndeliverableErrors::install(previous);
    },
    | None => {
      UndeliverableErrors::uninstall();
    },
  }
  (result, recorder.errors())
}
