//! Test utilities for protocol verification.

mod push_only_publisher;
mod push_only_subscriber;
mod push_only_subscription;
mod recording_error_hook;
mod scripted_single;
mod test_disposable;
mod test_observable;
mod test_subscriber;
mod undeliverable_capture;

pub use push_only_publisher::PushOnlyPublisher;
pub use recording_error_hook::RecordingErrorHook;
pub use scripted_single::ScriptedSingle;
pub use test_disposable::TestDisposable;
pub use test_observable::TestObservable;
pub use test_subscriber::TestSubscriber;
pub use undeliverable_capture::capture_undeliverable_errors;
