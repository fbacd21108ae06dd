/// `tracing`-backed undeliverable error hook.
mod tracing_undeliverable_error_hook;

pub use tracing_undeliverable_error_hook::TracingUndeliverableErrorHook;
