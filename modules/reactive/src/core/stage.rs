//! Transforming and reducing stages.

/// Single-result to completion adapter.
mod completion_from_single;
/// Disposable-backed subscription.
mod disposable_subscription;
/// Element filter.
mod filter;
/// Push-side subscriber of the filter.
mod filter_subscriber;
/// Fuseable subscription of the filter.
mod filter_subscription;
/// Observer side of the completion adapter.
mod from_single_observer;
/// Floating-point sum.
mod sum_f64;
/// Floating-point sum without backpressure.
mod sum_f64_observable;
/// Accumulating observer of the observable sum.
mod sum_f64_observer;
/// Accumulating subscriber of the sum.
mod sum_f64_subscriber;

pub use completion_from_single::CompletionFromSingle;
pub use filter::{Filter, Predicate};
pub use sum_f64::SumF64;
pub use sum_f64_observable::SumF64Observable;
