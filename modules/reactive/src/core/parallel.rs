//! Rail fan-out and reduction.

/// Per-rail reduction.
mod parallel_collect;
/// Accumulating subscriber of one rail.
mod parallel_collect_subscriber;
/// Rails backed by independent publishers.
mod parallel_from_rails;
/// Multi-rail publisher trait.
mod parallel_publisher;
/// Rail subscriber count validation.
mod validate_rails;

pub use parallel_collect::{Collector, InitialValueFactory, ParallelCollect};
pub use parallel_from_rails::ParallelFromRails;
pub use parallel_publisher::ParallelPublisher;
pub use validate_rails::validate_rails;
