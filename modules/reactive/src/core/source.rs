//! Producers driven by calling code.

/// Cold source over a cloneable collection.
mod iter_source;
/// Per-subscriber state of the iterator source.
mod iter_subscription;
/// Single-subscriber buffered source.
mod unicast_source;
/// Unicast source configuration.
mod unicast_source_config;
/// Shared state of the unicast source.
mod unicast_state;

pub use iter_source::IterSource;
pub use unicast_source::UnicastSource;
pub use unicast_source_config::UnicastSourceConfig;
