/// Cancellation capability shared by upstream handles.
mod cancellable;
/// Deferred single-value emission cell.
mod deferred_scalar_cell;
/// Deferred cell state enum.
mod deferred_state;
/// Demand model types.
mod demand;
/// Atomic demand accounting.
mod demand_counter;
/// Disposable resource handles.
mod disposable;
/// Drain loop serialization.
mod drain_gate;
/// Terminal-only subscription.
mod empty_subscription;
/// Fused pull-side queue view.
mod fused_queue;
/// Fusion negotiation cell.
mod fusion_negotiator;
/// Fusion modes.
mod fusion_mode;
/// Fusion request descriptor.
mod fusion_request;
/// One-shot upstream binding guard.
mod lifecycle_guard;
/// Lifecycle guard state enum (internal).
mod lifecycle_state;
/// Non-backpressured source trait.
mod observable_source;
/// Non-backpressured consumer trait.
mod observer;
/// Publisher trait.
mod publisher;
/// Queue-capable subscription trait.
mod queue_subscription;
/// Single-result observer trait.
mod single_observer;
/// Single-result source trait.
mod single_source;
/// Stream error definitions.
mod stream_error;
/// Subscriber trait.
mod subscriber;
/// Demand channel trait.
mod subscription;
/// Tagged subscription handle.
mod subscription_handle;
/// Fallback hook for undeliverable errors.
mod undeliverable_error_hook;
/// Process-wide undeliverable error route.
mod undeliverable_errors;
/// Demand argument validation.
mod validate_demand;

/// Rail fan-out and reduction.
pub mod parallel;
/// Producers driven by calling code.
pub mod source;
/// Transforming and reducing stages.
pub mod stage;
/// Test utilities for protocol verification.
pub mod testing;

pub use cancellable::Cancellable;
pub use deferred_scalar_cell::DeferredScalarCell;
pub use deferred_state::DeferredState;
pub use demand::Demand;
pub use demand_counter::DemandCounter;
pub use disposable::Disposable;
pub use drain_gate::DrainGate;
pub use empty_subscription::EmptySubscription;
pub use fused_queue::FusedQueue;
pub use fusion_mode::FusionMode;
pub use fusion_negotiator::FusionNegotiator;
pub use fusion_request::FusionRequest;
pub use lifecycle_guard::LifecycleGuard;
pub use observable_source::ObservableSource;
pub use observer::Observer;
pub use publisher::Publisher;
pub use queue_subscription::QueueSubscription;
pub use single_observer::SingleObserver;
pub use single_source::SingleSource;
pub use stream_error::StreamError;
pub use subscriber::Subscriber;
pub use subscription::Subscription;
pub use subscription_handle::SubscriptionHandle;
pub use undeliverable_error_hook::UndeliverableErrorHook;
pub use undeliverable_errors::UndeliverableErrors;
pub use validate_demand::validate_demand;
