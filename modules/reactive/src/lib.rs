#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Backpressure-aware push protocol for asynchronous pipelines.
//!
//! Stages are chained through [`core::Publisher`] / [`core::Subscriber`] pairs. A consumer paces
//! its producer through the [`core::Subscription`] demand channel, and adjacent stages may agree
//! to replace push notifications with direct polling of an internal queue
//! ([`core::QueueSubscription`]). The crate never spawns threads: whatever runtime drives the
//! producers also drives every state transition here, which are all lock-free atomic updates on
//! single fields.

extern crate alloc;

/// Runtime-agnostic protocol primitives (`no_std` + `alloc`).
pub mod core;
/// Standard library integrations.
#[cfg(feature = "std")]
pub mod std;
