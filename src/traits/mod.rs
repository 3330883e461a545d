//! Trait abstractions for dependency injection and testability.
//!
//! The activation state machine talks to the outside world only through
//! these seams, so it can be driven in tests without a terminal or a timer.
//!
//! # Traits
//!
//! - [`RetryScheduler`] - deferred re-evaluation of a pending activation
//! - [`MenuAimObserver`] - activation and delaying notifications

pub mod observer;
pub mod scheduler;

pub use observer::{MenuAimObserver, StateChange};
pub use scheduler::{RetryGuard, RetryScheduler, RetryTicket};
