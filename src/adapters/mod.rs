//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`TokioRetryScheduler`] - Retries delivered over a tokio channel
//! - [`CallbackObserver`] - Closure-based activate/deactivate/enter/leave hooks
//! - [`MarkerBoard`] - Translates state changes into marker names for rendering
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::ManualScheduler`] - Retries fired by hand
//! - [`mock::RecordingObserver`] - Records every notification

pub mod callbacks;
pub mod markers;
pub mod mock;
pub mod tokio_scheduler;

pub use callbacks::CallbackObserver;
pub use markers::MarkerBoard;
pub use mock::{ManualScheduler, RecordingObserver};
pub use tokio_scheduler::TokioRetryScheduler;
