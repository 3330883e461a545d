//! Mock implementations for testing.
//!
//! These doubles let the state machine be driven deterministically: retries
//! fire only when a test says so, and every side effect is recorded.
//!
//! # Available Mocks
//!
//! - [`ManualScheduler`] - Retry scheduler fired by hand
//! - [`RecordingObserver`] - Observer that records every notification

pub mod observer;
pub mod scheduler;

pub use observer::{ObservedEvent, RecordingObserver};
pub use scheduler::{ManualScheduler, ScheduledRetry};
