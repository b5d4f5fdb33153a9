//! Test helpers shared across crates.
//!
//! - [`logs`] captures `tracing` events emitted while a closure runs.
//! - [`flags`] provides a [`flag_walk::FlagSet`] that records every attempt
//!   and can be told to fail specific names.

pub mod flags;
pub mod logs;

pub use flags::RecordingFlagSet;
pub use logs::{CapturedEvent, capture_events};
