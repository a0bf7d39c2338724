//! Input event decoding and touch state tracking.
//!
//! This module turns the raw byte stream of a Linux event device into
//! [`InputEvent`] records and folds them into a single touch point. It does
//! not draw anything; the painter acts on the [`Flush`] values it produces.

pub mod error;
pub mod event;
pub mod reader;
pub mod tracker;

// Re-export commonly used types at module level
pub use error::EventError;
pub use event::{EVENT_SIZE, InputEvent, decode_events};
pub use reader::{DEFAULT_BATCH_SIZE, EventReader};
pub use tracker::{Flush, Position, TouchTracker};
