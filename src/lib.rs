//! Show touchscreen events on the Linux framebuffer.
//!
//! Raw `struct input_event` records are read from an event device, folded into
//! a single touch point, and rendered as a square outline that follows the
//! finger. The binary wires these pieces to `/dev/input/eventN` and
//! `/dev/fb0`; the library keeps them separate so the loop can run against
//! in-memory byte sources and surfaces.

pub mod config;
pub mod draw;
pub mod framebuffer;
pub mod input;
pub mod painter;
pub mod util;

pub use config::Config;
pub use painter::Painter;
