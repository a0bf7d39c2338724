//! Touch position and contact tracking.
//!
//! Axis and button events only update the pending state. A `SYN` event closes
//! the batch and yields a [`Flush`] describing what to repaint.

use log::debug;

use super::event::{ABS_X, ABS_Y, BTN_TOUCH, EV_ABS, EV_KEY, EV_SYN, InputEvent};

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Off-surface starting point used before the first report arrives.
    pub const OFFSCREEN: Position = Position { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Repaint request produced when a batch of events is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flush {
    /// Previously rendered marker position to erase.
    pub erase: Position,
    /// New marker position to draw, if the screen is being touched.
    pub draw: Option<Position>,
}

/// Accumulates axis and contact reports between synchronization markers.
#[derive(Debug)]
pub struct TouchTracker {
    pos: Position,
    old: Position,
    touching: bool,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchTracker {
    pub fn new() -> Self {
        Self {
            pos: Position::OFFSCREEN,
            old: Position::OFFSCREEN,
            touching: false,
        }
    }

    /// Most recently reported position, possibly not rendered yet.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Position of the marker as last flushed.
    pub fn last_rendered(&self) -> Position {
        self.old
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Applies one event, returning a [`Flush`] when it closes a batch.
    ///
    /// Unknown event types and codes are ignored.
    pub fn apply(&mut self, event: &InputEvent) -> Option<Flush> {
        match (event.event_type, event.code) {
            (EV_SYN, _) => {
                let flush = Flush {
                    erase: self.old,
                    draw: self.touching.then_some(self.pos),
                };
                self.old = self.pos;
                return Some(flush);
            }
            (EV_KEY, BTN_TOUCH) => {
                let touching = event.value != 0;
                if touching != self.touching {
                    debug!("Touch {}", if touching { "down" } else { "up" });
                }
                self.touching = touching;
            }
            (EV_ABS, ABS_X) => self.pos.x = event.value,
            (EV_ABS, ABS_Y) => self.pos.y = event.value,
            _ => {}
        }
        None
    }
}
