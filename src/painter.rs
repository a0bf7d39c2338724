//! The read, track, render loop.

use std::io::Read;

use log::trace;

use crate::draw::{BLACK, Color, Surface, WHITE, draw_marker};
use crate::input::{EventError, EventReader, Flush, InputEvent, TouchTracker};

/// Color used to erase the previous marker.
pub const BACKGROUND: Color = BLACK;
/// Color of the marker at the current touch point.
pub const FOREGROUND: Color = WHITE;

/// Drives a [`Surface`] from a stream of input events.
pub struct Painter<S> {
    surface: S,
    tracker: TouchTracker,
}

impl<S: Surface> Painter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            tracker: TouchTracker::new(),
        }
    }

    /// Paints the whole surface with the background color.
    pub fn clear(&mut self) {
        self.surface.fill(BACKGROUND);
    }

    /// Feeds one event to the tracker, repainting when it closes a batch.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(flush) = self.tracker.apply(event) {
            self.render(flush);
        }
    }

    /// Erases the old marker, then draws the new one if there is contact.
    fn render(&mut self, flush: Flush) {
        trace!("Flush: {:?}", flush);
        draw_marker(&mut self.surface, flush.erase, BACKGROUND);
        if let Some(pos) = flush.draw {
            draw_marker(&mut self.surface, pos, FOREGROUND);
        }
    }

    /// Processes batches from `reader` until it fails.
    ///
    /// Only returns on error: the event device never signals end of stream.
    pub fn run<R: Read>(&mut self, reader: &mut EventReader<R>) -> Result<(), EventError> {
        loop {
            for event in reader.next_batch()? {
                self.handle_event(&event);
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }
}
