//! Errors raised while reading and decoding the input event stream.

use thiserror::Error;

/// Errors that stop the event stream.
#[derive(Debug, Error)]
pub enum EventError {
    /// The read returned a byte count that does not split into whole records.
    #[error("partial read: {len} bytes is not a multiple of the {record_size}-byte event record")]
    PartialRead { len: usize, record_size: usize },

    /// A record span could not be reinterpreted as an event.
    #[error("malformed event record: {0}")]
    Malformed(String),

    /// The input device failed to deliver data.
    #[error("failed to read input device: {0}")]
    Read(#[from] std::io::Error),
}
