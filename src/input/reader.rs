//! Blocking, record-aligned reads from an input event device.

use std::io::{ErrorKind, Read};

use log::{trace, warn};

use super::error::EventError;
use super::event::{EVENT_SIZE, InputEvent, decode_events};

/// Number of records requested per read when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Pulls batches of events out of a byte stream such as `/dev/input/eventN`.
///
/// Each read is assumed to be record-aligned, which the kernel guarantees for
/// event devices. Nothing is buffered across reads.
pub struct EventReader<R> {
    source: R,
    buf: Vec<u8>,
    read_retries: u32,
}

impl<R: Read> EventReader<R> {
    /// Creates a reader with the default batch size and no read retries.
    pub fn new(source: R) -> Self {
        Self::with_options(source, DEFAULT_BATCH_SIZE, 0)
    }

    /// Creates a reader that requests up to `batch_size` records per read and
    /// retries up to `read_retries` consecutive interrupted reads.
    pub fn with_options(source: R, batch_size: usize, read_retries: u32) -> Self {
        Self {
            source,
            buf: vec![0; batch_size.max(1) * EVENT_SIZE],
            read_retries,
        }
    }

    /// Blocks until the device delivers at least one event.
    ///
    /// Zero-byte reads are retried silently. Any other read failure is
    /// returned, as is a byte count that does not split into whole records.
    pub fn next_batch(&mut self) -> Result<Vec<InputEvent>, EventError> {
        let mut interrupted = 0;
        loop {
            match self.source.read(&mut self.buf) {
                Ok(0) => {
                    trace!("Zero-byte read from input device, retrying");
                }
                Ok(n) => {
                    trace!("Read {} bytes ({} records)", n, n / EVENT_SIZE);
                    return decode_events(&self.buf[..n]);
                }
                Err(err)
                    if err.kind() == ErrorKind::Interrupted && interrupted < self.read_retries =>
                {
                    interrupted += 1;
                    warn!(
                        "Interrupted read from input device (attempt {}/{}): {}",
                        interrupted, self.read_retries, err
                    );
                }
                Err(err) => return Err(EventError::Read(err)),
            }
        }
    }

    /// Capacity of one read in bytes.
    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{ScriptedSource, Step};
    use super::*;
    use crate::input::event::{ABS_X, EV_ABS, EV_SYN};
    use std::io;

    fn bytes(events: &[InputEvent]) -> Vec<u8> {
        events.iter().flat_map(|e| e.to_le_bytes()).collect()
    }

    #[test]
    fn skips_zero_byte_reads() {
        let batch = [InputEvent::new(EV_ABS, ABS_X, 5), InputEvent::new(EV_SYN, 0, 0)];
        let source = ScriptedSource::new([Step::Empty, Step::Empty, Step::Data(bytes(&batch))]);
        let mut reader = EventReader::new(source);

        let events = reader.next_batch().unwrap();
        assert_eq!(events, batch);
        assert_eq!(reader.source.reads, 3);
    }

    #[test]
    fn partial_read_is_fatal() {
        let mut data = bytes(&[InputEvent::new(EV_SYN, 0, 0)]);
        data.pop();
        let mut reader = EventReader::new(ScriptedSource::new([Step::Data(data)]));

        let err = reader.next_batch().unwrap_err();
        assert!(matches!(err, EventError::PartialRead { .. }));
    }

    #[test]
    fn read_error_is_fatal_by_default() {
        let mut reader = EventReader::new(ScriptedSource::new([
            Step::Fail(io::ErrorKind::Interrupted),
            Step::Data(bytes(&[InputEvent::new(EV_SYN, 0, 0)])),
        ]));

        match reader.next_batch() {
            Err(EventError::Read(err)) => assert_eq!(err.kind(), io::ErrorKind::Interrupted),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn interrupted_reads_retry_within_budget() {
        let batch = [InputEvent::new(EV_SYN, 0, 0)];
        let source = ScriptedSource::new([
            Step::Fail(io::ErrorKind::Interrupted),
            Step::Fail(io::ErrorKind::Interrupted),
            Step::Data(bytes(&batch)),
        ]);
        let mut reader = EventReader::with_options(source, 8, 2);

        assert_eq!(reader.next_batch().unwrap(), batch);
    }

    #[test]
    fn retries_do_not_cover_other_errors() {
        let source = ScriptedSource::new([Step::Fail(io::ErrorKind::PermissionDenied)]);
        let mut reader = EventReader::with_options(source, 8, 5);

        assert!(matches!(reader.next_batch(), Err(EventError::Read(_))));
    }

    #[test]
    fn buffer_holds_whole_records() {
        let reader = EventReader::with_options(io::empty(), 0, 0);
        assert_eq!(reader.buffer_len(), EVENT_SIZE);

        let reader = EventReader::new(io::empty());
        assert_eq!(reader.buffer_len(), DEFAULT_BATCH_SIZE * EVENT_SIZE);
    }
}
