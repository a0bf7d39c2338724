//! Kernel `struct input_event` records and their little-endian decoding.

use super::error::EventError;

/// Synchronization marker closing a batch of state changes.
pub const EV_SYN: u16 = 0x00;
/// Key or button state change.
pub const EV_KEY: u16 = 0x01;
/// Absolute axis report.
pub const EV_ABS: u16 = 0x03;

/// Absolute X axis.
pub const ABS_X: u16 = 0x00;
/// Absolute Y axis.
pub const ABS_Y: u16 = 0x01;
/// Touch contact button.
pub const BTN_TOUCH: u16 = 0x14a;

/// Width of each `timeval` field (one C `long` on the target ABI).
pub const TIME_FIELD_SIZE: usize = std::mem::size_of::<libc::c_long>();

/// Size of one encoded event record: two time fields, type, code and value.
pub const EVENT_SIZE: usize = 2 * TIME_FIELD_SIZE + 2 + 2 + 4;

/// Event timestamp as delivered by the kernel. Decoded but otherwise unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeVal {
    pub seconds: i64,
    pub microseconds: i64,
}

/// One decoded input event record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEvent {
    pub time: TimeVal,
    pub event_type: u16,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    /// Creates an event with a zero timestamp.
    pub fn new(event_type: u16, code: u16, value: i32) -> Self {
        Self {
            time: TimeVal::default(),
            event_type,
            code,
            value,
        }
    }

    /// Reinterprets one record-sized span as an event.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, EventError> {
        if bytes.len() != EVENT_SIZE {
            return Err(EventError::Malformed(format!(
                "expected {EVENT_SIZE} bytes, got {}",
                bytes.len()
            )));
        }

        let mut fields = Fields { bytes, pos: 0 };
        let seconds = fields.long()?;
        let microseconds = fields.long()?;
        let event_type = u16::from_le_bytes(fields.array()?);
        let code = u16::from_le_bytes(fields.array()?);
        let value = i32::from_le_bytes(fields.array()?);

        Ok(Self {
            time: TimeVal {
                seconds,
                microseconds,
            },
            event_type,
            code,
            value,
        })
    }

    /// Encodes the event in the kernel record layout.
    #[cfg(test)]
    pub(crate) fn to_le_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(EVENT_SIZE);
        if TIME_FIELD_SIZE == 8 {
            out.extend_from_slice(&self.time.seconds.to_le_bytes());
            out.extend_from_slice(&self.time.microseconds.to_le_bytes());
        } else {
            out.extend_from_slice(&(self.time.seconds as i32).to_le_bytes());
            out.extend_from_slice(&(self.time.microseconds as i32).to_le_bytes());
        }
        out.extend_from_slice(&self.event_type.to_le_bytes());
        out.extend_from_slice(&self.code.to_le_bytes());
        out.extend_from_slice(&self.value.to_le_bytes());
        out
    }
}

/// Sequential field cursor over a single record.
struct Fields<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Fields<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], EventError> {
        let span = self
            .bytes
            .get(self.pos..self.pos + len)
            .ok_or_else(|| EventError::Malformed(format!("record truncated at byte {}", self.pos)))?;
        self.pos += len;
        Ok(span)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], EventError> {
        let span = self.take(N)?;
        span.try_into()
            .map_err(|_| EventError::Malformed(format!("field of {N} bytes out of range")))
    }

    fn long(&mut self) -> Result<i64, EventError> {
        match TIME_FIELD_SIZE {
            8 => Ok(i64::from_le_bytes(self.array()?)),
            4 => Ok(i64::from(i32::from_le_bytes(self.array()?))),
            other => Err(EventError::Malformed(format!(
                "unsupported time field width {other}"
            ))),
        }
    }
}

/// Splits a record-aligned buffer into events.
///
/// The whole buffer is rejected when its length is not a multiple of
/// [`EVENT_SIZE`]; partial records are never truncated or padded.
pub fn decode_events(buf: &[u8]) -> Result<Vec<InputEvent>, EventError> {
    if buf.len() % EVENT_SIZE != 0 {
        return Err(EventError::PartialRead {
            len: buf.len(),
            record_size: EVENT_SIZE,
        });
    }

    buf.chunks_exact(EVENT_SIZE)
        .map(InputEvent::from_le_bytes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_size_matches_kernel_layout() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(EVENT_SIZE, 24);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(EVENT_SIZE, 16);
    }

    #[test]
    fn decodes_fields_in_declaration_order() {
        let mut bytes = vec![0u8; 2 * TIME_FIELD_SIZE];
        bytes[0] = 0x2a;
        bytes[TIME_FIELD_SIZE] = 0x07;
        bytes.extend_from_slice(&[0x03, 0x00]);
        bytes.extend_from_slice(&[0x4a, 0x01]);
        bytes.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);

        let events = decode_events(&bytes).expect("aligned buffer decodes");
        assert_eq!(events.len(), 1);
        let event = events[0];
        assert_eq!(event.time.seconds, 42);
        assert_eq!(event.time.microseconds, 7);
        assert_eq!(event.event_type, EV_ABS);
        assert_eq!(event.code, BTN_TOUCH);
        assert_eq!(event.value, -1);
    }

    #[test]
    fn decodes_one_event_per_record() {
        let input = [
            InputEvent::new(EV_ABS, ABS_X, 100),
            InputEvent::new(EV_ABS, ABS_Y, 200),
            InputEvent::new(EV_KEY, BTN_TOUCH, 1),
            InputEvent::new(EV_SYN, 0, 0),
        ];
        let bytes: Vec<u8> = input.iter().flat_map(|e| e.to_le_bytes()).collect();
        assert_eq!(bytes.len(), 4 * EVENT_SIZE);

        let events = decode_events(&bytes).unwrap();
        assert_eq!(events, input);
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        assert!(decode_events(&[]).unwrap().is_empty());
    }

    #[test]
    fn rejects_partial_record() {
        let mut bytes = InputEvent::new(EV_SYN, 0, 0).to_le_bytes();
        bytes.extend_from_slice(&[0u8; 5]);

        match decode_events(&bytes) {
            Err(EventError::PartialRead { len, record_size }) => {
                assert_eq!(len, EVENT_SIZE + 5);
                assert_eq!(record_size, EVENT_SIZE);
            }
            other => panic!("expected partial read, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_single_span() {
        let err = InputEvent::from_le_bytes(&[0u8; 3]).unwrap_err();
        assert!(matches!(err, EventError::Malformed(_)));
    }
}
