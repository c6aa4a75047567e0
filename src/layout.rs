//! Fixed wire layout of one MPS4264 scan frame.
//!
//! A capture file is a plain sequence of 348-byte frames, no header or footer.
//! Every field offset below is relative to the start of a frame and fixed by
//! the instrument firmware. Both decode paths read through this table so the
//! layout lives in exactly one place.

use crate::{Error, Result};

/// Bytes per frame (87 four-byte words).
pub const FRAME_LEN: usize = 348;
/// Four-byte words per frame.
pub const WORDS_PER_FRAME: usize = 87;
/// Physical pressure ports on the scanner.
pub const NUM_PORTS: usize = 64;
/// On-board temperature sensors.
pub const NUM_TEMPERATURES: usize = 8;

/// Byte offsets of each field relative to the frame start.
pub mod offset {
    pub const PACKET_TYPE: usize = 0;
    pub const PACKET_SIZE: usize = 4;
    pub const FRAME_NUMBER: usize = 8;
    pub const SCAN_TYPE: usize = 12;
    pub const FRAME_RATE: usize = 16;
    pub const VALVE_STATUS: usize = 20;
    pub const UNITS_INDEX: usize = 24;
    pub const UNIT_CONVERSION_FACTOR: usize = 28;
    pub const PTP_SCAN_START_TIME_SEC: usize = 32;
    pub const PTP_SCAN_START_TIME_NS: usize = 36;
    pub const EXTERNAL_TRIGGER_TIME: usize = 40;
    pub const TEMPERATURES: usize = 44;
    pub const PRESSURES: usize = 76;
    pub const FRAME_TIME_SEC: usize = 332;
    pub const FRAME_TIME_NS: usize = 336;
    pub const EXTERNAL_TRIGGER_TIME_SEC: usize = 340;
    pub const EXTERNAL_TRIGGER_TIME_NS: usize = 344;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    I32,
    U32,
    F32,
}

/// One entry in the frame layout table.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    /// Byte offset relative to the frame start.
    pub offset: usize,
    pub kind: FieldKind,
    /// Number of consecutive values of `kind`; 1 for scalars.
    pub count: usize,
}

impl Field {
    /// Total width of the field in bytes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.count * 4
    }
}

/// Complete frame layout, in wire order. Covers all 348 bytes with no gaps.
pub const FIELDS: &[Field] = &[
    Field { name: "packet_type", offset: offset::PACKET_TYPE, kind: FieldKind::I32, count: 1 },
    Field { name: "packet_size", offset: offset::PACKET_SIZE, kind: FieldKind::I32, count: 1 },
    Field { name: "frame_number", offset: offset::FRAME_NUMBER, kind: FieldKind::I32, count: 1 },
    Field { name: "scan_type", offset: offset::SCAN_TYPE, kind: FieldKind::I32, count: 1 },
    Field { name: "frame_rate", offset: offset::FRAME_RATE, kind: FieldKind::F32, count: 1 },
    Field { name: "valve_status", offset: offset::VALVE_STATUS, kind: FieldKind::I32, count: 1 },
    Field { name: "units_index", offset: offset::UNITS_INDEX, kind: FieldKind::I32, count: 1 },
    Field { name: "unit_conversion_factor", offset: offset::UNIT_CONVERSION_FACTOR, kind: FieldKind::F32, count: 1 },
    Field { name: "PTP_scan_start_time_sec", offset: offset::PTP_SCAN_START_TIME_SEC, kind: FieldKind::I32, count: 1 },
    Field { name: "PTP_scan_start_time_ns", offset: offset::PTP_SCAN_START_TIME_NS, kind: FieldKind::I32, count: 1 },
    Field { name: "external_trigger_time", offset: offset::EXTERNAL_TRIGGER_TIME, kind: FieldKind::U32, count: 1 },
    Field { name: "temperatures", offset: offset::TEMPERATURES, kind: FieldKind::F32, count: NUM_TEMPERATURES },
    Field { name: "pressures", offset: offset::PRESSURES, kind: FieldKind::F32, count: NUM_PORTS },
    Field { name: "frame_time_sec", offset: offset::FRAME_TIME_SEC, kind: FieldKind::I32, count: 1 },
    Field { name: "frame_time_ns", offset: offset::FRAME_TIME_NS, kind: FieldKind::I32, count: 1 },
    Field { name: "external_trigger_time_sec", offset: offset::EXTERNAL_TRIGGER_TIME_SEC, kind: FieldKind::I32, count: 1 },
    Field { name: "external_trigger_time_ns", offset: offset::EXTERNAL_TRIGGER_TIME_NS, kind: FieldKind::I32, count: 1 },
];

/// Byte offset of frame `i` within a capture.
#[must_use]
pub fn frame_start(i: usize) -> usize {
    i * FRAME_LEN
}

/// Number of whole frames in a capture of `len` bytes.
///
/// # Errors
/// [`Error::Truncated`] if `len` is not a multiple of [`FRAME_LEN`]; a partial
/// trailing frame means the capture was cut short or is corrupt, and nothing
/// is decoded from it.
pub fn frame_count(len: usize) -> Result<usize> {
    let trailing = len % FRAME_LEN;
    if trailing != 0 {
        return Err(Error::Truncated { len, trailing });
    }
    Ok(len / FRAME_LEN)
}
