//! A single decoded scan frame.

use serde::{Deserialize, Serialize};

use crate::layout::{self, offset, NUM_PORTS, NUM_TEMPERATURES};
use crate::{bytes, Result};

/// One 348-byte scan frame with every field the instrument records.
///
/// A frame is one sampling instant across all 64 ports: packet bookkeeping,
/// the scan start time stamped by PTP, 8 on-board temperatures, the 64
/// converted pressures, and the trailing frame/trigger time words.
///
/// # Example
/// Decode a frame from raw bytes (here all zero):
/// ```
/// use mps4264::{layout, Frame};
///
/// let dat = vec![0u8; layout::FRAME_LEN];
/// let frame = Frame::decode(&dat).unwrap();
/// assert_eq!(frame.frame_number, 0);
/// assert_eq!(frame.pressures.len(), 64);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub packet_type: i32,
    pub packet_size: i32,
    pub frame_number: i32,
    pub scan_type: i32,
    pub frame_rate: f32,
    pub valve_status: i32,
    pub units_index: i32,
    pub unit_conversion_factor: f32,
    pub ptp_scan_start_time_sec: i32,
    pub ptp_scan_start_time_ns: i32,
    pub external_trigger_time: u32,
    /// On-board temperature sensors, sensor order.
    pub temperatures: [f32; NUM_TEMPERATURES],
    /// Converted pressures, physical port order.
    pub pressures: Vec<f32>,
    pub frame_time_sec: i32,
    pub frame_time_ns: i32,
    pub external_trigger_time_sec: i32,
    pub external_trigger_time_ns: i32,
}

impl Frame {
    /// Size of an encoded ``Frame``
    pub const LEN: usize = layout::FRAME_LEN;

    /// Decode one frame from the first [`Frame::LEN`] bytes of `dat`.
    ///
    /// Every field offset comes from the layout table
    /// ([`layout::offset`]), never from a running cursor, so a width
    /// mistake in one field cannot shift the fields after it.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) if `dat` is shorter
    /// than one frame.
    pub fn decode(dat: &[u8]) -> Result<Frame> {
        Ok(Frame {
            packet_type: bytes::read_i32(dat, offset::PACKET_TYPE)?,
            packet_size: bytes::read_i32(dat, offset::PACKET_SIZE)?,
            frame_number: bytes::read_i32(dat, offset::FRAME_NUMBER)?,
            scan_type: bytes::read_i32(dat, offset::SCAN_TYPE)?,
            frame_rate: bytes::read_f32(dat, offset::FRAME_RATE)?,
            valve_status: bytes::read_i32(dat, offset::VALVE_STATUS)?,
            units_index: bytes::read_i32(dat, offset::UNITS_INDEX)?,
            unit_conversion_factor: bytes::read_f32(dat, offset::UNIT_CONVERSION_FACTOR)?,
            ptp_scan_start_time_sec: bytes::read_i32(dat, offset::PTP_SCAN_START_TIME_SEC)?,
            ptp_scan_start_time_ns: bytes::read_i32(dat, offset::PTP_SCAN_START_TIME_NS)?,
            external_trigger_time: bytes::read_u32(dat, offset::EXTERNAL_TRIGGER_TIME)?,
            temperatures: bytes::read_f32_array::<NUM_TEMPERATURES>(dat, offset::TEMPERATURES)?,
            pressures: bytes::read_f32_array::<NUM_PORTS>(dat, offset::PRESSURES)?.to_vec(),
            frame_time_sec: bytes::read_i32(dat, offset::FRAME_TIME_SEC)?,
            frame_time_ns: bytes::read_i32(dat, offset::FRAME_TIME_NS)?,
            external_trigger_time_sec: bytes::read_i32(dat, offset::EXTERNAL_TRIGGER_TIME_SEC)?,
            external_trigger_time_ns: bytes::read_i32(dat, offset::EXTERNAL_TRIGGER_TIME_NS)?,
        })
    }
}
