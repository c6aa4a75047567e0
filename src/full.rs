//! Full decode: every instrument field, as a table of columns.
//!
//! Use this when the packet bookkeeping, temperatures, or raw timing words
//! matter; for routine time/pressure work prefer
//! [`decode_compact`](crate::decode_compact).

use std::path::Path;

use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{self, FRAME_LEN, NUM_PORTS, NUM_TEMPERATURES};
use crate::{Frame, Result};

/// Complete decode of a capture, one column per layout field.
///
/// Scalar columns have one entry per frame, in frame order. The two block
/// fields are stored transposed to match [`CompactScan`](crate::CompactScan):
/// `temperatures[[sensor, sample]]` (8 rows) and `pressures[[port, sample]]`
/// (64 rows), so per-channel slices are rows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScanTable {
    pub packet_type: Array1<i32>,
    pub packet_size: Array1<i32>,
    pub frame_number: Array1<i32>,
    pub scan_type: Array1<i32>,
    pub frame_rate: Array1<f32>,
    pub valve_status: Array1<i32>,
    pub units_index: Array1<i32>,
    pub unit_conversion_factor: Array1<f32>,
    pub ptp_scan_start_time_sec: Array1<i32>,
    pub ptp_scan_start_time_ns: Array1<i32>,
    pub external_trigger_time: Array1<u32>,
    pub temperatures: Array2<f32>,
    pub pressures: Array2<f32>,
    pub frame_time_sec: Array1<i32>,
    pub frame_time_ns: Array1<i32>,
    pub external_trigger_time_sec: Array1<i32>,
    pub external_trigger_time_ns: Array1<i32>,
}

impl ScanTable {
    fn zeroed(n: usize) -> Self {
        Self {
            packet_type: Array1::zeros(n),
            packet_size: Array1::zeros(n),
            frame_number: Array1::zeros(n),
            scan_type: Array1::zeros(n),
            frame_rate: Array1::zeros(n),
            valve_status: Array1::zeros(n),
            units_index: Array1::zeros(n),
            unit_conversion_factor: Array1::zeros(n),
            ptp_scan_start_time_sec: Array1::zeros(n),
            ptp_scan_start_time_ns: Array1::zeros(n),
            external_trigger_time: Array1::zeros(n),
            temperatures: Array2::zeros((NUM_TEMPERATURES, n)),
            pressures: Array2::zeros((NUM_PORTS, n)),
            frame_time_sec: Array1::zeros(n),
            frame_time_ns: Array1::zeros(n),
            external_trigger_time_sec: Array1::zeros(n),
            external_trigger_time_ns: Array1::zeros(n),
        }
    }

    fn set(&mut self, i: usize, frame: &Frame) {
        self.packet_type[i] = frame.packet_type;
        self.packet_size[i] = frame.packet_size;
        self.frame_number[i] = frame.frame_number;
        self.scan_type[i] = frame.scan_type;
        self.frame_rate[i] = frame.frame_rate;
        self.valve_status[i] = frame.valve_status;
        self.units_index[i] = frame.units_index;
        self.unit_conversion_factor[i] = frame.unit_conversion_factor;
        self.ptp_scan_start_time_sec[i] = frame.ptp_scan_start_time_sec;
        self.ptp_scan_start_time_ns[i] = frame.ptp_scan_start_time_ns;
        self.external_trigger_time[i] = frame.external_trigger_time;
        self.temperatures
            .column_mut(i)
            .assign(&ArrayView1::from(&frame.temperatures[..]));
        self.pressures
            .column_mut(i)
            .assign(&ArrayView1::from(&frame.pressures[..]));
        self.frame_time_sec[i] = frame.frame_time_sec;
        self.frame_time_ns[i] = frame.frame_time_ns;
        self.external_trigger_time_sec[i] = frame.external_trigger_time_sec;
        self.external_trigger_time_ns[i] = frame.external_trigger_time_ns;
    }

    /// Number of frames in the capture.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frame_number.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame_number.is_empty()
    }
}

/// Decode every field of every frame in a raw capture.
///
/// An empty buffer decodes to an empty table. Frame decodes are independent
/// and run in parallel, ordered by frame index.
///
/// # Errors
/// [`Error::Truncated`](crate::Error::Truncated) if `buf` is not a whole
/// number of frames. No partial result is produced.
pub fn decode_full(buf: &[u8]) -> Result<ScanTable> {
    let n = layout::frame_count(buf.len())?;
    debug!("decoding full view of {n} frames");

    let frames = buf
        .par_chunks_exact(FRAME_LEN)
        .map(Frame::decode)
        .collect::<Result<Vec<_>>>()?;

    let mut table = ScanTable::zeroed(n);
    for (i, frame) in frames.iter().enumerate() {
        table.set(i, frame);
    }
    Ok(table)
}

/// Read a capture file and decode every field.
///
/// # Errors
/// [`Error::Io`](crate::Error::Io) reading `path`, or any [`decode_full`]
/// error.
pub fn read_full<P: AsRef<Path>>(path: P) -> Result<ScanTable> {
    let dat = std::fs::read(&path)?;
    debug!("read {} bytes from {}", dat.len(), path.as_ref().display());
    decode_full(&dat)
}
