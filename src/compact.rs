//! Compact decode: absolute sample times and the pressure matrix only.
//!
//! This is the view routine analysis wants. Each frame contributes its 64
//! pressure values and one timestamp; all the packet bookkeeping and
//! temperature words are skipped.

use std::path::Path;

use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{self, offset, NUM_PORTS};
use crate::{bytes, epoch, Result};

/// Time/pressure view of a capture.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompactScan {
    /// Absolute sample time per frame, seconds. `epoch + sec + ns * 1e-9`,
    /// where the epoch is the first frame's scan start time. Only useful for
    /// deltas between samples.
    pub time: Array1<f64>,
    /// Pressures in physical units, port-major: `pressures[[port, sample]]`,
    /// 64 rows by [`len`](Self::len) columns. Port order is the scanner's
    /// wiring order.
    pub pressures: Array2<f32>,
}

impl CompactScan {
    /// Number of frames in the capture.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Decode the time vector and pressure matrix from a raw capture.
///
/// An empty buffer decodes to empty outputs. Frames are independent, so the
/// per-frame work runs in parallel; results are ordered by frame index
/// regardless.
///
/// # Errors
/// [`Error::Truncated`](crate::Error::Truncated) if `buf` is not a whole
/// number of frames. No partial result is produced.
///
/// # Example
/// ```
/// let dat = vec![0u8; 2 * mps4264::layout::FRAME_LEN];
/// let scan = mps4264::decode_compact(&dat).unwrap();
/// assert_eq!(scan.len(), 2);
/// assert_eq!(scan.pressures.dim(), (64, 2));
/// ```
pub fn decode_compact(buf: &[u8]) -> Result<CompactScan> {
    let n = layout::frame_count(buf.len())?;
    debug!("decoding compact view of {n} frames");
    if n == 0 {
        return Ok(CompactScan {
            time: Array1::zeros(0),
            pressures: Array2::zeros((NUM_PORTS, 0)),
        });
    }

    // Reference instant, read once from frame 0 and shared by every frame.
    let epoch = epoch::resolve(buf)?;

    let decoded = (0..n)
        .into_par_iter()
        .map(|i| {
            let start = layout::frame_start(i);
            let ports = bytes::read_f32_array::<NUM_PORTS>(buf, start + offset::PRESSURES)?;
            let sec = bytes::read_i32(buf, start + offset::FRAME_TIME_SEC)?;
            let ns = bytes::read_i32(buf, start + offset::FRAME_TIME_NS)?;
            Ok((ports, epoch + f64::from(sec) + f64::from(ns) * 1e-9))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut time = Array1::<f64>::zeros(n);
    let mut pressures = Array2::<f32>::zeros((NUM_PORTS, n));
    for (i, (ports, t)) in decoded.into_iter().enumerate() {
        time[i] = t;
        pressures.column_mut(i).assign(&ArrayView1::from(&ports[..]));
    }

    Ok(CompactScan { time, pressures })
}

/// Read a capture file and decode its compact view.
///
/// # Errors
/// [`Error::Io`](crate::Error::Io) reading `path`, or any [`decode_compact`]
/// error.
pub fn read_compact<P: AsRef<Path>>(path: P) -> Result<CompactScan> {
    let dat = std::fs::read(&path)?;
    debug!(
        "read {} bytes from {}",
        dat.len(),
        path.as_ref().display()
    );
    decode_compact(&dat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FRAME_LEN;

    #[test]
    fn empty_capture() {
        let scan = decode_compact(&[]).unwrap();
        assert!(scan.is_empty());
        assert_eq!(scan.pressures.dim(), (NUM_PORTS, 0));
    }

    #[test]
    fn pressures_are_port_major() {
        // Two frames; port p of frame i holds 100*i + p.
        let mut dat = vec![0u8; 2 * FRAME_LEN];
        for i in 0..2 {
            for p in 0..NUM_PORTS {
                let at = i * FRAME_LEN + offset::PRESSURES + 4 * p;
                let v = (100 * i + p) as f32;
                dat[at..at + 4].copy_from_slice(&v.to_le_bytes());
            }
        }
        let scan = decode_compact(&dat).unwrap();
        assert_eq!(scan.pressures[[0, 0]], 0.0);
        assert_eq!(scan.pressures[[5, 0]], 5.0);
        assert_eq!(scan.pressures[[5, 1]], 105.0);
        assert_eq!(scan.pressures[[63, 1]], 163.0);
    }

    #[test]
    fn timestamps_offset_from_epoch() {
        let mut dat = vec![0u8; FRAME_LEN];
        dat[offset::PTP_SCAN_START_TIME_SEC..offset::PTP_SCAN_START_TIME_SEC + 4]
            .copy_from_slice(&10i32.to_le_bytes());
        dat[offset::FRAME_TIME_SEC..offset::FRAME_TIME_SEC + 4]
            .copy_from_slice(&2i32.to_le_bytes());
        dat[offset::FRAME_TIME_NS..offset::FRAME_TIME_NS + 4]
            .copy_from_slice(&250_000_000i32.to_le_bytes());
        let scan = decode_compact(&dat).unwrap();
        assert_eq!(scan.time[0], 12.25);
    }
}
