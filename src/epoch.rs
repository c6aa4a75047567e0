//! Capture reference epoch.
//!
//! The scanner stamps every frame with a scan start time, but all frames of a
//! capture share the same scan, so the first frame's
//! `PTP_scan_start_time_{sec,ns}` pair serves as the reference instant for the
//! whole file. It is read once per decode and added to each frame's relative
//! time words.

use crate::layout::offset;
use crate::{bytes, Result};

/// Read the reference epoch from the first frame of `buf`, in seconds.
///
/// # Errors
/// [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the buffer does not
/// reach the epoch words (fewer than 40 bytes).
pub fn resolve(buf: &[u8]) -> Result<f64> {
    let sec = bytes::read_i32(buf, offset::PTP_SCAN_START_TIME_SEC)?;
    let ns = bytes::read_i32(buf, offset::PTP_SCAN_START_TIME_NS)?;
    Ok(f64::from(sec) + f64::from(ns) * 1e-9)
}
