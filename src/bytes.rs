//! Little-endian primitive reads from a raw capture buffer.
//!
//! The scanner writes in the byte order of its capture host, which is
//! little-endian. Every read is bounds-checked against the buffer; a failed
//! check is fatal to the whole decode since it means the layout math is wrong
//! or the file is corrupt.

use crate::{Error, Result};

fn checked(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(&buf[offset..end]),
        _ => Err(Error::OutOfBounds {
            offset,
            len,
            have: buf.len(),
        }),
    }
}

pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32> {
    let b = checked(buf, offset, 4)?;
    Ok(i32::from_le_bytes(b.try_into().expect("length checked")))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32> {
    let b = checked(buf, offset, 4)?;
    Ok(u32::from_le_bytes(b.try_into().expect("length checked")))
}

pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32> {
    let b = checked(buf, offset, 4)?;
    Ok(f32::from_le_bytes(b.try_into().expect("length checked")))
}

/// Read `N` contiguous little-endian f32 values starting at `offset`.
pub fn read_f32_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[f32; N]> {
    let b = checked(buf, offset, N * 4)?;
    let mut out = [0f32; N];
    for (v, chunk) in out.iter_mut().zip(b.chunks_exact(4)) {
        *v = f32::from_le_bytes(chunk.try_into().expect("chunks_exact(4)"));
    }
    Ok(out)
}
