use mps4264::layout::{offset, FRAME_LEN, NUM_PORTS};

/// Builds one synthetic 348-byte frame, field by field.
pub struct FrameBuilder {
    dat: Vec<u8>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            dat: vec![0u8; FRAME_LEN],
        }
    }

    pub fn i32_at(mut self, offset: usize, v: i32) -> Self {
        self.dat[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32_at(mut self, offset: usize, v: f32) -> Self {
        self.dat[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
        self
    }

    pub fn frame_number(self, v: i32) -> Self {
        self.i32_at(offset::FRAME_NUMBER, v)
    }

    pub fn ptp_start(self, sec: i32, ns: i32) -> Self {
        self.i32_at(offset::PTP_SCAN_START_TIME_SEC, sec)
            .i32_at(offset::PTP_SCAN_START_TIME_NS, ns)
    }

    pub fn frame_time(self, sec: i32, ns: i32) -> Self {
        self.i32_at(offset::FRAME_TIME_SEC, sec)
            .i32_at(offset::FRAME_TIME_NS, ns)
    }

    pub fn all_pressures(mut self, v: f32) -> Self {
        for p in 0..NUM_PORTS {
            self = self.f32_at(offset::PRESSURES + 4 * p, v);
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.dat
    }
}

/// Concatenate frames into one capture buffer.
pub fn capture(frames: &[Vec<u8>]) -> Vec<u8> {
    frames.iter().flatten().copied().collect()
}
