#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Capture length is not a whole number of frames.
    #[error("truncated capture: {len} bytes leaves {trailing} trailing bytes after the last whole frame")]
    Truncated { len: usize, trailing: usize },

    /// A field read would run past the end of the buffer.
    #[error("read of {len} bytes at offset {offset} exceeds buffer of {have} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        have: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
