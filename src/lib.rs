#![doc = include_str!("../README.md")]

mod bytes;
mod error;

pub mod compact;
pub mod epoch;
pub mod frame;
pub mod full;
pub mod layout;

pub use compact::{decode_compact, read_compact, CompactScan};
pub use error::{Error, Result};
pub use frame::Frame;
pub use full::{decode_full, read_full, ScanTable};
