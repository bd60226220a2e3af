//! Index Module
//!
//! Byte-offset index over the vector file.

mod offset;

pub use offset::OffsetIndex;
