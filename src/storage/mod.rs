//! Storage Engine
//!
//! Bounded in-memory cache for parsed vectors.

mod eviction;

pub use eviction::FifoCache;
