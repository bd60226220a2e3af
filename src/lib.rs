//! WORDVEC - Disk-Backed Word Embedding Lookup
//!
//! Resolves words to pre-trained vectors without loading the vector table
//! into memory: a byte-offset index locates each line on disk and a bounded
//! FIFO cache keeps recently read vectors.

pub mod config;
pub mod error;
pub mod index;
pub mod metrics;
pub mod retrieval;
pub mod storage;
pub mod vector;
pub mod vocab;

pub use config::RetrieverConfig;
pub use error::{Result, WordvecError};
pub use index::OffsetIndex;
pub use metrics::LookupMetrics;
pub use retrieval::{Retriever, RetrieverHandle};
pub use storage::FifoCache;
pub use vector::{cosine_similarity, Embedding};
pub use vocab::{Vocabulary, WordId};
