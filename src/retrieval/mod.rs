//! Retrieval Module
//!
//! Cache-first word vector lookup with batched disk reads.

mod engine;
mod handle;

pub use engine::Retriever;
pub use handle::RetrieverHandle;
