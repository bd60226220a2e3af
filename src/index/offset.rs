//! Offset Index
//!
//! Byte offset of the start of every vector line, built in one streaming
//! pass without parsing vector contents.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::error::{Result, WordvecError};
use crate::vocab::WordId;

/// Line-start offsets into the vector file, indexed by word id
#[derive(Debug, Clone, Default)]
pub struct OffsetIndex {
    offsets: Vec<u64>,
}

impl OffsetIndex {
    /// Record the offset of at most `max_words` lines
    pub fn build(path: impl AsRef<Path>, max_words: usize) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Indexing vector file");

        let file = File::open(path).map_err(|e| WordvecError::load(path, e))?;
        let mut reader = BufReader::new(file);
        let mut offsets = Vec::new();
        let mut offset = 0u64;
        let mut buf = Vec::new();

        while offsets.len() < max_words {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| WordvecError::load(path, e))?;
            if read == 0 {
                break;
            }
            offsets.push(offset);
            offset += read as u64;
        }

        info!(lines = offsets.len(), bytes = offset, "Vector file indexed");
        Ok(Self { offsets })
    }

    /// Wrap precomputed offsets
    pub fn from_offsets(offsets: Vec<u64>) -> Self {
        Self { offsets }
    }

    /// Offset of the line holding `id`'s vector
    #[inline]
    pub fn offset(&self, id: WordId) -> Option<u64> {
        self.offsets.get(id).copied()
    }

    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Fail unless there is exactly one line per vocabulary entry
    pub fn check_aligned(&self, vocab_len: usize) -> Result<()> {
        if self.offsets.len() != vocab_len {
            return Err(WordvecError::Consistency {
                vocab_len,
                vector_lines: self.offsets.len(),
            });
        }
        Ok(())
    }
}
