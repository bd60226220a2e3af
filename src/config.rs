//! Retriever Configuration

use std::path::PathBuf;

use crate::error::{Result, WordvecError};

/// Construction parameters for a [`Retriever`](crate::Retriever)
#[derive(Debug, Clone)]
pub struct RetrieverConfig {
    /// Maximum number of cached vectors
    pub cache_capacity: usize,

    /// Vocabulary file, one word per line, most frequent first
    pub vocabulary_path: PathBuf,

    /// Vector file, one line per vocabulary entry
    pub vector_path: PathBuf,

    /// Length every returned vector must have
    pub expected_vector_length: usize,

    /// Load at most this many entries
    pub max_words: usize,

    /// Drop the leading label token of each vector line
    pub skip_first_column: bool,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            vocabulary_path: PathBuf::from("models/cbow/glove.840B.300d.vocab.txt"),
            vector_path: PathBuf::from("models/cbow/glove.840B.300d.txt"),
            expected_vector_length: 300,
            max_words: 1_000_000,
            skip_first_column: true,
        }
    }
}

impl RetrieverConfig {
    /// Create a config for the given vocabulary and vector files
    pub fn new(vocabulary_path: impl Into<PathBuf>, vector_path: impl Into<PathBuf>) -> Self {
        Self {
            vocabulary_path: vocabulary_path.into(),
            vector_path: vector_path.into(),
            ..Self::default()
        }
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_vocabulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_path = path.into();
        self
    }

    pub fn with_vector_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vector_path = path.into();
        self
    }

    pub fn with_expected_vector_length(mut self, len: usize) -> Self {
        self.expected_vector_length = len;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_skip_first_column(mut self, skip: bool) -> Self {
        self.skip_first_column = skip;
        self
    }

    /// Reject parameters no retriever can honor
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(WordvecError::Config(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.expected_vector_length == 0 {
            return Err(WordvecError::Config(
                "expected_vector_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
