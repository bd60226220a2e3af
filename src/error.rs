//! Error Types
//!
//! Load-time failures are fatal; per-word failures never reach this type.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while building or querying a retriever
#[derive(Error, Debug)]
pub enum WordvecError {
    /// Vocabulary or vector file missing/unreadable
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Vocabulary line is not valid UTF-8
    #[error("invalid UTF-8 in {path} at line {line}: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: FromUtf8Error,
    },

    /// Vector file and vocabulary file are misaligned
    #[error("vocabulary has {vocab_len} words but vector file has {vector_lines} lines")]
    Consistency { vocab_len: usize, vector_lines: usize },

    /// Invalid construction parameter
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage failure while scanning the vector file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl WordvecError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for wordvec operations
pub type Result<T> = std::result::Result<T, WordvecError>;
