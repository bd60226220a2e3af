//! Shared Retriever Handle
//!
//! One mutex around the whole retriever: the FIFO order and the file
//! cursor are only ever touched by a single `resolve` at a time.

use parking_lot::Mutex;
use std::io;
use std::panic;
use std::sync::Arc;
use tokio::task::JoinError;

use super::engine::Retriever;
use crate::config::RetrieverConfig;
use crate::error::{Result, WordvecError};
use crate::vector::Embedding;

/// Cloneable, thread-safe access to a [`Retriever`]
#[derive(Clone)]
pub struct RetrieverHandle {
    inner: Arc<Mutex<Retriever>>,
}

impl RetrieverHandle {
    pub fn new(retriever: Retriever) -> Self {
        Self {
            inner: Arc::new(Mutex::new(retriever)),
        }
    }

    /// Open a retriever and wrap it
    pub fn open(config: RetrieverConfig) -> Result<Self> {
        Retriever::open(config).map(Self::new)
    }

    /// Blocking resolve, serialized with every other caller
    pub fn resolve<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Option<Embedding>>> {
        self.inner.lock().resolve(words)
    }

    /// Resolve on the blocking thread pool
    ///
    /// A panic inside the blocking task is resumed on the caller.
    pub async fn resolve_async(&self, words: Vec<String>) -> Result<Vec<Option<Embedding>>> {
        let inner = Arc::clone(&self.inner);
        let task = tokio::task::spawn_blocking(move || {
            let mut retriever = inner.lock();
            retriever.resolve(&words)
        });

        finish_blocking(task.await)
    }

    pub fn similarity(&self, a: &str, b: &str) -> Result<Option<f64>> {
        self.inner.lock().similarity(a, b)
    }

    /// Run `f` with exclusive access to the retriever
    pub fn with<R>(&self, f: impl FnOnce(&mut Retriever) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

/// Unwrap a joined blocking task, resuming its panic on the caller
fn finish_blocking<T>(joined: std::result::Result<Result<T>, JoinError>) -> Result<T> {
    match joined {
        Ok(result) => result,
        Err(e) if e.is_panic() => panic::resume_unwind(e.into_panic()),
        Err(e) => Err(WordvecError::Io(io::Error::other(e))),
    }
}
