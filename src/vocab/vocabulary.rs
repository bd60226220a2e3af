//! Vocabulary Map
//!
//! Immutable after load. Ids are dense, zero-based ranks in file order.

use hashbrown::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::{Result, WordvecError};

/// Zero-based position of a word in the vocabulary
pub type WordId = usize;

/// Ordered vocabulary with reverse lookup
///
/// Each word is allocated once and shared between both directions.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// id -> word (rank order)
    words: Vec<Arc<str>>,
    /// word -> id
    ids: HashMap<Arc<str>, WordId>,
}

impl Vocabulary {
    /// Load at most `max_words` lines from a vocabulary file
    pub fn load(path: impl AsRef<Path>, max_words: usize) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading vocabulary");

        let file = File::open(path).map_err(|e| WordvecError::load(path, e))?;
        let mut reader = BufReader::new(file);
        let mut words = Vec::new();
        let mut buf = Vec::new();

        while words.len() < max_words {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| WordvecError::load(path, e))?;
            if read == 0 {
                break;
            }

            let trimmed = buf.trim_ascii_end().to_vec();
            let word = String::from_utf8(trimmed).map_err(|source| WordvecError::Decode {
                path: path.to_path_buf(),
                line: words.len() + 1,
                source,
            })?;
            words.push(Arc::<str>::from(word));
        }

        let vocab = Self::from_words(words);
        info!(size = vocab.len(), "Vocabulary loaded");
        Ok(vocab)
    }

    /// Build from an already ordered word list
    ///
    /// The first occurrence of a duplicated word owns its id.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let words: Vec<Arc<str>> = words.into_iter().map(Into::into).collect();
        let mut ids = HashMap::with_capacity(words.len());
        for (id, word) in words.iter().enumerate() {
            ids.entry(Arc::clone(word)).or_insert(id);
        }
        Self { words, ids }
    }

    /// Resolve a word to its id
    #[inline]
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Resolve an id to its word
    #[inline]
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(|w| &**w)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Words in rank order
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
