//! Retrieval Engine
//!
//! Resolves word sequences to vectors: cache first, then one batched pass
//! over the vector file for every miss.

use hashbrown::HashSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::RetrieverConfig;
use crate::error::{Result, WordvecError};
use crate::index::OffsetIndex;
use crate::metrics::LookupMetrics;
use crate::storage::FifoCache;
use crate::vector::{cosine_similarity, parse_vector_line, random_vector, Embedding};
use crate::vocab::{Vocabulary, WordId};

/// Word -> vector resolver over an on-disk vector file
#[derive(Debug)]
pub struct Retriever {
    config: RetrieverConfig,
    vocabulary: Vocabulary,
    index: OffsetIndex,
    cache: FifoCache<WordId, Embedding>,
    metrics: LookupMetrics,
    /// Source of substitution vectors
    rng: StdRng,
}

impl Retriever {
    /// Load vocabulary, index the vector file and create an empty cache
    pub fn open(config: RetrieverConfig) -> Result<Self> {
        config.validate()?;
        let vocabulary = Vocabulary::load(&config.vocabulary_path, config.max_words)?;
        let index = OffsetIndex::build(&config.vector_path, config.max_words)?;
        Self::from_parts(config, vocabulary, index)
    }

    /// Assemble from separately loaded pieces
    ///
    /// Fails with [`WordvecError::Consistency`] unless the index has exactly
    /// one line per vocabulary entry.
    pub fn from_parts(
        config: RetrieverConfig,
        vocabulary: Vocabulary,
        index: OffsetIndex,
    ) -> Result<Self> {
        config.validate()?;
        index.check_aligned(vocabulary.len())?;

        let capacity = NonZeroUsize::new(config.cache_capacity).ok_or_else(|| {
            WordvecError::Config("cache_capacity must be at least 1".to_string())
        })?;

        info!(
            vocab = vocabulary.len(),
            cache_capacity = capacity.get(),
            dim = config.expected_vector_length,
            "Retriever ready"
        );

        Ok(Self {
            vocabulary,
            index,
            cache: FifoCache::new(capacity),
            metrics: LookupMetrics::new(),
            rng: StdRng::from_entropy(),
            config,
        })
    }

    /// Seed the generator used for substituted vectors
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Resolve each word to its vector, preserving order and duplicates
    ///
    /// Unknown words yield `None`. Positions sharing a word share one
    /// `Embedding`, read from disk at most once per call. Misses are read in
    /// ascending id order.
    pub fn resolve<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Vec<Option<Embedding>>> {
        let start = Instant::now();
        let mut result: Vec<Option<Embedding>> = vec![None; words.len()];

        // miss id -> result positions
        let mut pending: BTreeMap<WordId, Vec<usize>> = BTreeMap::new();
        let mut hit_ids = HashSet::new();
        let mut oov = 0u64;

        for (pos, word) in words.iter().enumerate() {
            let Some(id) = self.vocabulary.id(word.as_ref()) else {
                oov += 1;
                continue;
            };
            match self.cache.get(&id) {
                Some(vector) => {
                    result[pos] = Some(Arc::clone(vector));
                    hit_ids.insert(id);
                }
                None => pending.entry(id).or_default().push(pos),
            }
        }

        self.metrics.record_hits(hit_ids.len() as u64);
        self.metrics.record_misses(pending.len() as u64);
        self.metrics.record_out_of_vocabulary(oov);

        let misses = pending.len();
        if !pending.is_empty() {
            self.read_pending(pending, &mut result)?;
        }

        let elapsed = start.elapsed();
        self.metrics.record_resolve(elapsed);
        debug!(
            words = words.len(),
            hits = hit_ids.len(),
            misses,
            oov,
            latency = ?elapsed,
            "Resolved"
        );

        Ok(result)
    }

    /// Read every pending id from disk, cache it and fill its positions
    fn read_pending(
        &mut self,
        pending: BTreeMap<WordId, Vec<usize>>,
        result: &mut [Option<Embedding>],
    ) -> Result<()> {
        let expected = self.config.expected_vector_length;
        let mut reader = BufReader::new(File::open(&self.config.vector_path)?);
        let mut line = Vec::new();

        for (id, positions) in pending {
            let offset = self.index.offset(id).ok_or(WordvecError::Consistency {
                vocab_len: self.vocabulary.len(),
                vector_lines: self.index.len(),
            })?;

            reader.seek(SeekFrom::Start(offset))?;
            line.clear();
            reader.read_until(b'\n', &mut line)?;
            self.metrics.record_disk_read();

            let vector = match parse_vector_line(&line, self.config.skip_first_column) {
                Some(v) if v.len() == expected => v,
                parsed => {
                    warn!(
                        id,
                        word = self.vocabulary.word(id).unwrap_or_default(),
                        parsed_len = parsed.map(|v| v.len()),
                        expected,
                        "Malformed vector line, substituting random vector"
                    );
                    self.metrics.record_substitution();
                    random_vector(expected, &mut self.rng)
                }
            };

            let embedding: Embedding = Arc::from(vector);
            self.cache.put(id, Arc::clone(&embedding));
            for pos in positions {
                result[pos] = Some(Arc::clone(&embedding));
            }
        }

        Ok(())
    }

    /// Resolve a single word
    pub fn resolve_one(&mut self, word: &str) -> Result<Option<Embedding>> {
        Ok(self.resolve(&[word])?.pop().flatten())
    }

    /// Cosine similarity of two words, `None` if either is unknown
    pub fn similarity(&mut self, a: &str, b: &str) -> Result<Option<f64>> {
        let vectors = self.resolve(&[a, b])?;
        Ok(match (&vectors[0], &vectors[1]) {
            (Some(x), Some(y)) => Some(cosine_similarity(x, y)),
            _ => None,
        })
    }

    /// Drop all cached vectors
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn offset_index(&self) -> &OffsetIndex {
        &self.index
    }

    pub fn cache(&self) -> &FifoCache<WordId, Embedding> {
        &self.cache
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}
