//! Vector Module
//!
//! Vector-line parsing and similarity between word vectors.

mod parse;
mod similarity;

pub use parse::{parse_vector_line, random_vector, Embedding, ROUND_DIGITS};
pub use similarity::{cosine_similarity, dot_product, magnitude};
