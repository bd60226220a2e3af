//! Vector Similarity
//!
//! Comparisons between looked-up word vectors.

/// Dot product of two equal-length vectors
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm
#[inline]
pub fn magnitude(v: &[f64]) -> f64 {
    dot_product(v, v).sqrt()
}

/// Cosine similarity in [-1, 1]; 0.0 when either vector has zero magnitude
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let denom = magnitude(a) * magnitude(b);
    if denom > 0.0 {
        dot_product(a, b) / denom
    } else {
        0.0
    }
}
