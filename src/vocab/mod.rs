//! Vocabulary Module
//!
//! Frequency-ranked word list with word <-> id lookup.

mod vocabulary;

pub use vocabulary::{Vocabulary, WordId};
