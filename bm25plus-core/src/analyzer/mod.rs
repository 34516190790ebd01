//! Text analysis pipeline.
//!
//! Analysis is deliberately naive: documents are split on ASCII spaces,
//! stripped to letters and digits, and lowercased. Query terms only go
//! through [`normalize_term`] (lowercasing), so the index and the query side
//! agree on case but query terms are never stripped of punctuation.

pub mod tokenizer;

pub use tokenizer::{normalize_term, tokenize, Tokenizer};
