//! Indexing and ranking infrastructure for the engine.
//!
//! The engine is one owned aggregate:
//!
//! - **Document store**: id -> [`TokenizedDocument`], append-only
//! - **Inverted index**: token -> set of ids, membership only
//! - **Corpus statistics**: total tokens, document count, mean length
//!
//! Indexing a new id updates all three in a single `&mut self` call, so a
//! query can never observe one without the others. Queries borrow `&self`
//! and recompute term frequencies from the stored token sequences.
//!
//! Threading:
//! - [`Bm25Plus`] is `Send + Sync`; wrap it in
//!   [`SharedBm25Plus`](crate::shared::SharedBm25Plus) to index and query
//!   from several threads.

mod api;
mod postings;
mod scoring;
mod search;
mod stats;
mod types;

pub use postings::InvertedIndex;
pub use search::INLINE_QUERY_TERMS;
pub use stats::{CorpusStats, IndexStats};
pub use types::{Bm25Plus, EngineMetrics, TokenizedDocument, INITIAL_STORE_CAPACITY};
