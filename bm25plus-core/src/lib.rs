//! In-memory full-text ranking engine scored with BM25+.
//!
//! Documents are tokenized, stored, and registered in an inverted index;
//! term and multi-term queries return documents ordered by their BM25+
//! relevance.
//!
//! ```
//! use bm25plus_core::{Bm25Plus, Document};
//!
//! let mut engine = Bm25Plus::new();
//! engine.index_all([
//!     Document::new(1, "Ana are mere"),
//!     Document::new(2, "Ana Ana Ana Ana Ana Ana Ana Ana"),
//! ]);
//!
//! let hits = engine.term_query("Ana");
//! assert_eq!(hits[0].document.id, 2);
//! assert!(engine.term_query("batman").is_empty());
//! ```

pub mod analyzer;
pub mod index;
pub mod shared;

pub use bm25plus_types::{Bm25Params, DocId, Document, ParamsError, ScoredDocument};
pub use index::{Bm25Plus, CorpusStats, EngineMetrics, IndexStats, TokenizedDocument};
pub use shared::SharedBm25Plus;
