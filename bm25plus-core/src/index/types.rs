//! Engine and document types.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::analyzer::tokenizer::Tokenizer;
use crate::index::postings::InvertedIndex;
use crate::index::stats::CorpusStats;
use bm25plus_types::{Bm25Params, DocId, Document, ParamsError};

use rustc_hash::FxHashMap;

/// Initial capacity of the document store.
pub const INITIAL_STORE_CAPACITY: usize = 1024;

/// A document together with its token sequence.
///
/// Created once at indexing time and never mutated afterwards. Equality
/// is the equality of the underlying [`Document`], never of the tokens.
#[derive(Debug, Clone)]
pub struct TokenizedDocument {
    document: Document,
    tokens: Vec<String>,
}

impl TokenizedDocument {
    /// Tokenizes `document`.
    pub fn from_document(document: Document) -> Self {
        let mut tokens = Vec::new();
        Tokenizer::new().tokenize_into(&document.text, &mut tokens);
        Self { document, tokens }
    }

    /// The source document.
    #[inline(always)]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The normalized tokens, in input order.
    #[inline(always)]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline(always)]
    pub fn id(&self) -> DocId {
        self.document.id
    }

    /// Document length in tokens.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Counts tokens exactly equal to `term`. Case-sensitive.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.tokens.iter().filter(|token| *token == term).count()
    }
}

impl PartialEq for TokenizedDocument {
    fn eq(&self, other: &Self) -> bool {
        self.document == other.document
    }
}

impl Eq for TokenizedDocument {}

/// In-memory BM25+ ranking engine.
///
/// Owns the document store, the inverted index and the running corpus
/// statistics. There is no global state: independent engines can coexist.
/// Queries take `&self` and never mutate the store, the index or the
/// statistics.
pub struct Bm25Plus {
    pub(crate) params: Bm25Params,
    pub(crate) store: FxHashMap<DocId, TokenizedDocument>,
    pub(crate) postings: InvertedIndex,
    pub(crate) corpus: CorpusStats,
    /// Indexing attempts ignored because the id was already present
    pub(crate) duplicates_skipped: u64,
    /// Total number of queries executed
    pub(crate) query_count: AtomicU64,
}

impl Default for Bm25Plus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bm25Plus {
    /// Creates a new, empty engine with the default BM25+ parameters.
    pub fn new() -> Self {
        Self::with_params(Bm25Params::default())
    }

    /// Creates a new engine with custom parameters.
    ///
    /// Parameters are not validated; see [`Bm25Plus::try_with_params`].
    pub fn with_params(params: Bm25Params) -> Self {
        let mut store = FxHashMap::default();
        store.reserve(INITIAL_STORE_CAPACITY);
        Self {
            params,
            store,
            postings: InvertedIndex::new(),
            corpus: CorpusStats::default(),
            duplicates_skipped: 0,
            query_count: AtomicU64::new(0),
        }
    }

    /// Creates a new engine after validating `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamsError`] reported by [`Bm25Params::validate`].
    pub fn try_with_params(params: Bm25Params) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self::with_params(params))
    }

    /// The tuning parameters this engine scores with.
    #[inline(always)]
    pub fn params(&self) -> &Bm25Params {
        &self.params
    }

    /// Returns the number of distinct documents in the index.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the index contains no documents.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the number of distinct documents in the index.
    #[inline(always)]
    #[must_use]
    pub fn index_size(&self) -> usize {
        self.len()
    }

    /// Running corpus statistics.
    #[inline(always)]
    pub fn corpus(&self) -> &CorpusStats {
        &self.corpus
    }

    /// The inverted index.
    #[inline(always)]
    pub fn postings(&self) -> &InvertedIndex {
        &self.postings
    }

    /// Returns basic metrics about the engine's operation.
    #[must_use]
    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            documents_indexed: self.store.len() as u64,
            duplicates_skipped: self.duplicates_skipped,
            queries_executed: self.query_count.load(Ordering::Relaxed),
        }
    }

    #[inline(always)]
    pub(crate) fn count_query(&self) {
        self.query_count.fetch_add(1, Ordering::Relaxed);
    }
}

/// Basic operational metrics for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMetrics {
    /// Number of distinct documents indexed.
    pub documents_indexed: u64,
    /// Number of `index` calls ignored because the id was already known.
    pub duplicates_skipped: u64,
    /// Total number of term, terms and free-text queries executed.
    pub queries_executed: u64,
}
