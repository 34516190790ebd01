//! Thread-safe engine handle.
//!
//! Indexing takes the write lock for the whole `index()` call (store insert,
//! statistics update and index registration), and queries take the read
//! lock. A query therefore never sees a mean document length that is out of
//! step with the postings it scores against.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::index::{Bm25Plus, EngineMetrics, IndexStats};
use bm25plus_types::{Bm25Params, Document, ScoredDocument};

/// Cloneable handle to an engine shared between threads.
#[derive(Clone, Default)]
pub struct SharedBm25Plus {
    inner: Arc<RwLock<Bm25Plus>>,
}

impl SharedBm25Plus {
    pub fn new() -> Self {
        Self::from_engine(Bm25Plus::new())
    }

    pub fn with_params(params: Bm25Params) -> Self {
        Self::from_engine(Bm25Plus::with_params(params))
    }

    /// Wraps an existing engine.
    pub fn from_engine(engine: Bm25Plus) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// See [`Bm25Plus::index`].
    pub fn index(&self, document: Document) -> bool {
        self.inner.write().index(document)
    }

    /// Indexes a batch under one write lock. See [`Bm25Plus::index_all`].
    pub fn index_all<I>(&self, documents: I) -> usize
    where
        I: IntoIterator<Item = Document>,
    {
        self.inner.write().index_all(documents)
    }

    pub fn term_query(&self, term: &str) -> Vec<ScoredDocument> {
        self.inner.read().term_query(term)
    }

    pub fn terms_query<I>(&self, terms: I) -> Vec<ScoredDocument>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.inner.read().terms_query(terms)
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredDocument> {
        self.inner.read().search(query, limit)
    }

    pub fn get(&self, doc_id: bm25plus_types::DocId) -> Option<Document> {
        self.inner.read().get(doc_id).cloned()
    }

    pub fn index_size(&self) -> usize {
        self.inner.read().index_size()
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    pub fn metrics(&self) -> EngineMetrics {
        self.inner.read().metrics()
    }

    /// Runs `f` with shared access to the engine.
    pub fn read<R>(&self, f: impl FnOnce(&Bm25Plus) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handles_share_one_engine() {
        let engine = SharedBm25Plus::new();
        let other = engine.clone();

        assert!(engine.index(Document::new(1, "Ana are mere")));
        assert!(!other.index(Document::new(1, "Ana")));
        assert_eq!(other.index_size(), 1);
        assert_eq!(other.get(1).map(|d| d.text), Some("Ana are mere".to_string()));
    }

    #[test]
    fn matches_unshared_engine() {
        let docs = [
            Document::new(1, "Ana are mere"),
            Document::new(2, "Ana Ana Ana Ana Ana Ana Ana Ana"),
        ];
        let mut plain = Bm25Plus::new();
        plain.index_all(docs.clone());

        let shared = SharedBm25Plus::new();
        assert_eq!(shared.index_all(docs), 2);

        assert_eq!(shared.term_query("Ana"), plain.term_query("Ana"));
        assert_eq!(shared.terms_query(["ana", "mere"]), plain.terms_query(["ana", "mere"]));
        assert_eq!(shared.search("ana", 1), plain.search("ana", 1));
        assert_eq!(shared.stats(), plain.stats());
    }

    #[test]
    fn concurrent_index_and_query() {
        let engine = SharedBm25Plus::new();

        let writers: Vec<_> = (0..4u32)
            .map(|t| {
                let engine = engine.clone();
                thread::spawn(move || {
                    for i in 0..50u32 {
                        // Ids overlap across threads on purpose.
                        let id = (t * 25) + i;
                        engine.index(Document::new(id, format!("shared word{} common", i % 5)));
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let engine = engine.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let results = engine.terms_query(["common", "shared"]);
                        for w in results.windows(2) {
                            assert!(w[0].score >= w[1].score);
                        }
                        assert!(results.iter().all(|r| r.score.is_finite()));
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().expect("thread panicked");
        }

        // ids 0..125 are covered exactly once each
        assert_eq!(engine.index_size(), 125);
        engine.read(|inner| {
            let corpus = inner.corpus();
            assert_eq!(corpus.document_count(), 125);
            assert_eq!(corpus.total_token_count(), 125 * 3);
        });
        assert_eq!(engine.metrics().duplicates_skipped, 200 - 125);
        assert_eq!(engine.term_query("common").len(), 125);
    }
}
