//! Inverted index: token to the set of documents containing it.

use bm25plus_types::DocId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Membership-only inverted index.
///
/// No per-document frequency is kept; term frequency is recomputed at query
/// time from the stored token sequence. A document id is present under a
/// token iff that token occurs in the document's token sequence.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: FxHashMap<String, FxHashSet<DocId>>,
    total_postings: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `doc_id` under every distinct token in `tokens`.
    ///
    /// Repeated tokens do not create duplicate postings.
    pub fn register(&mut self, doc_id: DocId, tokens: &[String]) {
        for token in tokens {
            let inserted = match self.terms.get_mut(token.as_str()) {
                Some(ids) => ids.insert(doc_id),
                None => {
                    let mut ids = FxHashSet::default();
                    ids.insert(doc_id);
                    self.terms.insert(token.clone(), ids);
                    true
                }
            };
            if inserted {
                self.total_postings += 1;
            }
        }
    }

    /// Documents containing `term`, or `None` if the term was never indexed.
    #[inline]
    pub fn get(&self, term: &str) -> Option<&FxHashSet<DocId>> {
        self.terms.get(term)
    }

    /// Number of documents containing `term`; zero for unknown terms.
    #[inline]
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, FxHashSet::len)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct indexed tokens.
    #[inline]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of (token, document) pairs.
    #[inline]
    pub fn total_postings(&self) -> usize {
        self.total_postings
    }
}
