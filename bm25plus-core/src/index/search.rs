//! Query engine: candidate lookup, scoring, filtering and ordering.

use crate::analyzer::tokenizer::{normalize_term, tokenize};
use crate::index::types::Bm25Plus;
use bm25plus_types::{DocId, ScoredDocument};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Query terms kept inline before spilling to the heap.
pub const INLINE_QUERY_TERMS: usize = 8;

impl Bm25Plus {
    /// Number of documents containing `term`, after lowercasing it.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.doc_frequency(&normalize_term(term))
    }

    /// Ranks the documents containing `term`.
    ///
    /// `term` is lowercased before lookup. An unknown term yields an empty
    /// list. Returns owned results - no lifetime coupling with the engine.
    pub fn term_query(&self, term: &str) -> Vec<ScoredDocument> {
        self.count_query();

        let term = normalize_term(term);
        let Some(ids) = self.postings.get(&term) else {
            trace!("term query {:?}: not in index", term);
            return Vec::new();
        };

        let idf = self.idf_for_df(ids.len());
        let mut results: Vec<ScoredDocument> = ids
            .iter()
            .filter_map(|id| self.store.get(id))
            .map(|doc| ScoredDocument::new(self.rsv_with_idf(idf, &term, doc), doc.document().clone()))
            .collect();

        let candidates = results.len();
        Self::rank(&mut results);
        trace!(
            "term query {:?}: {} candidates, {} results",
            term,
            candidates,
            results.len()
        );
        results
    }

    /// Ranks the union of the documents containing any of `terms`.
    ///
    /// A document's score is the sum of the per-term scores over every query
    /// term, including terms it does not contain (those still add the
    /// `delta` floor). Terms are lowercased before lookup.
    ///
    /// While scoring, the leading term's document frequency is the size of
    /// the merged candidate set, provided that term is indexed. The index
    /// itself is left untouched.
    ///
    /// Any term that is absent from the index gives every candidate an
    /// infinite score, so the whole result is empty.
    pub fn terms_query<I>(&self, terms: I) -> Vec<ScoredDocument>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.count_query();

        let terms: SmallVec<[String; INLINE_QUERY_TERMS]> = terms
            .into_iter()
            .map(|term| normalize_term(term.as_ref()))
            .collect();
        let Some(leading) = terms.first() else {
            return Vec::new();
        };

        let mut candidates: FxHashSet<DocId> = FxHashSet::default();
        for term in &terms {
            if let Some(ids) = self.postings.get(term) {
                candidates.extend(ids.iter().copied());
            }
        }
        if candidates.is_empty() {
            trace!("terms query {:?}: no candidates", terms);
            return Vec::new();
        }

        let leading_indexed = self.postings.contains(leading);
        let idfs: SmallVec<[f64; INLINE_QUERY_TERMS]> = terms
            .iter()
            .map(|term| {
                let df = if leading_indexed && term == leading {
                    candidates.len()
                } else {
                    self.postings.doc_frequency(term)
                };
                if df == 0 {
                    debug!("terms query: {:?} has zero document frequency", term);
                }
                self.idf_for_df(df)
            })
            .collect();

        let mut results: Vec<ScoredDocument> = candidates
            .iter()
            .filter_map(|id| self.store.get(id))
            .map(|doc| {
                let mut score = 0.0;
                for (term, &idf) in terms.iter().zip(idfs.iter()) {
                    score += self.rsv_with_idf(idf, term, doc);
                }
                ScoredDocument::new(score, doc.document().clone())
            })
            .collect();

        Self::rank(&mut results);
        trace!(
            "terms query {:?}: {} candidates, {} results",
            terms,
            candidates.len(),
            results.len()
        );
        results
    }

    /// Free-text search: tokenizes `query` like a document and runs a
    /// terms query over the tokens, keeping the best `limit` hits.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredDocument> {
        if limit == 0 {
            return Vec::new();
        }

        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut results = self.terms_query(&tokens);
        results.truncate(limit);
        results
    }

    /// Drops non-finite scores and sorts best first, ties by ascending id.
    fn rank(results: &mut Vec<ScoredDocument>) {
        results.retain(|hit| hit.score.is_finite());
        results.sort_unstable_by(ScoredDocument::rank_cmp);
    }
}
