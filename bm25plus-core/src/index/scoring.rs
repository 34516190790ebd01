//! Scoring functions.
//!
//! ```text
//! idf(t)      = (N + 1) / df(t)
//! rsv(t, d)   = log10(idf(t)) * ( (k1 + 1) * tf / (k1 * ((1 - b) + b * |d| / avgdl) + tf) + delta )
//! ```
//!
//! `df(t) == 0` makes `idf` infinite. That is not corrected here; the query
//! engine drops non-finite scores.

use crate::index::types::{Bm25Plus, TokenizedDocument};

impl Bm25Plus {
    /// Inverse document frequency of `term` (already normalized).
    ///
    /// Returns `+inf` for terms that are not in the index.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        self.idf_for_df(self.postings.doc_frequency(term))
    }

    /// Retrieval status value of `term` (already normalized) for `document`.
    pub fn rsv(&self, term: &str, document: &TokenizedDocument) -> f64 {
        self.rsv_with_idf(self.inverse_document_frequency(term), term, document)
    }

    #[inline(always)]
    pub(crate) fn idf_for_df(&self, df: usize) -> f64 {
        (self.corpus.document_count() + 1) as f64 / df as f64
    }

    #[inline]
    pub(crate) fn rsv_with_idf(&self, idf: f64, term: &str, document: &TokenizedDocument) -> f64 {
        let k1 = self.params.k1;
        let b = self.params.b;
        let delta = self.params.delta;

        let idf_log = idf.log10();
        let tf = document.term_frequency(term) as f64;
        let doc_len = document.len() as f64;
        let norm = k1 * ((1.0 - b) + b * (doc_len / self.corpus.mean_document_length()));

        idf_log * (((k1 + 1.0) * tf) / (norm + tf) + delta)
    }
}
