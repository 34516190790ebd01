//! Corpus statistics and IndexStats.

use crate::index::types::Bm25Plus;

/// Running totals behind the mean document length.
///
/// Updated exactly once per newly indexed document, in the same call that
/// inserts it into the store, so `mean_document_length` always equals
/// `total_token_count / document_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CorpusStats {
    total_token_count: u64,
    document_count: u64,
    mean_document_length: f64,
}

impl CorpusStats {
    /// Accounts for one new document of `doc_len` tokens.
    pub(crate) fn record(&mut self, doc_len: usize) {
        self.total_token_count += doc_len as u64;
        self.document_count += 1;
        self.mean_document_length = self.total_token_count as f64 / self.document_count as f64;
    }

    /// Sum of the lengths of all indexed documents.
    #[inline(always)]
    pub fn total_token_count(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct documents indexed (`N`).
    #[inline(always)]
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Mean document length in tokens; `0.0` before the first document.
    #[inline(always)]
    pub fn mean_document_length(&self) -> f64 {
        self.mean_document_length
    }
}

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexStats {
    /// Number of documents in the index.
    pub num_documents: usize,
    /// Number of distinct tokens.
    pub num_terms: usize,
    /// Total number of (token, document) postings.
    pub total_postings: usize,
    /// Sum of all document lengths.
    pub total_tokens: u64,
    /// Mean document length in tokens.
    pub mean_document_length: f64,
}

impl Bm25Plus {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_documents: self.store.len(),
            num_terms: self.postings.term_count(),
            total_postings: self.postings.total_postings(),
            total_tokens: self.corpus.total_token_count(),
            mean_document_length: self.corpus.mean_document_length(),
        }
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} docs, {} terms, {} postings, {} tokens (mean length {:.2})",
            self.num_documents,
            self.num_terms,
            self.total_postings,
            self.total_tokens,
            self.mean_document_length
        )
    }
}
