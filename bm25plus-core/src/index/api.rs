//! Public API for adding and retrieving documents.

use crate::index::types::{Bm25Plus, TokenizedDocument};
use bm25plus_types::{DocId, Document};
use log::debug;

impl Bm25Plus {
    /// Indexes a document.
    ///
    /// Returns `false` without touching the store, the index or the corpus
    /// statistics if a document with the same id was indexed before (even
    /// when its text differs).
    pub fn index(&mut self, document: Document) -> bool {
        if self.store.contains_key(&document.id) {
            self.duplicates_skipped += 1;
            debug!("skipping document {}: id already indexed", document.id);
            return false;
        }

        let tokenized = TokenizedDocument::from_document(document);
        let doc_id = tokenized.id();

        self.corpus.record(tokenized.len());
        self.postings.register(doc_id, tokenized.tokens());
        debug!(
            "indexed document {} ({} tokens, mean length now {:.3})",
            doc_id,
            tokenized.len(),
            self.corpus.mean_document_length()
        );
        self.store.insert(doc_id, tokenized);
        true
    }

    /// Indexes documents in order, skipping ids already present.
    ///
    /// Returns the number of newly indexed documents.
    pub fn index_all<I>(&mut self, documents: I) -> usize
    where
        I: IntoIterator<Item = Document>,
    {
        documents
            .into_iter()
            .map(|document| self.index(document))
            .filter(|&added| added)
            .count()
    }

    /// Retrieves a document by its id.
    #[inline]
    pub fn get(&self, doc_id: DocId) -> Option<&Document> {
        self.store.get(&doc_id).map(TokenizedDocument::document)
    }

    /// Retrieves the tokenized form of a document.
    #[inline]
    pub fn tokenized(&self, doc_id: DocId) -> Option<&TokenizedDocument> {
        self.store.get(&doc_id)
    }

    /// Token sequence of a document.
    #[inline]
    pub fn tokens(&self, doc_id: DocId) -> Option<&[String]> {
        self.store.get(&doc_id).map(TokenizedDocument::tokens)
    }

    #[inline]
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.store.contains_key(&doc_id)
    }
}
