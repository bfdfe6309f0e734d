use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// One indexed news article with its stored fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDocument {
    pub doc_id: u32,
    pub file_name: String,
    pub file_path: String,
    pub contents: String,
}

/// One inverted-index entry: a document and how often the term occurs in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: u32,
    pub term_frequency: u32,
}

/// In-memory full-text index.
///
/// A concurrent document store plus an inverted index keyed by token.
/// Documents receive sequential ids in insertion order; ids restart from
/// zero on [`clear`](NewsIndex::clear).
#[derive(Debug, Default)]
pub struct NewsIndex {
    documents: DashMap<u32, NewsDocument>,
    postings: DashMap<String, Vec<Posting>>,
    next_doc_id: AtomicU32,
}

impl NewsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all stored documents and postings.
    pub fn clear(&self) {
        self.documents.clear();
        self.postings.clear();
        self.next_doc_id.store(0, Ordering::SeqCst);
    }

    /// Stores a document and its term frequencies, returning the assigned
    /// document id.
    pub fn add_document(
        &self,
        file_name: String,
        file_path: String,
        contents: String,
        frequencies: HashMap<String, u32>,
    ) -> u32 {
        let doc_id = self.next_doc_id.fetch_add(1, Ordering::SeqCst);

        for (token, term_frequency) in frequencies {
            self.postings.entry(token).or_default().push(Posting {
                doc_id,
                term_frequency,
            });
        }

        self.documents.insert(
            doc_id,
            NewsDocument {
                doc_id,
                file_name,
                file_path,
                contents,
            },
        );

        doc_id
    }

    pub fn document(&self, doc_id: u32) -> Option<NewsDocument> {
        self.documents.get(&doc_id).map(|doc| doc.value().clone())
    }

    /// The postings list for `token`, or `None` for unseen tokens.
    pub fn postings(&self, token: &str) -> Option<Vec<Posting>> {
        self.postings
            .get(token)
            .map(|postings| postings.value().clone())
    }

    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }
}
