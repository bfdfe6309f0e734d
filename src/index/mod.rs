//! Index Service Module
//!
//! Maintains the in-memory full-text index over the extracted news corpus.
//!
//! ## Overview
//! The index pairs a concurrent document store with an inverted index of
//! term frequencies. It is rebuilt on demand from the text files the
//! extraction pipeline produces and is the single data source the search
//! engine reads.
//!
//! ## Responsibilities
//! - **Storage**: Keeping every indexed document's stored fields (name, path, contents) addressable by id.
//! - **Postings**: Mapping each token to the documents containing it, with per-document term frequencies.
//! - **Building**: Walking the news directory and (re)indexing every text file.
//! - **API**: Exposing the index-build endpoint via the Axum web server.
//!
//! ## Submodules
//! - **`builder`**: Directory walk and index construction.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The index structure and its stored document type.

pub mod builder;
pub mod handlers;
pub mod types;
