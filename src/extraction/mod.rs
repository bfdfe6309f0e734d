//! Extraction Service Module
//!
//! Turns raw Reuters SGML collection files into the per-article text corpus
//! the indexer consumes.
//!
//! ## Workflow
//! 1. **Scan**: Walks the SGML directory for non-hidden `.sgm` files.
//! 2. **Parse**: Splits each collection into `<REUTERS>` article blocks and
//!    pulls out the NEWID, title, date, and body.
//! 3. **Scrub**: Strips numeric character references and stray markup the
//!    Reuters files carry.
//! 4. **Write**: Saves each article as `{stem}-{newid}.txt` in the news
//!    directory.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`sgml`**: SGML parsing, scrubbing, and article file output.

pub mod handlers;
pub mod sgml;
