use std::io;

use thiserror::Error;

/// Failures surfaced by the clustering subsystem.
///
/// None of these are retried internally; callers receive them as-is and the
/// HTTP layer maps them onto error responses.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// The covering-design resource could not be opened or read.
    #[error("covering design table unavailable: {0}")]
    ResourceUnavailable(#[from] io::Error),

    /// A resource line does not describe a usable template.
    #[error("malformed template on line {line}: {reason}")]
    MalformedTemplate { line: usize, reason: String },

    /// The caller asked to cluster more documents than any template covers.
    #[error("the maximum number of documents to cluster is {max}, got {requested}")]
    TooManyResults { requested: usize, max: usize },

    /// A template entry references a cluster slot outside the fixed alphabet.
    #[error("template entry {position} references slot {label}, outside 0..{slots}")]
    InvalidSlotLabel {
        position: usize,
        label: i64,
        slots: usize,
    },

    /// The design table parsed successfully but holds no templates.
    #[error("covering design table contains no templates")]
    EmptyDesignTable,
}
