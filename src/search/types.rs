use serde::{Deserialize, Serialize};

/// One ranked hit produced by the engine.
///
/// The hit's rank position in the result list is the implicit index used by
/// the clustering subsystem, so ordering is significant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedHit {
    pub doc_id: u32,
    pub score: f32,
}

/// One document entry in the search response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResult {
    pub path: String,
    pub cluster: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub time_ms: u64,
    pub documents: Vec<DocumentResult>,
}

/// Cluster-quality report for the evaluation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub query: String,
    pub count: usize,
    pub between_clusters: f32,
    pub within_clusters: f32,
    pub centroids: Vec<f32>,
    pub time_ms: u64,
}

/// Machine-readable payload for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
