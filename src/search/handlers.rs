use std::sync::Arc;
use std::time::Instant;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;

use crate::clustering::design::DesignTableCache;
use crate::clustering::error::ClusterError;
use crate::clustering::evaluation::InternalEvaluation;
use crate::clustering::selector::select_best_partition;
use crate::index::types::NewsIndex;

use super::engine::{relevance_scores, search};
use super::types::{DocumentResult, ErrorResponse, EvaluationResponse, SearchResponse};

const DEFAULT_RESULTS: usize = 10;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub results: Option<usize>,
    pub cluster: Option<bool>,
}

#[derive(Deserialize)]
pub struct EvaluationParams {
    pub q: String,
    pub results: Option<usize>,
}

/// Error payload crossing the HTTP boundary.
///
/// Clustering failures map onto status codes here: an oversized request is
/// a client error, everything else a server error.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: self.message,
        });

        (self.status, body).into_response()
    }
}

impl From<ClusterError> for ApiError {
    fn from(err: ClusterError) -> Self {
        let status = match err {
            ClusterError::TooManyResults { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Clustering failed: {}", err);
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<Arc<NewsIndex>>,
    Extension(designs): Extension<Arc<DesignTableCache>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = params.results.unwrap_or(DEFAULT_RESULTS);
    let with_clusters = params.cluster.unwrap_or(false);

    let started = Instant::now();
    let hits = search(&params.q, &index, results);
    let time_ms = started.elapsed().as_millis() as u64;

    let partition = if with_clusters {
        let scores = relevance_scores(&hits);
        let table = designs.get_or_load()?;
        Some(select_best_partition(&scores, results, &table)?)
    } else {
        None
    };

    let documents: Vec<DocumentResult> = hits
        .iter()
        .enumerate()
        .map(|(rank, hit)| {
            let path = index
                .document(hit.doc_id)
                .map(|doc| doc.file_path)
                .unwrap_or_default();
            let cluster = match &partition {
                Some(partition) => partition.label_of(rank),
                None => "Default".to_string(),
            };

            DocumentResult { path, cluster }
        })
        .collect();

    Ok(Json(SearchResponse {
        query: params.q,
        count: documents.len(),
        time_ms,
        documents,
    }))
}

pub async fn handle_search_evaluation(
    Query(params): Query<EvaluationParams>,
    Extension(index): Extension<Arc<NewsIndex>>,
    Extension(designs): Extension<Arc<DesignTableCache>>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let results = params.results.unwrap_or(DEFAULT_RESULTS);

    let started = Instant::now();
    let hits = search(&params.q, &index, results);
    let scores = relevance_scores(&hits);

    let table = designs.get_or_load()?;
    let partition = select_best_partition(&scores, results, &table)?;
    let evaluation = InternalEvaluation::new(partition, scores);

    Ok(Json(EvaluationResponse {
        query: params.q,
        count: hits.len(),
        between_clusters: evaluation.between_cluster_dispersion(),
        within_clusters: evaluation.within_cluster_dispersion(),
        centroids: evaluation.centroids().to_vec(),
        time_ms: started.elapsed().as_millis() as u64,
    }))
}
