use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use crate::config::AppConfig;
use crate::index::builder::build_index;
use crate::index::types::NewsIndex;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub status: String,
    pub indexed: usize,
    pub time_ms: u64,
}

pub async fn handle_build_index(
    Extension(index): Extension<Arc<NewsIndex>>,
    Extension(config): Extension<Arc<AppConfig>>,
) -> (StatusCode, Json<IndexResponse>) {
    let started = Instant::now();

    match build_index(&config.news_dir, &index) {
        Ok(indexed) => (
            StatusCode::OK,
            Json(IndexResponse {
                status: "indexed".to_string(),
                indexed,
                time_ms: started.elapsed().as_millis() as u64,
            }),
        ),
        Err(err) => {
            tracing::error!("Failed to build index: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IndexResponse {
                    status: "index_failed".to_string(),
                    indexed: 0,
                    time_ms: started.elapsed().as_millis() as u64,
                }),
            )
        }
    }
}
