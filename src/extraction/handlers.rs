use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use crate::config::AppConfig;
use crate::extraction::sgml::extract_news;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub status: String,
    pub extracted: usize,
    pub time_ms: u64,
}

pub async fn handle_extract(
    Extension(config): Extension<Arc<AppConfig>>,
) -> (StatusCode, Json<ExtractResponse>) {
    let started = Instant::now();

    match extract_news(&config.sgm_dir, &config.news_dir) {
        Ok(extracted) => (
            StatusCode::OK,
            Json(ExtractResponse {
                status: "extracted".to_string(),
                extracted,
                time_ms: started.elapsed().as_millis() as u64,
            }),
        ),
        Err(err) => {
            tracing::error!("Failed to extract news: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExtractResponse {
                    status: "extract_failed".to_string(),
                    extracted: 0,
                    time_ms: started.elapsed().as_millis() as u64,
                }),
            )
        }
    }
}
