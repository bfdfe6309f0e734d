use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use newswire_search::clustering::design::DesignTableCache;
use newswire_search::config::AppConfig;
use newswire_search::extraction::handlers::handle_extract;
use newswire_search::index::handlers::handle_build_index;
use newswire_search::index::types::NewsIndex;
use newswire_search::search::handlers::{handle_search, handle_search_evaluation};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:7700".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Shared state:
    let config = Arc::new(AppConfig::from_env());
    let index = Arc::new(NewsIndex::new());
    let designs = Arc::new(DesignTableCache::new(config.design_table.clone()));

    tracing::info!("SGML corpus directory: {}", config.sgm_dir.display());
    tracing::info!("News corpus directory: {}", config.news_dir.display());
    tracing::info!("Design table resource: {}", config.design_table.display());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/extract", post(handle_extract))
        .route("/index", post(handle_build_index))
        .route("/search", get(handle_search))
        .route("/search/evaluation", get(handle_search_evaluation))
        .layer(Extension(index))
        .layer(Extension(designs))
        .layer(Extension(config));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
