//! Runtime path configuration.
//!
//! Where the raw SGML collections live, where extracted articles go, and
//! where the covering-design resource sits. Resolved once at startup from
//! the environment and shared read-only.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the raw Reuters `.sgm` collections.
    pub sgm_dir: PathBuf,
    /// Directory holding the extracted per-article text files.
    pub news_dir: PathBuf,
    /// The covering-design table resource.
    pub design_table: PathBuf,
}

impl AppConfig {
    /// Reads `SGM_DIR`, `NEWS_DIR`, and `DESIGN_TABLE` from the
    /// environment, falling back to the repository-local defaults.
    pub fn from_env() -> Self {
        Self {
            sgm_dir: env_path("SGM_DIR", "data/reuters-sgm"),
            news_dir: env_path("NEWS_DIR", "data/reuters-news"),
            design_table: env_path("DESIGN_TABLE", "resources/covering-array.txt"),
        }
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .into()
}
