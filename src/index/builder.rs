use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::search::tokenizer::token_frequencies;

use super::types::NewsIndex;

/// Rebuilds `index` from every news text file in `data_dir`.
///
/// Clears the previous index state first, then indexes each non-hidden
/// `.txt` file in the directory. Returns the number of documents indexed.
pub fn build_index(data_dir: &Path, index: &NewsIndex) -> anyhow::Result<usize> {
    index.clear();

    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("reading news directory {}", data_dir.display()))?;

    let mut indexed = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !is_news_file(&path) {
            continue;
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading news file {}", path.display()))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let file_path = fs::canonicalize(&path)
            .unwrap_or_else(|_| path.clone())
            .display()
            .to_string();

        let frequencies = token_frequencies(&contents);
        index.add_document(file_name, file_path, contents, frequencies);
        indexed += 1;
    }

    tracing::info!("Indexed {} news documents from {}", indexed, data_dir.display());

    Ok(indexed)
}

/// Accepts plain, non-hidden `.txt` files.
fn is_news_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => !name.starts_with('.') && name.to_lowercase().ends_with(".txt"),
        None => false,
    }
}
