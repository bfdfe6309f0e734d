//! Covering-design resource parsing and the load-once table cache.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::ClusterError;
use super::partition::{CLUSTER_SLOTS, MAX_CLUSTERED_RESULTS};

/// One candidate assignment of ranked positions to cluster slots.
///
/// Entry `i` is the slot label for the document at rank `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTemplate {
    labels: Vec<u8>,
}

impl PartitionTemplate {
    pub fn new(labels: Vec<u8>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The fixed set of candidate partition templates.
///
/// Parsed once from the bundled resource and shared read-only for the rest
/// of the process lifetime.
#[derive(Debug)]
pub struct CoveringDesignTable {
    templates: Vec<PartitionTemplate>,
}

impl CoveringDesignTable {
    /// Reads and parses the design resource at `path`.
    pub fn load(path: &Path) -> Result<Self, ClusterError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses the resource text: one template per line, whitespace-separated
    /// integers.
    ///
    /// Every line must carry at least [`MAX_CLUSTERED_RESULTS`] entries and
    /// every entry must name a slot in `0..CLUSTER_SLOTS`. Blank lines are
    /// skipped.
    pub fn parse(content: &str) -> Result<Self, ClusterError> {
        let mut templates = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut labels = Vec::new();
            for token in line.split_whitespace() {
                let value: i64 = token.parse().map_err(|_| ClusterError::MalformedTemplate {
                    line: idx + 1,
                    reason: format!("{token:?} is not an integer"),
                })?;

                if !(0..CLUSTER_SLOTS as i64).contains(&value) {
                    return Err(ClusterError::InvalidSlotLabel {
                        position: labels.len(),
                        label: value,
                        slots: CLUSTER_SLOTS,
                    });
                }

                labels.push(value as u8);
            }

            if labels.len() < MAX_CLUSTERED_RESULTS {
                return Err(ClusterError::MalformedTemplate {
                    line: idx + 1,
                    reason: format!(
                        "expected at least {} entries, found {}",
                        MAX_CLUSTERED_RESULTS,
                        labels.len()
                    ),
                });
            }

            templates.push(PartitionTemplate::new(labels));
        }

        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[PartitionTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Load-once cache for the design table.
///
/// The resource is read and validated at most once per process. Concurrent
/// first accesses are serialized by the cell, so no caller ever observes a
/// partially parsed table; after the first successful load the table is
/// shared read-only. A failed load leaves the cell empty, so a later
/// request may attempt the load again.
#[derive(Debug)]
pub struct DesignTableCache {
    path: PathBuf,
    cell: OnceCell<Arc<CoveringDesignTable>>,
}

impl DesignTableCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached table, loading it on first call.
    pub fn get_or_load(&self) -> Result<Arc<CoveringDesignTable>, ClusterError> {
        self.cell
            .get_or_try_init(|| CoveringDesignTable::load(&self.path).map(Arc::new))
            .map(Arc::clone)
    }
}
