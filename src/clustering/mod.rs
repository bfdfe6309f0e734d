//! Result Clustering Module
//!
//! Groups the top ranked search results into topical clusters using a
//! precomputed covering design.
//!
//! ## Overview
//! A bundled covering-design resource provides a fixed set of candidate
//! partition templates, each assigning twenty ranked positions to five
//! cluster slots. Clustering a result list means materializing every
//! template into a concrete partition, scoring each partition with a
//! dispersion objective over the result relevance scores, and keeping the
//! partition with the lowest total dispersion.
//!
//! ## Responsibilities
//! - **Design table**: parse and validate the covering-design resource,
//!   loading it at most once per process.
//! - **Partitioning**: turn one template plus a requested result count into
//!   a concrete position-to-slot assignment.
//! - **Selection**: exhaustively score every candidate partition and keep
//!   the best one.
//! - **Diagnostics**: between/within-cluster dispersion indices for a
//!   finalized partition.
//!
//! ## Submodules
//! - **`design`**: resource parsing, validation, and the load-once cache.
//! - **`dispersion`**: centroids and the dispersion objective.
//! - **`error`**: typed failures shared across the subsystem.
//! - **`evaluation`**: internal cluster-quality indices.
//! - **`partition`**: template materialization and cluster labeling.
//! - **`selector`**: minimum-dispersion search over all templates.

pub mod design;
pub mod dispersion;
pub mod error;
pub mod evaluation;
pub mod partition;
pub mod selector;

#[cfg(test)]
mod tests;
