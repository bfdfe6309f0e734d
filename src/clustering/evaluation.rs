//! Internal cluster-quality indices for a finalized partition.

use super::dispersion::{centroids, score_at};
use super::partition::Partition;

/// Between/within-cluster dispersion diagnostics.
///
/// The global score average and per-cluster centroids are fixed at
/// construction; every query afterwards is read-only.
#[derive(Debug)]
pub struct InternalEvaluation {
    partition: Partition,
    scores: Vec<f32>,
    centroids: Vec<f32>,
    global_average: f32,
}

impl InternalEvaluation {
    pub fn new(partition: Partition, scores: Vec<f32>) -> Self {
        let global_average = documents_average(&scores);
        let centroids = centroids(&partition, &scores);

        Self {
            partition,
            scores,
            centroids,
            global_average,
        }
    }

    /// Sum over clusters of `size · (centroid − global average)²`.
    ///
    /// Higher values indicate better-separated clusters. The size factor is
    /// the raw member count of the slot, including any out-of-range
    /// positions.
    pub fn between_cluster_dispersion(&self) -> f32 {
        self.partition
            .slots()
            .iter()
            .zip(&self.centroids)
            .map(|(members, &centroid)| {
                members.len() as f32 * (centroid - self.global_average).powi(2)
            })
            .sum()
    }

    /// Sum over clusters of member squared deviations from the cluster
    /// centroid. Lower values indicate tighter clusters.
    pub fn within_cluster_dispersion(&self) -> f32 {
        let mut total = 0.0f32;

        for (members, &centroid) in self.partition.slots().iter().zip(&self.centroids) {
            for &position in members {
                if let Some(score) = score_at(&self.scores, position) {
                    total += (score - centroid).powi(2);
                }
            }
        }

        total
    }

    /// Per-slot centroids, indexed by slot label.
    pub fn centroids(&self) -> &[f32] {
        &self.centroids
    }
}

fn documents_average(scores: &[f32]) -> f32 {
    if scores.is_empty() {
        return 0.0;
    }

    let score_sum: f32 = scores.iter().sum();
    (1.0 / scores.len() as f32) * score_sum
}
