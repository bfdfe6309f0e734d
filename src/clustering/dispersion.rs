//! Centroids and the dispersion objective for candidate partitions.

use super::partition::Partition;

/// Relevance score for `position`, or `None` when the position falls
/// outside the ranked result list.
///
/// Partitions built from the same ranked results they are scored against
/// never produce out-of-range positions; when one shows up anyway it is
/// skipped rather than raised.
pub fn score_at(scores: &[f32], position: usize) -> Option<f32> {
    scores.get(position).copied()
}

/// Arithmetic-mean relevance score per cluster slot.
///
/// Slots with no in-range members have centroid 0.
pub fn centroids(partition: &Partition, scores: &[f32]) -> Vec<f32> {
    partition
        .slots()
        .iter()
        .map(|members| {
            let mut score_sum = 0.0f32;
            let mut count = 0.0f32;

            for &position in members {
                if let Some(score) = score_at(scores, position) {
                    score_sum += score;
                    count += 1.0;
                }
            }

            if count == 0.0 {
                0.0
            } else {
                (1.0 / count) * score_sum
            }
        })
        .collect()
}

/// Total dispersion of a partition against the scores it was built from,
/// lower is better.
///
/// Each in-range member contributes `sqrt(centroid² + score²)`, the
/// combined magnitude of its score and its cluster centroid.
pub fn evaluate(partition: &Partition, scores: &[f32]) -> f32 {
    let centroids = centroids(partition, scores);
    let mut total = 0.0f32;

    for (members, centroid) in partition.slots().iter().zip(centroids) {
        for &position in members {
            if let Some(score) = score_at(scores, position) {
                total += (centroid * centroid + score * score).sqrt();
            }
        }
    }

    total
}
