//! Minimum-dispersion search over every template in the design table.

use super::design::CoveringDesignTable;
use super::dispersion;
use super::error::ClusterError;
use super::partition::{Partition, MAX_CLUSTERED_RESULTS};

/// Builds and scores a partition for every template in `table`, returning
/// the one with the lowest total dispersion.
///
/// A candidate replaces the incumbent only when it scores strictly lower,
/// so ties resolve to the earliest template in table order and selection is
/// reproducible for a fixed resource.
pub fn select_best_partition(
    scores: &[f32],
    result_count: usize,
    table: &CoveringDesignTable,
) -> Result<Partition, ClusterError> {
    if result_count > MAX_CLUSTERED_RESULTS {
        return Err(ClusterError::TooManyResults {
            requested: result_count,
            max: MAX_CLUSTERED_RESULTS,
        });
    }

    let mut best: Option<(f32, Partition)> = None;

    for template in table.templates() {
        let partition = Partition::build(template, result_count)?;
        let dispersion = dispersion::evaluate(&partition, scores);

        match best {
            Some((best_dispersion, _)) if dispersion >= best_dispersion => {}
            _ => best = Some((dispersion, partition)),
        }
    }

    best.map(|(_, partition)| partition)
        .ok_or(ClusterError::EmptyDesignTable)
}
