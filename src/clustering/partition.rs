//! Partition construction from a template and a requested result count.

use super::design::PartitionTemplate;
use super::error::ClusterError;

/// Number of cluster slots in the precomputed design.
pub const CLUSTER_SLOTS: usize = 5;

/// Maximum number of ranked results any template covers.
pub const MAX_CLUSTERED_RESULTS: usize = 20;

/// A concrete assignment of ranked result positions to cluster slots.
///
/// Slot `s` holds the 0-based rank positions assigned to cluster `s`, in
/// rank order. Every position in `[0, result_count)` lands in exactly one
/// slot; slots the template never uses stay present but empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    slots: Vec<Vec<usize>>,
}

impl Partition {
    /// Assigns the first `result_count` rank positions to slots according
    /// to `template`.
    pub fn build(template: &PartitionTemplate, result_count: usize) -> Result<Self, ClusterError> {
        if result_count > MAX_CLUSTERED_RESULTS {
            return Err(ClusterError::TooManyResults {
                requested: result_count,
                max: MAX_CLUSTERED_RESULTS,
            });
        }

        let mut slots = vec![Vec::new(); CLUSTER_SLOTS];

        // Only the first result_count template entries are consulted.
        for (position, &label) in template.labels().iter().take(result_count).enumerate() {
            let slot = label as usize;
            if slot >= CLUSTER_SLOTS {
                return Err(ClusterError::InvalidSlotLabel {
                    position,
                    label: i64::from(label),
                    slots: CLUSTER_SLOTS,
                });
            }
            slots[slot].push(position);
        }

        Ok(Self { slots })
    }

    /// Per-slot position sequences, indexed by slot label.
    pub fn slots(&self) -> &[Vec<usize>] {
        &self.slots
    }

    /// Total number of assigned positions.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label of the cluster containing `position`.
    ///
    /// Returns an empty string when the position was never assigned.
    pub fn label_of(&self, position: usize) -> String {
        for (slot, members) in self.slots.iter().enumerate() {
            if members.contains(&position) {
                return format!("Cluster {}", slot);
            }
        }

        String::new()
    }
}
