//! Clustering Module Tests
//!
//! Validates the covering-design pipeline end to end: resource parsing,
//! partition construction, dispersion scoring, best-partition selection,
//! and the internal evaluation indices.
//!
//! ## Test Scopes
//! - **Design table**: parsing, validation failures, load-once caching.
//! - **Partitioning**: slot invariants, result-count limits, labeling.
//! - **Dispersion**: centroids, the scoring formula, out-of-range policy.
//! - **Selection**: minimality, tie-breaking, failure modes.
//! - **Evaluation**: between/within indices and their special cases.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use crate::clustering::design::{CoveringDesignTable, DesignTableCache, PartitionTemplate};
    use crate::clustering::dispersion::{centroids, evaluate, score_at};
    use crate::clustering::error::ClusterError;
    use crate::clustering::evaluation::InternalEvaluation;
    use crate::clustering::partition::{Partition, CLUSTER_SLOTS, MAX_CLUSTERED_RESULTS};
    use crate::clustering::selector::select_best_partition;

    /// A template long enough for any result count, assigning rank i to
    /// slot labels[i] and padding the tail with slot 0.
    fn template(prefix: &[u8]) -> PartitionTemplate {
        let mut labels = prefix.to_vec();
        labels.resize(MAX_CLUSTERED_RESULTS, 0);
        PartitionTemplate::new(labels)
    }

    fn table_line(labels: &[u8]) -> String {
        let mut padded = labels.to_vec();
        padded.resize(MAX_CLUSTERED_RESULTS, 0);
        padded
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ============================================================
    // DESIGN TABLE TESTS - parsing
    // ============================================================

    #[test]
    fn test_parse_basic() {
        let content = format!("{}\n{}\n", table_line(&[0, 1, 2, 3, 4]), table_line(&[4, 3]));
        let table = CoveringDesignTable::parse(&content).expect("parse failed");

        assert_eq!(table.len(), 2);
        assert_eq!(table.templates()[0].labels()[..5], [0, 1, 2, 3, 4]);
        assert_eq!(table.templates()[0].len(), MAX_CLUSTERED_RESULTS);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = format!("\n{}\n\n{}\n\n", table_line(&[0]), table_line(&[1]));
        let table = CoveringDesignTable::parse(&content).expect("parse failed");

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_integer_token() {
        let content = "0 1 2 x 4 0 1 2 3 4 0 1 2 3 4 0 1 2 3 4";
        let err = CoveringDesignTable::parse(content).unwrap_err();

        match err {
            ClusterError::MalformedTemplate { line, .. } => assert_eq!(line, 1),
            other => panic!("expected MalformedTemplate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let err = CoveringDesignTable::parse("0 1 2 3 4").unwrap_err();

        assert!(matches!(err, ClusterError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_parse_rejects_out_of_alphabet_label() {
        let content = table_line(&[0, 1, 2]).replace("2", "7");
        let err = CoveringDesignTable::parse(&content).unwrap_err();

        match err {
            ClusterError::InvalidSlotLabel { label, slots, .. } => {
                assert_eq!(label, 7);
                assert_eq!(slots, CLUSTER_SLOTS);
            }
            other => panic!("expected InvalidSlotLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_negative_label() {
        let content = format!("-1 {}", table_line(&[0]));
        let err = CoveringDesignTable::parse(&content).unwrap_err();

        assert!(matches!(err, ClusterError::InvalidSlotLabel { label: -1, .. }));
    }

    #[test]
    fn test_parse_empty_resource_yields_empty_table() {
        let table = CoveringDesignTable::parse("").expect("parse failed");

        assert!(table.is_empty());
    }

    #[test]
    fn test_bundled_resource_parses() {
        let table = CoveringDesignTable::load(std::path::Path::new("resources/covering-array.txt"))
            .expect("bundled design table should parse");

        assert!(!table.is_empty());
        for template in table.templates() {
            assert!(template.len() >= MAX_CLUSTERED_RESULTS);
        }
    }

    // ============================================================
    // DESIGN TABLE TESTS - load-once cache
    // ============================================================

    #[test]
    fn test_load_missing_resource_fails() {
        let cache = DesignTableCache::new("does/not/exist/covering-array.txt");
        let err = cache.get_or_load().unwrap_err();

        assert!(matches!(err, ClusterError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_cache_loads_resource_once() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", table_line(&[0, 1, 2, 3, 4])).expect("write");

        let cache = DesignTableCache::new(file.path());
        let first = cache.get_or_load().expect("first load");

        // Corrupt the backing file; the cached table must survive untouched.
        writeln!(file, "not a template").expect("write");
        let second = cache.get_or_load().expect("second load");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    // ============================================================
    // PARTITION TESTS - build
    // ============================================================

    #[test]
    fn test_build_assigns_every_position_exactly_once() {
        let template = template(&[0, 2, 2, 4, 1, 0, 3]);

        for result_count in 1..=MAX_CLUSTERED_RESULTS {
            let partition = Partition::build(&template, result_count).expect("build failed");

            assert_eq!(partition.slots().len(), CLUSTER_SLOTS);
            assert_eq!(partition.len(), result_count);

            for position in 0..result_count {
                let holders = partition
                    .slots()
                    .iter()
                    .filter(|members| members.contains(&position))
                    .count();
                assert_eq!(holders, 1, "position {} held by {} slots", position, holders);
            }
        }
    }

    #[test]
    fn test_build_keeps_unused_slots_empty() {
        let partition = Partition::build(&template(&[0, 0, 0, 0]), 4).expect("build failed");

        assert_eq!(partition.slots()[0], vec![0, 1, 2, 3]);
        for slot in 1..CLUSTER_SLOTS {
            assert!(partition.slots()[slot].is_empty());
        }
    }

    #[test]
    fn test_build_preserves_rank_order_within_slots() {
        let partition = Partition::build(&template(&[1, 0, 1, 0, 1]), 5).expect("build failed");

        assert_eq!(partition.slots()[0], vec![1, 3]);
        assert_eq!(partition.slots()[1], vec![0, 2, 4]);
    }

    #[test]
    fn test_build_rejects_too_many_results() {
        let err = Partition::build(&template(&[0]), MAX_CLUSTERED_RESULTS + 1).unwrap_err();

        match err {
            ClusterError::TooManyResults { requested, max } => {
                assert_eq!(requested, 21);
                assert_eq!(max, 20);
            }
            other => panic!("expected TooManyResults, got {:?}", other),
        }
        assert!(err
            .to_string()
            .contains("the maximum number of documents to cluster is 20"));
    }

    #[test]
    fn test_build_rejects_invalid_slot_label() {
        let rogue = PartitionTemplate::new(vec![0, 1, 9, 2]);
        let err = Partition::build(&rogue, 4).unwrap_err();

        assert!(matches!(
            err,
            ClusterError::InvalidSlotLabel {
                position: 2,
                label: 9,
                ..
            }
        ));
    }

    #[test]
    fn test_build_consults_only_requested_prefix() {
        // Entries past result_count must not influence the partition.
        let a = Partition::build(&template(&[0, 1, 2, 3]), 3).expect("build failed");
        let b = Partition::build(&template(&[0, 1, 2, 4]), 3).expect("build failed");

        assert_eq!(a, b);
    }

    // ============================================================
    // PARTITION TESTS - label_of
    // ============================================================

    #[test]
    fn test_label_of_returns_cluster_name() {
        let partition = Partition::build(&template(&[0, 1, 2, 2]), 4).expect("build failed");

        assert_eq!(partition.label_of(0), "Cluster 0");
        assert_eq!(partition.label_of(2), "Cluster 2");
        assert_eq!(partition.label_of(3), "Cluster 2");
    }

    #[test]
    fn test_label_of_unassigned_position_is_empty() {
        let partition = Partition::build(&template(&[0, 1]), 2).expect("build failed");

        assert_eq!(partition.label_of(17), "");
    }

    // ============================================================
    // DISPERSION TESTS
    // ============================================================

    #[test]
    fn test_score_at_skips_out_of_range_positions() {
        let scores = [0.5, 0.25];

        assert_eq!(score_at(&scores, 1), Some(0.25));
        assert_eq!(score_at(&scores, 2), None);
    }

    #[test]
    fn test_centroids_average_member_scores() {
        let scores = [0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[0, 0, 1, 1]), 4).expect("build failed");

        let centroids = centroids(&partition, &scores);

        assert!((centroids[0] - 0.85).abs() < 1e-6);
        assert!((centroids[1] - 0.075).abs() < 1e-6);
    }

    #[test]
    fn test_centroids_empty_slot_is_zero() {
        let scores = [0.9, 0.8];
        let partition = Partition::build(&template(&[0, 0]), 2).expect("build failed");

        let centroids = centroids(&partition, &scores);

        assert_eq!(centroids[1], 0.0);
        assert_eq!(centroids[4], 0.0);
    }

    #[test]
    fn test_evaluate_combined_magnitude_formula() {
        // cluster0 = {0.9, 0.8} centroid 0.85, cluster1 = {0.1, 0.05}
        // centroid 0.075; every member contributes sqrt(centroid² + score²).
        let scores = [0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[0, 0, 1, 1]), 4).expect("build failed");

        let expected = (0.85f32 * 0.85 + 0.9 * 0.9).sqrt()
            + (0.85f32 * 0.85 + 0.8 * 0.8).sqrt()
            + (0.075f32 * 0.075 + 0.1 * 0.1).sqrt()
            + (0.075f32 * 0.075 + 0.05 * 0.05).sqrt();
        let total = evaluate(&partition, &scores);

        assert!((total - expected).abs() < 1e-6);
        assert!((total - 2.616).abs() < 1e-3);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let scores = [0.77, 0.31, 0.29, 0.11, 0.07];
        let partition = Partition::build(&template(&[3, 1, 4, 1, 0]), 5).expect("build failed");

        let first = evaluate(&partition, &scores);
        let second = evaluate(&partition, &scores);

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_evaluate_skips_out_of_range_positions() {
        let partition = Partition::build(&template(&[0, 0, 0, 0]), 4).expect("build failed");

        // Only the two in-range positions contribute.
        let truncated = [0.9f32, 0.8];
        let centroid = 0.85f32;
        let expected = (centroid * centroid + 0.9 * 0.9).sqrt()
            + (centroid * centroid + 0.8f32 * 0.8).sqrt();

        assert!((evaluate(&partition, &truncated) - expected).abs() < 1e-6);
    }

    // ============================================================
    // SELECTOR TESTS
    // ============================================================

    #[test]
    fn test_select_best_partition_is_minimal() {
        let content = format!(
            "{}\n{}\n{}\n",
            table_line(&[0, 0, 0, 0]),
            table_line(&[0, 0, 1, 1]),
            table_line(&[0, 1, 2, 3]),
        );
        let table = CoveringDesignTable::parse(&content).expect("parse failed");
        let scores = [0.9, 0.8, 0.1, 0.05];

        let best = select_best_partition(&scores, 4, &table).expect("selection failed");
        let best_dispersion = evaluate(&best, &scores);

        for template in table.templates() {
            let candidate = Partition::build(template, 4).expect("build failed");
            assert!(best_dispersion <= evaluate(&candidate, &scores));
        }
    }

    #[test]
    fn test_select_best_partition_tie_breaks_to_first_template() {
        // With identical scores every assignment disperses identically, so
        // the first template must win.
        let content = format!("{}\n{}\n", table_line(&[1, 1, 1, 1]), table_line(&[2, 2, 2, 2]));
        let table = CoveringDesignTable::parse(&content).expect("parse failed");
        let scores = [0.5, 0.5, 0.5, 0.5];

        let best = select_best_partition(&scores, 4, &table).expect("selection failed");

        assert_eq!(best.slots()[1], vec![0, 1, 2, 3]);
        assert!(best.slots()[2].is_empty());
    }

    #[test]
    fn test_select_best_partition_rejects_too_many_results() {
        let table = CoveringDesignTable::parse("").expect("parse failed");
        let err = select_best_partition(&[0.1], 21, &table).unwrap_err();

        // The result-count check fires before the table is consulted.
        assert!(matches!(err, ClusterError::TooManyResults { .. }));
    }

    #[test]
    fn test_select_best_partition_empty_table_fails() {
        let table = CoveringDesignTable::parse("").expect("parse failed");
        let err = select_best_partition(&[0.9, 0.8], 2, &table).unwrap_err();

        assert!(matches!(err, ClusterError::EmptyDesignTable));
    }

    // ============================================================
    // INTERNAL EVALUATION TESTS
    // ============================================================

    #[test]
    fn test_within_dispersion_uses_squared_deviations() {
        let scores = vec![0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[0, 0, 1, 1]), 4).expect("build failed");
        let evaluation = InternalEvaluation::new(partition, scores);

        // cluster0: (0.9-0.85)² + (0.8-0.85)², cluster1: (0.1-0.075)² + (0.05-0.075)²
        let expected = 0.0025f32 + 0.0025 + 0.000625 + 0.000625;

        assert!((evaluation.within_cluster_dispersion() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_within_dispersion_single_cluster_equals_population_ssd() {
        let scores = vec![0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[0, 0, 0, 0]), 4).expect("build failed");
        let evaluation = InternalEvaluation::new(partition, scores.clone());

        let mean: f32 = scores.iter().sum::<f32>() / scores.len() as f32;
        let ssd: f32 = scores.iter().map(|s| (s - mean).powi(2)).sum();

        assert!((evaluation.within_cluster_dispersion() - ssd).abs() < 1e-6);
    }

    #[test]
    fn test_between_dispersion_zero_for_single_populated_cluster() {
        let scores = vec![0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[2, 2, 2, 2]), 4).expect("build failed");
        let evaluation = InternalEvaluation::new(partition, scores);

        assert!(evaluation.between_cluster_dispersion().abs() < 1e-6);
    }

    #[test]
    fn test_between_dispersion_two_clusters() {
        let scores = vec![0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[0, 0, 1, 1]), 4).expect("build failed");
        let evaluation = InternalEvaluation::new(partition, scores);

        // global average 0.4625; 2·(0.85-0.4625)² + 2·(0.075-0.4625)²
        let expected = 2.0 * (0.85f32 - 0.4625).powi(2) + 2.0 * (0.075f32 - 0.4625).powi(2);

        assert!((evaluation.between_cluster_dispersion() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_evaluation_exposes_centroids() {
        let scores = vec![0.9, 0.8, 0.1, 0.05];
        let partition = Partition::build(&template(&[0, 0, 1, 1]), 4).expect("build failed");
        let evaluation = InternalEvaluation::new(partition, scores);

        let centroids = evaluation.centroids();

        assert_eq!(centroids.len(), CLUSTER_SLOTS);
        assert!((centroids[0] - 0.85).abs() < 1e-6);
        assert!((centroids[1] - 0.075).abs() < 1e-6);
        assert_eq!(centroids[4], 0.0);
    }

    #[test]
    fn test_evaluation_skips_out_of_range_positions() {
        // Partition references positions 2 and 3 beyond the score list.
        let partition = Partition::build(&template(&[0, 0, 1, 1]), 4).expect("build failed");
        let evaluation = InternalEvaluation::new(partition, vec![0.9, 0.8]);

        // cluster1 has two members but no in-range scores: centroid 0.
        assert_eq!(evaluation.centroids()[1], 0.0);
        // within-dispersion only counts the in-range members of cluster0.
        let expected = (0.9f32 - 0.85).powi(2) + (0.8f32 - 0.85).powi(2);
        assert!((evaluation.within_cluster_dispersion() - expected).abs() < 1e-6);
    }
}
