#[cfg(test)]
mod tests {
    use crate::dataset::{distinct_values, DistinctValue};
    use crate::model::{EmpiricalFrequencyModel, GaussianKernelModel};
    use crate::partition::*;
    use std::collections::HashSet;

    fn reference_distinct() -> Vec<DistinctValue> {
        distinct_values(&[9.0, 10.0, 10.0, 2.0, 1.0])
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    #[test]
    fn test_population_std_dev() {
        assert_eq!(population_std_dev(&[10.0, 10.0]), 0.0);
        assert_eq!(population_std_dev(&[7.0]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);

        let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_near_f64_max_stays_finite() {
        let sd = population_std_dev(&[1.7e308, -1.7e308]);
        assert!(sd.is_finite());
        assert!((sd / 1.7e308 - 1.0).abs() < 1e-12);

        let sd = population_std_dev(&[1e200, -1e200, 1e200, -1e200]);
        assert!((sd / 1e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[0.0, 0.0]), Some(0.0));
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]).unwrap() - 2.5).abs() < 1e-15);

        let m = mean(&[1.7e308, 1.7e308]).unwrap();
        assert!((m / 1.7e308 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_moments() {
        let moments: Moments = [1.0, 2.0, 3.0, 4.0].into_iter().collect();

        assert_eq!(moments.count(), 4);
        assert!((moments.mean().unwrap() - 2.5).abs() < 1e-15);
        assert!((moments.population_variance().unwrap() - 1.25).abs() < 1e-12);
        assert!(Moments::new().mean().is_none());
        assert!(Moments::new().population_variance().is_none());
    }

    #[test]
    fn test_shannon_entropy_bits() {
        assert_eq!(shannon_entropy_bits(&[1.0]), 0.0);
        assert!((shannon_entropy_bits(&[0.5, 0.5]) - 1.0).abs() < 1e-12);
        assert!((shannon_entropy_bits(&[0.25; 4]) - 2.0).abs() < 1e-12);
        // Zero-probability terms are skipped rather than producing NaN
        assert!((shannon_entropy_bits(&[0.5, 0.0, 0.5]) - 1.0).abs() < 1e-12);
    }

    // ========================================================================
    // Partition construction
    // ========================================================================

    #[test]
    fn test_partition_from_code_expands_multiplicities() {
        let distinct = reference_distinct();
        // 1 -> 0, 2 -> 0, 9 -> 1, 10 -> 1
        let partition = Partition::from_code(&[0, 0, 1, 1], &distinct);

        assert_eq!(
            partition.clusters(),
            &[vec![1.0, 2.0], vec![9.0, 10.0, 10.0]]
        );
        assert_eq!(partition.cluster_count(), 2);
    }

    #[test]
    fn test_partition_canonical_cluster_order() {
        let distinct = reference_distinct();
        // Cluster 0 holds the large values, but sorts after the small ones
        let partition = Partition::from_code(&[1, 1, 0, 0], &distinct);

        assert_eq!(
            partition.clusters(),
            &[vec![1.0, 2.0], vec![9.0, 10.0, 10.0]]
        );
    }

    #[test]
    fn test_partition_from_clusters_sorts_and_drops_empty() {
        let partition =
            Partition::from_clusters(vec![vec![10.0, 9.0], vec![], vec![2.0, 1.0, 2.0]]);

        assert_eq!(partition.clusters(), &[vec![1.0, 2.0, 2.0], vec![9.0, 10.0]]);
    }

    #[test]
    fn test_partition_prefix_cluster_sorts_first() {
        let partition = Partition::from_clusters(vec![vec![10.0, 10.0], vec![10.0]]);
        assert_eq!(partition.clusters(), &[vec![10.0], vec![10.0, 10.0]]);
    }

    #[test]
    fn test_relabelled_codes_score_identically() {
        let distinct = reference_distinct();
        let model = EmpiricalFrequencyModel;

        let a = score_code(&[0, 1, 2, 0], &distinct, &model);
        let b = score_code(&[2, 0, 1, 2], &distinct, &model);
        let c = score_code(&[1, 2, 0, 1], &distinct, &model);

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.entropy.to_bits(), b.entropy.to_bits());
        assert_eq!(a.dispersion.to_bits(), c.dispersion.to_bits());
    }

    #[test]
    fn test_equal_partitions_hash_alike() {
        let distinct = reference_distinct();
        let model = EmpiricalFrequencyModel;

        let mut set = HashSet::new();
        set.insert(score_code(&[0, 0, 1, 1], &distinct, &model));
        set.insert(score_code(&[1, 1, 0, 0], &distinct, &model));
        set.insert(score_code(&[0, 1, 1, 1], &distinct, &model));

        assert_eq!(set.len(), 2);
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    #[test]
    fn test_single_cluster_scores() {
        let distinct = reference_distinct();
        let scored = score_code(&[0, 0, 0, 0], &distinct, &EmpiricalFrequencyModel);

        let expected_entropy = -(3.0 * 0.2 * 0.2f64.log2() + 0.4 * 0.4f64.log2());
        assert!((scored.entropy - expected_entropy).abs() < 1e-12);
        assert!((scored.entropy - 1.921928).abs() < 1e-6);
        assert!((scored.dispersion - 4.029888).abs() < 1e-6);
        assert_eq!(scored.cluster_count(), 1);
    }

    #[test]
    fn test_isolated_values_have_zero_entropy() {
        let distinct = reference_distinct();
        let scored = score_code(&[3, 2, 1, 0], &distinct, &EmpiricalFrequencyModel);

        assert_eq!(scored.entropy, 0.0);
        // Only [10, 10] has spread, and it is zero
        assert_eq!(scored.dispersion, 0.0);
        assert_eq!(scored.cluster_count(), 4);
    }

    #[test]
    fn test_pure_cluster_skips_model() {
        assert_eq!(cluster_entropy(&[4.0, 4.0, 4.0], &EmpiricalFrequencyModel), 0.0);
        assert_eq!(
            cluster_entropy(&[4.0, 4.0, 4.0], &GaussianKernelModel::default()),
            0.0
        );
        assert_eq!(cluster_entropy(&[], &EmpiricalFrequencyModel), 0.0);
    }

    #[test]
    fn test_mixed_cluster_entropy() {
        let entropy = cluster_entropy(&[1.0, 2.0], &EmpiricalFrequencyModel);
        assert!((entropy - 1.0).abs() < 1e-12);

        assert!((cluster_dispersion(&[1.0, 2.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_scores_are_non_negative() {
        let distinct = reference_distinct();
        let model = GaussianKernelModel::new(2.0).unwrap();

        for code in crate::codes::surjective_codes(distinct.len(), 2) {
            let scored = score_code(&code, &distinct, &model);
            assert!(scored.entropy >= 0.0);
            assert!(scored.dispersion >= 0.0);
        }
    }

    #[test]
    fn test_quality_order() {
        let low = ScoredPartition {
            partition: Partition::from_clusters(vec![vec![1.0]]),
            entropy: 0.0,
            dispersion: 1.0,
        };
        let low_narrow = ScoredPartition {
            partition: Partition::from_clusters(vec![vec![2.0]]),
            entropy: 0.0,
            dispersion: 0.5,
        };
        let high = ScoredPartition {
            partition: Partition::from_clusters(vec![vec![3.0]]),
            entropy: 1.0,
            dispersion: 5.0,
        };

        assert!(low.quality_cmp(&high).is_lt());
        // Same entropy: wider spread ranks first
        assert!(low.quality_cmp(&low_narrow).is_lt());
        assert!(low_narrow.quality_cmp(&high).is_lt());
    }

    #[test]
    fn test_rank_breaks_exact_ties_by_partition() {
        let a = ScoredPartition {
            partition: Partition::from_clusters(vec![vec![1.0], vec![2.0]]),
            entropy: 0.0,
            dispersion: 0.0,
        };
        let b = ScoredPartition {
            partition: Partition::from_clusters(vec![vec![1.0, 2.0]]),
            entropy: 0.0,
            dispersion: 0.0,
        };

        assert!(a.quality_cmp(&b).is_eq());
        assert!(a.rank_cmp(&b).is_lt());
        assert_ne!(a, b);
    }
}
