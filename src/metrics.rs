//! Partition evaluation metrics.
//!
//! Pure reporting helpers over a finished [`Partition`]: per-group and
//! total cost, how much of the universe the groups claimed, and the
//! average group size. The solver never consults these; they exist for
//! callers and for property tests of solver quality.
//!
//! # Example
//!
//! ```rust
//! use cohort::{coverage, total_cost, Partition};
//!
//! let partition = Partition::from_groups(vec![vec![1, 2], vec![4]]);
//!
//! let by_len = |group: &[i32]| group.len() as f64;
//! assert_eq!(total_cost(&partition, &by_len), 3.0);
//! assert_eq!(coverage(&partition, &[1, 2, 3, 4]), 0.75);
//! ```

use crate::cost::CandidateCost;
use crate::partition::Partition;

/// Sum of the cost over every group, in selection order.
pub fn total_cost<T, C>(partition: &Partition<T>, cost: &C) -> f64
where
    C: CandidateCost<T>,
{
    partition.iter().map(|group| cost.cost(group)).sum()
}

/// Cost of each group, in selection order.
pub fn group_costs<T, C>(partition: &Partition<T>, cost: &C) -> Vec<f64>
where
    C: CandidateCost<T>,
{
    partition.iter().map(|group| cost.cost(group)).collect()
}

/// Fraction of universe occurrences that landed in some group.
///
/// Membership is by value equality, counted per occurrence of the
/// universe sequence: a duplicated value is covered at every occurrence
/// as soon as any group holds that value. An empty universe is vacuously
/// fully covered.
pub fn coverage<T: PartialEq>(partition: &Partition<T>, universe: &[T]) -> f64 {
    if universe.is_empty() {
        return 1.0;
    }
    let claimed = universe
        .iter()
        .filter(|x| partition.iter().any(|group| group.contains(x)))
        .count();
    claimed as f64 / universe.len() as f64
}

/// Mean number of elements per group; 0 for an empty partition.
pub fn mean_group_size<T>(partition: &Partition<T>) -> f64 {
    if partition.is_empty() {
        return 0.0;
    }
    let total: usize = partition.iter().map(|group| group.len()).sum();
    total as f64 / partition.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{BiasedMeanPairwise, BoundCost};
    use crate::distance::AbsDiff;

    #[test]
    fn test_total_cost_sums_groups() {
        let p = Partition::from_groups(vec![vec![1, 2], vec![5]]);
        let cost = BoundCost::new(BiasedMeanPairwise::new(1.0), &AbsDiff);
        // Pair: 1 + 2/2 = 2; singleton: 1.
        assert_eq!(total_cost(&p, &cost), 3.0);
        assert_eq!(group_costs(&p, &cost), vec![2.0, 1.0]);
    }

    #[test]
    fn test_total_cost_empty_partition() {
        let p: Partition<i32> = Partition::default();
        let cost = BoundCost::new(BiasedMeanPairwise::new(1.0), &AbsDiff);
        assert_eq!(total_cost(&p, &cost), 0.0);
        assert!(group_costs(&p, &cost).is_empty());
    }

    #[test]
    fn test_coverage() {
        let p = Partition::from_groups(vec![vec![1], vec![3]]);
        assert_eq!(coverage(&p, &[1, 2, 3, 4]), 0.5);
        assert_eq!(coverage(&p, &[1, 3]), 1.0);
        assert_eq!(coverage(&p, &[]), 1.0);
    }

    #[test]
    fn test_coverage_counts_occurrences() {
        // The value 1 is claimed, so both occurrences count as covered.
        let p = Partition::from_groups(vec![vec![1]]);
        assert_eq!(coverage(&p, &[1, 1, 2]), 2.0 / 3.0);
    }

    #[test]
    fn test_mean_group_size() {
        let p = Partition::from_groups(vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(mean_group_size(&p), 2.0);

        let p: Partition<i32> = Partition::default();
        assert_eq!(mean_group_size(&p), 0.0);
    }
}
