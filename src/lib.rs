//! # cohort
//!
//! Greedy cost-ratio partitioning of small element universes: enumerate
//! every non-empty subset of an element sequence, score each with a
//! pluggable distance-based cost, and repeatedly keep the candidate with
//! the lowest cost per claimed element, discarding everything that
//! overlaps it.
//!
//! The engine is generic over the element type, the distance metric, the
//! cost function, and each pipeline stage. It is deliberately exhaustive
//! rather than clever: the candidate pool is the full powerset, so the
//! intended scale is tens of elements at most (team rosters,
//! responsibility sets).
//!
//! ```rust
//! use cohort::{
//!     solve, BiasedMeanPairwise, BoundCost, GreedyCover, Powerset, SeqIndexer,
//! };
//!
//! let affinity = |a: &i32, b: &i32| (a - b).abs() as f64;
//!
//! // Bias 0: opening a group is free, so everything ends up alone.
//! let cost = BoundCost::new(BiasedMeanPairwise::new(0.0), &affinity);
//! let partition = solve(&GreedyCover::new(), &SeqIndexer, &Powerset, &cost, vec![1, 2, 3])?;
//! assert_eq!(partition.groups(), &[vec![1], vec![2], vec![3]]);
//! # Ok::<(), cohort::Error>(())
//! ```

pub mod cost;
pub mod distance;
/// Error types used across `cohort`.
pub mod error;
pub mod metrics;
pub mod partition;


pub use cost::{
    eccentricity, AvgEccentricity, BiasedMeanPairwise, BoundCost, CandidateCost, MaxEccentricity,
    SubsetCost,
};
pub use distance::{AbsDiff, MatrixMetric, Metric};
pub use error::{Error, Result};
pub use metrics::{coverage, group_costs, mean_group_size, total_cost};
pub use partition::{
    solve, GreedyCover, Indexer, Partition, PartitionSolver, Powerset, SeqIndexer, SubsetEnumerator,
};
