//! Partitioning traits.
//!
//! The engine's four pluggable seams are the indexer, the subset
//! enumerator, the cost (see [`crate::cost`]), and the solver. Each is a
//! one-method trait so any of them can be swapped out independently,
//! including with test stubs.

use super::Partition;
use crate::cost::CandidateCost;
use crate::error::Result;

/// Canonicalizes a caller-supplied collection into the element sequence.
pub trait Indexer<T> {
    /// Materialize `group` as the ordered element sequence.
    ///
    /// Implementations must not reorder or deduplicate. A rejection is
    /// reported as [`Error::InvalidInput`](crate::Error::InvalidInput).
    fn index(&self, group: Vec<T>) -> Result<Vec<T>>;
}

/// Produces the candidate pool for a canonical element sequence.
pub trait SubsetEnumerator<T> {
    /// All candidate subsets of `elements`, in a deterministic order.
    fn subsets(&self, elements: &[T]) -> Vec<Vec<T>>;
}

/// Partitions an element sequence by consuming a candidate pool.
pub trait PartitionSolver<T> {
    /// Select disjoint groups out of `candidates`.
    ///
    /// `elements` is the reference universe; it is read, never mutated.
    fn solve<C>(&self, elements: &[T], candidates: Vec<Vec<T>>, cost: &C) -> Result<Partition<T>>
    where
        C: CandidateCost<T>;
}
