//! Greedy ratio-driven partitioning.
//!
//! This module turns a finite element sequence into an ordered sequence
//! of pairwise-disjoint groups. The pipeline has four pluggable pieces:
//!
//! 1. an [`Indexer`] canonicalizes the caller's collection,
//! 2. a [`SubsetEnumerator`] produces the candidate pool (normally the
//!    [`Powerset`]),
//! 3. a [`CandidateCost`](crate::cost::CandidateCost) scores candidates,
//! 4. a [`PartitionSolver`] (normally [`GreedyCover`]) repeatedly keeps
//!    the cheapest candidate per claimed element and discards everything
//!    that overlaps it.
//!
//! Every piece is a one-method trait, so each can be replaced
//! independently; a stub solver that echoes its input is a perfectly
//! good test double.
//!
//! ## Scaling
//!
//! The powerset pool holds `2^n - 1` candidates. The engine is built for
//! small universes (team rosters, responsibility sets); past roughly
//! 20-25 elements enumeration alone is infeasible, and no internal guard
//! will save the caller from that.
//!
//! ## Usage
//!
//! ```rust
//! use cohort::{
//!     solve, AbsDiff, BiasedMeanPairwise, BoundCost, GreedyCover, Powerset, SeqIndexer,
//! };
//!
//! // Bias 3 makes singletons expensive enough that one tight group wins.
//! let cost = BoundCost::new(BiasedMeanPairwise::new(3.0), &AbsDiff);
//! let partition = solve(&GreedyCover::new(), &SeqIndexer, &Powerset, &cost, vec![1, 2, 3])?;
//!
//! assert_eq!(partition.groups(), &[vec![1, 2, 3]]);
//! # Ok::<(), cohort::Error>(())
//! ```

mod greedy;
mod index;
mod powerset;
mod solution;
mod traits;

pub use greedy::GreedyCover;
pub use index::SeqIndexer;
pub use powerset::Powerset;
pub use solution::Partition;
pub use traits::{Indexer, PartitionSolver, SubsetEnumerator};

use crate::cost::CandidateCost;
use crate::error::Result;

/// Run the full pipeline: index, enumerate, solve.
///
/// The element collection is indexed once, the candidate pool is built
/// from the indexed sequence, and the solver consumes both. Errors from
/// the indexer or solver propagate unchanged.
pub fn solve<T, S, I, P, C>(
    solver: &S,
    indexer: &I,
    enumerator: &P,
    cost: &C,
    group: Vec<T>,
) -> Result<Partition<T>>
where
    S: PartitionSolver<T>,
    I: Indexer<T>,
    P: SubsetEnumerator<T>,
    C: CandidateCost<T>,
{
    let elements = indexer.index(group)?;
    let candidates = enumerator.subsets(&elements);
    solver.solve(&elements, candidates, cost)
}
