//! Greedy minimum-ratio cover.
//!
//! The classic greedy heuristic for weighted set cover (Chvátal, 1979),
//! specialized to *disjoint* selection: after a candidate is chosen, every
//! pooled candidate sharing an element with it is discarded, so the output
//! is a partition-style family of pairwise-disjoint groups rather than an
//! overlapping cover.
//!
//! ## Selection rule
//!
//! Each round scores every pooled candidate with
//!
//! ```text
//! ratio = cost(candidate) / |candidate ∩ universe|
//! ```
//!
//! and keeps the minimum. A candidate sharing nothing with the universe
//! gets ratio +∞, so it can only be chosen once no finite-ratio candidate
//! remains.
//!
//! The denominator intersects the *full* universe every round, not the
//! elements still uncovered. That is deliberate, and it is also the only
//! behavior reachable here: the disjointness filter removes every
//! candidate touching a covered element, so a surviving candidate's
//! overlap with the uncovered remainder always equals its overlap with
//! the universe. One consequence is worth knowing: for a pool drawn from
//! the universe's powerset the ratio is simply `cost / size` for the
//! whole run.
//!
//! ## Complexity
//!
//! With a pool of `m` candidates of size up to `k`: each round re-scores
//! and stable-sorts the pool, `O(m·k² + m log m)` with the pairwise cost
//! functions, and the number of rounds is at most the number of groups
//! selected plus the rounds that drain infinite-ratio leftovers. For a
//! powerset pool `m = 2^n - 1`, which dominates everything else.
//!
//! ## Guarantees and non-guarantees
//!
//! - Groups in the result are pairwise disjoint.
//! - The result is deterministic: the sort is stable, so equal ratios
//!   keep the pool's prior order (initially the enumerator's order).
//! - Total cost is *not* minimized; this is a heuristic.
//! - Coverage is *not* guaranteed: once the pool empties, unclaimed
//!   elements are simply absent from the result.
//!
//! ## References
//!
//! Chvátal (1979). "A greedy heuristic for the set-covering problem."
//! Mathematics of Operations Research 4(3).

use super::traits::PartitionSolver;
use super::Partition;
use crate::cost::CandidateCost;
use crate::error::{Error, Result};

/// Greedy minimum-ratio solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyCover;

impl GreedyCover {
    /// Create the solver.
    pub fn new() -> Self {
        Self
    }
}

/// Occurrences of `a`'s items that also appear in `b`.
fn overlap<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().filter(|x| b.iter().any(|y| y == *x)).count()
}

impl<T> PartitionSolver<T> for GreedyCover
where
    T: Clone + PartialEq,
{
    fn solve<C>(&self, elements: &[T], candidates: Vec<Vec<T>>, cost: &C) -> Result<Partition<T>>
    where
        C: CandidateCost<T>,
    {
        // Degenerate universes skip candidate selection entirely and come
        // back unchanged: no groups for zero elements, one group for one.
        if elements.len() <= 1 {
            let groups = if elements.is_empty() {
                Vec::new()
            } else {
                vec![elements.to_vec()]
            };
            return Ok(Partition::from_groups(groups));
        }

        if let Some(index) = candidates.iter().position(|c| c.is_empty()) {
            return Err(Error::EmptyCandidate { index });
        }

        let mut pool = candidates;
        let mut used: Vec<Vec<T>> = Vec::new();

        while !pool.is_empty() {
            let mut keyed: Vec<(f64, Vec<T>)> = pool
                .drain(..)
                .map(|candidate| {
                    let shared = overlap(&candidate, elements);
                    let ratio = if shared == 0 {
                        f64::INFINITY
                    } else {
                        cost.cost(&candidate) / shared as f64
                    };
                    (ratio, candidate)
                })
                .collect();

            // Stable: ties keep the pool's prior relative order.
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut ranked = keyed.into_iter().map(|(_, candidate)| candidate);
            let Some(selected) = ranked.next() else { break };

            pool = ranked.filter(|c| overlap(c, &selected) == 0).collect();
            used.push(selected);
        }

        Ok(Partition::from_groups(used))
    }
}
