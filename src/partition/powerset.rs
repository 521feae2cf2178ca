//! Candidate enumeration: the powerset minus the empty set.
//!
//! For `n` elements the pool holds `2^n - 1` candidates, each cloned out
//! of the universe. This is the engine's dominant cost: memory and time
//! are exponential in `n`, and nothing here guards against it. Beyond
//! roughly 20-25 elements enumeration is computationally infeasible;
//! callers own that limit.

use itertools::Itertools;

use super::traits::SubsetEnumerator;

/// Enumerates every non-empty subset of the element sequence.
///
/// Candidates are emitted by increasing size and, within a size, in index
/// order, so the pool order is deterministic for a given input ordering.
/// An empty sequence yields an empty pool.
///
/// ```rust
/// use cohort::{Powerset, SubsetEnumerator};
///
/// let pool = Powerset.subsets(&['a', 'b', 'c']);
/// assert_eq!(pool.len(), 7);
/// assert_eq!(pool[0], vec!['a']);
/// assert_eq!(pool[3], vec!['a', 'b']);
/// assert_eq!(pool[6], vec!['a', 'b', 'c']);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Powerset;

impl<T: Clone> SubsetEnumerator<T> for Powerset {
    fn subsets(&self, elements: &[T]) -> Vec<Vec<T>> {
        (1..=elements.len())
            .flat_map(|size| elements.iter().cloned().combinations(size))
            .collect()
    }
}
