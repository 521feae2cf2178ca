//! Element indexing.

use super::traits::Indexer;
use crate::error::Result;

/// Identity indexer: materializes the input sequence unchanged.
///
/// No reordering, no deduplication, no side effects. Finiteness and
/// orderedness are already guaranteed by `Vec`, so this indexer never
/// fails; fallible indexers only arise for custom caller-side inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqIndexer;

impl<T> Indexer<T> for SeqIndexer {
    fn index(&self, group: Vec<T>) -> Result<Vec<T>> {
        Ok(group)
    }
}
