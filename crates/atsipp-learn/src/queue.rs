//! Priority queue shared by the backward Dijkstra passes.

use std::cmp::Ordering;

use atsipp_core::{StateId, Time};
use atsipp_search::{IndexedMinHeap, Indexing};

/// Queue entry: smallest `value` first, ties by state id.
#[derive(Copy, Clone, Debug)]
pub struct DijkstraKey {
    pub value: Time,
    pub state: StateId,
}

impl Ord for DijkstraKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value).then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for DijkstraKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DijkstraKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraKey {}

impl Indexing for DijkstraKey {
    #[inline]
    fn as_index(&self) -> usize {
        self.state.index()
    }
}

/// Indexed min-heap of [`DijkstraKey`]s.
pub type DijkstraQueue = IndexedMinHeap<DijkstraKey>;

/// Push `key`, or lower the queued entry of the same state if `key` is
/// smaller.  Returns whether the queue changed.
pub(crate) fn push_or_decrease(queue: &mut DijkstraQueue, key: DijkstraKey) -> bool {
    match queue.get(key.state.index()) {
        Some(old) if key < *old => {
            queue.decrease_key(key);
            true
        }
        Some(_) => false,
        None => {
            queue.push(key);
            true
        }
    }
}
