use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A push-only min-priority queue over `(priority, vertex)` entries
///
/// There is no decrease-key: callers push a new entry whenever a priority
/// improves and discard outdated entries when they are popped. Entries with
/// equal priority come out in ascending vertex order, so pop order is fully
/// determined by the pushed entries.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,

    /// Number of entries pushed since creation
    pushes: usize,
}

impl<V, P> MinQueue<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries currently queued, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns how many entries have been pushed so far
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
        self.pushes += 1;
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
