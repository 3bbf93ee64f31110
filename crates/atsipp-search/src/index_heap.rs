//! Indexed 4-ary min-heap with decrease-key.
//!
//! Elements map to a unique index in `[0, max_index)` through [`Indexing`];
//! a position table turns that index into the element's slot so keys can be
//! changed in place.  `peek` is O(1), `push`/`pop`/key updates O(log n).

use std::cmp::{Ordering, min};

/// Map a heap element to a unique `usize` index.
pub trait Indexing {
    fn as_index(&self) -> usize;
}

const TREE_ARITY: usize = 4;
const INVALID_POSITION: usize = usize::MAX;

/// Min-heap over elements with unique indices, ordered by `Ord`.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    positions: Vec<usize>,
    data:      Vec<T>,
}

impl<T: Ord + Indexing> IndexedMinHeap<T> {
    /// Empty heap accepting indices in `[0, max_index)`.
    pub fn new(max_index: usize) -> Self {
        Self { positions: vec![INVALID_POSITION; max_index], data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_index(&self, id: usize) -> bool {
        self.positions.get(id).is_some_and(|&p| p != INVALID_POSITION)
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        self.positions.get(id).and_then(|&p| self.data.get(p))
    }

    /// All elements, in no particular order.
    pub fn elements(&self) -> &[T] {
        &self.data
    }

    /// Remove every element.  Cost is proportional to the current length.
    pub fn clear(&mut self) {
        for element in &self.data {
            self.positions[element.as_index()] = INVALID_POSITION;
        }
        self.data.clear();
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap_slots(0, last);
        let item = self.data.pop()?;
        self.positions[item.as_index()] = INVALID_POSITION;
        if !self.data.is_empty() {
            self.move_down_in_tree(0);
        }
        Some(item)
    }

    /// Insert `element`.  Its index must not be present yet.
    pub fn push(&mut self, element: T) {
        let idx = element.as_index();
        debug_assert!(!self.contains_index(idx), "index {idx} pushed twice");
        if idx >= self.positions.len() {
            self.positions.resize(idx + 1, INVALID_POSITION);
        }
        let pos = self.data.len();
        self.positions[idx] = pos;
        self.data.push(element);
        self.move_up_in_tree(pos);
    }

    /// Replace the element with the same index, moving it either way.
    pub fn update_key(&mut self, element: T) {
        let pos = self.positions[element.as_index()];
        match element.cmp(&self.data[pos]) {
            Ordering::Less => self.decrease_key(element),
            Ordering::Greater => self.increase_key(element),
            Ordering::Equal => self.data[pos] = element,
        }
    }

    /// Replace with a key that is not larger than the current one.
    pub fn decrease_key(&mut self, element: T) {
        let pos = self.positions[element.as_index()];
        self.data[pos] = element;
        self.move_up_in_tree(pos);
    }

    /// Replace with a key that is not smaller than the current one.
    pub fn increase_key(&mut self, element: T) {
        let pos = self.positions[element.as_index()];
        self.data[pos] = element;
        self.move_down_in_tree(pos);
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.positions.swap(self.data[a].as_index(), self.data[b].as_index());
        self.data.swap(a, b);
    }

    fn move_up_in_tree(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / TREE_ARITY;
            if self.data[parent] <= self.data[position] {
                break;
            }
            self.swap_slots(parent, position);
            position = parent;
        }
    }

    fn move_down_in_tree(&mut self, mut position: usize) {
        loop {
            let first = TREE_ARITY * position + 1;
            let last = min(first + TREE_ARITY, self.data.len());
            let Some(smallest) = (first..last).min_by(|&a, &b| self.data[a].cmp(&self.data[b])) else {
                return;
            };
            if self.data[smallest] >= self.data[position] {
                return;
            }
            self.swap_slots(smallest, position);
            position = smallest;
        }
    }
}
