//! `KaryHeap` — a min-heap with a configurable branching factor.
//!
//! Children of slot `i` live at `k*i + 1 ..= k*i + k`; the parent of slot
//! `i > 0` is `(i - 1) / k`.  Push costs O(log_k n) comparisons, pop costs
//! O(k · log_k n).  A larger `k` gives a shallower tree at the price of more
//! comparisons per sift-down level.

use crate::{SearchError, SearchResult};

/// Min-heap over `T: Ord` where every parent is ≤ each of its up-to-`k`
/// children.
///
/// Equal items pop in unspecified order.
#[derive(Clone, Debug)]
pub struct KaryHeap<T> {
    arity: usize,
    items: Vec<T>,
}

impl<T: Ord> KaryHeap<T> {
    /// Create an empty heap with branching factor `arity`.
    ///
    /// Fails with [`SearchError::InvalidConfiguration`] if `arity < 2`.
    pub fn new(arity: usize) -> SearchResult<Self> {
        Self::with_capacity(arity, 0)
    }

    pub fn with_capacity(arity: usize, capacity: usize) -> SearchResult<Self> {
        if arity < 2 {
            return Err(SearchError::InvalidConfiguration(format!(
                "heap arity must be at least 2, got {arity}"
            )));
        }
        Ok(Self { arity, items: Vec::with_capacity(capacity) })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum item.
    ///
    /// Fails with [`SearchError::EmptyQueue`] if the heap is empty.
    pub fn pop(&mut self) -> SearchResult<T> {
        if self.items.is_empty() {
            return Err(SearchError::EmptyQueue);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(SearchError::EmptyQueue)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / self.arity;
            if self.items[i] < self.items[parent] {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let first = i * self.arity + 1;
            if first >= len {
                break;
            }
            let end = (first + self.arity).min(len);

            let mut smallest = first;
            for child in first + 1..end {
                if self.items[child] < self.items[smallest] {
                    smallest = child;
                }
            }

            if self.items[smallest] < self.items[i] {
                self.items.swap(i, smallest);
                i = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Extend<T> for KaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
