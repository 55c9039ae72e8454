//! Module for constructing lists as Nodes without building in reverse or
//! tolerating O(n) insertion => O(n^2) total construction.
//!
//! Not concurrency-safe; meant to be used serially.

use super::cons::Cons;
use super::node::HeapNode;


#[derive(Debug, Default)]
pub struct ConsList {
    elements: Vec<Option<HeapNode>>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The list built so far; None if nothing was appended.
    pub fn release(self) -> Option<HeapNode> {
        self.release_with_tail(None)
    }

    /// Like release, but the final rest is tail rather than empty.
    ///
    /// tail must itself be a list (or None).
    pub fn release_with_tail(self, tail: Option<HeapNode>) -> Option<HeapNode> {
        // Links are created back to front; each element is moved, not copied.
        let mut rest = tail;
        for first in self.elements.into_iter().rev() {
            rest = Some(Cons::new(first, rest).into());
        }
        rest
    }

    pub fn append<T: Into<HeapNode>>(&mut self, val: T) {
        self.elements.push(Some(val.into()));
    }

    /// Append an element that may be absent (an empty-list element).
    pub fn push(&mut self, element: Option<HeapNode>) {
        self.elements.push(element);
    }
}

impl Extend<Option<HeapNode>> for ConsList {
    fn extend<I: IntoIterator<Item = Option<HeapNode>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}


#[cfg(test)]
#[path = "./cons_list_test.rs"]
mod cons_list_test;
