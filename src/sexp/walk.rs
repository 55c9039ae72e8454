//! Depth-first traversal of a Node tree with an explicit stack.
//!
//! Every structural algorithm that must see the whole tree (fold, display,
//! equality, deep copy) is driven by Walk, so traversal depth is bounded by
//! heap rather than by the call stack.

use super::cons::Cons;
use super::node::Node;


/// One event of a depth-first walk.
///
/// A Pair-headed list produces Open, one event per element, then Close.
/// Elements are visited first before rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step<'a> {
    Open,
    /// An atomic node, either the root or a list element.
    Atom(&'a Node),
    /// An absent element (the empty list in element position).
    Empty,
    Close,
}

pub struct Walk<'a> {
    root: Option<&'a Node>,
    // Cursor into each open spine; None once the spine is exhausted.
    stack: Vec<Option<&'a Cons>>,
}

impl<'a> Walk<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Number of lists currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn enter(&mut self, node: &'a Node) -> Step<'a> {
        match node {
            Node::Atom(_) => Step::Atom(node),
            Node::Pair(cons) => {
                self.stack.push(Some(cons));
                Step::Open
            }
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(self.enter(root));
        }

        let cursor = self.stack.last_mut()?.take();
        match cursor {
            None => {
                self.stack.pop();
                Some(Step::Close)
            }
            Some(cons) => {
                if let Some(slot) = self.stack.last_mut() {
                    *slot = cons.next();
                }
                match cons.first() {
                    None => Some(Step::Empty),
                    Some(node) => Some(self.enter(node)),
                }
            }
        }
    }
}


#[cfg(test)]
#[path = "./walk_test.rs"]
mod walk_test;
