//! Constructors, accessors and structural algorithms over possibly-empty
//! trees.
//!
//! An empty tree is None throughout; every function here accepts it.

use log::trace;

use super::cons::Cons;
use super::cons_list::ConsList;
use super::node::{copy_tree, AtomValue, HeapNode, Node};
use super::walk::{Step, Walk};


/// Anything that can stand as one element of a list.
///
/// None is the empty-list element.
pub trait IntoElement {
    fn into_element(self) -> Option<HeapNode>;
}

impl IntoElement for AtomValue {
    fn into_element(self) -> Option<HeapNode> {
        Some(atom(self))
    }
}

impl IntoElement for Node {
    fn into_element(self) -> Option<HeapNode> {
        Some(HeapNode::new(self))
    }
}

impl IntoElement for HeapNode {
    fn into_element(self) -> Option<HeapNode> {
        Some(self)
    }
}

impl IntoElement for Option<HeapNode> {
    fn into_element(self) -> Option<HeapNode> {
        self
    }
}


/// Returns the elements as a list, moving each into it.
///
/// Elements may be AtomValues, Nodes, HeapNodes, or Option<HeapNode>s (so
/// lists nest). No elements yields None.
///
/// Example:
///   list!(1, list!(2, 3), 4)  // (1 (2 3) 4)
#[macro_export]
macro_rules! list {
    () => {
        None::<$crate::sexp::HeapNode>
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::sexp::list_of(
            std::vec![$($crate::sexp::IntoElement::into_element($elem)),+]
        )
    };
}


pub fn atom(value: AtomValue) -> HeapNode {
    HeapNode::new(Node::Atom(value))
}

/// Pair of first and rest, both moved in. rest must not be an Atom.
pub fn cons(first: Option<HeapNode>, rest: Option<HeapNode>) -> HeapNode {
    Cons::new(first, rest).into()
}

pub fn first(node: Option<&Node>) -> Option<&Node> {
    node.and_then(Node::first)
}

pub fn rest(node: Option<&Node>) -> Option<&Node> {
    node.and_then(Node::rest)
}

/// Value of an atomic node. Empty or non-atomic input is fatal.
pub fn value(node: Option<&Node>) -> AtomValue {
    match node {
        Some(node) => node.value(),
        None => fatal!("value requested from an empty node"),
    }
}

pub fn is_atomic(node: Option<&Node>) -> bool {
    node.map_or(false, Node::is_atomic)
}

/// Number of links in the spine; 0 for an empty or atomic node.
pub fn length(node: Option<&Node>) -> usize {
    match node {
        Some(node) if !node.is_atomic() => node.iter().count(),
        _ => 0,
    }
}

/// Fully independent copy of node.
pub fn deep_copy(node: Option<&Node>) -> Option<HeapNode> {
    node.and_then(copy_tree)
}

/// Release node and leave the reference empty.
///
/// Freeing an already-empty reference does nothing.
pub fn free(node: &mut Option<HeapNode>) {
    if let Some(released) = node.take() {
        trace!("Freeing tree of length {}", length(Some(&released)));
        drop(released);
    }
}

/// Call visit on every Atom, left to right and depth first.
///
/// Pairs are traversed but never visited; this includes bare Pairs, which
/// hold no value.
pub fn fold<A, F>(mut visit: F, node: Option<&Node>, acc: &mut A)
where
    F: FnMut(&Node, &mut A),
{
    for step in Walk::new(node) {
        if let Step::Atom(atom) = step {
            visit(atom, acc);
        }
    }
}

/// Sum of all atoms in the tree, wrapping on overflow.
pub fn sum(node: Option<&Node>) -> AtomValue {
    let mut total: AtomValue = 0;
    fold(
        |atom, acc: &mut AtomValue| *acc = acc.wrapping_add(atom.value()),
        node,
        &mut total,
    );
    total
}

/// Build a spine with one link per element, in order.
pub fn list_of<I>(elements: I) -> Option<HeapNode>
where
    I: IntoIterator,
    I::Item: IntoElement,
{
    let mut list = ConsList::new();
    list.extend(elements.into_iter().map(IntoElement::into_element));
    list.release()
}

/// Canonical text of node; the empty tree is "()".
pub fn to_text(node: Option<&Node>) -> String {
    match node {
        Some(node) => node.to_string(),
        None => "()".to_string(),
    }
}


#[cfg(test)]
#[path = "./ops_test.rs"]
mod ops_test;
