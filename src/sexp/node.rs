//! Module for representing cons-cell trees.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use super::cons::Cons;
use super::cons_list::ConsList;
use super::fmt_io_adapter::FmtIoAdapter;
use super::walk::{Step, Walk};
use crate::parser::{parse, ParseError, ParseErrorReason};


pub type AtomValue = i64;

/// Node on the heap.
///
/// Cons stores Option<HeapNode>s, so HeapNode is the unit of ownership that
/// moves between trees.
pub type HeapNode = Box<Node>;

pub enum Node {
    Atom(AtomValue),
    Pair(Cons),
}

/// Iterator over the elements of a spine.
///
/// Each item is the first of one Pair; None marks an empty-list element.
pub struct NodeIter<'a> {
    current: Option<&'a Cons>,
}

/// Consuming counterpart of NodeIter.
#[derive(Default)]
pub struct NodeIntoIter {
    current: Option<HeapNode>,
}

impl Node {
    /// True for an Atom, and for a bare Pair whose first and rest are both
    /// absent. A bare Pair is atomic but carries no value.
    pub fn is_atomic(&self) -> bool {
        match self {
            Node::Atom(_) => true,
            Node::Pair(cons) => cons.first().is_none() && cons.rest().is_none(),
        }
    }

    /// Value of an Atom.
    ///
    /// Panics (via fatal!) on any Pair, bare or not; see as_value for a
    /// checked variant.
    pub fn value(&self) -> AtomValue {
        match self {
            Node::Atom(value) => *value,
            Node::Pair(_) => fatal!("value requested from a node without one: {}", self),
        }
    }

    pub fn as_value(&self) -> Option<AtomValue> {
        match self {
            Node::Atom(value) => Some(*value),
            Node::Pair(_) => None,
        }
    }

    pub fn first(&self) -> Option<&Node> {
        match self {
            Node::Pair(cons) => cons.first(),
            Node::Atom(_) => None,
        }
    }

    pub fn rest(&self) -> Option<&Node> {
        match self {
            Node::Pair(cons) => cons.rest(),
            Node::Atom(_) => None,
        }
    }

    /// Iterate the spine. An Atom has no spine and yields nothing.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter {
            current: <&Cons>::try_from(self).ok(),
        }
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk::new(Some(self))
    }

    /// Write canonical text to w.
    pub fn write_text<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        // Whether the next item must be separated from the previous one.
        let mut separate = false;
        for step in self.walk() {
            match step {
                Step::Open => {
                    if separate {
                        write!(w, " ")?;
                    }
                    write!(w, "(")?;
                    separate = false;
                }
                Step::Atom(atom) => {
                    if separate {
                        write!(w, " ")?;
                    }
                    write!(w, "{}", atom.value())?;
                    separate = true;
                }
                Step::Empty => {
                    if separate {
                        write!(w, " ")?;
                    }
                    write!(w, "()")?;
                    separate = true;
                }
                Step::Close => {
                    write!(w, ")")?;
                    separate = true;
                }
            }
        }
        Ok(())
    }
}


impl<'a> Iterator for NodeIter<'a> {
    type Item = Option<&'a Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let cons = self.current?;
        self.current = cons.next();
        Some(cons.first())
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = Option<&'a Node>;
    type IntoIter = NodeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl NodeIntoIter {
    /// Remainder of the spine that has not been iterated yet.
    pub fn consume(self) -> Option<HeapNode> {
        self.current
    }
}

impl Iterator for NodeIntoIter {
    type Item = Option<HeapNode>;

    fn next(&mut self) -> Option<Self::Item> {
        let heap = self.current.take()?;
        match Cons::try_from(heap) {
            Ok(cons) => {
                let (first, rest) = cons.consume();
                self.current = rest;
                Some(first)
            }
            // Atoms have no spine.
            Err(_) => None,
        }
    }
}

impl IntoIterator for HeapNode {
    type Item = Option<HeapNode>;
    type IntoIter = NodeIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        NodeIntoIter {
            current: Some(self),
        }
    }
}


impl Clone for Node {
    fn clone(&self) -> Self {
        match self {
            Node::Atom(value) => Node::Atom(*value),
            Node::Pair(_) => match copy_tree(self) {
                Some(copy) => *copy,
                None => unreachable!("walk of a pair always closes a list"),
            },
        }
    }
}

/// Rebuild the tree rooted at node from its walk.
pub(super) fn copy_tree(node: &Node) -> Option<HeapNode> {
    let mut open: Vec<ConsList> = Vec::new();
    let mut root = None;

    for step in node.walk() {
        let element = match step {
            Step::Open => {
                open.push(ConsList::new());
                continue;
            }
            Step::Atom(atom) => Some(HeapNode::new(Node::Atom(atom.value()))),
            Step::Empty => None,
            Step::Close => open.pop().and_then(ConsList::release),
        };
        match open.last_mut() {
            Some(list) => list.push(element),
            None => root = element,
        }
    }
    root
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Atom(a), Node::Atom(b)) => a == b,
            (Node::Pair(_), Node::Pair(_)) => self.walk().eq(other.walk()),
            _ => false,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.write_text(&mut FmtIoAdapter::new(f)) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}


// TryFrom<Node-like> impls.
impl TryFrom<&Node> for AtomValue {
    type Error = ();

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_value().ok_or(())
    }
}

impl TryFrom<Node> for AtomValue {
    type Error = Node;

    fn try_from(value: Node) -> Result<Self, Self::Error> {
        match value {
            Node::Atom(v) => Ok(v),
            _ => Err(value),
        }
    }
}


// From<T> impls.
impl From<AtomValue> for Node {
    fn from(value: AtomValue) -> Self {
        Node::Atom(value)
    }
}

impl From<AtomValue> for HeapNode {
    fn from(value: AtomValue) -> Self {
        HeapNode::new(Node::Atom(value))
    }
}

impl From<Cons> for Node {
    fn from(cons: Cons) -> Self {
        Node::Pair(cons)
    }
}

impl From<Cons> for HeapNode {
    fn from(cons: Cons) -> Self {
        HeapNode::new(Node::Pair(cons))
    }
}

impl From<Node> for Option<HeapNode> {
    fn from(node: Node) -> Self {
        Some(HeapNode::new(node))
    }
}


/// Parses canonical (or merely well-formed) text.
///
/// The empty list has no Node representation and is rejected with
/// ParseErrorReason::EmptyList.
impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse(s)? {
            Some(node) => Ok(*node),
            None => Err(ParseError::new(ParseErrorReason::EmptyList, 0)),
        }
    }
}


// Serde impls; a Node travels as its canonical text.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-empty list expression")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NodeVisitor)
    }
}


#[cfg(test)]
#[path = "./node_test.rs"]
mod node_test;
