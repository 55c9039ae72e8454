use std::convert::TryFrom;

use super::node::{HeapNode, Node};


/// A Pair: one link of a list spine.
///
/// rest is always absent or another Pair; see Cons::new.
#[derive(Debug, Default, PartialEq)]
pub struct Cons {
    first: Option<HeapNode>,
    rest: Option<HeapNode>,
}

impl Cons {
    /// Takes ownership of both halves without copying.
    ///
    /// Panics (via fatal!) if rest is an Atom, since a spine must end in an
    /// absent rest.
    pub fn new(first: Option<HeapNode>, rest: Option<HeapNode>) -> Cons {
        if let Some(Node::Atom(value)) = rest.as_deref() {
            fatal!("rest of a pair must be a pair or empty, got atom {}", value);
        }
        Cons { first, rest }
    }

    pub fn first(&self) -> Option<&Node> {
        self.first.as_deref()
    }

    pub fn rest(&self) -> Option<&Node> {
        self.rest.as_deref()
    }

    /// The next link of the spine, if any.
    pub fn next(&self) -> Option<&Cons> {
        match self.rest.as_deref() {
            Some(Node::Pair(cons)) => Some(cons),
            _ => None,
        }
    }

    pub fn consume(mut self) -> (Option<HeapNode>, Option<HeapNode>) {
        (self.first.take(), self.rest.take())
    }
}

impl Drop for Cons {
    // Release iteratively; a derived drop would recurse once per link and
    // overflow the stack on long spines or deep nesting.
    fn drop(&mut self) {
        let mut pending: Vec<HeapNode> = Vec::new();
        pending.extend(self.first.take());
        pending.extend(self.rest.take());

        while let Some(mut node) = pending.pop() {
            if let Node::Pair(cons) = &mut *node {
                pending.extend(cons.first.take());
                pending.extend(cons.rest.take());
            }
        }
    }
}


// TryFrom<Node-like> impls.
impl TryFrom<Node> for Cons {
    type Error = Node;

    fn try_from(value: Node) -> Result<Self, Self::Error> {
        if let Node::Pair(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl TryFrom<HeapNode> for Cons {
    type Error = HeapNode;

    fn try_from(value: HeapNode) -> Result<Self, Self::Error> {
        if let Node::Pair(cons) = *value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Node> for &'a Cons {
    type Error = &'a Node;

    fn try_from(value: &'a Node) -> Result<Self, Self::Error> {
        if let Node::Pair(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<Option<&'a Node>> for &'a Cons {
    type Error = Option<&'a Node>;

    fn try_from(value: Option<&'a Node>) -> Result<Self, Self::Error> {
        if let Some(Node::Pair(cons)) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
