use super::*;

use crate::sexp::{atom, Node};


#[test]
fn empty_release() {
    let list = ConsList::new();
    assert!(list.is_empty());
    assert_eq!(list.release(), None);
}

#[test]
fn preserves_order() {
    let mut list = ConsList::new();
    list.append(atom(1));
    list.push(None);
    list.append(atom(3));
    assert_eq!(list.len(), 3);

    let node = list.release().unwrap();
    assert_eq!(node.to_string(), "(1 () 3)");
}

#[test]
fn release_with_tail() {
    let mut list = ConsList::new();
    list.append(atom(1));
    list.append(atom(2));
    let node = list.release_with_tail(list!(3, 4)).unwrap();
    assert_eq!(node.to_string(), "(1 2 3 4)");

    let tail_only = ConsList::new().release_with_tail(list!(5));
    assert_eq!(tail_only, list!(5));
}

#[test]
#[should_panic]
fn atomic_tail_is_fatal() {
    let mut list = ConsList::new();
    list.append(atom(1));
    list.release_with_tail(Some(atom(2)));
}

#[test]
fn moves_elements() {
    let inner = list!(2, 3).unwrap();
    let mut list = ConsList::new();
    list.append(inner);
    list.extend(vec![Some(HeapNode::new(Node::Atom(4)))]);
    assert_eq!(list.release().unwrap().to_string(), "((2 3) 4)");
}
