use super::*;

use serde::de::value::{Error as DeError, StrDeserializer};
use serde::de::IntoDeserializer;

use crate::sexp::{atom, cons};


#[test]
fn display_atoms() {
    assert_eq!(Node::Atom(42).to_string(), "42");
    assert_eq!(Node::Atom(-7).to_string(), "-7");
}

#[test]
fn display_nested() {
    let node = list!(1, list!(2, 3), 4).unwrap();
    assert_eq!(node.to_string(), "(1 (2 3) 4)");

    let node = list!(list!(list!(5))).unwrap();
    assert_eq!(node.to_string(), "(((5)))");
}

#[test]
fn display_empty_elements() {
    let node = list!(1, None, 2).unwrap();
    assert_eq!(node.to_string(), "(1 () 2)");

    let node = cons(None, None);
    assert_eq!(node.to_string(), "(())");
}

#[test]
fn write_text_to_buffer() {
    let node = list!(10, list!(-20, 30)).unwrap();
    let mut buffer: Vec<u8> = Vec::new();
    node.write_text(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "(10 (-20 30))");
}

#[test]
fn accessors() {
    let node = list!(1, 2).unwrap();
    assert_eq!(node.first(), Some(&Node::Atom(1)));
    assert_eq!(node.rest().and_then(Node::first), Some(&Node::Atom(2)));
    assert_eq!(node.rest().and_then(Node::rest), None);

    let a = atom(3);
    assert!(a.is_atomic());
    assert!(cons(None, None).is_atomic());
    assert!(!node.is_atomic());
    assert_eq!(a.first(), None);
    assert_eq!(a.rest(), None);
    assert_eq!(a.as_value(), Some(3));
    assert_eq!(node.as_value(), None);
}

#[test]
#[should_panic]
fn value_of_pair_is_fatal() {
    let node = list!(1).unwrap();
    node.value();
}

#[test]
fn iter_spine() {
    let node = list!(1, None, list!(2)).unwrap();
    let elements = node.iter().collect::<Vec<_>>();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0], Some(&Node::Atom(1)));
    assert_eq!(elements[1], None);
    assert_eq!(elements[2].map(|e| e.to_string()), Some("(2)".to_string()));

    assert_eq!(atom(1).iter().count(), 0);
}

#[test]
fn into_iter_spine() {
    let node = list!(1, 2, 3).unwrap();
    let mut iter = node.into_iter();
    assert_eq!(iter.next(), Some(Some(atom(1))));
    let remainder = iter.consume().unwrap();
    assert_eq!(remainder.to_string(), "(2 3)");

    let values = list!(4, 5)
        .unwrap()
        .into_iter()
        .map(|e| e.unwrap().value())
        .collect::<Vec<_>>();
    assert_eq!(values, vec![4, 5]);
}

#[test]
fn equality_is_structural() {
    assert_eq!(list!(1, list!(2, 3)), list!(1, list!(2, 3)));
    assert_ne!(list!(1, list!(2, 3)), list!(1, 2, 3));
    assert_ne!(list!(1, 2), list!(1, 2, 3));
    assert_ne!(list!(1, None), list!(1, 0));
    assert_ne!(Node::Atom(1), *list!(1).unwrap());
}

#[test]
fn clone_is_independent() {
    let original = list!(1, list!(2, None, 3), 4).unwrap();
    let copy = original.clone();
    assert_eq!(copy, original);
    drop(original);
    assert_eq!(copy.to_string(), "(1 (2 () 3) 4)");
}

#[test]
fn deep_and_long_trees() {
    const SIZE: usize = 200_000;

    let mut deep = atom(1);
    for _ in 0..SIZE {
        deep = cons(Some(deep), None);
    }
    let copy = deep.clone();
    assert_eq!(copy, deep);
    drop(deep);
    drop(copy);

    let long = list_of_range(SIZE);
    assert_eq!(long.iter().count(), SIZE);
    assert!(long.to_string().ends_with(" 199999)"));
    drop(long);
}

fn list_of_range(n: usize) -> HeapNode {
    crate::sexp::list_of((0..n).map(|i| i as AtomValue)).unwrap()
}

#[test]
fn from_str() {
    let node: Node = "(1 (2 3) 4)".parse().unwrap();
    assert_eq!(node, *list!(1, list!(2, 3), 4).unwrap());

    let err = "()".parse::<Node>().unwrap_err();
    assert_eq!(err.reason(), &ParseErrorReason::EmptyList);
    assert!("(1 x)".parse::<Node>().is_err());
}

#[test]
fn try_from_conversions() {
    assert_eq!(AtomValue::try_from(Node::Atom(9)), Ok(9));
    assert_eq!(AtomValue::try_from(&Node::Atom(9)), Ok(9));
    assert!(AtomValue::try_from(*list!(9).unwrap()).is_err());
    assert!(Cons::try_from(list!(9).unwrap()).is_ok());
    assert!(Cons::try_from(atom(9)).is_err());
}

#[test]
fn deserialize_from_text() {
    let deserializer: StrDeserializer<DeError> = "(1(2 3))".into_deserializer();
    let node = Node::deserialize(deserializer).unwrap();
    assert_eq!(node.to_string(), "(1 (2 3))");

    let deserializer: StrDeserializer<DeError> = "(1 e)".into_deserializer();
    assert!(Node::deserialize(deserializer).is_err());
}
