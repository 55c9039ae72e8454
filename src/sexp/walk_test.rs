use super::*;

use crate::sexp::atom;


#[test]
fn walk_atom() {
    let node = atom(5);
    let steps = node.walk().collect::<Vec<_>>();
    assert_eq!(steps, vec![Step::Atom(&Node::Atom(5))]);
}

#[test]
fn walk_empty() {
    assert_eq!(Walk::new(None).count(), 0);
}

#[test]
fn walk_nested() {
    let node = list!(1, list!(2, None), 3).unwrap();
    let two = Node::Atom(2);
    let (one, three) = (Node::Atom(1), Node::Atom(3));
    let steps = node.walk().collect::<Vec<_>>();
    assert_eq!(
        steps,
        vec![
            Step::Open,
            Step::Atom(&one),
            Step::Open,
            Step::Atom(&two),
            Step::Empty,
            Step::Close,
            Step::Atom(&three),
            Step::Close,
        ]
    );
}

#[test]
fn depth_tracks_open_lists() {
    let node = list!(list!(list!(1))).unwrap();
    let mut walk = node.walk();
    let mut deepest = 0;
    while let Some(_) = walk.next() {
        deepest = deepest.max(walk.depth());
    }
    assert_eq!(deepest, 3);
    assert_eq!(walk.depth(), 0);
}
