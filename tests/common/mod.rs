use conscell::prelude::*;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

/// Canonical text of the parse of s; panics on malformed input.
pub fn canonical<S: AsRef<str>>(s: S) -> String {
    to_text(parse(s.as_ref()).unwrap().as_deref())
}

#[allow(dead_code)]
pub fn atoms(node: Option<&Node>) -> Vec<AtomValue> {
    let mut values = Vec::new();
    fold(|atom, acc: &mut Vec<AtomValue>| acc.push(atom.value()), node, &mut values);
    values
}
