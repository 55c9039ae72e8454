#[macro_use]
mod ops;

pub mod cons;
pub mod cons_list;
pub mod node;
pub mod walk;

mod fmt_io_adapter;


pub use cons::Cons;
pub use cons_list::ConsList;
pub use node::{AtomValue, HeapNode, Node, NodeIntoIter, NodeIter};
pub use ops::{
    atom, cons, deep_copy, first, fold, free, is_atomic, length, list_of, rest, sum, to_text,
    value, IntoElement,
};
pub use walk::{Step, Walk};
