//! Property tests for `ordered_tree::Tree` driven by quickcheck.

mod op;
mod tree;

pub(crate) use op::Op;
