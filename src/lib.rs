//! Small ordered collections and the text utilities that sit next to them.
//!
//! The centerpiece is [`OrderedTree`], an unbalanced binary search tree with set semantics:
//! equal values are stored once and a second insert is reported with `false`. The
//! [`TreeOps`] trait carries the operations and must be in scope to call them.

pub mod error;
pub mod file_reader;
pub mod file_stats;
pub mod functions;
pub mod linked_list;
pub mod ordered_tree;
pub mod tree;

pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use ordered_tree::OrderedTree;
pub use tree::TreeOps;
