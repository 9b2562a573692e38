//! Arena-based self-balancing ordered maps.
//!
//! Two interchangeable balancing strategies share one binary-search-tree
//! engine:
//!
//! - [`AvlMap`] keeps every node's subtree heights within one of each
//!   other (height balance).
//! - [`RbMap`] keeps red-black color invariants (color balance).
//!
//! The engine ([`bst`], [`rotate`]) owns key lookup,
//! predecessor/successor, in-order traversal and the four rotation
//! primitives; the strategies plug their rebalancing into the generic
//! [`map::TreeMap`] skeleton through the [`map::BalanceOps`] seam.
//!
//! Instead of raw pointers, all node links are `Option<u32>` indices into
//! a slot arena owned by the map; the parent index is an upward
//! observation and never participates in ownership.
//!
//! The maps are single-writer: callers serialize access externally.
//! Mutation runs to completion on the caller's thread with no internal
//! suspension points, and iterators borrow the map for their whole
//! lifetime.

pub mod arena;
pub mod avl;
pub mod bst;
pub mod error;
pub mod json;
pub mod map;
pub mod print;
pub mod red_black;
pub mod rotate;
pub mod types;

pub use arena::Arena;
pub use avl::{AvlMap, AvlNode};
pub use error::KeyError;
pub use json::JsonMap;
pub use map::{BalanceOps, Entries, TreeMap};
pub use print::LineSink;
pub use red_black::{RbMap, RbNode};
pub use types::{Comparator, KvNode, Node};
