//! Height-balance strategy and its map facade.

pub mod types;
pub mod util;

pub use types::{AvlNode, AvlNodeLike};

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::arena::Arena;
use crate::bst;
use crate::map::{BalanceOps, Entries, TreeMap};
use crate::print::LineSink;
use crate::types::default_comparator;

/// Height-balance hooks plugged into the generic skeleton.
pub struct AvlOps;

impl<K, V> BalanceOps<K, V, AvlNode<K, V>> for AvlOps {
    fn new_node(key: K, value: V) -> AvlNode<K, V> {
        AvlNode::new(key, value)
    }

    fn attach_root(_arena: &mut Arena<AvlNode<K, V>>, node: u32) -> u32 {
        node
    }

    fn attach_left(arena: &mut Arena<AvlNode<K, V>>, root: u32, node: u32, parent: u32) -> u32 {
        util::insert_left(arena, root, node, parent)
    }

    fn attach_right(arena: &mut Arena<AvlNode<K, V>>, root: u32, node: u32, parent: u32) -> u32 {
        util::insert_right(arena, root, node, parent)
    }

    fn detach(arena: &mut Arena<AvlNode<K, V>>, root: u32, node: u32) -> (Option<u32>, u32) {
        util::remove(arena, root, node)
    }
}

/// Height-balanced ordered map.
pub struct AvlMap<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: TreeMap<K, V, AvlNode<K, V>, AvlOps, C>,
}

impl<K, V> AvlMap<K, V>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: TreeMap::with(comparator),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.contains_value(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn first(&self) -> Option<u32> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<u32> {
        self.inner.last()
    }

    pub fn next(&self, idx: u32) -> Option<u32> {
        self.inner.next(idx)
    }

    pub fn prev(&self, idx: u32) -> Option<u32> {
        self.inner.prev(idx)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.inner.key(idx)
    }

    pub fn value(&self, idx: u32) -> &V {
        self.inner.value(idx)
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.inner.value_mut(idx)
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        self.inner.node(idx)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    /// Cached height of the whole tree; -1 when empty.
    pub fn height(&self) -> i32 {
        self.root_index().map_or(-1, |r| self.inner.node(r).h)
    }

    pub fn iter(&self) -> Entries<'_, K, V, AvlNode<K, V>, AvlOps, C> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.inner.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.values()
    }

    pub fn for_each<F: FnMut(u32, &AvlNode<K, V>)>(&self, f: F) {
        self.inner.for_each(f)
    }

    pub fn print<S: LineSink + ?Sized>(&self, sink: &mut S)
    where
        K: Display,
    {
        self.inner.print(sink)
    }

    /// Indented debug rendering with heights and balance factors.
    pub fn dump(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        util::print::<K, V, _>(self.inner.arena(), self.inner.root_index(), "")
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        let reachable = bst::size(self.inner.arena(), self.inner.root_index());
        if reachable != self.inner.len() {
            return Err(format!(
                "size {} != reachable nodes {reachable}",
                self.inner.len()
            ));
        }
        if self.inner.arena().live() != self.inner.len() {
            return Err("live slots out of step with entry count".to_string());
        }
        util::assert_height_balanced(
            self.inner.arena(),
            self.inner.root_index(),
            self.inner.comparator(),
        )
    }
}
