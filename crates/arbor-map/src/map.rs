//! Generic ordered-map skeleton and the balancing-strategy seam.
//!
//! [`TreeMap`] owns the arena, the root index and the entry count, and
//! performs every structural decision that is strategy-agnostic: descent
//! to a key, in-place value replacement, iteration. The structural edits
//! that differ per strategy (attaching a fresh leaf, detaching a node,
//! rebalancing afterwards) go through [`BalanceOps`].

use std::cmp::Ordering;
use std::fmt::Display;
use std::marker::PhantomData;

use crate::arena::Arena;
use crate::bst;
use crate::print::{node_line, LineSink};
use crate::types::KvNode;

/// Structural hooks a balancing strategy implements.
///
/// `attach_*` place an already-allocated node and restore the balance
/// invariant; `detach` removes a node and does the same. Each returns the
/// tree root after rebalancing, which may differ from the root passed in.
pub trait BalanceOps<K, V, N>
where
    N: KvNode<K, V>,
{
    /// A fresh node carrying the strategy's initial metadata.
    fn new_node(key: K, value: V) -> N;

    /// Installs the first node of an empty tree.
    fn attach_root(arena: &mut Arena<N>, node: u32) -> u32;

    /// Attaches `node` as the left child of `parent`, then rebalances.
    fn attach_left(arena: &mut Arena<N>, root: u32, node: u32, parent: u32) -> u32;

    /// Attaches `node` as the right child of `parent`, then rebalances.
    fn attach_right(arena: &mut Arena<N>, root: u32, node: u32, parent: u32) -> u32;

    /// Detaches the node holding `node`'s entry, then rebalances.
    ///
    /// Returns the new root (`None` when the tree emptied) and the slot
    /// that was physically unlinked. With two children the strategies
    /// reduce by swapping entries with the in-order successor, so the
    /// unlinked slot is the one carrying the removed entry.
    fn detach(arena: &mut Arena<N>, root: u32, node: u32) -> (Option<u32>, u32);
}

/// Arena-backed ordered map core, generic over the balancing strategy.
pub struct TreeMap<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: BalanceOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    arena: Arena<N>,
    root: Option<u32>,
    len: usize,
    comparator: C,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O, C> TreeMap<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: BalanceOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
            comparator,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &Arena<N> {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        self.arena.node(idx)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.arena.node_mut(idx).value_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Detaches the root and drops every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        bst::find(&self.arena, self.root, key, |n: &N| n.key(), &self.comparator)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena.node(i).value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena.node_mut(idx).value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Full in-order scan, O(n).
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let mut found = false;
        bst::for_each(&self.arena, self.root, &mut |_i, n: &N| {
            if n.value() == value {
                found = true;
            }
        });
        found
    }

    /// Inserts `key`/`value`. An existing key has its value replaced in
    /// place (no new node, size unchanged) and the previous value is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(root) = self.root else {
            let node = self.arena.alloc(O::new_node(key, value));
            self.root = Some(O::attach_root(&mut self.arena, node));
            self.len = 1;
            return None;
        };

        let mut curr = root;
        loop {
            match (self.comparator)(&key, self.arena.node(curr).key()) {
                Ordering::Equal => {
                    return Some(self.arena.node_mut(curr).replace_value(value));
                }
                Ordering::Less => match self.arena.node(curr).l() {
                    Some(next) => curr = next,
                    None => {
                        let node = self.arena.alloc(O::new_node(key, value));
                        self.root = Some(O::attach_left(&mut self.arena, root, node, curr));
                        self.len += 1;
                        return None;
                    }
                },
                Ordering::Greater => match self.arena.node(curr).r() {
                    Some(next) => curr = next,
                    None => {
                        let node = self.arena.alloc(O::new_node(key, value));
                        self.root = Some(O::attach_right(&mut self.arena, root, node, curr));
                        self.len += 1;
                        return None;
                    }
                },
            }
        }
    }

    /// Removes `key` and returns its value. An absent key is not an
    /// error: `None` comes back and the size is unchanged.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.find(key)?;
        let root = self.root.expect("a found key implies a root");
        let (new_root, detached) = O::detach(&mut self.arena, root, node);
        self.root = new_root;
        self.len -= 1;
        let (_key, value) = self.arena.free(detached).into_entry();
        Some(value)
    }

    pub fn first(&self) -> Option<u32> {
        bst::first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        bst::last(&self.arena, self.root)
    }

    pub fn next(&self, idx: u32) -> Option<u32> {
        bst::next(&self.arena, idx)
    }

    pub fn prev(&self, idx: u32) -> Option<u32> {
        bst::prev(&self.arena, idx)
    }

    /// Ascending entry iterator.
    pub fn iter(&self) -> Entries<'_, K, V, N, O, C> {
        Entries {
            map: self,
            curr: self.first(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Recursive in-order visit of every node.
    pub fn for_each<F: FnMut(u32, &N)>(&self, mut f: F) {
        bst::for_each(&self.arena, self.root, &mut f);
    }

    /// Renders one line per node, in key order, and forwards each line to
    /// `sink`. Purely diagnostic; map semantics are unaffected.
    pub fn print<S: LineSink + ?Sized>(&self, sink: &mut S)
    where
        K: Display,
    {
        bst::for_each(&self.arena, self.root, &mut |_i, n: &N| {
            sink.line(&node_line::<K, V, N>(&self.arena, n));
        });
    }
}

/// Ascending `(key, value)` iterator over a [`TreeMap`].
///
/// Walks successor links; the borrow on the map keeps mutation out for
/// the iterator's whole lifetime.
pub struct Entries<'a, K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: BalanceOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    map: &'a TreeMap<K, V, N, O, C>,
    curr: Option<u32>,
}

impl<'a, K, V, N, O, C> Iterator for Entries<'a, K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: BalanceOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = self.map.next(idx);
        let node = self.map.arena.node(idx);
        Some((node.key(), node.value()))
    }
}
