//! Shared binary-search-tree mechanics: linkage primitives, key lookup,
//! predecessor/successor and in-order traversal.
//!
//! Everything here is strategy-agnostic; balance metadata (heights,
//! colors) is the strategies' business.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena.node(idx).p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena.node(idx).l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena.node(idx).r()
}

#[inline]
pub(crate) fn on_left<N: Node>(arena: &Arena<N>, idx: u32) -> bool {
    arena.node(idx).left_side()
}

/// Makes `child` the left child of `parent`, updating the child's parent
/// back-reference and side flag in the same step.
///
/// Together with [`set_right_node`] this is the only sanctioned way to
/// change structural linkage; rotations and every insertion/removal path
/// are expressed in terms of the two.
pub fn set_left_node<N: Node>(arena: &mut Arena<N>, parent: u32, child: Option<u32>) {
    arena.node_mut(parent).set_l(child);
    if let Some(c) = child {
        let n = arena.node_mut(c);
        n.set_p(Some(parent));
        n.set_left_side(true);
    }
}

/// Mirror of [`set_left_node`].
pub fn set_right_node<N: Node>(arena: &mut Arena<N>, parent: u32, child: Option<u32>) {
    arena.node_mut(parent).set_r(child);
    if let Some(c) = child {
        let n = arena.node_mut(c);
        n.set_p(Some(parent));
        n.set_left_side(false);
    }
}

/// Finds a node by key. Absent keys yield `None`, never an error.
pub fn find<N, K, F, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    key: &K,
    key_of: F,
    cmp: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        let node = arena.node(i);
        curr = match cmp(key, key_of(node)) {
            Ordering::Equal => return Some(i),
            Ordering::Less => node.l(),
            Ordering::Greater => node.r(),
        };
    }
    None
}

/// Smallest node of the subtree at `idx`.
pub fn leftmost<N: Node>(arena: &Arena<N>, mut idx: u32) -> u32 {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Largest node of the subtree at `idx`.
pub fn rightmost<N: Node>(arena: &Arena<N>, mut idx: u32) -> u32 {
    while let Some(r) = get_r(arena, idx) {
        idx = r;
    }
    idx
}

/// Smallest node of the whole tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    root.map(|r| leftmost(arena, r))
}

/// Largest node of the whole tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    root.map(|r| rightmost(arena, r))
}

/// In-order successor: leftmost of the right subtree when one exists,
/// otherwise the first ancestor reached from its left side.
pub fn next<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, idx) {
        return Some(leftmost(arena, r));
    }
    let mut curr = idx;
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if on_left(arena, curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// In-order predecessor, the mirror of [`next`].
pub fn prev<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, idx) {
        return Some(rightmost(arena, l));
    }
    let mut curr = idx;
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if !on_left(arena, curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// Recursive in-order traversal, left-self-right.
pub fn for_each<N, F>(arena: &Arena<N>, node: Option<u32>, f: &mut F)
where
    N: Node,
    F: FnMut(u32, &N),
{
    let Some(i) = node else {
        return;
    };
    for_each(arena, get_l(arena, i), f);
    f(i, arena.node(i));
    for_each(arena, get_r(arena, i), f);
}

fn size_inner<N: Node>(arena: &Arena<N>, idx: u32) -> usize {
    1 + get_l(arena, idx).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, idx).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}
