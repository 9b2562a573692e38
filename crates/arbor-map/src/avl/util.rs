//! Height-balance strategy: insertion, deletion and the root-ward
//! rebalance walk.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::arena::Arena;
use crate::bst::{self, set_left_node, set_right_node};
use crate::rotate::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};

use super::types::AvlNodeLike;

#[inline]
fn height_of<K, V, N>(arena: &Arena<N>, idx: Option<u32>) -> i32
where
    N: AvlNodeLike<K, V>,
{
    idx.map_or(-1, |i| arena.node(i).height())
}

/// Recomputes height and balance from the children's cached heights.
fn update_metrics<K, V, N>(arena: &mut Arena<N>, idx: u32)
where
    N: AvlNodeLike<K, V>,
{
    let hl = height_of(arena, arena.node(idx).l());
    let hr = height_of(arena, arena.node(idx).r());
    let n = arena.node_mut(idx);
    n.set_height(1 + hl.max(hr));
    n.set_bf(hr - hl);
}

/// Resolves a +/-2 balance at `idx` with the matching single or double
/// rotation, then refreshes the metrics of the rotated subtree in one
/// bottom-up pass (children first, new subtree root last). Returns the
/// new subtree root.
fn resolve<K, V, N>(arena: &mut Arena<N>, idx: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let bf = arena.node(idx).bf();
    let top = if bf == -2 {
        let l = arena.node(idx).l().expect("left-heavy node has a left child");
        if arena.node(l).bf() <= 0 {
            rotate_right(arena, idx)
        } else {
            rotate_left_right(arena, idx)
        }
    } else {
        let r = arena
            .node(idx)
            .r()
            .expect("right-heavy node has a right child");
        if arena.node(r).bf() >= 0 {
            rotate_left(arena, idx)
        } else {
            rotate_right_left(arena, idx)
        }
    };

    let l = arena.node(top).l();
    let r = arena.node(top).r();
    if let Some(l) = l {
        update_metrics(arena, l);
    }
    if let Some(r) = r {
        update_metrics(arena, r);
    }
    update_metrics(arena, top);
    top
}

/// Walks from `start` to the tree root, refreshing metrics and resolving
/// any +/-2 balance on the way up. Returns the root after the walk.
///
/// The walk always continues to the root, also after an insertion where a
/// single rotation already restored balance; the remaining steps refresh
/// ancestor heights.
fn rebalance_upward<K, V, N>(arena: &mut Arena<N>, start: Option<u32>, mut root: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let mut curr = start;
    while let Some(idx) = curr {
        update_metrics(arena, idx);
        let top = if arena.node(idx).bf().abs() == 2 {
            resolve(arena, idx)
        } else {
            idx
        };
        if arena.node(top).p().is_none() {
            root = top;
        }
        curr = arena.node(top).p();
    }
    root
}

/// Attaches `node` as the left leaf of `parent` and rebalances from the
/// new node to the root.
pub fn insert_left<K, V, N>(arena: &mut Arena<N>, root: u32, node: u32, parent: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    set_left_node(arena, parent, Some(node));
    rebalance_upward(arena, Some(node), root)
}

/// Mirror of [`insert_left`].
pub fn insert_right<K, V, N>(arena: &mut Arena<N>, root: u32, node: u32, parent: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    set_right_node(arena, parent, Some(node));
    rebalance_upward(arena, Some(node), root)
}

/// Detaches the node carrying `node`'s entry and rebalances from the
/// splice point upward. Returns the new root and the unlinked slot.
///
/// With two children the node keeps its position: the in-order
/// successor's entry is swapped in and the successor (at most one child)
/// is the node physically unlinked, so the returned slot carries the
/// removed entry.
pub fn remove<K, V, N>(arena: &mut Arena<N>, root: u32, node: u32) -> (Option<u32>, u32)
where
    N: AvlNodeLike<K, V>,
{
    let l = arena.node(node).l();
    let r = arena.node(node).r();
    let target = if l.is_some() && r.is_some() {
        let succ = bst::leftmost(arena, r.expect("two children"));
        let (kept, detached) = arena.pair_mut(node, succ);
        kept.swap_entry(detached);
        succ
    } else {
        node
    };

    let parent = arena.node(target).p();
    let was_left = arena.node(target).left_side();
    let child = arena.node(target).l().or(arena.node(target).r());

    match parent {
        Some(p) if was_left => set_left_node(arena, p, child),
        Some(p) => set_right_node(arena, p, child),
        None => {
            if let Some(c) = child {
                arena.node_mut(c).set_p(None);
            }
        }
    }

    let new_root = match parent {
        // Removed the root with at most one child; the remaining subtree
        // is untouched below and already balanced.
        None => child,
        Some(p) => Some(rebalance_upward(arena, Some(p), root)),
    };
    (new_root, target)
}

fn validate<K, V, N, C>(arena: &Arena<N>, idx: u32, cmp: &C) -> Result<i32, String>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let node = arena.node(idx);
    let l = node.l();
    let r = node.r();

    if let Some(l) = l {
        let child = arena.node(l);
        if child.p() != Some(idx) {
            return Err("broken parent link on left child".to_string());
        }
        if !child.left_side() {
            return Err("left child missing its side flag".to_string());
        }
        if cmp(child.key(), node.key()) != Ordering::Less {
            return Err("left child key not less than parent".to_string());
        }
    }
    if let Some(r) = r {
        let child = arena.node(r);
        if child.p() != Some(idx) {
            return Err("broken parent link on right child".to_string());
        }
        if child.left_side() {
            return Err("right child carries a left side flag".to_string());
        }
        if cmp(child.key(), node.key()) != Ordering::Greater {
            return Err("right child key not greater than parent".to_string());
        }
    }

    let hl = l.map_or(Ok(-1), |l| validate(arena, l, cmp))?;
    let hr = r.map_or(Ok(-1), |r| validate(arena, r, cmp))?;

    let height = 1 + hl.max(hr);
    let bf = hr - hl;
    let node = arena.node(idx);
    if node.height() != height {
        return Err(format!(
            "height mismatch: cached {}, actual {height}",
            node.height()
        ));
    }
    if node.bf() != bf {
        return Err(format!("balance mismatch: cached {}, actual {bf}", node.bf()));
    }
    if !(-1..=1).contains(&bf) {
        return Err(format!("height balance violated: bf {bf}"));
    }
    Ok(height)
}

/// Checks the full invariant set: parent/side links, cached metrics,
/// |bf| <= 1 everywhere and strictly increasing in-order keys.
pub fn assert_height_balanced<K, V, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    cmp: &C,
) -> Result<(), String>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };
    if arena.node(root).p().is_some() {
        return Err("root has a parent".to_string());
    }
    validate(arena, root, cmp)?;

    let mut curr = bst::first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(p) = prev {
            if cmp(arena.node(p).key(), arena.node(i).key()) != Ordering::Less {
                return Err("in-order keys not strictly increasing".to_string());
            }
        }
        prev = Some(i);
        curr = bst::next(arena, i);
    }
    Ok(())
}

/// Indented debug rendering of a subtree.
pub fn print<K, V, N>(arena: &Arena<N>, node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = arena.node(i);
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={} bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.bf(),
                n.key(),
                n.value()
            )
        }
    }
}
