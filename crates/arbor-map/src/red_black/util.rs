//! Color-balance strategy: insertion and deletion fixups.
//!
//! Invariants restored after every edit: the root is black, no red node
//! has a red child, and every path from a node to an absent-child
//! position crosses the same number of black nodes.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::arena::Arena;
use crate::bst::{self, set_left_node, set_right_node};
use crate::rotate::{rotate_left, rotate_right};

use super::types::RbNodeLike;

/// Color of an optional position; absent positions count as black.
#[inline]
fn is_red<K, V, N>(arena: &Arena<N>, idx: Option<u32>) -> bool
where
    N: RbNodeLike<K, V>,
{
    idx.is_some_and(|i| arena.node(i).is_red())
}

#[inline]
fn set_red<K, V, N>(arena: &mut Arena<N>, idx: u32, red: bool)
where
    N: RbNodeLike<K, V>,
{
    arena.node_mut(idx).set_red(red);
}

/// The other child of `parent`, relative to a cursor on the given side.
#[inline]
fn sibling<K, V, N>(arena: &Arena<N>, parent: u32, n_on_left: bool) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    if n_on_left {
        arena.node(parent).r()
    } else {
        arena.node(parent).l()
    }
}

/// Installs the first node of an empty tree, black.
pub fn insert_root<K, V, N>(arena: &mut Arena<N>, node: u32) -> u32
where
    N: RbNodeLike<K, V>,
{
    set_red(arena, node, false);
    node
}

/// Attaches `node` as a red left leaf of `parent`, then repairs colors.
pub fn insert_left<K, V, N>(arena: &mut Arena<N>, root: u32, node: u32, parent: u32) -> u32
where
    N: RbNodeLike<K, V>,
{
    set_left_node(arena, parent, Some(node));
    balance_after_insertion(arena, root, node)
}

/// Mirror of [`insert_left`].
pub fn insert_right<K, V, N>(arena: &mut Arena<N>, root: u32, node: u32, parent: u32) -> u32
where
    N: RbNodeLike<K, V>,
{
    set_right_node(arena, parent, Some(node));
    balance_after_insertion(arena, root, node)
}

/// Repairs the color invariants after attaching a red leaf.
///
/// While the cursor's parent is red: a red uncle means recolor and move
/// the cursor to the grandparent; a black uncle means rotate the parent
/// first when the cursor sits on the inner side, then recolor and rotate
/// the grandparent toward the uncle. The root is forced black at the end.
fn balance_after_insertion<K, V, N>(arena: &mut Arena<N>, mut root: u32, mut n: u32) -> u32
where
    N: RbNodeLike<K, V>,
{
    loop {
        let Some(p) = arena.node(n).p() else {
            break;
        };
        if !arena.node(p).is_red() {
            break;
        }
        let Some(g) = arena.node(p).p() else {
            break;
        };
        let p_on_left = arena.node(p).left_side();
        let uncle = if p_on_left {
            arena.node(g).r()
        } else {
            arena.node(g).l()
        };

        if is_red(arena, uncle) {
            set_red(arena, p, false);
            set_red(arena, uncle.expect("red uncle"), false);
            set_red(arena, g, true);
            n = g;
            continue;
        }

        if p_on_left {
            if !arena.node(n).left_side() {
                n = p;
                rotate_left(arena, n);
            }
            let p = arena.node(n).p().expect("outer case keeps a parent");
            let g = arena.node(p).p().expect("outer case keeps a grandparent");
            set_red(arena, p, false);
            set_red(arena, g, true);
            let top = rotate_right(arena, g);
            if arena.node(top).p().is_none() {
                root = top;
            }
        } else {
            if arena.node(n).left_side() {
                n = p;
                rotate_right(arena, n);
            }
            let p = arena.node(n).p().expect("outer case keeps a parent");
            let g = arena.node(p).p().expect("outer case keeps a grandparent");
            set_red(arena, p, false);
            set_red(arena, g, true);
            let top = rotate_left(arena, g);
            if arena.node(top).p().is_none() {
                root = top;
            }
        }
        break;
    }

    set_red(arena, root, false);
    root
}

/// Detaches the node carrying `node`'s entry and repairs colors. Returns
/// the new root and the unlinked slot.
///
/// With two children the node keeps its position: the in-order
/// successor's entry is swapped in and the successor (at most one child)
/// is the node physically unlinked, so the returned slot carries the
/// removed entry. Removing a black node leaves a missing black on the
/// spliced path; the repair walk starts at the spliced-in position, an
/// absent position counting as a black phantom.
pub fn remove<K, V, N>(arena: &mut Arena<N>, root: u32, node: u32) -> (Option<u32>, u32)
where
    N: RbNodeLike<K, V>,
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
    let target_red = arena.node(target).is_red();

    match parent {
        Some(p) if was_left => set_left_node(arena, p, child),
        Some(p) => set_right_node(arena, p, child),
        None => {
            if let Some(c) = child {
                arena.node_mut(c).set_p(None);
            }
        }
    }

    let mut new_root = if parent.is_none() { child } else { Some(root) };

    if !target_red {
        if is_red(arena, child) {
            set_red(arena, child.expect("red child"), false);
        } else if let Some(p) = parent {
            let rt = new_root.expect("tree keeps a root while a parent exists");
            new_root = Some(balance_after_deletion(arena, rt, p, child, was_left));
        }
    }

    if let Some(rt) = new_root {
        set_red(arena, rt, false);
    }
    (new_root, target)
}

/// Walks the double-black cursor toward the root, resolving the four
/// sibling cases. The cursor may be an absent position, addressed by its
/// parent and side.
fn balance_after_deletion<K, V, N>(
    arena: &mut Arena<N>,
    mut root: u32,
    mut parent: u32,
    mut n: Option<u32>,
    mut n_on_left: bool,
) -> u32
where
    N: RbNodeLike<K, V>,
{
    loop {
        // a red cursor absorbs the missing black
        if let Some(i) = n {
            if arena.node(i).is_red() {
                set_red(arena, i, false);
                return root;
            }
        }

        let mut s =
            sibling(arena, parent, n_on_left).expect("double-black position has a sibling");

        if arena.node(s).is_red() {
            // red sibling: rotate it over the parent, then re-inspect
            set_red(arena, s, false);
            set_red(arena, parent, true);
            let top = if n_on_left {
                rotate_left(arena, parent)
            } else {
                rotate_right(arena, parent)
            };
            if arena.node(top).p().is_none() {
                root = top;
            }
            s = sibling(arena, parent, n_on_left).expect("rotation leaves a sibling");
        }

        let sl = arena.node(s).l();
        let sr = arena.node(s).r();
        let near = if n_on_left { sl } else { sr };
        let far = if n_on_left { sr } else { sl };

        if !is_red(arena, near) && !is_red(arena, far) {
            // black sibling, both children black: push the missing black up
            set_red(arena, s, true);
            if arena.node(parent).is_red() {
                set_red(arena, parent, false);
                return root;
            }
            let Some(gp) = arena.node(parent).p() else {
                return root;
            };
            n_on_left = arena.node(parent).left_side();
            n = Some(parent);
            parent = gp;
            continue;
        }

        if !is_red(arena, far) {
            // only the near child is red: rotate the sibling to expose a
            // red far child
            set_red(arena, near.expect("near child is red"), false);
            set_red(arena, s, true);
            s = if n_on_left {
                rotate_right(arena, s)
            } else {
                rotate_left(arena, s)
            };
        }

        // red far child: the final rotation settles the missing black
        let parent_red = arena.node(parent).is_red();
        set_red(arena, s, parent_red);
        set_red(arena, parent, false);
        let far = if n_on_left {
            arena.node(s).r().expect("far child is red")
        } else {
            arena.node(s).l().expect("far child is red")
        };
        set_red(arena, far, false);
        let top = if n_on_left {
            rotate_left(arena, parent)
        } else {
            rotate_right(arena, parent)
        };
        if arena.node(top).p().is_none() {
            root = top;
        }
        return root;
    }
}

fn validate<K, V, N, C>(arena: &Arena<N>, idx: u32, cmp: &C) -> Result<usize, String>
where
    N: RbNodeLike<K, V>,
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
        if node.is_red() && child.is_red() {
            return Err("red node has a red left child".to_string());
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
        if node.is_red() && child.is_red() {
            return Err("red node has a red right child".to_string());
        }
    }

    let bl = l.map_or(Ok(0), |l| validate(arena, l, cmp))?;
    let br = r.map_or(Ok(0), |r| validate(arena, r, cmp))?;
    if bl != br {
        return Err(format!("black height mismatch: left {bl}, right {br}"));
    }
    Ok(bl + usize::from(!arena.node(idx).is_red()))
}

/// Checks the full invariant set: parent/side links, black root, no two
/// reds in a row, equal black heights and strictly increasing in-order
/// keys.
pub fn assert_color_balanced<K, V, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    cmp: &C,
) -> Result<(), String>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };
    if arena.node(root).p().is_some() {
        return Err("root has a parent".to_string());
    }
    if arena.node(root).is_red() {
        return Err("root is not black".to_string());
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
    N: RbNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = arena.node(i);
            let color = if n.is_red() { "red" } else { "black" };
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.value()
            )
        }
    }
}
