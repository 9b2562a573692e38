//! The four rotation primitives.
//!
//! Rotations are pure pointer surgery over the linkage primitives: key and
//! value never move, and strategy metadata (heights, colors) is left for
//! the caller to refresh once all pointer updates are complete. Each
//! rotation returns the promoted node; when the rotated subtree was the
//! whole tree, the promoted node comes back parentless and the caller
//! fixes the tree root.

use crate::arena::Arena;
use crate::bst::{set_left_node, set_right_node};
use crate::types::Node;

/// Promotes `pivot`'s right child over `pivot`.
///
/// The promoted node's former left child becomes `pivot`'s new right
/// child; `pivot` becomes the promoted node's left child; the original
/// parent linkage is repointed at the promoted node.
pub fn rotate_left<N: Node>(arena: &mut Arena<N>, pivot: u32) -> u32 {
    let node = arena.node(pivot);
    let parent = node.p();
    let was_left = node.left_side();
    let promoted = node.r().expect("rotate_left requires a right child");
    let inner = arena.node(promoted).l();

    set_right_node(arena, pivot, inner);
    set_left_node(arena, promoted, Some(pivot));
    match parent {
        Some(p) if was_left => set_left_node(arena, p, Some(promoted)),
        Some(p) => set_right_node(arena, p, Some(promoted)),
        None => arena.node_mut(promoted).set_p(None),
    }
    promoted
}

/// Mirror of [`rotate_left`]: promotes `pivot`'s left child.
pub fn rotate_right<N: Node>(arena: &mut Arena<N>, pivot: u32) -> u32 {
    let node = arena.node(pivot);
    let parent = node.p();
    let was_left = node.left_side();
    let promoted = node.l().expect("rotate_right requires a left child");
    let inner = arena.node(promoted).r();

    set_left_node(arena, pivot, inner);
    set_right_node(arena, promoted, Some(pivot));
    match parent {
        Some(p) if was_left => set_left_node(arena, p, Some(promoted)),
        Some(p) => set_right_node(arena, p, Some(promoted)),
        None => arena.node_mut(promoted).set_p(None),
    }
    promoted
}

/// Left-right double rotation: rotates `pivot`'s left child left, then
/// `pivot` right. Resolves a left-right imbalance.
pub fn rotate_left_right<N: Node>(arena: &mut Arena<N>, pivot: u32) -> u32 {
    let left = arena
        .node(pivot)
        .l()
        .expect("rotate_left_right requires a left child");
    rotate_left(arena, left);
    rotate_right(arena, pivot)
}

/// Right-left double rotation, the mirror of [`rotate_left_right`].
pub fn rotate_right_left<N: Node>(arena: &mut Arena<N>, pivot: u32) -> u32 {
    let right = arena
        .node(pivot)
        .r()
        .expect("rotate_right_left requires a right child");
    rotate_right(arena, right);
    rotate_left(arena, pivot)
}
