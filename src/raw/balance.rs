//! Rotations and the weight-balance test.
//!
//! A node's weight is its subtree size plus one. A node is out of balance when
//! one child's weight exceeds `DELTA` times its sibling's. The shape of the
//! heavy child, judged against `GAMMA`, picks a single or a double rotation
//! (Hirai & Yamamoto, "Balancing weight-balanced trees", with the 5/2, 3/2
//! parameters).

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Dir, Link, Node};

/// `(n1, n2)`: the heavy side may weigh at most `n1 / n2` times its sibling.
pub(crate) const DELTA: (usize, usize) = (5, 2);
/// `(n1, n2)`: a heavy child whose outer side weighs more than `n1 / n2` of its
/// inner side gets a single rotation, otherwise a double one.
pub(crate) const GAMMA: (usize, usize) = (2, 3);

pub(crate) type Nodes<T> = Arena<Node<T>>;

/// Size of the subtree behind `link`; the empty subtree is never dereferenced.
#[inline]
pub(crate) fn size_of<T>(nodes: &Nodes<T>, link: Link) -> usize {
    link.map_or(0, |h| nodes.get(h).size())
}

/// Recomputes a node's size from its children.
#[inline]
pub(crate) fn update_size<T>(nodes: &mut Nodes<T>, handle: Handle) {
    let node = nodes.get(handle);
    let size = 1 + size_of(nodes, node.left()) + size_of(nodes, node.right());
    nodes.get_mut(handle).set_size(size);
}

/// True if the `dir` child of `handle` outweighs its sibling by more than `n1 : n2`.
pub(crate) fn is_imbalanced<T>(nodes: &Nodes<T>, handle: Handle, (n1, n2): (usize, usize), dir: Dir) -> bool {
    debug_assert!(n1.min(n2) > 0, "`is_imbalanced()` - ratio terms must be positive");
    let node = nodes.get(handle);
    n1 * (size_of(nodes, node.child(!dir)) + 1) < n2 * (size_of(nodes, node.child(dir)) + 1)
}

//          y                   x
//         / \                 / \
//        x   A      =>       B   y
//       / \                     / \
//      B   C                   C   A
//
// Drawn for `dir == Right`: `x` comes up from the `!dir` side.
/// Single rotation of `y` towards `dir`. Returns the new subtree root.
pub(crate) fn rotate<T>(nodes: &mut Nodes<T>, y: Handle, dir: Dir) -> Handle {
    let x = nodes.get(y).child(!dir).expect("`rotate()` - rotating towards an empty side");
    let before = nodes.get(y).size();

    let inner = nodes.get(x).child(dir);
    nodes.get_mut(y).set_child(!dir, inner);
    nodes.get_mut(x).set_child(dir, Some(y));
    update_size(nodes, y);
    update_size(nodes, x);

    debug_assert_eq!(nodes.get(x).size(), before, "`rotate()` - subtree size changed");
    #[cfg(feature = "tracing")]
    tracing::trace!(?dir, size = before, "single rotation");
    x
}

//            z                    x
//           / \                 /   \
//          y   A               y     z
//         / \        =>       / \   / \
//        B   x               B   C D   A
//           / \
//          C   D
//
// Drawn for `dir == Right`.
/// Double rotation of `z` towards `dir`: the inner grandchild `x` becomes the
/// subtree root. Returns `x`.
pub(crate) fn double_rotate<T>(nodes: &mut Nodes<T>, z: Handle, dir: Dir) -> Handle {
    let y = nodes.get(z).child(!dir).expect("`double_rotate()` - missing child");
    let x = nodes.get(y).child(dir).expect("`double_rotate()` - missing grandchild");
    let before = nodes.get(z).size();

    let (x_inner, x_outer) = {
        let node = nodes.get(x);
        (node.child(!dir), node.child(dir))
    };
    nodes.get_mut(y).set_child(dir, x_inner);
    nodes.get_mut(x).set_child(!dir, Some(y));
    nodes.get_mut(z).set_child(!dir, x_outer);
    nodes.get_mut(x).set_child(dir, Some(z));
    update_size(nodes, z);
    update_size(nodes, y);
    update_size(nodes, x);

    debug_assert_eq!(nodes.get(x).size(), before, "`double_rotate()` - subtree size changed");
    #[cfg(feature = "tracing")]
    tracing::trace!(?dir, size = before, "double rotation");
    x
}

/// Restores weight balance at `handle`, assuming both subtrees are balanced and
/// its size is current. Returns the root of the rebalanced subtree, which the
/// caller must store in whatever link pointed at `handle`.
///
/// One insertion or removal shifts sizes by one along a single path, so one
/// rotation (single or double) per node is enough.
pub(crate) fn rebalance<T>(nodes: &mut Nodes<T>, handle: Handle) -> Handle {
    for dir in Dir::BOTH {
        if is_imbalanced(nodes, handle, DELTA, dir) {
            let heavy = nodes.get(handle).child(dir).expect("`rebalance()` - heavy side is empty");
            return if is_imbalanced(nodes, heavy, GAMMA, dir) {
                rotate(nodes, handle, !dir)
            } else {
                double_rotate(nodes, handle, !dir)
            };
        }
    }
    handle
}
