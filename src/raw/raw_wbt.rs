use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use smallvec::SmallVec;

use super::arena::Arena;
use super::balance::{self, Nodes};
use super::handle::Handle;
use super::node::{Dir, Link, Node};
use super::path::{Path, Step};
use crate::comparator::Comparator;

/// The weight-balanced tree backing `WbtSet`.
///
/// The comparator is not stored here; every ordered operation borrows one, so
/// the set decides how elements compare.
#[derive(Clone)]
pub(crate) struct RawWbt<T> {
    /// Arena storing all tree nodes.
    nodes: Nodes<T>,
    /// Root of the tree, if the tree is non-empty.
    root: Link,
}

/// Outcome of a key search.
pub(crate) struct Found {
    /// The matching node, if any.
    pub(crate) node: Option<Handle>,
    /// One-based rank of the match or, on a miss, the rank the probe would
    /// take once inserted. Only computed when asked for.
    pub(crate) rank: Option<usize>,
}

impl<T> RawWbt<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of elements in the tree.
    pub(crate) fn len(&self) -> usize {
        balance::size_of(&self.nodes, self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    pub(crate) fn element(&self, handle: Handle) -> &T {
        self.nodes.get(handle).element()
    }

    /// Size of the subtree behind `link`.
    pub(crate) fn size_of(&self, link: Link) -> usize {
        balance::size_of(&self.nodes, link)
    }

    /// Stores `link` in the slot that owns the subtree at the end of `path`:
    /// the parent's child link for the last step, or the root.
    fn set_link(&mut self, path: &Path, link: Link) {
        match path.last() {
            Some(&Step {
                node,
                dir,
            }) => self.nodes.get_mut(node).set_child(dir, link),
            None => self.root = link,
        }
    }

    /// Unwinds `path` bottom-up: recomputes each node's size, rebalances it and
    /// hangs the resulting subtree root back on its owner.
    fn rebalance_path(&mut self, mut path: Path) {
        while let Some(step) = path.pop() {
            balance::update_size(&mut self.nodes, step.node);
            let root = balance::rebalance(&mut self.nodes, step.node);
            if root != step.node {
                self.set_link(&path, Some(root));
            }
        }
    }

    /// Walks from the root towards the element at one-based `rank`, recording
    /// the path when one is given.
    ///
    /// Returns `None` if `rank` is outside `1..=len`.
    fn descend_by_rank(&self, mut rank: usize, mut path: Option<&mut Path>) -> Option<Handle> {
        if rank == 0 || rank > self.len() {
            return None;
        }

        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            debug_assert!(
                (1..=node.size()).contains(&rank),
                "`RawWbt::descend_by_rank()` - subtree sizes are inconsistent"
            );
            let here = 1 + self.size_of(node.left());
            let dir = match rank.cmp(&here) {
                core::cmp::Ordering::Equal => return Some(handle),
                core::cmp::Ordering::Less => Dir::Left,
                core::cmp::Ordering::Greater => {
                    rank -= here;
                    Dir::Right
                }
            };
            if let Some(path) = path.as_mut() {
                path.push(Step {
                    node: handle,
                    dir,
                });
            }
            current = node.child(dir);
        }
        unreachable!("`RawWbt::descend_by_rank()` - ran off the tree with a valid rank")
    }

    /// Returns the element at one-based `rank`.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.descend_by_rank(rank, None).map(|h| self.element(h))
    }

    /// Removes and returns the element at one-based `rank`.
    pub(crate) fn remove_by_rank(&mut self, rank: usize) -> Option<T> {
        let mut path = Path::new();
        let target = self.descend_by_rank(rank, Some(&mut path))?;
        Some(self.unlink(target, path))
    }

    /// Takes `target` out of the tree and returns its element. `path` must end
    /// at `target`'s parent.
    ///
    /// A node with a free side is replaced by its other child. Otherwise its
    /// in-order successor (the leftmost node of its right subtree) gives up its
    /// element to `target` and is spliced out in its place.
    fn unlink(&mut self, target: Handle, mut path: Path) -> T {
        let node = self.nodes.get(target);
        let (doomed, replacement) = match (node.left(), node.right()) {
            (None, other) | (other, None) => (target, other),
            (Some(_), Some(right)) => {
                path.push(Step {
                    node: target,
                    dir: Dir::Right,
                });
                let mut successor = right;
                while let Some(left) = self.nodes.get(successor).left() {
                    path.push(Step {
                        node: successor,
                        dir: Dir::Left,
                    });
                    successor = left;
                }
                (successor, self.nodes.get(successor).right())
            }
        };

        self.set_link(&path, replacement);
        let removed = self.nodes.take(doomed).into_element();
        let element = if doomed == target {
            removed
        } else {
            self.nodes.get_mut(target).replace_element(removed)
        };
        self.rebalance_path(path);
        element
    }

    /// Visits every element in ascending order, or descending with `reverse`.
    pub(crate) fn walk<F: FnMut(&T)>(&self, reverse: bool, f: &mut F) {
        let first = if reverse { Dir::Right } else { Dir::Left };
        self.walk_from(self.root, first, f);
    }

    fn walk_from<F: FnMut(&T)>(&self, link: Link, first: Dir, f: &mut F) {
        if let Some(handle) = link {
            let node = self.nodes.get(handle);
            self.walk_from(node.child(first), first, f);
            f(node.element());
            self.walk_from(node.child(!first), first, f);
        }
    }

    /// Moves every element out in ascending order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len());
        let mut stack: SmallVec<[Handle; 64]> = SmallVec::new();
        let mut current = self.root.take();

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else { break };
            let node = self.nodes.take(handle);
            current = node.right();
            result.push(node.into_element());
        }

        debug_assert_eq!(self.nodes.len(), 0, "`RawWbt::drain_to_vec()` - unreachable nodes left behind");
        self.nodes.clear();
        result
    }

    /// Keeps only the elements `keep` approves, in ascending order.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let mut rank = 1;
        while let Some(element) = self.get_by_rank(rank) {
            if keep(element) {
                rank += 1;
            } else {
                self.remove_by_rank(rank);
            }
        }
    }
}

impl<T> RawWbt<T> {
    /// Searches for a stored element matching `probe`.
    ///
    /// With a `path`, records every step taken, so a match leaves the path
    /// ending at the match's parent and a miss leaves it ending at the empty
    /// link where `probe` belongs. Rank bookkeeping runs only when `track_rank`
    /// is set.
    fn search_from<C: Comparator<T>>(
        &self,
        probe: &T,
        cmp: &C,
        mut path: Option<&mut Path>,
        track_rank: bool,
    ) -> Found {
        let mut rank = 1;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if cmp.is_match(probe, node.element()) {
                if track_rank {
                    rank += self.size_of(node.left());
                }
                return Found {
                    node: Some(handle),
                    rank: track_rank.then_some(rank),
                };
            }
            let dir = if cmp.is_less(probe, node.element()) { Dir::Left } else { Dir::Right };
            if track_rank && dir == Dir::Right {
                rank += 1 + self.size_of(node.left());
            }
            if let Some(path) = path.as_mut() {
                path.push(Step {
                    node: handle,
                    dir,
                });
            }
            current = node.child(dir);
        }

        Found {
            node: None,
            rank: track_rank.then_some(rank),
        }
    }

    /// Read-only lookup; no path is recorded.
    pub(crate) fn search<C: Comparator<T>>(&self, probe: &T, cmp: &C, track_rank: bool) -> Found {
        self.search_from(probe, cmp, None, track_rank)
    }

    /// Inserts `element`, replacing a matching one in place if present.
    ///
    /// Returns the element's one-based rank (when `track_rank` is set) and the
    /// element it replaced, if any.
    pub(crate) fn insert<C: Comparator<T>>(&mut self, element: T, cmp: &C, track_rank: bool) -> (Option<usize>, Option<T>) {
        let mut path = Path::new();
        let found = self.search_from(&element, cmp, Some(&mut path), track_rank);
        if let Some(handle) = found.node {
            let old = self.nodes.get_mut(handle).replace_element(element);
            return (found.rank, Some(old));
        }

        let leaf = self.nodes.alloc(Node::leaf(element));
        self.attach(leaf, path);
        (found.rank, None)
    }

    /// Like [`insert`](Self::insert), but reports allocation failure instead of
    /// aborting. The tree is untouched on error.
    pub(crate) fn try_insert<C: Comparator<T>>(&mut self, element: T, cmp: &C) -> Result<Option<T>, TryReserveError> {
        let mut path = Path::new();
        let found = self.search_from(&element, cmp, Some(&mut path), false);
        if let Some(handle) = found.node {
            return Ok(Some(self.nodes.get_mut(handle).replace_element(element)));
        }

        let leaf = self.nodes.try_alloc(Node::leaf(element))?;
        self.attach(leaf, path);
        Ok(None)
    }

    /// Hangs a fresh leaf on the empty link at the end of `path` and rebalances.
    fn attach(&mut self, leaf: Handle, path: Path) {
        debug_assert!(
            match path.last() {
                Some(step) => self.nodes.get(step.node).child(step.dir).is_none(),
                None => self.root.is_none(),
            },
            "`RawWbt::attach()` - insertion point is occupied"
        );
        self.set_link(&path, Some(leaf));
        self.rebalance_path(path);
    }

    /// Removes the element matching `probe`. Returns its one-based rank before
    /// removal (when `track_rank` is set) and the element itself.
    pub(crate) fn remove<C: Comparator<T>>(&mut self, probe: &T, cmp: &C, track_rank: bool) -> Option<(Option<usize>, T)> {
        let mut path = Path::new();
        let found = self.search_from(probe, cmp, Some(&mut path), track_rank);
        let target = found.node?;
        Some((found.rank, self.unlink(target, path)))
    }
}
