use core::ops::Not;

use super::handle::Handle;
use super::size::Size;

/// A child link. `None` is the empty subtree and always has size zero.
pub(crate) type Link = Option<Handle>;

/// Branch taken from a node: `Left` towards smaller elements, `Right` towards larger ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Dir {
    pub(crate) const BOTH: [Dir; 2] = [Dir::Left, Dir::Right];
}

impl Not for Dir {
    type Output = Dir;

    #[inline]
    fn not(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// A tree vertex: two child links, the size of the subtree it roots and the
/// element itself, stored inline.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    children: [Link; 2],
    size: Size,
    element: T,
}

impl<T> Node<T> {
    /// Creates a leaf holding `element`.
    pub(crate) fn leaf(element: T) -> Self {
        Self {
            children: [None, None],
            size: Size::ONE,
            element,
        }
    }

    #[inline]
    pub(crate) fn child(&self, dir: Dir) -> Link {
        self.children[dir as usize]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, dir: Dir, link: Link) {
        self.children[dir as usize] = link;
    }

    #[inline]
    pub(crate) fn left(&self) -> Link {
        self.child(Dir::Left)
    }

    #[inline]
    pub(crate) fn right(&self) -> Link {
        self.child(Dir::Right)
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size.to_usize()
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = Size::from_usize(size);
    }

    #[inline]
    pub(crate) fn element(&self) -> &T {
        &self.element
    }

    /// Swaps in a new element and hands back the old one.
    pub(crate) fn replace_element(&mut self, element: T) -> T {
        core::mem::replace(&mut self.element, element)
    }

    pub(crate) fn into_element(self) -> T {
        self.element
    }
}
