use super::handle::{Handle, RawHandle};

/// Node count of a subtree.
///
/// No subtree holds more nodes than the arena can address, so the count fits
/// in the handle's integer type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(RawHandle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    /// A lone leaf.
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    pub(crate) const fn from_usize(count: usize) -> Self {
        assert!(count <= Self::MAX, "`Size::from_usize()` - count exceeds `Size::MAX`");
        #[allow(clippy::cast_possible_truncation)]
        Self(count as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}
