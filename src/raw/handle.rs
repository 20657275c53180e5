use core::num::NonZero;

// 16 bits under test keeps the node ceiling (65534) within reach of a unit test.
#[cfg(test)]
pub(super) type RawHandle = u16;
#[cfg(not(test))]
pub(super) type RawHandle = u32;

/// Names an arena slot.
///
/// The slot index is stored plus one, leaving zero as the niche that makes a
/// `Link` (`Option<Handle>`) as small as the handle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// The highest slot index a handle can name.
    pub(crate) const MAX: usize = RawHandle::MAX as usize - 1;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - slot index is not addressable");
        #[allow(clippy::cast_possible_truncation)]
        let biased = index as RawHandle + 1;
        match NonZero::new(biased) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        self.0.get() as usize - 1
    }
}
