use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Freed slots are recycled before the slot vector grows, so a set that
/// churns around a steady size keeps a steady footprint.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live elements.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Makes room for `additional` more live elements without aborting on
    /// allocation failure.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let needed = additional.saturating_sub(self.free.len());
        if needed > 0 {
            self.slots.try_reserve(needed)?;
            // A later `take` may push every slot onto the free list.
            let free_needed = self.slots.len() + needed;
            self.free.try_reserve(free_needed.saturating_sub(self.free.len()))?;
            #[cfg(feature = "tracing")]
            tracing::debug!(additional, capacity = self.slots.capacity(), "node arena reserved");
        }
        Ok(())
    }

    /// Stores `element`, preferring a recycled slot.
    ///
    /// # Panics
    ///
    /// Panics if every handle is in use.
    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(recycled) = self.free.pop() {
            self.slots[recycled.to_index()] = Some(element);
            return recycled;
        }

        // Strict less-than keeps the live count within `Size::MAX`.
        let index = self.slots.len();
        assert!(index < Handle::MAX, "`Arena::alloc()` - all {} handles are in use", Handle::MAX);
        self.slots.push(Some(element));
        Handle::from_index(index)
    }

    /// Like [`alloc`](Self::alloc), but reports allocation failure instead of
    /// aborting. On error `element` is dropped and the arena is unchanged.
    pub(crate) fn try_alloc(&mut self, element: T) -> Result<Handle, TryReserveError> {
        self.try_reserve(1)?;
        Ok(self.alloc(element))
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - slot is vacant")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - slot is vacant")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - slot is vacant");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
