/// An opaque token identifying a value stored in a [`SlotMap`][crate::SlotMap].
///
/// A handle is returned by [`insert()`][crate::SlotMap::insert] and stays valid until the value
/// it identifies is removed. Unrelated insertions and removals never invalidate it, even though
/// they may move the value to a different storage position.
///
/// Once the value is removed, the handle goes back into the map's free list and a later
/// insertion may hand out an equal handle for an unrelated value. There is no way to tell the
/// two apart, so callers must stop using a handle as soon as they remove its value.
///
/// The numeric value of a handle carries no meaning. In particular, it says nothing about
/// insertion order or how many values the map holds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SlotHandle(usize);

impl SlotHandle {
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index of this handle's entry in the handle table.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}
