//! Iterators over the contents of a `SlotMap`. All of them visit values in storage order.

use std::iter::{FusedIterator, Zip};
use std::{slice, vec};

use crate::SlotHandle;

/// Iterator over shared references to the values of a [`SlotMap`][crate::SlotMap].
///
/// Created by [`SlotMap::iter()`][crate::SlotMap::iter].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: slice::Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth_back(n)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over exclusive references to the values of a [`SlotMap`][crate::SlotMap].
///
/// Created by [`SlotMap::iter_mut()`][crate::SlotMap::iter_mut].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(inner: slice::IterMut<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth_back(n)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the values of a [`SlotMap`][crate::SlotMap].
///
/// Created by the [`IntoIterator`] implementation of [`SlotMap`][crate::SlotMap].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: vec::IntoIter<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Iterator over the handles of the values in a [`SlotMap`][crate::SlotMap].
///
/// Created by [`SlotMap::handles()`][crate::SlotMap::handles].
#[derive(Clone, Debug)]
pub struct Handles<'a> {
    inner: slice::Iter<'a, SlotHandle>,
}

impl<'a> Handles<'a> {
    pub(crate) fn new(inner: slice::Iter<'a, SlotHandle>) -> Self {
        Self { inner }
    }
}

impl Iterator for Handles<'_> {
    type Item = SlotHandle;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Handles<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Handles<'_> {}
impl FusedIterator for Handles<'_> {}

/// Iterator over `(handle, value)` pairs of a [`SlotMap`][crate::SlotMap].
///
/// Created by [`SlotMap::entries()`][crate::SlotMap::entries].
#[derive(Clone, Debug)]
pub struct Entries<'a, T> {
    inner: Zip<slice::Iter<'a, SlotHandle>, slice::Iter<'a, T>>,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(owners: slice::Iter<'a, SlotHandle>, values: slice::Iter<'a, T>) -> Self {
        debug_assert_eq!(owners.len(), values.len());

        Self {
            inner: owners.zip(values),
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (SlotHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(handle, value)| (*handle, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(handle, value)| (*handle, value))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
impl<T> FusedIterator for Entries<'_, T> {}

/// Iterator over `(handle, exclusive value reference)` pairs of a [`SlotMap`][crate::SlotMap].
///
/// Created by [`SlotMap::entries_mut()`][crate::SlotMap::entries_mut].
#[derive(Debug)]
pub struct EntriesMut<'a, T> {
    inner: Zip<slice::Iter<'a, SlotHandle>, slice::IterMut<'a, T>>,
}

impl<'a, T> EntriesMut<'a, T> {
    pub(crate) fn new(
        owners: slice::Iter<'a, SlotHandle>,
        values: slice::IterMut<'a, T>,
    ) -> Self {
        debug_assert_eq!(owners.len(), values.len());

        Self {
            inner: owners.zip(values),
        }
    }
}

impl<'a, T> Iterator for EntriesMut<'a, T> {
    type Item = (SlotHandle, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(handle, value)| (*handle, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for EntriesMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(handle, value)| (*handle, value))
    }
}

impl<T> ExactSizeIterator for EntriesMut<'_, T> {}
impl<T> FusedIterator for EntriesMut<'_, T> {}
