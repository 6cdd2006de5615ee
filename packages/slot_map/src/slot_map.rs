use std::any::type_name;
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::{
    Cursor, CursorMut, Entries, EntriesMut, Error, HandleTable, Handles, IntoIter, Iter, IterMut,
    Result, SlotHandle, SlotMapBuilder, ValidationMode,
};

/// A densely packed collection of values of one type, each addressed by a stable [`SlotHandle`].
///
/// Values are stored contiguously, without gaps, so iterating over them is as fast as iterating
/// over a slice. Each inserted value gets a handle that resolves to it in O(1) for as long as the
/// value is in the map, no matter how many other values are inserted or removed meanwhile.
///
/// # Storage order
///
/// Removing a value moves the last value into the hole it leaves behind (swap-remove), so the
/// order of values in storage reflects neither insertion order nor anything else stable. The
/// position of a value may change whenever any value is removed. Use handles, not positions,
/// for anything that needs to outlive a mutation.
///
/// # Handle reuse
///
/// Handles of removed values are reused by later insertions, oldest removal first. A reused
/// handle is indistinguishable from the one that previously had the same value, so holding on
/// to a handle after removing its value is a logic error. The map detects handles that are
/// currently free, but it cannot detect a handle that has since been reissued.
///
/// # Validation
///
/// Every operation that takes a handle checks that the handle is in use. Methods such as
/// [`get()`][Self::get] and [`try_remove()`][Self::try_remove] report a bad handle to the caller,
/// whereas indexing and [`remove()`][Self::remove] panic. Additional whole-structure checks can be
/// enabled via [`ValidationMode::Full`].
///
/// # Thread safety
///
/// The map does not synchronize anything internally. It is thread-mobile and thread-safe to the
/// extent that `T` is, following the usual rules for shared and exclusive references.
///
/// # Examples
///
/// ```
/// use slot_map::SlotMap;
///
/// let mut map = SlotMap::new();
///
/// let a = map.insert("a");
/// let b = map.insert("b");
/// let c = map.insert("c");
///
/// map.remove(a);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map[b], "b");
/// assert_eq!(map[c], "c");
/// assert!(map.get(a).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SlotMap<T> {
    /// The values, densely packed. Indexed by position.
    values: Vec<T>,

    /// The reverse map. `owners[position]` is the handle of the value at `position`.
    /// Always the same length as `values`.
    owners: Vec<SlotHandle>,

    handles: HandleTable,

    validation: ValidationMode,
}

impl<T> SlotMap<T> {
    /// Creates a new, empty map with default settings.
    ///
    /// This does not allocate until the first insertion.
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(0, ValidationMode::default())
    }

    /// Creates a new, empty map with room for at least `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new_inner(capacity, ValidationMode::default())
    }

    /// Starts building a new map with custom settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::{SlotMap, ValidationMode};
    ///
    /// let map = SlotMap::<u32>::builder()
    ///     .capacity(16)
    ///     .validation(ValidationMode::Full)
    ///     .build();
    /// ```
    pub fn builder() -> SlotMapBuilder<T> {
        SlotMapBuilder::new()
    }

    pub(crate) fn new_inner(capacity: usize, validation: ValidationMode) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            owners: Vec::with_capacity(capacity),
            handles: HandleTable::with_capacity(capacity),
            validation,
        }
    }

    /// The validation mode the map was created with.
    #[must_use]
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// The number of values in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The number of values the map can hold without reallocating its value storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.capacity().min(self.owners.capacity())
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.owners.reserve(additional);
        self.handles.reserve(additional);
    }

    /// Inserts a value at the end of the storage order and returns its handle.
    ///
    /// If any handles have been freed by removals, the oldest of them is reused. Otherwise the
    /// handle table grows by one entry. Amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let handle = map.insert(42);
    ///
    /// assert_eq!(map[handle], 42);
    /// ```
    pub fn insert(&mut self, value: T) -> SlotHandle {
        let position = self.values.len();
        let handle = self.handles.allocate(position);

        self.values.push(value);
        self.owners.push(handle);

        self.after_mutation();

        handle
    }

    /// Whether `handle` currently identifies a value in the map.
    #[must_use]
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.checked_position(handle).is_ok()
    }

    /// The current storage position of the value identified by `handle`, or `None` if the
    /// handle is not in use.
    ///
    /// Positions are only meaningful until the next insertion or removal.
    #[must_use]
    pub fn position_of(&self, handle: SlotHandle) -> Option<usize> {
        self.checked_position(handle).ok()
    }

    /// The handle of the value at storage position `position`, or `None` if the position is
    /// past the end.
    #[must_use]
    pub fn handle_at(&self, position: usize) -> Option<SlotHandle> {
        self.owners.get(position).copied()
    }

    /// Returns a reference to the value identified by `handle`, or `None` if the handle is not
    /// in use.
    #[must_use]
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        let position = self.position_of(handle)?;
        self.values.get(position)
    }

    /// Returns an exclusive reference to the value identified by `handle`, or `None` if the
    /// handle is not in use.
    #[must_use]
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        let position = self.position_of(handle)?;
        self.values.get_mut(position)
    }

    /// Removes the value identified by `handle` and returns it.
    ///
    /// The last value in storage order is moved into the position the removed value occupied,
    /// so the position of that value changes. Its handle remains valid. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the handle is not in use.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let a = map.insert('a');
    /// let b = map.insert('b');
    ///
    /// assert_eq!(map.remove(a), 'a');
    ///
    /// // `b` was moved into the freed position but its handle still works.
    /// assert_eq!(map.position_of(b), Some(0));
    /// assert_eq!(map[b], 'b');
    /// ```
    pub fn remove(&mut self, handle: SlotHandle) -> T {
        self.try_remove(handle)
            .unwrap_or_else(|error| panic!("{error} in slot map of {}", type_name::<T>()))
    }

    /// Removes the value identified by `handle` and returns it, or returns an error if the
    /// handle is not in use.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::{Error, SlotMap};
    ///
    /// let mut map = SlotMap::new();
    /// let handle = map.insert(1);
    ///
    /// assert_eq!(map.try_remove(handle).unwrap(), 1);
    /// assert!(matches!(
    ///     map.try_remove(handle),
    ///     Err(Error::HandleNotInUse { .. })
    /// ));
    /// ```
    pub fn try_remove(&mut self, handle: SlotHandle) -> Result<T> {
        let position = self.checked_position(handle)?;
        Ok(self.remove_at(position))
    }

    /// Removes every value for which `keep` returns `false`.
    ///
    /// Removal follows the same rules as [`remove()`][Self::remove]: the handles of removed
    /// values are freed and storage order changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let handles = (0..10).map(|i| map.insert(i)).collect::<Vec<_>>();
    ///
    /// map.retain(|_, value| *value % 2 == 0);
    ///
    /// assert_eq!(map.len(), 5);
    /// assert!(map.contains(handles[4]));
    /// assert!(!map.contains(handles[5]));
    /// ```
    pub fn retain(&mut self, mut keep: impl FnMut(SlotHandle, &mut T) -> bool) {
        let mut position: usize = 0;

        while let Some(value) = self.values.get_mut(position) {
            let handle = *self
                .owners
                .get(position)
                .expect("reverse map has the same length as value storage");

            if keep(handle, value) {
                position = position
                    .checked_add(1)
                    .expect("bounded by the length of value storage");
            } else {
                // The last value moves into `position`, so it is visited next.
                drop(self.remove_at(position));
            }
        }
    }

    /// Removes all values. All handles issued so far become invalid and the map returns to the
    /// state of a newly created map, except that allocated memory is retained.
    pub fn clear(&mut self) {
        let dropped = self.values.len();

        self.values.clear();
        self.owners.clear();
        self.handles.clear();

        debug!(dropped, "slot map cleared");

        self.after_mutation();
    }

    /// The values as a slice, in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// The values as an exclusive slice, in storage order.
    ///
    /// The values may be modified in place but cannot be reordered through this slice, so all
    /// handles keep resolving to the same values.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterates over the values in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.values.iter())
    }

    /// Iterates over exclusive references to the values in storage order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.values.iter_mut())
    }

    /// Iterates over the handles of all values in storage order.
    pub fn handles(&self) -> Handles<'_> {
        Handles::new(self.owners.iter())
    }

    /// Iterates over `(handle, value)` pairs in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let a = map.insert("a");
    ///
    /// for (handle, value) in map.entries() {
    ///     assert_eq!(handle, a);
    ///     assert_eq!(*value, "a");
    /// }
    /// ```
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(self.owners.iter(), self.values.iter())
    }

    /// Iterates over `(handle, exclusive value reference)` pairs in storage order.
    pub fn entries_mut(&mut self) -> EntriesMut<'_, T> {
        EntriesMut::new(self.owners.iter(), self.values.iter_mut())
    }

    /// Returns a cursor pointing at the value identified by `handle`.
    ///
    /// If the handle is not in use, the cursor points at the end of the map instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let a = map.insert(10);
    /// let b = map.insert(20);
    ///
    /// let cursor = map.find(b);
    /// assert_eq!(cursor.get(), Some(&20));
    /// assert_eq!(cursor.handle(), Some(b));
    ///
    /// map.remove(a);
    /// assert!(map.find(a).is_end());
    /// ```
    #[must_use]
    pub fn find(&self, handle: SlotHandle) -> Cursor<'_, T> {
        let position = self.position_of(handle).unwrap_or(self.values.len());
        Cursor::new(self, position)
    }

    /// Returns an exclusive cursor pointing at the value identified by `handle`.
    ///
    /// If the handle is not in use, the cursor points at the end of the map instead.
    #[must_use]
    pub fn find_mut(&mut self, handle: SlotHandle) -> CursorMut<'_, T> {
        let position = self.position_of(handle).unwrap_or(self.values.len());
        CursorMut::new(self, position)
    }

    /// Returns a cursor pointing at the first value in storage order, or at the end if the
    /// map is empty.
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns an exclusive cursor pointing at the first value in storage order, or at the end
    /// if the map is empty.
    #[must_use]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Swap-removes the value at `position`, fixing up the handle of the value that moves and
    /// releasing the handle of the removed value.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub(crate) fn remove_at(&mut self, position: usize) -> T {
        assert!(
            position < self.values.len(),
            "position {position} out of bounds in slot map of {} with {} values",
            type_name::<T>(),
            self.values.len()
        );

        let value = self.values.swap_remove(position);
        let handle = self.owners.swap_remove(position);

        // Unless we removed the last value, the last value is now at `position`.
        if let Some(&moved) = self.owners.get(position) {
            self.handles.set_position(moved, position);
        }

        self.handles.release(handle);

        self.after_mutation();

        value
    }

    fn checked_position(&self, handle: SlotHandle) -> Result<usize> {
        let position = self.handles.get(handle).ok_or(Error::HandleOutOfRange {
            handle,
            table_len: self.handles.len(),
        })?;

        // Free entries hold free list links, not positions. Only a handle in use is recorded as
        // the owner of the position its entry names.
        if self.owners.get(position) == Some(&handle) {
            Ok(position)
        } else {
            Err(Error::HandleNotInUse { handle })
        }
    }

    fn after_mutation(&self) {
        if self.validation == ValidationMode::Full {
            self.integrity_check();
        }
    }

    /// Verifies all internal invariants.
    ///
    /// # Panics
    ///
    /// Panics if any invariant does not hold.
    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    pub(crate) fn integrity_check(&self) {
        assert!(
            self.values.len() == self.owners.len(),
            "value storage has {} values but the reverse map has {} owners in slot map of {}",
            self.values.len(),
            self.owners.len(),
            type_name::<T>()
        );

        for (position, &handle) in self.owners.iter().enumerate() {
            let resolved = self.handles.get(handle);

            assert!(
                resolved == Some(position),
                "{handle:?} owns position {position} but resolves to {resolved:?} in slot map of {}",
                type_name::<T>()
            );
        }

        self.handles
            .integrity_check(|handle| self.contains(handle), self.owners.len());
    }
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<SlotHandle> for SlotMap<T> {
    type Output = T;

    fn index(&self, handle: SlotHandle) -> &Self::Output {
        match self.checked_position(handle) {
            Ok(position) => self
                .values
                .get(position)
                .expect("checked positions are always within value storage"),
            Err(error) => panic!("{error} in slot map of {}", type_name::<T>()),
        }
    }
}

impl<T> IndexMut<SlotHandle> for SlotMap<T> {
    fn index_mut(&mut self, handle: SlotHandle) -> &mut Self::Output {
        match self.checked_position(handle) {
            Ok(position) => self
                .values
                .get_mut(position)
                .expect("checked positions are always within value storage"),
            Err(error) => panic!("{error} in slot map of {}", type_name::<T>()),
        }
    }
}

impl<'a, T> IntoIterator for &'a SlotMap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SlotMap<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SlotMap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.values.into_iter())
    }
}
