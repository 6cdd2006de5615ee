use crate::{SlotHandle, SlotMap};

/// A position in the storage order of a [`SlotMap`], borrowing the map.
///
/// A cursor points either at a value or at the end of the map (one past the last value). It
/// can be moved in either direction and by arbitrary offsets, and it can translate its position
/// back into the handle of the value it points at.
///
/// Cursors are created by [`SlotMap::find()`] and [`SlotMap::cursor_front()`]. Because a cursor
/// borrows the map, the map cannot be modified while the cursor exists, so a cursor can never
/// observe a position that was invalidated by a mutation.
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
/// let mut cursor = map.cursor_front();
/// assert_eq!(cursor.handle(), Some(a));
///
/// cursor.move_next();
/// assert_eq!(cursor.handle(), Some(b));
///
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor.get(), None);
/// ```
#[derive(Debug)]
pub struct Cursor<'m, T> {
    map: &'m SlotMap<T>,
    position: usize,
}

impl<'m, T> Cursor<'m, T> {
    pub(crate) fn new(map: &'m SlotMap<T>, position: usize) -> Self {
        debug_assert!(position <= map.len());

        Self { map, position }
    }

    /// The storage position the cursor points at. Equal to the length of the map if the
    /// cursor is at the end.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor points at the end of the map rather than at a value.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position >= self.map.len()
    }

    /// The value the cursor points at, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<&'m T> {
        self.map.as_slice().get(self.position)
    }

    /// The handle of the value the cursor points at, or `None` at the end.
    #[must_use]
    pub fn handle(&self) -> Option<SlotHandle> {
        self.map.handle_at(self.position)
    }

    /// Moves the cursor to the next position. Returns `false` without moving if the cursor is
    /// already at the end.
    pub fn move_next(&mut self) -> bool {
        self.move_by(1)
    }

    /// Moves the cursor to the previous position. Returns `false` without moving if the cursor
    /// is already at the first position.
    pub fn move_prev(&mut self) -> bool {
        self.move_by(-1)
    }

    /// Moves the cursor by `delta` positions. Returns `false` without moving if that would take
    /// the cursor before the first position or past the end.
    pub fn move_by(&mut self, delta: isize) -> bool {
        match offset_position(self.position, delta, self.map.len()) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// A position in the storage order of a [`SlotMap`], exclusively borrowing the map.
///
/// This is the exclusive counterpart of [`Cursor`]. In addition to everything a [`Cursor`] can
/// do, it gives exclusive access to the value it points at and can remove that value.
///
/// Cursors are created by [`SlotMap::find_mut()`] and [`SlotMap::cursor_front_mut()`].
///
/// # Examples
///
/// Removing values while walking the map:
///
/// ```
/// use slot_map::SlotMap;
///
/// let mut map = SlotMap::new();
/// for i in 0..6 {
///     map.insert(i);
/// }
///
/// let mut cursor = map.cursor_front_mut();
/// while let Some(value) = cursor.get() {
///     if value % 2 == 1 {
///         // Another value moves into this position, so do not advance.
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
///
/// assert_eq!(map.len(), 3);
/// assert!(map.iter().all(|value| value % 2 == 0));
/// ```
#[derive(Debug)]
pub struct CursorMut<'m, T> {
    map: &'m mut SlotMap<T>,
    position: usize,
}

impl<'m, T> CursorMut<'m, T> {
    pub(crate) fn new(map: &'m mut SlotMap<T>, position: usize) -> Self {
        debug_assert!(position <= map.len());

        Self { map, position }
    }

    /// The storage position the cursor points at. Equal to the length of the map if the
    /// cursor is at the end.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor points at the end of the map rather than at a value.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position >= self.map.len()
    }

    /// The value the cursor points at, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.map.as_slice().get(self.position)
    }

    /// An exclusive reference to the value the cursor points at, or `None` at the end.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.map.as_mut_slice().get_mut(self.position)
    }

    /// The handle of the value the cursor points at, or `None` at the end.
    #[must_use]
    pub fn handle(&self) -> Option<SlotHandle> {
        self.map.handle_at(self.position)
    }

    /// Moves the cursor to the next position. Returns `false` without moving if the cursor is
    /// already at the end.
    pub fn move_next(&mut self) -> bool {
        self.move_by(1)
    }

    /// Moves the cursor to the previous position. Returns `false` without moving if the cursor
    /// is already at the first position.
    pub fn move_prev(&mut self) -> bool {
        self.move_by(-1)
    }

    /// Moves the cursor by `delta` positions. Returns `false` without moving if that would take
    /// the cursor before the first position or past the end.
    pub fn move_by(&mut self, delta: isize) -> bool {
        match offset_position(self.position, delta, self.map.len()) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes the value the cursor points at and returns it, or returns `None` at the end.
    ///
    /// The cursor stays at the same position. Unless the removed value was the last one, that
    /// position now holds the value that used to be last. Otherwise the cursor is at the end.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.is_end() {
            return None;
        }

        Some(self.map.remove_at(self.position))
    }

    /// Returns a shared cursor at the same position, borrowing from this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.map, self.position)
    }
}

fn offset_position(position: usize, delta: isize, len: usize) -> Option<usize> {
    position
        .checked_add_signed(delta)
        .filter(|&candidate| candidate <= len)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::rc::Rc;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(Cursor<'static, u32>: Copy, Send, Sync);
    assert_impl_all!(CursorMut<'static, u32>: Send, Sync);
    assert_not_impl_any!(CursorMut<'static, u32>: Clone);
    assert_not_impl_any!(Cursor<'static, Rc<u32>>: Send, Sync);

    fn sample() -> (SlotMap<char>, Vec<SlotHandle>) {
        let mut map = SlotMap::new();
        let handles = ['a', 'b', 'c', 'd'].map(|c| map.insert(c)).to_vec();
        (map, handles)
    }

    #[test]
    fn walk_forward_and_back() {
        let (map, handles) = sample();

        let mut cursor = map.cursor_front();
        let mut forward = Vec::new();

        while let Some(handle) = cursor.handle() {
            forward.push(handle);
            assert!(cursor.move_next());
        }

        assert_eq!(forward, handles);
        assert!(cursor.is_end());
        assert!(!cursor.move_next());

        let mut backward = Vec::new();
        while cursor.move_prev() {
            backward.push(*cursor.get().unwrap());
        }

        assert_eq!(backward, vec!['d', 'c', 'b', 'a']);
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.move_prev());
    }

    #[test]
    fn move_by_stays_in_bounds() {
        let (map, _) = sample();

        let mut cursor = map.cursor_front();

        assert!(cursor.move_by(3));
        assert_eq!(cursor.get(), Some(&'d'));

        assert!(!cursor.move_by(2));
        assert_eq!(cursor.position(), 3);

        assert!(cursor.move_by(1));
        assert!(cursor.is_end());

        assert!(!cursor.move_by(-5));
        assert!(cursor.move_by(-4));
        assert_eq!(cursor.get(), Some(&'a'));

        assert!(!cursor.move_by(isize::MIN));
        assert!(!cursor.move_by(isize::MAX));
    }

    #[test]
    fn handle_resolves_back_to_value() {
        let (mut map, handles) = sample();
        map.remove(handles[0]);

        let mut cursor = map.cursor_front();
        while let Some(handle) = cursor.handle() {
            assert_eq!(cursor.get(), Some(&map[handle]));
            cursor.move_next();
        }
    }

    #[test]
    fn empty_map_cursor_is_at_end() {
        let mut map = SlotMap::<u8>::new();

        assert!(map.cursor_front().is_end());
        assert_eq!(map.cursor_front().handle(), None);

        let mut cursor = map.cursor_front_mut();
        assert!(cursor.is_end());
        assert_eq!(cursor.get_mut(), None);
        assert_eq!(cursor.remove_current(), None);
    }

    #[test]
    fn cursor_mut_modifies_value() {
        let (mut map, handles) = sample();

        {
            let mut cursor = map.find_mut(handles[2]);
            *cursor.get_mut().unwrap() = 'z';
            assert_eq!(cursor.handle(), Some(handles[2]));
        }

        assert_eq!(map[handles[2]], 'z');
    }

    #[test]
    fn remove_current_pulls_in_last_value() {
        let (mut map, handles) = sample();

        {
            let mut cursor = map.find_mut(handles[1]);

            assert_eq!(cursor.remove_current(), Some('b'));

            // 'd' was last and moved into position 1.
            assert_eq!(cursor.position(), 1);
            assert_eq!(cursor.get(), Some(&'d'));
            assert_eq!(cursor.handle(), Some(handles[3]));
        }

        assert_eq!(map.len(), 3);
        assert!(!map.contains(handles[1]));
        assert_eq!(map[handles[3]], 'd');
    }

    #[test]
    fn remove_current_at_last_position_reaches_end() {
        let (mut map, handles) = sample();

        let mut cursor = map.find_mut(handles[3]);

        assert_eq!(cursor.remove_current(), Some('d'));
        assert!(cursor.is_end());
        assert_eq!(cursor.remove_current(), None);
    }

    #[test]
    fn as_cursor_shares_position() {
        let (mut map, handles) = sample();

        let cursor_mut = map.find_mut(handles[2]);
        let cursor = cursor_mut.as_cursor();

        assert_eq!(cursor.position(), cursor_mut.position());
        assert_eq!(cursor.get(), Some(&'c'));
    }

    #[test]
    fn copied_cursor_moves_independently() {
        let (map, _) = sample();

        let original = map.cursor_front();
        let mut copy = original;

        copy.move_next();

        assert_eq!(original.position(), 0);
        assert_eq!(copy.position(), 1);
    }
}
