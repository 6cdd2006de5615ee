use tracing::trace;

use crate::SlotHandle;

/// Translates handles to storage positions and keeps track of which handles are free.
///
/// Every entry is either in use or free. An entry in use holds the storage position of the
/// value its handle identifies. A free entry holds the index of the next free entry, so the
/// free handles form a linked list threaded through the table itself (intrusive freelist).
///
/// The last entry of a non-empty table is always the sentinel: a free entry that links to
/// itself. The other free entries form a FIFO queue from `head` to `tail`, with `tail` linking
/// to the sentinel. When that queue is empty, both `head` and `tail` point at the sentinel.
///
/// Handing out the sentinel appends a fresh sentinel, which is how the table grows. A new or
/// cleared table has no entries at all and creates its first sentinel on first use.
#[derive(Clone, Debug, Default)]
pub(crate) struct HandleTable {
    entries: Vec<usize>,

    /// Next handle to hand out. Either the oldest released handle or the sentinel.
    head: usize,

    /// Most recently released handle still waiting for reuse, or the sentinel if none is.
    tail: usize,
}

impl HandleTable {
    #[must_use]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            // One extra for the sentinel.
            entries: Vec::with_capacity(capacity.saturating_add(1)),
            head: 0,
            tail: 0,
        }
    }

    /// Number of entries in the table, including free ones and the sentinel.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the raw entry for `handle` or `None` if the handle is outside the table.
    ///
    /// For a handle in use this is its storage position. For a free handle it is a free list
    /// link, which is why callers must confirm the result against the reverse map.
    #[must_use]
    pub(crate) fn get(&self, handle: SlotHandle) -> Option<usize> {
        self.entries.get(handle.index()).copied()
    }

    /// Points a handle that is in use at a new storage position.
    ///
    /// # Panics
    ///
    /// Panics if the handle is outside the table.
    pub(crate) fn set_position(&mut self, handle: SlotHandle, position: usize) {
        *self.entry_mut(handle.index()) = position;
    }

    /// Takes the handle at the head of the free list and points it at `position`.
    #[must_use]
    pub(crate) fn allocate(&mut self, position: usize) -> SlotHandle {
        if self.entries.is_empty() {
            // The very first sentinel. `head` and `tail` already point at index 0.
            self.entries.push(0);
        }

        let index = self.head;

        if index == self.sentinel() {
            let fresh = self.entries.len();
            self.entries.push(fresh);

            self.head = fresh;
            self.tail = fresh;

            trace!(handle = index, table_len = self.entries.len(), "handle table grew");
        } else {
            self.head = self.entry(index);

            if self.tail == index {
                // That was the last released handle, so the queue now only has the sentinel.
                self.tail = self.head;
            }
        }

        *self.entry_mut(index) = position;

        SlotHandle::new(index)
    }

    /// Appends a handle that is no longer in use to the tail of the free list.
    ///
    /// The caller is responsible for ensuring the handle is currently in use.
    ///
    /// # Panics
    ///
    /// Panics if the handle is outside the table.
    pub(crate) fn release(&mut self, handle: SlotHandle) {
        let index = handle.index();
        let sentinel = self.sentinel();

        assert!(
            index != sentinel,
            "cannot release handle {index} because it is the free list sentinel"
        );

        *self.entry_mut(index) = sentinel;

        if self.head == sentinel {
            self.head = index;
        } else {
            *self.entry_mut(self.tail) = index;
        }

        self.tail = index;
    }

    /// Forgets all entries, returning the table to the state of a new table.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.head = 0;
        self.tail = 0;
    }

    fn sentinel(&self) -> usize {
        self.entries
            .len()
            .checked_sub(1)
            .expect("only called on a table that has at least the sentinel entry")
    }

    fn entry(&self, index: usize) -> usize {
        *self.entries.get(index).unwrap_or_else(|| {
            panic!(
                "handle {index} out of bounds in handle table of {} entries",
                self.entries.len()
            )
        })
    }

    fn entry_mut(&mut self, index: usize) -> &mut usize {
        let len = self.entries.len();

        self.entries
            .get_mut(index)
            .unwrap_or_else(|| panic!("handle {index} out of bounds in handle table of {len} entries"))
    }

    /// Verifies the free list against the set of handles the owner considers in use.
    ///
    /// # Panics
    ///
    /// Panics if any structural invariant does not hold.
    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    pub(crate) fn integrity_check(&self, is_in_use: impl Fn(SlotHandle) -> bool, in_use_count: usize) {
        if self.entries.is_empty() {
            assert!(
                self.head == 0 && self.tail == 0,
                "empty handle table has head {} and tail {} instead of 0",
                self.head,
                self.tail
            );
            assert!(
                in_use_count == 0,
                "empty handle table cannot have {in_use_count} handles in use"
            );
            return;
        }

        let sentinel = self.sentinel();

        assert!(
            self.entry(sentinel) == sentinel,
            "sentinel {sentinel} links to {} instead of itself",
            self.entry(sentinel)
        );
        assert!(
            !is_in_use(SlotHandle::new(sentinel)),
            "sentinel {sentinel} is in use"
        );

        let mut queued: usize = 0;
        let mut last_queued = sentinel;
        let mut current = self.head;

        while current != sentinel {
            assert!(
                !is_in_use(SlotHandle::new(current)),
                "free list entry {current} is in use"
            );

            queued = queued
                .checked_add(1)
                .expect("bounded by the table length check below");

            assert!(
                queued < self.entries.len(),
                "free list starting at {} does not reach the sentinel {sentinel}",
                self.head
            );

            last_queued = current;
            current = self.entry(current);
        }

        assert!(
            self.tail == last_queued,
            "free list tail is {} but the last queued entry is {last_queued}",
            self.tail
        );

        let accounted = in_use_count
            .checked_add(queued)
            .and_then(|x| x.checked_add(1))
            .expect("all terms are bounded by the table length");

        assert!(
            accounted == self.entries.len(),
            "{in_use_count} handles in use, {queued} queued and one sentinel do not add up to {} entries",
            self.entries.len()
        );
    }
}
