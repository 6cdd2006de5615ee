use thiserror::Error;

use crate::SlotHandle;

/// Errors returned by the fallible operations of [`SlotMap`][crate::SlotMap].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The handle does not refer to any entry of the map's handle table. It was either never
    /// issued by this map or issued before the map was cleared.
    #[error("handle {handle:?} is out of range for a handle table of {table_len} entries")]
    HandleOutOfRange {
        /// The handle that was presented.
        handle: SlotHandle,

        /// Number of entries in the handle table when the handle was presented.
        table_len: usize,
    },

    /// The handle refers to a handle table entry that is currently free, typically because
    /// its value has already been removed.
    #[error("handle {handle:?} is not in use")]
    HandleNotInUse {
        /// The handle that was presented.
        handle: SlotHandle,
    },
}

/// A specialized `Result` type for slot map operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn messages_name_the_handle() {
        let out_of_range = Error::HandleOutOfRange {
            handle: SlotHandle::new(12),
            table_len: 4,
        };
        let not_in_use = Error::HandleNotInUse {
            handle: SlotHandle::new(3),
        };

        assert_eq!(
            out_of_range.to_string(),
            "handle SlotHandle(12) is out of range for a handle table of 4 entries"
        );
        assert_eq!(not_in_use.to_string(), "handle SlotHandle(3) is not in use");
    }
}
