/// Determines how much checking a [`SlotMap`][crate::SlotMap] performs on itself.
///
/// Regardless of the mode, every operation that receives a handle verifies that the handle is
/// in range and currently in use before acting on it. The modes differ in whether the
/// structure as a whole is also verified.
///
/// # Examples
///
/// ```
/// use slot_map::{SlotMap, ValidationMode};
///
/// // The validation mode is set at map creation time.
/// let map = SlotMap::<u32>::builder()
///     .validation(ValidationMode::Full)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ValidationMode {
    /// Only the handle passed to an operation is validated. This is O(1) and is the default.
    #[default]
    HandlesOnly,

    /// After every mutating operation, all internal invariants are verified and the map panics
    /// on the first violation. This is O(n) per operation.
    ///
    /// This may be valuable in tests of code that builds on top of the map, to catch bugs as
    /// close as possible to the operation that caused them.
    Full,
}
