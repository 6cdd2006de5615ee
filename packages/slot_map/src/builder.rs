use std::marker::PhantomData;

use tracing::debug;

use crate::{SlotMap, ValidationMode};

/// Builder for creating an instance of [`SlotMap`].
///
/// All settings are optional. A builder with no settings applied produces the same map as
/// [`SlotMap::new()`].
///
/// # Examples
///
/// ```
/// use slot_map::{SlotMap, ValidationMode};
///
/// let map = SlotMap::<String>::builder()
///     .capacity(64)
///     .validation(ValidationMode::Full)
///     .build();
///
/// assert!(map.capacity() >= 64);
/// ```
#[derive(Debug)]
#[must_use]
pub struct SlotMapBuilder<T> {
    capacity: usize,
    validation: ValidationMode,

    _values: PhantomData<fn() -> T>,
}

impl<T> SlotMapBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: 0,
            validation: ValidationMode::default(),
            _values: PhantomData,
        }
    }

    /// Reserves room for at least `capacity` values up front, so that the first `capacity`
    /// insertions do not need to reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::SlotMap;
    ///
    /// let map = SlotMap::<u64>::builder().capacity(1000).build();
    /// assert!(map.capacity() >= 1000);
    /// ```
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the [validation mode][ValidationMode] for the map. This governs how much
    /// self-checking the map performs on every operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_map::{SlotMap, ValidationMode};
    ///
    /// let map = SlotMap::<u64>::builder()
    ///     .validation(ValidationMode::Full)
    ///     .build();
    /// ```
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Builds the map with the specified configuration.
    #[must_use]
    pub fn build(self) -> SlotMap<T> {
        debug!(
            capacity = self.capacity,
            validation = ?self.validation,
            "building slot map"
        );

        SlotMap::new_inner(self.capacity, self.validation)
    }
}
