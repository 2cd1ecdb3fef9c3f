#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ConfigError;

#[cfg(feature = "std")]
type FirstSeen<'a, T> = HashMap<&'a T, usize>;
#[cfg(not(feature = "std"))]
type FirstSeen<'a, T> = BTreeMap<&'a T, usize>;

/// Items usable in value mode, where a picker is driven by value identity instead of index.
#[cfg(feature = "std")]
pub trait PickerValue: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> PickerValue for T {}

#[cfg(not(feature = "std"))]
pub trait PickerValue: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> PickerValue for T {}

/// Fails with [`ConfigError::DuplicateItems`] on the first repeated item.
pub fn ensure_unique<T: PickerValue>(items: &[T]) -> Result<(), ConfigError> {
    let mut seen: FirstSeen<'_, T> = FirstSeen::new();
    for (second, item) in items.iter().enumerate() {
        if let Some(&first) = seen.get(item) {
            return Err(ConfigError::DuplicateItems { first, second });
        }
        seen.insert(item, second);
    }
    Ok(())
}

/// Index of `value` in `items`, `None` when absent.
pub fn index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|item| item == value)
}
