use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Display;

use wheel_picker::{ConfigError, PickerOptions, PickerValue, ensure_unique, index_of};

use crate::Picker;

/// Called with the newly selected value after a user-driven scroll or tap.
pub type OnValueChangeCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value-mode picker: the host speaks in values, the engine in indexes.
///
/// Items must be unique, since a value has to identify exactly one position. Values are mapped
/// to indexes at the boundary only; a value that is not among the items is ignored.
pub struct ValuePicker<T> {
    picker: Picker<T>,
    on_value_change: Option<OnValueChangeCallback<T>>,
}

impl<T: PickerValue + Send + Sync + 'static> ValuePicker<T> {
    /// Fails on duplicate items or an invalid visible count.
    pub fn new(
        items: Vec<T>,
        options: PickerOptions,
        label: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        ensure_unique(&items)?;
        let picker = Picker::new(
            items,
            PickerOptions {
                on_select: None,
                ..options
            },
            label,
        )?;
        Ok(Self {
            picker,
            on_value_change: None,
        })
    }

    pub fn with_on_value_change(mut self, on_change: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(Arc::new(on_change));
        self.install_on_select();
        self
    }

    pub fn picker(&self) -> &Picker<T> {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut Picker<T> {
        &mut self.picker
    }

    pub fn into_picker(self) -> Picker<T> {
        self.picker
    }

    pub fn items(&self) -> &[T] {
        self.picker.items()
    }

    /// Replaces the items; fails (leaving the picker unchanged) on duplicates.
    ///
    /// The selected value keeps its identity: the picker follows it to its new position. A
    /// value that is gone leaves no selection, and the centered item is reported instead.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), ConfigError> {
        ensure_unique(&items)?;
        let remapped = self
            .selected_value()
            .map(|value| index_of(items.as_slice(), value));
        let count = items.len();
        self.picker.replace_items(items);
        self.install_on_select();
        self.picker.engine_mut().items_replaced(count);
        if let Some(index) = remapped {
            self.picker.set_selected_index(index);
        }
        Ok(())
    }

    pub fn selected_value(&self) -> Option<&T> {
        self.picker.selected_item()
    }

    /// Pushes the host's current value.
    pub fn set_selected_value(&mut self, value: Option<&T>) {
        let index = value.and_then(|value| index_of(self.picker.items(), value));
        #[cfg(feature = "tracing")]
        {
            if value.is_some() && index.is_none() {
                tracing::debug!(target: "wheel_picker", "selected value not among the items");
            }
        }
        self.picker.set_selected_index(index);
    }

    fn install_on_select(&mut self) {
        let Some(on_value_change) = self.on_value_change.clone() else {
            self.picker.engine_mut().set_on_select(None);
            return;
        };
        let items = self.picker.shared_items();
        self.picker
            .engine_mut()
            .set_on_select(Some(Arc::new(move |index: usize| {
                if let Some(value) = items.get(index) {
                    on_value_change(value);
                }
            })));
    }
}

impl<T: PickerValue + Display + Send + Sync + 'static> ValuePicker<T> {
    pub fn with_display_labels(
        items: Vec<T>,
        options: PickerOptions,
    ) -> Result<Self, ConfigError> {
        Self::new(items, options, |item: &T| item.to_string())
    }

    pub fn vertical(items: Vec<T>) -> Result<Self, ConfigError> {
        Self::with_display_labels(items, PickerOptions::vertical(0))
    }

    pub fn horizontal(items: Vec<T>) -> Result<Self, ConfigError> {
        Self::with_display_labels(items, PickerOptions::horizontal(0))
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ValuePicker<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValuePicker")
            .field("picker", &self.picker)
            .finish_non_exhaustive()
    }
}
