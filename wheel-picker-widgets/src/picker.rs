use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Display;

use wheel_picker::{ConfigError, Constraints, PickerEngine, PickerOptions};

use crate::{Palette, PickerItemData, SinglePickerStyle, defaults};

/// Formats one item for display.
pub type LabelFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// An index-mode picker over a list of items: a [`PickerEngine`] plus the items, a label
/// formatter and a style.
///
/// This type does not hold any UI objects. A host renders [`Picker::item_data`] on top of
/// the engine's scroll position and forwards input to the engine.
pub struct Picker<T> {
    engine: PickerEngine,
    items: Arc<[T]>,
    label: LabelFn<T>,
    style: SinglePickerStyle,
}

impl<T> Picker<T> {
    /// Creates a picker; the item count in `options` is taken from `items`.
    pub fn new(
        items: Vec<T>,
        options: PickerOptions,
        label: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        let items: Arc<[T]> = items.into();
        let engine = PickerEngine::new(PickerOptions {
            count: items.len(),
            ..options
        })?;
        Ok(Self {
            engine,
            items,
            label: Arc::new(label),
            style: defaults::single_picker_style(&Palette::default()),
        })
    }

    pub fn with_style(mut self, style: SinglePickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.label = Arc::new(label);
        self
    }

    pub fn with_on_selected_index_change(
        mut self,
        on_change: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        self.engine.set_on_select(Some(Arc::new(on_change)));
        self
    }

    pub fn engine(&self) -> &PickerEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PickerEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> PickerEngine {
        self.engine
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn shared_items(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    /// Replaces the items and restarts observation against them.
    ///
    /// The selection stays an index: after a reorder the host pushes its selection again.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.replace_items(items);
        self.engine.items_replaced(self.items.len());
    }

    /// Swaps the items without notifying the engine.
    pub(crate) fn replace_items(&mut self, items: Vec<T>) {
        self.items = items.into();
    }

    pub fn style(&self) -> &SinglePickerStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SinglePickerStyle) {
        self.style = style;
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.items.get(index).map(|item| (self.label)(item))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.engine.selected_index()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index().and_then(|index| self.items.get(index))
    }

    pub fn set_selected_index(&mut self, selected: Option<usize>) {
        self.engine.set_selected_index(selected);
    }

    pub fn layout(&mut self, constraints: Constraints) {
        self.engine.layout(constraints);
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.engine.tick(now_ms)
    }

    /// Tapping a non-selected item scrolls it into the center slot.
    pub fn tap(&mut self, index: usize) -> bool {
        self.engine.tap(index)
    }

    /// View-models for the items currently inside the viewport.
    pub fn item_data(&self) -> Vec<PickerItemData> {
        let size = self.engine.geometry().item_size_dp();
        let selected = self.engine.selected_index();
        let text_offset_dp = self.style.text_offset_dp();
        self.engine
            .list()
            .visible_items()
            .filter_map(|index| {
                let item = self.items.get(index)?;
                Some(PickerItemData {
                    index,
                    label: (self.label)(item),
                    selected: selected == Some(index),
                    size,
                    text_offset_dp,
                })
            })
            .collect()
    }

    pub fn dispose(&mut self) {
        self.engine.dispose();
    }
}

impl<T: Display + 'static> Picker<T> {
    /// Creates a picker labelling items with their `Display` output.
    pub fn with_display_labels(
        items: Vec<T>,
        options: PickerOptions,
    ) -> Result<Self, ConfigError> {
        Self::new(items, options, |item: &T| item.to_string())
    }

    /// A vertical picker with default options.
    pub fn vertical(items: Vec<T>) -> Result<Self, ConfigError> {
        Self::with_display_labels(items, PickerOptions::vertical(0))
    }

    /// A horizontal picker with default options.
    pub fn horizontal(items: Vec<T>) -> Result<Self, ConfigError> {
        Self::with_display_labels(items, PickerOptions::horizontal(0))
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Picker<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("engine", &self.engine)
            .field("items", &self.items)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
