use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Display;

use wheel_picker::{ConfigError, Constraints, Orientation, PickerOptions};

use crate::{DoublePickerStyle, Palette, Part, Picker, SinglePickerStyle, defaults};

/// Two independent pickers sharing one visual frame.
///
/// Vertical double pickers sit side by side and split the available width in two equal halves;
/// horizontal ones are stacked and split the height. Each half runs its own engine; they only
/// share orientation, visible count and style.
pub struct DoublePicker<TL, TR> {
    orientation: Orientation,
    first: Picker<TL>,
    second: Picker<TR>,
    style: DoublePickerStyle,
}

impl<TL: Display + 'static, TR: Display + 'static> DoublePicker<TL, TR> {
    /// Builds both halves from the same option template.
    ///
    /// Callbacks in `options` are dropped; set them per half with
    /// [`DoublePicker::with_on_first_select`] / [`DoublePicker::with_on_second_select`].
    pub fn new(
        first: Vec<TL>,
        second: Vec<TR>,
        options: PickerOptions,
    ) -> Result<Self, ConfigError> {
        let orientation = options.orientation;
        let template = PickerOptions {
            on_select: None,
            on_external_scroll: None,
            ..options
        };
        let first = Picker::with_display_labels(first, template.clone())?;
        let second = Picker::with_display_labels(second, template)?;

        let mut picker = Self {
            orientation,
            first,
            second,
            style: defaults::double_picker_style(&Palette::default(), orientation),
        };
        picker.set_style(picker.style);
        Ok(picker)
    }

    /// Side-by-side vertical pickers with default options.
    pub fn vertical(first: Vec<TL>, second: Vec<TR>) -> Result<Self, ConfigError> {
        Self::new(first, second, PickerOptions::vertical(0))
    }

    /// Stacked horizontal pickers with default options.
    pub fn horizontal(first: Vec<TL>, second: Vec<TR>) -> Result<Self, ConfigError> {
        Self::new(first, second, PickerOptions::horizontal(0))
    }
}

impl<TL, TR> DoublePicker<TL, TR> {
    pub fn with_style(mut self, style: DoublePickerStyle) -> Self {
        self.set_style(style);
        self
    }

    pub fn with_on_first_select(
        mut self,
        on_select: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        self.first
            .engine_mut()
            .set_on_select(Some(Arc::new(on_select)));
        self
    }

    pub fn with_on_second_select(
        mut self,
        on_select: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        self.second
            .engine_mut()
            .set_on_select(Some(Arc::new(on_select)));
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn style(&self) -> &DoublePickerStyle {
        &self.style
    }

    /// Restyles both halves, mirroring the text offset.
    pub fn set_style(&mut self, style: DoublePickerStyle) {
        self.style = style;
        self.first.set_style(style.as_single(Part::First));
        self.second.set_style(style.as_single(Part::Second));
    }

    pub fn part_style(&self, part: Part) -> SinglePickerStyle {
        self.style.as_single(part)
    }

    pub fn first(&self) -> &Picker<TL> {
        &self.first
    }

    pub fn first_mut(&mut self) -> &mut Picker<TL> {
        &mut self.first
    }

    pub fn second(&self) -> &Picker<TR> {
        &self.second
    }

    pub fn second_mut(&mut self) -> &mut Picker<TR> {
        &mut self.second
    }

    /// Constraints offered to each half.
    pub fn part_constraints(&self, constraints: Constraints) -> Constraints {
        match self.orientation {
            Orientation::Vertical => Constraints {
                max_width: constraints.max_width.split(2),
                ..constraints
            },
            Orientation::Horizontal => Constraints {
                max_height: constraints.max_height.split(2),
                ..constraints
            },
        }
    }

    pub fn layout(&mut self, constraints: Constraints) {
        let part = self.part_constraints(constraints);
        self.first.layout(part);
        self.second.layout(part);
    }

    pub fn set_selected_indices(&mut self, first: Option<usize>, second: Option<usize>) {
        self.first.set_selected_index(first);
        self.second.set_selected_index(second);
    }

    /// Advances both halves. Returns `true` while either is animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let first = self.first.tick(now_ms);
        let second = self.second.tick(now_ms);
        first || second
    }

    pub fn dispose(&mut self) {
        self.first.dispose();
        self.second.dispose();
    }
}

impl<TL: core::fmt::Debug, TR: core::fmt::Debug> core::fmt::Debug for DoublePicker<TL, TR> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DoublePicker")
            .field("orientation", &self.orientation)
            .field("first", &self.first)
            .field("second", &self.second)
            .field("style", &self.style)
            .finish()
    }
}
