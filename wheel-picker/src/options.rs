use alloc::sync::Arc;

use crate::{
    ConfigError, DEFAULT_VISIBLE_COUNT, Easing, FlingConfig, Orientation, SCROLL_DURATION_MS,
};

/// Called with the newly selected index after a user-driven scroll or tap.
pub type OnSelectCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Called with `true` when a host-requested scroll starts and `false` when it ends.
pub type OnExternalScrollCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Configuration for [`crate::PickerEngine`].
///
/// Cheap to clone: callbacks live behind `Arc`s so hosts can rebuild options every render.
#[derive(Clone)]
pub struct PickerOptions {
    pub count: usize,
    pub orientation: Orientation,
    /// Number of simultaneously visible slots. Must be odd.
    pub visible_count: usize,

    pub scroll_duration_ms: u64,
    pub easing: Easing,
    pub fling: FlingConfig,

    /// Physical pixels per density-independent pixel.
    pub density: f32,

    pub on_select: Option<OnSelectCallback>,
    pub on_external_scroll: Option<OnExternalScrollCallback>,
}

impl PickerOptions {
    pub fn new(count: usize, orientation: Orientation) -> Self {
        Self {
            count,
            orientation,
            visible_count: DEFAULT_VISIBLE_COUNT,
            scroll_duration_ms: SCROLL_DURATION_MS,
            easing: Easing::LinearOutSlowIn,
            fling: FlingConfig::default(),
            density: 1.0,
            on_select: None,
            on_external_scroll: None,
        }
    }

    pub fn vertical(count: usize) -> Self {
        Self::new(count, Orientation::Vertical)
    }

    pub fn horizontal(count: usize) -> Self {
        Self::new(count, Orientation::Horizontal)
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = fling;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_on_select(mut self, on_select: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(on_select));
        self
    }

    pub fn with_on_external_scroll(
        mut self,
        on_external_scroll: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        self.on_external_scroll = Some(Arc::new(on_external_scroll));
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_count % 2 != 1 {
            return Err(ConfigError::VisibleCountNotOdd(self.visible_count));
        }
        Ok(())
    }
}

impl core::fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickerOptions")
            .field("count", &self.count)
            .field("orientation", &self.orientation)
            .field("visible_count", &self.visible_count)
            .field("scroll_duration_ms", &self.scroll_duration_ms)
            .field("easing", &self.easing)
            .field("fling", &self.fling)
            .field("density", &self.density)
            .finish_non_exhaustive()
    }
}
