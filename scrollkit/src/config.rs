//! Scrollbar configuration types.

/// Default scrollbar thickness in pixels.
pub const DEFAULT_CROSS_LENGTH: i32 = 15;

/// Default minimum bar thickness for step buttons to be drawn.
pub const DEFAULT_MIN_BUTTON_THICKNESS: i32 = 10;

/// Per-axis scrollbar configuration.
///
/// Changes take effect on the next layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbarConfig {
    /// Whether this axis may ever show a scrollbar.
    pub enabled: bool,

    /// Bar thickness perpendicular to the scroll axis.
    pub cross_length: i32,

    /// Extra hit-test margin around the thumb.
    pub thumb_padding: i32,

    /// Show step buttons at both ends of the track when there is room.
    pub step_buttons_enabled: bool,

    /// Bars thinner than this never get step buttons.
    pub min_button_thickness: i32,

    /// Arrow-key and step-button increment (None = viewport / 10).
    pub small_step: Option<i32>,

    /// Page increment (None = viewport / 2).
    pub large_step: Option<i32>,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cross_length: DEFAULT_CROSS_LENGTH,
            thumb_padding: 0,
            step_buttons_enabled: true,
            min_button_thickness: DEFAULT_MIN_BUTTON_THICKNESS,
            small_step: None,
            large_step: None,
        }
    }
}

impl ScrollbarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never show a scrollbar on this axis.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn cross_length(mut self, thickness: i32) -> Self {
        self.cross_length = thickness.max(0);
        self
    }

    pub fn thumb_padding(mut self, padding: i32) -> Self {
        self.thumb_padding = padding.max(0);
        self
    }

    pub fn step_buttons(mut self, enabled: bool) -> Self {
        self.step_buttons_enabled = enabled;
        self
    }

    pub fn min_button_thickness(mut self, thickness: i32) -> Self {
        self.min_button_thickness = thickness.max(0);
        self
    }

    pub fn small_step(mut self, step: i32) -> Self {
        self.small_step = Some(step.max(0));
        self
    }

    pub fn large_step(mut self, step: i32) -> Self {
        self.large_step = Some(step.max(0));
        self
    }
}

/// Configuration for a two-axis scroll region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionConfig {
    pub vertical: ScrollbarConfig,
    pub horizontal: ScrollbarConfig,
    /// Inset subtracted from every side of the widget before layout.
    pub border: i32,
}

impl RegionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical(mut self, config: ScrollbarConfig) -> Self {
        self.vertical = config;
        self
    }

    pub fn horizontal(mut self, config: ScrollbarConfig) -> Self {
        self.horizontal = config;
        self
    }

    pub fn border(mut self, inset: i32) -> Self {
        self.border = inset.max(0);
        self
    }

    /// Apply the same thickness to both axes.
    pub fn cross_length(mut self, thickness: i32) -> Self {
        self.vertical.cross_length = thickness.max(0);
        self.horizontal.cross_length = thickness.max(0);
        self
    }
}
