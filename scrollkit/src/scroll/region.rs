//! Two-axis scroll region: couples the axis models and routes input to them.

use log::{trace, warn};

use super::axis::AxisScrollModel;
use super::notify::ScrollEvent;
use crate::config::RegionConfig;
use crate::event::{MouseButton, ScrollKey};
use crate::layout::{Axis, Point, Rect, Size};

/// Upper bound on extra vertical/horizontal passes in [`ScrollRegionCoordinator::resize`].
///
/// Each axis only gains a bar when the other one appears, so the layout
/// normally settles after one extra pass. A bar as thick as the whole area
/// takes the other axis's viewport away and can flip visibility back and
/// forth. At the bound the vertical axis is laid out once more against the
/// final horizontal bar, so the bars never overlap; the horizontal track may
/// then stay shortened for a vertical bar that is no longer shown.
pub const MAX_RECONVERGE_PASSES: usize = 2;

/// Owns both axis models of a scrollable host widget.
///
/// The host reports its size and its content's natural size through
/// [`resize`](Self::resize), paints from the exposed geometry, forwards raw
/// input to the `route_*` methods and drains notifications afterwards.
#[derive(Debug)]
pub struct ScrollRegionCoordinator {
    vertical: AxisScrollModel,
    horizontal: AxisScrollModel,
    border: i32,

    widget_size: Size,
    content_size: Size,
    content_rect: Rect,
    leftover_rect: Option<Rect>,
}

impl Default for ScrollRegionCoordinator {
    fn default() -> Self {
        Self::new(RegionConfig::default())
    }
}

impl ScrollRegionCoordinator {
    pub fn new(config: RegionConfig) -> Self {
        Self {
            vertical: AxisScrollModel::vertical(config.vertical),
            horizontal: AxisScrollModel::horizontal(config.horizontal),
            border: config.border.max(0),
            widget_size: Size::default(),
            content_size: Size::default(),
            content_rect: Rect::default(),
            leftover_rect: None,
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Lay out both scrollbars for a host of `available` size showing content
    /// of `content` natural size.
    ///
    /// The vertical axis is laid out first against the horizontal bar's
    /// previous visibility, then the horizontal axis against the vertical
    /// result. If the horizontal visibility flipped, both passes run again.
    pub fn resize(&mut self, content: Size, available: Size) {
        self.widget_size = available;
        self.content_size = content;

        let border = self.border;
        let mut inner = Rect::from_size(available.width.max(0), available.height.max(0))
            .shrink(border, border, border, border);
        if inner.is_empty() {
            // Nothing can be shown; collapse both tracks so neither bar appears.
            inner.width = 0;
            inner.height = 0;
        }
        self.vertical.set_origin(inner.origin());
        self.horizontal.set_origin(inner.origin());

        let mut h_shown = self.horizontal.has_scrollbar();
        let mut v_shown = self.layout_axis(Axis::Vertical, content, inner, h_shown);
        let mut h_now = self.layout_axis(Axis::Horizontal, content, inner, v_shown);

        let mut passes = 0;
        while h_now != h_shown {
            if passes == MAX_RECONVERGE_PASSES {
                warn!(
                    "scroll layout did not settle after {} passes (content {:?}, available {:?})",
                    passes + 1,
                    content,
                    available
                );
                v_shown = self.layout_axis(Axis::Vertical, content, inner, h_now);
                break;
            }
            passes += 1;
            h_shown = h_now;
            v_shown = self.layout_axis(Axis::Vertical, content, inner, h_shown);
            h_now = self.layout_axis(Axis::Horizontal, content, inner, v_shown);
        }

        let v_thickness = if v_shown { self.vertical.cross_length() } else { 0 };
        let h_thickness = if h_now { self.horizontal.cross_length() } else { 0 };

        self.leftover_rect = (v_shown && h_now).then(|| {
            Rect::new(
                inner.right() - v_thickness,
                inner.bottom() - h_thickness,
                v_thickness,
                h_thickness,
            )
        });
        self.content_rect = Rect::new(
            inner.x,
            inner.y,
            (inner.width - v_thickness).max(0),
            (inner.height - h_thickness).max(0),
        );

        trace!(
            "resize {:?} in {:?}: content rect {:?}, bars v={} h={}, {} extra pass(es)",
            content,
            available,
            self.content_rect,
            v_shown,
            h_now,
            passes
        );
    }

    /// One layout pass for `axis`, giving up the other bar's thickness when
    /// that bar is shown.
    fn layout_axis(&mut self, axis: Axis, content: Size, inner: Rect, other_shown: bool) -> bool {
        let area = inner.size();
        let other = axis.other();
        let reserved = if other_shown {
            self.axis(other).thickness_for(other.cross_of(area))
        } else {
            0
        };
        self.axis_mut(axis).update_length(
            axis.length_of(content),
            None,
            axis.length_of(area) - reserved,
            axis.cross_of(area),
        )
    }

    /// Re-run layout with the last reported sizes.
    pub fn relayout(&mut self) {
        self.resize(self.content_size, self.widget_size);
    }

    /// Replace the configuration and lay out again.
    pub fn set_config(&mut self, config: RegionConfig) {
        self.vertical.set_config(config.vertical);
        self.horizontal.set_config(config.horizontal);
        self.border = config.border.max(0);
        self.relayout();
    }

    pub fn set_enabled(&mut self, axis: Axis, enabled: bool) {
        self.axis_mut(axis).set_enabled(enabled);
        self.relayout();
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Current scroll offset: how far the host shifts its content.
    pub fn offset(&self) -> Point {
        Point::new(self.horizontal.value(), self.vertical.value())
    }

    pub fn set_value(&mut self, axis: Axis, value: i32) {
        self.axis_mut(axis).set_value(value);
    }

    pub fn set_value_percent(&mut self, axis: Axis, percent: f64) {
        self.axis_mut(axis).set_value_percent(percent);
    }

    /// The part of the content, in content coordinates, that is in view.
    pub fn visible_content(&self) -> Rect {
        let offset = self.offset();
        Rect::new(
            offset.x,
            offset.y,
            self.content_rect.width.min(self.content_size.width.max(0)),
            self.content_rect.height.min(self.content_size.height.max(0)),
        )
    }

    /// Scroll the least amount that shows `target` (content coordinates).
    pub fn ensure_visible(&mut self, target: Rect) {
        self.horizontal.ensure_range_visible(target.x, target.width);
        self.vertical.ensure_range_visible(target.y, target.height);
    }

    // -------------------------------------------------------------------------
    // Input routing
    // -------------------------------------------------------------------------

    /// Pointer events go to both axes; each ignores points outside its bar.
    pub fn route_pointer_move(&mut self, position: Point) {
        self.vertical.handle_pointer_move(position);
        self.horizontal.handle_pointer_move(position);
    }

    pub fn route_pointer_down(&mut self, position: Point, button: MouseButton) {
        self.vertical.handle_pointer_down(position, button);
        self.horizontal.handle_pointer_down(position, button);
    }

    pub fn route_pointer_up(&mut self) {
        self.vertical.handle_pointer_up();
        self.horizontal.handle_pointer_up();
    }

    pub fn route_pointer_leave(&mut self) {
        self.vertical.handle_pointer_leave();
        self.horizontal.handle_pointer_leave();
    }

    /// Wheel over the horizontal bar scrolls horizontally, anywhere else
    /// vertically. Content that only scrolls sideways takes the wheel too.
    pub fn route_mouse_wheel(&mut self, position: Point, delta: i32) {
        let over_horizontal =
            self.horizontal.has_scrollbar() && self.horizontal.track_rect().contains(position);
        let axis = if over_horizontal || !self.vertical.has_scrollbar() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        trace!("wheel {} at {:?} -> {}", delta, position, axis);
        self.axis_mut(axis).handle_wheel(delta);
    }

    /// Horizontal first, then vertical. Returns whether either axis used the key.
    pub fn route_key_down(&mut self, key: ScrollKey) -> bool {
        self.horizontal.handle_key_down(key) || self.vertical.handle_key_down(key)
    }

    /// Collect queued notifications, vertical axis first.
    pub fn drain_events(&mut self) -> Vec<ScrollEvent> {
        let mut events = self.vertical.drain_events();
        events.extend(self.horizontal.drain_events());
        events
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn vertical(&self) -> &AxisScrollModel {
        &self.vertical
    }

    pub fn horizontal(&self) -> &AxisScrollModel {
        &self.horizontal
    }

    pub fn axis(&self, axis: Axis) -> &AxisScrollModel {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisScrollModel {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    pub fn widget_size(&self) -> Size {
        self.widget_size
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Area left for content once borders and visible bars are removed.
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    pub fn both_scrollbars_active(&self) -> bool {
        self.leftover_rect.is_some()
    }

    /// Inert corner square between the two bars, present only when both show.
    pub fn leftover_rect(&self) -> Option<Rect> {
        self.leftover_rect
    }

    pub fn border(&self) -> i32 {
        self.border
    }
}
