//! Single-axis scrollbar model: geometry plus the hover/press/drag state machine.

use log::{debug, trace};

use super::notify::{EventQueue, ScrollEvent};
use crate::config::ScrollbarConfig;
use crate::event::{MouseButton, ScrollKey};
use crate::layout::{Axis, Point, Rect};

/// A hit-testable part of a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollPart {
    Thumb,
    ButtonBefore,
    ButtonAfter,
    /// Bar background between the buttons, outside the thumb.
    Track,
}

/// Hover and press flags. At most one part is pressed at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub thumb_hovered: bool,
    pub thumb_pressed: bool,
    pub button_before_hovered: bool,
    pub button_before_pressed: bool,
    pub button_after_hovered: bool,
    pub button_after_pressed: bool,
}

impl InteractionState {
    fn clear_pressed(&mut self) {
        self.thumb_pressed = false;
        self.button_before_pressed = false;
        self.button_after_pressed = false;
    }

    fn clear_hovered(&mut self) {
        self.hovered = false;
        self.thumb_hovered = false;
        self.button_before_hovered = false;
        self.button_after_hovered = false;
    }
}

/// Scroll state for one axis.
///
/// Geometry is recomputed by [`update_length`](Self::update_length) and is a
/// pure function of its inputs and the current value. Notifications are
/// queued and collected with [`drain_events`](Self::drain_events).
#[derive(Debug)]
pub struct AxisScrollModel {
    axis: Axis,
    config: ScrollbarConfig,

    /// Top-left corner of the area the bar is laid out in.
    origin: Point,
    content_length: i32,
    viewport_length: i32,
    track_length: i32,
    /// Extent of the host area perpendicular to the axis.
    cross_extent: i32,

    max_value: i32,
    value: i32,

    has_scrollbar: bool,
    has_step_buttons: bool,

    track_rect: Rect,
    button_before_rect: Rect,
    button_after_rect: Rect,
    thumb_rect: Rect,

    state: InteractionState,
    /// Distance from the thumb origin to the pointer when the drag started.
    drag_anchor: i32,

    events: EventQueue,
}

impl AxisScrollModel {
    pub fn new(axis: Axis, config: ScrollbarConfig) -> Self {
        Self {
            axis,
            config,
            origin: Point::default(),
            content_length: 0,
            viewport_length: 0,
            track_length: 0,
            cross_extent: 0,
            max_value: 0,
            value: 0,
            has_scrollbar: false,
            has_step_buttons: false,
            track_rect: Rect::default(),
            button_before_rect: Rect::default(),
            button_after_rect: Rect::default(),
            thumb_rect: Rect::default(),
            state: InteractionState::default(),
            drag_anchor: 0,
            events: EventQueue::new(),
        }
    }

    pub fn vertical(config: ScrollbarConfig) -> Self {
        Self::new(Axis::Vertical, config)
    }

    pub fn horizontal(config: ScrollbarConfig) -> Self {
        Self::new(Axis::Horizontal, config)
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Recompute the scroll range and all geometry. Returns whether the bar
    /// is shown.
    ///
    /// `viewport_override` defaults to `track_length`. `cross_extent` is the
    /// host's size perpendicular to the axis; the bar hugs its far edge.
    pub fn update_length(
        &mut self,
        content_length: i32,
        viewport_override: Option<i32>,
        track_length: i32,
        cross_extent: i32,
    ) -> bool {
        self.content_length = content_length.max(0);
        self.track_length = track_length.max(0);
        self.cross_extent = cross_extent.max(0);
        self.viewport_length = viewport_override.unwrap_or(self.track_length).max(0);
        self.max_value = (self.content_length - self.viewport_length).max(0);

        let was_shown = self.has_scrollbar;
        self.has_scrollbar = self.config.enabled && self.max_value > 0 && self.viewport_length > 0;

        let thickness = self.thickness();
        self.has_step_buttons = self.config.step_buttons_enabled
            && thickness > 0
            && thickness >= self.config.min_button_thickness
            && self.track_length >= thickness.saturating_mul(4);

        if was_shown != self.has_scrollbar {
            debug!(
                "{} scrollbar {} (content {}, viewport {})",
                self.axis,
                if self.has_scrollbar { "shown" } else { "hidden" },
                self.content_length,
                self.viewport_length
            );
        }

        if !self.has_scrollbar {
            self.value = 0;
            self.state = InteractionState::default();
            self.drag_anchor = 0;
        } else if self.value > self.max_value {
            let old = self.value;
            self.value = self.max_value;
            self.events.push(ScrollEvent::ValueChanged {
                axis: self.axis,
                old,
                new: self.value,
            });
        }

        self.layout_track();
        self.layout_thumb();

        trace!(
            "{} layout: track {:?}, thumb {:?}, value {}/{}",
            self.axis,
            self.track_rect,
            self.thumb_rect,
            self.value,
            self.max_value
        );

        self.has_scrollbar
    }

    /// Move the layout origin. Takes effect on the next `update_length`.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Bar thickness the model would use for a given perpendicular extent.
    pub fn thickness_for(&self, cross_extent: i32) -> i32 {
        self.config.cross_length.min(cross_extent).max(0)
    }

    fn thickness(&self) -> i32 {
        self.thickness_for(self.cross_extent)
    }

    fn button_length(&self) -> i32 {
        if self.has_step_buttons {
            self.thickness()
        } else {
            0
        }
    }

    /// Along-axis coordinate where the thumb's travel starts.
    fn travel_start(&self) -> i32 {
        self.axis.along(self.origin).saturating_add(self.button_length())
    }

    /// Track length between the step buttons.
    fn thumb_span(&self) -> i32 {
        self.track_length
            .saturating_sub(self.button_length().saturating_mul(2))
            .max(0)
    }

    /// Cross-axis coordinate of the bar: flush with the far edge of the host.
    fn bar_cross(&self, thickness: i32) -> i32 {
        self.axis
            .other()
            .along(self.origin)
            .saturating_add(self.cross_extent)
            .saturating_sub(thickness)
    }

    fn layout_track(&mut self) {
        let thickness = self.thickness();
        let along = self.axis.along(self.origin);
        let cross = self.bar_cross(thickness);
        let button = self.button_length();
        let after = along.saturating_add(self.track_length).saturating_sub(button);

        self.track_rect = self.axis.rect(along, cross, self.track_length, thickness);
        self.button_before_rect = self.axis.rect(along, cross, button, thickness);
        self.button_after_rect = self.axis.rect(after, cross, button, thickness);
    }

    fn layout_thumb(&mut self) {
        let thickness = self.thickness();
        let span = self.thumb_span();
        let length = self.thumb_length(span, thickness);

        let free = span - length;
        let offset = if self.max_value > 0 && free > 0 {
            let scaled = (self.value as i128 * free as i128 * 2 + self.max_value as i128)
                / (self.max_value as i128 * 2);
            scaled.clamp(0, free as i128) as i32
        } else {
            0
        };

        let cross = self.bar_cross(thickness);
        self.thumb_rect = self.axis.rect(
            self.travel_start().saturating_add(offset),
            cross,
            length,
            thickness,
        );
    }

    /// Thumb length: proportional to the visible fraction, at least as long
    /// as the bar is thick, never longer than the span.
    fn thumb_length(&self, span: i32, thickness: i32) -> i32 {
        if self.content_length == 0 {
            return span;
        }
        let proportional =
            (span as i64 * self.viewport_length as i64 / self.content_length as i64) as i32;
        proportional.max(thickness).min(span)
    }

    /// Track length minus thumb and buttons: the range the thumb origin moves over.
    pub fn free_track_space(&self) -> i32 {
        let span = self.thumb_span();
        span - self.thumb_length(span, self.thickness())
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the scroll value, clamped to `[min_value, max_value]`. An axis
    /// without a scrollbar stays at zero and raises nothing.
    pub fn set_value(&mut self, value: i32) {
        let target = if self.has_scrollbar {
            value.clamp(self.min_value(), self.max_value)
        } else {
            0
        };
        if target == self.value {
            return;
        }

        let old = self.value;
        self.value = target;
        self.layout_thumb();

        if self.has_scrollbar {
            self.events.push(ScrollEvent::ValueChanged {
                axis: self.axis,
                old,
                new: target,
            });
            self.events.push(ScrollEvent::RedrawNeeded { axis: self.axis });
        }
    }

    /// Value as a fraction of `max_value`; 0 when there is nothing to scroll.
    pub fn value_percent(&self) -> f64 {
        if self.max_value == 0 {
            0.0
        } else {
            self.value as f64 / self.max_value as f64
        }
    }

    pub fn set_value_percent(&mut self, percent: f64) {
        let value = (percent * self.max_value as f64).round() as i32;
        self.set_value(value);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.set_value(self.value.saturating_add(delta));
    }

    pub fn scroll_to_start(&mut self) {
        self.set_value(self.min_value());
    }

    pub fn scroll_to_end(&mut self) {
        self.set_value(self.max_value);
    }

    /// Scroll the least amount that brings `[start, start + length)` into view.
    /// A range longer than the viewport is aligned to its start.
    pub fn ensure_range_visible(&mut self, start: i32, length: i32) {
        let end = start.saturating_add(length.max(0));
        if start < self.value || length > self.viewport_length {
            self.set_value(start);
        } else if end > self.value.saturating_add(self.viewport_length) {
            self.set_value(end.saturating_sub(self.viewport_length));
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Update hover flags and, while the thumb is held, drag the value.
    pub fn handle_pointer_move(&mut self, position: Point) {
        if !self.has_scrollbar {
            return;
        }
        let before = self.state;

        if self.state.thumb_pressed {
            let free = self.free_track_space();
            if free > 0 {
                let along = self
                    .axis
                    .along(position)
                    .saturating_sub(self.drag_anchor)
                    .saturating_sub(self.travel_start());
                let percent = (along as f64 / free as f64).clamp(0.0, 1.0);
                self.set_value_percent(percent);
            }
        }

        self.update_hover(position);
        self.redraw_if_changed(before);
    }

    pub fn handle_pointer_down(&mut self, position: Point, button: MouseButton) {
        if !self.has_scrollbar || !button.is_primary() {
            return;
        }
        let before = self.state;

        match self.part_at(position) {
            Some(ScrollPart::Thumb) => {
                self.state.thumb_pressed = true;
                self.drag_anchor = self
                    .axis
                    .along(position)
                    .saturating_sub(self.axis.along(self.thumb_rect.origin()));
                debug!("{} thumb drag start, anchor {}", self.axis, self.drag_anchor);
            }
            Some(ScrollPart::ButtonBefore) => {
                self.state.button_before_pressed = true;
                self.scroll_by(-self.small_step());
            }
            Some(ScrollPart::ButtonAfter) => {
                self.state.button_after_pressed = true;
                self.scroll_by(self.small_step());
            }
            Some(ScrollPart::Track) => {
                // Page click: move the thumb origin under the pointer.
                let free = self.free_track_space();
                if free > 0 {
                    let along = self.axis.along(position).saturating_sub(self.travel_start());
                    self.set_value_percent((along as f64 / free as f64).clamp(0.0, 1.0));
                }
            }
            None => {}
        }

        self.update_hover(position);
        self.redraw_if_changed(before);
    }

    /// Release every pressed part. Safe to call repeatedly.
    pub fn handle_pointer_up(&mut self) {
        let before = self.state;
        if self.state.thumb_pressed {
            debug!("{} thumb drag end at value {}", self.axis, self.value);
        }
        self.state.clear_pressed();
        self.drag_anchor = 0;
        self.redraw_if_changed(before);
    }

    /// The pointer left the host; hover flags are cleared, presses are kept.
    pub fn handle_pointer_leave(&mut self) {
        let before = self.state;
        self.state.clear_hovered();
        self.redraw_if_changed(before);
    }

    /// Positive deltas scroll toward the start by half a viewport.
    pub fn handle_wheel(&mut self, delta: i32) {
        if !self.has_scrollbar || delta == 0 {
            return;
        }
        let step = self.viewport_length / 2;
        self.scroll_by(-delta.signum() * step);
    }

    /// Returns whether the key belongs to this axis.
    pub fn handle_key_down(&mut self, key: ScrollKey) -> bool {
        if !self.has_scrollbar {
            return false;
        }
        match (self.axis, key) {
            (Axis::Vertical, ScrollKey::Up) => self.scroll_by(-self.small_step()),
            (Axis::Vertical, ScrollKey::Down) => self.scroll_by(self.small_step()),
            (Axis::Vertical, ScrollKey::PageUp) => self.scroll_by(-self.large_step()),
            (Axis::Vertical, ScrollKey::PageDown) => self.scroll_by(self.large_step()),
            (Axis::Vertical, ScrollKey::Home) => self.scroll_to_start(),
            (Axis::Vertical, ScrollKey::End) => self.scroll_to_end(),
            (Axis::Horizontal, ScrollKey::Left) => self.scroll_by(-self.small_step()),
            (Axis::Horizontal, ScrollKey::Right) => self.scroll_by(self.small_step()),
            _ => return false,
        }
        true
    }

    /// Which part of the bar is under `position`, thumb first.
    pub fn part_at(&self, position: Point) -> Option<ScrollPart> {
        if !self.has_scrollbar {
            return None;
        }
        if self.thumb_rect.inflate(self.config.thumb_padding).contains(position) {
            Some(ScrollPart::Thumb)
        } else if self.has_step_buttons && self.button_before_rect.contains(position) {
            Some(ScrollPart::ButtonBefore)
        } else if self.has_step_buttons && self.button_after_rect.contains(position) {
            Some(ScrollPart::ButtonAfter)
        } else if self.track_rect.contains(position) {
            Some(ScrollPart::Track)
        } else {
            None
        }
    }

    fn update_hover(&mut self, position: Point) {
        let part = self.part_at(position);
        self.state.hovered = part.is_some();
        self.state.thumb_hovered = part == Some(ScrollPart::Thumb);
        self.state.button_before_hovered = part == Some(ScrollPart::ButtonBefore);
        self.state.button_after_hovered = part == Some(ScrollPart::ButtonAfter);
    }

    fn redraw_if_changed(&mut self, before: InteractionState) {
        if self.state != before {
            self.events.push(ScrollEvent::RedrawNeeded { axis: self.axis });
        }
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    pub fn drain_events(&mut self) -> Vec<ScrollEvent> {
        self.events.drain().collect()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn content_length(&self) -> i32 {
        self.content_length
    }

    pub fn viewport_length(&self) -> i32 {
        self.viewport_length
    }

    pub fn track_length(&self) -> i32 {
        self.track_length
    }

    /// Thickness of the bar as laid out.
    pub fn cross_length(&self) -> i32 {
        self.thickness()
    }

    pub const fn min_value(&self) -> i32 {
        0
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn small_step(&self) -> i32 {
        self.config
            .small_step
            .unwrap_or(self.viewport_length / 10)
            .max(1)
    }

    pub fn large_step(&self) -> i32 {
        self.config
            .large_step
            .unwrap_or(self.viewport_length / 2)
            .max(1)
    }

    pub fn has_scrollbar(&self) -> bool {
        self.has_scrollbar
    }

    pub fn has_step_buttons(&self) -> bool {
        self.has_step_buttons
    }

    pub fn track_rect(&self) -> Rect {
        self.track_rect
    }

    pub fn thumb_rect(&self) -> Rect {
        self.thumb_rect
    }

    pub fn button_before_rect(&self) -> Option<Rect> {
        self.has_step_buttons.then_some(self.button_before_rect)
    }

    pub fn button_after_rect(&self) -> Option<Rect> {
        self.has_step_buttons.then_some(self.button_after_rect)
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.thumb_pressed
    }

    pub fn hovered_part(&self) -> Option<ScrollPart> {
        let state = &self.state;
        if state.thumb_hovered {
            Some(ScrollPart::Thumb)
        } else if state.button_before_hovered {
            Some(ScrollPart::ButtonBefore)
        } else if state.button_after_hovered {
            Some(ScrollPart::ButtonAfter)
        } else if state.hovered {
            Some(ScrollPart::Track)
        } else {
            None
        }
    }

    pub fn pressed_part(&self) -> Option<ScrollPart> {
        if self.state.thumb_pressed {
            Some(ScrollPart::Thumb)
        } else if self.state.button_before_pressed {
            Some(ScrollPart::ButtonBefore)
        } else if self.state.button_after_pressed {
            Some(ScrollPart::ButtonAfter)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Configuration (applied on the next layout pass)
    // -------------------------------------------------------------------------

    pub fn set_config(&mut self, config: ScrollbarConfig) {
        self.config = config;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn set_cross_length(&mut self, thickness: i32) {
        self.config.cross_length = thickness.max(0);
    }

    pub fn set_thumb_padding(&mut self, padding: i32) {
        self.config.thumb_padding = padding.max(0);
    }

    pub fn set_step_buttons_enabled(&mut self, enabled: bool) {
        self.config.step_buttons_enabled = enabled;
    }

    pub fn set_small_step(&mut self, step: Option<i32>) {
        self.config.small_step = step.map(|s| s.max(0));
    }

    pub fn set_large_step(&mut self, step: Option<i32>) {
        self.config.large_step = step.map(|s| s.max(0));
    }
}
