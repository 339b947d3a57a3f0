use scrollkit::{
    Axis, AxisScrollModel, InteractionState, MouseButton, Point, Rect, ScrollEvent, ScrollKey,
    ScrollPart, ScrollbarConfig,
};

fn plain_config() -> ScrollbarConfig {
    ScrollbarConfig::new().step_buttons(false)
}

/// Vertical bar, 15 thick, no buttons, track of `track` pixels.
fn vertical(content: i32, track: i32) -> AxisScrollModel {
    let mut model = AxisScrollModel::vertical(plain_config());
    model.update_length(content, None, track, 15);
    model.drain_events();
    model
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_update_length_geometry() {
    let mut model = AxisScrollModel::vertical(ScrollbarConfig::default());
    assert!(model.update_length(1000, None, 200, 100));

    assert_eq!(model.max_value(), 800);
    assert_eq!(model.viewport_length(), 200);
    assert!(model.has_step_buttons());

    assert_eq!(model.track_rect(), Rect::new(85, 0, 15, 200));
    assert_eq!(model.button_before_rect(), Some(Rect::new(85, 0, 15, 15)));
    assert_eq!(model.button_after_rect(), Some(Rect::new(85, 185, 15, 15)));
    // span 170, visible fraction 1/5
    assert_eq!(model.thumb_rect(), Rect::new(85, 15, 15, 34));
    assert_eq!(model.free_track_space(), 136);
}

#[test]
fn test_horizontal_geometry_hugs_bottom_edge() {
    let mut model = AxisScrollModel::horizontal(plain_config());
    model.set_origin(Point::new(4, 6));
    assert!(model.update_length(400, None, 100, 50));

    assert_eq!(model.track_rect(), Rect::new(4, 41, 100, 15));
    assert_eq!(model.thumb_rect(), Rect::new(4, 41, 25, 15));
    assert_eq!(model.button_before_rect(), None);
}

#[test]
fn test_max_value_and_value_range() {
    for content in [0, 1, 50, 99, 100, 101, 250, 5000] {
        for viewport in [0, 1, 10, 100, 300] {
            let mut model = AxisScrollModel::vertical(plain_config());
            model.update_length(content, Some(viewport), 300, 15);
            model.set_value(i32::MAX);

            assert_eq!(model.max_value(), (content - viewport).max(0));
            assert!(model.value() >= model.min_value());
            assert!(model.value() <= model.max_value());
        }
    }
}

#[test]
fn test_viewport_override() {
    let mut model = AxisScrollModel::vertical(plain_config());
    model.update_length(500, Some(120), 300, 15);
    assert_eq!(model.viewport_length(), 120);
    assert_eq!(model.max_value(), 380);
}

#[test]
fn test_content_fits_has_no_scrollbar() {
    let mut model = AxisScrollModel::vertical(plain_config());
    assert!(!model.update_length(100, None, 200, 15));
    assert_eq!(model.max_value(), 0);

    model.set_value(40);
    assert_eq!(model.value(), 0);
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_disabled_axis_stays_at_zero() {
    let mut model = AxisScrollModel::vertical(plain_config().disabled());
    assert!(!model.update_length(1000, None, 200, 15));
    assert_eq!(model.max_value(), 800);

    model.set_value(300);
    assert_eq!(model.value(), 0);
    assert!(!model.handle_key_down(ScrollKey::Down));
    model.handle_wheel(-120);
    assert_eq!(model.value(), 0);
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_negative_inputs_clamp_to_zero() {
    let mut model = AxisScrollModel::vertical(plain_config());
    assert!(!model.update_length(-50, None, -10, -3));
    assert_eq!(model.content_length(), 0);
    assert_eq!(model.track_length(), 0);
    assert_eq!(model.cross_length(), 0);
}

#[test]
fn test_update_length_is_idempotent() {
    let mut model = AxisScrollModel::vertical(ScrollbarConfig::default());
    model.update_length(1000, None, 200, 40);
    model.set_value(500);
    model.drain_events();

    let thumb = model.thumb_rect();
    let track = model.track_rect();

    model.update_length(1000, None, 200, 40);
    assert_eq!(model.thumb_rect(), thumb);
    assert_eq!(model.track_rect(), track);
    assert_eq!(model.value(), 500);
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_shrinking_content_clamps_value() {
    let mut model = vertical(1000, 200);
    model.set_value(800);
    model.drain_events();

    model.update_length(500, None, 200, 15);
    assert_eq!(model.value(), 300);
    assert_eq!(
        model.drain_events(),
        vec![ScrollEvent::ValueChanged {
            axis: Axis::Vertical,
            old: 800,
            new: 300
        }]
    );
}

#[test]
fn test_losing_scrollbar_resets_state() {
    let mut model = vertical(1000, 200);
    model.set_value(100);
    let thumb = model.thumb_rect();
    model.handle_pointer_down(Point::new(5, thumb.y + 1), MouseButton::Left);
    assert!(model.is_dragging());

    assert!(!model.update_length(150, None, 200, 15));
    assert_eq!(model.value(), 0);
    assert_eq!(model.state(), InteractionState::default());
}

// ============================================================================
// Step buttons
// ============================================================================

#[test]
fn test_step_buttons_need_room() {
    let mut model = AxisScrollModel::vertical(ScrollbarConfig::default());

    // track shorter than four buttons
    model.update_length(1000, None, 59, 15);
    assert!(!model.has_step_buttons());

    model.update_length(1000, None, 60, 15);
    assert!(model.has_step_buttons());

    // bar thinner than the minimum button thickness
    model.update_length(1000, None, 200, 8);
    assert!(!model.has_step_buttons());
}

#[test]
fn test_step_buttons_scroll_by_small_step() {
    let mut model = AxisScrollModel::vertical(ScrollbarConfig::default().small_step(25));
    model.update_length(1000, None, 200, 15);
    model.set_value(100);
    model.drain_events();

    model.handle_pointer_down(Point::new(5, 195), MouseButton::Left);
    assert_eq!(model.value(), 125);
    assert!(model.state().button_after_pressed);
    assert_eq!(model.pressed_part(), Some(ScrollPart::ButtonAfter));
    model.handle_pointer_up();

    model.handle_pointer_down(Point::new(5, 3), MouseButton::Left);
    assert_eq!(model.value(), 100);
    assert!(model.state().button_before_pressed);
    model.handle_pointer_up();
    assert_eq!(model.pressed_part(), None);
}

// ============================================================================
// Value
// ============================================================================

#[test]
fn test_set_value_clamps() {
    let mut model = vertical(1000, 200);
    model.set_value(-5);
    assert_eq!(model.value(), 0);
    model.set_value(10_000);
    assert_eq!(model.value(), 800);
    model.set_value(321);
    assert_eq!(model.value(), 321);
}

#[test]
fn test_set_value_notifies_once() {
    let mut model = vertical(1000, 200);
    model.set_value(100);
    assert_eq!(
        model.drain_events(),
        vec![
            ScrollEvent::ValueChanged {
                axis: Axis::Vertical,
                old: 0,
                new: 100
            },
            ScrollEvent::RedrawNeeded {
                axis: Axis::Vertical
            },
        ]
    );

    model.set_value(100);
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_value_percent() {
    let model = vertical(100, 200);
    assert_eq!(model.value_percent(), 0.0);

    let mut model = vertical(1003, 200);
    let max = model.max_value() as f64;
    for percent in [0.0, 0.1, 0.25, 1.0 / 3.0, 0.5, 0.77, 1.0] {
        model.set_value_percent(percent);
        assert!((model.value_percent() - percent).abs() <= 1.0 / max);
    }
}

#[test]
fn test_thumb_stays_inside_track() {
    for content in [0, 10, 199, 201, 400, 1000, 100_000] {
        for track in [0, 1, 14, 30, 59, 60, 200] {
            for cross in [0, 5, 15, 40] {
                let mut model = AxisScrollModel::vertical(ScrollbarConfig::default());
                model.update_length(content, None, track, cross);
                for percent in [0.0, 0.5, 1.0] {
                    model.set_value_percent(percent);
                    if model.has_scrollbar() {
                        assert!(
                            model.track_rect().contains_rect(&model.thumb_rect()),
                            "content {content} track {track} cross {cross}: {:?} not in {:?}",
                            model.thumb_rect(),
                            model.track_rect()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_thumb_minimum_length_is_thickness() {
    let model = vertical(1_000_000, 200);
    assert_eq!(model.thumb_rect().height, 15);
}

// ============================================================================
// Wheel and keys
// ============================================================================

#[test]
fn test_wheel_scrolls_half_a_viewport() {
    let mut model = vertical(300, 100);
    model.set_value(50);
    model.handle_wheel(120);
    assert_eq!(model.value(), 0);

    model.set_value(50);
    model.handle_wheel(-120);
    assert_eq!(model.value(), 100);

    let mut model = vertical(160, 100);
    model.set_value(50);
    model.handle_wheel(-120);
    assert_eq!(model.value(), 60);
}

#[test]
fn test_wheel_zero_delta_is_ignored() {
    let mut model = vertical(300, 100);
    model.set_value(50);
    model.drain_events();
    model.handle_wheel(0);
    assert_eq!(model.value(), 50);
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_vertical_keys() {
    let mut model = AxisScrollModel::vertical(plain_config().small_step(10).large_step(70));
    model.update_length(1000, None, 200, 15);
    model.set_value(5);

    assert!(model.handle_key_down(ScrollKey::Up));
    assert_eq!(model.value(), 0);

    assert!(!model.handle_key_down(ScrollKey::Left));
    assert_eq!(model.value(), 0);

    assert!(model.handle_key_down(ScrollKey::Down));
    assert_eq!(model.value(), 10);
    assert!(model.handle_key_down(ScrollKey::PageDown));
    assert_eq!(model.value(), 80);
    assert!(model.handle_key_down(ScrollKey::PageUp));
    assert_eq!(model.value(), 10);
    assert!(model.handle_key_down(ScrollKey::End));
    assert_eq!(model.value(), 800);
    assert!(model.handle_key_down(ScrollKey::Home));
    assert_eq!(model.value(), 0);
}

#[test]
fn test_horizontal_keys() {
    let mut model = AxisScrollModel::horizontal(plain_config());
    model.update_length(1000, None, 200, 15);

    // default small step is a tenth of the viewport
    assert!(model.handle_key_down(ScrollKey::Right));
    assert_eq!(model.value(), 20);
    assert!(model.handle_key_down(ScrollKey::Left));
    assert_eq!(model.value(), 0);

    assert!(!model.handle_key_down(ScrollKey::Up));
    assert!(!model.handle_key_down(ScrollKey::PageDown));
    assert!(!model.handle_key_down(ScrollKey::Home));
}

#[test]
fn test_default_steps() {
    let model = vertical(1000, 200);
    assert_eq!(model.small_step(), 20);
    assert_eq!(model.large_step(), 100);

    let model = vertical(1000, 5);
    assert_eq!(model.small_step(), 1);
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_thumb_drag() {
    // thumb 40 long over a 200 track: free space 160
    let mut model = vertical(1000, 200);
    assert_eq!(model.thumb_rect().height, 40);
    assert_eq!(model.free_track_space(), 160);

    model.handle_pointer_down(Point::new(5, 0), MouseButton::Left);
    assert!(model.state().thumb_pressed);

    model.handle_pointer_move(Point::new(5, 80));
    assert!((model.value_percent() - 0.5).abs() <= 1.0 / 800.0);
    assert_eq!(model.thumb_rect().y, 80);

    // dragging past the end clamps
    model.handle_pointer_move(Point::new(5, 400));
    assert_eq!(model.value(), 800);

    model.handle_pointer_up();
    assert!(!model.is_dragging());
    model.handle_pointer_move(Point::new(5, 0));
    assert_eq!(model.value(), 800);
}

#[test]
fn test_drag_keeps_grab_offset() {
    let mut model = vertical(1000, 200);
    model.handle_pointer_down(Point::new(5, 30), MouseButton::Left);
    model.handle_pointer_move(Point::new(5, 30));
    assert_eq!(model.value(), 0);

    model.handle_pointer_move(Point::new(5, 70));
    assert_eq!(model.value(), 200);
}

#[test]
fn test_page_click_moves_thumb_to_pointer() {
    let mut model = vertical(1000, 200);
    model.handle_pointer_down(Point::new(5, 120), MouseButton::Left);

    assert_eq!(model.value(), 600);
    assert_eq!(model.thumb_rect().y, 120);
    assert_eq!(model.pressed_part(), None);
}

#[test]
fn test_secondary_button_is_ignored() {
    let mut model = vertical(1000, 200);
    model.handle_pointer_down(Point::new(5, 120), MouseButton::Right);
    model.handle_pointer_down(Point::new(5, 10), MouseButton::Middle);
    assert_eq!(model.value(), 0);
    assert_eq!(model.pressed_part(), None);
}

#[test]
fn test_pointer_up_is_idempotent() {
    let mut model = vertical(1000, 200);
    model.handle_pointer_up();
    assert!(model.drain_events().is_empty());

    model.handle_pointer_down(Point::new(5, 10), MouseButton::Left);
    model.drain_events();
    model.handle_pointer_up();
    assert_eq!(
        model.drain_events(),
        vec![ScrollEvent::RedrawNeeded {
            axis: Axis::Vertical
        }]
    );
    model.handle_pointer_up();
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_hover_raises_redraw_only() {
    let mut model = vertical(1000, 200);

    model.handle_pointer_move(Point::new(5, 10));
    assert!(model.state().hovered);
    assert!(model.state().thumb_hovered);
    assert_eq!(model.hovered_part(), Some(ScrollPart::Thumb));
    assert_eq!(
        model.drain_events(),
        vec![ScrollEvent::RedrawNeeded {
            axis: Axis::Vertical
        }]
    );

    model.handle_pointer_move(Point::new(6, 11));
    assert!(model.drain_events().is_empty());

    model.handle_pointer_move(Point::new(5, 150));
    assert_eq!(model.hovered_part(), Some(ScrollPart::Track));
    assert!(!model.state().thumb_hovered);

    model.handle_pointer_move(Point::new(50, 150));
    assert_eq!(model.hovered_part(), None);
    assert_eq!(model.value(), 0);
}

#[test]
fn test_pointer_leave_clears_hover() {
    let mut model = vertical(1000, 200);
    model.handle_pointer_move(Point::new(5, 10));
    model.drain_events();

    model.handle_pointer_leave();
    assert!(!model.state().hovered);
    assert_eq!(model.drain_events().len(), 1);
}

#[test]
fn test_thumb_wins_over_buttons() {
    let mut model = AxisScrollModel::vertical(ScrollbarConfig::default().thumb_padding(2));
    model.update_length(1000, None, 200, 15);

    // before button spans 0..15, thumb starts at 15 and is inflated by 2
    assert_eq!(model.part_at(Point::new(5, 14)), Some(ScrollPart::Thumb));
    assert_eq!(model.part_at(Point::new(5, 12)), Some(ScrollPart::ButtonBefore));
    assert_eq!(model.part_at(Point::new(5, 190)), Some(ScrollPart::ButtonAfter));

    model.handle_pointer_move(Point::new(5, 14));
    assert!(model.state().thumb_hovered);
    assert!(!model.state().button_before_hovered);
}

// ============================================================================
// Extreme inputs
// ============================================================================

#[test]
fn test_huge_thickness_does_not_overflow() {
    let mut model = AxisScrollModel::vertical(ScrollbarConfig::new().cross_length(1 << 30));
    assert!(model.update_length(100, None, 50, 1 << 30));

    assert!(!model.has_step_buttons());
    assert_eq!(model.track_rect(), Rect::new(0, 0, 1 << 30, 50));
    assert_eq!(model.thumb_rect(), model.track_rect());
}

#[test]
fn test_huge_thumb_padding_does_not_overflow() {
    let mut model = AxisScrollModel::vertical(plain_config().thumb_padding(1 << 30));
    model.update_length(1000, None, 200, 15);

    // the padded thumb reaches far past the track on every side
    assert_eq!(
        model.part_at(Point::new(-(1 << 29), 1 << 29)),
        Some(ScrollPart::Thumb)
    );

    model.handle_pointer_down(Point::new(5, 100), MouseButton::Left);
    assert!(model.is_dragging());

    model.handle_pointer_move(Point::new(5, i32::MAX));
    assert_eq!(model.value(), 800);
    model.handle_pointer_move(Point::new(i32::MIN, i32::MIN));
    assert_eq!(model.value(), 0);
}

#[test]
fn test_ensure_range_visible_at_coordinate_limits() {
    let mut model = vertical(1000, 200);

    model.ensure_range_visible(i32::MAX - 5, 10);
    assert_eq!(model.value(), 800);

    model.ensure_range_visible(i32::MIN, i32::MAX);
    assert_eq!(model.value(), 0);
}

#[test]
fn test_thumb_position_with_huge_content() {
    let mut model = vertical(i32::MAX, 1 << 30);
    model.scroll_to_end();

    let track = model.track_rect();
    let thumb = model.thumb_rect();
    assert!(track.contains_rect(&thumb), "{thumb:?} not in {track:?}");
    assert_eq!(thumb.bottom(), track.bottom());
}
