//! Turns scroll geometry into cells. The scroll engine itself never draws.

use scrollkit::{Axis, AxisScrollModel, Point, Rect};

use crate::buffer::{Buffer, Cell};
use crate::theme::Theme;
use crate::view::TextView;

const TRACK: char = '░';
const THUMB: char = '█';

/// Paint the whole widget: border, visible text, scrollbars and the corner.
pub fn paint_view(buffer: &mut Buffer, view: &TextView, theme: &Theme) {
    let bounds = view.bounds();
    let region = view.region();
    let origin = bounds.origin();

    if region.border() > 0 {
        paint_border(buffer, bounds, theme);
    }

    let content = translate(region.content_rect(), origin);
    let offset = region.offset();
    for row in 0..content.height {
        let Some(line) = view.lines().get((offset.y + row) as usize) else {
            break;
        };
        let visible: String = line.chars().skip(offset.x as usize).collect();
        buffer.put_str(
            content.x,
            content.y + row,
            content.right(),
            &visible,
            theme.text,
            theme.background,
        );
    }

    paint_scrollbar(buffer, region.vertical(), origin, theme);
    paint_scrollbar(buffer, region.horizontal(), origin, theme);

    if let Some(corner) = region.leftover_rect() {
        buffer.fill(
            translate(corner, origin),
            Cell::new(' ', theme.background, theme.background),
        );
    }
}

/// Paint one bar from its model's geometry and interaction state.
pub fn paint_scrollbar(buffer: &mut Buffer, model: &AxisScrollModel, origin: Point, theme: &Theme) {
    if !model.has_scrollbar() {
        return;
    }
    let state = model.state();

    let track_color = if state.hovered {
        theme.track_hover
    } else {
        theme.track
    };
    buffer.fill(
        translate(model.track_rect(), origin),
        Cell::new(TRACK, theme.muted, track_color),
    );

    let (before, after) = match model.axis() {
        Axis::Vertical => ('▲', '▼'),
        Axis::Horizontal => ('◀', '▶'),
    };
    if let Some(rect) = model.button_before_rect() {
        let bg = if state.button_before_pressed {
            theme.button_pressed
        } else {
            theme.button
        };
        buffer.fill(translate(rect, origin), Cell::new(before, theme.text, bg));
    }
    if let Some(rect) = model.button_after_rect() {
        let bg = if state.button_after_pressed {
            theme.button_pressed
        } else {
            theme.button
        };
        buffer.fill(translate(rect, origin), Cell::new(after, theme.text, bg));
    }

    let thumb_color = if state.thumb_pressed {
        theme.thumb_pressed
    } else if state.thumb_hovered {
        theme.thumb_hover
    } else {
        theme.thumb
    };
    buffer.fill(
        translate(model.thumb_rect(), origin),
        Cell::new(THUMB, thumb_color, track_color),
    );
}

fn paint_border(buffer: &mut Buffer, bounds: Rect, theme: &Theme) {
    if bounds.width < 2 || bounds.height < 2 {
        return;
    }
    let cell = |ch| Cell::new(ch, theme.border, theme.background);
    let (left, top) = (bounds.left(), bounds.top());
    let (right, bottom) = (bounds.right() - 1, bounds.bottom() - 1);

    for x in left + 1..right {
        buffer.set(x, top, cell('─'));
        buffer.set(x, bottom, cell('─'));
    }
    for y in top + 1..bottom {
        buffer.set(left, y, cell('│'));
        buffer.set(right, y, cell('│'));
    }
    buffer.set(left, top, cell('┌'));
    buffer.set(right, top, cell('┐'));
    buffer.set(left, bottom, cell('└'));
    buffer.set(right, bottom, cell('┘'));
}

/// Widget-local rectangle to screen cells.
fn translate(rect: Rect, origin: Point) -> Rect {
    Rect::new(rect.x + origin.x, rect.y + origin.y, rect.width, rect.height)
}
