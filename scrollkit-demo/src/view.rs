//! A scrollable text document: the host control that owns a scroll region.

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};
use log::debug;
use scrollkit::{
    Point, Rect, RegionConfig, ScrollEvent, ScrollKey, ScrollRegionCoordinator, ScrollbarConfig,
    Size,
};

/// Region settings for a terminal: one cell thick bars inside a one cell border.
pub fn terminal_region_config() -> RegionConfig {
    let bar = ScrollbarConfig::new()
        .cross_length(1)
        .min_button_thickness(1)
        .small_step(1);
    RegionConfig::new()
        .vertical(bar.clone())
        .horizontal(bar.small_step(4))
        .border(1)
}

pub struct TextView {
    lines: Vec<String>,
    /// Widget rectangle in screen cells.
    bounds: Rect,
    region: ScrollRegionCoordinator,
}

impl TextView {
    pub fn new(lines: Vec<String>, config: RegionConfig) -> Self {
        Self {
            lines,
            bounds: Rect::default(),
            region: ScrollRegionCoordinator::new(config),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn region(&self) -> &ScrollRegionCoordinator {
        &self.region
    }

    /// Natural size of the document: widest line by line count.
    pub fn content_size(&self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Size::new(width as i32, self.lines.len() as i32)
    }

    /// Place the widget on screen and lay out its scrollbars.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let content = self.content_size();
        self.region.resize(content, bounds.size());
    }

    fn to_local(&self, column: u16, row: u16) -> Point {
        Point::new(column as i32 - self.bounds.x, row as i32 - self.bounds.y)
    }

    /// Feed a terminal event to the scroll region. Returns whether it was used.
    pub fn handle_event(&mut self, event: &CrosstermEvent) -> bool {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                match ScrollKey::from_key_code(key.code) {
                    Some(scroll_key) => self.region.route_key_down(scroll_key),
                    None => false,
                }
            }
            CrosstermEvent::Mouse(mouse) => {
                let local = self.to_local(mouse.column, mouse.row);
                let inside = Rect::from_size(self.bounds.width, self.bounds.height).contains(local);
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        self.region.route_pointer_down(local, button.into());
                    }
                    MouseEventKind::Up(_) => self.region.route_pointer_up(),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        let dragging = self.region.vertical().is_dragging()
                            || self.region.horizontal().is_dragging();
                        if inside || dragging {
                            self.region.route_pointer_move(local);
                        } else {
                            self.region.route_pointer_leave();
                        }
                    }
                    // Terminal wheel notches are single steps; up moves toward the start.
                    MouseEventKind::ScrollUp if inside => self.region.route_mouse_wheel(local, 1),
                    MouseEventKind::ScrollDown if inside => {
                        self.region.route_mouse_wheel(local, -1)
                    }
                    _ => return false,
                }
                true
            }
            CrosstermEvent::Resize(width, height) => {
                debug!("terminal resized to {}x{}", width, height);
                false
            }
            _ => false,
        }
    }

    /// Current offset plus key help. Read from the region every frame, since
    /// a resize can reset an axis without raising a notification.
    pub fn status_line(&self) -> String {
        let offset = self.region.offset();
        format!(
            "offset x={} y={}  wheel/click/drag, arrows/PgUp/PgDn/Home/End, q=quit",
            offset.x, offset.y
        )
    }

    pub fn drain_events(&mut self) -> Vec<ScrollEvent> {
        self.region.drain_events()
    }
}

/// Sample document with long and short lines so both bars come and go.
pub fn sample_lines(count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| {
            if n % 7 == 0 {
                format!(
                    "Line {n:>4}: {}",
                    "a wide line that runs past the right edge of most terminals ".repeat(3)
                )
            } else {
                format!("Line {n:>4}: some content here")
            }
        })
        .collect()
}
