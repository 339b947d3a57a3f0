mod buffer;
mod config;
mod error;
mod painter;
mod terminal;
mod theme;
mod view;

use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use log::{debug, info};
use scrollkit::{Rect, ScrollEvent};
use simplelog::{Config, WriteLogger};

use buffer::Buffer;
use config::DemoConfig;
use error::DemoError;
use terminal::Terminal;
use theme::Theme;
use view::{sample_lines, terminal_region_config, TextView};

fn main() -> Result<(), DemoError> {
    let config = DemoConfig::from_env();

    let log_file = File::create(&config.log_path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    info!("scrollkit demo starting, logging to {}", config.log_path.display());

    let theme = Theme::default();
    let mut view = TextView::new(sample_lines(config.line_count), terminal_region_config());
    let mut term = Terminal::new()?;

    loop {
        let (width, height) = term.size()?;
        view.set_bounds(Rect::new(0, 1, width as i32, height as i32 - 2));

        let mut buffer = Buffer::new(width, height, theme.background);
        buffer.put_str(
            0,
            0,
            width as i32,
            "Scroll Demo",
            theme.text,
            theme.background,
        );
        painter::paint_view(&mut buffer, &view, &theme);
        buffer.put_str(
            0,
            height as i32 - 1,
            width as i32,
            &view.status_line(),
            theme.muted,
            theme.background,
        );
        term.draw(&buffer)?;

        for event in term.read_events()? {
            if is_quit(&event) {
                info!("quit requested");
                return Ok(());
            }
            view.handle_event(&event);
        }

        for event in view.drain_events() {
            if let ScrollEvent::ValueChanged { axis, old, new } = event {
                debug!("{} offset {} -> {}", axis, old, new);
            }
        }
    }
}

fn is_quit(event: &CrosstermEvent) -> bool {
    matches!(
        event,
        CrosstermEvent::Key(key)
            if key.kind != KeyEventKind::Release
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
    )
}
