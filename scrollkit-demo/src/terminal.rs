use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::theme::Rgb;

/// Raw-mode terminal on the alternate screen with mouse capture. Restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Option<Buffer>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            previous: None,
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait for input, then take everything else already queued so one frame
    /// covers a burst of mouse motion.
    pub fn read_events(&self) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Write the cells that changed since the last frame.
    pub fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        let changed: Vec<(u16, u16, Cell)> = match (&self.previous, same_size) {
            (Some(prev), true) => buffer.diff(prev).map(|(x, y, c)| (x, y, *c)).collect(),
            _ => {
                execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
                buffer.cells().map(|(x, y, c)| (x, y, *c)).collect()
            }
        };

        let mut last: Option<(u16, u16)> = None;
        let mut colors: Option<(Rgb, Rgb)> = None;
        for (x, y, cell) in changed {
            // Move cursor if not sequential
            if last != Some((x.wrapping_sub(1), y)) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if colors != Some((cell.fg, cell.bg)) {
                execute!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                colors = Some((cell.fg, cell.bg));
            }
            write!(self.stdout, "{}", cell.char)?;
            last = Some((x, y));
        }

        self.stdout.flush()?;
        self.previous = Some(buffer.clone());
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
