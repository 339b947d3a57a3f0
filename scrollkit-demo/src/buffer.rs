use scrollkit::Rect;

use crate::theme::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Cell {
    pub const fn new(char: char, fg: Rgb, bg: Rgb) -> Self {
        Self { char, fg, bg }
    }
}

/// Grid of terminal cells. Writes outside the grid are dropped.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        let blank = Cell::new(' ', background, background);
        Self {
            width,
            height,
            cells: vec![blank; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Write `text` starting at `(x, y)`, one char per cell, stopping at `max_x`.
    pub fn put_str(&mut self, x: i32, y: i32, max_x: i32, text: &str, fg: Rgb, bg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= max_x {
                break;
            }
            self.set(cx, y, Cell::new(ch, fg, bg));
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Cells that differ from `other`. Both buffers must have the same size.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            (x, y, cell)
        })
    }
}
