//! Framebuffer of tagged character cells.

use crate::types::ColorTag;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tag: ColorTag,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            tag: ColorTag::None,
        }
    }
}

/// 2D framebuffer of tagged character cells.
///
/// The cell array always holds exactly `width * height` entries; writes
/// outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y` as a slice of cells (empty when out of range).
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Characters of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, ch: char, tag: ColorTag) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, tag };
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Write `text` left to right from `(x, y)`, clipping each character
    /// independently.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, tag: ColorTag) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x.saturating_add(i as i32), y, ch, tag);
        }
    }

    /// Write `text` centered on row `y`.
    pub fn draw_text_centered(&mut self, y: i32, text: &str, tag: ColorTag) {
        let len = text.chars().count() as i32;
        let x = (self.width as i32 - len) / 2;
        self.draw_text(x, y, text, tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set(-1, 0, 'x', ColorTag::Hud);
        fb.set(4, 0, 'x', ColorTag::Hud);
        fb.set(0, 3, 'x', ColorTag::Hud);
        fb.set(0, -7, 'x', ColorTag::Hud);
        assert_eq!(fb.cells().len(), 12);
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn draw_text_clips_per_character() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.draw_text(-2, 0, "abcdefgh", ColorTag::Title);
        assert_eq!(fb.row_text(0), "cdefg");
        assert_eq!(fb.get(0, 0).unwrap().tag, ColorTag::Title);
    }

    #[test]
    fn centered_text() {
        let mut fb = FrameBuffer::new(7, 1);
        fb.draw_text_centered(0, "abc", ColorTag::Hud);
        assert_eq!(fb.row_text(0), "  abc  ");
    }

    #[test]
    fn resize_keeps_length_invariant() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.cells().len(), 15);
        assert_eq!(fb.row(2).len(), 5);
        assert!(fb.row(3).is_empty());
    }
}
