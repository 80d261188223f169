//! Character-cell canvas the scene and text overlays are composed into.

use crate::graphics::{FrameBuffer, Rgb};

/// Upper half block: foreground paints the top pixel, background the bottom
pub const HALF_BLOCK: char = '\u{2580}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            fg: [230, 230, 230],
            bg: [0, 0, 0],
            bold: false,
        }
    }
}

/// A rectangle of cells, used for clickable controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.col
            && col < self.col + self.width
            && row >= self.row
            && row < self.row + self.height
    }
}

/// Text style for `Canvas::put_str`
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub fg: Rgb,
    /// `None` keeps whatever background is already there
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    pub const fn fg(fg: Rgb) -> Self {
        Style {
            fg,
            bg: None,
            bold: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Style {
            bg: Some(bg),
            ..self
        }
    }

    pub const fn bold(self) -> Self {
        Style { bold: true, ..self }
    }
}

pub struct Canvas {
    pub cols: usize,
    pub rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Canvas {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        if cols != self.cols || rows != self.rows {
            *self = Canvas::new(cols, rows);
        }
    }

    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(Cell {
            bg,
            ..Cell::default()
        });
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Copies a framebuffer with two pixel rows per cell row
    pub fn blit(&mut self, frame: &FrameBuffer) {
        let cols = self.cols.min(frame.width);
        let rows = self.rows.min(frame.height / 2);
        for row in 0..rows {
            for col in 0..cols {
                self.cells[row * self.cols + col] = Cell {
                    ch: HALF_BLOCK,
                    fg: frame.pixel(col, row * 2),
                    bg: frame.pixel(col, row * 2 + 1),
                    bold: false,
                };
            }
        }
    }

    /// Writes text clipped to the canvas; returns the column after the text
    pub fn put_str(&mut self, col: usize, row: usize, text: &str, style: Style) -> usize {
        if row >= self.rows {
            return col;
        }
        let mut x = col;
        for ch in text.chars() {
            if x >= self.cols {
                break;
            }
            let cell = &mut self.cells[row * self.cols + x];
            // Half blocks underneath text would show their top color as ink
            let bg = style.bg.unwrap_or(if cell.ch == HALF_BLOCK { cell.fg } else { cell.bg });
            *cell = Cell {
                ch,
                fg: style.fg,
                bg,
                bold: style.bold,
            };
            x += 1;
        }
        x
    }

    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for row in rect.row..(rect.row + rect.height).min(self.rows) {
            for col in rect.col..(rect.col + rect.width).min(self.cols) {
                self.cells[row * self.cols + col] = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let line_len = line.chars().count();
        if !line.is_empty() && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap("   ", 5).is_empty());
    }

    #[test]
    fn put_str_clips_at_the_edge() {
        let mut canvas = Canvas::new(5, 2);
        let end = canvas.put_str(3, 0, "hello", Style::fg([1, 1, 1]));
        assert_eq!(end, 5);
        assert_eq!(canvas.row(0)[3].ch, 'h');
        assert_eq!(canvas.row(0)[4].ch, 'e');
        assert_eq!(canvas.put_str(0, 7, "x", Style::fg([1, 1, 1])), 0);
    }

    #[test]
    fn blit_packs_two_pixel_rows_per_cell() {
        let mut frame = FrameBuffer::new(2, 4);
        frame.set_background(0, 0, [10, 0, 0]);
        frame.set_background(0, 1, [0, 20, 0]);
        let mut canvas = Canvas::new(2, 2);
        canvas.blit(&frame);
        let cell = canvas.row(0)[0];
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.fg, [10, 0, 0]);
        assert_eq!(cell.bg, [0, 20, 0]);
    }

    #[test]
    fn text_over_the_scene_takes_the_upper_pixel_as_background() {
        let mut frame = FrameBuffer::new(1, 2);
        frame.set_background(0, 0, [50, 60, 70]);
        let mut canvas = Canvas::new(1, 1);
        canvas.blit(&frame);
        let _ = canvas.put_str(0, 0, "x", Style::fg([255, 255, 255]));
        assert_eq!(canvas.row(0)[0].bg, [50, 60, 70]);
    }

    #[test]
    fn rect_hit_testing() {
        let rect = Rect {
            col: 2,
            row: 1,
            width: 3,
            height: 1,
        };
        assert!(rect.contains(2, 1));
        assert!(rect.contains(4, 1));
        assert!(!rect.contains(5, 1));
        assert!(!rect.contains(3, 0));
    }
}
