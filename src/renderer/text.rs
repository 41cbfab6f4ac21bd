//! Character-grid canvas for headless runs and tests
//!
//! Each cell is one surface pixel. Colors are reduced to three shades:
//! near-white as ' ', light as '.', anything darker as '#'.

use std::fmt;

use glam::Vec2;

use super::scene::{Canvas, DiskStyle, Rgba};
use crate::mapper::SurfaceSize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Cells holding `ch`
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }
}

fn shade(color: Rgba) -> char {
    let luma = 0.2126 * color[0] + 0.7152 * color[1] + 0.0722 * color[2];
    if luma >= 0.99 {
        ' '
    } else if luma >= 0.5 {
        '.'
    } else {
        '#'
    }
}

impl SurfaceSize for TextCanvas {
    fn surface_size(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32)
    }
}

impl Canvas for TextCanvas {
    fn fill_background(&mut self, color: Rgba) {
        self.cells.fill(shade(color));
    }

    fn draw_disk(&mut self, center: Vec2, radius: f32, style: &DiskStyle) {
        let half_line = style.line_width * 0.5;
        let reach = radius + half_line;

        // Only visit cells inside the disk's bounding box
        let col_lo = (center.x - reach).floor().max(0.0) as usize;
        let row_lo = (center.y - reach).floor().max(0.0) as usize;
        let col_hi = ((center.x + reach).ceil().max(0.0) as usize).min(self.cols);
        let row_hi = ((center.y + reach).ceil().max(0.0) as usize).min(self.rows);

        let fill = shade(style.fill);
        let outline = shade(style.outline);
        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                let cell_center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5);
                let dist = cell_center.distance(center);
                let idx = row * self.cols + col;
                if (dist - radius).abs() <= half_line {
                    self.cells[idx] = outline;
                } else if dist < radius {
                    self.cells[idx] = fill;
                }
            }
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
