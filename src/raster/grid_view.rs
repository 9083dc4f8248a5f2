//! GridView: maps a grid snapshot into a pixel framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::grid::Grid;
use crate::raster::fb::{PixelBuffer, Rgb};
use crate::raster::palette::Palette;

/// Rasterizes grid snapshots at a fixed integer scale.
///
/// Each cell becomes a uniform `scale x scale` block of its palette color.
/// Block replication keeps cell boundaries crisp on small grids and never
/// produces a color outside the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    scale: u32,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            scale: crate::types::DEFAULT_SCALE,
        }
    }
}

impl GridView {
    /// Create a view with the given scale, clamped to at least 1.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Render a snapshot into a framebuffer of `(cols * scale, rows * scale)`.
    pub fn render(&self, snapshot: &Grid, palette: &Palette) -> PixelBuffer {
        let width = snapshot.cols() as u32 * self.scale;
        let height = snapshot.rows() as u32 * self.scale;
        let mut fb = PixelBuffer::new(width, height, palette.free);

        for row in 0..snapshot.rows() {
            for col in 0..snapshot.cols() {
                // Bounds hold by loop construction.
                let kind = match snapshot.get(row, col) {
                    Some(kind) => kind,
                    None => continue,
                };
                self.fill_cell_block(&mut fb, row, col, palette.color(kind));
            }
        }

        fb
    }

    fn fill_cell_block(&self, fb: &mut PixelBuffer, row: usize, col: usize, color: Rgb) {
        let px = col as u32 * self.scale;
        let py = row as u32 * self.scale;
        fb.fill_rect(px, py, self.scale, self.scale, color);
    }
}
