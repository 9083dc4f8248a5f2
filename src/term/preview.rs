//! Terminal overview of a plan: the whole path stamped onto the map.
//!
//! `overview_string` is pure and unit-testable; `print_overview` flushes
//! the same overlay to stdout with one color per cell kind.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::grid::Grid;
use crate::core::overlay::path_overlay;
use crate::raster::{Palette, Rgb};
use crate::types::Position;

/// Character rendering of the whole-path overlay, one line per grid row.
pub fn overview_string(grid: &Grid, path: &[Position]) -> String {
    path_overlay(grid, path).to_lines().join("\n")
}

/// Print the whole-path overlay to stdout, colored per cell kind.
pub fn print_overview(grid: &Grid, path: &[Position]) -> Result<()> {
    let overlay = path_overlay(grid, path);
    let palette = Palette::default();
    let mut stdout = io::stdout();

    let mut current: Option<Rgb> = None;
    for row in 0..overlay.rows() {
        for col in 0..overlay.cols() {
            let kind = match overlay.get(row, col) {
                Some(kind) => kind,
                None => continue,
            };
            let rgb = palette.color(kind);
            if current != Some(rgb) {
                stdout.queue(SetForegroundColor(rgb_to_color(rgb)))?;
                current = Some(rgb);
            }
            stdout.queue(Print(kind.as_char()))?;
        }
        stdout.queue(Print('\n'))?;
    }

    stdout.queue(ResetColor)?;
    stdout.flush()?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
