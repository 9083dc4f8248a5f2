//! Animation module: frame sequencing and file export.
//!
//! The sequencer invokes the overlay and rasterizer once per timestep (plus
//! once for the terminal frame); the export step serializes the result.
//! Strictly sequential, one-shot: it either runs to completion or fails.

pub mod export;
pub mod sequencer;

pub use export::{save_animation, save_still, write_outputs};
pub use sequencer::{sequence, FrameSequence, RenderConfig};

use anyhow::Result;

use crate::core::grid::Grid;
use crate::raster::Palette;
use crate::types::Position;

/// Render a plan end to end: build all frames, then write both artifacts.
///
/// This is the crate's top-level operation. The configuration is taken by
/// value so every invocation carries its own settings.
pub fn render_plan(
    grid: &Grid,
    path: &[Position],
    trajectories: &[Vec<Position>],
    config: RenderConfig,
) -> Result<()> {
    let seq = sequence(grid, path, trajectories, &Palette::default(), config.scale)?;
    write_outputs(&seq, &config)
}
