//! Sequencer: drives overlay + rasterizer once per timestep.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::core::grid::Grid;
use crate::core::overlay::{boxes_at, final_boxes, snapshot_at};
use crate::raster::{GridView, Palette, PixelBuffer};
use crate::types::{Position, DEFAULT_ANIM_PATH, DEFAULT_SCALE, DEFAULT_STILL_PATH, FRAME_DELAY_MS};

/// Per-invocation render settings.
///
/// Passed by value on every call; there is no process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per grid cell edge (minimum 1).
    pub scale: u32,
    /// Display duration of each animation frame, in milliseconds.
    pub frame_delay_ms: u32,
    /// Output path for the final-state still image.
    pub still_path: PathBuf,
    /// Output path for the looping animation.
    pub anim_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            frame_delay_ms: FRAME_DELAY_MS,
            still_path: PathBuf::from(DEFAULT_STILL_PATH),
            anim_path: PathBuf::from(DEFAULT_ANIM_PATH),
        }
    }
}

/// The frames a render pass accumulates for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    /// One frame per timestep, in path order.
    pub steps: Vec<PixelBuffer>,
    /// The terminal (final-state) frame.
    pub terminal: PixelBuffer,
}

impl FrameSequence {
    /// Number of per-timestep frames (excludes the terminal frame).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Build the full frame sequence for a plan.
///
/// Produces one frame per path entry plus the terminal frame built from the
/// last robot position (none if the path is empty) and each trajectory's
/// last entry. Every supplied position is validated against grid bounds
/// up front; an out-of-range waypoint is corrupt planner output and is
/// rejected rather than clamped.
pub fn sequence(
    grid: &Grid,
    path: &[Position],
    trajectories: &[Vec<Position>],
    palette: &Palette,
    scale: u32,
) -> Result<FrameSequence> {
    validate_positions(grid, path, trajectories)?;

    let view = GridView::new(scale);
    let steps: Vec<PixelBuffer> = path
        .iter()
        .enumerate()
        .map(|(t, &pos)| {
            let snap = snapshot_at(grid, Some(pos), &boxes_at(trajectories, t));
            view.render(&snap, palette)
        })
        .collect();

    let terminal_snap = snapshot_at(grid, path.last().copied(), &final_boxes(trajectories));
    let terminal = view.render(&terminal_snap, palette);

    Ok(FrameSequence { steps, terminal })
}

fn validate_positions(
    grid: &Grid,
    path: &[Position],
    trajectories: &[Vec<Position>],
) -> Result<()> {
    for (t, &pos) in path.iter().enumerate() {
        if !grid.contains(pos) {
            bail!(
                "robot position ({}, {}) at timestep {} is outside the {}x{} grid",
                pos.row,
                pos.col,
                t,
                grid.rows(),
                grid.cols()
            );
        }
    }
    for (i, traj) in trajectories.iter().enumerate() {
        for (t, &pos) in traj.iter().enumerate() {
            if !grid.contains(pos) {
                bail!(
                    "box {} position ({}, {}) at timestep {} is outside the {}x{} grid",
                    i,
                    pos.row,
                    pos.col,
                    t,
                    grid.rows(),
                    grid.cols()
                );
            }
        }
    }
    Ok(())
}
