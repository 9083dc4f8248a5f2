//! Overlay: reconstructs one timestep's grid state from the static template.
//!
//! This module is pure (no I/O). Each call clones the template, so no state
//! leaks between timesteps and the template itself is never mutated.

use crate::core::grid::Grid;
use crate::types::{CellKind, Position};

/// Reconstruct the grid state for a single timestep.
///
/// The template's start marker and initial box cells are normalized to free
/// space before stamping, so a box that has moved on leaves no trail. Boxes
/// are stamped first, the robot last; with `robot == None` the result is the
/// statically-normalized template only.
///
/// Stamps go through the grid's bounds-checked `set`, so an out-of-range
/// position is a no-op here. Callers that want rejection must validate
/// before invoking (the sequencer does).
pub fn snapshot_at(grid: &Grid, robot: Option<Position>, boxes: &[Position]) -> Grid {
    let mut snap = grid.clone();
    snap.replace_all(CellKind::Start, CellKind::Free);
    snap.replace_all(CellKind::BoxUnit, CellKind::Free);

    for &pos in boxes {
        snap.set(pos.row, pos.col, CellKind::BoxUnit);
    }
    if let Some(pos) = robot {
        snap.set(pos.row, pos.col, CellKind::Robot);
    }
    snap
}

/// Sample every trajectory at timestep `t`.
///
/// Trajectories shorter than `t + 1` contribute nothing: an exhausted box
/// vanishes rather than freezing at its last known cell.
pub fn boxes_at(trajectories: &[Vec<Position>], t: usize) -> Vec<Position> {
    trajectories
        .iter()
        .filter_map(|traj| traj.get(t).copied())
        .collect()
}

/// Last known position of every trajectory that has at least one entry.
pub fn final_boxes(trajectories: &[Vec<Position>]) -> Vec<Position> {
    trajectories
        .iter()
        .filter_map(|traj| traj.last().copied())
        .collect()
}

/// Stamp the robot marker on every visited cell of the whole path.
///
/// Wall cells are left untouched. Used by the terminal overview, not by the
/// per-timestep animation.
pub fn path_overlay(grid: &Grid, path: &[Position]) -> Grid {
    let mut overlay = grid.clone();
    for &pos in path {
        if overlay.get(pos.row, pos.col) != Some(CellKind::Wall) {
            overlay.set(pos.row, pos.col, CellKind::Robot);
        }
    }
    overlay
}
