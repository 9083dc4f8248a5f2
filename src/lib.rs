//! path-viz: renders grid-world planner trajectories into images.
//!
//! Given a static map, a robot path and the trajectories of movable boxes
//! (all produced by an external planner), this crate reconstructs the grid
//! state at each timestep, rasterizes it into scaled RGB frames, and writes
//! a final-state PNG still plus an infinitely looping GIF animation.
//!
//! The pipeline is strictly sequential and one-shot:
//!
//! - [`core`]: grid template and per-timestep state reconstruction (pure)
//! - [`raster`]: snapshot -> pixel framebuffer at an integer scale (pure)
//! - [`anim`]: frame sequencing and PNG/GIF export
//! - [`term`]: optional colored ASCII overview of the whole path
//!
//! Planning, map-file parsing and CLI plumbing live outside this crate; it
//! only visualizes already-computed trajectories.

pub mod anim;
pub mod core;
pub mod raster;
pub mod term;
pub mod types;

pub use anim::{render_plan, sequence, FrameSequence, RenderConfig};
pub use raster::{GridView, Palette, PixelBuffer, Rgb};
pub use self::core::{snapshot_at, Grid};
pub use types::{CellKind, Position};
