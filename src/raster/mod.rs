//! Raster module: grid snapshot -> RGB pixel frame.
//!
//! A small, image-oriented rendering layer. It renders into a plain pixel
//! framebuffer that the export layer can hand to any encoder.
//!
//! Goals:
//! - Keep rasterization pure and unit-testable
//! - One uniform scale x scale block per grid cell (nearest-neighbor)
//! - Colors come from an explicit total palette, never from fallthrough

pub mod fb;
pub mod grid_view;
pub mod palette;

pub use fb::{PixelBuffer, Rgb};
pub use grid_view::GridView;
pub use palette::Palette;
