//! Terminal preview module.
//!
//! A thin, optional surface that prints the whole-path overlay to the
//! terminal before (or instead of) image export. The pure string rendering
//! is kept separate from the crossterm flusher so it stays unit-testable.

pub mod preview;

pub use preview::{overview_string, print_overview};
