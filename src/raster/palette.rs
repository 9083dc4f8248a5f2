//! Palette: total mapping from cell kinds to colors.

use crate::raster::fb::Rgb;
use crate::types::CellKind;

/// One color per cell kind.
///
/// The mapping is total by construction: every [`CellKind`] has a field,
/// and characters outside the alphabet already parse as `Free`, so no
/// lookup can miss. Passed per call, never a shared mutable default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub free: Rgb,
    pub wall: Rgb,
    pub start: Rgb,
    pub goal: Rgb,
    pub box_unit: Rgb,
    pub robot: Rgb,
}

impl Palette {
    /// Color for a cell kind.
    pub fn color(&self, kind: CellKind) -> Rgb {
        match kind {
            CellKind::Free => self.free,
            CellKind::Wall => self.wall,
            CellKind::Start => self.start,
            CellKind::Goal => self.goal,
            CellKind::BoxUnit => self.box_unit,
            CellKind::Robot => self.robot,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            free: Rgb::new(255, 255, 255),
            wall: Rgb::new(0, 0, 0),
            start: Rgb::new(200, 200, 200),
            goal: Rgb::new(0, 255, 0),
            box_unit: Rgb::new(0, 0, 255),
            robot: Rgb::new(255, 0, 0),
        }
    }
}
