use crate::constants::{GLYPH_ROW_OFFSET, UNIT};
use crate::glyph::{Glyph, GLYPH_ROWS};
use glam::Vec3;

/// Center of one unit cube, in the space of whatever contains the glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubePlacement {
    pub position: Vec3,
}

/// Expand a glyph into one placement per lit cell.
///
/// Cell `(i, j)` lands at
/// `anchor + (j * UNIT - column_offset, (ROWS - 1 - i) * UNIT - ROW_OFFSET, 0)`.
/// Unlit cells produce nothing.
pub fn glyph_cubes(glyph: Glyph, anchor: Vec3) -> Vec<CubePlacement> {
    let x_offset = glyph.column_offset();
    let mut out = Vec::with_capacity(glyph.cell_count());
    for (i, row) in glyph.bitmap().iter().enumerate() {
        for (j, &on) in row.iter().enumerate() {
            if !on {
                continue;
            }
            let local = Vec3::new(
                j as f32 * UNIT - x_offset,
                (GLYPH_ROWS - 1 - i) as f32 * UNIT - GLYPH_ROW_OFFSET,
                0.0,
            );
            out.push(CubePlacement {
                position: anchor + local,
            });
        }
    }
    out
}
