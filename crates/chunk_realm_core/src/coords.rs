//! Alignment between continuous world positions and the chunk lattice.
//!
//! Chunks tile the XZ plane on a lattice whose pitch is the chunk footprint. Because a chunk's
//! stored position is its center, snapping a world position onto the lattice needs a half-cell
//! correction; [`half_cell_offset`] produces it and [`nearest_cell_center`] applies it.

use crate::{Point3, Point3f, Point3i};

/// Snaps `p` to the nearest lattice cell center, then shifts by `offset`.
///
/// Each axis is rounded independently, so the result is the cell center nearest to `p` in the
/// max-norm sense.
#[inline]
pub fn nearest_cell_center(cell_size: Point3f, p: Point3f, offset: Point3f) -> Point3f {
    (p / cell_size).round() * cell_size + offset
}

/// The minimal corner of the cell containing `p`, in integer world coordinates.
#[inline]
pub fn cell_min_corner(cell_size: Point3f, p: Point3f) -> Point3i {
    ((p / cell_size).floor() * cell_size).trunc()
}

/// The offset from a chunk's lattice-aligned corner snap to its stored center.
///
/// Only the horizontal axes are shifted. The `- 0.5` accounts for cell centers sitting half a
/// unit inside the integer lattice.
#[inline]
pub fn half_cell_offset(cell_size: Point3f) -> Point3f {
    Point3([cell_size.x() / 2.0 - 0.5, 0.0, cell_size.z() / 2.0 - 0.5])
}

/// Splits a flat in-chunk sample index back into local `(x, y, z)` coordinates.
///
/// The flat index is laid out x-fastest, then y, then z: `index = x + edge * (y + height * z)`.
#[inline]
pub fn delinearize_in_chunk(index: i32, edge: i32, height: i32) -> Point3i {
    Point3([index % edge, (index / edge) % height, index / (edge * height)])
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
