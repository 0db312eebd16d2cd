//! Radius-bounded chunk streaming and multi-level spatial hashing for voxel worlds.
//!
//! This library is organized into several crates:
//! - **core**: lattice-aligned geometry primitives (points, boxes, spheres, rays) and the
//!   grid/world alignment helpers
//! - **grid**: the chunk record arena and the radius-driven controller that streams a square
//!   grid of chunks around a world center
//! - **index**: the chunk/section/sample spatial hash tables and the broad-phase ray query
//!
//! The intended update cycle is:
//!
//! 1. Mutate a `WorldConfig` (radius, world center, chunk size).
//! 2. Call `ChunkGridController::update` to bring the chunk set in line with the configured
//!    radius.
//! 3. Call `SpatialHashIndex::rebuild` with the resulting arena so position and ray queries
//!    see the post-resize chunk set.

pub use chunk_realm_core as core;
pub use chunk_realm_grid as grid;
pub use chunk_realm_index as index;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::grid::prelude::*;
    pub use super::index::prelude::*;
}
