//! The chunk record arena and the radius-driven controller that streams a square grid of chunks
//! around a world center.
//!
//! [`ChunkGridController::update`] diffs a [`WorldConfig`] against the radius it last acted on
//! and brings the arena in line: initial generation fills the `(2r+1)^2` grid, a larger radius
//! grows it, a smaller one destroys the outer ring. Radius changes are debounced by one update
//! cycle so a value that is still being dragged does not thrash the arena.

pub mod arena;
pub mod config;
pub mod controller;

pub use arena::{ChunkArena, ChunkId, ChunkRecord};
pub use config::WorldConfig;
pub use controller::{ChunkGridController, GridDelta};

pub mod prelude {
    pub use super::{ChunkArena, ChunkGridController, ChunkId, ChunkRecord, GridDelta, WorldConfig};
}
