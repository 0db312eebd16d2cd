use crate::{ChunkArena, ChunkId, ChunkRecord, WorldConfig};

use chunk_realm_core::{half_cell_offset, nearest_cell_center, Point3, Point3f};
use log::{debug, error};
use rayon::prelude::*;

/// Summary of one [`ChunkGridController::update`] call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GridDelta {
    /// Records added this cycle.
    pub created: usize,
    /// Records destroyed this cycle.
    pub destroyed: usize,
    /// Pre-existing records whose center was recomputed this cycle.
    pub repositioned: usize,
}

impl GridDelta {
    #[inline]
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Streams a square grid of chunks around the configured world center.
///
/// Each [`ChunkGridController::update`] call compares the configured radius with the radius the
/// controller last acted on:
///
/// - empty arena: generate the full `(2r+1)^2` grid immediately
/// - equal radii: nothing to do, and any pending resize is cancelled
/// - changed radius: the first cycle only arms a pending flag, the second cycle grows or shrinks
///
/// The one-cycle delay keeps a radius that is still being dragged from resizing the arena on
/// every intermediate value.
///
/// Growing inserts the missing `(2new+1)^2 - (2old+1)^2` records; shrinking destroys records
/// whose grid offset falls outside the new radius. Either way the linear index of every
/// surviving record changes meaning, so all centers are recomputed afterwards.
#[derive(Debug, Default)]
pub struct ChunkGridController {
    arena: ChunkArena,
    previous_radius: i32,
    pending_resize: bool,
}

impl ChunkGridController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn arena(&self) -> &ChunkArena {
        &self.arena
    }

    /// The radius the controller last brought the arena in line with.
    #[inline]
    pub fn previous_radius(&self) -> i32 {
        self.previous_radius
    }

    /// `true` while a radius change has been observed but not yet acted on.
    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.pending_resize
    }

    /// Brings the chunk set in line with `config`. See the type-level docs for the cycle rules.
    pub fn update(&mut self, config: &WorldConfig) -> GridDelta {
        if self.arena.is_empty() {
            self.pending_resize = false;

            return self.generate(config);
        }

        if config.radius == self.previous_radius {
            self.pending_resize = false;

            return GridDelta::default();
        }

        if !self.pending_resize {
            self.pending_resize = true;

            return GridDelta::default();
        }
        self.pending_resize = false;

        let delta = if config.radius > self.previous_radius {
            self.grow(config)
        } else {
            self.shrink(config)
        };
        self.previous_radius = config.radius;

        delta
    }

    fn generate(&mut self, config: &WorldConfig) -> GridDelta {
        if config.radius < 0 {
            error!("failed to generate initial chunks");

            return GridDelta::default();
        }

        let count = config.chunk_count();
        debug!(
            "initial generation of {} chunks with radius {}",
            count, config.radius
        );

        let centers = compute_centers(count, config);
        for center in centers {
            self.arena.insert(ChunkRecord::new(center, config.chunk_size));
        }
        self.previous_radius = config.radius;

        GridDelta {
            created: count,
            destroyed: 0,
            repositioned: 0,
        }
    }

    fn grow(&mut self, config: &WorldConfig) -> GridDelta {
        let old_length = 2 * self.previous_radius + 1;
        let new_length = config.grid_length();
        let to_add = (new_length * new_length - old_length * old_length) as usize;

        debug!(
            "adding {} chunks as the radius increased from {} to {}",
            to_add, self.previous_radius, config.radius
        );

        let existing = self.arena.len();
        for _ in 0..to_add {
            self.arena
                .insert(ChunkRecord::new(Point3f::ZERO, config.chunk_size));
        }
        self.reposition_all(config);

        GridDelta {
            created: to_add,
            destroyed: 0,
            repositioned: existing,
        }
    }

    fn shrink(&mut self, config: &WorldConfig) -> GridDelta {
        if config.radius < 0 || self.previous_radius <= config.radius {
            debug!(
                "no chunks to remove, invalid radius change from {} to {}",
                self.previous_radius, config.radius
            );

            return GridDelta::default();
        }

        let new_radius = config.radius;
        let world_center = config.world_center;
        let snapshot: Vec<(ChunkId, ChunkRecord)> =
            self.arena.iter().map(|(id, record)| (id, *record)).collect();

        let doomed: Vec<ChunkId> = snapshot
            .par_iter()
            .filter_map(|(id, record)| {
                let offset = record.grid_offset(&world_center);
                if offset.x().abs() > new_radius || offset.y().abs() > new_radius {
                    Some(*id)
                } else {
                    None
                }
            })
            .collect();

        if doomed.is_empty() {
            debug!("no chunks identified for removal");

            return GridDelta::default();
        }

        debug!(
            "removing {} chunks outside the new radius {}",
            doomed.len(),
            new_radius
        );
        for id in &doomed {
            self.arena.remove(*id);
        }
        self.reposition_all(config);

        GridDelta {
            created: 0,
            destroyed: doomed.len(),
            repositioned: self.arena.len(),
        }
    }

    /// Recomputes every record's center from its linear index under the configured radius.
    fn reposition_all(&mut self, config: &WorldConfig) {
        let count = self.arena.len();
        let centers = compute_centers(count, config);

        for ((_, record), center) in self.arena.iter_mut().zip(centers) {
            record.center = center;
            record.size = config.chunk_size;
        }
    }
}

/// Centers for linear indices `0..count` under `config`, computed on the rayon pool.
///
/// Index `i` maps to the grid cell `(i % length - radius, i / length - radius)`; the cell's
/// world position is the lattice snap of the world center plus whole chunk footprints.
fn compute_centers(count: usize, config: &WorldConfig) -> Vec<Point3f> {
    let radius = config.radius;
    let length = config.grid_length();
    let chunk_size = config.chunk_size;
    let nearest = nearest_cell_center(
        chunk_size,
        config.world_center,
        half_cell_offset(chunk_size),
    );

    (0..count as i32)
        .into_par_iter()
        .map(|index| {
            let grid_x = index % length - radius;
            let grid_z = index / length - radius;

            Point3([
                nearest.x() + grid_x as f32 * chunk_size.x(),
                nearest.y(),
                nearest.z() + grid_z as f32 * chunk_size.z(),
            ])
        })
        .collect()
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
