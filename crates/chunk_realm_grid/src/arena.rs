use chunk_realm_core::{BoundingBox, Point2, Point2i, Point3f};

use slab::Slab;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier of a chunk record. Slots are reused after removal, so an id is only
/// meaningful while its record is alive.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChunkId(pub usize);

/// One streamed chunk: its world-space center and its full side lengths.
///
/// All live chunks share the same `size`. The grid offset is derived from the center on demand,
/// never stored, since every resize recomputes the centers.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkRecord {
    pub center: Point3f,
    pub size: Point3f,
}

impl ChunkRecord {
    #[inline]
    pub fn new(center: Point3f, size: Point3f) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.center, self.size)
    }

    /// The chunk's horizontal cell in the grid, relative to `world_center`.
    ///
    /// Inverts the placement formula: the center sits at the lattice snap of `world_center`
    /// shifted by the half-cell offset, so undoing the shift and dividing by the footprint
    /// recovers the integer cell.
    #[inline]
    pub fn grid_offset(&self, world_center: &Point3f) -> Point2i {
        let off_x = (self.center.x() - world_center.x() + 0.5 - self.size.x() / 2.0) / self.size.x();
        let off_z = (self.center.z() - world_center.z() + 0.5 - self.size.z() / 2.0) / self.size.z();

        Point2([off_x.round() as i32, off_z.round() as i32])
    }
}

/// Slot-reusing storage for the live chunk set.
///
/// Iteration order is slot order, which the grid controller relies on: a record's position in
/// the iteration sequence is its linear grid index.
#[derive(Clone, Debug, Default)]
pub struct ChunkArena {
    records: Slab<ChunkRecord>,
}

impl ChunkArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Slab::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn insert(&mut self, record: ChunkRecord) -> ChunkId {
        ChunkId(self.records.insert(record))
    }

    #[inline]
    pub fn remove(&mut self, id: ChunkId) -> Option<ChunkRecord> {
        if self.records.contains(id.0) {
            Some(self.records.remove(id.0))
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, id: ChunkId) -> Option<&ChunkRecord> {
        self.records.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ChunkId) -> Option<&mut ChunkRecord> {
        self.records.get_mut(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChunkId, &ChunkRecord)> {
        self.records.iter().map(|(key, record)| (ChunkId(key), record))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ChunkId, &mut ChunkRecord)> {
        self.records
            .iter_mut()
            .map(|(key, record)| (ChunkId(key), record))
    }

    /// The box covering every live chunk, or `None` when the arena is empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.iter().map(|(_, record)| record.bounding_box());
        let first = iter.next()?;

        let (min, max) = iter.fold((first.min(), first.max()), |(min, max), b| {
            (min.meet(&b.min()), max.join(&b.max()))
        });

        Some(BoundingBox::from_min_max(min, max))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
