use crate::{spatial_hash_key, HashKey, SampleRecord, Section, SmallKeyHashMap};

use chunk_realm_core::{half_cell_offset, nearest_cell_center, Point3, Point3f};
use chunk_realm_grid::{ChunkArena, ChunkId};
use log::{debug, warn};
use rayon::prelude::*;

use core::fmt;

/// Chunk, section and sample tables keyed by [`spatial_hash_key`].
///
/// The chunk and section tables are derived data: [`SpatialHashIndex::rebuild`] clears and
/// rescans them from the arena every update cycle, so they always reflect the post-resize chunk
/// set. Sample records belong to callers and survive rebuilds; a sample whose chunk was
/// destroyed simply becomes unreachable through [`SpatialHashIndex::sample_at`] until the chunk
/// streams back in.
///
/// Lookups resolve a query position top-down. The position is snapped to the nearest chunk
/// center and the nearest section center; only when both levels are present is the sample table
/// consulted. This keeps stray positions (outside the streamed grid) from ever touching sample
/// state.
#[derive(Clone, Debug, Default)]
pub struct SpatialHashIndex<K> {
    chunks: SmallKeyHashMap<HashKey, ChunkId>,
    sections: SmallKeyHashMap<HashKey, Section>,
    section_to_chunk: SmallKeyHashMap<HashKey, HashKey>,
    sample_to_section: SmallKeyHashMap<HashKey, HashKey>,
    samples: SmallKeyHashMap<HashKey, SampleRecord<K>>,
    chunk_size: Point3f,
}

impl<K> SpatialHashIndex<K>
where
    K: Copy + Default + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            chunks: SmallKeyHashMap::default(),
            sections: SmallKeyHashMap::default(),
            section_to_chunk: SmallKeyHashMap::default(),
            sample_to_section: SmallKeyHashMap::default(),
            samples: SmallKeyHashMap::default(),
            chunk_size: Point3f::ZERO,
        }
    }

    /// The chunk size observed during the last rebuild.
    #[inline]
    pub fn chunk_size(&self) -> Point3f {
        self.chunk_size
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Clears and rescans the chunk and section tables from `arena`.
    ///
    /// Each chunk contributes one key (its truncated center) and `size.y / size.x` cubic
    /// sections stacked along Y. Per-chunk keys are computed on the rayon pool; the serial
    /// merge afterwards keeps the first writer on key collisions and reports the rest.
    pub fn rebuild(&mut self, arena: &ChunkArena) {
        self.chunks.clear();
        self.sections.clear();
        self.section_to_chunk.clear();

        let first = match arena.iter().next() {
            Some((_, record)) => *record,
            None => return,
        };
        self.chunk_size = first.size;
        let section_count = (first.size.y() / first.size.x()) as i32;

        let snapshot: Vec<(ChunkId, Point3f, Point3f)> = arena
            .iter()
            .map(|(id, record)| (id, record.center, record.size))
            .collect();

        let per_chunk: Vec<(HashKey, ChunkId, Vec<(HashKey, Section)>)> = snapshot
            .par_iter()
            .map(|&(id, center, size)| {
                let chunk_key = spatial_hash_key(center.trunc());
                let sections = (0..section_count)
                    .map(|j| {
                        let offset_y = ((j - section_count / 2) as f32) * size.x();
                        let section_center = center + Point3([0.0, offset_y, 0.0]);

                        (
                            spatial_hash_key(section_center.trunc()),
                            Section::cube(section_center, size.x()),
                        )
                    })
                    .collect();

                (chunk_key, id, sections)
            })
            .collect();

        for (chunk_key, id, sections) in per_chunk {
            if self.chunks.contains_key(&chunk_key) {
                warn!("chunk key {} already taken, keeping the first chunk", chunk_key);
            } else {
                self.chunks.insert(chunk_key, id);
            }

            for (section_key, section) in sections {
                if self.sections.contains_key(&section_key) {
                    warn!(
                        "section key {} already taken, keeping the first section",
                        section_key
                    );
                    continue;
                }
                self.sections.insert(section_key, section);
                self.section_to_chunk.insert(section_key, chunk_key);
            }
        }
    }

    /// Registers a sample at `position`. Returns whether it was stored.
    ///
    /// The position must resolve to a known chunk and a known section, and its quantized
    /// coordinate must be unoccupied. Rejections are logged no-ops.
    pub fn insert(&mut self, position: Point3f, kind: K) -> bool {
        let section_key = match self.resolve_section_key(position) {
            Some(key) => key,
            None => {
                debug!("no chunk or section for a sample at {:?}", position);

                return false;
            }
        };

        let sample_key = spatial_hash_key(position.trunc());
        if self.samples.contains_key(&sample_key) {
            debug!("{} is already in the spatial hash", sample_key);

            return false;
        }

        self.samples.insert(sample_key, SampleRecord { kind, position });
        self.sample_to_section.insert(sample_key, section_key);
        debug!("inserted {:?} at {:?}", kind, position);

        true
    }

    /// The sample registered at `position`, or a default-kind record carrying the query
    /// position when any resolution step misses.
    pub fn sample_at(&self, position: Point3f) -> SampleRecord<K> {
        let fallback = SampleRecord {
            kind: K::default(),
            position,
        };

        if self.resolve_section_key(position).is_none() {
            return fallback;
        }

        let sample_key = spatial_hash_key(position.trunc());
        match self.samples.get(&sample_key) {
            Some(sample) => *sample,
            None => fallback,
        }
    }

    /// The chunk whose truncated center matches the truncation of `position`.
    #[inline]
    pub fn chunk_at(&self, position: Point3f) -> Option<ChunkId> {
        self.chunks.get(&spatial_hash_key(position.trunc())).copied()
    }

    /// The section whose truncated center matches the truncation of `position`.
    #[inline]
    pub fn section_at(&self, position: Point3f) -> Option<Section> {
        self.sections.get(&spatial_hash_key(position.trunc())).copied()
    }

    /// The chunk owning the section at the given section key.
    #[inline]
    pub fn chunk_of_section(&self, section_key: HashKey) -> Option<ChunkId> {
        let chunk_key = self.section_to_chunk.get(&section_key)?;

        self.chunks.get(chunk_key).copied()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn samples(&self) -> impl Iterator<Item = &SampleRecord<K>> {
        self.samples.values()
    }

    /// Snaps `position` to the chunk and section lattices and returns the section key, or
    /// `None` when either level is absent from the tables.
    fn resolve_section_key(&self, position: Point3f) -> Option<HashKey> {
        let offset = half_cell_offset(self.chunk_size);

        let nearest_chunk = nearest_cell_center(self.chunk_size, position, offset);
        let chunk_key = spatial_hash_key(nearest_chunk.trunc());
        if !self.chunks.contains_key(&chunk_key) {
            return None;
        }

        let section_cell = Point3f::fill(self.chunk_size.x());
        let nearest_section = nearest_cell_center(section_cell, position, offset);
        let section_key = spatial_hash_key(nearest_section.trunc());
        if !self.sections.contains_key(&section_key) {
            return None;
        }

        Some(section_key)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use chunk_realm_grid::{ChunkGridController, WorldConfig};
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum BlockKind {
        Nothing,
        Stone,
        Grass,
    }

    impl Default for BlockKind {
        fn default() -> Self {
            BlockKind::Nothing
        }
    }

    fn built_index(radius: i32) -> (SpatialHashIndex<BlockKind>, ChunkGridController) {
        let config = WorldConfig {
            radius,
            ..Default::default()
        };
        let mut controller = ChunkGridController::new();
        controller.update(&config);

        let mut index = SpatialHashIndex::new();
        index.rebuild(controller.arena());

        (index, controller)
    }

    #[test]
    fn rebuild_registers_every_chunk_and_section() {
        let (index, _controller) = built_index(1);

        // 16x256x16 chunks split into 16 cubic sections each.
        assert_eq!(index.chunk_count(), 9);
        assert_eq!(index.section_count(), 9 * 16);
        assert_eq!(index.chunk_size(), Point3([16.0, 256.0, 16.0]));
    }

    #[test]
    fn chunk_and_section_lookup_at_their_centers() {
        let (index, controller) = built_index(1);

        let (id, record) = controller.arena().iter().next().map(|(i, r)| (i, *r)).unwrap();
        assert_eq!(index.chunk_at(record.center), Some(id));

        // The bottom section of that chunk sits 8 section edges below its center.
        let bottom = record.center - Point3([0.0, 128.0, 0.0]);
        let section = index.section_at(bottom).unwrap();
        assert_eq!(section.center, bottom);
        assert_eq!(section.size, Point3([16.0, 16.0, 16.0]));

        assert_eq!(index.chunk_at(Point3([9999.0, 0.0, 9999.0])), None);
    }

    #[test]
    fn section_keys_resolve_back_to_their_chunk() {
        let (index, controller) = built_index(0);

        let (id, record) = controller.arena().iter().next().map(|(i, r)| (i, *r)).unwrap();
        let section_key = spatial_hash_key(record.center.trunc());

        assert_eq!(index.chunk_of_section(section_key), Some(id));
    }

    #[test]
    fn insert_then_lookup_round_trips() {
        let (mut index, _controller) = built_index(1);
        let position = Point3([3.0, 40.0, -2.0]);

        assert!(index.insert(position, BlockKind::Stone));
        assert_eq!(index.sample_count(), 1);

        let sample = index.sample_at(position);
        assert_eq!(sample.kind, BlockKind::Stone);
        assert_eq!(sample.position, position);
    }

    #[test]
    fn duplicate_insert_keeps_the_first_kind() {
        let (mut index, _controller) = built_index(1);

        assert!(index.insert(Point3([3.0, 40.0, -2.0]), BlockKind::Stone));
        // Same quantized coordinate, different fraction.
        assert!(!index.insert(Point3([3.4, 40.9, -2.2]), BlockKind::Grass));

        assert_eq!(index.sample_count(), 1);
        assert_eq!(
            index.sample_at(Point3([3.0, 40.0, -2.0])).kind,
            BlockKind::Stone
        );
    }

    #[test]
    fn insert_outside_the_grid_is_rejected() {
        let (mut index, _controller) = built_index(1);

        assert!(!index.insert(Point3([1000.0, 0.0, 1000.0]), BlockKind::Stone));
        assert_eq!(index.sample_count(), 0);
    }

    #[test]
    fn insert_above_the_chunk_is_rejected() {
        let (mut index, _controller) = built_index(1);

        assert!(!index.insert(Point3([0.0, 400.0, 0.0]), BlockKind::Stone));
        assert_eq!(index.sample_count(), 0);
    }

    #[test]
    fn missing_sample_yields_the_default_kind() {
        let (index, _controller) = built_index(1);

        let sample = index.sample_at(Point3([1.0, 2.0, 3.0]));
        assert_eq!(sample.kind, BlockKind::Nothing);
        assert_eq!(sample.position, Point3([1.0, 2.0, 3.0]));
    }

    #[test]
    fn samples_survive_a_rebuild() {
        let (mut index, controller) = built_index(1);
        let position = Point3([3.0, 40.0, -2.0]);

        index.insert(position, BlockKind::Grass);
        index.rebuild(controller.arena());

        assert_eq!(index.sample_count(), 1);
        assert_eq!(index.sample_at(position).kind, BlockKind::Grass);
    }

    #[test]
    fn random_in_grid_positions_round_trip() {
        let (mut index, _controller) = built_index(1);
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let position = Point3([
                rng.gen_range(-24..24) as f32 + 0.25,
                rng.gen_range(-128..119) as f32 + 0.25,
                rng.gen_range(-24..24) as f32 + 0.25,
            ]);
            if !seen.insert(position.trunc()) {
                continue;
            }

            assert!(index.insert(position, BlockKind::Stone));
            assert_eq!(index.sample_at(position).kind, BlockKind::Stone);
        }
    }
}
