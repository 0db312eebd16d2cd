use crate::SmallKeyHashMap;

use chunk_realm_core::{BoundingBox, Point3f, PrecomputedRay};
use chunk_realm_grid::ChunkArena;
use rayon::prelude::*;

/// Broad-phase candidate query: which chunks does each segment pass through?
///
/// Segment `i` runs from `starts[i]` to `ends[i]`. The result maps each segment index to the
/// centers of the chunks whose bounding box the segment enters, in arena order. Unordered
/// candidates, not a walkable path; narrow-phase filtering is the caller's business.
///
/// Ray setup fans out per segment and box testing fans out per chunk, with a serial merge in
/// between, so the cost is `segments * chunks` slab tests spread over the rayon pool.
pub fn find_path(
    arena: &ChunkArena,
    starts: &[Point3f],
    ends: &[Point3f],
) -> SmallKeyHashMap<u32, Vec<Point3f>> {
    let rays: Vec<(PrecomputedRay, f32)> = starts
        .par_iter()
        .zip(ends.par_iter())
        .map(|(start, end)| (PrecomputedRay::between(*start, *end), start.distance(end)))
        .collect();

    let boxes: Vec<BoundingBox> = arena.iter().map(|(_, record)| record.bounding_box()).collect();

    let hits: Vec<Vec<(u32, Point3f)>> = boxes
        .par_iter()
        .map(|b| {
            rays.iter()
                .enumerate()
                .filter_map(|(ray_index, (ray, length))| match b.cast_ray(ray) {
                    Some(t) if t <= *length => Some((ray_index as u32, b.center)),
                    _ => None,
                })
                .collect()
        })
        .collect();

    let mut paths: SmallKeyHashMap<u32, Vec<Point3f>> = SmallKeyHashMap::default();
    for (ray_index, center) in hits.into_iter().flatten() {
        paths.entry(ray_index).or_insert_with(Vec::new).push(center);
    }

    paths
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

    use chunk_realm_core::Point3;
    use chunk_realm_grid::{ChunkGridController, WorldConfig};

    fn streamed_arena(radius: i32) -> ChunkGridController {
        let config = WorldConfig {
            radius,
            ..Default::default()
        };
        let mut controller = ChunkGridController::new();
        controller.update(&config);

        controller
    }

    #[test]
    fn segment_collects_the_chunks_it_crosses() {
        let controller = streamed_arena(1);

        // Eastward through the middle row: cells (0, 0) and (1, 0), nothing else.
        let starts = [Point3([0.0, 1.0, 1.0])];
        let ends = [Point3([30.0, 1.0, 1.0])];

        let paths = find_path(controller.arena(), &starts, &ends);
        let centers = &paths[&0];

        assert_eq!(centers.len(), 2);
        assert!(centers.contains(&Point3([7.5, 0.0, 7.5])));
        assert!(centers.contains(&Point3([23.5, 0.0, 7.5])));
    }

    #[test]
    fn segment_length_bounds_the_candidates() {
        let controller = streamed_arena(1);

        // Too short to reach the neighbor cell at x > 15.5.
        let starts = [Point3([0.0, 1.0, 1.0])];
        let ends = [Point3([10.0, 1.0, 1.0])];

        let paths = find_path(controller.arena(), &starts, &ends);

        assert_eq!(paths[&0], vec![Point3([7.5, 0.0, 7.5])]);
    }

    #[test]
    fn segment_missing_every_chunk_yields_no_entry() {
        let controller = streamed_arena(1);

        // High above the grid, pointing up.
        let starts = [Point3([0.0, 200.0, 0.0])];
        let ends = [Point3([0.0, 300.0, 0.0])];

        let paths = find_path(controller.arena(), &starts, &ends);

        assert!(paths.get(&0).is_none());
    }

    #[test]
    fn segments_are_keyed_independently() {
        let controller = streamed_arena(1);

        let starts = [Point3([0.0, 1.0, 1.0]), Point3([0.0, 200.0, 0.0])];
        let ends = [Point3([10.0, 1.0, 1.0]), Point3([0.0, 300.0, 0.0])];

        let paths = find_path(controller.arena(), &starts, &ends);

        assert_eq!(paths.len(), 1);
        assert!(paths.get(&0).is_some());
        assert!(paths.get(&1).is_none());
    }
}
