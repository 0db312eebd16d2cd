//! Geometry primitives for radius-streamed chunk grids:
//! - `Point3`: a 3-dimensional point, most importantly `Point3f` and `Point3i`
//! - `BoundingBox` / `BoundingSphere`: allocation-free overlap, containment and ray
//!   intersection tests
//! - `PrecomputedRay`: a ray with its reciprocal direction computed once, so many
//!   intersection tests share the same divisions
//! - `coords`: alignment between continuous world positions and the chunk lattice

pub mod bounding_box;
pub mod bounding_sphere;
pub mod coords;
pub mod point;
pub mod ray;

pub use bounding_box::BoundingBox;
pub use bounding_sphere::BoundingSphere;
pub use coords::{cell_min_corner, delinearize_in_chunk, half_cell_offset, nearest_cell_center};
pub use point::{Point2, Point2i, Point3, Point3f, Point3i};
pub use ray::PrecomputedRay;

pub mod prelude {
    pub use super::{
        cell_min_corner, delinearize_in_chunk, half_cell_offset, nearest_cell_center,
        BoundingBox, BoundingSphere, Point2, Point2i, Point3, Point3f, Point3i, PrecomputedRay,
    };
}
