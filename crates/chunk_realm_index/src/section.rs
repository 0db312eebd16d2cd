use chunk_realm_core::{BoundingBox, Point3f};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertical slice of a chunk: a cube whose edge is the chunk's horizontal extent.
///
/// Sections are derived from chunk bounds at index-rebuild time and never persisted.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub center: Point3f,
    pub size: Point3f,
}

impl Section {
    #[inline]
    pub fn cube(center: Point3f, edge: f32) -> Self {
        Self {
            center,
            size: Point3f::fill(edge),
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.center, self.size)
    }
}

/// A point sample registered by a caller, e.g. a block occupying a voxel.
///
/// At most one sample exists per quantized position; the first writer wins.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRecord<K> {
    pub kind: K,
    pub position: Point3f,
}
