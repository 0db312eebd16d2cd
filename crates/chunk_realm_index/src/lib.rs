//! Multi-level spatial hashing over a streamed chunk set:
//! - `spatial_hash_key`: the shared quantize-and-hash function
//! - `SpatialHashIndex`: chunk, section and sample tables rebuilt from a `ChunkArena`, with
//!   snap-resolved sample insertion and lookup
//! - `find_path`: broad-phase segment-vs-chunk candidate query
//!
//! The hash is not collision free. Keys of different levels (chunks, sections, samples) live in
//! separate tables, but two positions that quantize to the same integer coordinate share a key,
//! and unrelated coordinates can alias through the hash itself. Collisions keep the first entry
//! and are reported, never silently overwritten.

pub mod broad_phase;
pub mod hash;
pub mod index;
pub mod section;

pub use broad_phase::find_path;
pub use hash::{spatial_hash_key, HashKey};
pub use index::SpatialHashIndex;
pub use section::{SampleRecord, Section};

// Hash types to use for small keys like `HashKey`.
pub type SmallKeyHashMap<K, V> = ahash::AHashMap<K, V>;

pub mod prelude {
    pub use super::{
        find_path, spatial_hash_key, HashKey, SampleRecord, Section, SmallKeyHashMap,
        SpatialHashIndex,
    };
}
