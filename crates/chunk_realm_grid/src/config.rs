use chunk_realm_core::{Point3, Point3f};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The desired shape of the streamed grid. Owned by the caller and mutated freely; the
/// controller diffs it against the radius it last acted on.
///
/// `radius` counts chunks on each side of the center chunk, so the live grid is a square of
/// side `2 * radius + 1`. `chunk_size` is shared by every chunk; the vertical extent
/// (`chunk_size.y`) is expected to be a multiple of the horizontal extent (`chunk_size.x`) so
/// that chunks split evenly into cubic sections.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    pub radius: i32,
    pub world_center: Point3f,
    pub chunk_size: Point3f,
}

impl WorldConfig {
    /// Side length of the grid, in chunks.
    #[inline]
    pub fn grid_length(&self) -> i32 {
        2 * self.radius + 1
    }

    /// Number of chunks in the full grid.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        let length = self.grid_length();

        (length * length) as usize
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            radius: 0,
            world_center: Point3f::ZERO,
            chunk_size: Point3([16.0, 256.0, 16.0]),
        }
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

    #[test]
    fn grid_counts() {
        let config = WorldConfig {
            radius: 2,
            ..Default::default()
        };

        assert_eq!(config.grid_length(), 5);
        assert_eq!(config.chunk_count(), 25);

        let just_center = WorldConfig::default();
        assert_eq!(just_center.chunk_count(), 1);
    }
}
