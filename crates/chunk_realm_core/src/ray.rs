use crate::Point3f;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ray whose reciprocal direction is computed once at construction.
///
/// The slab test against an axis-aligned box needs one division per axis. Precomputing
/// `1 / direction` turns every subsequent [`BoundingBox::cast_ray`](crate::BoundingBox::cast_ray)
/// into pure multiplies, which matters when the same ray is tested against many boxes.
///
/// The stored `direction` is always unit length.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecomputedRay {
    pub origin: Point3f,
    pub direction: Point3f,
    pub inverse_direction: Point3f,
}

impl PrecomputedRay {
    /// Constructs a ray from `origin` along `direction`. The direction is normalized, and the
    /// reciprocal is taken of the normalized direction.
    ///
    /// Axes where the direction is zero get an infinite reciprocal, which the slab test handles
    /// without branching.
    #[inline]
    pub fn new(origin: Point3f, direction: Point3f) -> Self {
        let direction = direction.normalized();

        Self {
            origin,
            direction,
            inverse_direction: direction.recip(),
        }
    }

    /// Constructs the ray from `start` toward `end`.
    ///
    /// The ray itself is unbounded. Callers that want segment semantics compare the hit
    /// parameter against `start.distance(&end)` themselves.
    #[inline]
    pub fn between(start: Point3f, end: Point3f) -> Self {
        Self::new(start, end - start)
    }

    /// The same ray, restarted from a different origin.
    #[inline]
    pub fn with_origin(&self, origin: Point3f) -> Self {
        Self {
            origin,
            direction: self.direction,
            inverse_direction: self.inverse_direction,
        }
    }

    /// The point at parameter `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point3f {
        self.origin + self.direction * t
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
    use crate::Point3;

    #[test]
    fn direction_is_normalized() {
        let ray = PrecomputedRay::new(Point3f::ZERO, Point3([0.0, 3.0, 4.0]));

        assert_eq!(ray.direction, Point3([0.0, 0.6, 0.8]));
        assert!((ray.direction.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn inverse_is_reciprocal_of_normalized() {
        let ray = PrecomputedRay::new(Point3f::ZERO, Point3([2.0, 0.0, 0.0]));

        assert_eq!(ray.inverse_direction.x(), 1.0);
        assert!(ray.inverse_direction.y().is_infinite());
        assert!(ray.inverse_direction.z().is_infinite());
    }

    #[test]
    fn between_points_at_end() {
        let start = Point3([1.0, 2.0, 3.0]);
        let end = Point3([1.0, 2.0, 8.0]);
        let ray = PrecomputedRay::between(start, end);

        assert_eq!(ray.origin, start);
        assert_eq!(ray.point_at(start.distance(&end)), end);
    }

    #[test]
    fn with_origin_keeps_direction() {
        let ray = PrecomputedRay::new(Point3f::ZERO, Point3([1.0, 0.0, 0.0]));
        let moved = ray.with_origin(Point3([5.0, 5.0, 5.0]));

        assert_eq!(moved.origin, Point3([5.0, 5.0, 5.0]));
        assert_eq!(moved.direction, ray.direction);
        assert_eq!(moved.inverse_direction, ray.inverse_direction);
    }
}
