use crate::{BoundingSphere, Point3f, PrecomputedRay};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box stored as a center and full side lengths.
///
/// All queries are allocation-free. A box with any non-positive side length is degenerate; see
/// [`BoundingBox::is_valid`].
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub center: Point3f,
    pub size: Point3f,
}

impl BoundingBox {
    #[inline]
    pub fn new(center: Point3f, size: Point3f) -> Self {
        Self { center, size }
    }

    /// Constructs the box spanning `min` to `max`. The corners may be given in any order.
    #[inline]
    pub fn from_min_max(min: Point3f, max: Point3f) -> Self {
        let lo = min.meet(&max);
        let hi = min.join(&max);

        Self {
            center: (lo + hi) * 0.5,
            size: hi - lo,
        }
    }

    /// Half of the side lengths.
    #[inline]
    pub fn extents(&self) -> Point3f {
        self.size * 0.5
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn min(&self) -> Point3f {
        self.center - self.extents()
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn max(&self) -> Point3f {
        self.center + self.extents()
    }

    /// `true` iff `max >= min` on every axis. Zero-size boxes are valid, negative sizes are
    /// not.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.size >= Point3f::ZERO
    }

    /// `true` iff `p` lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: &Point3f) -> bool {
        *p >= self.min() && *p <= self.max()
    }

    /// `true` iff `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(&other.min()) && self.contains_point(&other.max())
    }

    /// `true` iff the ball lies entirely inside `self`.
    ///
    /// The center must be inside, and the smallest distance from the center to any face must be
    /// at least the radius.
    #[inline]
    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> bool {
        if !self.contains_point(&sphere.center) {
            return false;
        }

        let to_min = (sphere.center - self.min()).abs();
        let to_max = (self.max() - sphere.center).abs();

        to_min.meet(&to_max).min_component() >= sphere.radius
    }

    /// `true` iff the boxes share any point, boundaries included.
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.extents() + other.extents();

        d <= reach
    }

    /// `true` iff the box and the ball share any point.
    #[inline]
    pub fn overlaps_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.distance_squared(&sphere.center) <= sphere.radius * sphere.radius
    }

    /// The point of the box closest to `p`. Returns `p` itself when it is inside.
    #[inline]
    pub fn closest_point(&self, p: &Point3f) -> Point3f {
        p.clamp(&self.min(), &self.max())
    }

    /// Squared distance from `p` to the box surface, zero when `p` is inside.
    #[inline]
    pub fn distance_squared(&self, p: &Point3f) -> f32 {
        self.closest_point(p).distance_squared(p)
    }

    /// Slab test against `ray`. Returns the entry parameter, or `None` on a miss.
    ///
    /// The entry parameter is clamped to zero, so a ray starting inside the box reports a hit at
    /// `t = 0`. Hits behind the origin are misses.
    #[inline]
    pub fn cast_ray(&self, ray: &PrecomputedRay) -> Option<f32> {
        let t1 = (self.min() - ray.origin) * ray.inverse_direction;
        let t2 = (self.max() - ray.origin) * ray.inverse_direction;

        let t_min = t1.meet(&t2).max_component().max(0.0);
        let t_max = t1.join(&t2).min_component();

        if t_min <= t_max {
            Some(t_min)
        } else {
            None
        }
    }

    /// Like [`BoundingBox::cast_ray`], but returns the entry point.
    #[inline]
    pub fn cast_ray_at(&self, ray: &PrecomputedRay) -> Option<Point3f> {
        self.cast_ray(ray).map(|t| ray.point_at(t))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
