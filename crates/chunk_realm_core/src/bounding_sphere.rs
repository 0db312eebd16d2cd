use crate::{BoundingBox, Point3f, PrecomputedRay};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ball stored as a center and radius.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Point3f,
    pub radius: f32,
}

impl BoundingSphere {
    #[inline]
    pub fn new(center: Point3f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// `true` iff the radius is positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    /// `true` iff `p` lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: &Point3f) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }

    /// `true` iff `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_sphere(&self, other: &BoundingSphere) -> bool {
        self.center.distance(&other.center) + other.radius <= self.radius
    }

    /// `true` iff the box lies entirely inside `self`, tested at all eight corners.
    #[inline]
    pub fn contains_box(&self, b: &BoundingBox) -> bool {
        let min = b.min();
        let max = b.max();

        for &x in &[min.x(), max.x()] {
            for &y in &[min.y(), max.y()] {
                for &z in &[min.z(), max.z()] {
                    if !self.contains_point(&crate::Point3([x, y, z])) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// `true` iff the balls share any point, boundaries included.
    #[inline]
    pub fn overlaps(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;

        self.center.distance_squared(&other.center) <= reach * reach
    }

    /// `true` iff the ball and the box share any point.
    #[inline]
    pub fn overlaps_box(&self, b: &BoundingBox) -> bool {
        b.overlaps_sphere(self)
    }

    /// How far outside the sphere `p` sits, as the clamped power of the point: `d^2 - r^2`,
    /// floored at zero for interior points.
    #[inline]
    pub fn distance_squared(&self, p: &Point3f) -> f32 {
        (self.center.distance_squared(p) - self.radius * self.radius).max(0.0)
    }

    /// Nearest intersection of `ray` with the sphere surface, or `None` on a miss.
    ///
    /// Solves the quadratic `|o + t d - c|^2 = r^2` for the smallest positive root. A ray
    /// starting inside the sphere hits where it exits.
    #[inline]
    pub fn cast_ray(&self, ray: &PrecomputedRay) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = (-b - sqrt_d) / (2.0 * a);
        let t_far = (-b + sqrt_d) / (2.0 * a);

        if t_near > 0.0 {
            Some(t_near)
        } else if t_far > 0.0 {
            Some(t_far)
        } else {
            None
        }
    }

    /// Like [`BoundingSphere::cast_ray`], but returns the hit point.
    #[inline]
    pub fn cast_ray_at(&self, ray: &PrecomputedRay) -> Option<Point3f> {
        self.cast_ray(ray).map(|t| ray.point_at(t))
    }
}

impl From<BoundingBox> for BoundingSphere {
    /// The smallest ball enclosing the box.
    #[inline]
    fn from(b: BoundingBox) -> Self {
        Self {
            center: b.center,
            radius: b.size.norm() * 0.5,
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
    use crate::Point3;

    #[test]
    fn contains_point_includes_boundary() {
        let s = BoundingSphere::new(Point3f::ZERO, 1.0);

        assert!(s.contains_point(&Point3f::ZERO));
        assert!(s.contains_point(&Point3([1.0, 0.0, 0.0])));
        assert!(!s.contains_point(&Point3([1.01, 0.0, 0.0])));
    }

    #[test]
    fn sphere_overlap_and_containment() {
        let big = BoundingSphere::new(Point3f::ZERO, 2.0);
        let small = BoundingSphere::new(Point3([1.0, 0.0, 0.0]), 0.5);
        let outside = BoundingSphere::new(Point3([5.0, 0.0, 0.0]), 1.0);

        assert!(big.overlaps(&small));
        assert!(big.contains_sphere(&small));
        assert!(!big.overlaps(&outside));
        assert!(!small.contains_sphere(&big));
    }

    #[test]
    fn box_containment_tests_corners() {
        let s = BoundingSphere::new(Point3f::ZERO, 1.0);
        let inscribed = BoundingBox::new(Point3f::ZERO, Point3::fill(1.0));
        let too_big = BoundingBox::new(Point3f::ZERO, Point3::fill(1.5));

        assert!(s.contains_box(&inscribed));
        assert!(!s.contains_box(&too_big));
    }

    #[test]
    fn enclosing_sphere_reaches_corners() {
        let b = BoundingBox::new(Point3([1.0, 2.0, 3.0]), Point3([2.0, 4.0, 4.0]));
        let s = BoundingSphere::from(b);

        assert_eq!(s.center, b.center);
        assert_eq!(s.radius, 3.0);
        assert!(s.contains_point(&b.max()));
        assert!(s.contains_point(&b.min()));
    }

    #[test]
    fn ray_toward_sphere_hits_near_side() {
        let s = BoundingSphere::new(Point3f::ZERO, 1.0);
        let ray = PrecomputedRay::new(Point3([5.0, 0.0, 0.0]), Point3([-1.0, 0.0, 0.0]));

        assert_eq!(s.cast_ray(&ray), Some(4.0));
        assert_eq!(s.cast_ray_at(&ray), Some(Point3([1.0, 0.0, 0.0])));
    }

    #[test]
    fn ray_away_from_sphere_misses() {
        let s = BoundingSphere::new(Point3f::ZERO, 1.0);
        let ray = PrecomputedRay::new(Point3([5.0, 0.0, 0.0]), Point3([1.0, 0.0, 0.0]));

        assert_eq!(s.cast_ray(&ray), None);
    }

    #[test]
    fn ray_from_inside_hits_exit() {
        let s = BoundingSphere::new(Point3f::ZERO, 1.0);
        let ray = PrecomputedRay::new(Point3f::ZERO, Point3([0.0, 0.0, 1.0]));

        assert_eq!(s.cast_ray(&ray), Some(1.0));
    }
}
