use bytemuck::{Pod, Zeroable};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num::Signed;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-dimensional point, which is just a primitive array of scalar type `T`.
///
/// ```
/// use chunk_realm_core::Point3;
///
/// let p = Point3([1, 2, 3]);
/// let q = Point3([4, 5, 6]);
///
/// assert_eq!(p + q, Point3([5, 7, 9]));
/// assert_eq!(q - p, Point3([3, 3, 3]));
/// assert_eq!(p * 2, Point3([2, 4, 6]));
/// ```
///
/// There is a partial order defined on points which says that a point A is greater than a
/// point B if and only if all of the components of A are greater than those of B. This makes
/// containment checks against a box's corners read naturally:
///
/// ```
/// use chunk_realm_core::Point3;
///
/// let min = Point3([0, 0, 0]);
/// let max = Point3([3, 3, 3]);
///
/// let p = Point3([0, 1, 2]);
/// assert!(min <= p && p <= max);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(transparent)]
pub struct Point3<T>(pub [T; 3]);

/// A 3-dimensional point with scalar type `f32`.
pub type Point3f = Point3<f32>;
/// A 3-dimensional point with scalar type `i32`.
pub type Point3i = Point3<i32>;

unsafe impl<T: Zeroable> Zeroable for Point3<T> {}
unsafe impl<T: Pod> Pod for Point3<T> {}

impl<T> Point3<T> {
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.0[2]
    }
}

impl<T> Point3<T>
where
    T: Copy,
{
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// A point with all three components equal to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Point3([value; 3])
    }

    /// The point after applying `f` component-wise.
    #[inline]
    pub fn map_components(&self, f: impl Fn(T) -> T) -> Self {
        Point3([f(self.x()), f(self.y()), f(self.z())])
    }

    /// The horizontal components, dropping Y.
    #[inline]
    pub fn xz(&self) -> Point2<T> {
        Point2([self.x(), self.z()])
    }
}

impl<T> Point3<T>
where
    T: Copy + PartialOrd,
{
    /// The component-wise maximum, i.e. the least upper bound in the lattice of points.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        Point3([
            max_scalar(self.x(), other.x()),
            max_scalar(self.y(), other.y()),
            max_scalar(self.z(), other.z()),
        ])
    }

    /// The component-wise minimum, i.e. the greatest lower bound in the lattice of points.
    #[inline]
    pub fn meet(&self, other: &Self) -> Self {
        Point3([
            min_scalar(self.x(), other.x()),
            min_scalar(self.y(), other.y()),
            min_scalar(self.z(), other.z()),
        ])
    }

    /// The largest component.
    #[inline]
    pub fn max_component(&self) -> T {
        max_scalar(max_scalar(self.x(), self.y()), self.z())
    }

    /// The smallest component.
    #[inline]
    pub fn min_component(&self) -> T {
        min_scalar(min_scalar(self.x(), self.y()), self.z())
    }

    /// The point clamped to the box `[min_bound, max_bound]` component-wise.
    #[inline]
    pub fn clamp(&self, min_bound: &Self, max_bound: &Self) -> Self {
        self.join(min_bound).meet(max_bound)
    }
}

impl<T> Point3<T>
where
    T: Copy + Signed,
{
    /// A point where each component is the absolute value of the input component.
    #[inline]
    pub fn abs(&self) -> Self {
        self.map_components(|c| c.abs())
    }

    /// A point where each component is `-1`, `0`, or `+1`, matching the sign of the input
    /// component.
    #[inline]
    pub fn signum(&self) -> Self {
        self.map_components(|c| c.signum())
    }
}

impl<T> Point3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
}

impl Point3f {
    pub const ZERO: Self = Point3([0.0; 3]);
    pub const ONES: Self = Point3([1.0; 3]);

    #[inline]
    pub fn round(&self) -> Self {
        self.map_components(|c| c.round())
    }

    #[inline]
    pub fn floor(&self) -> Self {
        self.map_components(|c| c.floor())
    }

    /// The reciprocal of each component.
    #[inline]
    pub fn recip(&self) -> Self {
        self.map_components(|c| 1.0 / c)
    }

    /// Quantizes to the integer lattice by truncating each component toward zero.
    ///
    /// This is the quantization used for spatial hash keys, so it must stay truncation (not
    /// rounding or flooring).
    #[inline]
    pub fn trunc(&self) -> Point3i {
        Point3([self.x() as i32, self.y() as i32, self.z() as i32])
    }

    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*self - *other).norm_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }
}

impl Point3i {
    pub const ZERO: Self = Point3([0; 3]);
    pub const ONES: Self = Point3([1; 3]);
}

impl From<Point3i> for Point3f {
    #[inline]
    fn from(p: Point3i) -> Self {
        Point3([p.x() as f32, p.y() as f32, p.z() as f32])
    }
}

impl<T> Add for Point3<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point3([self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z()])
    }
}

impl<T> Sub for Point3<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point3([self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z()])
    }
}

impl<T> Mul<T> for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map_components(|c| c * rhs)
    }
}

impl<T> Mul for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Point3([self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z()])
    }
}

impl<T> Div<T> for Point3<T>
where
    T: Copy + Div<Output = T>,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        self.map_components(|c| c / rhs)
    }
}

impl<T> Div for Point3<T>
where
    T: Copy + Div<Output = T>,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Point3([self.x() / rhs.x(), self.y() / rhs.y(), self.z() / rhs.z()])
    }
}

impl<T> Neg for Point3<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map_components(|c| -c)
    }
}

impl<T> AddAssign for Point3<T>
where
    T: Copy + Add<Output = T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign for Point3<T>
where
    T: Copy + Sub<Output = T>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> MulAssign<T> for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> DivAssign<T> for Point3<T>
where
    T: Copy + Div<Output = T>,
{
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T> PartialOrd for Point3<T>
where
    T: Copy + PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.x() < other.x() && self.y() < other.y() && self.z() < other.z()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y() && self.z() <= other.z()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.x() > other.x() && self.y() > other.y() && self.z() > other.z()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.x() >= other.x() && self.y() >= other.y() && self.z() >= other.z()
    }
}

#[inline]
fn max_scalar<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

#[inline]
fn min_scalar<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// A 2-dimensional point, used for horizontal (X, Z) grid offsets.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(transparent)]
pub struct Point2<T>(pub [T; 2]);

/// A 2-dimensional point with scalar type `i32`.
pub type Point2i = Point2<i32>;

unsafe impl<T: Zeroable> Zeroable for Point2<T> {}
unsafe impl<T: Pod> Pod for Point2<T> {}

impl<T> Point2<T>
where
    T: Copy,
{
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T> Point2<T>
where
    T: Copy + Signed,
{
    #[inline]
    pub fn abs(&self) -> Self {
        Point2([self.x().abs(), self.y().abs()])
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
