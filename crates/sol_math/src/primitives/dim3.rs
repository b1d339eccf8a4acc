use crate::{Scalar, Vec3};

/// A line segment between two points in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Seg3 {
    /// The start point.
    pub orig: Vec3,
    /// The end point.
    pub dest: Vec3,
}

impl Seg3 {
    /// Creates a segment from `orig` to `dest`.
    #[inline]
    pub const fn new(orig: Vec3, dest: Vec3) -> Self {
        Self { orig, dest }
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(&self) -> Scalar {
        self.dest.sub(self.orig).mag()
    }

    /// The point halfway between the endpoints.
    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        self.orig.avg(self.dest)
    }

    /// Unit vector from `orig` towards `dest`. NaN for a degenerate segment.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.dest.sub(self.orig).norm()
    }
}

/// A 3D axis-aligned box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Box3 {
    /// The minimum corner.
    pub min: Vec3,
    /// The maximum corner.
    pub max: Vec3,
}

impl Box3 {
    /// Creates a box from its corners.
    ///
    /// The corners are stored as given. Queries assume `min <= max` on every
    /// axis; an inverted box contains no points.
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.min.avg(self.max)
    }

    /// Half the extent of the box along each axis.
    #[inline]
    pub fn half_size(&self) -> Vec3 {
        self.max.sub(self.min).divf(2.0)
    }

    /// Whether `point` lies inside the box or on its boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    /// The smallest box containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// A sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Sph3 {
    /// The center.
    pub pos: Vec3,
    /// The radius.
    pub radius: Scalar,
}

impl Sph3 {
    /// Creates a sphere.
    ///
    /// The radius is stored as given and is expected to be non-negative.
    #[inline]
    pub fn new(pos: Vec3, radius: Scalar) -> Self {
        Self { pos, radius }
    }

    /// Whether `point` lies inside the sphere or on its boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let d = point.sub(self.pos);
        d.dot(d) <= self.radius * self.radius
    }

    /// Whether the two spheres overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let d = other.pos.sub(self.pos);
        let r = self.radius + other.radius;
        d.dot(d) <= r * r
    }
}
