use crate::{Scalar, Vec2};

/// A line segment between two points in 2D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Seg2 {
    /// The start point.
    pub orig: Vec2,
    /// The end point.
    pub dest: Vec2,
}

impl Seg2 {
    /// Creates a segment from `orig` to `dest`.
    #[inline]
    pub const fn new(orig: Vec2, dest: Vec2) -> Self {
        Self { orig, dest }
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(&self) -> Scalar {
        self.dest.sub(self.orig).mag()
    }

    /// The point halfway between the endpoints.
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        self.orig.avg(self.dest)
    }

    /// Unit vector from `orig` towards `dest`. NaN for a degenerate segment.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.dest.sub(self.orig).norm()
    }
}

/// A 2D axis-aligned box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Box2 {
    /// The minimum, conventionally bottom-left, corner.
    pub min: Vec2,
    /// The maximum, conventionally top-right, corner.
    pub max: Vec2,
}

impl Box2 {
    /// Creates a box from its corners.
    ///
    /// The corners are stored as given. Queries assume `min <= max` on every
    /// axis; an inverted box contains no points.
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The center of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min.avg(self.max)
    }

    /// Half the extent of the box along each axis.
    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.max.sub(self.min).divf(2.0)
    }

    /// Whether `point` lies inside the box or on its boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
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

/// A circle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Sph2 {
    /// The center.
    pub pos: Vec2,
    /// The radius.
    pub radius: Scalar,
}

impl Sph2 {
    /// Creates a circle.
    ///
    /// The radius is stored as given and is expected to be non-negative.
    #[inline]
    pub fn new(pos: Vec2, radius: Scalar) -> Self {
        Self { pos, radius }
    }

    /// Whether `point` lies inside the circle or on its boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = point.sub(self.pos);
        d.dot(d) <= self.radius * self.radius
    }

    /// Whether the two circles overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let d = other.pos.sub(self.pos);
        let r = self.radius + other.radius;
        d.dot(d) <= r * r
    }
}
