use crate::{Scalar, Vec2, Vec4};

/// A 3-dimensional vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// The x component.
    pub x: Scalar,
    /// The y component.
    pub y: Scalar,
    /// The z component.
    pub z: Scalar,
}

impl_vec!(Vec3, 3, { x, y, z }, (Scalar, Scalar, Scalar));

impl Vec3 {
    /// A unit vector pointing along the positive X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// A unit vector pointing along the positive Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// A unit vector pointing along the positive Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Computes the cross product of `self` and `rhs`.
    ///
    /// Right-handed: `Vec3::X.cross(Vec3::Y) == Vec3::Z`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let a_yzx = Self::new(self.y, self.z, self.x);
        let a_zxy = Self::new(self.z, self.x, self.y);
        let b_yzx = Self::new(rhs.y, rhs.z, rhs.x);
        let b_zxy = Self::new(rhs.z, rhs.x, rhs.y);
        a_yzx.mul(b_zxy).sub(a_zxy.mul(b_yzx))
    }

    /// Rotates `self` by the quaternion `q`.
    ///
    /// `q` is expected to be normalized; `x`, `y`, `z` hold the imaginary part
    /// and `w` the real part.
    #[inline]
    pub fn rot(self, q: Vec4) -> Self {
        let qv = q.truncate();
        let t = qv.cross(self).mulf(2.0);
        self.add(t.mulf(q.w).add(qv.cross(t)))
    }

    /// Creates a 4D vector from `self` and the given `w` value.
    #[inline]
    pub const fn extend(self, w: Scalar) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Creates a 2D vector from the `x` and `y` components of `self`,
    /// discarding `z`.
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
