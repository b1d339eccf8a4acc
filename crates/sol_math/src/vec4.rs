use crate::{Scalar, Vec2, Vec3};

/// A 4-dimensional vector.
///
/// Also used as a quaternion: `x`, `y`, `z` hold the imaginary part and `w`
/// the real part. See [`convert`](crate::convert) for axis-angle conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    /// The x component.
    pub x: Scalar,
    /// The y component.
    pub y: Scalar,
    /// The z component.
    pub z: Scalar,
    /// The w component.
    pub w: Scalar,
}

impl_vec!(Vec4, 4, { x, y, z, w }, (Scalar, Scalar, Scalar, Scalar));

impl Vec4 {
    /// A unit vector pointing along the positive X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// A unit vector pointing along the positive Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// A unit vector pointing along the positive Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// A unit vector pointing along the positive W axis. As a quaternion this
    /// is the identity rotation.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a 3D vector from the `x`, `y` and `z` components of `self`,
    /// discarding `w`.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Creates a 2D vector from the `x` and `y` components of `self`.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
