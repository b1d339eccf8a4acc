use crate::{ops, Scalar, Vec3, Vec4};

/// A 2-dimensional vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The x component.
    pub x: Scalar,
    /// The y component.
    pub y: Scalar,
}

impl_vec!(Vec2, 2, { x, y }, (Scalar, Scalar));

impl Vec2 {
    /// A unit vector pointing along the positive X axis.
    pub const X: Self = Self::new(1.0, 0.0);

    /// A unit vector pointing along the positive Y axis.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// The z component of the 3D cross product of `self` and `rhs` extended
    /// with `z = 0`, `self.x * rhs.y - self.y * rhs.x`.
    ///
    /// Positive when `rhs` lies counterclockwise from `self`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Scalar {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotates `self` counterclockwise by `radians`.
    ///
    /// ```
    /// # use sol_math::Vec2;
    /// let r = Vec2::X.rot(core::f64::consts::FRAC_PI_2 as _);
    /// assert!(r.x.abs() < 1e-6 && (r.y - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn rot(self, radians: Scalar) -> Self {
        let (sin, cos) = ops::sin_cos(radians);
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    /// Creates a 3D vector from `self` and the given `z` value.
    #[inline]
    pub const fn extend(self, z: Scalar) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    /// Creates a 4D vector from `self` and the given `z` and `w` values.
    #[inline]
    pub const fn extend2(self, z: Scalar, w: Scalar) -> Vec4 {
        Vec4::new(self.x, self.y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PI;

    #[test]
    fn construction() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!((v.x, v.y), (1.0, 2.0));
        assert_eq!((v[0], v[1]), (1.0, 2.0));
        assert_eq!(Vec2::splat(3.0), Vec2::new(3.0, 3.0));
        assert_eq!(Vec2::zero(), Vec2::ZERO);
        assert_eq!(Vec2::default(), Vec2::ZERO);
        assert_eq!(Vec2::from([4.0, 5.0]), Vec2::new(4.0, 5.0));
        assert_eq!(<(Scalar, Scalar)>::from(Vec2::new(6.0, 7.0)), (6.0, 7.0));
    }

    #[test]
    fn index_mut() {
        let mut v = Vec2::ZERO;
        v[1] = 9.0;
        assert_eq!(v, Vec2::new(0.0, 9.0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vec2::ONE;
        let _ = v[2];
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(6.0, 8.0);
        let b = Vec2::new(2.0, 4.0);
        assert_eq!(a.add(b), Vec2::new(8.0, 12.0));
        assert_eq!(a.sub(b), Vec2::new(4.0, 4.0));
        assert_eq!(a.mul(b), Vec2::new(12.0, 32.0));
        assert_eq!(a.div(b), Vec2::new(3.0, 2.0));
        assert_eq!(a.addf(1.0), Vec2::new(7.0, 9.0));
        assert_eq!(a.subf(1.0), Vec2::new(5.0, 7.0));
        assert_eq!(a.mulf(0.5), Vec2::new(3.0, 4.0));
        assert_eq!(a.divf(2.0), Vec2::new(3.0, 4.0));
        assert_eq!(Vec2::fsub(10.0, a), Vec2::new(4.0, 2.0));
        assert_eq!(Vec2::fdiv(24.0, a), Vec2::new(4.0, 3.0));
    }

    #[test]
    fn operators() {
        let a = Vec2::new(6.0, 8.0);
        let b = Vec2::new(2.0, 4.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * b, a.mul(b));
        assert_eq!(a / b, a.div(b));
        assert_eq!(10.0 - a, Vec2::fsub(10.0, a));
        assert_eq!(24.0 / a, Vec2::fdiv(24.0, a));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec2::new(-6.0, -8.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        c /= 2.0;
        assert_eq!(c, a);
    }

    #[test]
    fn metrics() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.sum(), 7.0);
        assert_eq!(v.dot(Vec2::new(2.0, 1.0)), 10.0);
        assert_eq!(v.mag(), 5.0);
        assert_eq!(v.norm(), Vec2::new(0.6, 0.8));
    }

    #[test]
    fn negative_zero_sum() {
        let dot = Vec2::new(-0.0, -0.0).dot(Vec2::ONE);
        assert_eq!(dot, 0.0);
        assert!(dot.is_sign_negative());
        assert!(Vec4::splat(-0.0).sum().is_sign_negative());
        assert!(Vec2::new(-0.0, 0.0).sum().is_sign_positive());
    }

    #[test]
    fn zero_norm_is_nan() {
        let n = Vec2::ZERO.norm();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn cross_sign() {
        assert_eq!(Vec2::X.cross(Vec2::Y), 1.0);
        assert_eq!(Vec2::Y.cross(Vec2::X), -1.0);
        assert_eq!(Vec2::new(2.0, 3.0).cross(Vec2::new(4.0, 6.0)), 0.0);
    }

    #[test]
    fn averages() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a.avg(b), Vec2::new(2.0, 2.0));
        assert_eq!(a.avg(a), a);
        assert_eq!(a.avgf(3.0), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn rotation() {
        let r = Vec2::X.rot(PI / 2.0);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);

        let r = Vec2::new(1.0, 1.0).rot(PI);
        assert!((r.x + 1.0).abs() < 1e-6);
        assert!((r.y + 1.0).abs() < 1e-6);

        assert_eq!(Vec2::new(2.0, -3.0).rot(0.0), Vec2::new(2.0, -3.0));
    }

    #[test]
    fn extension() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.extend(3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.extend2(3.0, 4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }
}
