//! Conversions between axis-angle and quaternion forms, angle units, and
//! vector dimensions.
//!
//! Dimension-shrinking conversions are available as `From` impls and as
//! `truncate` methods; growing conversions need the missing components and are
//! only offered as `extend` methods.

use crate::{ops, Scalar, Vec2, Vec3, Vec4, PI};

/// Converts an axis-angle pair into a quaternion.
///
/// `a.xyz` is the rotation axis and `a.w` the angle in radians. The axis is
/// expected to be normalized; the result is then a unit quaternion.
///
/// ```
/// # use sol_math::{convert::axis_to_quat, Vec4};
/// let q = axis_to_quat(Vec4::new(0.0, 1.0, 0.0, 0.0));
/// assert_eq!(q, Vec4::W);
/// ```
#[inline]
pub fn axis_to_quat(a: Vec4) -> Vec4 {
    let (sin, cos) = ops::sin_cos(a.w / 2.0);
    a.truncate().mulf(sin).extend(cos)
}

/// Converts a unit quaternion back into an axis-angle pair.
///
/// The quaternion must be normalized and encode an angle in `(0, PI)`. It is
/// not normalized here: the identity rotation, or any `|q.w| >= 1`, gives
/// infinite or NaN components.
#[inline]
pub fn quat_to_axis(q: Vec4) -> Vec4 {
    let s = ops::sqrt(1.0 - q.w * q.w);
    q.truncate().divf(s).extend(2.0 * ops::acos(q.w))
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Scalar) -> Scalar {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: Scalar) -> Scalar {
    radians * (180.0 / PI)
}

impl From<Vec3> for Vec2 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.truncate()
    }
}

impl From<Vec4> for Vec2 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.xy()
    }
}

impl From<Vec4> for Vec3 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.truncate()
    }
}
