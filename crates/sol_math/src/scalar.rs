//! The floating-point element type shared by every vector and scalar argument.

/// The element type of every vector component.
///
/// This is `f32` unless the `f64` feature is enabled. Cargo unifies features
/// across a build, so every crate linked into one artifact sees the same width.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

/// The element type of every vector component.
///
/// This is `f32` unless the `f64` feature is enabled. Cargo unifies features
/// across a build, so every crate linked into one artifact sees the same width.
#[cfg(feature = "f64")]
pub type Scalar = f64;

/// Width of [`Scalar`] in bits.
pub const SCALAR_BITS: u32 = (size_of::<Scalar>() * 8) as u32;

/// Archimedes' constant at the precision of [`Scalar`].
#[cfg(not(feature = "f64"))]
pub const PI: Scalar = core::f32::consts::PI;

/// Archimedes' constant at the precision of [`Scalar`].
#[cfg(feature = "f64")]
pub const PI: Scalar = core::f64::consts::PI;

/// Machine epsilon of [`Scalar`].
pub const EPSILON: Scalar = Scalar::EPSILON;

/// Clamps `f` to the `[lower, upper]` range.
///
/// Returns `upper` if `f > upper`, `lower` if `f < lower`, and `f` otherwise.
/// A NaN `f` is returned unchanged. `lower > upper` is not checked; the
/// comparison against `upper` is made first.
#[inline]
pub fn clamp(f: Scalar, lower: Scalar, upper: Scalar) -> Scalar {
    if f > upper {
        upper
    } else if f < lower {
        lower
    } else {
        f
    }
}
