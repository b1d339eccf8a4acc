//! This mod re-exports the floating-point functions used by the vector types,
//! each at the precision of [`Scalar`].
//!
//! With the `libm` feature the functions come from the `libm` crate, which
//! gives the same results on every platform. Otherwise the `std` float methods
//! are used. In both cases an `f32` build calls the single-precision routine
//! (`sqrtf`, `sinf`, ...) and never round-trips through `f64`.

use crate::Scalar;

#[cfg(all(feature = "std", not(feature = "libm")))]
mod std_ops {
    use crate::Scalar;

    /// Raises `x` to the power `y`.
    #[inline(always)]
    pub fn pow(x: Scalar, y: Scalar) -> Scalar {
        Scalar::powf(x, y)
    }

    /// Returns the square root of `x`, or NaN if `x` is negative.
    #[inline(always)]
    pub fn sqrt(x: Scalar) -> Scalar {
        Scalar::sqrt(x)
    }

    /// Returns the sine of `x` (in radians).
    #[inline(always)]
    pub fn sin(x: Scalar) -> Scalar {
        Scalar::sin(x)
    }

    /// Returns the cosine of `x` (in radians).
    #[inline(always)]
    pub fn cos(x: Scalar) -> Scalar {
        Scalar::cos(x)
    }

    /// Returns the arccosine of `x` in radians, or NaN outside `[-1, 1]`.
    #[inline(always)]
    pub fn acos(x: Scalar) -> Scalar {
        Scalar::acos(x)
    }
}

#[cfg(feature = "libm")]
mod libm_ops {
    use crate::Scalar;

    // Picks the libm routine matching the configured width.
    macro_rules! libm_fn {
        ($(#[$meta:meta])* $name:ident($($arg:ident),+) => $single:ident, $double:ident) => {
            $(#[$meta])*
            #[inline(always)]
            pub fn $name($($arg: Scalar),+) -> Scalar {
                #[cfg(not(feature = "f64"))]
                return libm::$single($($arg),+);
                #[cfg(feature = "f64")]
                return libm::$double($($arg),+);
            }
        };
    }

    libm_fn!(
        /// Raises `x` to the power `y`.
        pow(x, y) => powf, pow
    );
    libm_fn!(
        /// Returns the square root of `x`, or NaN if `x` is negative.
        sqrt(x) => sqrtf, sqrt
    );
    libm_fn!(
        /// Returns the sine of `x` (in radians).
        sin(x) => sinf, sin
    );
    libm_fn!(
        /// Returns the cosine of `x` (in radians).
        cos(x) => cosf, cos
    );
    libm_fn!(
        /// Returns the arccosine of `x` in radians, or NaN outside `[-1, 1]`.
        acos(x) => acosf, acos
    );
}

#[cfg(feature = "libm")]
pub use libm_ops::*;

#[cfg(all(feature = "std", not(feature = "libm")))]
pub use std_ops::*;

/// Returns the sine and cosine of `x` (in radians).
#[inline(always)]
pub fn sin_cos(x: Scalar) -> (Scalar, Scalar) {
    (sin(x), cos(x))
}
