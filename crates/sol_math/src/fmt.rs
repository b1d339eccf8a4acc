use core::fmt::{Formatter, Result};

use crate::Scalar;

/// Digits after the decimal point when the formatter does not ask for a
/// precision.
const DEFAULT_PRECISION: usize = 6;

/// Writes `(c0, c1, ...)` with a fixed number of fractional digits.
///
/// Single precision prints plain decimals; double precision prints scientific
/// notation so very large and very small magnitudes keep their digits.
pub(crate) fn write_components(f: &mut Formatter<'_>, components: &[Scalar]) -> Result {
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_scalar(f, *c, precision)?;
    }
    f.write_str(")")
}

#[cfg(not(feature = "f64"))]
#[inline]
fn write_scalar(f: &mut Formatter<'_>, c: Scalar, precision: usize) -> Result {
    write!(f, "{c:.precision$}")
}

#[cfg(feature = "f64")]
#[inline]
fn write_scalar(f: &mut Formatter<'_>, c: Scalar, precision: usize) -> Result {
    write!(f, "{c:.precision$e}")
}
