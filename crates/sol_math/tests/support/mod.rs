#![expect(dead_code, reason = "each test binary uses a different subset")]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sol_math::{convert, Scalar};

/// Absolute tolerance for results that went through a transcendental function.
#[cfg(not(feature = "f64"))]
pub const TOLERANCE: Scalar = 1e-6;
#[cfg(feature = "f64")]
pub const TOLERANCE: Scalar = 1e-12;

/// Looser tolerance for the quaternion round trip, which loses digits near
/// `w = ±1`.
#[cfg(not(feature = "f64"))]
pub const ROUND_TRIP_TOLERANCE: Scalar = 1e-5;
#[cfg(feature = "f64")]
pub const ROUND_TRIP_TOLERANCE: Scalar = 1e-10;

pub fn deg(degrees: Scalar) -> Scalar {
    convert::deg_to_rad(degrees)
}

/// A deterministic generator so failures reproduce.
pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// A finite, non-tiny scalar that is safe to divide by.
pub fn random_scalar(rng: &mut ChaCha8Rng) -> Scalar {
    let magnitude: Scalar = rng.gen_range(0.125..64.0);
    if rng.gen_bool(0.5) { magnitude } else { -magnitude }
}

/// An array of [`random_scalar`] components.
pub fn random_array<const N: usize>(rng: &mut ChaCha8Rng) -> [Scalar; N] {
    core::array::from_fn(|_| random_scalar(rng))
}

/// Asserts that component `i` of `actual` is within two epsilons of
/// `expected`, relative to `scale[i]`.
#[track_caller]
pub fn assert_within_eps(actual: &[Scalar], expected: &[Scalar], scale: &[Scalar]) {
    assert_eq!(actual.len(), expected.len());
    for (i, ((a, e), s)) in actual.iter().zip(expected).zip(scale).enumerate() {
        assert!(
            (a - e).abs() <= 2.0 * Scalar::EPSILON * s.abs(),
            "component {i}: {actual:?} != {expected:?} (scale {s})"
        );
    }
}

/// Asserts that every pair of components is within `tolerance`.
#[track_caller]
pub fn assert_near(actual: &[Scalar], expected: &[Scalar], tolerance: Scalar) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "component {i}: {actual:?} != {expected:?} (tolerance {tolerance})"
        );
    }
}
