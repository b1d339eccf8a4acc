//! Interchangeable bodies for the component-wise arithmetic primitives.
//!
//! `splat`, `add`, `sub`, `mul` and `div` are implemented once per capability
//! tier:
//!
//! - [`Portable`] writes each axis out against the named fields.
//! - [`Looped`] runs a lane loop over the `[Scalar; N]` view, left for LLVM to
//!   auto-vectorize.
//! - `Native` issues one SIMD register instruction per operation. It exists
//!   on x86/x86_64 with SSE2 and on AArch64 with NEON.
//!
//! Exactly one tier is [`Active`] per build, chosen with the precedence
//! `Native` > [`Looped`] > [`Portable`]:
//!
//! - the `scalar-math` feature forces [`Portable`] (it wins over `loop-math`),
//! - the `loop-math` feature forces [`Looped`],
//! - otherwise `Native` is used where it exists and [`Looped`] elsewhere.
//!
//! `Native` never changes the precision. When the widest register is missing
//! it drops to narrower registers instead: on x86 without AVX an `f64`
//! [`Vec3`]/[`Vec4`] is carried in two `__m128d`, and on NEON in two
//! `float64x2_t`. Division is never dispatched to SIMD; every tier's `div`
//! matches the [`Looped`] body.
//!
//! All tiers produce bit-identical results for the same inputs, since every
//! lane is a single IEEE-754 operation in each of them.

use core::fmt;

use crate::{Scalar, Vec2, Vec3, Vec4, SCALAR_BITS};

mod looped;
mod portable;

#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ),
    all(target_arch = "aarch64", target_feature = "neon"),
))]
#[expect(
    unsafe_code,
    reason = "`core::arch` intrinsics are `#[target_feature]` functions."
)]
mod native;

pub use looped::Looped;
pub use portable::Portable;

#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ),
    all(target_arch = "aarch64", target_feature = "neon"),
))]
pub use native::Native;

/// The component-wise arithmetic primitives of one vector type `V`.
///
/// Implementors are zero-sized tier markers. Every implementation of the same
/// operation must agree bit for bit with every other tier.
pub trait VectorOps<V: Copy> {
    /// Broadcasts `f` to every component.
    fn splat(f: Scalar) -> V;
    /// Component-wise `a + b`.
    fn add(a: V, b: V) -> V;
    /// Component-wise `a - b`.
    fn sub(a: V, b: V) -> V;
    /// Component-wise `a * b`.
    fn mul(a: V, b: V) -> V;
    /// Component-wise `a / b`.
    fn div(a: V, b: V) -> V;
}

/// A capability tier covering every vector width.
pub trait Backend: VectorOps<Vec2> + VectorOps<Vec3> + VectorOps<Vec4> {
    /// Which tier this is.
    const TIER: Tier;
    /// How each vector type is held while an operation runs.
    const REGISTERS: Registers;
}

/// One of the three interchangeable implementation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Per-axis arithmetic on named fields.
    Portable,
    /// Lane loops over the indexed-array view.
    Looped,
    /// SIMD register instructions.
    Native,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Portable => "portable",
            Tier::Looped => "looped",
            Tier::Native => "native",
        })
    }
}

/// Describes the storage each vector type uses inside a backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    /// Storage used for [`Vec2`] operations.
    pub vec2: &'static str,
    /// Storage used for [`Vec3`] operations.
    pub vec3: &'static str,
    /// Storage used for [`Vec4`] operations.
    pub vec4: &'static str,
}

/// The backend selected for this build.
#[cfg(feature = "scalar-math")]
pub type Active = Portable;

/// The backend selected for this build.
#[cfg(all(not(feature = "scalar-math"), feature = "loop-math"))]
pub type Active = Looped;

/// The backend selected for this build.
#[cfg(all(
    not(feature = "scalar-math"),
    not(feature = "loop-math"),
    any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse2"
        ),
        all(target_arch = "aarch64", target_feature = "neon"),
    ),
))]
pub type Active = Native;

/// The backend selected for this build.
#[cfg(all(
    not(feature = "scalar-math"),
    not(feature = "loop-math"),
    not(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse2"
        ),
        all(target_arch = "aarch64", target_feature = "neon"),
    )),
))]
pub type Active = Looped;

/// The tier of [`Active`].
pub const ACTIVE: Tier = <Active as Backend>::TIER;

/// A summary of the build's arithmetic backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackendInfo {
    /// The active tier.
    pub tier: Tier,
    /// Width of [`Scalar`] in bits.
    pub scalar_bits: u32,
    /// Storage used per vector type.
    pub registers: Registers,
}

/// Returns the backend this build dispatches to.
#[inline]
pub const fn describe() -> BackendInfo {
    BackendInfo {
        tier: ACTIVE,
        scalar_bits: SCALAR_BITS,
        registers: <Active as Backend>::REGISTERS,
    }
}

/// Emits one `info` event describing the active backend.
#[cfg(feature = "tracing")]
pub fn log_backend() {
    let info = describe();
    tracing::info!(
        tier = %info.tier,
        scalar_bits = info.scalar_bits,
        vec2 = info.registers.vec2,
        vec3 = info.registers.vec3,
        vec4 = info.registers.vec4,
        "sol_math arithmetic backend"
    );
}
