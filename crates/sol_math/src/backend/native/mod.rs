//! SIMD register bodies for x86/x86_64 (SSE2, AVX) and AArch64 (NEON).
//!
//! Vectors never alias a register. Each operation loads its operands with a
//! `bytemuck` cast from the array view, issues one instruction per register,
//! and stores the result back through the array view. [`Vec3`] is padded with
//! a zero lane on load and the padding lane is dropped on store.
//!
//! The `core::arch` intrinsics are `#[target_feature]` functions, so every call
//! goes through a safe wrapper declared with `wrap_intrinsics!`. This module is
//! only compiled when the target statically enables the instruction set the
//! wrappers call into.
//!
//! [`Vec3`]: crate::Vec3

use super::{Backend, Registers, Tier};

/// Implements [`VectorOps`](super::VectorOps) for [`Native`] from a register
/// type and the instruction for each operation.
macro_rules! impl_native {
    (
        $vec:ident => $reg:ty,
        load: $load:path,
        store: $store:path,
        splat: $splat:path,
        add: $add:path,
        sub: $sub:path,
        mul: $mul:path $(,)?
    ) => {
        impl $crate::backend::VectorOps<$vec> for $crate::backend::native::Native {
            #[inline(always)]
            fn splat(f: $crate::Scalar) -> $vec {
                let reg: $reg = $splat(f);
                $store(reg)
            }

            #[inline(always)]
            fn add(a: $vec, b: $vec) -> $vec {
                $store($add($load(a), $load(b)))
            }

            #[inline(always)]
            fn sub(a: $vec, b: $vec) -> $vec {
                $store($sub($load(a), $load(b)))
            }

            #[inline(always)]
            fn mul(a: $vec, b: $vec) -> $vec {
                $store($mul($load(a), $load(b)))
            }

            #[inline(always)]
            fn div(a: $vec, b: $vec) -> $vec {
                <$crate::backend::Looped as $crate::backend::VectorOps<$vec>>::div(a, b)
            }
        }
    };
}

/// Declares safe, always-inlined wrappers around register intrinsics.
///
/// Only wrap intrinsics whose target feature is enabled by the `cfg` the
/// invocation sits under.
macro_rules! wrap_intrinsics {
    ($($vis:vis $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty = $intrinsic:path;)+) => {
        $(
            #[inline(always)]
            $vis fn $name($($arg: $ty),*) -> $ret {
                // SAFETY: the enclosing module is compiled only when the target
                // enables `sse2` (x86) or `neon` (AArch64), and AVX wrappers are
                // declared only under `target_feature = "avx"`. The intrinsic's
                // required feature is therefore always available.
                unsafe { $intrinsic($($arg),*) }
            }
        )+
    };
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use x86 as arch_impl;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon as arch_impl;

/// One SIMD instruction per component-wise operation.
///
/// Only compiled on targets with SSE2 or NEON. Division is not issued to the
/// vector unit; it runs the [`Looped`](super::Looped) body.
#[derive(Clone, Copy, Debug, Default)]
pub struct Native;

impl Backend for Native {
    const TIER: Tier = Tier::Native;
    const REGISTERS: Registers = arch_impl::REGISTERS;
}
