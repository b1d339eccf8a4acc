#[cfg(target_arch = "x86")]
use core::arch::x86 as arch;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as arch;

use crate::backend::Registers;
use crate::{Vec2, Vec3, Vec4};

// Single precision: every vector fits one 128-bit register.

#[cfg(not(feature = "f64"))]
use arch::__m128;

#[cfg(not(feature = "f64"))]
pub(super) const REGISTERS: Registers = Registers {
    vec2: "__m128 (lanes 0..2)",
    vec3: "__m128 (lanes 0..3)",
    vec4: "__m128",
};

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn load2(v: Vec2) -> __m128 {
    bytemuck::cast([v.x, v.y, 0.0, 0.0])
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn store2(r: __m128) -> Vec2 {
    let [x, y, _, _]: [f32; 4] = bytemuck::cast(r);
    Vec2 { x, y }
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn load3(v: Vec3) -> __m128 {
    bytemuck::cast([v.x, v.y, v.z, 0.0])
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn store3(r: __m128) -> Vec3 {
    let [x, y, z, _]: [f32; 4] = bytemuck::cast(r);
    Vec3 { x, y, z }
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn load4(v: Vec4) -> __m128 {
    bytemuck::cast(v.to_array())
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn store4(r: __m128) -> Vec4 {
    Vec4::from_array(bytemuck::cast(r))
}

#[cfg(not(feature = "f64"))]
wrap_intrinsics! {
    splat_ps(f: f32) -> __m128 = arch::_mm_set1_ps;
    add_ps(a: __m128, b: __m128) -> __m128 = arch::_mm_add_ps;
    sub_ps(a: __m128, b: __m128) -> __m128 = arch::_mm_sub_ps;
    mul_ps(a: __m128, b: __m128) -> __m128 = arch::_mm_mul_ps;
}

#[cfg(not(feature = "f64"))]
impl_native!(
    Vec2 => __m128,
    load: load2,
    store: store2,
    splat: splat_ps,
    add: add_ps,
    sub: sub_ps,
    mul: mul_ps,
);

#[cfg(not(feature = "f64"))]
impl_native!(
    Vec3 => __m128,
    load: load3,
    store: store3,
    splat: splat_ps,
    add: add_ps,
    sub: sub_ps,
    mul: mul_ps,
);

#[cfg(not(feature = "f64"))]
impl_native!(
    Vec4 => __m128,
    load: load4,
    store: store4,
    splat: splat_ps,
    add: add_ps,
    sub: sub_ps,
    mul: mul_ps,
);

// Double precision: Vec2 fits one 128-bit register. Vec3 and Vec4 take one
// 256-bit register with AVX, and two 128-bit registers without it.

#[cfg(feature = "f64")]
use arch::__m128d;

#[cfg(all(feature = "f64", target_feature = "avx"))]
use arch::__m256d;

#[cfg(all(feature = "f64", target_feature = "avx"))]
pub(super) const REGISTERS: Registers = Registers {
    vec2: "__m128d",
    vec3: "__m256d (lanes 0..3)",
    vec4: "__m256d",
};

#[cfg(all(feature = "f64", not(target_feature = "avx")))]
pub(super) const REGISTERS: Registers = Registers {
    vec2: "__m128d",
    vec3: "2 x __m128d (lanes 0..3)",
    vec4: "2 x __m128d",
};

#[cfg(feature = "f64")]
#[inline(always)]
fn load2(v: Vec2) -> __m128d {
    bytemuck::cast(v.to_array())
}

#[cfg(feature = "f64")]
#[inline(always)]
fn store2(r: __m128d) -> Vec2 {
    Vec2::from_array(bytemuck::cast(r))
}

#[cfg(feature = "f64")]
wrap_intrinsics! {
    splat_pd(f: f64) -> __m128d = arch::_mm_set1_pd;
    add_pd(a: __m128d, b: __m128d) -> __m128d = arch::_mm_add_pd;
    sub_pd(a: __m128d, b: __m128d) -> __m128d = arch::_mm_sub_pd;
    mul_pd(a: __m128d, b: __m128d) -> __m128d = arch::_mm_mul_pd;
}

#[cfg(feature = "f64")]
impl_native!(
    Vec2 => __m128d,
    load: load2,
    store: store2,
    splat: splat_pd,
    add: add_pd,
    sub: sub_pd,
    mul: mul_pd,
);

#[cfg(all(feature = "f64", target_feature = "avx"))]
mod wide {
    use super::{arch, __m256d};
    use crate::{Vec3, Vec4};

    #[inline(always)]
    pub(super) fn load3(v: Vec3) -> __m256d {
        bytemuck::cast([v.x, v.y, v.z, 0.0])
    }

    #[inline(always)]
    pub(super) fn store3(r: __m256d) -> Vec3 {
        let [x, y, z, _]: [f64; 4] = bytemuck::cast(r);
        Vec3 { x, y, z }
    }

    #[inline(always)]
    pub(super) fn load4(v: Vec4) -> __m256d {
        bytemuck::cast(v.to_array())
    }

    #[inline(always)]
    pub(super) fn store4(r: __m256d) -> Vec4 {
        Vec4::from_array(bytemuck::cast(r))
    }

    wrap_intrinsics! {
        pub(super) splat(f: f64) -> __m256d = arch::_mm256_set1_pd;
        pub(super) add(a: __m256d, b: __m256d) -> __m256d = arch::_mm256_add_pd;
        pub(super) sub(a: __m256d, b: __m256d) -> __m256d = arch::_mm256_sub_pd;
        pub(super) mul(a: __m256d, b: __m256d) -> __m256d = arch::_mm256_mul_pd;
    }
}

#[cfg(all(feature = "f64", target_feature = "avx"))]
impl_native!(
    Vec3 => __m256d,
    load: wide::load3,
    store: wide::store3,
    splat: wide::splat,
    add: wide::add,
    sub: wide::sub,
    mul: wide::mul,
);

#[cfg(all(feature = "f64", target_feature = "avx"))]
impl_native!(
    Vec4 => __m256d,
    load: wide::load4,
    store: wide::store4,
    splat: wide::splat,
    add: wide::add,
    sub: wide::sub,
    mul: wide::mul,
);

#[cfg(all(feature = "f64", not(target_feature = "avx")))]
mod paired {
    use super::{__m128d, add_pd, mul_pd, splat_pd, sub_pd};
    use crate::{Vec3, Vec4};

    /// Two SSE2 registers holding four `f64` lanes.
    pub(super) type Pair = [__m128d; 2];

    #[inline(always)]
    pub(super) fn load3(v: Vec3) -> Pair {
        bytemuck::cast([v.x, v.y, v.z, 0.0])
    }

    #[inline(always)]
    pub(super) fn store3(r: Pair) -> Vec3 {
        let [x, y, z, _]: [f64; 4] = bytemuck::cast(r);
        Vec3 { x, y, z }
    }

    #[inline(always)]
    pub(super) fn load4(v: Vec4) -> Pair {
        bytemuck::cast(v.to_array())
    }

    #[inline(always)]
    pub(super) fn store4(r: Pair) -> Vec4 {
        Vec4::from_array(bytemuck::cast(r))
    }

    #[inline(always)]
    pub(super) fn splat(f: f64) -> Pair {
        let half = splat_pd(f);
        [half, half]
    }

    #[inline(always)]
    pub(super) fn add(a: Pair, b: Pair) -> Pair {
        [add_pd(a[0], b[0]), add_pd(a[1], b[1])]
    }

    #[inline(always)]
    pub(super) fn sub(a: Pair, b: Pair) -> Pair {
        [sub_pd(a[0], b[0]), sub_pd(a[1], b[1])]
    }

    #[inline(always)]
    pub(super) fn mul(a: Pair, b: Pair) -> Pair {
        [mul_pd(a[0], b[0]), mul_pd(a[1], b[1])]
    }
}

#[cfg(all(feature = "f64", not(target_feature = "avx")))]
impl_native!(
    Vec3 => paired::Pair,
    load: paired::load3,
    store: paired::store3,
    splat: paired::splat,
    add: paired::add,
    sub: paired::sub,
    mul: paired::mul,
);

#[cfg(all(feature = "f64", not(target_feature = "avx")))]
impl_native!(
    Vec4 => paired::Pair,
    load: paired::load4,
    store: paired::store4,
    splat: paired::splat,
    add: paired::add,
    sub: paired::sub,
    mul: paired::mul,
);
