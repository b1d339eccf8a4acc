use core::arch::aarch64 as arch;

use crate::backend::Registers;
use crate::{Vec2, Vec3, Vec4};

// Single precision: Vec2 uses a narrow 64-bit register, Vec3 and Vec4 a wide
// 128-bit one.

#[cfg(not(feature = "f64"))]
use arch::{float32x2_t, float32x4_t};

#[cfg(not(feature = "f64"))]
pub(super) const REGISTERS: Registers = Registers {
    vec2: "float32x2_t",
    vec3: "float32x4_t (lanes 0..3)",
    vec4: "float32x4_t",
};

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn load2(v: Vec2) -> float32x2_t {
    bytemuck::cast(v.to_array())
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn store2(r: float32x2_t) -> Vec2 {
    Vec2::from_array(bytemuck::cast(r))
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn load3(v: Vec3) -> float32x4_t {
    bytemuck::cast([v.x, v.y, v.z, 0.0])
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn store3(r: float32x4_t) -> Vec3 {
    let [x, y, z, _]: [f32; 4] = bytemuck::cast(r);
    Vec3 { x, y, z }
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn load4(v: Vec4) -> float32x4_t {
    bytemuck::cast(v.to_array())
}

#[cfg(not(feature = "f64"))]
#[inline(always)]
fn store4(r: float32x4_t) -> Vec4 {
    Vec4::from_array(bytemuck::cast(r))
}

#[cfg(not(feature = "f64"))]
wrap_intrinsics! {
    splat2(f: f32) -> float32x2_t = arch::vdup_n_f32;
    add2(a: float32x2_t, b: float32x2_t) -> float32x2_t = arch::vadd_f32;
    sub2(a: float32x2_t, b: float32x2_t) -> float32x2_t = arch::vsub_f32;
    mul2(a: float32x2_t, b: float32x2_t) -> float32x2_t = arch::vmul_f32;
    splat4(f: f32) -> float32x4_t = arch::vdupq_n_f32;
    add4(a: float32x4_t, b: float32x4_t) -> float32x4_t = arch::vaddq_f32;
    sub4(a: float32x4_t, b: float32x4_t) -> float32x4_t = arch::vsubq_f32;
    mul4(a: float32x4_t, b: float32x4_t) -> float32x4_t = arch::vmulq_f32;
}

#[cfg(not(feature = "f64"))]
impl_native!(
    Vec2 => float32x2_t,
    load: load2,
    store: store2,
    splat: splat2,
    add: add2,
    sub: sub2,
    mul: mul2,
);

#[cfg(not(feature = "f64"))]
impl_native!(
    Vec3 => float32x4_t,
    load: load3,
    store: store3,
    splat: splat4,
    add: add4,
    sub: sub4,
    mul: mul4,
);

#[cfg(not(feature = "f64"))]
impl_native!(
    Vec4 => float32x4_t,
    load: load4,
    store: store4,
    splat: splat4,
    add: add4,
    sub: sub4,
    mul: mul4,
);

// Double precision: NEON registers hold two f64 lanes, so Vec3 and Vec4 are
// carried in a pair.

#[cfg(feature = "f64")]
use arch::float64x2_t;

#[cfg(feature = "f64")]
pub(super) const REGISTERS: Registers = Registers {
    vec2: "float64x2_t",
    vec3: "2 x float64x2_t (lanes 0..3)",
    vec4: "2 x float64x2_t",
};

#[cfg(feature = "f64")]
type Pair = [float64x2_t; 2];

#[cfg(feature = "f64")]
#[inline(always)]
fn load2(v: Vec2) -> float64x2_t {
    bytemuck::cast(v.to_array())
}

#[cfg(feature = "f64")]
#[inline(always)]
fn store2(r: float64x2_t) -> Vec2 {
    Vec2::from_array(bytemuck::cast(r))
}

#[cfg(feature = "f64")]
#[inline(always)]
fn load3(v: Vec3) -> Pair {
    bytemuck::cast([v.x, v.y, v.z, 0.0])
}

#[cfg(feature = "f64")]
#[inline(always)]
fn store3(r: Pair) -> Vec3 {
    let [x, y, z, _]: [f64; 4] = bytemuck::cast(r);
    Vec3 { x, y, z }
}

#[cfg(feature = "f64")]
#[inline(always)]
fn load4(v: Vec4) -> Pair {
    bytemuck::cast(v.to_array())
}

#[cfg(feature = "f64")]
#[inline(always)]
fn store4(r: Pair) -> Vec4 {
    Vec4::from_array(bytemuck::cast(r))
}

#[cfg(feature = "f64")]
wrap_intrinsics! {
    splat_f64(f: f64) -> float64x2_t = arch::vdupq_n_f64;
    add_f64(a: float64x2_t, b: float64x2_t) -> float64x2_t = arch::vaddq_f64;
    sub_f64(a: float64x2_t, b: float64x2_t) -> float64x2_t = arch::vsubq_f64;
    mul_f64(a: float64x2_t, b: float64x2_t) -> float64x2_t = arch::vmulq_f64;
}

#[cfg(feature = "f64")]
#[inline(always)]
fn splat_pair(f: f64) -> Pair {
    let half = splat_f64(f);
    [half, half]
}

#[cfg(feature = "f64")]
#[inline(always)]
fn add_pair(a: Pair, b: Pair) -> Pair {
    [add_f64(a[0], b[0]), add_f64(a[1], b[1])]
}

#[cfg(feature = "f64")]
#[inline(always)]
fn sub_pair(a: Pair, b: Pair) -> Pair {
    [sub_f64(a[0], b[0]), sub_f64(a[1], b[1])]
}

#[cfg(feature = "f64")]
#[inline(always)]
fn mul_pair(a: Pair, b: Pair) -> Pair {
    [mul_f64(a[0], b[0]), mul_f64(a[1], b[1])]
}

#[cfg(feature = "f64")]
impl_native!(
    Vec2 => float64x2_t,
    load: load2,
    store: store2,
    splat: splat_f64,
    add: add_f64,
    sub: sub_f64,
    mul: mul_f64,
);

#[cfg(feature = "f64")]
impl_native!(
    Vec3 => Pair,
    load: load3,
    store: store3,
    splat: splat_pair,
    add: add_pair,
    sub: sub_pair,
    mul: mul_pair,
);

#[cfg(feature = "f64")]
impl_native!(
    Vec4 => Pair,
    load: load4,
    store: store4,
    splat: splat_pair,
    add: add_pair,
    sub: sub_pair,
    mul: mul_pair,
);
