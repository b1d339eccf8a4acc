use super::{Backend, Registers, Tier, VectorOps};
use crate::{Scalar, Vec2, Vec3, Vec4};

/// Per-lane loops over the indexed-array view of a vector.
///
/// The loops have a fixed trip count and no cross-lane dependency, so LLVM
/// unrolls and vectorizes them where the target allows. This is the fallback
/// on targets without a `Native` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Looped;

#[inline(always)]
fn lanes<const N: usize>(
    mut a: [Scalar; N],
    b: [Scalar; N],
    op: impl Fn(Scalar, Scalar) -> Scalar,
) -> [Scalar; N] {
    for (lane, rhs) in a.iter_mut().zip(b) {
        *lane = op(*lane, rhs);
    }
    a
}

macro_rules! impl_looped {
    ($vec:ident) => {
        impl VectorOps<$vec> for Looped {
            #[inline(always)]
            fn splat(f: Scalar) -> $vec {
                $vec::from_array([f; $vec::LANES])
            }

            #[inline(always)]
            fn add(a: $vec, b: $vec) -> $vec {
                $vec::from_array(lanes(a.to_array(), b.to_array(), |l, r| l + r))
            }

            #[inline(always)]
            fn sub(a: $vec, b: $vec) -> $vec {
                $vec::from_array(lanes(a.to_array(), b.to_array(), |l, r| l - r))
            }

            #[inline(always)]
            fn mul(a: $vec, b: $vec) -> $vec {
                $vec::from_array(lanes(a.to_array(), b.to_array(), |l, r| l * r))
            }

            #[inline(always)]
            fn div(a: $vec, b: $vec) -> $vec {
                $vec::from_array(lanes(a.to_array(), b.to_array(), |l, r| l / r))
            }
        }
    };
}

impl_looped!(Vec2);
impl_looped!(Vec3);
impl_looped!(Vec4);

impl Backend for Looped {
    const TIER: Tier = Tier::Looped;
    #[cfg(not(feature = "f64"))]
    const REGISTERS: Registers = Registers {
        vec2: "[f32; 2]",
        vec3: "[f32; 3]",
        vec4: "[f32; 4]",
    };
    #[cfg(feature = "f64")]
    const REGISTERS: Registers = Registers {
        vec2: "[f64; 2]",
        vec3: "[f64; 3]",
        vec4: "[f64; 4]",
    };
}
