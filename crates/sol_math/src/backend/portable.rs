use super::{Backend, Registers, Tier, VectorOps};
use crate::{Scalar, Vec2, Vec3, Vec4};

/// Per-axis arithmetic written directly against the named fields.
///
/// Available on every target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

macro_rules! impl_portable {
    ($vec:ident { $($field:ident),+ }) => {
        impl VectorOps<$vec> for Portable {
            #[inline(always)]
            fn splat(f: Scalar) -> $vec {
                $vec { $($field: f),+ }
            }

            #[inline(always)]
            fn add(a: $vec, b: $vec) -> $vec {
                $vec { $($field: a.$field + b.$field),+ }
            }

            #[inline(always)]
            fn sub(a: $vec, b: $vec) -> $vec {
                $vec { $($field: a.$field - b.$field),+ }
            }

            #[inline(always)]
            fn mul(a: $vec, b: $vec) -> $vec {
                $vec { $($field: a.$field * b.$field),+ }
            }

            #[inline(always)]
            fn div(a: $vec, b: $vec) -> $vec {
                $vec { $($field: a.$field / b.$field),+ }
            }
        }
    };
}

impl_portable!(Vec2 { x, y });
impl_portable!(Vec3 { x, y, z });
impl_portable!(Vec4 { x, y, z, w });

impl Backend for Portable {
    const TIER: Tier = Tier::Portable;
    const REGISTERS: Registers = Registers {
        vec2: "fields x, y",
        vec3: "fields x, y, z",
        vec4: "fields x, y, z, w",
    };
}
