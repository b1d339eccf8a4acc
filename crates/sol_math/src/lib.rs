#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(unsafe_code)]

//! Small-vector math for graphics, physics and geometry code.
//!
//! The crate provides [`Vec2`], [`Vec3`] and [`Vec4`] over a build-selected
//! [`Scalar`] (`f32`, or `f64` with the `f64` feature). [`Vec4`] doubles as the
//! quaternion type: `x`, `y`, `z` hold the imaginary part and `w` the real part.
//!
//! Every component-wise arithmetic primitive has three interchangeable bodies,
//! see [`backend`]. The public API is the same whichever body the build selects.
//!
//! ```
//! # use sol_math::{Vec2, Vec3, convert};
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.mag(), 5.0);
//! assert_eq!(Vec2::fsub(10.0, v), Vec2::new(7.0, 6.0));
//!
//! let q = convert::axis_to_quat(Vec3::Z.extend(core::f32::consts::FRAC_PI_2 as _));
//! let r = Vec3::X.rot(q);
//! assert!((r.y - 1.0).abs() < 1e-6);
//! ```

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("sol_math requires either the `std` or the `libm` feature");

#[macro_use]
mod macros;

pub mod backend;
pub mod convert;
mod fmt;
pub mod ops;
pub mod primitives;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use primitives::{Box2, Box3, Seg2, Seg3, Sph2, Sph3};
pub use scalar::*;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// The `sol_math` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        convert::{axis_to_quat, deg_to_rad, quat_to_axis, rad_to_deg},
        Box2, Box3, Scalar, Seg2, Seg3, Sph2, Sph3, Vec2, Vec3, Vec4,
    };
}
