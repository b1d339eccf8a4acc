#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Sol is a small vector math kernel: [`Vec2`], [`Vec3`] and [`Vec4`] with
//! quaternion helpers, built over one [`Scalar`] width per build and backed by
//! interchangeable portable, loop and SIMD arithmetic.
//!
//! ## Cargo features
//!
//! | Feature       | Effect                                                   |
//! |---------------|----------------------------------------------------------|
//! | `std`         | Default. Floating-point functions from `std`.            |
//! | `libm`        | Floating-point functions from `libm`, for `no_std`.      |
//! | `f64`         | Double precision everywhere.                             |
//! | `scalar-math` | Force the portable per-field backend.                    |
//! | `loop-math`   | Force the loop backend.                                  |
//! | `serialize`   | `serde` support for vectors and primitives.              |
//! | `approx`      | `approx` comparison traits for the vectors.              |
//! | `tracing`     | [`backend::log_backend`] reports the active backend.     |
//!
//! ```
//! use sol::prelude::*;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
//! assert_eq!(Vec3::fsub(1.0, a), Vec3::new(0.0, -1.0, -2.0));
//! ```

pub use sol_math::*;
