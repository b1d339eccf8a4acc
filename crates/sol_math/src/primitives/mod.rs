//! Plain geometric primitives built on the vector types.
//!
//! These hold data and offer a few queries; they carry no invariant the type
//! system enforces. Box corners are expected to satisfy `min <= max` and
//! sphere radii to be non-negative.

mod dim2;
mod dim3;

pub use dim2::{Box2, Seg2, Sph2};
pub use dim3::{Box3, Seg3, Sph3};
