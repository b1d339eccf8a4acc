/// Implements the operation surface shared by [`Vec2`](crate::Vec2),
/// [`Vec3`](crate::Vec3) and [`Vec4`](crate::Vec4).
///
/// Every component-wise primitive routes through the build's
/// [`Active`](crate::backend::Active) backend; the rest is composed from those
/// primitives so all tiers agree on the derived operations too.
macro_rules! impl_vec {
    ($vec:ident, $lanes:literal, { $($field:ident),+ }, ($($tuple:ident),+)) => {
        #[expect(
            clippy::should_implement_trait,
            reason = "named forms are the primary API, operator traits forward to them"
        )]
        impl $vec {
            /// Number of components.
            pub const LANES: usize = $lanes;

            /// All components set to `0.0`.
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// All components set to `1.0`.
            pub const ONE: Self = Self { $($field: 1.0),+ };

            /// Creates a vector with every component set to `f`.
            #[inline]
            pub fn splat(f: $crate::Scalar) -> Self {
                <$crate::backend::Active as $crate::backend::VectorOps<Self>>::splat(f)
            }

            /// Creates a vector with every component set to `0.0`.
            #[inline]
            pub fn zero() -> Self {
                Self::splat(0.0)
            }

            /// Creates a vector from an array, in component order.
            #[inline]
            pub const fn from_array(a: [$crate::Scalar; $lanes]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }

            /// Returns the components as an array, in component order.
            #[inline]
            pub const fn to_array(self) -> [$crate::Scalar; $lanes] {
                [$(self.$field),+]
            }

            /// Views the components as an array.
            #[inline]
            pub fn as_array(&self) -> &[$crate::Scalar; $lanes] {
                bytemuck::cast_ref(self)
            }

            /// Views the components as a mutable array.
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [$crate::Scalar; $lanes] {
                bytemuck::cast_mut(self)
            }

            /// Component-wise `self + rhs`.
            #[inline]
            pub fn add(self, rhs: Self) -> Self {
                <$crate::backend::Active as $crate::backend::VectorOps<Self>>::add(self, rhs)
            }

            /// Adds `f` to every component.
            #[inline]
            pub fn addf(self, f: $crate::Scalar) -> Self {
                self.add(Self::splat(f))
            }

            /// Component-wise `self - rhs`.
            #[inline]
            pub fn sub(self, rhs: Self) -> Self {
                <$crate::backend::Active as $crate::backend::VectorOps<Self>>::sub(self, rhs)
            }

            /// Subtracts `f` from every component.
            #[inline]
            pub fn subf(self, f: $crate::Scalar) -> Self {
                self.sub(Self::splat(f))
            }

            /// Subtracts every component of `v` from `f`, giving `f - v`.
            #[inline]
            pub fn fsub(f: $crate::Scalar, v: Self) -> Self {
                Self::splat(f).sub(v)
            }

            /// Component-wise `self * rhs`.
            #[inline]
            pub fn mul(self, rhs: Self) -> Self {
                <$crate::backend::Active as $crate::backend::VectorOps<Self>>::mul(self, rhs)
            }

            /// Multiplies every component by `f`.
            #[inline]
            pub fn mulf(self, f: $crate::Scalar) -> Self {
                self.mul(Self::splat(f))
            }

            /// Component-wise `self / rhs`.
            ///
            /// A zero component in `rhs` gives an infinite or NaN component.
            #[inline]
            pub fn div(self, rhs: Self) -> Self {
                <$crate::backend::Active as $crate::backend::VectorOps<Self>>::div(self, rhs)
            }

            /// Divides every component by `f`.
            #[inline]
            pub fn divf(self, f: $crate::Scalar) -> Self {
                self.div(Self::splat(f))
            }

            /// Divides `f` by every component of `v`, giving `f / v`.
            #[inline]
            pub fn fdiv(f: $crate::Scalar, v: Self) -> Self {
                Self::splat(f).div(v)
            }

            /// Component-wise mean of `self` and `rhs`.
            #[inline]
            pub fn avg(self, rhs: Self) -> Self {
                self.add(rhs).divf(2.0)
            }

            /// Component-wise mean of `self` and `f`.
            #[inline]
            pub fn avgf(self, f: $crate::Scalar) -> Self {
                self.avg(Self::splat(f))
            }

            /// Component-wise minimum of `self` and `rhs`.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: self.$field.min(rhs.$field)),+ }
            }

            /// Component-wise maximum of `self` and `rhs`.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: self.$field.max(rhs.$field)),+ }
            }

            /// Sum of all components, added left to right from the first.
            ///
            /// A vector of `-0.0` components sums to `-0.0`.
            #[inline]
            pub fn sum(self) -> $crate::Scalar {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, |acc, c| acc + c)
            }

            /// Dot product, the sum of the component-wise product.
            #[inline]
            pub fn dot(self, rhs: Self) -> $crate::Scalar {
                self.mul(rhs).sum()
            }

            /// Length of the vector.
            #[inline]
            pub fn mag(self) -> $crate::Scalar {
                $crate::ops::sqrt(self.dot(self))
            }

            /// Returns `self` scaled to a length of `1.0`.
            ///
            /// A zero-length vector gives NaN components.
            #[inline]
            pub fn norm(self) -> Self {
                self.divf(self.mag())
            }
        }

        impl Default for $vec {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl core::ops::Add for $vec {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $vec::add(self, rhs)
            }
        }

        impl core::ops::Add<$crate::Scalar> for $vec {
            type Output = Self;
            #[inline]
            fn add(self, rhs: $crate::Scalar) -> Self {
                self.addf(rhs)
            }
        }

        impl core::ops::Add<$vec> for $crate::Scalar {
            type Output = $vec;
            #[inline]
            fn add(self, rhs: $vec) -> $vec {
                $vec::splat(self).add(rhs)
            }
        }

        impl core::ops::Sub for $vec {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $vec::sub(self, rhs)
            }
        }

        impl core::ops::Sub<$crate::Scalar> for $vec {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: $crate::Scalar) -> Self {
                self.subf(rhs)
            }
        }

        impl core::ops::Sub<$vec> for $crate::Scalar {
            type Output = $vec;
            #[inline]
            fn sub(self, rhs: $vec) -> $vec {
                $vec::fsub(self, rhs)
            }
        }

        impl core::ops::Mul for $vec {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                $vec::mul(self, rhs)
            }
        }

        impl core::ops::Mul<$crate::Scalar> for $vec {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $crate::Scalar) -> Self {
                self.mulf(rhs)
            }
        }

        impl core::ops::Mul<$vec> for $crate::Scalar {
            type Output = $vec;
            #[inline]
            fn mul(self, rhs: $vec) -> $vec {
                $vec::splat(self).mul(rhs)
            }
        }

        impl core::ops::Div for $vec {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                $vec::div(self, rhs)
            }
        }

        impl core::ops::Div<$crate::Scalar> for $vec {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $crate::Scalar) -> Self {
                self.divf(rhs)
            }
        }

        impl core::ops::Div<$vec> for $crate::Scalar {
            type Output = $vec;
            #[inline]
            fn div(self, rhs: $vec) -> $vec {
                $vec::fdiv(self, rhs)
            }
        }

        impl core::ops::AddAssign for $vec {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = $vec::add(*self, rhs);
            }
        }

        impl core::ops::SubAssign for $vec {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = $vec::sub(*self, rhs);
            }
        }

        impl core::ops::MulAssign for $vec {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = $vec::mul(*self, rhs);
            }
        }

        impl core::ops::MulAssign<$crate::Scalar> for $vec {
            #[inline]
            fn mul_assign(&mut self, rhs: $crate::Scalar) {
                *self = self.mulf(rhs);
            }
        }

        impl core::ops::DivAssign for $vec {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = $vec::div(*self, rhs);
            }
        }

        impl core::ops::DivAssign<$crate::Scalar> for $vec {
            #[inline]
            fn div_assign(&mut self, rhs: $crate::Scalar) {
                *self = self.divf(rhs);
            }
        }

        impl core::ops::Neg for $vec {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl core::ops::Index<usize> for $vec {
            type Output = $crate::Scalar;
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.as_array()[index]
            }
        }

        impl core::ops::IndexMut<usize> for $vec {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.as_array_mut()[index]
            }
        }

        impl From<[$crate::Scalar; $lanes]> for $vec {
            #[inline]
            fn from(a: [$crate::Scalar; $lanes]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$vec> for [$crate::Scalar; $lanes] {
            #[inline]
            fn from(v: $vec) -> Self {
                v.to_array()
            }
        }

        impl From<($($tuple),+)> for $vec {
            #[inline]
            fn from(($($field),+): ($($tuple),+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$vec> for ($($tuple),+) {
            #[inline]
            fn from(v: $vec) -> Self {
                ($(v.$field),+)
            }
        }

        impl core::fmt::Display for $vec {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                $crate::fmt::write_components(f, self.as_array())
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $vec {
            type Epsilon = $crate::Scalar;

            fn default_epsilon() -> Self::Epsilon {
                <$crate::Scalar as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $vec {
            fn default_max_relative() -> Self::Epsilon {
                <$crate::Scalar as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))+
            }
        }

        #[cfg(feature = "approx")]
        impl approx::UlpsEq for $vec {
            fn default_max_ulps() -> u32 {
                <$crate::Scalar as approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                true $(&& approx::UlpsEq::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))+
            }
        }
    };
}
