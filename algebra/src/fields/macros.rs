//! Impl plumbing shared by the field models.

/// Builds a field constant from its pre-computed Montgomery representation.
/// The argument is raw: callers pass limbs produced for the target modulus.
#[macro_export]
macro_rules! field_new {
    ($name:ident, $c0:expr $(,)?) => {
        $name::new($c0)
    };
    ($name:ident, $c0:expr, $c1:expr $(,)?) => {
        $name::const_new($c0, $c1)
    };
    ($name:ident, $c0:expr, $c1:expr, $c2:expr $(,)?) => {
        $name::const_new($c0, $c1, $c2)
    };
}

/// Forwards the by-value and by-reference operator matrix onto the four
/// `*Assign<&Self>` impls every model provides.
#[macro_export]
macro_rules! impl_field_ops {
    ($type:ident, $params:ident) => {
        impl<P: $params> std::ops::Add<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn add(self, other: Self) -> Self {
                let mut result = self;
                std::ops::AddAssign::add_assign(&mut result, &other);
                result
            }
        }

        impl<'a, P: $params> std::ops::Add<&'a Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn add(self, other: &'a Self) -> Self {
                let mut result = self;
                std::ops::AddAssign::add_assign(&mut result, other);
                result
            }
        }

        impl<P: $params> std::ops::Sub<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn sub(self, other: Self) -> Self {
                let mut result = self;
                std::ops::SubAssign::sub_assign(&mut result, &other);
                result
            }
        }

        impl<'a, P: $params> std::ops::Sub<&'a Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn sub(self, other: &'a Self) -> Self {
                let mut result = self;
                std::ops::SubAssign::sub_assign(&mut result, other);
                result
            }
        }

        impl<P: $params> std::ops::Mul<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn mul(self, other: Self) -> Self {
                let mut result = self;
                std::ops::MulAssign::mul_assign(&mut result, &other);
                result
            }
        }

        impl<'a, P: $params> std::ops::Mul<&'a Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn mul(self, other: &'a Self) -> Self {
                let mut result = self;
                std::ops::MulAssign::mul_assign(&mut result, other);
                result
            }
        }

        impl<P: $params> std::ops::Div<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn div(self, other: Self) -> Self {
                let mut result = self;
                std::ops::DivAssign::div_assign(&mut result, &other);
                result
            }
        }

        impl<'a, P: $params> std::ops::Div<&'a Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn div(self, other: &'a Self) -> Self {
                let mut result = self;
                std::ops::DivAssign::div_assign(&mut result, other);
                result
            }
        }

        impl<P: $params> std::ops::AddAssign<Self> for $type<P> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                std::ops::AddAssign::add_assign(self, &other)
            }
        }

        impl<P: $params> std::ops::SubAssign<Self> for $type<P> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                std::ops::SubAssign::sub_assign(self, &other)
            }
        }

        impl<P: $params> std::ops::MulAssign<Self> for $type<P> {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                std::ops::MulAssign::mul_assign(self, &other)
            }
        }

        impl<P: $params> std::ops::DivAssign<Self> for $type<P> {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                std::ops::DivAssign::div_assign(self, &other)
            }
        }

        impl<'a, P: $params> std::ops::DivAssign<&'a Self> for $type<P> {
            /// Division panics on a zero divisor, like the integer `/`.
            #[inline]
            fn div_assign(&mut self, other: &'a Self) {
                std::ops::MulAssign::mul_assign(
                    self,
                    &$crate::fields::Field::inverse(other).unwrap(),
                );
            }
        }
    };
}
