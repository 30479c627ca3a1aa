//! Crate-local macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands, given the generic parameters of the impls and a body
/// operating on references.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        [$($generics:tt)*],
        $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    (
        $op:ident, $method:ident,
        [$($generics:tt)*],
        $tl:ty, $tr:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<$($generics)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements getters and setters for the named components of a rotation
/// whose payload is indexable. Getters read the logical payload and setters
/// write through it, so both see the same numbers regardless of usage.
macro_rules! impl_component_accessors {
    ($($index:literal => $getter:ident, $setter:ident);* $(;)?) => {
        $(
            #[doc = concat!("Returns the `", stringify!($getter), "` component.")]
            #[inline]
            pub fn $getter(&self) -> T {
                self.to_implementation()[$index]
            }

            #[doc = concat!("Sets the `", stringify!($getter), "` component.")]
            #[inline]
            pub fn $setter(&mut self, $getter: T) {
                let mut logical = self.to_implementation();
                logical[$index] = $getter;
                self.set_implementation(logical);
            }
        )*
    };
}
