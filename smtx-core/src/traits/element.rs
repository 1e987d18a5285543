//! Element type constraints for sparse matrices
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Elements are fixed-width signed integers. All arithmetic the matrix
/// operations perform goes through the checked methods below, so an
/// overflow is reported instead of wrapping.
pub trait MatrixElement: Copy + PartialEq + Debug + Display + FromStr + Send + Sync {
    /// The additive identity, never stored in a matrix
    const ZERO: Self;

    /// Name of the element type as shown to users
    fn type_name() -> &'static str;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;

    /// Whether this value is zero and must not be stored
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ident),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                fn type_name() -> &'static str {
                    stringify!($ty)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    $ty::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    $ty::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    $ty::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    $ty::checked_neg(self)
                }
            }
        )*
    };
}

impl_matrix_element!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(MatrixElement::checked_add(2i64, 3), Some(5));
        assert_eq!(MatrixElement::checked_sub(2i64, 3), Some(-1));
        assert_eq!(MatrixElement::checked_mul(-4i32, 3), Some(-12));
        assert_eq!(MatrixElement::checked_neg(7i16), Some(-7));

        assert_eq!(MatrixElement::checked_add(i8::MAX, 1), None);
        assert_eq!(MatrixElement::checked_mul(i64::MAX, 2), None);
        assert_eq!(MatrixElement::checked_neg(i32::MIN), None);
    }

    #[test]
    fn test_type_name_and_zero() {
        assert_eq!(<i64 as MatrixElement>::type_name(), "i64");
        assert_eq!(<i128 as MatrixElement>::type_name(), "i128");
        assert!(<i32 as MatrixElement>::ZERO.is_zero());
        assert!(!MatrixElement::is_zero(-1i32));
    }
}
