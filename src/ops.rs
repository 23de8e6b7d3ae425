//! Operator overloads for Fraction
//!
//! The operators panic on failure, the same way integer arithmetic panics on
//! overflow in debug builds. Use the checked methods on [`Fraction`] (or the
//! `num_traits` checked traits) to handle errors instead.

use crate::error::FractionError;
use crate::fraction::Fraction;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn unwrap_or_panic(result: Result<Fraction, FractionError>) -> Fraction {
    match result {
        Ok(f) => f,
        Err(err) => panic!("fraction arithmetic failed: {}", err),
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident) => {
        impl $op_trait for Fraction {
            type Output = Fraction;

            fn $op_fn(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(Fraction::$op_fn(&self, &rhs))
            }
        }

        impl $assign_trait for Fraction {
            fn $assign_fn(&mut self, rhs: Fraction) {
                *self = unwrap_or_panic(Fraction::$op_fn(self, &rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        unwrap_or_panic(Fraction::neg(&self))
    }
}

// Floats on either side are decomposed into a Fraction first.
macro_rules! impl_float_ops {
    ($float:ty) => {
        impl Add<Fraction> for $float {
            type Output = Fraction;

            fn add(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(Fraction::try_from(self).and_then(|lhs| Fraction::add(&lhs, &rhs)))
            }
        }

        impl Sub<Fraction> for $float {
            type Output = Fraction;

            fn sub(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(Fraction::try_from(self).and_then(|lhs| Fraction::sub(&lhs, &rhs)))
            }
        }

        impl Mul<Fraction> for $float {
            type Output = Fraction;

            fn mul(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(Fraction::try_from(self).and_then(|lhs| Fraction::mul(&lhs, &rhs)))
            }
        }

        impl Div<Fraction> for $float {
            type Output = Fraction;

            fn div(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(Fraction::try_from(self).and_then(|lhs| Fraction::div(&lhs, &rhs)))
            }
        }

        impl Add<$float> for Fraction {
            type Output = Fraction;

            fn add(self, rhs: $float) -> Fraction {
                unwrap_or_panic(Fraction::try_from(rhs).and_then(|rhs| Fraction::add(&self, &rhs)))
            }
        }

        impl Sub<$float> for Fraction {
            type Output = Fraction;

            fn sub(self, rhs: $float) -> Fraction {
                unwrap_or_panic(Fraction::try_from(rhs).and_then(|rhs| Fraction::sub(&self, &rhs)))
            }
        }

        impl Mul<$float> for Fraction {
            type Output = Fraction;

            fn mul(self, rhs: $float) -> Fraction {
                unwrap_or_panic(Fraction::try_from(rhs).and_then(|rhs| Fraction::mul(&self, &rhs)))
            }
        }

        impl Div<$float> for Fraction {
            type Output = Fraction;

            fn div(self, rhs: $float) -> Fraction {
                unwrap_or_panic(Fraction::try_from(rhs).and_then(|rhs| Fraction::div(&self, &rhs)))
            }
        }

        impl PartialEq<Fraction> for $float {
            fn eq(&self, other: &Fraction) -> bool {
                Fraction::try_from(*self).map_or(false, |lhs| lhs == *other)
            }
        }

        impl PartialEq<$float> for Fraction {
            fn eq(&self, other: &$float) -> bool {
                other == self
            }
        }

        impl PartialOrd<Fraction> for $float {
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                match Fraction::try_from(*self) {
                    Ok(lhs) => Some(lhs.cmp(other)),
                    // NaN, infinities and out-of-range values
                    Err(_) => f64::from(*self).partial_cmp(&other.to_f64()),
                }
            }
        }

        impl PartialOrd<$float> for Fraction {
            fn partial_cmp(&self, other: &$float) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    };
}

impl_float_ops!(f32);
impl_float_ops!(f64);

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::ZERO
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::ONE
    }
}

impl CheckedAdd for Fraction {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Fraction::add(self, v).ok()
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Fraction::sub(self, v).ok()
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Fraction::mul(self, v).ok()
    }
}

impl CheckedDiv for Fraction {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Fraction::div(self, v).ok()
    }
}

impl ToPrimitive for Fraction {
    /// Truncates toward zero
    fn to_i64(&self) -> Option<i64> {
        Some(i64::from(self.numerator() / self.denominator()))
    }

    /// Truncates toward zero; `None` when the truncated value is negative
    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(self))
    }
}
