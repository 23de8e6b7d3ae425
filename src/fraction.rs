//! Exact rational arithmetic over `i32` numerator/denominator pairs
//!
//! A Fraction is always stored in lowest terms with a strictly positive
//! denominator. Arithmetic widens to `i64`, where products of two `i32`
//! values cannot wrap, and fails with `Overflow` when the reduced result
//! does not fit back into `i32`.

use crate::error::FractionError;
use log::debug;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use wasm_bindgen::prelude::*;

/// Decimal digits kept when decomposing a float into a fraction
pub const FLOAT_DIGITS: u32 = 3;

/// Rational number with an `i32` numerator and a positive `i32` denominator
#[wasm_bindgen]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionRepr", into = "FractionRepr")]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

/// Serialized form, `{ "n": numerator, "d": denominator }`
#[derive(Serialize, Deserialize)]
struct FractionRepr {
    n: i32,
    d: i32,
}

fn overflow(op: &str) -> FractionError {
    debug!("fraction overflow in {}", op);
    FractionError::Overflow
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Reduce a widened pair to lowest terms with a positive denominator
    ///
    /// This is the single normalization routine behind every constructor
    /// and every arithmetic result.
    pub(crate) fn from_wide(numer: i64, denom: i64) -> Result<Fraction, FractionError> {
        if denom == 0 {
            debug!("rejected zero denominator for numerator {}", numer);
            return Err(FractionError::InvalidArgument("denominator cannot be zero"));
        }

        let divisor = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / divisor, denom / divisor);

        if denom < 0 {
            numer = numer.checked_neg().ok_or_else(|| overflow("sign normalization"))?;
            denom = denom.checked_neg().ok_or_else(|| overflow("sign normalization"))?;
        }

        match (i32::try_from(numer), i32::try_from(denom)) {
            (Ok(numerator), Ok(denominator)) => Ok(Fraction {
                numerator,
                denominator,
            }),
            _ => Err(overflow("normalization")),
        }
    }

    /// Re-apply normalization in place
    ///
    /// Public constructors already normalize, so this is a no-op on any
    /// fraction obtained through the API.
    pub fn simplify(&mut self) {
        // in-range lowest terms can always be reduced again
        if let Ok(reduced) = Fraction::from_wide(self.numerator.into(), self.denominator.into()) {
            *self = reduced;
        }
    }

    /// Both numerators rescaled to the least common denominator
    fn common_terms(&self, other: &Fraction) -> Option<(i64, i64, i64)> {
        let own = i64::from(self.denominator);
        let theirs = i64::from(other.denominator);
        let common = own.lcm(&theirs);

        let lhs = i64::from(self.numerator).checked_mul(common / own)?;
        let rhs = i64::from(other.numerator).checked_mul(common / theirs)?;
        Some((lhs, rhs, common))
    }

    /// Replace self with `self + other`
    pub fn add_assign(&mut self, other: &Fraction) -> Result<(), FractionError> {
        *self = Fraction::add(self, other)?;
        Ok(())
    }

    /// Replace self with `self - other`
    pub fn sub_assign(&mut self, other: &Fraction) -> Result<(), FractionError> {
        *self = Fraction::sub(self, other)?;
        Ok(())
    }

    /// Replace self with `self * other`
    pub fn mul_assign(&mut self, other: &Fraction) -> Result<(), FractionError> {
        *self = Fraction::mul(self, other)?;
        Ok(())
    }

    /// Replace self with `self / other`
    pub fn div_assign(&mut self, other: &Fraction) -> Result<(), FractionError> {
        *self = Fraction::div(self, other)?;
        Ok(())
    }

    /// Add one in place and return the updated receiver
    ///
    /// The denominator is unchanged, and `gcd(n + d, d) == gcd(n, d)`, so the
    /// result stays in lowest terms.
    pub fn pre_increment(&mut self) -> Result<&mut Fraction, FractionError> {
        self.numerator = self
            .numerator
            .checked_add(self.denominator)
            .ok_or_else(|| overflow("increment"))?;
        Ok(self)
    }

    /// Add one in place and return the value from before the change
    pub fn post_increment(&mut self) -> Result<Fraction, FractionError> {
        let snapshot = *self;
        self.pre_increment()?;
        Ok(snapshot)
    }

    /// Subtract one in place and return the updated receiver
    pub fn pre_decrement(&mut self) -> Result<&mut Fraction, FractionError> {
        self.numerator = self
            .numerator
            .checked_sub(self.denominator)
            .ok_or_else(|| overflow("decrement"))?;
        Ok(self)
    }

    /// Subtract one in place and return the value from before the change
    pub fn post_decrement(&mut self) -> Result<Fraction, FractionError> {
        let snapshot = *self;
        self.pre_decrement()?;
        Ok(snapshot)
    }
}

#[wasm_bindgen]
impl Fraction {
    /// Create a fraction from numerator and denominator, reduced to lowest terms
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: i32, denominator: i32) -> Result<Fraction, FractionError> {
        Fraction::from_wide(numerator.into(), denominator.into())
    }

    /// Decompose a float into a fraction with at most three decimal digits
    ///
    /// The value is scaled by ten until it is integral or three digits have
    /// been taken, whichever comes first; the rounded result over the
    /// matching power of ten is then reduced. `0.6667` becomes `667/1000`,
    /// `-0.5` becomes `-1/2`.
    #[wasm_bindgen(js_name = fromFloat)]
    pub fn from_float(value: f64) -> Result<Fraction, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::InvalidArgument("value is not a finite number"));
        }

        let mut scaled = value;
        let mut exponent = 0;
        while exponent < FLOAT_DIGITS && scaled != scaled.round() {
            scaled *= 10.0;
            exponent += 1;
        }

        let numer = scaled
            .round()
            .to_i64()
            .ok_or_else(|| overflow("float conversion"))?;
        Fraction::from_wide(numer, 10i64.pow(exponent))
    }

    /// Parse text of the form `n/d`
    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(text: &str) -> Result<Fraction, FractionError> {
        text.parse()
    }

    /// Numerator, carrying the sign of the fraction
    #[wasm_bindgen(js_name = getNumerator)]
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    /// Denominator, always positive
    #[wasm_bindgen(js_name = getDenominator)]
    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Add two fractions
    pub fn add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let (lhs, rhs, common) = self
            .common_terms(other)
            .ok_or_else(|| overflow("addition"))?;
        let numer = lhs.checked_add(rhs).ok_or_else(|| overflow("addition"))?;
        Fraction::from_wide(numer, common)
    }

    /// Subtract two fractions
    pub fn sub(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let (lhs, rhs, common) = self
            .common_terms(other)
            .ok_or_else(|| overflow("subtraction"))?;
        let numer = lhs.checked_sub(rhs).ok_or_else(|| overflow("subtraction"))?;
        Fraction::from_wide(numer, common)
    }

    /// Multiply two fractions
    ///
    /// Overflow is judged on the reduced product rather than by checking
    /// `|n2| <= i32::MAX / |n1|` up front, so `(MAX/2) * (2/MAX)` is `1/1`.
    pub fn mul(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        if self.numerator == 0 || other.numerator == 0 {
            return Ok(Fraction::ZERO);
        }
        // products of two i32 values always fit in i64
        Fraction::from_wide(
            i64::from(self.numerator) * i64::from(other.numerator),
            i64::from(self.denominator) * i64::from(other.denominator),
        )
    }

    /// Divide two fractions
    pub fn div(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        if other.numerator == 0 {
            debug!("division of {} by a zero fraction", self);
            return Err(FractionError::DivisionByZero);
        }
        Fraction::from_wide(
            i64::from(self.numerator) * i64::from(other.denominator),
            i64::from(self.denominator) * i64::from(other.numerator),
        )
    }

    /// Negate the fraction
    pub fn neg(&self) -> Result<Fraction, FractionError> {
        Fraction::from_wide(-i64::from(self.numerator), self.denominator.into())
    }

    /// Get the absolute value
    pub fn abs(&self) -> Result<Fraction, FractionError> {
        Fraction::from_wide(i64::from(self.numerator).abs(), self.denominator.into())
    }

    /// Get the reciprocal (1/x)
    #[wasm_bindgen(js_name = inverse)]
    pub fn recip(&self) -> Result<Fraction, FractionError> {
        if self.numerator == 0 {
            debug!("reciprocal of a zero fraction");
            return Err(FractionError::DivisionByZero);
        }
        Fraction::from_wide(self.denominator.into(), self.numerator.into())
    }

    /// Exact equality of the normalized pairs
    pub fn equals(&self, other: &Fraction) -> bool {
        self == other
    }

    /// Compare this fraction to another
    /// Returns -1 if self < other, 0 if equal, 1 if self > other
    pub fn compare(&self, other: &Fraction) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    #[wasm_bindgen(js_name = lessThan)]
    pub fn less_than(&self, other: &Fraction) -> bool {
        self < other
    }

    #[wasm_bindgen(js_name = lessOrEqual)]
    pub fn less_or_equal(&self, other: &Fraction) -> bool {
        self <= other
    }

    #[wasm_bindgen(js_name = greaterThan)]
    pub fn greater_than(&self, other: &Fraction) -> bool {
        self > other
    }

    #[wasm_bindgen(js_name = greaterOrEqual)]
    pub fn greater_or_equal(&self, other: &Fraction) -> bool {
        self >= other
    }

    /// Convert to f64
    #[wasm_bindgen(js_name = toF64)]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Get the sign (-1, 0, or 1)
    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    #[wasm_bindgen(js_name = isZero)]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    #[wasm_bindgen(js_name = isPositive)]
    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    #[wasm_bindgen(js_name = isNegative)]
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Render as `n/d`
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(value: JsValue) -> Result<Fraction, JsValue> {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse fraction: {}", e)))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl Ord for Fraction {
    /// Orders by floating value, falling back to exact cross multiplication
    /// when the two floats coincide.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.to_f64().partial_cmp(&other.to_f64()) {
            Some(Ordering::Less) => Ordering::Less,
            Some(Ordering::Greater) => Ordering::Greater,
            _ => {
                let lhs = i64::from(self.numerator) * i64::from(other.denominator);
                let rhs = i64::from(other.numerator) * i64::from(self.denominator);
                lhs.cmp(&rhs)
            }
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Fraction {
            numerator: n,
            denominator: 1,
        }
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Fraction::from_float(value)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Fraction::from_float(value.into())
    }
}

impl From<Fraction> for Ratio<i32> {
    fn from(f: Fraction) -> Self {
        // already reduced with a positive denominator
        Ratio::new_raw(f.numerator, f.denominator)
    }
}

impl TryFrom<Ratio<i32>> for Fraction {
    type Error = FractionError;

    fn try_from(r: Ratio<i32>) -> Result<Self, Self::Error> {
        Fraction::new(*r.numer(), *r.denom())
    }
}

impl TryFrom<FractionRepr> for Fraction {
    type Error = FractionError;

    fn try_from(repr: FractionRepr) -> Result<Self, Self::Error> {
        Fraction::new(repr.n, repr.d)
    }
}

impl From<Fraction> for FractionRepr {
    fn from(f: Fraction) -> Self {
        FractionRepr {
            n: f.numerator,
            d: f.denominator,
        }
    }
}
