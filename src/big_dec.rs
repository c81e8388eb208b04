//! # BigDecimal
//! Arbitrary-precision decimal numbers.
//!
//! A value is a pair of [`BigInt`]s read in scientific notation: the
//! significand carries the digits, the exponent is the power of ten of the
//! most significant digit. The represented value is
//! `significand * 10^(exponent - digits(significand) + 1)`, so
//! `(5, 2)` is `500` and `(125, 4)` is `12500`.
//!
//! Addition and subtraction first rescale both significands to a common
//! least-significant-digit exponent, then delegate to integer arithmetic.
//! Division is computed to a finite number of digits controlled by
//! [`DecimalMode`]; results are otherwise exact.

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::big_int::{BigInt, Sign};
use crate::error::Error;

/// Digits kept by division when the caller's mode does not set a precision.
const DEFAULT_DIVISION_PRECISION: u64 = 20;

/// Direction applied to the last kept digit when digits are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Keep results exact; never discard digits.
    #[default]
    None,
    /// Towards negative infinity.
    Floor,
    /// Towards positive infinity.
    Ceiling,
    TowardsZero,
    AwayFromZero,
    /// To the nearest value; an exact half goes away from zero.
    HalfAwayFromZero,
    /// To the nearest value; an exact half goes towards zero.
    HalfTowardsZero,
}

/// Precision and rounding applied to operation results. The default mode
/// (`precision` zero, [`RoundingMode::None`]) leaves results unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalMode {
    pub precision: u64,
    pub rounding_mode: RoundingMode,
}

impl DecimalMode {
    pub fn new(precision: u64, rounding_mode: RoundingMode) -> DecimalMode {
        DecimalMode { precision, rounding_mode }
    }
}

#[derive(Debug, Clone)]
pub struct BigDecimal {
    significand: BigInt,
    exponent: BigInt,
    decimal_mode: DecimalMode,
}

// Construction
impl BigDecimal {
    pub fn zero() -> BigDecimal {
        BigDecimal {
            significand: BigInt::zero(),
            exponent: BigInt::zero(),
            decimal_mode: DecimalMode::default(),
        }
    }

    pub fn one() -> BigDecimal {
        BigDecimal {
            significand: BigInt::one(),
            exponent: BigInt::zero(),
            decimal_mode: DecimalMode::default(),
        }
    }

    /// `significand * 10^exponent`, with the exponent scaling the whole
    /// integer rather than its most significant digit.
    pub fn from_big_int_with_exponent(significand: BigInt, exponent: BigInt) -> BigDecimal {
        if significand.is_zero() {
            return BigDecimal::zero();
        }
        let digits = significand.number_of_decimal_digits();
        let exponent = &exponent + digits - 1u8;
        BigDecimal { significand, exponent, decimal_mode: DecimalMode::default() }
    }

    pub fn from_i64_with_exponent(value: i64, exponent: i64) -> BigDecimal {
        BigDecimal::from_big_int_with_exponent(BigInt::from(value), BigInt::from(exponent))
    }

    pub fn with_decimal_mode(mut self, decimal_mode: DecimalMode) -> BigDecimal {
        self.decimal_mode = decimal_mode;
        self
    }

    pub fn significand(&self) -> &BigInt {
        &self.significand
    }

    pub fn exponent(&self) -> &BigInt {
        &self.exponent
    }

    pub fn decimal_mode(&self) -> DecimalMode {
        self.decimal_mode
    }

    /// Rebuilds the scientific exponent from a significand whose least
    /// significant digit sits at `10^low`.
    fn from_aligned(significand: BigInt, low: BigInt) -> BigDecimal {
        if significand.is_zero() {
            return BigDecimal::zero();
        }
        let exponent = &low + significand.number_of_decimal_digits() - 1u8;
        BigDecimal { significand, exponent, decimal_mode: DecimalMode::default() }
    }

    /// Exponent of the least significant digit of the significand.
    fn low_exponent(&self) -> BigInt {
        &self.exponent - self.significand.number_of_decimal_digits() + 1u8
    }
}

macro_rules! impl_int_to_big_dec {
    ($($t:ty),*) => {$(
        impl From<$t> for BigDecimal {
            fn from(value: $t) -> Self {
                BigDecimal::from(BigInt::from(value))
            }
        }
    )*};
}

impl_int_to_big_dec!(i8, i16, i32, i64);

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        BigDecimal::from_big_int_with_exponent(value, BigInt::zero())
    }
}

// Arithmetic
impl BigDecimal {
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    /// Rescales both significands to the smaller of the two
    /// least-significant-digit exponents, which becomes the common scale.
    fn align(first: &BigDecimal, second: &BigDecimal) -> Result<(BigInt, BigInt, BigInt), Error> {
        let first_low = first.low_exponent();
        let second_low = second.low_exponent();
        match first_low.compare(&second_low) {
            Ordering::Equal => Ok((first.significand.clone(), second.significand.clone(), first_low)),
            Ordering::Greater => {
                let scaled = &first.significand * &scale_factor(&first_low, &second_low)?;
                Ok((scaled, second.significand.clone(), second_low))
            }
            Ordering::Less => {
                let scaled = &second.significand * &scale_factor(&second_low, &first_low)?;
                Ok((first.significand.clone(), scaled, first_low))
            }
        }
    }

    pub fn add(&self, other: &BigDecimal) -> Result<BigDecimal, Error> {
        self.add_with_mode(other, self.decimal_mode)
    }

    pub fn add_with_mode(&self, other: &BigDecimal, mode: DecimalMode) -> Result<BigDecimal, Error> {
        let (first, second, low) = BigDecimal::align(self, other)?;
        Ok(BigDecimal::from_aligned(&first + &second, low).round(mode))
    }

    pub fn subtract(&self, other: &BigDecimal) -> Result<BigDecimal, Error> {
        self.subtract_with_mode(other, self.decimal_mode)
    }

    pub fn subtract_with_mode(&self, other: &BigDecimal, mode: DecimalMode) -> Result<BigDecimal, Error> {
        let (first, second, low) = BigDecimal::align(self, other)?;
        Ok(BigDecimal::from_aligned(first.subtract(&second), low).round(mode))
    }

    pub fn multiply(&self, other: &BigDecimal) -> Result<BigDecimal, Error> {
        self.multiply_with_mode(other, self.decimal_mode)
    }

    pub fn multiply_with_mode(&self, other: &BigDecimal, mode: DecimalMode) -> Result<BigDecimal, Error> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let significand = self.significand.multiply(&other.significand);
        let low = self.low_exponent() + other.low_exponent();
        Ok(BigDecimal::from_aligned(significand, low).round(mode))
    }

    /// Quotient computed to `mode.precision` decimal digits (or a default
    /// when the mode sets none), truncating the digits beyond that before
    /// any rounding applies.
    pub fn divide(&self, other: &BigDecimal) -> Result<BigDecimal, Error> {
        self.divide_with_mode(other, self.decimal_mode)
    }

    pub fn divide_with_mode(&self, other: &BigDecimal, mode: DecimalMode) -> Result<BigDecimal, Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let precision = if mode.precision == 0 {
            DEFAULT_DIVISION_PRECISION
        } else {
            mode.precision
        };
        let scaled = &self.significand * &BigInt::ten().pow(precision);
        let quotient = scaled.divide(&other.significand)?;
        let low = self.low_exponent().subtract(&other.low_exponent()) - precision;
        Ok(BigDecimal::from_aligned(quotient, low).round(mode))
    }

    /// Remainder over the aligned significands; its sign follows the
    /// integer remainder's signs-match rule.
    pub fn remainder(&self, other: &BigDecimal) -> Result<BigDecimal, Error> {
        self.remainder_with_mode(other, self.decimal_mode)
    }

    pub fn remainder_with_mode(&self, other: &BigDecimal, mode: DecimalMode) -> Result<BigDecimal, Error> {
        let (first, second, low) = BigDecimal::align(self, other)?;
        let remainder = first.remainder(&second)?;
        Ok(BigDecimal::from_aligned(remainder, low).round(mode))
    }

    pub fn pow(&self, exponent: u64) -> BigDecimal {
        if self.is_zero() {
            return if exponent == 0 { BigDecimal::one() } else { BigDecimal::zero() };
        }
        let significand = self.significand.pow(exponent);
        let low = self.low_exponent().multiply(&BigInt::from(exponent));
        BigDecimal::from_aligned(significand, low)
    }

    pub fn negate(&self) -> BigDecimal {
        BigDecimal {
            significand: self.significand.negate(),
            exponent: self.exponent.clone(),
            decimal_mode: self.decimal_mode,
        }
    }

    pub fn abs(&self) -> BigDecimal {
        BigDecimal {
            significand: self.significand.abs(),
            exponent: self.exponent.clone(),
            decimal_mode: self.decimal_mode,
        }
    }

    /// Discards digits beyond `mode.precision` and fixes the last kept
    /// digit up per the rounding direction. A mode without rounding, or a
    /// significand already within the precision, leaves the value as is.
    pub fn round(&self, mode: DecimalMode) -> BigDecimal {
        if mode.rounding_mode == RoundingMode::None || mode.precision == 0 {
            return self.clone();
        }
        let digits = self.significand.number_of_decimal_digits();
        if digits <= mode.precision {
            return self.clone();
        }
        let dropped = digits - mode.precision;
        let divisor = BigInt::ten().pow(dropped);
        let (quotient, remainder) = match self.significand.divide_and_remainder(&divisor) {
            Ok(result) => result,
            Err(_) => unreachable!("a power of ten is never zero"),
        };
        let discarded = !remainder.is_zero();
        let negative = self.significand.sign() == Sign::Negative;
        // Where the discarded digits sit relative to half of one kept unit.
        let half = remainder.abs().multiply(&BigInt::from(2)).compare(&divisor);
        let one = BigInt::one();
        let adjusted = match mode.rounding_mode {
            RoundingMode::None | RoundingMode::TowardsZero => quotient,
            RoundingMode::Floor if discarded && negative => &quotient - &one,
            RoundingMode::Floor => quotient,
            RoundingMode::Ceiling if discarded && !negative => &quotient + &one,
            RoundingMode::Ceiling => quotient,
            RoundingMode::AwayFromZero if discarded && negative => &quotient - &one,
            RoundingMode::AwayFromZero if discarded => &quotient + &one,
            RoundingMode::AwayFromZero => quotient,
            RoundingMode::HalfAwayFromZero if half != Ordering::Less && negative => {
                &quotient - &one
            }
            RoundingMode::HalfAwayFromZero if half != Ordering::Less => &quotient + &one,
            RoundingMode::HalfAwayFromZero => quotient,
            RoundingMode::HalfTowardsZero if half == Ordering::Greater && negative => {
                &quotient - &one
            }
            RoundingMode::HalfTowardsZero if half == Ordering::Greater => &quotient + &one,
            RoundingMode::HalfTowardsZero => quotient,
        };
        let low = self.low_exponent() + dropped;
        BigDecimal::from_aligned(adjusted, low).with_decimal_mode(mode)
    }
}

/// `10^(high - low)`, the factor that moves a significand from the scale
/// `high` down to `low`.
fn scale_factor(high: &BigInt, low: &BigInt) -> Result<BigInt, Error> {
    let difference = high.subtract(low);
    let places = u64::try_from(&difference).map_err(|_| Error::ExponentOutOfRange)?;
    Ok(BigInt::ten().pow(places))
}

// Comparison by numeric value; representations with trailing zeros in the
// significand compare equal to their minimal forms.
impl BigDecimal {
    pub fn compare(&self, other: &BigDecimal) -> Ordering {
        let first_sign = self.significand.sign();
        let second_sign = other.significand.sign();
        if first_sign != second_sign {
            return first_sign.to_i32().cmp(&second_sign.to_i32());
        }
        if first_sign == Sign::Zero {
            return Ordering::Equal;
        }
        // Same non-zero sign: the scientific exponent orders magnitudes.
        let by_exponent = self.exponent.compare(&other.exponent);
        if by_exponent != Ordering::Equal {
            return if first_sign == Sign::Negative {
                by_exponent.reverse()
            } else {
                by_exponent
            };
        }
        match BigDecimal::align(self, other) {
            Ok((first, second, _)) => first.compare(&second),
            Err(_) => unreachable!("equal exponents differ by at most a digit count"),
        }
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Rendering
impl BigDecimal {
    /// Full fixed-point digit string without an exponent marker. Fails when
    /// the decimal point position does not fit a native index.
    pub fn to_string_expanded(&self) -> Result<String, Error> {
        if self.is_zero() {
            return Ok("0".to_string());
        }
        let low = i64::try_from(&self.low_exponent()).map_err(|_| Error::ExponentOutOfRange)?;
        let digits = self.significand.abs().to_string_radix(10);
        let body = if low >= 0 {
            let mut body = digits;
            body.push_str(&"0".repeat(low as usize));
            body
        } else {
            let fraction = low.unsigned_abs() as usize;
            let with_dot = if fraction >= digits.len() {
                format!("0.{}{}", "0".repeat(fraction - digits.len()), digits)
            } else {
                format!(
                    "{}.{}",
                    &digits[..digits.len() - fraction],
                    &digits[digits.len() - fraction..]
                )
            };
            with_dot.trim_end_matches('0').trim_end_matches('.').to_string()
        };
        if self.significand.sign() == Sign::Negative {
            Ok(format!("-{}", body))
        } else {
            Ok(body)
        }
    }
}

impl Display for BigDecimal {
    /// Scientific notation: one digit, an optional fraction with trailing
    /// zeros removed, and an explicitly signed decimal exponent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.significand.sign() == Sign::Negative {
            f.write_str("-")?;
        }
        let digits = self.significand.abs().to_string_radix(10);
        let (head, tail) = digits.split_at(1);
        f.write_str(head)?;
        let fraction = tail.trim_end_matches('0');
        if !fraction.is_empty() {
            write!(f, ".{}", fraction)?;
        }
        if self.exponent.sign() == Sign::Negative {
            write!(f, "E{}", self.exponent)
        } else {
            write!(f, "E+{}", self.exponent)
        }
    }
}

macro_rules! impl_big_dec_binop {
    ($op:ident, $method:ident, $delegate:ident) => {
        impl $op for BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                match BigDecimal::$delegate(&self, &rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl $op for &BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                match BigDecimal::$delegate(self, rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl $op<&BigDecimal> for BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                $op::$method(&self, rhs)
            }
        }

        impl $op<BigDecimal> for &BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                $op::$method(self, &rhs)
            }
        }
    };
}

impl_big_dec_binop!(Add, add, add);
impl_big_dec_binop!(Sub, sub, subtract);
impl_big_dec_binop!(Mul, mul, multiply);
impl_big_dec_binop!(Div, div, divide);
impl_big_dec_binop!(Rem, rem, remainder);

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negate()
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negate()
    }
}
