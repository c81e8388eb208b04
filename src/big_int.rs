//! # BigInt
//! Immutable arbitrary-precision signed integers in sign-magnitude form.
//!
//! The magnitude work is delegated to the compile-time-selected word-array
//! backend in [`crate::arithmetic`]; this layer resolves signs, zero cases
//! and the operand order for magnitude subtraction.
//!
//! # Example
//! ```
//! use bignum::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "-900000000000".into();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg, Not,
};
use std::str::FromStr;

use crate::arithmetic::backend;
use crate::cache::{NEG_CACHE, POS_CACHE};
use crate::constants::{LOG_10_OF_2, MAX_CONSTANT};
use crate::error::Error;

/// Sign tag of a [`BigInt`]. A magnitude is all-zero exactly when the sign is
/// [`Sign::Zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub fn to_i32(self) -> i32 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
            Sign::Zero => 0,
        }
    }

    fn flipped(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
        }
    }
}

impl Not for Sign {
    type Output = Sign;

    fn not(self) -> Sign {
        self.flipped()
    }
}

/// Sign of a product, quotient or remainder of two non-zero operands:
/// positive exactly when the operand signs match.
fn resolve_sign(first: Sign, second: Sign) -> Sign {
    if first == second {
        Sign::Positive
    } else {
        Sign::Negative
    }
}

#[derive(Debug, Clone)]
pub struct BigInt {
    magnitude: Vec<backend::Word>,
    sign: Sign,
}

// Construction
impl BigInt {
    pub fn zero() -> BigInt {
        BigInt { magnitude: backend::zero(), sign: Sign::Zero }
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    pub fn ten() -> BigInt {
        POS_CACHE[10].clone()
    }

    pub(crate) fn small(value: u32, sign: Sign) -> BigInt {
        if value == 0 {
            BigInt::zero()
        } else {
            BigInt { magnitude: vec![value], sign }
        }
    }

    /// Canonicalizes the magnitude and resolves the zero sign. Non-zero
    /// magnitudes must come with a non-zero sign.
    pub(crate) fn from_words(magnitude: Vec<backend::Word>, sign: Sign) -> BigInt {
        let magnitude = backend::strip_trailing_zeros(magnitude);
        if backend::is_zero(&magnitude) {
            return BigInt { magnitude, sign: Sign::Zero };
        }
        debug_assert!(sign != Sign::Zero, "non-zero magnitude tagged with zero sign");
        BigInt { magnitude, sign }
    }

    fn value_of(value: u64, sign: Sign) -> BigInt {
        if value == 0 {
            BigInt::zero()
        } else if value <= MAX_CONSTANT as u64 {
            match sign {
                Sign::Negative => NEG_CACHE[value as usize].clone(),
                _ => POS_CACHE[value as usize].clone(),
            }
        } else {
            BigInt { magnitude: backend::from_u64(value), sign }
        }
    }

    /// Parses an optionally signed digit string in the given base (2..=36).
    /// A string holding only a sign character has no digits and is rejected.
    pub fn from_str_radix(string: &str, base: u32) -> Result<BigInt, Error> {
        let (sign, digits) = match string.as_bytes().first() {
            Some(b'+') => (Sign::Positive, &string[1..]),
            Some(b'-') => (Sign::Negative, &string[1..]),
            _ => (Sign::Positive, string),
        };
        if digits.is_empty() {
            return Err(Error::InvalidDigit { string: string.to_string(), base });
        }
        let magnitude = backend::parse_for_base(digits, base)?;
        Ok(BigInt::from_words(magnitude, sign))
    }

    /// Sign-magnitude construction from big-endian bytes. `sign` must not be
    /// [`Sign::Zero`] unless the bytes are all zero.
    pub fn from_be_bytes(bytes: &[u8], sign: Sign) -> BigInt {
        let mut magnitude = Vec::with_capacity(bytes.len() / 4 + 1);
        for chunk in bytes.rchunks(4) {
            let word = chunk.iter().fold(0u32, |acc, &byte| (acc << 8) | byte as u32);
            magnitude.push(word);
        }
        BigInt::from_words(magnitude, sign)
    }

    /// Sign-magnitude construction from little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8], sign: Sign) -> BigInt {
        let mut magnitude = Vec::with_capacity(bytes.len() / 4 + 1);
        for chunk in bytes.chunks(4) {
            let word = chunk.iter().rev().fold(0u32, |acc, &byte| (acc << 8) | byte as u32);
            magnitude.push(word);
        }
        BigInt::from_words(magnitude, sign)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u:ty),*) => {$(
        impl From<$u> for BigInt {
            fn from(value: $u) -> Self {
                BigInt::value_of(value as u64, Sign::Positive)
            }
        }
    )*};
}

macro_rules! impl_signed_to_big_int {
    ($($i:ty),*) => {$(
        impl From<$i> for BigInt {
            fn from(value: $i) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::value_of(value.unsigned_abs() as u64, sign)
            }
        }
    )*};
}

impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl From<&str> for BigInt {
    fn from(value: &str) -> Self {
        match BigInt::from_str_radix(value, 10) {
            Ok(parsed) => parsed,
            Err(error) => panic!("{}", error),
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(string, 10)
    }
}

macro_rules! impl_try_from_big_int_unsigned {
    ($($u:ty),*) => {$(
        impl TryFrom<&BigInt> for $u {
            type Error = Error;

            fn try_from(value: &BigInt) -> Result<$u, Error> {
                if value.sign == Sign::Negative {
                    return Err(Error::UnsupportedConversion(format!(
                        "negative value does not fit in {}", stringify!($u)
                    )));
                }
                if backend::bit_length(&value.magnitude) > <$u>::BITS as usize {
                    return Err(Error::UnsupportedConversion(format!(
                        "value out of range for {}", stringify!($u)
                    )));
                }
                Ok(backend::to_u64(&value.magnitude) as $u)
            }
        }
    )*};
}

macro_rules! impl_try_from_big_int_signed {
    ($($i:ty),*) => {$(
        impl TryFrom<&BigInt> for $i {
            type Error = Error;

            fn try_from(value: &BigInt) -> Result<$i, Error> {
                let bits = backend::bit_length(&value.magnitude);
                let raw = backend::to_u64(&value.magnitude);
                match value.sign {
                    Sign::Zero => Ok(0),
                    Sign::Positive if bits < <$i>::BITS as usize => Ok(raw as $i),
                    Sign::Negative if bits < <$i>::BITS as usize => Ok(-(raw as $i)),
                    // The magnitude of MIN has one more bit than MAX.
                    Sign::Negative if bits == <$i>::BITS as usize
                        && raw == 1 << (<$i>::BITS - 1) => Ok(<$i>::MIN),
                    _ => Err(Error::UnsupportedConversion(format!(
                        "value out of range for {}", stringify!($i)
                    ))),
                }
            }
        }
    )*};
}

impl_try_from_big_int_unsigned!(u8, u16, u32, u64);
impl_try_from_big_int_signed!(i8, i16, i32, i64);

// Comparison by numeric value, not representation
impl BigInt {
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Zero, Sign::Zero) => Ordering::Equal,
            (Sign::Zero, Sign::Positive) => Ordering::Less,
            (Sign::Zero, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Zero) => Ordering::Greater,
            (Sign::Negative, Sign::Zero) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => {
                backend::compare(&self.magnitude, &other.magnitude)
            }
            (Sign::Negative, Sign::Negative) => {
                backend::compare(&self.magnitude, &other.magnitude).reverse()
            }
        }
    }

    pub fn max(first: BigInt, second: BigInt) -> BigInt {
        if first.compare(&second) == Ordering::Less { second } else { first }
    }

    pub fn min(first: BigInt, second: BigInt) -> BigInt {
        if first.compare(&second) == Ordering::Greater { second } else { first }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Arithmetic
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn signum(&self) -> i32 {
        self.sign.to_i32()
    }

    pub fn negate(&self) -> BigInt {
        BigInt { magnitude: self.magnitude.clone(), sign: !self.sign }
    }

    pub fn abs(&self) -> BigInt {
        let sign = if self.sign == Sign::Zero { Sign::Zero } else { Sign::Positive };
        BigInt { magnitude: self.magnitude.clone(), sign }
    }

    pub fn add(&self, other: &BigInt) -> BigInt {
        if other.sign == Sign::Zero {
            return self.clone();
        }
        if self.sign == Sign::Zero {
            return other.clone();
        }
        if self.sign == other.sign {
            return BigInt::from_words(
                backend::add(&self.magnitude, &other.magnitude),
                self.sign,
            );
        }
        match backend::compare(&self.magnitude, &other.magnitude) {
            Ordering::Greater => BigInt::from_words(
                backend::subtract(&self.magnitude, &other.magnitude),
                self.sign,
            ),
            Ordering::Less => BigInt::from_words(
                backend::subtract(&other.magnitude, &self.magnitude),
                other.sign,
            ),
            Ordering::Equal => BigInt::zero(),
        }
    }

    pub fn subtract(&self, other: &BigInt) -> BigInt {
        // Zero operands short-circuit so no sign is flipped spuriously.
        if self.sign == Sign::Zero {
            return other.negate();
        }
        if other.sign == Sign::Zero {
            return self.clone();
        }
        if self.sign != other.sign {
            return BigInt::from_words(
                backend::add(&self.magnitude, &other.magnitude),
                self.sign,
            );
        }
        match backend::compare(&self.magnitude, &other.magnitude) {
            Ordering::Greater => BigInt::from_words(
                backend::subtract(&self.magnitude, &other.magnitude),
                self.sign,
            ),
            Ordering::Less => BigInt::from_words(
                backend::subtract(&other.magnitude, &self.magnitude),
                !self.sign,
            ),
            Ordering::Equal => BigInt::zero(),
        }
    }

    pub fn multiply(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_words(
            backend::multiply(&self.magnitude, &other.magnitude),
            resolve_sign(self.sign, other.sign),
        )
    }

    pub fn divide(&self, other: &BigInt) -> Result<BigInt, Error> {
        Ok(self.divide_and_remainder(other)?.0)
    }

    /// Remainder of truncating division. Its sign follows the same rule as
    /// the quotient's: positive exactly when the operand signs match. Note
    /// that this differs from the common convention where the remainder
    /// takes the dividend's sign.
    pub fn remainder(&self, other: &BigInt) -> Result<BigInt, Error> {
        Ok(self.divide_and_remainder(other)?.1)
    }

    /// Division truncating toward zero, with remainder.
    pub fn divide_and_remainder(&self, other: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        let sign = resolve_sign(self.sign, other.sign);
        let (quotient, remainder) = backend::divide(&self.magnitude, &other.magnitude)?;
        Ok((
            BigInt::from_words(quotient, sign),
            BigInt::from_words(remainder, sign),
        ))
    }

    /// Raises to a native-width exponent. `pow(0)` is one for every base,
    /// including zero.
    pub fn pow(&self, exponent: u64) -> BigInt {
        let sign = if self.sign == Sign::Negative && exponent % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        BigInt::from_words(backend::pow(&self.magnitude, exponent), sign)
    }

    /// Raises to an arbitrary-precision exponent. Exponents beyond `u64`
    /// fall back to repeated multiplication, which does not scale; huge
    /// exponents are out of scope.
    pub fn pow_big(&self, exponent: &BigInt) -> Result<BigInt, Error> {
        match exponent.sign {
            Sign::Negative => Err(Error::UnsupportedConversion(
                "negative exponent for integer pow".to_string(),
            )),
            Sign::Zero => Ok(BigInt::one()),
            Sign::Positive => {
                if let Ok(small) = u64::try_from(exponent) {
                    return Ok(self.pow(small));
                }
                let one = BigInt::one();
                let mut counter = exponent.clone();
                let mut result = BigInt::one();
                while !counter.is_zero() {
                    result = result.multiply(self);
                    counter = counter.subtract(&one);
                }
                Ok(result)
            }
        }
    }

    /// Exact count of decimal digits: a bit-length estimate corrected by
    /// counting the digits the estimate missed. Zero has zero digits.
    pub fn number_of_decimal_digits(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        let bit_len = backend::bit_length(&self.magnitude);
        let min_digits = (((bit_len - 1) as f64) * LOG_10_OF_2).ceil() as u64;
        let ten_power = backend::pow(&[10], min_digits);
        let (mut estimate_quotient, _) = match backend::divide(&self.magnitude, &ten_power) {
            Ok(result) => result,
            Err(_) => unreachable!("a power of ten is never zero"),
        };
        let mut counter = 0u64;
        while !backend::is_zero(&estimate_quotient) {
            estimate_quotient = backend::divide_by_word(&estimate_quotient, 10).0;
            counter += 1;
        }
        counter + min_digits
    }
}

// Bit operations; the magnitude is operated on, the sign rides along.
impl BigInt {
    pub fn bit_length(&self) -> usize {
        backend::bit_length(&self.magnitude)
    }

    pub fn number_of_words(&self) -> usize {
        self.magnitude.len()
    }

    pub fn number_of_leading_zero_words(&self) -> usize {
        backend::number_of_leading_zero_words(&self.magnitude)
    }

    pub fn bit_at(&self, position: usize) -> bool {
        backend::bit_at(&self.magnitude, position)
    }

    pub fn set_bit_at(&self, position: usize, bit: bool) -> BigInt {
        let sign = if self.sign == Sign::Zero { Sign::Positive } else { self.sign };
        BigInt::from_words(backend::set_bit_at(&self.magnitude, position, bit), sign)
    }

    fn bitwise_sign(&self, other: &BigInt) -> Sign {
        if self.sign != Sign::Zero {
            self.sign
        } else if other.sign != Sign::Zero {
            other.sign
        } else {
            Sign::Positive
        }
    }

    pub fn and(&self, other: &BigInt) -> BigInt {
        BigInt::from_words(
            backend::and(&self.magnitude, &other.magnitude),
            self.bitwise_sign(other),
        )
    }

    pub fn or(&self, other: &BigInt) -> BigInt {
        BigInt::from_words(
            backend::or(&self.magnitude, &other.magnitude),
            self.bitwise_sign(other),
        )
    }

    pub fn xor(&self, other: &BigInt) -> BigInt {
        BigInt::from_words(
            backend::xor(&self.magnitude, &other.magnitude),
            self.bitwise_sign(other),
        )
    }

    /// Inverts only within the magnitude's current bit span, not in
    /// two's-complement: `not(0b1100)` is `0b0011`, i.e. 3.
    pub fn not(&self) -> BigInt {
        let sign = if self.sign == Sign::Zero { Sign::Positive } else { self.sign };
        BigInt::from_words(backend::not(&self.magnitude), sign)
    }
}

// Rendering and byte extraction
impl BigInt {
    /// Inverse of [`BigInt::from_str_radix`] for bases 2..=36.
    pub fn to_string_radix(&self, base: u32) -> String {
        assert!((2..=36).contains(&base), "base {} out of range 2..=36", base);
        let digits = backend::to_string(&self.magnitude, base);
        if self.sign == Sign::Negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Minimal big-endian magnitude bytes; zero renders as a single zero
    /// byte. The sign is not encoded (see the two's-complement codec for a
    /// sign-carrying encoding).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.magnitude.len() * 4);
        for &word in self.magnitude.iter().rev() {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        let first_non_zero = bytes
            .iter()
            .position(|&byte| byte != 0)
            .unwrap_or(bytes.len() - 1);
        bytes.split_off(first_non_zero)
    }

    /// Minimal little-endian magnitude bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_be_bytes();
        bytes.reverse();
        bytes
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_radix(10))
    }
}

macro_rules! impl_big_int_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $delegate:ident) => {
        impl $op for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$delegate(&self, &rhs)
            }
        }

        impl $op for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$delegate(self, rhs)
            }
        }

        impl $op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$delegate(&self, rhs)
            }
        }

        impl $op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$delegate(self, &rhs)
            }
        }

        impl $assign for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = BigInt::$delegate(self, &rhs);
            }
        }

        impl $assign<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$delegate(self, rhs);
            }
        }
    };
}

impl_big_int_binop!(Add, add, AddAssign, add_assign, add);
impl_big_int_binop!(Sub, sub, SubAssign, sub_assign, subtract);
impl_big_int_binop!(Mul, mul, MulAssign, mul_assign, multiply);
impl_big_int_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
impl_big_int_binop!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_big_int_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

macro_rules! impl_big_int_fallible_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $delegate:ident) => {
        impl $op for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                match BigInt::$delegate(&self, &rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl $op for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                match BigInt::$delegate(self, rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl $op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $op::$method(&self, rhs)
            }
        }

        impl $op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $op::$method(self, &rhs)
            }
        }

        impl $assign for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = $op::$method(&*self, &rhs);
            }
        }

        impl $assign<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = $op::$method(&*self, rhs);
            }
        }
    };
}

impl_big_int_fallible_binop!(Div, div, DivAssign, div_assign, divide);
impl_big_int_fallible_binop!(Rem, rem, RemAssign, rem_assign, remainder);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, places: u32) -> BigInt {
        BigInt::from_words(
            backend::shift_left(&self.magnitude, places as usize),
            self.sign,
        )
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, places: u32) -> BigInt {
        &self << places
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, places: u32) {
        *self = &*self << places;
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, places: u32) -> BigInt {
        BigInt::from_words(
            backend::shift_right(&self.magnitude, places as usize),
            self.sign,
        )
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, places: u32) -> BigInt {
        &self >> places
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, places: u32) {
        *self = &*self >> places;
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        BigInt::not(&self)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        BigInt::not(self)
    }
}

// Interop with native fixed-width numbers
macro_rules! impl_primitive_interop {
    ($($t:ty),*) => {$(
        impl Add<$t> for &BigInt {
            type Output = BigInt;

            fn add(self, rhs: $t) -> BigInt {
                BigInt::add(self, &BigInt::from(rhs))
            }
        }

        impl Sub<$t> for &BigInt {
            type Output = BigInt;

            fn sub(self, rhs: $t) -> BigInt {
                BigInt::subtract(self, &BigInt::from(rhs))
            }
        }

        impl Mul<$t> for &BigInt {
            type Output = BigInt;

            fn mul(self, rhs: $t) -> BigInt {
                BigInt::multiply(self, &BigInt::from(rhs))
            }
        }

        impl Div<$t> for &BigInt {
            type Output = BigInt;

            fn div(self, rhs: $t) -> BigInt {
                self / &BigInt::from(rhs)
            }
        }

        impl Rem<$t> for &BigInt {
            type Output = BigInt;

            fn rem(self, rhs: $t) -> BigInt {
                self % &BigInt::from(rhs)
            }
        }

        impl Add<$t> for BigInt {
            type Output = BigInt;

            fn add(self, rhs: $t) -> BigInt {
                &self + rhs
            }
        }

        impl Sub<$t> for BigInt {
            type Output = BigInt;

            fn sub(self, rhs: $t) -> BigInt {
                &self - rhs
            }
        }

        impl Mul<$t> for BigInt {
            type Output = BigInt;

            fn mul(self, rhs: $t) -> BigInt {
                &self * rhs
            }
        }

        impl Div<$t> for BigInt {
            type Output = BigInt;

            fn div(self, rhs: $t) -> BigInt {
                &self / rhs
            }
        }

        impl Rem<$t> for BigInt {
            type Output = BigInt;

            fn rem(self, rhs: $t) -> BigInt {
                &self % rhs
            }
        }

        impl PartialEq<$t> for BigInt {
            fn eq(&self, other: &$t) -> bool {
                self.compare(&BigInt::from(*other)) == Ordering::Equal
            }
        }

        impl PartialOrd<$t> for BigInt {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.compare(&BigInt::from(*other)))
            }
        }
    )*};
}

impl_primitive_interop!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn parse_and_negate_cancel() {
        let negative: BigInt = "-123".into();
        let positive: BigInt = "123".into();
        assert_eq!(negative + positive, BigInt::zero());
    }

    #[test]
    fn additive_inverses_cancel_for_random_values() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..500 {
            let x = BigInt::from(rng.gen::<i64>());
            assert_eq!(&x + &x.negate(), BigInt::zero());
            assert_eq!(&x - &x, BigInt::zero());
        }
    }

    #[test]
    fn ring_laws_hold_against_i128() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let (a, b, c) = (rng.gen::<i32>(), rng.gen::<i32>(), rng.gen::<i32>());
            let (x, y, z) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));
            let (a, b, c) = (a as i128, b as i128, c as i128);
            assert_eq!((&x + &y) + &z, &x + &(&y + &z));
            assert_eq!((&x * &y) * &z, &x * &(&y * &z));
            assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
            assert_eq!((&x * &y).to_string(), (a * b).to_string());
            assert_eq!((&x + &y).to_string(), (a + b).to_string());
            assert_eq!((&x - &z).to_string(), (a - c).to_string());
        }
    }

    #[test]
    fn operators_accept_mixed_value_and_reference_operands() {
        let seven = BigInt::from(7);
        let three = BigInt::from(3);
        assert_eq!(BigInt::from(7) + &three, BigInt::from(10));
        assert_eq!(&seven + BigInt::from(3), BigInt::from(10));
        assert_eq!(BigInt::from(7) - &three, BigInt::from(4));
        assert_eq!(&seven * BigInt::from(3), BigInt::from(21));
        assert_eq!(BigInt::from(7) / &three, BigInt::from(2));
        assert_eq!(&seven % BigInt::from(3), BigInt::one());
        assert_eq!(BigInt::from(0b1100) & &BigInt::from(0b1010), BigInt::from(0b1000));
        assert_eq!((&seven + &three) + &three, BigInt::from(13));
    }

    #[test]
    fn division_truncates_toward_zero() {
        let forty = BigInt::from(40);
        let twenty = BigInt::from(20);
        let (q, r) = forty.divide_and_remainder(&twenty).unwrap();
        assert_eq!(q, BigInt::from(2));
        assert_eq!(r, BigInt::zero());

        assert_eq!(BigInt::from(7) / BigInt::from(2), BigInt::from(3));
        assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
        assert_eq!(BigInt::from(7) / BigInt::from(-2), BigInt::from(-3));
        assert_eq!(BigInt::from(-7) / BigInt::from(-2), BigInt::from(3));
    }

    #[test]
    fn remainder_sign_follows_the_signs_match_rule() {
        assert_eq!(BigInt::from(7) % BigInt::from(3), BigInt::from(1));
        assert_eq!(BigInt::from(-7) % BigInt::from(3), BigInt::from(-1));
        assert_eq!(BigInt::from(7) % BigInt::from(-3), BigInt::from(-1));
        assert_eq!(BigInt::from(-7) % BigInt::from(-3), BigInt::from(1));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            BigInt::from(1).divide(&BigInt::zero()),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            BigInt::zero().remainder(&BigInt::zero()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn subtracting_zero_keeps_the_operand_sign() {
        let x = BigInt::from(-5);
        assert_eq!(&x - &BigInt::zero(), x);
        assert_eq!(&BigInt::zero() - &x, BigInt::from(5));
        assert_eq!(&BigInt::zero() - &BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn ordering_handles_all_sign_combinations() {
        let mut values: Vec<BigInt> =
            [3i64, -2, 0, 7, -9, 1].iter().map(|&v| BigInt::from(v)).collect();
        values.sort();
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, ["-9", "-2", "0", "1", "3", "7"]);
        assert!(BigInt::from(-1) < BigInt::zero());
        assert!(BigInt::from(1) > BigInt::from(-1));
        assert_eq!(BigInt::max(BigInt::from(3), BigInt::from(-4)), BigInt::from(3));
        assert_eq!(BigInt::min(BigInt::from(3), BigInt::from(-4)), BigInt::from(-4));
    }

    #[test]
    fn comparison_with_primitives() {
        let x = BigInt::from(42);
        assert_eq!(x, 42i64);
        assert!(x > 41u8);
        assert!(x < 43i32);
        assert_eq!(x.clone() + 1i32, 43i64);
        assert_eq!(x * 2u32, 84i64);
    }

    #[test]
    fn native_conversions_round_trip_and_reject_overflow() {
        assert_eq!(i64::try_from(&BigInt::from(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(i64::try_from(&BigInt::from(i64::MAX)).unwrap(), i64::MAX);
        assert_eq!(u64::try_from(&BigInt::from(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(u8::try_from(&BigInt::from(255u8)).unwrap(), 255);
        assert_eq!(i64::try_from(&BigInt::zero()).unwrap(), 0);

        assert!(matches!(
            u64::try_from(&BigInt::from(-1)),
            Err(Error::UnsupportedConversion(_))
        ));
        assert!(matches!(
            u8::try_from(&BigInt::from(256)),
            Err(Error::UnsupportedConversion(_))
        ));
        let too_big = BigInt::from(i64::MAX) + 1;
        assert!(matches!(
            i64::try_from(&too_big),
            Err(Error::UnsupportedConversion(_))
        ));
        // MIN fits although its magnitude needs a full word more than MAX.
        let min = BigInt::from(i64::MIN);
        assert_eq!(i64::try_from(&min).unwrap(), i64::MIN);
        assert!(matches!(
            i64::try_from(&(min - 1)),
            Err(Error::UnsupportedConversion(_))
        ));
    }

    #[test]
    fn pow_sign_parity_and_conventions() {
        assert_eq!(BigInt::from(-2).pow(3), BigInt::from(-8));
        assert_eq!(BigInt::from(-2).pow(2), BigInt::from(4));
        assert_eq!(BigInt::zero().pow(0), BigInt::one());
        assert_eq!(BigInt::zero().pow(9), BigInt::zero());
        assert_eq!(
            BigInt::from(3).pow_big(&BigInt::from(4)).unwrap(),
            BigInt::from(81)
        );
        assert!(BigInt::from(3).pow_big(&BigInt::from(-1)).is_err());
        assert_eq!(
            BigInt::from(3).pow_big(&BigInt::zero()).unwrap(),
            BigInt::one()
        );
    }

    #[test]
    fn decimal_digit_counts_are_exact() {
        assert_eq!(BigInt::zero().number_of_decimal_digits(), 0);
        assert_eq!(BigInt::one().number_of_decimal_digits(), 1);
        assert_eq!(BigInt::from(9).number_of_decimal_digits(), 1);
        assert_eq!(BigInt::from(10).number_of_decimal_digits(), 2);
        assert_eq!(BigInt::from(-999).number_of_decimal_digits(), 3);
        assert_eq!(BigInt::from(1000).number_of_decimal_digits(), 4);
        for exponent in [5u64, 19, 20, 40, 100] {
            let power = BigInt::ten().pow(exponent);
            assert_eq!(power.number_of_decimal_digits(), exponent + 1);
            assert_eq!((power - 1u8).number_of_decimal_digits(), exponent);
        }
    }

    #[test]
    fn shifts_preserve_sign() {
        assert_eq!(BigInt::from(1) << 100, BigInt::from(2).pow(100));
        assert_eq!(BigInt::from(-1024) >> 3, BigInt::from(-128));
        assert_eq!(BigInt::from(-1) >> 50, BigInt::zero());
        assert_eq!(BigInt::from(-3) << 1, BigInt::from(-6));
    }

    #[test]
    fn bit_operations_preserve_sign_tags() {
        assert_eq!(BigInt::from(0b1100) & BigInt::from(0b1010), BigInt::from(0b1000));
        assert_eq!(BigInt::from(0b1100) | BigInt::from(0b1010), BigInt::from(0b1110));
        assert_eq!(BigInt::from(0b1100) ^ BigInt::from(0b1100), BigInt::zero());
        assert_eq!(!BigInt::from(0b1100), BigInt::from(0b0011));
        assert_eq!(!BigInt::zero(), BigInt::zero());
        assert!(BigInt::from(4).bit_at(2));
        assert_eq!(BigInt::zero().set_bit_at(3, true), BigInt::from(8));
        assert_eq!(BigInt::from(-6).set_bit_at(0, true), BigInt::from(-7));
    }

    #[test]
    fn string_round_trips() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let value = BigInt::from(rng.gen::<i64>());
            assert_eq!(value.to_string().parse::<BigInt>().unwrap(), value);
            assert_eq!(
                BigInt::from_str_radix(&value.to_string_radix(16), 16).unwrap(),
                value
            );
        }
        assert_eq!(BigInt::from(255).to_string_radix(16), "ff");
        assert_eq!(BigInt::from(-255).to_string_radix(16), "-ff");
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!("+0".parse::<BigInt>().unwrap(), BigInt::zero());
        assert_eq!("-0".parse::<BigInt>().unwrap().signum(), 0);
    }

    #[test]
    fn sign_only_and_empty_strings_are_rejected() {
        assert!(matches!("".parse::<BigInt>(), Err(Error::InvalidDigit { .. })));
        assert!(matches!("-".parse::<BigInt>(), Err(Error::InvalidDigit { .. })));
        assert!(matches!("+".parse::<BigInt>(), Err(Error::InvalidDigit { .. })));
        assert!(matches!("1-2".parse::<BigInt>(), Err(Error::InvalidDigit { .. })));
    }

    #[test]
    fn byte_arrays_round_trip() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let value = rng.gen::<u64>();
            let big = BigInt::from(value);
            assert_eq!(BigInt::from_be_bytes(&big.to_be_bytes(), Sign::Positive), big);
            assert_eq!(BigInt::from_le_bytes(&big.to_le_bytes(), Sign::Positive), big);
        }
        assert_eq!(BigInt::zero().to_be_bytes(), vec![0]);
        assert_eq!(BigInt::from_be_bytes(&[], Sign::Zero), BigInt::zero());
        assert_eq!(
            BigInt::from_be_bytes(&[0x01, 0x00], Sign::Negative),
            BigInt::from(-256)
        );
    }

    #[test]
    fn small_value_cache_is_shared() {
        assert_eq!(BigInt::from(12u8), BigInt::from(12i64));
        assert_eq!(BigInt::from(-16), BigInt::from(-16isize));
        assert_eq!(BigInt::from(0u32), BigInt::zero());
        assert_eq!(BigInt::one() + BigInt::from(9), BigInt::ten());
    }
}
