//! The 32-bit-limb arithmetic backend.
//!
//! A magnitude is a little-endian `Vec<u32>` (least-significant word first)
//! with no most-significant zero words; canonical zero is the single word
//! `[0]`. Every intermediate single-word sum or product is computed in `u64`,
//! so carries never overflow the computation container.
//!
//! All functions are pure and value-producing. Inputs with extra
//! most-significant zero words are tolerated; outputs are always canonical.

use std::cmp::Ordering;

use crate::constants::*;
use crate::error::Error;

pub type Word = u32;

const WORD_BITS: usize = 32;
const LOW_MASK: u64 = 0xFFFF_FFFF;

pub fn zero() -> Vec<Word> {
    vec![0]
}

pub fn one() -> Vec<Word> {
    vec![1]
}

pub fn is_zero(operand: &[Word]) -> bool {
    operand.iter().all(|&word| word == 0)
}

/// Number of words up to and including the most significant non-zero word.
fn effective_len(operand: &[Word]) -> usize {
    let mut len = operand.len();
    while len > 0 && operand[len - 1] == 0 {
        len -= 1;
    }
    len
}

pub fn number_of_leading_zero_words(operand: &[Word]) -> usize {
    operand.len() - effective_len(operand)
}

/// Drops most-significant zero words, leaving `[0]` for zero.
pub fn strip_trailing_zeros(mut magnitude: Vec<Word>) -> Vec<Word> {
    while magnitude.len() > 1 && magnitude.last() == Some(&0) {
        magnitude.pop();
    }
    if magnitude.is_empty() {
        magnitude.push(0);
    }
    magnitude
}

pub fn bit_length(operand: &[Word]) -> usize {
    let len = effective_len(operand);
    if len == 0 {
        0
    } else {
        (len - 1) * WORD_BITS + (WORD_BITS - operand[len - 1].leading_zeros() as usize)
    }
}

pub fn bit_at(operand: &[Word], position: usize) -> bool {
    let word = position / WORD_BITS;
    if word >= operand.len() {
        return false;
    }
    (operand[word] >> (position % WORD_BITS)) & 1 == 1
}

pub fn set_bit_at(operand: &[Word], position: usize, bit: bool) -> Vec<Word> {
    let word = position / WORD_BITS;
    let mut result = operand.to_vec();
    if word >= result.len() {
        if !bit {
            return strip_trailing_zeros(result);
        }
        result.resize(word + 1, 0);
    }
    if bit {
        result[word] |= 1 << (position % WORD_BITS);
    } else {
        result[word] &= !(1 << (position % WORD_BITS));
    }
    strip_trailing_zeros(result)
}

pub fn compare(first: &[Word], second: &[Word]) -> Ordering {
    let first_len = effective_len(first);
    let second_len = effective_len(second);
    if first_len != second_len {
        return first_len.cmp(&second_len);
    }
    for position in (0..first_len).rev() {
        if first[position] != second[position] {
            return first[position].cmp(&second[position]);
        }
    }
    Ordering::Equal
}

/// Schoolbook ripple-carry addition.
pub fn add(first: &[Word], second: &[Word]) -> Vec<Word> {
    let (longer, shorter) = if first.len() >= second.len() {
        (first, second)
    } else {
        (second, first)
    };
    let mut result = Vec::with_capacity(longer.len() + 1);
    let mut carry = 0u64;
    for position in 0..longer.len() {
        let mut sum = longer[position] as u64 + carry;
        if position < shorter.len() {
            sum += shorter[position] as u64;
        }
        result.push(sum as Word);
        carry = sum >> WORD_BITS;
    }
    if carry != 0 {
        result.push(carry as Word);
    }
    strip_trailing_zeros(result)
}

/// Schoolbook ripple-borrow subtraction. The sign-aware layer guarantees
/// `first >= second` by choosing the operand order.
pub fn subtract(first: &[Word], second: &[Word]) -> Vec<Word> {
    debug_assert!(compare(first, second) != Ordering::Less);
    let mut result = Vec::with_capacity(first.len());
    let mut borrow = 0u32;
    for position in 0..first.len() {
        let second_word = if position < second.len() { second[position] } else { 0 };
        let (difference, underflow_a) = first[position].overflowing_sub(second_word);
        let (difference, underflow_b) = difference.overflowing_sub(borrow);
        result.push(difference);
        borrow = (underflow_a || underflow_b) as u32;
    }
    strip_trailing_zeros(result)
}

/// Schoolbook O(n*m) multiplication with word products in `u64`.
pub fn multiply(first: &[Word], second: &[Word]) -> Vec<Word> {
    if is_zero(first) || is_zero(second) {
        return zero();
    }
    let mut result = vec![0 as Word; first.len() + second.len()];
    for (i, &first_word) in first.iter().enumerate() {
        if first_word == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &second_word) in second.iter().enumerate() {
            let product =
                result[i + j] as u64 + first_word as u64 * second_word as u64 + carry;
            result[i + j] = product as Word;
            carry = product >> WORD_BITS;
        }
        // The slot above the current row has not been written yet.
        result[i + second.len()] = carry as Word;
    }
    strip_trailing_zeros(result)
}

pub fn multiply_by_word(operand: &[Word], factor: Word) -> Vec<Word> {
    if factor == 0 || is_zero(operand) {
        return zero();
    }
    let mut result = Vec::with_capacity(operand.len() + 1);
    let mut carry = 0u64;
    for &word in operand {
        let product = word as u64 * factor as u64 + carry;
        result.push(product as Word);
        carry = product >> WORD_BITS;
    }
    if carry != 0 {
        result.push(carry as Word);
    }
    strip_trailing_zeros(result)
}

/// Word-wise long division by a single non-zero word.
pub fn divide_by_word(dividend: &[Word], divisor: Word) -> (Vec<Word>, Word) {
    debug_assert!(divisor != 0);
    let mut quotient = vec![0 as Word; dividend.len()];
    let mut remainder = 0u64;
    for position in (0..dividend.len()).rev() {
        let current = (remainder << WORD_BITS) | dividend[position] as u64;
        quotient[position] = (current / divisor as u64) as Word;
        remainder = current % divisor as u64;
    }
    (strip_trailing_zeros(quotient), remainder as Word)
}

/// Division with remainder satisfying `dividend == quotient * divisor +
/// remainder` and `0 <= remainder < divisor`, for every magnitude shape.
pub fn divide(dividend: &[Word], divisor: &[Word]) -> Result<(Vec<Word>, Vec<Word>), Error> {
    if is_zero(divisor) {
        return Err(Error::DivisionByZero);
    }
    if is_zero(dividend) {
        return Ok((zero(), zero()));
    }
    match compare(dividend, divisor) {
        Ordering::Less => return Ok((zero(), strip_trailing_zeros(dividend.to_vec()))),
        Ordering::Equal => return Ok((one(), zero())),
        Ordering::Greater => {}
    }
    let divisor_len = effective_len(divisor);
    if divisor_len == 1 {
        let (quotient, remainder) = divide_by_word(dividend, divisor[0]);
        return Ok((quotient, vec![remainder]));
    }
    Ok(divide_long(dividend, &divisor[..divisor_len]))
}

/// Multi-word normalize-and-estimate long division (Knuth, TAOCP vol. 2,
/// Algorithm D). `divisor` is canonical with at least two words and the
/// dividend is strictly larger.
fn divide_long(dividend: &[Word], divisor: &[Word]) -> (Vec<Word>, Vec<Word>) {
    const BASE: u64 = 1 << WORD_BITS;
    let n = divisor.len();
    let dividend_len = effective_len(dividend);
    let m = dividend_len - n;

    // Normalize so the divisor's top bit is set; the quotient estimate is
    // then off by at most two.
    let shift = divisor[n - 1].leading_zeros() as usize;
    let normalized_divisor = shift_left(divisor, shift);
    debug_assert!(effective_len(&normalized_divisor) == n);
    let mut remainder = shift_left(&dividend[..dividend_len], shift);
    remainder.resize(dividend_len + 1, 0);

    let mut quotient = vec![0 as Word; m + 1];
    for j in (0..=m).rev() {
        let top = ((remainder[j + n] as u64) << WORD_BITS) | remainder[j + n - 1] as u64;
        let mut estimate = top / normalized_divisor[n - 1] as u64;
        let mut estimate_remainder = top % normalized_divisor[n - 1] as u64;
        while estimate >= BASE
            || estimate * normalized_divisor[n - 2] as u64
                > (estimate_remainder << WORD_BITS) + remainder[j + n - 2] as u64
        {
            estimate -= 1;
            estimate_remainder += normalized_divisor[n - 1] as u64;
            if estimate_remainder >= BASE {
                break;
            }
        }

        // Multiply and subtract the estimated multiple of the divisor.
        let mut borrow = 0i64;
        let mut carry = 0u64;
        for i in 0..n {
            let product = estimate * normalized_divisor[i] as u64 + carry;
            carry = product >> WORD_BITS;
            let difference =
                remainder[i + j] as i64 - (product & LOW_MASK) as i64 + borrow;
            remainder[i + j] = difference as Word;
            borrow = difference >> WORD_BITS;
        }
        let difference = remainder[j + n] as i64 - carry as i64 + borrow;
        remainder[j + n] = difference as Word;

        // The estimate was one too large; add one divisor multiple back.
        if difference < 0 {
            estimate -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let sum =
                    remainder[i + j] as u64 + normalized_divisor[i] as u64 + carry;
                remainder[i + j] = sum as Word;
                carry = sum >> WORD_BITS;
            }
            remainder[j + n] = remainder[j + n].wrapping_add(carry as Word);
        }
        quotient[j] = estimate as Word;
    }

    let remainder = shift_right(&remainder[..n], shift);
    (strip_trailing_zeros(quotient), remainder)
}

/// Left shift across word boundaries; never loses set bits.
pub fn shift_left(operand: &[Word], places: usize) -> Vec<Word> {
    if is_zero(operand) {
        return zero();
    }
    if places == 0 {
        return strip_trailing_zeros(operand.to_vec());
    }
    let word_shift = places / WORD_BITS;
    let bit_shift = (places % WORD_BITS) as u32;
    let mut result = vec![0 as Word; word_shift];
    if bit_shift == 0 {
        result.extend_from_slice(operand);
    } else {
        let mut carry = 0 as Word;
        for &word in operand {
            result.push((word << bit_shift) | carry);
            carry = word >> (WORD_BITS as u32 - bit_shift);
        }
        if carry != 0 {
            result.push(carry);
        }
    }
    strip_trailing_zeros(result)
}

/// Right shift across word boundaries; shifting past the bit length yields
/// zero.
pub fn shift_right(operand: &[Word], places: usize) -> Vec<Word> {
    let len = effective_len(operand);
    if len == 0 || places >= bit_length(operand) {
        return zero();
    }
    let word_shift = places / WORD_BITS;
    let bit_shift = (places % WORD_BITS) as u32;
    let mut result = Vec::with_capacity(len - word_shift);
    if bit_shift == 0 {
        result.extend_from_slice(&operand[word_shift..len]);
    } else {
        for position in word_shift..len {
            let mut word = operand[position] >> bit_shift;
            if position + 1 < len {
                word |= operand[position + 1] << (WORD_BITS as u32 - bit_shift);
            }
            result.push(word);
        }
    }
    strip_trailing_zeros(result)
}

fn word_at(operand: &[Word], position: usize) -> Word {
    if position < operand.len() {
        operand[position]
    } else {
        0
    }
}

pub fn and(first: &[Word], second: &[Word]) -> Vec<Word> {
    let len = first.len().max(second.len());
    let result = (0..len)
        .map(|position| word_at(first, position) & word_at(second, position))
        .collect();
    strip_trailing_zeros(result)
}

pub fn or(first: &[Word], second: &[Word]) -> Vec<Word> {
    let len = first.len().max(second.len());
    let result = (0..len)
        .map(|position| word_at(first, position) | word_at(second, position))
        .collect();
    strip_trailing_zeros(result)
}

pub fn xor(first: &[Word], second: &[Word]) -> Vec<Word> {
    let len = first.len().max(second.len());
    let result = (0..len)
        .map(|position| word_at(first, position) ^ word_at(second, position))
        .collect();
    strip_trailing_zeros(result)
}

/// Complement within the operand's current bit span only. This is not a
/// two's-complement inversion: `not("1100")` is `"0011"`, i.e. 3.
pub fn not(operand: &[Word]) -> Vec<Word> {
    let bits = bit_length(operand);
    if bits == 0 {
        return zero();
    }
    let len = effective_len(operand);
    let mut result: Vec<Word> = operand[..len].iter().map(|word| !word).collect();
    let top_bits = bits - (len - 1) * WORD_BITS;
    if top_bits < WORD_BITS {
        result[len - 1] &= (1 << top_bits) - 1;
    }
    strip_trailing_zeros(result)
}

/// Square-and-multiply exponentiation. `pow(anything, 0)` is one, including
/// a zero base.
pub fn pow(operand: &[Word], exponent: u64) -> Vec<Word> {
    let mut result = one();
    let mut base = strip_trailing_zeros(operand.to_vec());
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = multiply(&result, &base);
        }
        remaining >>= 1;
        if remaining > 0 {
            base = multiply(&base, &base);
        }
    }
    result
}

pub fn from_u64(value: u64) -> Vec<Word> {
    let low = value as Word;
    let high = (value >> WORD_BITS) as Word;
    if high == 0 {
        vec![low]
    } else {
        vec![low, high]
    }
}

/// Low 64 bits of the magnitude. Callers check `bit_length` first when the
/// value must fit.
pub fn to_u64(operand: &[Word]) -> u64 {
    let mut value = word_at(operand, 0) as u64;
    value |= (word_at(operand, 1) as u64) << WORD_BITS;
    value
}

/// Parses an unsigned digit string, a group of `DIGITS_PER_INT[base]` digits
/// at a time. Sign characters are handled by the sign-aware layer.
pub fn parse_for_base(number: &str, base: u32) -> Result<Vec<Word>, Error> {
    if !(2..=36).contains(&base) {
        return Err(Error::UnsupportedConversion(format!(
            "base {} is outside the supported range 2..=36",
            base
        )));
    }
    if number.is_empty() {
        return Err(Error::InvalidDigit { string: number.to_string(), base });
    }
    for character in number.chars() {
        if character.to_digit(base).is_none() {
            return Err(Error::InvalidDigit { string: character.to_string(), base });
        }
    }

    let digits = number.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(zero());
    }

    // Digits valid for bases up to 36 are all ASCII, so byte offsets are
    // character offsets.
    let num_digits = digits.len();
    let num_bits = ((num_digits * BITS_PER_DIGIT[base as usize]) >> 10) + 1;
    let num_words = (num_bits + WORD_BITS - 1) / WORD_BITS;
    let mut magnitude: Vec<Word> = Vec::with_capacity(num_words);

    let digits_per_word = DIGITS_PER_INT[base as usize];
    let super_radix = INT_RADIX[base as usize];
    let mut group_len = num_digits % digits_per_word;
    if group_len == 0 {
        group_len = digits_per_word;
    }
    let mut cursor = 0;
    while cursor < num_digits {
        let group = &digits[cursor..cursor + group_len];
        let group_value = u32::from_str_radix(group, base).map_err(|_| {
            Error::InvariantViolation(format!("validated digit group {:?} failed to parse", group))
        })?;
        if magnitude.is_empty() {
            magnitude.push(group_value);
        } else {
            magnitude = multiply_by_word(&magnitude, super_radix);
            if group_value != 0 {
                magnitude = add(&magnitude, &[group_value]);
            }
        }
        cursor += group_len;
        group_len = digits_per_word;
    }
    Ok(strip_trailing_zeros(magnitude))
}

fn word_to_string(mut value: Word, base: u32) -> String {
    if value == 0 {
        return String::from("0");
    }
    let mut digits = Vec::new();
    while value != 0 {
        digits.push(DIGITS[(value % base) as usize]);
        value /= base;
    }
    digits.iter().rev().collect()
}

/// Inverse of [`parse_for_base`]: formats the magnitude a digit group at a
/// time, dividing by the group radix.
pub fn to_string(operand: &[Word], base: u32) -> String {
    debug_assert!((2..=36).contains(&base));
    if is_zero(operand) {
        return String::from("0");
    }
    let digits_per_word = DIGITS_PER_INT[base as usize];
    let super_radix = INT_RADIX[base as usize];

    let mut groups: Vec<String> = Vec::new();
    let mut remaining = strip_trailing_zeros(operand.to_vec());
    while !is_zero(&remaining) {
        let (quotient, group) = divide_by_word(&remaining, super_radix);
        groups.push(word_to_string(group, base));
        remaining = quotient;
    }

    let mut result = String::with_capacity(groups.len() * digits_per_word);
    let last = groups.len() - 1;
    result.push_str(&groups[last]);
    for group in groups[..last].iter().rev() {
        // Inner groups are padded back to full width.
        for _ in group.len()..digits_per_word {
            result.push('0');
        }
        result.push_str(group);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_magnitude(rng: &mut StdRng, words: usize) -> Vec<Word> {
        strip_trailing_zeros((0..words).map(|_| rng.gen::<Word>()).collect())
    }

    fn check_division(dividend: &[Word], divisor: &[Word]) {
        let (quotient, remainder) = divide(dividend, divisor).unwrap();
        let recombined = add(&multiply(&quotient, divisor), &remainder);
        assert_eq!(
            recombined,
            strip_trailing_zeros(dividend.to_vec()),
            "q*b + r != a for a={:?} b={:?}",
            dividend,
            divisor
        );
        assert_eq!(compare(&remainder, divisor), Ordering::Less);
    }

    #[test]
    fn compare_pads_short_operands_with_high_zeros() {
        assert_eq!(compare(&[1, 0, 0], &[2, 0, 0]), Ordering::Less);
        assert_eq!(compare(&[1, 0, 0], &[1]), Ordering::Equal);
        assert_eq!(compare(&[0, 1], &[5]), Ordering::Greater);
        assert_eq!(compare(&[0], &[0, 0, 0]), Ordering::Equal);
    }

    #[test]
    fn add_propagates_carries_across_words() {
        assert_eq!(add(&[Word::MAX], &[1]), vec![0, 1]);
        assert_eq!(add(&[Word::MAX, Word::MAX], &[1]), vec![0, 0, 1]);
        assert_eq!(add(&[3], &[0]), vec![3]);
    }

    #[test]
    fn subtract_propagates_borrows_and_cancels_to_zero() {
        assert_eq!(subtract(&[0, 1], &[1]), vec![Word::MAX]);
        assert_eq!(subtract(&[7, 7], &[7, 7]), vec![0]);
        assert_eq!(subtract(&[0, 0, 1], &[1]), vec![Word::MAX, Word::MAX]);
    }

    #[test]
    fn multiply_matches_u128_for_two_word_operands() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let a = rng.gen::<u64>();
            let b = rng.gen::<u64>();
            let product = multiply(&from_u64(a), &from_u64(b));
            let expected = a as u128 * b as u128;
            let low = to_u64(&product);
            let high = to_u64(&shift_right(&product, 64));
            assert_eq!(((high as u128) << 64) | low as u128, expected);
        }
    }

    #[test]
    fn multiply_by_zero_is_canonical_zero() {
        assert_eq!(multiply(&[5, 5], &[0]), vec![0]);
        assert_eq!(multiply_by_word(&[5, 5], 0), vec![0]);
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(divide(&[4], &[0]), Err(Error::DivisionByZero));
        assert_eq!(divide(&[4], &[0, 0]), Err(Error::DivisionByZero));
    }

    #[test]
    fn division_small_cases() {
        let (q, r) = divide(&[40], &[20]).unwrap();
        assert_eq!(q, vec![2]);
        assert_eq!(r, vec![0]);

        // Two two-word operands sharing the same high/low ratio.
        let (q, r) = divide(&[20, 20], &[10, 10]).unwrap();
        assert_eq!(q, vec![2]);
        assert_eq!(r, vec![0]);

        let (q, r) = divide(&[7], &[10]).unwrap();
        assert_eq!(q, vec![0]);
        assert_eq!(r, vec![7]);
    }

    #[test]
    fn division_invariant_one_word() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2000 {
            let a = random_magnitude(&mut rng, 1);
            let b = random_magnitude(&mut rng, 1);
            if is_zero(&b) {
                continue;
            }
            check_division(&a, &b);
        }
    }

    #[test]
    fn division_invariant_two_words_by_two_words() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..2000 {
            let a = random_magnitude(&mut rng, 2);
            let b = random_magnitude(&mut rng, 2);
            if is_zero(&b) {
                continue;
            }
            check_division(&a, &b);
        }
    }

    #[test]
    fn division_invariant_four_words_by_two_words() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let a = random_magnitude(&mut rng, 4);
            let b = random_magnitude(&mut rng, 2);
            if is_zero(&b) {
                continue;
            }
            check_division(&a, &b);
        }
    }

    #[test]
    fn division_exercises_the_add_back_branch() {
        // Shaped so the three-word estimate overshoots: divisor just above
        // half the base, dividend words near the base.
        check_division(
            &[0, Word::MAX - 1, Word::MAX >> 1],
            &[Word::MAX, Word::MAX >> 1],
        );
        check_division(&[0, 0, 0x8000_0000], &[1, 0x8000_0000]);
    }

    #[test]
    fn shifts_round_trip_and_saturate() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let a = random_magnitude(&mut rng, 3);
            for places in [1, 31, 32, 33, 64, 100] {
                let shifted = shift_left(&a, places);
                assert_eq!(shift_right(&shifted, places), a);
            }
        }
        assert_eq!(shift_right(&[1, 2], 64), vec![0]);
        assert_eq!(shift_right(&[0], 5), vec![0]);
        assert_eq!(shift_left(&[0], 100), vec![0]);
    }

    #[test]
    fn bitwise_operations_align_by_zero_extension() {
        assert_eq!(and(&[0b1100, 1], &[0b1010]), vec![0b1000]);
        assert_eq!(or(&[0b1100], &[0b1010, 2]), vec![0b1110, 2]);
        assert_eq!(xor(&[0b1100, 3], &[0b1100, 3]), vec![0]);
        // Complement within the operand's bit span only.
        assert_eq!(not(&[0b1100]), vec![0b0011]);
        assert_eq!(not(&[0]), vec![0]);
        assert_eq!(not(&[Word::MAX]), vec![0]);
    }

    #[test]
    fn bit_queries_and_updates() {
        assert_eq!(bit_length(&[0]), 0);
        assert_eq!(bit_length(&[1]), 1);
        assert_eq!(bit_length(&[0, 1]), 33);
        assert_eq!(number_of_leading_zero_words(&[1, 0, 0]), 2);
        assert!(bit_at(&[0b100], 2));
        assert!(!bit_at(&[0b100], 40));
        assert_eq!(set_bit_at(&[0], 33, true), vec![0, 2]);
        assert_eq!(set_bit_at(&[0b101], 2, false), vec![1]);
    }

    #[test]
    fn pow_conventions() {
        assert_eq!(pow(&[0], 0), vec![1]);
        assert_eq!(pow(&[7], 0), vec![1]);
        assert_eq!(pow(&[0], 5), vec![0]);
        assert_eq!(pow(&[2], 10), vec![1024]);
        assert_eq!(pow(&[10], 10), from_u64(10_000_000_000));
    }

    #[test]
    fn parse_and_to_string_round_trip() {
        let mut rng = StdRng::seed_from_u64(5);
        for base in [2u32, 8, 10, 16, 36] {
            for words in [1usize, 2, 5] {
                for _ in 0..50 {
                    let magnitude = random_magnitude(&mut rng, words);
                    let rendered = to_string(&magnitude, base);
                    assert_eq!(parse_for_base(&rendered, base).unwrap(), magnitude);
                }
            }
        }
    }

    #[test]
    fn parse_known_values() {
        assert_eq!(parse_for_base("0", 10).unwrap(), vec![0]);
        assert_eq!(parse_for_base("00000", 10).unwrap(), vec![0]);
        assert_eq!(parse_for_base("4294967296", 10).unwrap(), vec![0, 1]);
        assert_eq!(parse_for_base("ff", 16).unwrap(), vec![255]);
        assert_eq!(to_string(&[0, 1], 10), "4294967296");
        assert_eq!(to_string(&[0], 10), "0");
    }

    #[test]
    fn parse_rejects_bad_digits_and_bases() {
        assert!(matches!(
            parse_for_base("12x4", 10),
            Err(Error::InvalidDigit { .. })
        ));
        assert!(matches!(parse_for_base("", 10), Err(Error::InvalidDigit { .. })));
        assert!(matches!(parse_for_base("19", 8), Err(Error::InvalidDigit { .. })));
        assert!(matches!(
            parse_for_base("12", 37),
            Err(Error::UnsupportedConversion(_))
        ));
        assert!(matches!(
            parse_for_base("12", 1),
            Err(Error::UnsupportedConversion(_))
        ));
    }
}
