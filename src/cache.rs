//! Lazily built caches for frequently used small values.

use lazy_static::lazy_static;

use crate::big_int::{BigInt, Sign};
use crate::constants::MAX_CONSTANT;

lazy_static! {
    pub(crate) static ref POS_CACHE: Vec<BigInt> = small_values(Sign::Positive);
    pub(crate) static ref NEG_CACHE: Vec<BigInt> = small_values(Sign::Negative);
}

fn small_values(sign: Sign) -> Vec<BigInt> {
    (0..=MAX_CONSTANT as u32)
        .map(|value| BigInt::small(value, sign))
        .collect()
}
