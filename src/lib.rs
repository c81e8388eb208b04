//! Big Num \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers in
//!   sign-magnitude form, with base-2..=36 string conversion and a
//!   two's-complement byte codec.
//! - [`BigDecimal`]: Immutable arbitrary-precision signed decimal numbers,
//!   a [`BigInt`] significand paired with a [`BigInt`] power-of-ten
//!   exponent, rounded per [`DecimalMode`].

mod arithmetic;
mod big_dec;
mod big_int;
mod cache;
mod constants;
mod error;
mod twos_complement;

pub use big_dec::{BigDecimal, DecimalMode, RoundingMode};
pub use big_int::{BigInt, Sign};
pub use error::Error;
