//! Word-array arithmetic backends.
//!
//! A backend is a set of pure functions over unsigned little-endian word
//! arrays (magnitudes). The backend is picked here, once, at compile time;
//! nothing above this module knows the word width or the limb layout. The
//! sign-aware [`crate::BigInt`] delegates all magnitude work to
//! [`backend`] and resolves signs itself.

pub mod base32;

pub(crate) use base32 as backend;
