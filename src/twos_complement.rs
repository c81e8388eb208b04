//! Two's-complement byte codec for [`BigInt`].
//!
//! The encoding is minimal big-endian: the shortest byte string whose most
//! significant bit still carries the sign. Inverse operations, so every
//! value round-trips.

use crate::big_int::{BigInt, Sign};

impl BigInt {
    /// Encodes as minimal big-endian two's-complement bytes. Zero encodes
    /// as a single zero byte.
    pub fn to_twos_complement_bytes(&self) -> Vec<u8> {
        match self.sign() {
            Sign::Zero => vec![0],
            Sign::Positive => {
                let mut bytes = self.to_be_bytes();
                // A set top bit would read back as negative.
                if bytes[0] & 0x80 != 0 {
                    bytes.insert(0, 0);
                }
                bytes
            }
            Sign::Negative => {
                let mut bytes = self.to_be_bytes();
                if bytes[0] & 0x80 != 0 {
                    bytes.insert(0, 0);
                }
                for byte in bytes.iter_mut() {
                    *byte = !*byte;
                }
                increment(&mut bytes);
                // Drop sign-extension bytes the complement produced.
                while bytes.len() > 1 && bytes[0] == 0xFF && bytes[1] & 0x80 != 0 {
                    bytes.remove(0);
                }
                bytes
            }
        }
    }

    /// Decodes minimal or sign-extended big-endian two's-complement bytes.
    /// An empty slice decodes to zero.
    pub fn from_twos_complement_bytes(bytes: &[u8]) -> BigInt {
        match bytes.first() {
            None => BigInt::zero(),
            Some(first) if first & 0x80 != 0 => {
                let mut magnitude: Vec<u8> = bytes.iter().map(|byte| !byte).collect();
                increment(&mut magnitude);
                BigInt::from_be_bytes(&magnitude, Sign::Negative)
            }
            Some(_) => BigInt::from_be_bytes(bytes, Sign::Positive),
        }
    }
}

/// Adds one to a big-endian byte string in place, growing it on overflow.
fn increment(bytes: &mut Vec<u8>) {
    for index in (0..bytes.len()).rev() {
        let (sum, overflowed) = bytes[index].overflowing_add(1);
        bytes[index] = sum;
        if !overflowed {
            return;
        }
    }
    bytes.insert(0, 1);
}
