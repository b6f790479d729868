//! Bit messages ↔ ring elements.
//!
//! A set bit is embedded as ⌊q/2⌋ and a clear bit as 0. Decoding thresholds
//! each coefficient: it is a 1 iff it lies within ⌊q/4⌋ of ⌊q/2⌋.

use crate::error::{check_len, Error, Result};
use crate::params::{HALF_Q, MESSAGE_BYTES, N, PACKED_MESSAGE_BYTES, QUARTER_Q};
use crate::poly::Poly;
use crate::sampling::{sample_binary, EntropySource};

/// A message of exactly N bits, one `u8` (0 or 1) per bit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    bits: [u8; N],
}

impl Message {
    pub const BYTES: usize = MESSAGE_BYTES;
    pub const PACKED_BYTES: usize = PACKED_MESSAGE_BYTES;

    pub const fn zeros() -> Self {
        Message { bits: [0u8; N] }
    }

    pub const fn ones() -> Self {
        Message { bits: [1u8; N] }
    }

    /// Sample a uniformly random message.
    pub fn random<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self> {
        let p = sample_binary(entropy)?;
        let mut bits = [0u8; N];
        for (b, &c) in bits.iter_mut().zip(p.coeffs().iter()) {
            *b = c as u8;
        }
        Ok(Message { bits })
    }

    /// Parse one byte per bit. Every byte must be 0 or 1.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        check_len("message", data, Self::BYTES)?;
        let mut bits = [0u8; N];
        for (i, (b, &d)) in bits.iter_mut().zip(data.iter()).enumerate() {
            if d > 1 {
                return Err(Error::InvalidMessageBit { index: i, value: d });
            }
            *b = d;
        }
        Ok(Message { bits })
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bits
    }

    /// Bit i of the message is bit i % 8 of byte i / 8.
    pub fn from_packed(data: &[u8]) -> Result<Self> {
        check_len("packed message", data, Self::PACKED_BYTES)?;
        let mut bits = [0u8; N];
        for (i, b) in bits.iter_mut().enumerate() {
            *b = (data[i / 8] >> (i % 8)) & 1;
        }
        Ok(Message { bits })
    }

    #[must_use]
    pub fn to_packed(&self) -> [u8; PACKED_MESSAGE_BYTES] {
        let mut out = [0u8; PACKED_MESSAGE_BYTES];
        for (i, &b) in self.bits.iter().enumerate() {
            out[i / 8] |= b << (i % 8);
        }
        out
    }

    /// Number of positions where two messages disagree.
    pub fn hamming_distance(&self, other: &Message) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

/// Embed a message: coefficient i is ⌊q/2⌋ if bit i is set, else 0.
pub fn encode_message(msg: &Message) -> Poly {
    let mut coeffs = [0u16; N];
    for (c, &b) in coeffs.iter_mut().zip(msg.bits.iter()) {
        *c = if b != 0 { HALF_Q } else { 0 };
    }
    Poly::from_canonical(coeffs)
}

/// Threshold-decode a noisy message polynomial.
pub fn decode_message(mhat: &Poly) -> Message {
    let mut bits = [0u8; N];
    for (b, &c) in bits.iter_mut().zip(mhat.coeffs().iter()) {
        *b = (c.abs_diff(HALF_Q) <= QUARTER_Q) as u8;
    }
    Message { bits }
}
