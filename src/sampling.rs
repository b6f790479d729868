//! Uniform and binary sampling from an injected entropy source.
//!
//! ⚠️ NOT CONSTANT-TIME. Rejection sampling leaks how many draws were needed.

use crate::error::{EntropyError, Result};
use crate::params::{COEFF_BITS, N, Q};
use crate::poly::Poly;
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// A source of cryptographically suitable random bytes.
///
/// Implemented for every `RngCore + CryptoRng`, so `rand::rngs::OsRng` and a
/// seeded `rand::rngs::StdRng` both work. Reads may block; there is no
/// internal timeout and no retry.
pub trait EntropySource {
    fn fill_random(&mut self, buf: &mut [u8]) -> std::result::Result<(), EntropyError>;
}

impl<R: RngCore + CryptoRng + ?Sized> EntropySource for R {
    fn fill_random(&mut self, buf: &mut [u8]) -> std::result::Result<(), EntropyError> {
        let requested = buf.len();
        self.try_fill_bytes(buf).map_err(|e| {
            debug!(requested, error = %e, "entropy source failed");
            EntropyError::from(e)
        })
    }
}

/// Candidates drawn per refill of the rejection loop.
const UNIFORM_BATCH: usize = 256;

const COEFF_MASK: u16 = (1 << COEFF_BITS) - 1;

/// Sample a polynomial uniformly in R_q.
///
/// Each candidate is a 16-bit little-endian draw masked to 14 bits and kept
/// only if it is below q, so accepted values are exactly uniform.
pub fn sample_uniform<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Poly> {
    let mut coeffs = [0u16; N];
    let mut buf = [0u8; 2 * UNIFORM_BATCH];
    let mut ctr = 0;
    while ctr < N {
        entropy.fill_random(&mut buf)?;
        for pair in buf.chunks_exact(2) {
            let val = u16::from_le_bytes([pair[0], pair[1]]) & COEFF_MASK;
            if val < Q {
                coeffs[ctr] = val;
                ctr += 1;
                if ctr == N {
                    break;
                }
            }
        }
    }
    Ok(Poly::from_canonical(coeffs))
}

/// Sample a polynomial with independent fair {0, 1} coefficients.
///
/// Coefficient i is bit i % 8 of byte i / 8.
pub fn sample_binary<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Poly> {
    let mut buf = [0u8; N / 8];
    entropy.fill_random(&mut buf)?;
    let mut coeffs = [0u16; N];
    for (i, c) in coeffs.iter_mut().enumerate() {
        *c = ((buf[i / 8] >> (i % 8)) & 1) as u16;
    }
    Ok(Poly::from_canonical(coeffs))
}
