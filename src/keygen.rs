//! Key generation.

use crate::error::{check_len, Error, Result};
use crate::params::{PUBLIC_KEY_BYTES, SECRET_KEY_BYTES};
use crate::poly::Poly;
use crate::sampling::{sample_binary, sample_uniform, EntropySource};
use crate::serialize::{decode_pair, encode_pair, poly_to_bytes, read_coeffs};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret key: the binary polynomial r2.
///
/// Zeroized on drop to prevent secret material from lingering in memory.
/// Does not implement `Debug` to prevent accidental logging of secrets.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) r2: Poly,
}

impl SecretKey {
    /// Serialized byte size.
    pub const BYTES: usize = SECRET_KEY_BYTES;

    /// Serialize to bytes (little-endian u16 per coefficient).
    ///
    /// The returned buffer is zeroized on drop.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(poly_to_bytes(&self.r2))
    }

    /// Deserialize from bytes. Every coefficient must be 0 or 1.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        check_len("secret key", data, Self::BYTES)?;
        let coeffs = Zeroizing::new(read_coeffs(data));
        if let Some(index) = coeffs.iter().position(|&c| c > 1) {
            return Err(Error::NonBinarySecret {
                index,
                value: coeffs[index],
            });
        }
        Ok(SecretKey {
            r2: Poly::from_coeffs(*coeffs)?,
        })
    }
}

/// Public key: (a, p = r1 - a·r2).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PublicKey {
    pub a: Poly,
    pub p: Poly,
}

impl PublicKey {
    /// Serialized byte size.
    pub const BYTES: usize = PUBLIC_KEY_BYTES;

    /// Serialize as `a || p`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_pair(&self.a, &self.p)
    }

    /// Deserialize from `a || p`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (a, p) = decode_pair("public key", data)?;
        Ok(PublicKey { a, p })
    }
}

/// Generate a keypair.
pub fn keygen<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<(PublicKey, SecretKey)> {
    trace!("keygen");
    // a is uniform, r1 and r2 are binary
    let a = sample_uniform(entropy)?;
    let mut r1 = sample_binary(entropy)?;
    let r2 = sample_binary(entropy)?;

    let p = r1.sub(&a.mul(&r2));
    r1.zeroize();

    Ok((PublicKey { a, p }, SecretKey { r2 }))
}
