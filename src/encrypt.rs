//! Encryption: c1 = a·e1 + e2, c2 = p·e1 + e3 + encode(m).

use crate::encoding::{encode_message, Message};
use crate::error::Result;
use crate::keygen::PublicKey;
use crate::params::CIPHERTEXT_BYTES;
use crate::poly::Poly;
use crate::sampling::{sample_binary, EntropySource};
use crate::serialize::{decode_pair, encode_pair};
use tracing::trace;
use zeroize::Zeroize;

/// A ciphertext (c1, c2), both in coefficient form.
///
/// Not authenticated: any pair of ring elements is a valid ciphertext.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ciphertext {
    pub c1: Poly,
    pub c2: Poly,
}

impl Ciphertext {
    /// Serialized byte size.
    pub const BYTES: usize = CIPHERTEXT_BYTES;

    /// Serialize as `c1 || c2`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_pair(&self.c1, &self.c2)
    }

    /// Deserialize from `c1 || c2`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (c1, c2) = decode_pair("ciphertext", data)?;
        Ok(Ciphertext { c1, c2 })
    }
}

/// Encrypt a message under `pk` with fresh binary noise.
pub fn encrypt<E: EntropySource + ?Sized>(
    entropy: &mut E,
    pk: &PublicKey,
    message: &Message,
) -> Result<Ciphertext> {
    trace!("encrypt");
    let mut mhat = encode_message(message);

    let mut e1 = sample_binary(entropy)?;
    let mut e2 = sample_binary(entropy)?;
    let mut e3 = sample_binary(entropy)?;

    let c1 = pk.a.mul(&e1).add(&e2);
    let c2 = pk.p.mul(&e1).add(&e3.add(&mhat));

    for noise in [&mut e1, &mut e2, &mut e3, &mut mhat] {
        noise.zeroize();
    }

    Ok(Ciphertext { c1, c2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::keygen::keygen;
    use crate::sampling::tests::DeadEntropy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ciphertext_roundtrip_bytes() {
        let mut rng = StdRng::seed_from_u64(1);
        let (pk, _sk) = keygen(&mut rng).unwrap();
        let ct = encrypt(&mut rng, &pk, &Message::ones()).unwrap();
        let bytes = ct.to_bytes();
        assert_eq!(bytes.len(), Ciphertext::BYTES);
        assert_eq!(Ciphertext::from_bytes(&bytes).unwrap(), ct);
    }

    #[test]
    fn test_fresh_noise_per_call() {
        let mut rng = StdRng::seed_from_u64(2);
        let (pk, _sk) = keygen(&mut rng).unwrap();
        let m = Message::random(&mut rng).unwrap();
        let ct1 = encrypt(&mut rng, &pk, &m).unwrap();
        let ct2 = encrypt(&mut rng, &pk, &m).unwrap();
        assert_ne!(ct1.c1, ct2.c1);
        assert_ne!(ct1.c2, ct2.c2);
    }

    #[test]
    fn test_ciphertext_from_invalid_bytes() {
        assert!(matches!(
            Ciphertext::from_bytes(&[0u8; 17]),
            Err(Error::BufferSize { .. })
        ));
    }

    #[test]
    fn test_encrypt_entropy_failure() {
        let mut rng = StdRng::seed_from_u64(3);
        let (pk, _sk) = keygen(&mut rng).unwrap();
        assert!(matches!(
            encrypt(&mut DeadEntropy, &pk, &Message::zeros()),
            Err(Error::Entropy(_))
        ));
    }
}
