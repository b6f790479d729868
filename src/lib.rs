//! Ring-LWE public-key encryption over Z_q[x]/(x^N+1) with binary noise.
//!
//! N = 1024, q = 12289. Messages are N-bit strings; keys and ciphertexts are
//! pairs of ring elements serialized as little-endian u16 coefficients.
//!
//! # ⚠️ WARNING: NOT PRODUCTION READY ⚠️
//!
//! This is a research prototype. NOT audited, NOT constant-time,
//! NOT safe against side-channel attacks. IND-CPA only: ciphertexts are
//! malleable and there is no integrity check or key confirmation.

pub mod params;
pub mod reduce;
pub mod error;
pub mod poly;
pub mod sampling;
pub mod encoding;
pub mod serialize;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;

pub use decrypt::decrypt;
pub use encoding::Message;
pub use encrypt::{encrypt, Ciphertext};
pub use error::{EntropyError, Error, Result};
pub use keygen::{keygen, PublicKey, SecretKey};
pub use poly::Poly;
pub use sampling::EntropySource;
