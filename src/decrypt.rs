//! Decryption.
//!
//! c1·r2 + c2 = e2·r2 + r1·e1 + e3 + encode(m), since a·r2 + p = r1. All
//! noise terms are products or sums of binary polynomials, far inside ⌊q/4⌋
//! for these parameters, so thresholding recovers m with overwhelming
//! probability. A wrong bit is possible in principle and is not reported.

use crate::encoding::{decode_message, Message};
use crate::encrypt::Ciphertext;
use crate::keygen::SecretKey;
use tracing::trace;
use zeroize::Zeroize;

/// Decrypt a ciphertext.
pub fn decrypt(sk: &SecretKey, ct: &Ciphertext) -> Message {
    trace!("decrypt");
    let mut mhat = ct.c1.mul(&sk.r2).add(&ct.c2);
    let message = decode_message(&mhat);
    mhat.zeroize();
    message
}
