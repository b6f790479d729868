//! Wire codec: ring elements ↔ bytes.
//!
//! Every coefficient is a little-endian u16. A pair (x, y) is laid out as
//! x[0..N] | y[0..N], which is the layout of both public keys (a | p) and
//! ciphertexts (c1 | c2).

use crate::error::{check_len, Error, Result};
use crate::params::{COEFF_BYTES, N, POLY_BYTES};
use crate::poly::Poly;

/// Write `p` into `out`, which must be exactly `POLY_BYTES` long.
fn write_poly(p: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), POLY_BYTES);
    for (chunk, &c) in out.chunks_exact_mut(COEFF_BYTES).zip(p.coeffs().iter()) {
        chunk.copy_from_slice(&c.to_le_bytes());
    }
}

/// Read raw coefficients without range validation.
pub(crate) fn read_coeffs(data: &[u8]) -> [u16; N] {
    debug_assert_eq!(data.len(), POLY_BYTES);
    let mut coeffs = [0u16; N];
    for (c, chunk) in coeffs.iter_mut().zip(data.chunks_exact(COEFF_BYTES)) {
        *c = u16::from_le_bytes([chunk[0], chunk[1]]);
    }
    coeffs
}

/// Serialize one ring element.
pub fn poly_to_bytes(p: &Poly) -> Vec<u8> {
    let mut buf = vec![0u8; POLY_BYTES];
    write_poly(p, &mut buf);
    buf
}

/// Deserialize one ring element, rejecting coefficients ≥ q.
pub fn poly_from_bytes(data: &[u8]) -> Result<Poly> {
    check_len("ring element", data, POLY_BYTES)?;
    Poly::from_coeffs(read_coeffs(data))
}

/// Serialize `x || y`.
pub fn encode_pair(x: &Poly, y: &Poly) -> Vec<u8> {
    let mut buf = vec![0u8; 2 * POLY_BYTES];
    let (lo, hi) = buf.split_at_mut(POLY_BYTES);
    write_poly(x, lo);
    write_poly(y, hi);
    buf
}

/// Split a `x || y` buffer. `what` names the buffer in errors.
pub fn decode_pair(what: &'static str, data: &[u8]) -> Result<(Poly, Poly)> {
    check_len(what, data, 2 * POLY_BYTES)?;
    let (lo, hi) = data.split_at(POLY_BYTES);
    let x = Poly::from_coeffs(read_coeffs(lo))?;
    let y = Poly::from_coeffs(read_coeffs(hi)).map_err(|e| match e {
        Error::CoefficientOutOfRange { index, value } => Error::CoefficientOutOfRange {
            index: index + N,
            value,
        },
        other => other,
    })?;
    Ok((x, y))
}
