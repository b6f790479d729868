//! Scheme parameters and precomputed constants.

/// Ring dimension (power of 2). Elements live in Z_q[x]/(x^N + 1).
pub const N: usize = 1024;

/// Coefficient modulus. Prime, needs 14 bits.
pub const Q: u16 = 12_289;

/// Message anchor: a set bit is embedded as the coefficient ⌊q/2⌋.
pub const HALF_Q: u16 = Q / 2;

/// Decoding radius around the anchor, ⌊q/4⌋.
pub const QUARTER_Q: u16 = Q / 4;

/// Barrett shift.
pub const BARRETT_K: u32 = 32;

/// Barrett constant ⌊2^k / q⌋ = 349_496.
pub const BARRETT_MU: i64 = (1i64 << BARRETT_K) / Q as i64;

/// Bits actually needed per coefficient (⌈log2 q⌉).
pub const COEFF_BITS: u32 = 14;

/// Wire width of one coefficient (little-endian u16).
pub const COEFF_BYTES: usize = 2;

/// Serialized size of one ring element.
pub const POLY_BYTES: usize = N * COEFF_BYTES; // 2048

/// Public key `a || p`.
pub const PUBLIC_KEY_BYTES: usize = 2 * POLY_BYTES; // 4096

/// Secret key `r2`, binary coefficients stored at full coefficient width.
pub const SECRET_KEY_BYTES: usize = POLY_BYTES; // 2048

/// Ciphertext `c1 || c2`.
pub const CIPHERTEXT_BYTES: usize = 2 * POLY_BYTES; // 4096

/// Message, one byte (0 or 1) per coefficient.
pub const MESSAGE_BYTES: usize = N;

/// Message, one bit per coefficient.
pub const PACKED_MESSAGE_BYTES: usize = N / 8;

const _: () = assert!(N.is_power_of_two());
const _: () = assert!((Q as u32) < (1 << COEFF_BITS) && (Q as u32) > (1 << (COEFF_BITS - 1)));
const _: () = assert!(COEFF_BITS as usize <= 8 * COEFF_BYTES);
