//! Ring elements of R_q = Z_q[x]/(x^N+1).
//!
//! Coefficients are always canonical (in [0, q)): every constructor validates
//! or reduces, and every operation reduces its outputs.

use crate::error::{Error, Result};
use crate::params::{N, Q};
use crate::reduce::barrett_reduce;
use zeroize::Zeroize;

/// A polynomial in R_q in coefficient form. `coeffs[i]` multiplies x^i.
#[derive(Clone, PartialEq, Eq, Debug, Zeroize)]
pub struct Poly {
    coeffs: [u16; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Poly {
    pub const fn zero() -> Self {
        Poly { coeffs: [0u16; N] }
    }

    /// Build from raw coefficients, rejecting any value ≥ q.
    pub fn from_coeffs(coeffs: [u16; N]) -> Result<Self> {
        if let Some(index) = coeffs.iter().position(|&c| c >= Q) {
            return Err(Error::CoefficientOutOfRange {
                index,
                value: coeffs[index],
            });
        }
        Ok(Poly { coeffs })
    }

    /// Build from signed values of any size, reducing each into [0, q).
    pub fn from_signed(coeffs: &[i32; N]) -> Self {
        let mut out = [0u16; N];
        for (o, &c) in out.iter_mut().zip(coeffs.iter()) {
            *o = barrett_reduce(c);
        }
        Poly { coeffs: out }
    }

    /// Caller guarantees every coefficient is below q.
    pub(crate) const fn from_canonical(coeffs: [u16; N]) -> Self {
        Poly { coeffs }
    }

    pub fn coeffs(&self) -> &[u16; N] {
        &self.coeffs
    }

    /// True when every coefficient is 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.coeffs.iter().all(|&c| c <= 1)
    }

    /// Coefficient-wise addition.
    pub fn add(&self, other: &Poly) -> Poly {
        let mut out = [0u16; N];
        for i in 0..N {
            out[i] = barrett_reduce(self.coeffs[i] as i32 + other.coeffs[i] as i32);
        }
        Poly { coeffs: out }
    }

    /// Coefficient-wise subtraction.
    pub fn sub(&self, other: &Poly) -> Poly {
        let mut out = [0u16; N];
        for i in 0..N {
            out[i] = barrett_reduce(self.coeffs[i] as i32 - other.coeffs[i] as i32);
        }
        Poly { coeffs: out }
    }

    /// Negacyclic schoolbook product, O(N²).
    ///
    /// `a[j]·b[i]` lands on x^(i+j); when i+j ≥ N it wraps to x^(i+j-N) with
    /// its sign flipped, since x^N ≡ -1. The accumulator is reduced after
    /// every contribution, so it never leaves (-q², q² + q).
    /// Rows where `other` has a zero coefficient are skipped, which makes
    /// multiplication by binary noise roughly twice as fast.
    pub fn mul(&self, other: &Poly) -> Poly {
        let mut acc = [0u16; N];
        for (i, &b) in other.coeffs.iter().enumerate() {
            if b == 0 {
                continue;
            }
            let b = b as i32;
            let (low, high) = self.coeffs.split_at(N - i);
            // x^i · x^j for j < N - i: no wrap
            for (j, &a) in low.iter().enumerate() {
                let k = i + j;
                acc[k] = barrett_reduce(acc[k] as i32 + a as i32 * b);
            }
            // j ≥ N - i: wraps to k = i + j - N with a minus sign
            for (j, &a) in high.iter().enumerate() {
                acc[j] = barrett_reduce(acc[j] as i32 - a as i32 * b);
            }
        }
        Poly { coeffs: acc }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{sample_binary, sample_uniform};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn monomial(degree: usize, value: u16) -> Poly {
        let mut c = [0u16; N];
        c[degree] = value;
        Poly::from_coeffs(c).unwrap()
    }

    fn random_pair(seed: u64) -> (Poly, Poly, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = sample_uniform(&mut rng).unwrap();
        let b = sample_uniform(&mut rng).unwrap();
        (a, b, rng)
    }

    #[test]
    fn test_poly_add_sub() {
        let mut a_coeffs = [0i32; N];
        let mut b_coeffs = [0i32; N];
        a_coeffs[0] = 100;
        a_coeffs[1] = 200;
        b_coeffs[0] = 50;
        b_coeffs[1] = 300;

        let a = Poly::from_signed(&a_coeffs);
        let b = Poly::from_signed(&b_coeffs);

        let sum = a.add(&b);
        assert_eq!(sum.coeffs[0], 150);
        assert_eq!(sum.coeffs[1], 500);

        let diff = a.sub(&b);
        assert_eq!(diff.coeffs[0], 50);
        // 200 - 300 mod q = q - 100
        assert_eq!(diff.coeffs[1], Q - 100);
    }

    #[test]
    fn test_add_wraps() {
        let a = monomial(3, Q - 1);
        let b = monomial(3, 5);
        assert_eq!(a.add(&b).coeffs[3], 4);
    }

    #[test]
    fn test_from_coeffs_rejects_out_of_range() {
        let mut c = [0u16; N];
        c[17] = Q;
        match Poly::from_coeffs(c) {
            Err(Error::CoefficientOutOfRange { index, value }) => {
                assert_eq!(index, 17);
                assert_eq!(value, Q);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_ring_mul() {
        let mut a = [0u16; N];
        a[0] = 1;
        a[1] = 1; // 1 + x
        let a = Poly::from_coeffs(a).unwrap();
        let c = a.mul(&a);

        // (1+x)^2 = 1 + 2x + x^2
        assert_eq!(c.coeffs[0], 1);
        assert_eq!(c.coeffs[1], 2);
        assert_eq!(c.coeffs[2], 1);
        assert!(c.coeffs[3..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_negacyclic_wraparound() {
        // x^{N-1} * x = x^N = -1 mod (x^N+1)
        let c = monomial(N - 1, 1).mul(&monomial(1, 1));
        assert_eq!(c.coeffs[0], Q - 1);
        for i in 1..N {
            assert_eq!(c.coeffs[i], 0, "nonzero at {}", i);
        }

        // 3x^{N-2} * 5x^5 = 15x^{N+3} = -15x^3
        let c = monomial(N - 2, 3).mul(&monomial(5, 5));
        assert_eq!(c.coeffs[3], Q - 15);
    }

    #[test]
    fn test_mul_by_one_is_identity() {
        let (a, _, _) = random_pair(1);
        assert_eq!(a.mul(&monomial(0, 1)), a);
        assert_eq!(monomial(0, 1).mul(&a), a);
        assert_eq!(a.mul(&Poly::zero()), Poly::zero());
    }

    #[test]
    fn test_mul_matches_naive_signed_convolution() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = sample_uniform(&mut rng).unwrap();
        let b = sample_binary(&mut rng).unwrap();
        let mut naive = [0i64; N];
        for i in 0..N {
            for j in 0..N {
                let prod = a.coeffs[j] as i64 * b.coeffs[i] as i64;
                if i + j < N {
                    naive[i + j] += prod;
                } else {
                    naive[i + j - N] -= prod;
                }
            }
        }
        let c = a.mul(&b);
        for k in 0..N {
            assert_eq!(c.coeffs[k] as i64, naive[k].rem_euclid(Q as i64), "index {}", k);
        }
    }

    #[test]
    fn test_add_commutative_associative() {
        let (a, b, mut rng) = random_pair(2);
        let c = sample_uniform(&mut rng).unwrap();
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn test_sub_inverts() {
        let (a, b, _) = random_pair(3);
        assert_eq!(a.sub(&a.sub(&b)), b);
        assert_eq!(a.sub(&a), Poly::zero());
    }

    #[test]
    fn test_mul_distributes_over_add() {
        let (a, b, mut rng) = random_pair(4);
        let c = sample_uniform(&mut rng).unwrap();
        assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn test_mul_commutative() {
        let (a, b, _) = random_pair(5);
        assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn test_outputs_canonical() {
        let (a, b, _) = random_pair(6);
        for p in [a.add(&b), a.sub(&b), a.mul(&b)] {
            assert!(p.coeffs.iter().all(|&c| c < Q));
        }
    }
}
