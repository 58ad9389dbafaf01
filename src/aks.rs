//! AKS-style primality check via binomial coefficient divisibility.
//!
//! p is prime iff p divides every C(p, i) for 0 < i < p. By symmetry only
//! the first half of the row needs checking, and successive coefficients
//! follow from the exact recurrence C(p, i+1) = C(p, i) * (p - i) / (i + 1).
//! The coefficients grow to thousands of bits for p ~ 10^9, so the sequence
//! runs on `rug::Integer`. Exponentially slower than everything else here,
//! included purely for contrast.

use rug::Integer;

/// Lazy sequence of the binomial coefficients C(p, 1), C(p, 2), ...,
/// C(p, p/2 + 1).
///
/// Restartable: each `new` starts a fresh expansion from C(p, 1). The
/// division in the recurrence is always exact.
pub struct BinomialExpansion {
    p: u64,
    i: u64,
    c: Integer,
}

impl BinomialExpansion {
    pub fn new(p: u64) -> Self {
        BinomialExpansion {
            p,
            i: 0,
            c: Integer::from(1),
        }
    }
}

impl Iterator for BinomialExpansion {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        if self.i >= self.p / 2 + 1 {
            return None;
        }
        self.c *= self.p - self.i;
        self.c /= self.i + 1;
        self.i += 1;
        Some(self.c.clone())
    }
}

/// AKS-style test: p is prime iff every produced coefficient is divisible
/// by p. Bails out on the first indivisible coefficient. Callers should
/// pass p >= 1.
pub fn is_prime(p: u64) -> bool {
    if p == 1 {
        return false;
    }
    if p == 2 {
        return true;
    }
    let p_int = Integer::from(p);
    for c in BinomialExpansion::new(p) {
        if !c.is_divisible(&p_int) {
            return false;
        }
    }
    true
}
