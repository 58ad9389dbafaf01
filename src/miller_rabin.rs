use rand::Rng;

use crate::{mul_mod, pow_mod};

/// Miller-Rabin probable-prime test with k random witnesses.
///
/// Writes n-1 = 2^s * d with d odd, then for each witness a in [2, n-2]
/// checks whether a^d ≡ 1 or a^(2^j * d) ≡ -1 (mod n) for some j < s. A
/// witness for which neither holds proves n composite and ends the test
/// immediately. The error is one-sided: a true prime is never rejected,
/// while a composite slips through a round with probability at most 1/4.
///
/// The witness interval is [2, n-2] — one narrower than Fermat's [2, n-1].
/// Sampling needs n >= 5; smaller n is handled by the early returns.
pub fn is_probable_prime<R: Rng>(n: u64, k: u32, rng: &mut R) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true; // 2 and 3
    }
    if n % 2 == 0 {
        return false;
    }

    // n - 1 = 2^s * d with d odd
    let mut s = 0u32;
    let mut d = n - 1;
    while d % 2 == 0 {
        s += 1;
        d /= 2;
    }

    'witness: for _ in 0..k {
        let a = rng.gen_range(2..n - 1);
        let mut x = pow_mod(a, d, n);
        if x == 1 {
            continue;
        }
        for _ in 0..s {
            if x == n - 1 {
                continue 'witness;
            }
            x = mul_mod(x, x, n);
        }
        return false; // no square root of -1 reached: definite composite
    }
    true
}
