use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Exact binomial coefficient \(\binom{n}{k}\).
///
/// Returns 0 when `k > n`. Computed by multiplying in one factor `n - k + i`
/// and dividing out `i` at a time; every intermediate quotient is itself a
/// binomial coefficient, so the accumulator stays an exact integer and the
/// result is correct for `n` well into the hundreds.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    // C(n, k) = C(n, n - k); iterate over the shorter side.
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 1..=k {
        acc = acc * (n - k + i) / i;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn zero_when_k_exceeds_n() {
        assert_eq!(binomial(5, 6), BigUint::zero());
        assert_eq!(binomial(0, 1), BigUint::zero());
    }

    #[test]
    fn small_values() {
        assert_eq!(binomial(0, 0), n(1));
        assert_eq!(binomial(5, 0), n(1));
        assert_eq!(binomial(5, 5), n(1));
        assert_eq!(binomial(6, 2), n(15));
        assert_eq!(binomial(10, 3), n(120));
    }

    #[test]
    fn symmetric_in_k() {
        for m in [7u64, 30, 121] {
            for k in 0..=m {
                assert_eq!(binomial(m, k), binomial(m, m - k));
            }
        }
    }

    #[test]
    fn pascal_identity_holds_for_large_n() {
        // Exactness check well past the range where f64 or u128 would fail.
        for k in [1u64, 57, 150, 299] {
            assert_eq!(
                binomial(300, k),
                binomial(299, k - 1) + binomial(299, k)
            );
        }
    }

    #[test]
    fn exact_for_moderate_n() {
        // 300 * 299 * 298 / 6
        assert_eq!(binomial(300, 3), n(4_455_100));
    }
}
