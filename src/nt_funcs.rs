//! Standalone number theoretic utilities shared by the algorithms.
//!
//! The trial division functions are generic so that the same code serves machine integers
//! and [num_bigint::BigUint] (sequences such as Euclid-Mullin outgrow 64 bits quickly).

use bitvec::prelude::*;
use num_integer::{Integer, Roots};

/// Deterministic primality check by trial division with odd divisors up to √n.
pub fn is_prime_basic<T: Integer + Roots + Clone>(n: &T) -> bool {
    let two = T::one() + T::one();
    let three = two.clone() + T::one();

    // shortcuts
    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let limit = Roots::sqrt(n);
    let mut divisor = three;
    while divisor <= limit {
        if n.is_multiple_of(&divisor) {
            return false;
        }
        divisor = divisor + two.clone();
    }
    true
}

/// Return the smallest prime factor of n, which is n itself when n is a prime.
/// The input is expected to be larger than 1.
pub fn smallest_prime_factor<T: Integer + Roots + Clone>(n: &T) -> T {
    let two = T::one() + T::one();
    if n.is_even() {
        return two;
    }

    let limit = Roots::sqrt(n);
    let mut divisor = two.clone() + T::one();
    while divisor <= limit {
        if n.is_multiple_of(&divisor) {
            return divisor;
        }
        divisor = divisor + two.clone();
    }
    n.clone()
}

/// Sieve of Eratosthenes over `0..=limit`. A bit is set iff the index is a prime.
///
/// `visit` is called with every sieving prime p <= √limit, in ascending order, right before
/// its multiples starting from p² are struck.
pub fn sieve(limit: u64, mut visit: impl FnMut(u64)) -> BitVec {
    if limit < 2 {
        return BitVec::new();
    }

    let mut flags = bitvec![1; limit as usize + 1];
    flags.set(0, false);
    flags.set(1, false);
    for p in 2..=num_integer::sqrt(limit) {
        if flags[p as usize] {
            visit(p);
            for multi in (p * p..=limit).step_by(p as usize) {
                flags.set(multi as usize, false);
            }
        }
    }
    flags
}

/// Returns all primes **not greater than** limit, in ascending order.
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    sieve(limit, |_| {}).iter_ones().map(|p| p as u64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::random;

    const PRIME50: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    #[test]
    fn is_prime_basic_test() {
        for x in 0..50u64 {
            assert_eq!(PRIME50.contains(&x), is_prime_basic(&x), "primality of {}", x);
        }

        // squares of primes are the first composites trial division has to reach √n for
        assert!(!is_prime_basic(&(9973u64 * 9973)));
        assert!(is_prime_basic(&2521008887u64));
        assert!(is_prime_basic(&6469693333u64));
        assert!(!is_prime_basic(&561u32));

        // big integers take the same path
        assert!(is_prime_basic(&BigUint::from(131071u32)));
        assert!(!is_prime_basic(&BigUint::from(2047u32)));
    }

    #[test]
    fn smallest_prime_factor_test() {
        assert_eq!(smallest_prime_factor(&221u64), 13);
        assert_eq!(smallest_prime_factor(&1806u64), 2);
        assert_eq!(smallest_prime_factor(&1807u64), 13);
        assert_eq!(smallest_prime_factor(&97u64), 97);
        assert_eq!(
            smallest_prime_factor(&BigUint::from(2047u32)),
            BigUint::from(23u32)
        );

        for _ in 0..100 {
            let x = random::<u16>() as u64 + 2;
            let p = smallest_prime_factor(&x);
            assert!(is_prime_basic(&p));
            assert_eq!(x % p, 0);
            assert!((2..p).all(|d| x % d != 0));
        }
    }

    #[test]
    fn primes_up_to_test() {
        assert!(primes_up_to(0).is_empty());
        assert!(primes_up_to(1).is_empty());
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(primes_up_to(50), PRIME50);
        assert_eq!(primes_up_to(47), PRIME50);
        assert_eq!(primes_up_to(10000).len(), 1229);

        let listed = primes_up_to(3000);
        let expected: Vec<u64> = (0..=3000u64).filter(|x| is_prime_basic(x)).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn sieve_visit_test() {
        let mut visited = Vec::new();
        let flags = sieve(100, |p| visited.push(p));
        assert_eq!(visited, vec![2, 3, 5, 7]);
        assert_eq!(flags.len(), 101);
        assert_eq!(flags.count_ones(), 25);
    }
}
