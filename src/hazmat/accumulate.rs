//! Prime search that tests each candidate against every prime found before it.

use alloc::vec::Vec;
use core::num::NonZeroU32;

/// An iterator over the primes in increasing order, starting from 2.
///
/// Each candidate is checked for divisibility by *all* the previously discovered primes,
/// not only those below its square root, so the cost of every step grows with the number
/// of primes produced so far. The discovered primes are kept for the lifetime of the iterator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccumulatingPrimes {
    primes: Vec<u64>,
    // `None` once the whole `u64` range has been scanned.
    next_candidate: Option<u64>,
}

impl AccumulatingPrimes {
    /// Creates a new iterator, starting from the candidate 2.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new iterator with room for `capacity` primes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primes: Vec::with_capacity(capacity),
            next_candidate: Some(2),
        }
    }

    /// The primes produced so far, in increasing order.
    pub fn discovered(&self) -> &[u64] {
        &self.primes
    }

    fn is_coprime_to_discovered(&self, candidate: u64) -> bool {
        self.primes.iter().all(|prime| candidate % prime != 0)
    }
}

impl Default for AccumulatingPrimes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for AccumulatingPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.next_candidate?;
            self.next_candidate = candidate.checked_add(1);

            if self.is_coprime_to_discovered(candidate) {
                debug_assert!(self.primes.last().is_none_or(|last| *last < candidate));
                self.primes.push(candidate);
                return Some(candidate);
            }
        }
    }
}

/// Returns the `n`-th prime (the 1st one being 2) found by [`AccumulatingPrimes`].
pub fn nth_prime(n: NonZeroU32) -> u64 {
    // No reservation: `n` can be close to `u32::MAX`.
    AccumulatingPrimes::new()
        .nth(n.get() as usize - 1)
        .expect("there are more than `u32::MAX` primes below `u64::MAX`")
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroU32;

    use proptest::prelude::*;

    use super::{AccumulatingPrimes, nth_prime};

    fn is_prime_ref(num: u64) -> bool {
        num_prime::nt_funcs::is_prime(&num, None).probably()
    }

    #[test]
    fn first_primes() {
        let primes = AccumulatingPrimes::new().take(10).collect::<Vec<_>>();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn small_indices() {
        let expected = [2, 3, 5, 7, 11];
        for (i, p) in expected.iter().enumerate() {
            let n = NonZeroU32::new(i as u32 + 1).expect("index is non-zero");
            assert_eq!(nth_prime(n), *p);
        }
    }

    #[test]
    fn default_starts_from_two() {
        assert_eq!(AccumulatingPrimes::default().next(), Some(2));
    }

    #[test]
    fn keeps_discovered_primes() {
        let mut primes = AccumulatingPrimes::new();
        assert!(primes.discovered().is_empty());

        assert_eq!(primes.nth(5), Some(13));
        assert_eq!(primes.discovered(), [2, 3, 5, 7, 11, 13]);

        // Resumes from the candidate after the last prime.
        assert_eq!(primes.next(), Some(17));
        assert_eq!(primes.discovered().len(), 7);
    }

    #[test]
    fn starts_without_reserving() {
        let primes = AccumulatingPrimes::new();
        assert_eq!(primes.primes.capacity(), 0);

        let primes = AccumulatingPrimes::with_capacity(16);
        assert!(primes.primes.capacity() >= 16);
    }

    #[test]
    fn thousandth_prime() {
        assert_eq!(nth_prime(NonZeroU32::new(1000).expect("non-zero")), 7919);
    }

    #[test]
    fn agrees_with_reference() {
        let primes = AccumulatingPrimes::new().take(500).collect::<Vec<_>>();
        let reference = (2u64..)
            .filter(|num| is_prime_ref(*num))
            .take(500)
            .collect::<Vec<_>>();
        assert_eq!(primes, reference);
    }

    proptest! {
        #[test]
        fn result_is_prime(n in 1u32..300) {
            let p = nth_prime(NonZeroU32::new(n).expect("non-zero by construction"));
            assert!(is_prime_ref(p), "{p} is reported as prime number {n} but is composite");
        }
    }
}
