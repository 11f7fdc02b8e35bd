//! Prime search by trial division up to the integer square root.

use core::num::NonZeroU32;

/// Checks if `candidate` is prime by dividing it by every integer from 2
/// up to and including `floor(sqrt(candidate))`.
///
/// Numbers below 2 are not prime.
pub fn is_prime_trial_division(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    // `isqrt()` is exact, so squares of primes are caught by their root.
    (2..=candidate.isqrt()).all(|divisor| candidate % divisor != 0)
}

/// An iterator over the primes in increasing order, starting from 2,
/// testing every integer in turn with [`is_prime_trial_division`].
#[allow(missing_copy_implementations)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialDivisionPrimes {
    // The last tested candidate; `None` once the `u64` range is exhausted.
    candidate: Option<u64>,
}

impl TrialDivisionPrimes {
    /// Creates a new iterator. The first tested candidate is 2.
    pub fn new() -> Self {
        Self { candidate: Some(1) }
    }
}

impl Default for TrialDivisionPrimes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TrialDivisionPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.candidate?.checked_add(1);
            self.candidate = candidate;
            let candidate = candidate?;
            if is_prime_trial_division(candidate) {
                return Some(candidate);
            }
        }
    }
}

/// Returns the `n`-th prime (the 1st one being 2), counting the candidates
/// that pass [`is_prime_trial_division`].
pub fn nth_prime(n: NonZeroU32) -> u64 {
    let mut count = 0;
    let mut candidate = 1u64;
    while count < n.get() {
        candidate += 1;
        if is_prime_trial_division(candidate) {
            count += 1;
        }
    }
    candidate
}
