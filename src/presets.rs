use core::num::NonZeroU32;

use crate::{
    error::Error,
    hazmat::{accumulate, trial_division},
};

/// The algorithm used to find the n-th prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Scan upwards from 2, testing each candidate against every prime found before it.
    /// See [`AccumulatingPrimes`](crate::hazmat::AccumulatingPrimes).
    Accumulate,
    /// Scan upwards from 2, testing each candidate by trial division up to its integer square root.
    /// See [`is_prime_trial_division`](crate::hazmat::is_prime_trial_division).
    TrialDivision,
}

impl Algorithm {
    /// All the available algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Accumulate, Algorithm::TrialDivision];

    /// A human-readable name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Accumulate => "accumulated primes",
            Algorithm::TrialDivision => "trial division",
        }
    }
}

/// Returns the `n`-th prime number, with the 1st prime being 2.
///
/// Both algorithms return the same value for every `n`; they only differ in how they get there.
pub fn nth_prime(algorithm: Algorithm, n: NonZeroU32) -> u64 {
    match algorithm {
        Algorithm::Accumulate => accumulate::nth_prime(n),
        Algorithm::TrialDivision => trial_division::nth_prime(n),
    }
}

/// Returns the `n`-th prime number, with the 1st prime being 2.
///
/// Returns [`Error::ZeroIndex`] if `n` is 0.
pub fn checked_nth_prime(algorithm: Algorithm, n: u32) -> Result<u64, Error> {
    let n = NonZeroU32::new(n).ok_or(Error::ZeroIndex)?;
    Ok(nth_prime(algorithm, n))
}
