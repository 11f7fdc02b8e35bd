//! Cross-checks the two n-th prime algorithms over a range of indices.

use core::{fmt, num::NonZeroU32, ops::RangeInclusive};

use tracing::{debug, info};

use crate::{
    error::Error,
    presets::{Algorithm, nth_prime},
};

/// The result of comparing both algorithms for a single index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// The prime index.
    pub index: u32,
    /// The prime returned by [`Algorithm::TrialDivision`].
    pub trial_division: u64,
    /// The prime returned by [`Algorithm::Accumulate`].
    pub accumulate: u64,
}

impl Sample {
    fn new(index: NonZeroU32, finder: &impl Fn(Algorithm, NonZeroU32) -> u64) -> Self {
        Self {
            index: index.get(),
            trial_division: finder(Algorithm::TrialDivision, index),
            accumulate: finder(Algorithm::Accumulate, index),
        }
    }

    /// Returns `true` if both algorithms found the same prime.
    pub fn agrees(&self) -> bool {
        self.trial_division == self.accumulate
    }
}

/// Summary of a verification run in which all the samples agreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    /// The number of indices checked.
    pub checked: u32,
    /// The sample for the last index checked.
    pub last: Option<Sample>,
}

/// A verification run over an inclusive range of prime indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    first: NonZeroU32,
    // Never less than `first`.
    last: NonZeroU32,
}

impl Default for Verification {
    /// Verifies the indices 1 to 4.
    fn default() -> Self {
        Self {
            first: NonZeroU32::MIN,
            last: NonZeroU32::MIN.saturating_add(3),
        }
    }
}

impl Verification {
    /// Creates a verification of the indices `from..=to`.
    ///
    /// Returns [`Error::ZeroIndex`] if `from` is 0,
    /// and [`Error::EmptyRange`] if `from` is greater than `to`.
    pub fn new(from: u32, to: u32) -> Result<Self, Error> {
        let first = NonZeroU32::new(from).ok_or(Error::ZeroIndex)?;
        // `to >= from >= 1` on success.
        let last = NonZeroU32::new(to)
            .filter(|last| *last >= first)
            .ok_or(Error::EmptyRange { from, to })?;
        Ok(Self { first, last })
    }

    /// The indices this run checks.
    pub fn indices(&self) -> RangeInclusive<u32> {
        self.first.get()..=self.last.get()
    }

    /// Runs both algorithms for every index, writing the results to `out`.
    ///
    /// Stops at the first index the algorithms disagree on and returns [`Error::Mismatch`];
    /// the results for that index have already been written by then.
    /// Writes `All tests passed.` after the last index if every sample agreed.
    pub fn run<W: fmt::Write>(&self, out: &mut W) -> Result<VerificationReport, Error> {
        self.run_with(out, nth_prime)
    }

    fn run_with<W, F>(&self, out: &mut W, finder: F) -> Result<VerificationReport, Error>
    where
        W: fmt::Write,
        F: Fn(Algorithm, NonZeroU32) -> u64,
    {
        let mut report = VerificationReport {
            checked: 0,
            last: None,
        };

        for offset in 0..=(self.last.get() - self.first.get()) {
            let index = self.first.saturating_add(offset);
            let sample = Sample::new(index, &finder);
            debug!(
                "n={}: trial division={}, accumulated primes={}",
                sample.index, sample.trial_division, sample.accumulate
            );

            writeln!(out, "Testing with input: {}", sample.index)?;
            writeln!(out, "Trial division result: {}", sample.trial_division)?;
            writeln!(out, "Accumulated primes result: {}", sample.accumulate)?;

            if !sample.agrees() {
                return Err(Error::Mismatch {
                    index: sample.index,
                    trial_division: sample.trial_division,
                    accumulate: sample.accumulate,
                });
            }
            writeln!(out)?;

            report.checked += 1;
            report.last = Some(sample);
        }

        info!("Both algorithms agree on {} indices", report.checked);
        writeln!(out, "All tests passed.")?;
        Ok(report)
    }
}
