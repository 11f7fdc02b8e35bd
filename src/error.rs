use core::fmt;

/// Errors returned by the crate's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A prime index of zero was requested; indices start at 1 (the 1st prime is 2).
    ZeroIndex,
    /// The requested verification range contains no indices.
    EmptyRange {
        /// The first index of the range.
        from: u32,
        /// The last index of the range (inclusive).
        to: u32,
    },
    /// The two algorithms returned different primes for the same index.
    Mismatch {
        /// The prime index both algorithms were asked for.
        index: u32,
        /// The result of the trial division algorithm.
        trial_division: u64,
        /// The result of the accumulate-and-test algorithm.
        accumulate: u64,
    },
    /// Writing the verification output failed.
    Output,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::ZeroIndex => write!(f, "Prime indices start at 1, but 0 was requested."),
            Error::EmptyRange { from, to } => write!(
                f,
                "The verification range {}..={} is empty.",
                from, to
            ),
            Error::Mismatch {
                index,
                trial_division,
                accumulate,
            } => write!(
                f,
                concat![
                    "The algorithms disagree on prime number {}: ",
                    "trial division returned {}, accumulated primes returned {}."
                ],
                index, trial_division, accumulate
            ),
            Error::Output => write!(f, "Failed to write the verification output."),
        }
    }
}

impl core::error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Output
    }
}
