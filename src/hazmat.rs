//! Components to build your own n-th prime search.
//! These are not the recommended entry points; see [`nth_prime`](crate::nth_prime)
//! and [`checked_nth_prime`](crate::checked_nth_prime) instead.

pub mod accumulate;
pub mod trial_division;

pub use accumulate::AccumulatingPrimes;
pub use trial_division::{TrialDivisionPrimes, is_prime_trial_division};
