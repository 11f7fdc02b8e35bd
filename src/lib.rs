#![no_std]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications,
    clippy::unwrap_used
)]

extern crate alloc;

mod error;
pub mod hazmat;
mod presets;
pub mod verify;

pub use error::Error;
pub use presets::{Algorithm, checked_nth_prime, nth_prime};
pub use verify::{Sample, Verification, VerificationReport};
