//! Population count harness.
//!
//! Cross-checks a fixed set of 32-bit popcount formulas over their whole
//! input domain, then times one full LFSR traversal through each of them.
#![allow(clippy::len_without_is_empty)]

pub mod bench;
pub mod clock;
pub mod driver;
pub mod error;
pub mod report;
pub mod verify;

pub use driver::{run, LutMode, Options, Summary};
pub use error::Error;
