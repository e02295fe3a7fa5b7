pub mod candidate;
pub mod error;
pub mod hardware;
pub mod lfsr;
pub mod scalar;
pub mod table;

pub use candidate::{Candidate, Kernel, Popcount, Registry};
pub use error::{KernelError, TableError};
