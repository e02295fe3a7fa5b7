use kernels::{KernelError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Kernel(#[from] KernelError),
    #[error("Failed to write the report: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            Error::Table(TableError::OutOfMemory { .. })
                | Error::Kernel(KernelError::Table(TableError::OutOfMemory { .. }))
        )
    }
}
