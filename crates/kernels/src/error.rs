use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Out of memory while allocating a lookup table of {bytes} bytes.")]
    OutOfMemory { bytes: u64 },
    #[error("Lookup table is read before it is initialized.")]
    Uninitialized,
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("Candidate `{name}` is not supported on this host.")]
    Unsupported { name: &'static str },
    #[error(transparent)]
    Table(#[from] TableError),
}
