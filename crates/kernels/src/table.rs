//! Precomputed popcount tables, built from [`popcnt_a`].

use crate::error::TableError;
use crate::scalar::popcnt_a;
use std::sync::OnceLock;

const FULL_LEN: u64 = 1 << 32;
const HALF_LEN: usize = 1 << 16;

/// One byte per `u32`: 4 GiB.
pub struct LookupTable {
    data: Vec<u8>,
}

impl LookupTable {
    pub const BYTES: u64 = FULL_LEN;

    /// Fails only if the allocation fails. There is no partial table.
    pub fn build() -> Result<Self, TableError> {
        let oom = TableError::OutOfMemory { bytes: FULL_LEN };
        let len = usize::try_from(FULL_LEN).map_err(|_| oom.clone())?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| oom)?;
        data.extend((0..=u32::MAX).map(|i| popcnt_a(i) as u8));
        debug_assert_eq!(data.len(), len);
        Ok(Self { data })
    }

    #[inline(always)]
    pub fn get(&self, x: u32) -> u32 {
        // SAFETY: `data` holds exactly 2^32 entries, so every `u32` is in bounds.
        unsafe { *self.data.get_unchecked(x as usize) as u32 }
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("len", &self.data.len())
            .finish()
    }
}

/// Reduced-memory variant: one 64 KiB table, two lookups per value.
pub struct SplitTable {
    data: Box<[u8; HALF_LEN]>,
}

impl SplitTable {
    pub const BYTES: u64 = HALF_LEN as u64;

    pub fn build() -> Self {
        let mut data = Box::new([0u8; HALF_LEN]);
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = popcnt_a(i as u32) as u8;
        }
        Self { data }
    }

    #[inline(always)]
    pub fn get(&self, x: u32) -> u32 {
        self.data[(x & 0xFFFF) as usize] as u32 + self.data[(x >> 16) as usize] as u32
    }
}

impl std::fmt::Debug for SplitTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitTable")
            .field("len", &self.data.len())
            .finish()
    }
}

/// Owner of a table that is built at most once and read-only afterwards.
/// Reading it before it is built is an error, not undefined behavior.
#[derive(Debug)]
pub struct TableSlot<T> {
    cell: OnceLock<T>,
}

impl<T> TableSlot<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<&T, TableError> {
        self.cell.get().ok_or(TableError::Uninitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(f)
    }

    pub fn get_or_try_init<F>(&self, f: F) -> Result<&T, TableError>
    where
        F: FnOnce() -> Result<T, TableError>,
    {
        if let Some(table) = self.cell.get() {
            return Ok(table);
        }
        let table = f()?;
        Ok(self.cell.get_or_init(|| table))
    }
}

impl<T> Default for TableSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
