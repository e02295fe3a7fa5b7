use crate::error::{KernelError, TableError};
use crate::hardware::Hardware;
use crate::lfsr;
use crate::scalar::{identity, popcnt_a, popcnt_b, popcnt_c};
use crate::table::{LookupTable, SplitTable, TableSlot};

/// Anything that maps a `u32` to a count and can be cross-checked.
pub trait Popcount {
    fn name(&self) -> &'static str;
    fn count(&self, x: u32) -> u32;
}

impl<T: Popcount + ?Sized> Popcount for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn count(&self, x: u32) -> u32 {
        (**self).count(x)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Candidate {
    /// Returns its input; measures the traversal loop alone.
    Null,
    A,
    B,
    C,
    /// Native instruction, only on hosts that have it.
    D,
    /// Full 4 GiB table.
    Z,
    /// Two lookups into a 64 KiB table.
    Y,
}

impl Candidate {
    /// Benchmark order: baseline first, tables last.
    pub const ALL: [Candidate; 7] = [
        Candidate::Null,
        Candidate::A,
        Candidate::B,
        Candidate::C,
        Candidate::D,
        Candidate::Z,
        Candidate::Y,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Candidate::Null => "Null",
            Candidate::A => "Ver A",
            Candidate::B => "Ver B",
            Candidate::C => "Ver C",
            Candidate::D => "Ver D",
            Candidate::Z => "Ver Z",
            Candidate::Y => "Ver Y",
        }
    }

    pub fn is_popcount(self) -> bool {
        !matches!(self, Candidate::Null)
    }

    pub fn is_table(self) -> bool {
        matches!(self, Candidate::Z | Candidate::Y)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate bound to whatever state it needs to run.
#[derive(Debug, Clone, Copy)]
pub enum Kernel<'a> {
    Null,
    A,
    B,
    C,
    D(Hardware),
    Z(&'a LookupTable),
    Y(&'a SplitTable),
}

impl Kernel<'_> {
    pub fn candidate(&self) -> Candidate {
        match self {
            Kernel::Null => Candidate::Null,
            Kernel::A => Candidate::A,
            Kernel::B => Candidate::B,
            Kernel::C => Candidate::C,
            Kernel::D(_) => Candidate::D,
            Kernel::Z(_) => Candidate::Z,
            Kernel::Y(_) => Candidate::Y,
        }
    }

    /// One full LFSR period through this kernel. The dispatch happens once,
    /// outside the loop, so every arm gets its own monomorphized loop.
    pub fn accumulate(&self, poly: u32) -> u64 {
        match *self {
            Kernel::Null => lfsr::accumulate(poly, identity),
            Kernel::A => lfsr::accumulate(poly, popcnt_a),
            Kernel::B => lfsr::accumulate(poly, popcnt_b),
            Kernel::C => lfsr::accumulate(poly, popcnt_c),
            Kernel::D(hardware) => hardware.accumulate(poly),
            Kernel::Z(table) => lfsr::accumulate(poly, |x| table.get(x)),
            Kernel::Y(table) => lfsr::accumulate(poly, |x| table.get(x)),
        }
    }
}

impl Popcount for Kernel<'_> {
    fn name(&self) -> &'static str {
        self.candidate().name()
    }

    #[inline]
    fn count(&self, x: u32) -> u32 {
        match *self {
            Kernel::Null => identity(x),
            Kernel::A => popcnt_a(x),
            Kernel::B => popcnt_b(x),
            Kernel::C => popcnt_c(x),
            Kernel::D(hardware) => hardware.count(x),
            Kernel::Z(table) => table.get(x),
            Kernel::Y(table) => table.get(x),
        }
    }
}

/// The fixed set of candidates on this host, plus the tables they read.
#[derive(Debug, Default)]
pub struct Registry {
    hardware: Option<Hardware>,
    full: TableSlot<LookupTable>,
    split: TableSlot<SplitTable>,
}

impl Registry {
    /// Requires `detect::initialize()` to have run.
    pub fn new() -> Self {
        Self::with_hardware(Hardware::detect())
    }

    pub fn with_hardware(hardware: Option<Hardware>) -> Self {
        Self {
            hardware,
            full: TableSlot::new(),
            split: TableSlot::new(),
        }
    }

    pub fn has_hardware(&self) -> bool {
        self.hardware.is_some()
    }

    /// Candidates that can run right now, in benchmark order. Tables appear
    /// only once they are built; the hardware kernel only if detected.
    pub fn candidates(&self) -> Vec<Candidate> {
        Candidate::ALL
            .into_iter()
            .filter(|&c| self.kernel(c).is_ok())
            .collect()
    }

    /// The formulas that are checked against each other. The first one is
    /// the reference.
    pub fn verified(&self) -> Vec<Kernel<'_>> {
        let mut kernels = vec![Kernel::A, Kernel::B, Kernel::C];
        if let Some(hardware) = self.hardware {
            kernels.push(Kernel::D(hardware));
        }
        kernels
    }

    pub fn kernel(&self, candidate: Candidate) -> Result<Kernel<'_>, KernelError> {
        match candidate {
            Candidate::Null => Ok(Kernel::Null),
            Candidate::A => Ok(Kernel::A),
            Candidate::B => Ok(Kernel::B),
            Candidate::C => Ok(Kernel::C),
            Candidate::D => self.hardware.map(Kernel::D).ok_or(KernelError::Unsupported {
                name: Candidate::D.name(),
            }),
            Candidate::Z => Ok(Kernel::Z(self.full.get()?)),
            Candidate::Y => Ok(Kernel::Y(self.split.get()?)),
        }
    }

    pub fn init_full_table(&self) -> Result<&LookupTable, TableError> {
        let table = self.full.get_or_try_init(LookupTable::build)?;
        log::debug!("built {table:?}");
        Ok(table)
    }

    pub fn init_split_table(&self) -> &SplitTable {
        self.split.get_or_init(SplitTable::build)
    }
}
