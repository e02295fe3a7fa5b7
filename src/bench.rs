use crate::clock::process_cpu_time;
use kernels::lfsr::{Lfsr, CRC32_POLY, POLY16};
use kernels::{Candidate, Kernel, KernelError, Registry};
use log::debug;
use std::time::{Duration, Instant};

/// Which LFSR drives the benchmark. Both start at 1 and stop when the
/// register returns to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Every nonzero `u32`, via CRC-32 (IEEE).
    #[default]
    Full,
    /// Every nonzero `u16`, for smoke runs.
    Quick,
}

impl Traversal {
    pub fn poly(self) -> u32 {
        match self {
            Traversal::Full => CRC32_POLY,
            Traversal::Quick => POLY16,
        }
    }

    pub fn width(self) -> u32 {
        match self {
            Traversal::Full => 32,
            Traversal::Quick => 16,
        }
    }

    pub fn steps(self) -> u64 {
        Lfsr::period(self.poly())
    }

    /// What any correct popcount sums to over one period: each of the
    /// `width` bits is set in half of all values.
    pub fn popcount_checksum(self) -> u64 {
        let w = self.width() as u64;
        w << (w - 1)
    }

    /// What the identity baseline sums to: `1 + 2 + ... + (2^w - 1)`.
    pub fn null_checksum(self) -> u64 {
        let w = self.width();
        ((1u64 << w) - 1).wrapping_mul(1u64 << (w - 1))
    }

    pub fn expected_checksum(self, candidate: Candidate) -> u64 {
        if candidate.is_popcount() {
            self.popcount_checksum()
        } else {
            self.null_checksum()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub candidate: Candidate,
    /// Process CPU time for the traversal.
    pub cpu: Duration,
    pub wall: Duration,
    /// Wrapping sum of every value the candidate returned.
    pub checksum: u64,
}

/// One timed traversal. The accumulator is local to this call.
pub fn measure(kernel: &Kernel<'_>, traversal: Traversal) -> Measurement {
    let poly = traversal.poly();
    let start = Instant::now();
    let t1 = process_cpu_time();
    let checksum = kernel.accumulate(poly);
    let t2 = process_cpu_time();
    let wall = start.elapsed();
    let measurement = Measurement {
        candidate: kernel.candidate(),
        cpu: t2.saturating_sub(t1),
        wall,
        checksum,
    };
    debug!("{measurement:?}");
    measurement
}

/// Times every candidate the registry can run, in registry order, handing
/// each result to `each` as soon as it is available.
pub fn run<E, F>(registry: &Registry, traversal: Traversal, mut each: F) -> Result<Vec<Measurement>, E>
where
    E: From<KernelError>,
    F: FnMut(&Measurement) -> Result<(), E>,
{
    debug!(
        "benchmarking over {} steps of poly {:#010X}",
        traversal.steps(),
        traversal.poly()
    );
    let mut measurements = Vec::new();
    for candidate in registry.candidates() {
        let kernel = registry.kernel(candidate)?;
        let measurement = measure(&kernel, traversal);
        each(&measurement)?;
        measurements.push(measurement);
    }
    Ok(measurements)
}
