use crate::bench::{self, Measurement, Traversal};
use crate::error::Error;
use crate::report;
use crate::verify::{self, Domain, Tally};
use kernels::table::{LookupTable, SplitTable};
use kernels::{Registry, TableError};
use log::{info, warn};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Which lookup-table candidates get built and benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LutMode {
    /// The 4 GiB table only.
    #[default]
    Full,
    /// The 64 KiB two-lookup table only.
    Split,
    Both,
    None,
}

impl LutMode {
    pub fn full(self) -> bool {
        matches!(self, LutMode::Full | LutMode::Both)
    }

    pub fn split(self) -> bool {
        matches!(self, LutMode::Split | LutMode::Both)
    }
}

impl FromStr for LutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full" => Ok(LutMode::Full),
            "split" => Ok(LutMode::Split),
            "both" => Ok(LutMode::Both),
            "none" => Ok(LutMode::None),
            _ => Err(format!(
                "unknown table mode `{s}`, expected one of: full, split, both, none"
            )),
        }
    }
}

impl fmt::Display for LutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LutMode::Full => "full",
            LutMode::Split => "split",
            LutMode::Both => "both",
            LutMode::None => "none",
        })
    }
}

/// Defaults reproduce a plain run: full verification, the 4 GiB table, and
/// the 32-bit traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub domain: Domain,
    pub traversal: Traversal,
    pub lut: LutMode,
    pub verify: bool,
    pub bench: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            domain: Domain::FULL,
            traversal: Traversal::Full,
            lut: LutMode::Full,
            verify: true,
            bench: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub tally: Option<Tally>,
    pub measurements: Vec<Measurement>,
}

impl Summary {
    /// Whether every candidate agreed during verification and every checksum
    /// came out as expected.
    pub fn clean(&self, traversal: Traversal) -> bool {
        self.tally.as_ref().map_or(true, Tally::passed)
            && report::checksum_outliers(&self.measurements, traversal).is_empty()
    }
}

/// Verification, then table construction, then the benchmark, writing the
/// human-readable report to `out`. Only a failed table allocation or a
/// failed write aborts the run; disagreements are reported and counted.
pub fn run<W: Write>(registry: &Registry, options: &Options, out: &mut W) -> Result<Summary, Error> {
    let mut summary = Summary::default();
    if !registry.has_hardware() {
        warn!("no hardware population count on this host, omitting Ver D");
    }

    if options.verify {
        writeln!(out, "Testing implementations...")?;
        let kernels = registry.verified();
        let tally = verify::verify(&kernels, options.domain);
        writeln!(out, "{}", report::tally_line(&tally))?;
        if tally.passed() {
            info!(
                "{} candidates agree on all {} inputs",
                kernels.len(),
                options.domain.len()
            );
        }
        summary.tally = Some(tally);
    }

    if !options.bench {
        return Ok(summary);
    }

    if options.lut.full() {
        info!("allocating {} bytes for the full table", LookupTable::BYTES);
        init_table(out, "LUT implementation", || registry.init_full_table())?;
    }
    if options.lut.split() {
        info!("allocating {} bytes for the split table", SplitTable::BYTES);
        init_table(out, "split LUT implementation", || Ok(registry.init_split_table()))?;
    }

    summary.measurements = bench::run(registry, options.traversal, |m| -> Result<(), Error> {
        writeln!(out, "{}", report::measurement_line(m))?;
        out.flush()?;
        Ok(())
    })?;

    writeln!(out, "{}", report::sums_line(&summary.measurements))?;
    if let Some(line) = report::null_line(&summary.measurements) {
        writeln!(out, "{line}")?;
    }
    for candidate in report::checksum_outliers(&summary.measurements, options.traversal) {
        warn!(
            "checksum of {candidate} differs from {:X}",
            options.traversal.expected_checksum(candidate)
        );
    }
    Ok(summary)
}

/// Builds one table between an "Initializing" and a "Done." marker. A failed
/// build leaves the line open and returns the table error as is.
fn init_table<W, T, F>(out: &mut W, label: &str, init: F) -> Result<T, Error>
where
    W: Write,
    F: FnOnce() -> Result<T, TableError>,
{
    write!(out, "Initializing {label}...")?;
    out.flush()?;
    let table = init()?;
    writeln!(out, " Done.")?;
    Ok(table)
}
