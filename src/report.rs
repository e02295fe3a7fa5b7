//! Text rendering of results. Line shapes follow the classic output of the
//! tool so old logs stay comparable.

use crate::bench::{Measurement, Traversal};
use crate::verify::Tally;
use kernels::Candidate;

pub fn tally_line(tally: &Tally) -> String {
    format!("Errs: {}  OK: {}", tally.errs, tally.ok)
}

pub fn measurement_line(m: &Measurement) -> String {
    format!(
        "{:<7} {:>15} us  {:>10.3} s wall  sum {:X}",
        format!("{}:", m.candidate.name()),
        m.cpu.as_micros(),
        m.wall.as_secs_f64(),
        m.checksum
    )
}

/// Checksums of every popcount candidate that ran, in run order.
pub fn sums_line(measurements: &[Measurement]) -> String {
    let mut line = String::from("Sums:");
    for m in measurements.iter().filter(|m| m.candidate.is_popcount()) {
        line.push_str(&format!(" {:X}", m.checksum));
    }
    line
}

pub fn null_line(measurements: &[Measurement]) -> Option<String> {
    measurements
        .iter()
        .find(|m| m.candidate == Candidate::Null)
        .map(|m| format!("Null sum: {:X}", m.checksum))
}

/// Candidates whose checksum is not what a correct kernel produces over
/// `traversal`.
pub fn checksum_outliers(measurements: &[Measurement], traversal: Traversal) -> Vec<Candidate> {
    measurements
        .iter()
        .filter(|m| m.checksum != traversal.expected_checksum(m.candidate))
        .map(|m| m.candidate)
        .collect()
}
