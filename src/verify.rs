use kernels::Popcount;
use log::{debug, error, warn};
use std::fmt;

/// The scan stops after this many disagreements have been recorded.
pub const MAX_MISMATCHES: usize = 10;

/// Inputs `0..2^bits`, scanned in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    bits: u32,
}

impl Domain {
    pub const FULL: Domain = Domain { bits: 32 };

    pub fn bits(bits: u32) -> Option<Self> {
        (1..=32).contains(&bits).then_some(Self { bits })
    }

    pub fn len(self) -> u64 {
        1 << self.bits
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::FULL
    }
}

/// One input the candidates disagree on, with every candidate's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub input: u32,
    pub values: Vec<(&'static str, u32)>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}:", self.input)?;
        for (name, value) in &self.values {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub ok: u64,
    pub errs: u64,
    pub mismatches: Vec<Mismatch>,
}

impl Tally {
    pub fn scanned(&self) -> u64 {
        self.ok + self.errs
    }

    pub fn passed(&self) -> bool {
        self.errs == 0
    }
}

/// Evaluates every candidate on every input of `domain` and compares each
/// one against the first. Mismatches are logged at error level as they are
/// found.
pub fn verify<P: Popcount>(candidates: &[P], domain: Domain) -> Tally {
    let mut tally = Tally::default();
    let Some((reference, others)) = candidates.split_first() else {
        return tally;
    };
    debug!(
        "verifying {} candidates against {} over {} inputs",
        others.len(),
        reference.name(),
        domain.len()
    );
    for i in 0..domain.len() {
        let x = i as u32;
        let expected = reference.count(x);
        if others.iter().all(|c| c.count(x) == expected) {
            tally.ok += 1;
            continue;
        }
        let mismatch = Mismatch {
            input: x,
            values: candidates.iter().map(|c| (c.name(), c.count(x))).collect(),
        };
        error!("{mismatch}");
        tally.errs += 1;
        tally.mismatches.push(mismatch);
        if tally.mismatches.len() >= MAX_MISMATCHES {
            warn!(
                "stopping after {MAX_MISMATCHES} mismatches at {x:#010X}, {} of {} inputs scanned",
                tally.scanned(),
                domain.len()
            );
            break;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, u32);

    impl Popcount for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn count(&self, x: u32) -> u32 {
            x.count_ones() + u32::from(x == self.1)
        }
    }

    #[test]
    fn domain_bounds() {
        assert_eq!(Domain::bits(0), None);
        assert_eq!(Domain::bits(33), None);
        assert_eq!(Domain::bits(16).map(Domain::len), Some(65536));
        assert_eq!(Domain::FULL.len(), 1 << 32);
        assert_eq!(Domain::default(), Domain::FULL);
    }

    #[test]
    fn single_disagreement() {
        let candidates = [Fixed("good", u32::MAX), Fixed("bad", 0x1234)];
        let tally = verify(&candidates, Domain::bits(16).unwrap());
        assert_eq!(tally.errs, 1);
        assert_eq!(tally.ok, 65535);
        assert_eq!(tally.scanned(), 65536);
        assert_eq!(
            tally.mismatches,
            vec![Mismatch {
                input: 0x1234,
                values: vec![("good", 5), ("bad", 6)],
            }]
        );
        assert_eq!(tally.mismatches[0].to_string(), "00001234: good=5 bad=6");
    }

    #[test]
    fn empty_candidates() {
        let candidates: [Fixed; 0] = [];
        assert_eq!(verify(&candidates, Domain::FULL), Tally::default());
    }

    #[test]
    fn lone_reference_always_passes() {
        let tally = verify(&[Fixed("only", 3)], Domain::bits(8).unwrap());
        assert!(tally.passed());
        assert_eq!(tally.ok, 256);
    }
}
