use argh::FromArgs;
use log::warn;

use bitcount::bench::Traversal;
use bitcount::verify::Domain;
use bitcount::{LutMode, Options};

#[derive(Debug, Eq, PartialEq)]
pub struct ArgumentParseError;

#[derive(FromArgs, Debug, PartialEq)]
/// cross-check and time 32-bit population count kernels; with no arguments,
/// verify all 2^32 inputs, build the 4 GiB table and time every kernel over
/// the full CRC-32 LFSR traversal
pub struct Arguments {
    /// lookup tables to build: [`full`, `split`, `both`, `none`]; `full`
    /// by default, `split` with --quick
    #[argh(option)]
    pub lut: Option<LutMode>,

    /// verify only inputs below 2^bits (1 to 32)
    #[argh(option, default = "32")]
    pub bits: u32,

    /// verify 16 bits and benchmark over the 16-bit LFSR
    #[argh(switch, short = 'q')]
    pub quick: bool,

    /// skip the verification pass
    #[argh(switch)]
    pub skip_verify: bool,

    /// skip table construction and the benchmark
    #[argh(switch)]
    pub skip_bench: bool,

    /// verbose
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Arguments {
    pub fn get_options(&self) -> Result<Options, ArgumentParseError> {
        let bits = if self.quick { self.bits.min(16) } else { self.bits };
        let Some(domain) = Domain::bits(bits) else {
            warn!("invalid verification width {bits}, expected 1 to 32");
            return Err(ArgumentParseError);
        };
        let traversal = if self.quick {
            Traversal::Quick
        } else {
            Traversal::Full
        };
        Ok(Options {
            domain,
            traversal,
            lut: self.lut.unwrap_or(if self.quick {
                LutMode::Split
            } else {
                LutMode::Full
            }),
            verify: !self.skip_verify,
            bench: !self.skip_bench,
        })
    }
}
