use kernels::Registry;
use log::{debug, error, info, warn};
use std::io::Write;

use crate::args::Arguments;

mod args;

fn main() {
    let args: Arguments = argh::from_env();
    // not `env_logger::builder()`: RUST_LOG is ignored
    let mut log_builder = env_logger::Builder::new();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    let Ok(options) = args.get_options() else {
        std::process::exit(2);
    };

    detect::initialize();
    let registry = Registry::new();
    info!(
        "candidates on this host: {}",
        registry
            .candidates()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match bitcount::run(&registry, &options, &mut out) {
        Ok(summary) => {
            if !summary.clean(options.traversal) {
                warn!("candidates disagree, see the diagnostics above");
            }
        }
        Err(err) => {
            end_report(&mut out);
            if err.is_out_of_memory() {
                error!("OOM. {err}");
            } else {
                error!("{err}");
            }
            std::process::exit(1);
        }
    }
}

/// Closes a progress line left open by a failed run. Returns whether the
/// write went through; a failure is logged, the exit status already says
/// the run failed.
fn end_report<W: Write>(out: &mut W) -> bool {
    match writeln!(out) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to end the report: {e}");
            false
        }
    }
}
