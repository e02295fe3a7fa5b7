use bitcount::bench::Traversal;
use bitcount::verify::Domain;
use bitcount::{run, LutMode, Options};
use kernels::{Candidate, Registry};

fn quick(lut: LutMode) -> Options {
    Options {
        domain: Domain::bits(16).unwrap(),
        traversal: Traversal::Quick,
        lut,
        verify: true,
        bench: true,
    }
}

#[test]
fn quick_run_with_split_table() {
    detect::initialize();
    let registry = Registry::new();
    let options = quick(LutMode::Split);
    let mut out = Vec::new();
    let summary = run(&registry, &options, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines = out.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "Testing implementations...");
    assert_eq!(lines[1], "Errs: 0  OK: 65536");
    assert_eq!(lines[2], "Initializing split LUT implementation... Done.");

    let mut expected = vec![Candidate::Null, Candidate::A, Candidate::B, Candidate::C];
    if registry.has_hardware() {
        expected.push(Candidate::D);
    }
    expected.push(Candidate::Y);
    let ran = summary
        .measurements
        .iter()
        .map(|m| m.candidate)
        .collect::<Vec<_>>();
    assert_eq!(ran, expected);
    for (line, candidate) in lines[3..].iter().zip(&expected) {
        assert!(line.starts_with(&format!("{}:", candidate.name())), "{line}");
    }

    let popcounts = expected.len() - 1;
    let sums = lines[3 + expected.len()];
    assert_eq!(sums, format!("Sums:{}", " 80000".repeat(popcounts)));
    assert_eq!(lines[4 + expected.len()], "Null sum: 7FFF8000");
    assert_eq!(lines.len(), 5 + expected.len());
    assert!(summary.clean(options.traversal));
}

#[test]
fn table_less_run() {
    let registry = Registry::with_hardware(None);
    let options = Options {
        verify: false,
        ..quick(LutMode::None)
    };
    let mut out = Vec::new();
    let summary = run(&registry, &options, &mut out).unwrap();
    assert!(summary.tally.is_none());
    assert_eq!(summary.measurements.len(), 4);
    assert!(summary
        .measurements
        .iter()
        .all(|m| !m.candidate.is_table() && m.candidate != Candidate::D));
    let a = &summary.measurements[1];
    let again = bitcount::bench::measure(&registry.kernel(Candidate::A).unwrap(), Traversal::Quick);
    assert_eq!(a.checksum, again.checksum);
}

#[test]
#[ignore = "allocates 4 GiB and walks 2^32 states per candidate"]
fn plain_run() {
    detect::initialize();
    let registry = Registry::new();
    let options = Options::default();
    let mut out = Vec::new();
    let summary = run(&registry, &options, &mut out).unwrap();
    assert!(summary.clean(options.traversal));
    assert_eq!(summary.measurements.last().map(|m| m.candidate), Some(Candidate::Z));
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Initializing LUT implementation... Done.\n"));
    assert!(out.contains("Null sum: 7FFFFFFF80000000\n"));
}
