//! Text Pipeline Benchmarking Tool
//!
//! This binary measures the throughput of the parsing pipeline and the
//! word-replacement pass on a large text file, such as a book or a dump of
//! article abstracts.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: Trimming and collapsing horizontal whitespace
//! 2. **Parse**: Normalization + tokenization + sentence segmentation
//! 3. **Replace**: Replacing every word of a given length in the parsed document
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark with the default replacement length (4)
//! ./target/release/text_bench /path/to/book.txt
//!
//! # Replace words of length 7 instead
//! ./target/release/text_bench /path/to/book.txt 7
//! ```
//!
//! ## Example Output
//!
//! ```text
//! parse      best 0.204 s  median 0.212 s  2168.4 MiB/s  1204118 sentences (176 ns each)
//! ```
//!
//! Run with `--release`; debug builds are an order of magnitude slower.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use textum_core::analyzer::TextNormalizer;
use textum_core::{replace_words_of_length, Document, TextParser, TextStats, Word};

const WARMUP_RUNS: usize = 1;
const TIMED_RUNS: usize = 5;
const MIB: f64 = 1024.0 * 1024.0;
const DEFAULT_LENGTH: usize = 4;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: text_bench <path> [length]");
        std::process::exit(1);
    }

    let path = &args[1];
    let length = match args.get(2) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        None => DEFAULT_LENGTH,
    };

    println!("Loading file...");
    let input = fs::read_to_string(path)?;

    println!("File size: {:.2} MiB", input.len() as f64 / MIB);
    println!("Length:    {}\n", length);

    println!("{}", bench_normalize(&input));
    let (report, document) = bench_parse(&input)?;
    println!("{report}");
    println!("\nStats:     {}", TextStats::collect(&document));
    println!("{}", bench_replace(&input, &document, length)?);

    Ok(())
}

fn to_io(err: textum_core::TextError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// Timings of one benchmarked stage.
struct Report {
    stage: &'static str,
    input_bytes: usize,
    best: Duration,
    median: Duration,
    /// Number and name of the units the stage produces, if worth reporting.
    units: Option<(usize, &'static str)>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let median = self.median.as_secs_f64();
        write!(
            f,
            "{:<10} best {:.3} s  median {:.3} s  {:.1} MiB/s",
            self.stage,
            self.best.as_secs_f64(),
            median,
            self.input_bytes as f64 / MIB / median,
        )?;
        if let Some((count, unit)) = self.units.filter(|(count, _)| *count > 0) {
            let per_unit = self.median.as_nanos() / count as u128;
            write!(f, "  {count} {unit} ({per_unit} ns each)")?;
        }
        Ok(())
    }
}

/// Runs `stage` for the warmup rounds, then times each of the measured rounds.
///
/// Returns the sorted round times and the output of the last round.
fn time_runs<T>(mut stage: impl FnMut() -> T) -> (Vec<Duration>, T) {
    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(stage());
    }

    let mut times = Vec::with_capacity(TIMED_RUNS);
    let mut timed = || {
        let start = Instant::now();
        let out = std::hint::black_box(stage());
        times.push(start.elapsed());
        out
    };

    let mut last = timed();
    for _ in 1..TIMED_RUNS {
        last = timed();
    }

    times.sort_unstable();
    (times, last)
}

fn report(
    stage: &'static str,
    input_bytes: usize,
    times: &[Duration],
    units: Option<(usize, &'static str)>,
) -> Report {
    Report {
        stage,
        input_bytes,
        best: times[0],
        median: times[times.len() / 2],
        units,
    }
}

fn bench_normalize(input: &str) -> Report {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    let (times, ()) = time_runs(|| normalizer.normalize_into(input, &mut out));
    report("normalize", input.len(), &times, None)
}

fn bench_parse(input: &str) -> io::Result<(Report, Document)> {
    let parser = TextParser::new();

    let (times, parsed) = time_runs(|| parser.parse(input));
    let document = parsed.map_err(to_io)?;
    let units = Some((document.len(), "sentences"));
    Ok((report("parse", input.len(), &times, units), document))
}

fn bench_replace(input: &str, document: &Document, length: usize) -> io::Result<Report> {
    let replacement = Word::new("$$$");

    let (times, replaced) = time_runs(|| replace_words_of_length(document, length, &replacement));
    replaced.map_err(to_io)?;
    let units = Some((TextStats::collect(document).num_words, "words"));
    Ok(report("replace", input.len(), &times, units))
}
