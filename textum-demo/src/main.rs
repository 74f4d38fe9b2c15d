//! Command-line demonstration of the Textum pipeline.
//!
//! Parses a sentence string, prints its reconstruction, then replaces every
//! word of a given length and prints the result.
//!
//! ## Usage
//!
//! ```text
//! textum-demo
//! textum-demo --text "brown fox jumps over the lazy dog." --length 5 --replacement "#####"
//! TEXTUM_LOG=debug textum-demo --stats
//! ```
//!
//! A blank text or a zero length is reported as `Input Error: ...` on stderr
//! and the process exits with status 1.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use textum_core::{
    count_words_of_length, replace_words_of_length, TextError, TextParser, TextStats, Word,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_TEXT: &str = "Write    tests first, then \t build the features. A five-letter word.";
const RULE: &str = "-------------------------------------";

#[derive(Debug, Parser)]
#[command(name = "textum-demo")]
#[command(about = "Parse text into sentences and replace words of a given length")]
struct Args {
    /// Text to parse
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Length of the words to replace
    #[arg(long, default_value_t = 4)]
    length: usize,

    /// Word written in place of every match
    #[arg(long, default_value = "$$$")]
    replacement: String,

    /// Print document statistics after parsing
    #[arg(long)]
    stats: bool,

    /// Log filter, e.g. `info` or `textum_core=debug`
    #[arg(long, env = "TEXTUM_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("Input Error: {0}")]
    Input(#[from] TextError),

    #[error("Output Error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), DemoError> {
    writeln!(out, "Initial text string: \n{}", args.text)?;
    writeln!(out, "{RULE}")?;

    let document = TextParser::new().parse(&args.text)?;
    writeln!(out, "Parsed and reconstructed text: \n{document}")?;
    writeln!(out, "{RULE}")?;

    if args.stats {
        writeln!(out, "Statistics: {}", TextStats::collect(&document))?;
        writeln!(out, "{RULE}")?;
    }

    let replacement = Word::new(&args.replacement);
    let processed = replace_words_of_length(&document, args.length, &replacement)?;
    info!(
        matches = count_words_of_length(&document, args.length),
        "replacement done"
    );

    writeln!(
        out,
        "Text after replacing words of length {} with '{}':",
        args.length, args.replacement
    )?;
    writeln!(out, "{processed}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let argv = std::iter::once("textum-demo").chain(extra.iter().copied());
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    fn run_to_string(args: &Args) -> Result<String, DemoError> {
        let mut buf = Vec::new();
        run(args, &mut buf)?;
        Ok(String::from_utf8(buf).expect("output is UTF-8"))
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.text, DEFAULT_TEXT);
        assert_eq!(a.length, 4);
        assert_eq!(a.replacement, "$$$");
        assert!(!a.stats);
    }

    #[test]
    fn default_run_output() {
        let output = run_to_string(&args(&[])).expect("default input is valid");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Initial text string: ");
        assert_eq!(lines[1], DEFAULT_TEXT);
        assert_eq!(lines[2], RULE);
        assert_eq!(lines[3], "Parsed and reconstructed text: ");
        assert_eq!(
            lines[4],
            "Write tests first, then build the features. A five-letter word."
        );
        assert_eq!(lines[6], "Text after replacing words of length 4 with '$$$':");
        assert_eq!(
            lines[7],
            "Write tests first, $$$ build the features. A $$$-letter $$$."
        );
    }

    #[test]
    fn custom_arguments() {
        let output = run_to_string(&args(&[
            "--text",
            "brown fox jumps over the lazy dog.",
            "--length",
            "5",
            "--replacement",
            "#####",
        ]))
        .expect("valid input");
        assert!(output.ends_with("##### fox ##### over the lazy dog.\n"));
    }

    #[test]
    fn stats_flag_prints_statistics() {
        let output = run_to_string(&args(&["--text", "Hi there.", "--stats"])).expect("valid input");
        assert!(output.contains("Statistics: 1 sentences, 2 words"));
    }

    #[test]
    fn blank_text_is_an_input_error() {
        let err = run_to_string(&args(&["--text", "   "])).expect_err("blank input");
        assert!(matches!(err, DemoError::Input(TextError::BlankInput)));
        assert_eq!(err.to_string(), "Input Error: input text cannot be empty or blank");
    }

    #[test]
    fn zero_length_is_an_input_error() {
        let err = run_to_string(&args(&["--length", "0"])).expect_err("zero length");
        assert!(matches!(
            err,
            DemoError::Input(TextError::InvalidLength { length: 0 })
        ));
    }

    #[test]
    fn negative_length_is_rejected_by_the_parser() {
        let argv = ["textum-demo", "--length", "-3"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
