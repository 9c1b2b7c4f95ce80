//! charmask command implementation: run the substitution and write the result.

use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use charmask_core::execute;

use crate::cli::Cli;
use crate::ui::output_format;

/// The main operation runner for the charmask CLI.
///
/// The transformed text is written to `out` only after the substitution has
/// succeeded, so a failure never leaves partial output behind.
pub fn run_charmask<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    debug!("Starting charmask operation.");

    let options = cli.replace_options();
    debug!("Replace options: {:?}", options);

    let masked = execute(&cli.input_data, &cli.characters, &cli.replacement, options)?;

    output_format::print_result(out, &masked).context("Failed to write output")?;

    debug!("charmask operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charmask_core::SubstitutionError;
    use clap::Parser;
    use std::io;
    use test_log::test;

    /// A writer whose every write fails, as stdout does once the reader hangs up.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("charmask").chain(args.iter().copied())).unwrap()
    }

    fn run(args: &[&str]) -> (Result<()>, String) {
        let cli = parse(args);
        let mut out = Vec::new();
        let result = run_charmask(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_writes_masked_text() {
        let (result, out) = run(&["abc123", "-c", r"\d", "-r", "X"]);
        assert!(result.is_ok());
        assert_eq!(out, "abcX23\n");
    }

    #[test]
    fn test_run_global_ignore_case() {
        let (result, out) = run(&["ABC", "-c", "[a-c]", "-r", "*", "-g", "-i"]);
        assert!(result.is_ok());
        assert_eq!(out, "***\n");
    }

    #[test]
    fn test_run_error_writes_nothing() {
        let (result, out) = run(&["abc", "-c", "["]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SubstitutionError>(),
            Some(SubstitutionError::PatternError { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_io_cause() {
        let cli = parse(&["abc123"]);
        let err = run_charmask(&cli, &mut ClosedPipe).unwrap_err();

        let io_err = err.downcast_ref::<io::Error>().expect("io::Error in the chain");
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(
            output_format::render_error(&err),
            "Failed to write output: pipe closed"
        );
    }
}
