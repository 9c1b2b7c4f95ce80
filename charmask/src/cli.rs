//! This file defines the command-line interface (CLI) for the charmask application.
//! License: MIT OR APACHE 2.0

use clap::Parser;
use std::ffi::OsString;

use charmask_core::ReplaceOptions;

/// Default pattern: any digit.
pub const DEFAULT_CHARACTERS: &str = r"\d";

/// Default replacement placeholder.
pub const DEFAULT_REPLACEMENT: &str = "X";

/// Top-level CLI definition.
///
/// Text arguments are kept as `OsString` so that non-UTF-8 values reach the
/// core library's type checks instead of being rejected by the parser.
#[derive(Parser, Debug)]
#[command(
    name = "charmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replaces specific characters in data fields with a specified replacement character.",
    long_about = "charmask replaces the characters matched by a regular expression with a replacement character. By default only the first match is replaced; use --global_replace to replace every match.",
    after_help = "Examples:\n  charmask \"123-456-7890\" -c \"\\d\" -r \"X\"\n  charmask \"John Doe\" -c \"[aeiou]\" -r \"*\" -i\n  charmask \"Password123\" -c \"\\d\" -r \"0\" -g\n  charmask \"SensitiveData\" -c \".\" -r \"*\" -g -s",
)]
pub struct Cli {
    /// The input data string to process.
    #[arg(value_name = "INPUT", help = "The input data string to process.")]
    pub input_data: OsString,

    /// The character set to replace (regular expression).
    #[arg(
        long,
        short = 'c',
        value_name = "PATTERN",
        env = "CHARMASK_CHARACTERS",
        default_value = DEFAULT_CHARACTERS,
        help = "The character set to replace (regular expression)."
    )]
    pub characters: OsString,

    /// The replacement character.
    #[arg(
        long,
        short = 'r',
        value_name = "TEXT",
        env = "CHARMASK_REPLACEMENT",
        default_value = DEFAULT_REPLACEMENT,
        help = "The replacement character."
    )]
    pub replacement: OsString,

    /// Replace every match instead of only the first.
    #[arg(
        long = "global_replace",
        short = 'g',
        alias = "global-replace",
        help = "Replace all occurrences of the matching characters, otherwise only the first."
    )]
    pub global_replace: bool,

    /// Match case-insensitively.
    #[arg(
        long = "ignore_case",
        short = 'i',
        alias = "ignore-case",
        help = "Ignore case during character matching (useful for letters)."
    )]
    pub ignore_case: bool,

    /// Enable debug logging (overrides the global RUST_LOG level).
    #[arg(long, short = 'v', help = "Enable verbose logging.")]
    pub verbose: bool,

    /// Keep the original input out of the logs.
    #[arg(
        long = "security",
        short = 's',
        help = "Avoid printing the original input data to the logs."
    )]
    pub security: bool,
}

impl Cli {
    /// The substitution flags carried by this invocation.
    pub fn replace_options(&self) -> ReplaceOptions {
        ReplaceOptions::default()
            .global(self.global_replace)
            .ignore_case(self.ignore_case)
            .secure(self.security)
    }
}
