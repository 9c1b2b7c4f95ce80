//! errors.rs - Custom error types for the charmask-core library.
//!
//! Every failure the substitution executor can report is one variant of
//! [`SubstitutionError`]. The replacement-length advisory is not an error and
//! never appears here.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All failures surfaced by the substitution executor.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SubstitutionError {
    /// The input data is not valid UTF-8 text.
    #[error("Input data must be a string.")]
    InvalidInputType,

    /// The pattern or the replacement is not valid UTF-8 text.
    #[error("{argument} must be {expected}.")]
    InvalidArgument {
        argument: &'static str,
        expected: &'static str,
    },

    /// The pattern failed to compile. `message` is the engine diagnostic
    /// condensed to a single line.
    #[error("Invalid regular expression '{pattern}': {message}")]
    PatternError {
        pattern: String,
        message: String,
        #[source]
        source: regex::Error,
    },
}

impl SubstitutionError {
    pub(crate) fn invalid_pattern_argument() -> Self {
        SubstitutionError::InvalidArgument {
            argument: "Characters",
            expected: "a string (regular expression)",
        }
    }

    pub(crate) fn invalid_replacement_argument() -> Self {
        SubstitutionError::InvalidArgument {
            argument: "Replacement",
            expected: "a string",
        }
    }

    /// Wraps a regex compilation failure, keeping the original error as the source.
    pub(crate) fn from_regex(pattern: &str, source: regex::Error) -> Self {
        SubstitutionError::PatternError {
            pattern: pattern.to_string(),
            message: condense_diagnostic(&source),
            source,
        }
    }
}

/// Reduces a `regex::Error` to one line.
///
/// Syntax errors from the regex crate render as a multi-line block with the
/// pattern, a caret marker and a trailing `error: ...` line. Only that last
/// line is kept.
fn condense_diagnostic(err: &regex::Error) -> String {
    match err {
        regex::Error::Syntax(text) => text
            .lines()
            .rev()
            .map(str::trim)
            .find_map(|line| line.strip_prefix("error:"))
            .map(|line| line.trim().to_string())
            .unwrap_or_else(|| {
                text.split_whitespace().collect::<Vec<_>>().join(" ")
            }),
        regex::Error::CompiledTooBig(limit) => {
            format!("compiled pattern exceeds the size limit of {} bytes", limit)
        }
        other => other.to_string().split_whitespace().collect::<Vec<_>>().join(" "),
    }
}
