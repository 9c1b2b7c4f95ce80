//! compiler.rs - Turns a pattern string into a compiled `Regex`.
//!
//! Compiled patterns are never cached: each call to the executor compiles its
//! own pattern and drops it before returning.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::SubstitutionError;

/// Upper bound on the size of a compiled program.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20); // 10 MB

/// Compiles `pattern`, optionally with case-insensitive matching.
pub fn compile_pattern(pattern: &str, ignore_case: bool) -> Result<Regex, SubstitutionError> {
    debug!(
        "Compiling pattern '{}' (ignore_case: {})",
        pattern, ignore_case
    );

    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| {
            let err = SubstitutionError::from_regex(pattern, e);
            debug!(target: "charmask_core::compiler", "Pattern compilation failed: {}", err);
            err
        })
}
