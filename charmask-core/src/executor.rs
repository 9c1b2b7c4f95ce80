//! The substitution executor.
//!
//! [`execute`] is the type-guarded entry point: it checks that every argument
//! is text before handing off to [`replace_characters`], which compiles the
//! pattern and performs the substitution.
//!
//! Logging goes through the `log` facade only. Nothing here reads or changes
//! the logger configuration, and no log call influences the returned value.
//!
//! License: MIT OR APACHE 2.0

use std::ffi::OsStr;

use log::{debug, info, warn};
use regex::NoExpand;

use crate::compiler::compile_pattern;
use crate::errors::SubstitutionError;
use crate::options::ReplaceOptions;

/// Validates the raw arguments and substitutes matches of `pattern` in `input_data`.
///
/// Arguments arrive as OS strings so that values which are not valid UTF-8
/// are rejected here rather than earlier. The checks run in order and the
/// first failure wins:
///
/// 1. `input_data` must be text, otherwise [`SubstitutionError::InvalidInputType`].
/// 2. `pattern` must be text, otherwise [`SubstitutionError::InvalidArgument`].
/// 3. `replacement` must be text, otherwise [`SubstitutionError::InvalidArgument`].
///
/// # Example
///
/// ```rust
/// use charmask_core::{execute, ReplaceOptions};
///
/// let masked = execute("123-456-7890", r"\d", "X", ReplaceOptions::default()).unwrap();
/// assert_eq!(masked, "X23-456-7890");
/// ```
pub fn execute<I, P, R>(
    input_data: I,
    pattern: P,
    replacement: R,
    options: ReplaceOptions,
) -> Result<String, SubstitutionError>
where
    I: AsRef<OsStr>,
    P: AsRef<OsStr>,
    R: AsRef<OsStr>,
{
    let input_data = input_data
        .as_ref()
        .to_str()
        .ok_or(SubstitutionError::InvalidInputType)?;
    let pattern = pattern
        .as_ref()
        .to_str()
        .ok_or_else(SubstitutionError::invalid_pattern_argument)?;
    let replacement = replacement
        .as_ref()
        .to_str()
        .ok_or_else(SubstitutionError::invalid_replacement_argument)?;

    replace_characters(input_data, pattern, replacement, options)
}

/// Replaces the first match (or every match, with `global_replace`) of
/// `pattern` in `input_data` with `replacement`.
///
/// Matches are found left to right and never overlap. `replacement` is
/// inserted literally, so `$1` or `\` carry no special meaning, and inserted
/// text is never scanned again.
///
/// A replacement that is not exactly one character only produces a warning.
pub fn replace_characters(
    input_data: &str,
    pattern: &str,
    replacement: &str,
    options: ReplaceOptions,
) -> Result<String, SubstitutionError> {
    if replacement.chars().count() != 1 {
        warn!("Replacement should be a single character, otherwise results may vary.");
    }

    let regex = compile_pattern(pattern, options.ignore_case)?;
    let modified_data = regex
        .replacen(input_data, options.replacement_limit(), NoExpand(replacement))
        .into_owned();

    if options.secure {
        info!("Secure processing enabled. The original input data has not been printed to the logs.");
    } else {
        debug!("Original data: {}", input_data);
    }

    info!("Replaced '{}' with '{}'", pattern, replacement);
    debug!("Modified data: {}", modified_data);

    Ok(modified_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn global() -> ReplaceOptions {
        ReplaceOptions::default().global(true)
    }

    #[test]
    fn test_first_match_only_by_default() {
        let out = replace_characters("abc123", r"\d", "X", ReplaceOptions::default()).unwrap();
        assert_eq!(out, "abcX23");
    }

    #[test]
    fn test_global_replaces_every_match() {
        let out = replace_characters("abc123", r"\d", "X", global()).unwrap();
        assert_eq!(out, "abcXXX");
    }

    #[test]
    fn test_replacement_is_literal() {
        let out = replace_characters("a1b2", r"(\d)", "$1", global()).unwrap();
        assert_eq!(out, "a$1b$1");

        let out = replace_characters("a1", r"\d", r"\", ReplaceOptions::default()).unwrap();
        assert_eq!(out, r"a\");
    }

    #[test]
    fn test_inserted_text_is_not_rescanned() {
        // The inserted digits would match again if the output were re-scanned.
        let out = replace_characters("a1b", r"\d", "22", global()).unwrap();
        assert_eq!(out, "a22b");
    }

    #[test]
    fn test_multi_character_replacement_still_applies() {
        let out = replace_characters("555-0100", r"\d", "##", ReplaceOptions::default()).unwrap();
        assert_eq!(out, "##55-0100");
    }

    #[test]
    fn test_empty_replacement_deletes_matches() {
        let out = replace_characters("a1b2c3", r"\d", "", global()).unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_secure_mode_does_not_change_output() {
        let plain = replace_characters("Password123", r"\d", "0", global()).unwrap();
        let secure = replace_characters("Password123", r"\d", "0", global().secure(true)).unwrap();
        assert_eq!(plain, secure);
        assert_eq!(secure, "Password000");
    }

    #[test]
    fn test_unicode_input() {
        let out = replace_characters("naïve café", "[aeiouïé]", "*", global()).unwrap();
        assert_eq!(out, "n**v* c*f*");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = replace_characters("abc", "[", "X", ReplaceOptions::default()).unwrap_err();
        assert!(matches!(err, SubstitutionError::PatternError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_input_is_checked_before_pattern() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = OsStr::from_bytes(&[0x66, 0x6f, 0xff]);
        let err = execute(bad, bad, bad, ReplaceOptions::default()).unwrap_err();
        assert!(matches!(err, SubstitutionError::InvalidInputType));
    }

    #[cfg(unix)]
    #[test]
    fn test_pattern_is_checked_before_replacement() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = OsStr::from_bytes(&[0xfe]);
        let err = execute("abc", bad, bad, ReplaceOptions::default()).unwrap_err();
        match err {
            SubstitutionError::InvalidArgument { argument, .. } => assert_eq!(argument, "Characters"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = execute("abc", r"\d", bad, ReplaceOptions::default()).unwrap_err();
        match err {
            SubstitutionError::InvalidArgument { argument, .. } => assert_eq!(argument, "Replacement"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
