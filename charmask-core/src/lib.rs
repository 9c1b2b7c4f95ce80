// charmask-core/src/lib.rs
//! # charmask Core Library
//!
//! `charmask-core` holds the platform-independent logic of charmask: it takes a
//! piece of text and a regular expression describing the characters to mask,
//! and substitutes the first match, or every match, with a replacement.
//!
//! The library performs no I/O and never configures logging. It emits
//! diagnostics through the `log` facade and leaves the choice of logger and
//! level to the application.
//!
//! ## Modules
//!
//! * `executor`: argument validation and the substitution itself.
//! * `compiler`: turns a pattern string into a compiled `Regex`.
//! * `options`: the [`ReplaceOptions`] flags for a run.
//! * `errors`: the [`SubstitutionError`] taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use charmask_core::{execute, ReplaceOptions};
//!
//! let options = ReplaceOptions::default().global(true).ignore_case(true);
//! let masked = execute("John Doe", "[aeiou]", "*", options).unwrap();
//! assert_eq!(masked, "J*hn D**");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`SubstitutionError`]:
//!
//! * `InvalidInputType` when the input is not UTF-8 text.
//! * `InvalidArgument` when the pattern or the replacement is not UTF-8 text.
//! * `PatternError` when the pattern does not compile.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod compiler;
pub mod errors;
pub mod executor;
pub mod options;

pub use compiler::{compile_pattern, COMPILED_SIZE_LIMIT};
pub use errors::SubstitutionError;
pub use executor::{execute, replace_characters};
pub use options::ReplaceOptions;
