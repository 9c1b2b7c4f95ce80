// charmask/src/lib.rs
//! # charmask CLI Application
//!
//! This crate provides the command-line interface for `charmask-core`: it
//! parses arguments, configures logging, runs one substitution and maps the
//! outcome to stdout/stderr and an exit code.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::charmask::run_charmask;
