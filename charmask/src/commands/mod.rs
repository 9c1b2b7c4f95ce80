//! Command implementations for the charmask CLI.

pub mod charmask;
