//! The tools module provides the support pieces around the huffzip coding core.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Symbol frequency analysis over the whole input.
//!
pub mod cli;
pub mod freq_count;
