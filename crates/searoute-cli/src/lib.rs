//! searoute CLI library.
//!
//! This crate provides the output formatting shared by the `searoute`
//! subcommands.

pub mod output;
