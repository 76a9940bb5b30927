//! CLI module for the matterfmt command-line interface
//!
//! Argument parsing, logger setup and the batch entry point that bridges
//! CLI options to library operations.

pub mod args;
pub mod commands;
pub mod logging;
