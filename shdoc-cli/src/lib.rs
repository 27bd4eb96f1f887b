//! shdoc CLI library
//!
//! This library provides the command-line interface for shdoc, which turns
//! scripts with `#` comments into literate documentation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language;
pub mod output;

pub use error::{CliError, CliResult};
