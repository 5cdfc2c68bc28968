//! Work log CLI library.
//!
//! This crate provides the command-line interface over `wl-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, InputArgs};
pub use config::Config;
