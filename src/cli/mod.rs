//! Command-line interface module.

mod args;
pub mod check;
mod common;
pub mod resolve;

pub use args::{Cli, Commands};
