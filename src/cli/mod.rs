//! Command-line argument parsing and text rendering

pub mod args;
pub mod output;
