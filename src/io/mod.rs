//! Report file input

pub mod report;
