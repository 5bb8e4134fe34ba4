//! Core services for extraction, classification, filtering and aggregation

pub mod aggregate;
pub mod classify;
pub mod extract;
pub mod filter;
