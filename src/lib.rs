//! Batch number tools: descriptive statistics and base conversion over
//! one-value-per-line text files.

pub mod app;
pub mod cli;
pub mod data;
pub mod error;
pub mod processing;
pub mod report;
