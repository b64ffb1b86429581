//! File output for optimization run records.

pub mod export;
