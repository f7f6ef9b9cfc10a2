//! Command implementations for the motifmark CLI

pub mod draw;
