//! Synthetic data generation.

pub mod sample;

pub use sample::*;
