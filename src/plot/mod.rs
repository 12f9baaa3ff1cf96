//! Tauc plot rendering.
//!
//! - deterministic ASCII/Unicode chart for terminal output (`ascii`)
//! - plotters-based image export, PNG or SVG by extension (`image`)

pub mod ascii;
pub mod image;

pub use ascii::*;
pub use image::*;
