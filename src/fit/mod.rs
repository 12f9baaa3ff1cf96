//! Absorption-edge detection and the edge-region line fit.
//!
//! Responsibilities:
//!
//! - locate the start of the linear absorption edge (`edge`)
//! - fit `ordinate = slope * energy + intercept` over the edge suffix and
//!   extract the band gap (`fitter`)

pub mod edge;
pub mod fitter;

pub use edge::*;
pub use fitter::*;
