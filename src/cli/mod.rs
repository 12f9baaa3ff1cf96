//! Command-line parsing for the Tauc plot band gap estimator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! transform/fitting code.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{BandgapType, Method};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "tauc",
    version,
    about = "Estimate band gap energy from UV-Vis spectroscopy data using the Tauc plot method"
)]
pub struct Cli {
    /// Path to the UV-Vis data file (wavelength vs. absorbance).
    #[arg(long, value_name = "FILE")]
    pub uvvis: PathBuf,

    /// Method to use for band gap estimation (currently only 'tauc').
    #[arg(long, value_enum, default_value_t = Method::Tauc)]
    pub method: Method,

    /// Type of band gap ('direct' or 'indirect').
    #[arg(long = "type", value_enum, default_value_t = BandgapType::Direct)]
    pub bandgap_type: BandgapType,

    /// Render the Tauc plot in the terminal.
    #[arg(long)]
    pub plot: bool,

    /// Save the Tauc plot to an image file (PNG, or SVG by extension).
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Edge detection threshold as a fraction of the maximum derivative.
    #[arg(long, default_value_t = 0.01)]
    pub edge_threshold: f64,

    /// Terminal plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Terminal plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
