//! The shared estimation pipeline.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load → Tauc transform → edge detection → linear fit
//!
//! The CLI then focuses on presentation (printing and plotting), and tests
//! can run the whole pipeline without spawning a process.

use crate::domain::{EstimateConfig, EdgeRegion, FitResult, TaucSeries};
use crate::error::{AppError, ErrorKind};
use crate::fit::{EdgeOptions, detect_edge, fit_edge_line};
use crate::io::{IngestedSpectrum, load_spectrum};
use crate::transform::to_tauc_series;

/// All computed outputs of a single estimation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedSpectrum,
    pub series: TaucSeries,
    pub edge: EdgeRegion,
    pub fit: FitResult,
}

/// Execute the full estimation pipeline and return the computed outputs.
pub fn run_estimate(config: &EstimateConfig) -> Result<RunOutput, AppError> {
    // 1) Load and validate the spectrum.
    let ingest = load_spectrum(&config.uvvis_path)?;

    if ingest.points.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            "Insufficient data for Tauc plot analysis (need at least 2 points).",
        ));
    }

    // 2) Transform into energy space.
    let series = to_tauc_series(&ingest.points, config.bandgap_type);

    // 3) Locate the absorption edge.
    let edge = detect_edge(
        &series,
        &EdgeOptions {
            threshold_frac: config.edge_threshold,
        },
    )?;

    // 4) Fit the edge region and extract the band gap.
    let fit = fit_edge_line(&series, &edge)?;

    Ok(RunOutput {
        ingest,
        series,
        edge,
        fit,
    })
}
