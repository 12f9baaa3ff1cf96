//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{BandgapType, EdgeRegion, EstimateConfig, FitResult, TaucSeries};
use crate::io::IngestedSpectrum;
use crate::transform::photon_energy_ev;

/// Format the full run summary (dataset stats + edge + fit diagnostics).
pub fn format_run_summary(
    ingest: &IngestedSpectrum,
    series: &TaucSeries,
    edge: &EdgeRegion,
    fit: &FitResult,
    config: &EstimateConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== tauc - Tauc Plot Band Gap Estimate ===\n");
    out.push_str(&format!("Input: {}\n", config.uvvis_path.display()));
    out.push_str(&format!(
        "Type: {} (exponent {})\n",
        config.bandgap_type.display_name(),
        config.bandgap_type.exponent()
    ));
    out.push_str(&format!(
        "Points: n={} | wavelength=[{:.1}, {:.1}]nm | energy=[{:.3}, {:.3}]eV\n",
        ingest.stats.n_points,
        ingest.stats.wavelength_min,
        ingest.stats.wavelength_max,
        photon_energy_ev(ingest.stats.wavelength_max),
        photon_energy_ev(ingest.stats.wavelength_min),
    ));
    out.push_str(&format!(
        "Edge: start_index={} | fitted n={} | threshold={:.1}% of max |d{}/dE|\n",
        edge.start_index,
        fit.n_points,
        100.0 * edge.threshold / edge.max_derivative,
        series.bandgap_type.ordinate_label(),
    ));
    out.push_str(&format!(
        "Fit: slope={:.6} | intercept={:.6} | RMSE={:.4} | R²={:.4}\n",
        fit.slope, fit.intercept, fit.quality.rmse, fit.quality.r_squared
    ));

    out
}

/// Format the final estimate line, rounded to two decimals.
pub fn format_estimate(fit: &FitResult, bandgap_type: BandgapType) -> String {
    format!(
        "Estimated {} band gap energy: {:.2} eV",
        bandgap_type.display_name(),
        fit.band_gap_ev
    )
}
