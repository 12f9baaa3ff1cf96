//! Absorption-edge detection.
//!
//! The absorption edge is the region where the Tauc ordinate rises steeply
//! with energy. We locate its start by thresholding the discrete derivative
//! of the ordinate with respect to energy:
//!
//! - compute `d_i = d(ordinate)/d(energy)` at every sample with a finite
//!   difference scheme consistent with the non-uniform energy spacing
//!   (energy = 1240/λ, so equally spaced wavelengths are not equally spaced
//!   energies)
//! - let `max_deriv = max_i |d_i|` over finite derivatives
//! - the edge starts at the first index (in series order) with
//!   `|d_i| > threshold_frac * max_deriv`
//!
//! The default 1%-of-max threshold is a heuristic, not a statistically
//! derived cutoff, so it is injectable via `EdgeOptions`. The magnitude
//! `|d_i|` is used rather than the signed value: edge strength is a
//! magnitude, and the derivative's sign along the array only encodes whether
//! the file listed wavelengths ascending or descending.

use crate::domain::{EdgeRegion, TaucSeries};
use crate::error::{AppError, ErrorKind};

/// Edge detection options.
#[derive(Debug, Clone, Copy)]
pub struct EdgeOptions {
    /// Threshold as a fraction of the maximum |derivative|, in (0, 1).
    pub threshold_frac: f64,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            threshold_frac: 0.01,
        }
    }
}

/// Locate the start of the absorption edge.
///
/// Fails with `NoAbsorptionEdge` when no sample exceeds the threshold or the
/// detected start leaves fewer than 3 trailing points to fit.
pub fn detect_edge(series: &TaucSeries, opts: &EdgeOptions) -> Result<EdgeRegion, AppError> {
    let n = series.len();
    if n < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            "Insufficient data for Tauc plot analysis (need at least 2 points).",
        ));
    }

    let energies: Vec<f64> = series.energies().collect();
    let ordinates: Vec<f64> = series.ordinates().collect();
    let derivative = gradient(&energies, &ordinates);

    let max_deriv = derivative
        .iter()
        .map(|d| d.abs())
        .filter(|d| d.is_finite())
        .fold(0.0, f64::max);

    if max_deriv <= 0.0 {
        return Err(AppError::new(
            ErrorKind::NoAbsorptionEdge,
            "Could not identify a clear absorption edge for linear fitting (flat series).",
        ));
    }

    let threshold = opts.threshold_frac * max_deriv;
    let start_index = derivative
        .iter()
        .position(|d| d.abs() > threshold)
        .ok_or_else(|| {
            AppError::new(
                ErrorKind::NoAbsorptionEdge,
                "Could not identify a clear absorption edge for linear fitting.",
            )
        })?;

    // The fit needs a non-degenerate suffix: at least 3 points past the start.
    if start_index >= n - 2 {
        return Err(AppError::new(
            ErrorKind::NoAbsorptionEdge,
            format!(
                "Absorption edge starts too late for linear fitting \
                 (start index {start_index} of {n} points)."
            ),
        ));
    }

    Ok(EdgeRegion {
        start_index,
        max_derivative: max_deriv,
        threshold,
    })
}

/// Discrete derivative `dy/dx` on a (possibly non-uniform) grid.
///
/// Interior points use the second-order three-point formula for unequal
/// spacing; the two boundary points use first-order one-sided differences.
/// Requires `x.len() == y.len() >= 2`.
fn gradient(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    debug_assert_eq!(n, y.len());
    debug_assert!(n >= 2);

    let mut out = Vec::with_capacity(n);
    out.push((y[1] - y[0]) / (x[1] - x[0]));

    for i in 1..n - 1 {
        let h_prev = x[i] - x[i - 1];
        let h_next = x[i + 1] - x[i];
        let num = h_prev * h_prev * y[i + 1] + (h_next * h_next - h_prev * h_prev) * y[i]
            - h_next * h_next * y[i - 1];
        let den = h_prev * h_next * (h_prev + h_next);
        out.push(num / den);
    }

    out.push((y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BandgapType, TaucPoint};

    fn series_from(pairs: &[(f64, f64)]) -> TaucSeries {
        TaucSeries {
            bandgap_type: BandgapType::Direct,
            points: pairs
                .iter()
                .map(|&(energy_ev, ordinate)| TaucPoint {
                    energy_ev,
                    ordinate,
                })
                .collect(),
        }
    }

    #[test]
    fn gradient_is_exact_for_lines_on_non_uniform_grids() {
        let x = [1.0, 1.3, 2.1, 2.2, 4.0];
        let y: Vec<f64> = x.iter().map(|&v| 3.0 * v - 1.0).collect();
        for d in gradient(&x, &y) {
            assert!((d - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn gradient_interior_is_exact_for_quadratics() {
        let x = [0.0, 0.5, 1.2, 2.0, 3.5];
        let y: Vec<f64> = x.iter().map(|&v| v * v).collect();
        let d = gradient(&x, &y);
        for i in 1..x.len() - 1 {
            assert!((d[i] - 2.0 * x[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn detects_edge_at_first_sample_above_threshold() {
        // Flat tail, then a steep rise: |d| crosses 1% of max at the rise.
        let series = series_from(&[
            (1.0, 0.0),
            (1.5, 0.0),
            (2.0, 0.001),
            (2.5, 2.0),
            (3.0, 6.0),
            (3.5, 10.0),
        ]);
        let edge = detect_edge(&series, &EdgeOptions::default()).unwrap();
        assert!(edge.start_index >= 1 && edge.start_index < 4);
        assert!(edge.max_derivative > 0.0);
        assert!((edge.threshold - 0.01 * edge.max_derivative).abs() < 1e-12);
    }

    #[test]
    fn flat_series_has_no_edge() {
        let series = series_from(&[(1.0, 2.0), (2.0, 2.0), (3.0, 2.0), (4.0, 2.0)]);
        let err = detect_edge(&series, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoAbsorptionEdge);
    }

    #[test]
    fn edge_too_close_to_end_is_rejected() {
        // All the movement sits on the last interval, so the first index over
        // threshold leaves fewer than 3 points to fit.
        let series = series_from(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (4.0, 10.0),
        ]);
        let err = detect_edge(&series, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoAbsorptionEdge);
    }

    #[test]
    fn single_point_is_insufficient_data() {
        let series = series_from(&[(1.0, 2.0)]);
        let err = detect_edge(&series, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
