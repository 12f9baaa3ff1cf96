//! Edge-region linear fit and band gap extraction.
//!
//! Given the edge suffix `[start_index ..]` of a Tauc series, we solve the
//! ordinary least squares problem
//!
//! ```text
//! ordinate_i = slope * energy_i + intercept
//! ```
//!
//! and extrapolate the x-intercept `-intercept / slope` as the band gap.

use nalgebra::{DMatrix, DVector};

use crate::domain::{EdgeRegion, FitQuality, FitResult, TaucSeries};
use crate::error::{AppError, ErrorKind};
use crate::math::solve_least_squares;

/// Fit a line over the edge suffix of `series` and extract the band gap.
///
/// Fails with `FitDivergence` when the solver yields no finite solution, the
/// slope is zero, or the resulting band gap is non-finite. A zero slope is
/// reported as a fault rather than an infinite gap.
pub fn fit_edge_line(series: &TaucSeries, edge: &EdgeRegion) -> Result<FitResult, AppError> {
    let points = &series.points[edge.start_index..];
    let n = points.len();
    if n < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            "Insufficient edge points for linear fitting.",
        ));
    }

    let mut design = DMatrix::zeros(n, 2);
    let mut observed = DVector::zeros(n);
    for (i, p) in points.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = p.energy_ev;
        observed[i] = p.ordinate;
    }

    let beta = solve_least_squares(&design, &observed).ok_or_else(|| {
        AppError::new(
            ErrorKind::FitDivergence,
            "Linear fit of the absorption edge did not converge.",
        )
    })?;

    let intercept = beta[0];
    let slope = beta[1];
    // A numerically-zero slope leaves the x-intercept undefined. The solver
    // never returns an exact 0.0 for a constant ordinate, so compare against
    // a tolerance scaled to the intercept.
    if slope.abs() < 1e-12 * intercept.abs().max(1.0) {
        return Err(AppError::new(
            ErrorKind::FitDivergence,
            "Degenerate fit: zero slope, band gap undefined.",
        ));
    }

    let band_gap_ev = -intercept / slope;
    if !band_gap_ev.is_finite() {
        return Err(AppError::new(
            ErrorKind::FitDivergence,
            "Fit produced a non-finite band gap estimate.",
        ));
    }

    let quality = fit_quality(points.iter().map(|p| (p.energy_ev, p.ordinate)), slope, intercept);

    Ok(FitResult {
        slope,
        intercept,
        band_gap_ev,
        quality,
        n_points: n,
    })
}

fn fit_quality(
    points: impl Iterator<Item = (f64, f64)> + Clone,
    slope: f64,
    intercept: f64,
) -> FitQuality {
    let mut n = 0usize;
    let mut sse = 0.0;
    let mut y_sum = 0.0;
    for (x, y) in points.clone() {
        let r = y - (slope * x + intercept);
        sse += r * r;
        y_sum += y;
        n += 1;
    }

    let y_mean = y_sum / n as f64;
    let sst: f64 = points.map(|(_, y)| (y - y_mean) * (y - y_mean)).sum();

    let rmse = (sse / n as f64).sqrt();
    // A zero total sum of squares means a constant ordinate; the fit is then
    // exact and R² is conventionally 1.
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };

    FitQuality {
        sse,
        rmse,
        r_squared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BandgapType, TaucPoint};
    use crate::fit::edge::{EdgeOptions, detect_edge};

    fn line_series(slope: f64, intercept: f64, energies: &[f64]) -> TaucSeries {
        TaucSeries {
            bandgap_type: BandgapType::Direct,
            points: energies
                .iter()
                .map(|&energy_ev| TaucPoint {
                    energy_ev,
                    ordinate: slope * energy_ev + intercept,
                })
                .collect(),
        }
    }

    #[test]
    fn noise_free_line_round_trips_through_edge_and_fit() {
        let energies: Vec<f64> = (0..20).map(|i| 2.0 + 0.05 * i as f64).collect();
        let series = line_series(5.0, -4.0, &energies);

        let edge = detect_edge(&series, &EdgeOptions::default()).unwrap();
        let fit = fit_edge_line(&series, &edge).unwrap();

        assert!((fit.slope - 5.0).abs() < 1e-9);
        assert!((fit.intercept + 4.0).abs() < 1e-9);
        assert!((fit.band_gap_ev - 0.8).abs() < 1e-9);
        assert!(fit.quality.sse < 1e-12);
        assert!((fit.quality.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(fit.n_points, series.len() - edge.start_index);
    }

    #[test]
    fn zero_slope_is_fit_divergence() {
        let series = line_series(0.0, 3.0, &[1.0, 2.0, 3.0, 4.0]);
        let edge = EdgeRegion {
            start_index: 0,
            max_derivative: 1.0,
            threshold: 0.01,
        };
        let err = fit_edge_line(&series, &edge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FitDivergence);
    }

    #[test]
    fn nan_ordinates_are_fit_divergence() {
        let series = TaucSeries {
            bandgap_type: BandgapType::Indirect,
            points: vec![
                TaucPoint {
                    energy_ev: 2.0,
                    ordinate: f64::NAN,
                },
                TaucPoint {
                    energy_ev: 2.5,
                    ordinate: 1.0,
                },
                TaucPoint {
                    energy_ev: 3.0,
                    ordinate: 2.0,
                },
            ],
        };
        let edge = EdgeRegion {
            start_index: 0,
            max_derivative: 1.0,
            threshold: 0.01,
        };
        let err = fit_edge_line(&series, &edge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FitDivergence);
    }
}
