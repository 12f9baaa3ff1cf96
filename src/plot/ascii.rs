//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - Tauc series samples: `o`
//! - fitted edge line: `-`

use crate::domain::{EdgeRegion, FitResult, TaucSeries};

/// Render the Tauc series with the fitted line overlaid across the edge
/// region. Non-finite samples are skipped.
pub fn render_ascii_plot(
    series: &TaucSeries,
    edge: &EdgeRegion,
    fit: &FitResult,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (e_min, e_max) = energy_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = ordinate_range(series, edge, fit).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the fitted line first so data points can overlay it.
    let edge_energies: Vec<f64> = series.points[edge.start_index..]
        .iter()
        .map(|p| p.energy_ev)
        .collect();
    if let Some((fit_e_min, fit_e_max)) = min_max(&edge_energies) {
        for col in 0..width {
            let frac = col as f64 / (width - 1) as f64;
            let e = fit_e_min + frac * (fit_e_max - fit_e_min);
            let y = fit.slope * e + fit.intercept;
            if y < y_min || y > y_max {
                continue;
            }
            let x = map_x(e, e_min, e_max, width);
            let row = map_y(y, y_min, y_max, height);
            grid[row][x] = '-';
        }
    }

    for p in &series.points {
        if !p.energy_ev.is_finite() || !p.ordinate.is_finite() {
            continue;
        }
        if p.ordinate < y_min || p.ordinate > y_max {
            continue;
        }
        let x = map_x(p.energy_ev, e_min, e_max, width);
        let row = map_y(p.ordinate, y_min, y_max, height);
        grid[row][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Tauc plot: energy=[{e_min:.3}, {e_max:.3}]eV | {}=[{y_min:.3}, {y_max:.3}] | Eg ≈ {:.2} eV\n",
        series.bandgap_type.ordinate_label(),
        fit.band_gap_ev,
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn energy_range(series: &TaucSeries) -> Option<(f64, f64)> {
    let energies: Vec<f64> = series.energies().collect();
    min_max(&energies)
}

fn ordinate_range(series: &TaucSeries, edge: &EdgeRegion, fit: &FitResult) -> Option<(f64, f64)> {
    let mut values: Vec<f64> = series.ordinates().filter(|y| y.is_finite()).collect();

    // Include the fitted line's endpoints so the extrapolation stays visible.
    let edge_energies: Vec<f64> = series.points[edge.start_index..]
        .iter()
        .map(|p| p.energy_ev)
        .collect();
    if let Some((lo, hi)) = min_max(&edge_energies) {
        values.push(fit.slope * lo + fit.intercept);
        values.push(fit.slope * hi + fit.intercept);
    }

    min_max(&values)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() && hi > lo {
        Some((lo, hi))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let pad = (max - min) * frac;
    (min - pad, max + pad)
}

fn map_x(v: f64, min: f64, max: f64, width: usize) -> usize {
    let frac = (v - min) / (max - min);
    ((frac * (width - 1) as f64).round() as usize).min(width - 1)
}

fn map_y(v: f64, min: f64, max: f64, height: usize) -> usize {
    let frac = (v - min) / (max - min);
    let row = (frac * (height - 1) as f64).round() as usize;
    (height - 1).saturating_sub(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BandgapType, FitQuality, TaucPoint};

    fn fixture() -> (TaucSeries, EdgeRegion, FitResult) {
        let series = TaucSeries {
            bandgap_type: BandgapType::Direct,
            points: (0..10)
                .map(|i| {
                    let energy_ev = 2.0 + 0.1 * i as f64;
                    TaucPoint {
                        energy_ev,
                        ordinate: 4.0 * energy_ev - 9.0,
                    }
                })
                .collect(),
        };
        let edge = EdgeRegion {
            start_index: 0,
            max_derivative: 4.0,
            threshold: 0.04,
        };
        let fit = FitResult {
            slope: 4.0,
            intercept: -9.0,
            band_gap_ev: 2.25,
            quality: FitQuality {
                sse: 0.0,
                rmse: 0.0,
                r_squared: 1.0,
            },
            n_points: 10,
        };
        (series, edge, fit)
    }

    #[test]
    fn render_is_deterministic_and_sized() {
        let (series, edge, fit) = fixture();
        let a = render_ascii_plot(&series, &edge, &fit, 60, 15);
        let b = render_ascii_plot(&series, &edge, &fit, 60, 15);
        assert_eq!(a, b);
        // Header plus one line per grid row.
        assert_eq!(a.lines().count(), 16);
        assert!(a.lines().skip(1).all(|l| l.chars().count() == 60));
    }

    #[test]
    fn header_carries_the_estimate() {
        let (series, edge, fit) = fixture();
        let out = render_ascii_plot(&series, &edge, &fit, 40, 10);
        assert!(out.starts_with("Tauc plot:"));
        assert!(out.contains("Eg ≈ 2.25 eV"));
        assert!(out.contains('o'));
    }
}
