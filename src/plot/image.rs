//! Plotters-based image export of the Tauc plot.
//!
//! The drawing area lives only for the duration of one `save_plot` call, so
//! there is no shared rendering state between runs. The backend is chosen by
//! file extension: `.svg` renders vector output, anything else goes through
//! the bitmap backend (PNG).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{EdgeRegion, FitResult, TaucSeries};
use crate::error::{AppError, ErrorKind};

const PLOT_SIZE: (u32, u32) = (1024, 768);

/// Render the Tauc plot and save it to `path`.
pub fn save_plot(
    path: &Path,
    series: &TaucSeries,
    edge: &EdgeRegion,
    fit: &FitResult,
) -> Result<(), AppError> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let result = if is_svg {
        let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
        render_chart(&root, series, edge, fit)
    } else {
        let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
        render_chart(&root, series, edge, fit)
    };

    result.map_err(|e| {
        AppError::new(
            ErrorKind::Render,
            format!("Failed to render plot '{}': {e}", path.display()),
        )
    })
}

fn render_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &TaucSeries,
    edge: &EdgeRegion,
    fit: &FitResult,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (e_min, e_max) = padded_range(series.energies().collect::<Vec<_>>())
        .ok_or("no finite energies to plot")?;
    let (fit_e_min, fit_e_max) = padded_range(
        series.points[edge.start_index..]
            .iter()
            .map(|p| p.energy_ev)
            .collect::<Vec<_>>(),
    )
    .ok_or("empty edge region")?;

    // Y range covers the data and the fitted line so the extrapolation to the
    // x-axis stays inside the frame.
    let mut y_values: Vec<f64> = series.ordinates().collect();
    y_values.push(fit.slope * fit_e_min + fit.intercept);
    y_values.push(fit.slope * fit_e_max + fit.intercept);
    let (y_min, y_max) = padded_range(y_values).ok_or("no finite ordinates to plot")?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!(
                "Tauc Plot ({} Band Gap)",
                series.bandgap_type.display_name()
            ),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(e_min..e_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Energy (eV)")
        .y_desc(series.bandgap_type.ordinate_label())
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart
        .draw_series(
            series
                .points
                .iter()
                .filter(|p| p.energy_ev.is_finite() && p.ordinate.is_finite())
                .map(|p| Circle::new((p.energy_ev, p.ordinate), 3, BLUE.filled())),
        )?
        .label("Data")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    let line = [
        (fit_e_min, fit.slope * fit_e_min + fit.intercept),
        (fit_e_max, fit.slope * fit_e_max + fit.intercept),
    ];
    chart
        .draw_series(LineSeries::new(line, RED.stroke_width(2)))?
        .label(format!("Linear fit (Eg ≈ {:.2} eV)", fit.band_gap_ev))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn padded_range(values: Vec<f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !(lo.is_finite() && hi.is_finite()) {
        return None;
    }
    // Degenerate (single-value) ranges still need a drawable span.
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    Some((lo - pad, hi + pad))
}
