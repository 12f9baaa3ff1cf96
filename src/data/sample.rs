//! Synthetic UV-Vis spectrum generation.
//!
//! Produces a sigmoid absorption edge centered on a chosen band gap, plus
//! seeded Gaussian noise. Useful for trying the estimator without instrument
//! data; deterministic for a given seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::SpectrumPoint;
use crate::error::{AppError, ErrorKind};

/// Options for synthetic spectrum generation.
#[derive(Debug, Clone, Copy)]
pub struct SampleOptions {
    pub n_points: usize,
    pub wavelength_min_nm: f64,
    pub wavelength_max_nm: f64,
    /// Center of the absorption edge in energy space.
    pub band_gap_ev: f64,
    /// Width of the sigmoid edge (eV). Smaller = sharper edge.
    pub edge_width_ev: f64,
    /// Saturated absorbance above the edge.
    pub absorbance_max: f64,
    /// Standard deviation of additive Gaussian noise.
    pub noise_sigma: f64,
    pub seed: u64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            n_points: 200,
            wavelength_min_nm: 300.0,
            wavelength_max_nm: 800.0,
            band_gap_ev: 3.2,
            edge_width_ev: 0.05,
            absorbance_max: 1.5,
            noise_sigma: 0.005,
            seed: 42,
        }
    }
}

/// Generate a synthetic spectrum, wavelengths ascending and evenly spaced.
pub fn generate_spectrum(opts: &SampleOptions) -> Result<Vec<SpectrumPoint>, AppError> {
    if opts.n_points < 2 {
        return Err(AppError::new(
            ErrorKind::Config,
            "Sample point count must be >= 2.",
        ));
    }
    if !(opts.wavelength_min_nm > 0.0
        && opts.wavelength_max_nm.is_finite()
        && opts.wavelength_max_nm > opts.wavelength_min_nm)
    {
        return Err(AppError::new(
            ErrorKind::Config,
            "Invalid wavelength range for sample generation.",
        ));
    }
    if !(opts.band_gap_ev > 0.0 && opts.edge_width_ev > 0.0 && opts.absorbance_max > 0.0) {
        return Err(AppError::new(
            ErrorKind::Config,
            "Band gap, edge width and max absorbance must all be > 0.",
        ));
    }
    if !(opts.noise_sigma >= 0.0 && opts.noise_sigma.is_finite()) {
        return Err(AppError::new(
            ErrorKind::Config,
            "Noise sigma must be finite and >= 0.",
        ));
    }

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(ErrorKind::Config, format!("Noise distribution error: {e}")))?;

    let step = (opts.wavelength_max_nm - opts.wavelength_min_nm) / (opts.n_points - 1) as f64;
    let mut points = Vec::with_capacity(opts.n_points);

    for i in 0..opts.n_points {
        let wavelength_nm = opts.wavelength_min_nm + step * i as f64;
        let energy_ev = crate::transform::photon_energy_ev(wavelength_nm);

        // Sigmoid edge: near zero below the gap, saturating above it.
        let edge = 1.0 / (1.0 + (-(energy_ev - opts.band_gap_ev) / opts.edge_width_ev).exp());
        let noise = opts.noise_sigma * normal.sample(&mut rng);
        let absorbance = (opts.absorbance_max * edge + noise).max(0.0);

        points.push(SpectrumPoint {
            wavelength_nm,
            absorbance,
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let opts = SampleOptions::default();
        let a = generate_spectrum(&opts).unwrap();
        let b = generate_spectrum(&opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn spectrum_spans_the_requested_range() {
        let opts = SampleOptions {
            n_points: 11,
            wavelength_min_nm: 400.0,
            wavelength_max_nm: 500.0,
            ..SampleOptions::default()
        };
        let points = generate_spectrum(&opts).unwrap();
        assert_eq!(points.len(), 11);
        assert!((points[0].wavelength_nm - 400.0).abs() < 1e-12);
        assert!((points[10].wavelength_nm - 500.0).abs() < 1e-12);
        assert!(points.iter().all(|p| p.absorbance >= 0.0));
    }

    #[test]
    fn absorbance_saturates_above_the_gap() {
        let opts = SampleOptions {
            noise_sigma: 0.0,
            ..SampleOptions::default()
        };
        let points = generate_spectrum(&opts).unwrap();
        // 300nm ≈ 4.13eV, well above a 3.2eV gap; 800nm ≈ 1.55eV, well below.
        assert!(points.first().unwrap().absorbance > 0.9 * opts.absorbance_max);
        assert!(points.last().unwrap().absorbance < 0.1 * opts.absorbance_max);
    }

    #[test]
    fn degenerate_options_are_rejected() {
        let err = generate_spectrum(&SampleOptions {
            n_points: 1,
            ..SampleOptions::default()
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = generate_spectrum(&SampleOptions {
            wavelength_min_nm: 500.0,
            wavelength_max_nm: 400.0,
            ..SampleOptions::default()
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
