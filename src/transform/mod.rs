//! The Tauc transform: wavelength → photon energy, absorbance → ordinate.
//!
//! For a photon of wavelength λ (nm), `E = hc/λ ≈ 1240/λ` eV. The Tauc
//! ordinate is `(A·E)^n` with `n = 2` for direct transitions and `n = 1/2`
//! for indirect ones; the linear region of ordinate-vs-energy extrapolates
//! to the band gap at the x-intercept.

use crate::domain::{BandgapType, SpectrumPoint, TaucPoint, TaucSeries};

/// Planck's constant times the speed of light, in eV·nm.
///
/// Fixed by physics, not configurable.
pub const HC_EV_NM: f64 = 1240.0;

/// Photon energy (eV) of a wavelength (nm).
///
/// Precondition: `wavelength_nm > 0` (the loader enforces this).
pub fn photon_energy_ev(wavelength_nm: f64) -> f64 {
    HC_EV_NM / wavelength_nm
}

/// Transform a spectrum into a Tauc series, preserving point order and index
/// correspondence.
///
/// Total over loader-validated spectra. An indirect ordinate of a negative
/// `absorbance * energy` product is NaN; downstream stages treat non-finite
/// samples as unusable rather than panicking.
pub fn to_tauc_series(points: &[SpectrumPoint], bandgap_type: BandgapType) -> TaucSeries {
    let points = points
        .iter()
        .map(|p| {
            let energy_ev = photon_energy_ev(p.wavelength_nm);
            let base = p.absorbance * energy_ev;
            let ordinate = match bandgap_type {
                BandgapType::Direct => base * base,
                BandgapType::Indirect => base.sqrt(),
            };
            TaucPoint {
                energy_ev,
                ordinate,
            }
        })
        .collect();

    TaucSeries {
        bandgap_type,
        points,
    }
}
