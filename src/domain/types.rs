//! Shared domain types.
//!
//! These types are intentionally lightweight value types so they can be:
//!
//! - created once per run and passed by reference through the pipeline
//! - printed in reports and drawn in plots without conversion
//! - constructed directly in tests

use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{AppError, ErrorKind};

/// Band gap estimation method.
///
/// Only the Tauc plot method is implemented; the enum exists so the CLI
/// surface stays stable if other extraction methods are ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Tauc,
}

/// Electronic transition type, which selects the Tauc exponent.
///
/// - direct: ordinate is `(A·hν)²`
/// - indirect: ordinate is `(A·hν)^(1/2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BandgapType {
    Direct,
    Indirect,
}

impl BandgapType {
    /// Tauc exponent for this transition type.
    pub fn exponent(self) -> f64 {
        match self {
            BandgapType::Direct => 2.0,
            BandgapType::Indirect => 0.5,
        }
    }

    /// Capitalized name for report lines and plot titles.
    pub fn display_name(self) -> &'static str {
        match self {
            BandgapType::Direct => "Direct",
            BandgapType::Indirect => "Indirect",
        }
    }

    /// Y-axis label of the Tauc plot for this transition type.
    pub fn ordinate_label(self) -> &'static str {
        match self {
            BandgapType::Direct => "(αhν)²",
            BandgapType::Indirect => "(αhν)^(1/2)",
        }
    }
}

impl FromStr for BandgapType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(BandgapType::Direct),
            "indirect" => Ok(BandgapType::Indirect),
            other => Err(AppError::new(
                ErrorKind::InvalidBandgapType,
                format!("Invalid bandgap type '{other}'. Choose 'direct' or 'indirect'."),
            )),
        }
    }
}

/// One sample of the input spectrum.
///
/// The loader guarantees `wavelength_nm > 0` and both fields finite, so the
/// energy conversion downstream is total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    pub wavelength_nm: f64,
    pub absorbance: f64,
}

/// One sample of the Tauc-transformed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaucPoint {
    pub energy_ev: f64,
    pub ordinate: f64,
}

/// Tauc-transformed spectrum, index-aligned with the spectrum it came from.
#[derive(Debug, Clone)]
pub struct TaucSeries {
    pub bandgap_type: BandgapType,
    pub points: Vec<TaucPoint>,
}

impl TaucSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.energy_ev)
    }

    pub fn ordinates(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.ordinate)
    }
}

/// The contiguous suffix of a `TaucSeries` used as regression input, plus the
/// detection diagnostics that produced it.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRegion {
    /// First index of the fitted suffix (suffix runs to the end of the series).
    pub start_index: usize,
    /// Maximum |d(ordinate)/d(energy)| over the series.
    pub max_derivative: f64,
    /// Absolute derivative threshold actually applied.
    pub threshold: f64,
}

/// Goodness-of-fit diagnostics for the edge-region line.
#[derive(Debug, Clone, Copy)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub r_squared: f64,
}

/// Result of the edge-region linear fit.
#[derive(Debug, Clone, Copy)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    /// X-intercept of the fitted line: `-intercept / slope`.
    pub band_gap_ev: f64,
    pub quality: FitQuality,
    /// Number of points in the fitted suffix.
    pub n_points: usize,
}

/// Resolved configuration for one estimation run.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub uvvis_path: PathBuf,
    pub method: Method,
    pub bandgap_type: BandgapType,
    /// Edge detection threshold as a fraction of the max |derivative|.
    pub edge_threshold: f64,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bandgap_type_parses_known_values() {
        assert_eq!("direct".parse::<BandgapType>().unwrap(), BandgapType::Direct);
        assert_eq!(
            " Indirect ".parse::<BandgapType>().unwrap(),
            BandgapType::Indirect
        );
    }

    #[test]
    fn bandgap_type_rejects_unknown_values() {
        let err = "foo".parse::<BandgapType>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBandgapType);
        assert!(err.to_string().contains("'foo'"));
    }

    #[test]
    fn exponents_match_transition_type() {
        assert_eq!(BandgapType::Direct.exponent(), 2.0);
        assert_eq!(BandgapType::Indirect.exponent(), 0.5);
    }
}
