//! Spectrum file ingest and validation.
//!
//! This module turns a two-column wavelength/absorbance text table into a
//! clean `Vec<SpectrumPoint>` that is safe to transform.
//!
//! Input format:
//! - `#` starts a comment (whole-line or trailing)
//! - blank lines are skipped
//! - data lines hold exactly two whitespace-separated numeric columns:
//!   wavelength (nm) and absorbance
//! - no header row
//!
//! Design goals:
//! - **Strict rows** (clear errors with 1-based line numbers)
//! - **Deterministic behavior** (points kept in file order)
//! - **Separation of concerns**: no energy conversion or fitting logic here

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use crate::domain::SpectrumPoint;
use crate::error::{AppError, ErrorKind};

/// Summary stats about the points actually loaded.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumStats {
    pub n_points: usize,
    pub wavelength_min: f64,
    pub wavelength_max: f64,
    pub absorbance_min: f64,
    pub absorbance_max: f64,
}

/// Ingest output: validated points + stats.
#[derive(Debug, Clone)]
pub struct IngestedSpectrum {
    pub points: Vec<SpectrumPoint>,
    pub stats: SpectrumStats,
    /// Total lines read, including comments and blanks.
    pub rows_read: usize,
}

/// Load and validate a spectrum file.
pub fn load_spectrum(path: &Path) -> Result<IngestedSpectrum, AppError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == IoErrorKind::NotFound {
            AppError::new(
                ErrorKind::NotFound,
                format!("File not found at {}", path.display()),
            )
        } else {
            AppError::new(
                ErrorKind::Parse,
                format!("Failed to read '{}': {e}", path.display()),
            )
        }
    })?;

    let mut points = Vec::new();
    let mut rows_read = 0usize;

    for (idx, raw_line) in contents.lines().enumerate() {
        let line = idx + 1;
        rows_read += 1;

        // Everything after `#` is a comment, including trailing comments on
        // data lines.
        let data = raw_line.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        points.push(parse_row(data, line)?);
    }

    if points.is_empty() {
        return Err(AppError::new(
            ErrorKind::EmptyData,
            format!(
                "Empty data file at {} (no parsable rows).",
                path.display()
            ),
        ));
    }

    let stats = compute_stats(&points);

    Ok(IngestedSpectrum {
        points,
        stats,
        rows_read,
    })
}

fn parse_row(data: &str, line: usize) -> Result<SpectrumPoint, AppError> {
    let columns: Vec<&str> = data.split_whitespace().collect();
    if columns.len() != 2 {
        return Err(AppError::new(
            ErrorKind::Parse,
            format!(
                "line {line}: expected 2 columns (wavelength absorbance), found {}",
                columns.len()
            ),
        ));
    }

    let wavelength_nm = parse_f64(columns[0], line, "wavelength")?;
    let absorbance = parse_f64(columns[1], line, "absorbance")?;

    // Zero or negative wavelengths would make the energy conversion divide by
    // zero or flip sign, so reject them here rather than downstream.
    if wavelength_nm <= 0.0 {
        return Err(AppError::new(
            ErrorKind::Parse,
            format!("line {line}: non-positive wavelength {wavelength_nm} nm"),
        ));
    }

    Ok(SpectrumPoint {
        wavelength_nm,
        absorbance,
    })
}

fn parse_f64(s: &str, line: usize, column: &str) -> Result<f64, AppError> {
    let v: f64 = s.parse().map_err(|_| {
        AppError::new(
            ErrorKind::Parse,
            format!("line {line}: invalid {column} value '{s}'"),
        )
    })?;
    if !v.is_finite() {
        return Err(AppError::new(
            ErrorKind::Parse,
            format!("line {line}: non-finite {column} value '{s}'"),
        ));
    }
    Ok(v)
}

fn compute_stats(points: &[SpectrumPoint]) -> SpectrumStats {
    let mut wavelength_min = f64::INFINITY;
    let mut wavelength_max = f64::NEG_INFINITY;
    let mut absorbance_min = f64::INFINITY;
    let mut absorbance_max = f64::NEG_INFINITY;

    for p in points {
        wavelength_min = wavelength_min.min(p.wavelength_nm);
        wavelength_max = wavelength_max.max(p.wavelength_nm);
        absorbance_min = absorbance_min.min(p.absorbance);
        absorbance_max = absorbance_max.max(p.absorbance);
    }

    SpectrumStats {
        n_points: points.len(),
        wavelength_min,
        wavelength_max,
        absorbance_min,
        absorbance_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_data_rows_and_skips_comments() {
        let file = write_fixture(
            "# UV-Vis spectrum\n\
             400 0.1\n\
             \n\
             450\t0.3  # trailing comment\n\
             500 0.8\n",
        );
        let ingested = load_spectrum(file.path()).unwrap();
        assert_eq!(ingested.points.len(), 3);
        assert_eq!(ingested.rows_read, 5);
        assert_eq!(ingested.points[1].wavelength_nm, 450.0);
        assert_eq!(ingested.points[1].absorbance, 0.3);
        assert_eq!(ingested.stats.wavelength_min, 400.0);
        assert_eq!(ingested.stats.wavelength_max, 500.0);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_spectrum(Path::new("/no/such/spectrum.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn comments_only_file_is_empty_data() {
        let file = write_fixture("# just a header\n# and another comment\n");
        let err = load_spectrum(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyData);
    }

    #[test]
    fn malformed_rows_report_line_numbers() {
        let file = write_fixture("400 0.1\n450 abc\n");
        let err = load_spectrum(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("line 2"));

        let file = write_fixture("400 0.1 7\n");
        let err = load_spectrum(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn non_positive_wavelengths_are_rejected() {
        let file = write_fixture("0 0.5\n");
        let err = load_spectrum(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
