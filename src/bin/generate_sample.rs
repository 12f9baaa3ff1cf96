//! Generate a synthetic UV-Vis spectrum file for trying the estimator.
//!
//! The output is in the estimator's input format: `#` header comments, then
//! two whitespace-separated columns (wavelength nm, absorbance).

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tauc_bandgap::data::{SampleOptions, generate_spectrum};
use tauc_bandgap::error::{AppError, ErrorKind};

#[derive(Debug, Parser)]
#[command(
    name = "tauc-sample",
    version,
    about = "Generate a synthetic UV-Vis absorbance spectrum"
)]
struct Cli {
    /// Output file path.
    #[arg(long, value_name = "FILE", default_value = "uvvis_sample.txt")]
    out: PathBuf,

    /// Number of spectrum points.
    #[arg(long, default_value_t = 200)]
    points: usize,

    /// Wavelength range start (nm).
    #[arg(long, default_value_t = 300.0)]
    wavelength_min: f64,

    /// Wavelength range end (nm).
    #[arg(long, default_value_t = 800.0)]
    wavelength_max: f64,

    /// Band gap the absorption edge is centered on (eV).
    #[arg(long, default_value_t = 3.2)]
    gap_ev: f64,

    /// Sigmoid edge width (eV).
    #[arg(long, default_value_t = 0.05)]
    edge_width: f64,

    /// Saturated absorbance above the edge.
    #[arg(long, default_value_t = 1.5)]
    absorbance_max: f64,

    /// Additive Gaussian noise sigma.
    #[arg(long, default_value_t = 0.005)]
    noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let opts = SampleOptions {
        n_points: cli.points,
        wavelength_min_nm: cli.wavelength_min,
        wavelength_max_nm: cli.wavelength_max,
        band_gap_ev: cli.gap_ev,
        edge_width_ev: cli.edge_width,
        absorbance_max: cli.absorbance_max,
        noise_sigma: cli.noise,
        seed: cli.seed,
    };
    let points = generate_spectrum(&opts)?;

    let mut file = File::create(&cli.out).map_err(|e| {
        AppError::new(
            ErrorKind::Render,
            format!("Failed to create '{}': {e}", cli.out.display()),
        )
    })?;

    let write_err = |e: std::io::Error| {
        AppError::new(
            ErrorKind::Render,
            format!("Failed to write '{}': {e}", cli.out.display()),
        )
    };

    writeln!(file, "# Synthetic UV-Vis spectrum").map_err(write_err)?;
    writeln!(
        file,
        "# gap={:.3}eV edge_width={:.3}eV noise={} seed={}",
        opts.band_gap_ev, opts.edge_width_ev, opts.noise_sigma, opts.seed
    )
    .map_err(write_err)?;
    writeln!(file, "# wavelength_nm absorbance").map_err(write_err)?;

    for p in &points {
        writeln!(file, "{:.2} {:.6}", p.wavelength_nm, p.absorbance).map_err(write_err)?;
    }

    println!(
        "Wrote {} points to {} (edge at {:.2} eV)",
        points.len(),
        cli.out.display(),
        opts.band_gap_ev
    );
    Ok(())
}
