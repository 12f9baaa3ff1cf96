//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the estimation pipeline
//! - prints the summary, estimate, and optional plots

use clap::Parser;

use crate::cli::Cli;
use crate::domain::EstimateConfig;
use crate::error::{AppError, ErrorKind};

pub mod pipeline;

/// Entry point for the `tauc` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = estimate_config_from_args(&cli)?;

    let run = pipeline::run_estimate(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.ingest, &run.series, &run.edge, &run.fit, &config)
    );
    println!(
        "{}",
        crate::report::format_estimate(&run.fit, config.bandgap_type)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.series,
            &run.edge,
            &run.fit,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.output {
        crate::plot::save_plot(path, &run.series, &run.edge, &run.fit)?;
        println!("Tauc plot saved to {}", path.display());
    }

    Ok(())
}

/// Build the run configuration, validating option values.
pub fn estimate_config_from_args(cli: &Cli) -> Result<EstimateConfig, AppError> {
    if !(cli.edge_threshold.is_finite() && cli.edge_threshold > 0.0 && cli.edge_threshold < 1.0) {
        return Err(AppError::new(
            ErrorKind::Config,
            format!(
                "--edge-threshold must lie in (0, 1), got {}",
                cli.edge_threshold
            ),
        ));
    }

    Ok(EstimateConfig {
        uvvis_path: cli.uvvis.clone(),
        method: cli.method,
        bandgap_type: cli.bandgap_type,
        edge_threshold: cli.edge_threshold,
        plot: cli.plot,
        plot_width: cli.width,
        plot_height: cli.height,
        output: cli.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_threshold_is_a_config_error() {
        let cli = Cli::try_parse_from([
            "tauc",
            "--uvvis",
            "s.txt",
            "--edge-threshold",
            "1.5",
        ])
        .unwrap();
        let err = estimate_config_from_args(&cli).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn valid_args_build_a_config() {
        let cli = Cli::try_parse_from(["tauc", "--uvvis", "s.txt", "--plot"]).unwrap();
        let config = estimate_config_from_args(&cli).unwrap();
        assert!(config.plot);
        assert_eq!(config.edge_threshold, 0.01);
    }
}
