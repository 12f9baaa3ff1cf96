//! `tauc-bandgap` library crate.
//!
//! The binary (`tauc`) is a thin wrapper around this library so that:
//!
//! - the load → transform → edge-detect → fit pipeline is testable without
//!   spawning processes
//! - modules are reusable (e.g., batch drivers, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod transform;
