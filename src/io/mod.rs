//! Input helpers.
//!
//! - spectrum file ingest + validation (`ingest`)

pub mod ingest;

pub use ingest::*;
