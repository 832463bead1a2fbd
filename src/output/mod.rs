//! Output module for environment and mode data
//!
//! Writes sampled sound-speed profiles and excited-mode selections to files
//! for external analysis.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait, CsvExporter
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ocean_env::output::export::{export_profile_csv, CsvConfig};
//!
//! export_profile_csv(&depth, &speed, "ssp.csv", None)?;
//! ```
//!
//! The propagation model's own file formats are not written here.

pub mod export;

pub use export::{
    export_modes_csv,
    export_profile_csv,
    export_wavenumbers_csv,
    CsvConfig,
    CsvError,
    CsvExporter,
    Exporter,
};
