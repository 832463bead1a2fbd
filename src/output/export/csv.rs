//! CSV export for sampled profiles and excited modes
//!
//! Writes plain CSV that loads directly into pandas, MATLAB or a spreadsheet.
//!
//! # Features
//!
//! - **Simple interface**: profiles are exported from `&[f64]` slices
//! - **Metadata support**: optional `#` comment header with run parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Complex columns**: eigenfunctions are written as real/imaginary pairs
//! - **Validation**: empty data, mismatched lengths, NaN/Inf, separator clashes
//!
//! # Quick Examples
//!
//! ## Sound-speed profile
//!
//! ```rust,ignore
//! use ocean_env::output::export::export_profile_csv;
//!
//! let depth = vec![0.0, 50.0, 100.0];
//! let speed = vec![1500.0, 1490.0, 1495.0];
//!
//! export_profile_csv(&depth, &speed, "ssp.csv", None)?;
//! ```
//!
//! **Output** (`ssp.csv`):
//! ```csv
//! Depth (m),Sound speed (m/s)
//! 0.000000,1500.000000
//! 50.000000,1490.000000
//! 100.000000,1495.000000
//! ```
//!
//! ## Excited modes
//!
//! ```rust,ignore
//! use ocean_env::output::export::export_modes_csv;
//!
//! let excited = modes.select_excited(30.0, 0.2)?.clone();
//! export_modes_csv(modes.z().as_slice(), &excited, "modes.csv", None)?;
//! ```
//!
//! **Output** (`modes.csv`):
//! ```csv
//! Depth (m),mode_0 (re),mode_0 (im),mode_3 (re),mode_3 (im)
//! 0.000000,0.000000,0.000000,0.000000,0.000000
//! ...
//! ```

use crate::error::EnvError;
use crate::modes::ExcitedModes;
use std::fs::File;
use std::io::Write;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// CSV export failure
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("empty data: {0} must not be empty")]
    EmptyData(&'static str),

    #[error("length mismatch: {what} has {actual} values, expected {expected}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: NaN or Inf detected in {0}")]
    NonFinite(String),

    #[error("no excited-mode selection to export")]
    NoSelection,

    #[error(transparent)]
    Environment(#[from] EnvError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the depth column (default: "Depth (m)")
    pub depth_header: String,

    /// Header of the profile value column (default: "Sound speed (m/s)")
    pub value_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            depth_header: "Depth (m)".to_string(),
            value_header: "Sound speed (m/s)".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set value column header
    pub fn value_header(mut self, header: impl Into<String>) -> Self {
        self.value_header = header.into();
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Reject configurations whose output could not be split back into columns
    pub fn validate(&self) -> Result<(), CsvError> {
        if self.decimal_separator == self.delimiter {
            return Err(EnvError::invalid_config(
                "decimal_separator",
                format!("must differ from the delimiter '{}'", self.delimiter),
            )
            .into());
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Environment title
    pub title: Option<String>,

    /// Exported quantity (e.g. "alpha_r")
    pub parameter: Option<String>,

    /// Number of media
    pub n_media: Option<usize>,

    /// Frequency (Hz)
    pub frequency: Option<f64>,

    /// Source depth of a mode selection (m)
    pub source_depth: Option<f64>,

    /// Threshold of a mode selection
    pub threshold: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing a mode selection
    pub fn from_selection(excited: &ExcitedModes) -> Self {
        Self {
            source_depth: Some(excited.source_depth),
            threshold: Some(excited.threshold),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(file, "# Ocean Acoustic Environment Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(title) = &metadata.title {
        writeln!(file, "# Title: {}", title)?;
    }
    if let Some(parameter) = &metadata.parameter {
        writeln!(file, "# Parameter: {}", parameter)?;
    }
    if let Some(n_media) = metadata.n_media {
        writeln!(file, "# Media: {}", n_media)?;
    }
    if let Some(frequency) = metadata.frequency {
        writeln!(file, "# Frequency: {} Hz", frequency)?;
    }
    if let Some(depth) = metadata.source_depth {
        writeln!(file, "# Source Depth: {} m", depth)?;
    }
    if let Some(threshold) = metadata.threshold {
        writeln!(file, "# Threshold: {}", threshold)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Create the output file and write the optional metadata block
fn open_with_header(output_path: &str, configuration: &CsvConfig) -> Result<File, CsvError> {
    configuration.validate()?;

    let mut file = File::create(output_path)?;

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    Ok(file)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a depth profile to CSV
///
/// Two columns: depth and value.
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_profile_csv(
    depths: &[f64],
    values: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {

    // ============================= Validation =============================

    if depths.is_empty() || values.is_empty() {
        return Err(CsvError::EmptyData("depth and value series"));
    }

    if depths.len() != values.len() {
        return Err(CsvError::LengthMismatch {
            what: "value series".to_string(),
            expected: depths.len(),
            actual: values.len(),
        });
    }

    if depths.iter().any(|z| !z.is_finite()) {
        return Err(CsvError::NonFinite("depth series".to_string()));
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err(CsvError::NonFinite("value series".to_string()));
    }

    // ============================= Write ==================================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_with_header(output_path, configuration)?;

    writeln!(
        file,
        "{}{}{}",
        configuration.depth_header,
        configuration.delimiter,
        configuration.value_header
    )?;

    for (depth, value) in depths.iter().zip(values.iter()) {
        writeln!(
            file,
            "{}{}{}",
            format_number(*depth, configuration),
            configuration.delimiter,
            format_number(*value, configuration)
        )?;
    }

    Ok(())
}

/// Export excited eigenfunctions to CSV
///
/// First column is depth, then one real/imaginary column pair per selected
/// mode, labelled with the original mode index.
///
/// # Errors
///
/// - Empty depth grid
/// - Grid length differs from the eigenfunction rows
/// - NaN or Inf values
/// - File creation errors
pub fn export_modes_csv(
    z: &[f64],
    excited: &ExcitedModes,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {

    // ============================= Validation =============================

    if z.is_empty() {
        return Err(CsvError::EmptyData("depth grid"));
    }

    if excited.phi.nrows() != z.len() {
        return Err(CsvError::LengthMismatch {
            what: "eigenfunction rows".to_string(),
            expected: z.len(),
            actual: excited.phi.nrows(),
        });
    }

    if z.iter().any(|v| !v.is_finite()) {
        return Err(CsvError::NonFinite("depth grid".to_string()));
    }

    for (column, index) in excited.indices.iter().enumerate() {
        if excited.phi.column(column).iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
            return Err(CsvError::NonFinite(format!("mode {}", index)));
        }
    }

    // ============================= Write ==================================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_with_header(output_path, configuration)?;

    write!(file, "{}", configuration.depth_header)?;
    for index in &excited.indices {
        write!(
            file,
            "{}mode_{} (re){}mode_{} (im)",
            configuration.delimiter, index, configuration.delimiter, index
        )?;
    }
    writeln!(file)?;

    for (row, depth) in z.iter().enumerate() {
        write!(file, "{}", format_number(*depth, configuration))?;

        for column in 0..excited.len() {
            let value = excited.phi[(row, column)];
            write!(
                file,
                "{}{}{}{}",
                configuration.delimiter,
                format_number(value.re, configuration),
                configuration.delimiter,
                format_number(value.im, configuration)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Export the wavenumbers of a selection to CSV
///
/// Columns: original mode index, real part, imaginary part.
pub fn export_wavenumbers_csv(
    excited: &ExcitedModes,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if excited.k.iter().any(|k| !k.re.is_finite() || !k.im.is_finite()) {
        return Err(CsvError::NonFinite("wavenumbers".to_string()));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_with_header(output_path, configuration)?;

    writeln!(
        file,
        "Mode{}k (re){}k (im)",
        configuration.delimiter, configuration.delimiter
    )?;

    for (index, k) in excited.indices.iter().zip(excited.k.iter()) {
        writeln!(
            file,
            "{}{}{}{}{}",
            index,
            configuration.delimiter,
            format_number(k.re, configuration),
            configuration.delimiter,
            format_number(k.im, configuration)
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
