//! Error types for file and gridded-data access.

use std::path::PathBuf;

use thiserror::Error;
use typhon_calendar::CalendarError;
use typhon_geo::GeoError;

/// Errors raised while reading index tables, cluster CSVs, or gridded
/// fields.
#[derive(Error, Debug)]
pub enum IoError {
    /// A required input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The gridded file for one year of the requested range is absent.
    #[error("no gridded data for year {year}: {path}")]
    MissingYearFile {
        /// Year whose file is missing.
        year: i32,
        /// Path (or source key) that was probed.
        path: String,
    },

    /// The basin requires an ocean mask but the source has none for it.
    #[error("no ocean mask available for basin {basin}")]
    MissingMask {
        /// Basin short code.
        basin: &'static str,
    },

    /// An underlying read failed.
    #[error("failed to read {path}: {reason}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// What the underlying layer reported.
        reason: String,
    },

    /// A line of a whitespace-delimited table could not be parsed.
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A CSV record could not be read or decoded.
    #[error("bad CSV record in {path}: {reason}")]
    Csv {
        /// File being read.
        path: PathBuf,
        /// What the CSV layer reported.
        reason: String,
    },

    /// A gridded file lacks an expected variable.
    #[error("variable {name:?} not found in {path}")]
    MissingVariable {
        /// Variable that was looked up.
        name: String,
        /// File that was searched.
        path: PathBuf,
    },

    /// A gridded variable has an unexpected number of dimensions.
    #[error("variable {name:?} has {got} dimensions, expected {expected}")]
    DimensionMismatch {
        /// Variable that was inspected.
        name: String,
        /// Expected dimensionality.
        expected: usize,
        /// Dimensionality found in the file.
        got: usize,
    },

    /// The NetCDF layer reported an error.
    #[cfg(feature = "netcdf")]
    #[error("netcdf: {reason}")]
    Netcdf {
        /// What the library reported.
        reason: String,
    },

    /// Loaded coordinates and data failed geometry validation.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// A stamp read from a file was out of range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(feature = "netcdf")]
impl From<netcdf::Error> for IoError {
    fn from(err: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: err.to_string(),
        }
    }
}
