//! Errors raised while assembling a dataset.

use thiserror::Error;
use typhon_calendar::CalendarError;
use typhon_decompose::DecomposeError;
use typhon_geo::GeoError;
use typhon_io::IoError;

/// Errors from feature assembly, target construction, and adjustment.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The requested calendar could not be built.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Geometry validation failed on loaded gridded data.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// An input file could not be read.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Seasonal-trend decomposition failed.
    #[error(transparent)]
    Decompose(#[from] DecomposeError),

    /// An index table has no value for a month of the requested range.
    #[error("index {index:?} has no value for {year}-{month:02}")]
    MissingDataPoint {
        /// Index (variable) name.
        index: String,
        /// Year of the missing month.
        year: i32,
        /// Month of the missing value, 1-based.
        month: u8,
    },

    /// Two series that must share the calendar have different lengths.
    #[error("{what}: expected {expected} values, got {got}")]
    LengthMismatch {
        /// What was being aligned.
        what: String,
        /// Length demanded by the calendar.
        expected: usize,
        /// Length actually produced.
        got: usize,
    },
}
