//! Error types for the typhon-geo crate.

/// Error type for all fallible operations in the typhon-geo crate.
///
/// Covers basin resolution failures and structural defects in gridded
/// fields (missing or mismatched coordinate axes). All of these are fatal:
/// the pipeline never proceeds on malformed geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Returned when a basin identifier is not in the registry.
    #[error("unknown basin: '{name}' (expected one of NWP, NEP, NA, NI, SP, SI, GLB)")]
    UnknownBasin {
        /// The unrecognized identifier.
        name: String,
    },

    /// Returned when a field is constructed without a required coordinate axis.
    #[error("missing coordinate axis: {axis}")]
    MissingCoordinate {
        /// Name of the absent axis.
        axis: &'static str,
    },

    /// Returned when a coordinate axis length disagrees with the data shape.
    #[error("axis '{axis}' mismatch: {coords} coordinate(s) for {data} data point(s)")]
    AxisMismatch {
        /// Name of the offending axis.
        axis: &'static str,
        /// Number of coordinate values supplied.
        coords: usize,
        /// Extent of the data along that axis.
        data: usize,
    },

    /// Returned when two grids that must share axes have different
    /// coordinate values.
    #[error("coordinate values differ along {axis}")]
    CoordinateMismatch {
        /// Name of the axis whose values disagree.
        axis: &'static str,
    },
}
