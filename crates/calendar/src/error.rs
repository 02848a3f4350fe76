//! Error types for the typhon-calendar crate.

/// Error type for all fallible operations in the typhon-calendar crate.
///
/// Covers validation failures for month numbers and for year ranges
/// passed to the monthly sequence builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a year range is inverted.
    #[error("invalid year range: {first_year}..={last_year} (last year must not precede first)")]
    InvalidRange {
        /// First year of the requested range.
        first_year: i32,
        /// Last year of the requested range.
        last_year: i32,
    },
}
