//! Error types for the typhon-decompose crate.

/// Error type for all fallible operations in the typhon-decompose crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecomposeError {
    /// Returned when the seasonal period is too small to be meaningful.
    #[error("invalid period: {period} (must be at least 2)")]
    InvalidPeriod {
        /// The rejected period.
        period: usize,
    },

    /// Returned when the series does not cover two full periods.
    #[error("series too short: {len} value(s), need at least {min}")]
    TooShort {
        /// Length of the series that was provided.
        len: usize,
        /// Minimum length required (two full periods).
        min: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_period() {
        let err = DecomposeError::InvalidPeriod { period: 1 };
        assert_eq!(err.to_string(), "invalid period: 1 (must be at least 2)");
    }

    #[test]
    fn display_too_short() {
        let err = DecomposeError::TooShort { len: 18, min: 24 };
        assert_eq!(
            err.to_string(),
            "series too short: 18 value(s), need at least 24"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<DecomposeError>();
    }
}
