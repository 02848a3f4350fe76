//! Monthly series aligned with the canonical calendar.

use typhon_calendar::MonthStamp;

use crate::error::DatasetError;

/// A named monthly series, one value per calendar stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    name: String,
    stamps: Vec<MonthStamp>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Creates a series.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LengthMismatch`] if `values` and `stamps`
    /// have different lengths.
    pub fn new(
        name: impl Into<String>,
        stamps: Vec<MonthStamp>,
        values: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        let name = name.into();
        if stamps.len() != values.len() {
            return Err(DatasetError::LengthMismatch {
                what: format!("series {name:?}"),
                expected: stamps.len(),
                got: values.len(),
            });
        }
        Ok(Self {
            name,
            stamps,
            values,
        })
    }

    /// The series name (variable or index name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The calendar stamps.
    pub fn stamps(&self) -> &[MonthStamp] {
        &self.stamps
    }

    /// The values, aligned with [`MonthlySeries::stamps`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no months.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Monthly event counts for the analysis region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSeries {
    stamps: Vec<MonthStamp>,
    counts: Vec<i64>,
}

impl TargetSeries {
    /// Creates a target series.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LengthMismatch`] if `counts` and `stamps`
    /// have different lengths.
    pub fn new(stamps: Vec<MonthStamp>, counts: Vec<i64>) -> Result<Self, DatasetError> {
        if stamps.len() != counts.len() {
            return Err(DatasetError::LengthMismatch {
                what: "target series".into(),
                expected: stamps.len(),
                got: counts.len(),
            });
        }
        Ok(Self { stamps, counts })
    }

    /// The calendar stamps.
    pub fn stamps(&self) -> &[MonthStamp] {
        &self.stamps
    }

    /// The monthly counts, aligned with [`TargetSeries::stamps`].
    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the series holds no months.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The counts as floats, for decomposition and adjustment.
    pub fn to_values(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64).collect()
    }
}
