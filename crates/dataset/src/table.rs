//! The assembled feature table.

use typhon_calendar::MonthStamp;

use crate::error::DatasetError;
use crate::series::MonthlySeries;

/// One named column of the feature table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The values, one per table row.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Monthly feature rows over a shared calendar: cluster averages first,
/// then climate indices, then the optional month-of-year column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    stamps: Vec<MonthStamp>,
    columns: Vec<Column>,
}

impl FeatureTable {
    /// Creates an empty table over the given calendar.
    pub fn new(stamps: Vec<MonthStamp>) -> Self {
        Self {
            stamps,
            columns: Vec::new(),
        }
    }

    /// Appends a series as the rightmost column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LengthMismatch`] if the series length does
    /// not match the table calendar.
    pub fn push_series(&mut self, series: &MonthlySeries) -> Result<(), DatasetError> {
        self.push_column(series.name(), series.values().to_vec())
    }

    /// Appends raw values as the rightmost column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LengthMismatch`] if `values` does not match
    /// the table calendar.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), DatasetError> {
        let name = name.into();
        if values.len() != self.stamps.len() {
            return Err(DatasetError::LengthMismatch {
                what: format!("column {name:?}"),
                expected: self.stamps.len(),
                got: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Appends the month-of-year column (1..=12) derived from the calendar.
    pub fn push_month_column(&mut self) {
        let values: Vec<f64> = self.stamps.iter().map(|s| f64::from(s.month())).collect();
        self.columns.push(Column {
            name: "month".into(),
            values,
        });
    }

    /// The calendar stamps, one per row.
    pub fn stamps(&self) -> &[MonthStamp] {
        &self.stamps
    }

    /// The columns, in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks a column up by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows (months).
    pub fn n_rows(&self) -> usize {
        self.stamps.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}
