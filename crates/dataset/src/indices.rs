//! Climate index series, loaded from year-by-month tables.

use std::path::Path;

use typhon_calendar::MonthStamp;
use typhon_decompose::Decompose;
use typhon_io::read_index_table;

use crate::error::DatasetError;
use crate::series::MonthlySeries;

/// Loads the index `name` from `{indexes_path}/{name}.txt` and aligns it
/// with `calendar`.
///
/// # Errors
///
/// Propagates read and parse failures, and returns
/// [`DatasetError::MissingDataPoint`] if the table has no value for any
/// month of the calendar.
pub fn load_index_series(
    indexes_path: &Path,
    name: &str,
    calendar: &[MonthStamp],
) -> Result<MonthlySeries, DatasetError> {
    let table = read_index_table(&indexes_path.join(format!("{name}.txt")))?;

    let mut values = Vec::with_capacity(calendar.len());
    for stamp in calendar {
        let value = table.value(stamp.year(), stamp.month()).ok_or_else(|| {
            DatasetError::MissingDataPoint {
                index: name.to_string(),
                year: stamp.year(),
                month: stamp.month(),
            }
        })?;
        values.push(value);
    }
    MonthlySeries::new(name, calendar.to_vec(), values)
}

/// Replaces a series with the residual of its seasonal-trend
/// decomposition, keeping the name and calendar.
pub fn residualize(
    series: &MonthlySeries,
    decomposer: &dyn Decompose,
) -> Result<MonthlySeries, DatasetError> {
    let parts = decomposer.decompose(series.values())?;
    MonthlySeries::new(
        series.name(),
        series.stamps().to_vec(),
        parts.residual().to_vec(),
    )
}
