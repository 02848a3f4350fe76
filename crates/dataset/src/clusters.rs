//! Cluster average series, left-joined onto the canonical calendar.

use std::path::Path;

use typhon_calendar::MonthStamp;
use typhon_io::read_cluster_averages;

use crate::error::DatasetError;
use crate::series::MonthlySeries;

/// Loads the cluster averages for `variable` from
/// `{cluster_path}/averages_{variable}.csv` and left-joins them onto
/// `calendar`: months the file does not cover become NaN, months outside
/// the calendar are dropped. Duplicate stamps keep the last record.
pub fn load_cluster_series(
    cluster_path: &Path,
    variable: &str,
    calendar: &[MonthStamp],
) -> Result<MonthlySeries, DatasetError> {
    let path = cluster_path.join(format!("averages_{variable}.csv"));
    let rows = read_cluster_averages(&path)?;

    let by_stamp: std::collections::BTreeMap<MonthStamp, f64> = rows.into_iter().collect();
    let values: Vec<f64> = calendar
        .iter()
        .map(|stamp| by_stamp.get(stamp).copied().unwrap_or(f64::NAN))
        .collect();
    MonthlySeries::new(variable, calendar.to_vec(), values)
}
