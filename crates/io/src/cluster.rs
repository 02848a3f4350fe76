//! Cluster average CSVs, one file per atmospheric variable.
//!
//! Each record pairs an ISO date (the first of a month) with a scalar
//! cluster average. The reader preserves file order; month alignment
//! against the canonical calendar happens downstream.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use typhon_calendar::MonthStamp;

use crate::error::IoError;

/// Reads a cluster average CSV into `(stamp, value)` pairs in file order.
///
/// The file must carry a header row; the first column is an ISO
/// `YYYY-MM-DD` date, the second the averaged value.
///
/// # Errors
///
/// [`IoError::FileNotFound`] if `path` does not exist, [`IoError::Csv`]
/// for unreadable or malformed records.
pub fn read_cluster_averages(path: &Path) -> Result<Vec<(MonthStamp, f64)>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let date_field = record.get(0).unwrap_or("");
        let value_field = record.get(1).unwrap_or("");

        let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d").map_err(|_| IoError::Csv {
            path: path.to_path_buf(),
            reason: format!("bad date {date_field:?}"),
        })?;
        let value: f64 = value_field.parse().map_err(|_| IoError::Csv {
            path: path.to_path_buf(),
            reason: format!("bad value {value_field:?}"),
        })?;
        let stamp = MonthStamp::new(date.year(), date.month() as u8)?;
        rows.push((stamp, value));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("averages_sst.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_dated_records_in_order() {
        let (_dir, path) = write_csv(
            "date,value\n2005-01-01,26.4\n2005-02-01,26.9\n2005-03-01,27.1\n",
        );
        let rows = read_cluster_averages(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, MonthStamp::new(2005, 1).unwrap());
        assert_eq!(rows[0].1, 26.4);
        assert_eq!(rows[2].0, MonthStamp::new(2005, 3).unwrap());
    }

    #[test]
    fn bad_date_rejected() {
        let (_dir, path) = write_csv("date,value\n2005/01/01,26.4\n");
        let err = read_cluster_averages(&path).unwrap_err();
        assert!(err.to_string().contains("bad date"), "{err}");
    }

    #[test]
    fn bad_value_rejected() {
        let (_dir, path) = write_csv("date,value\n2005-01-01,warm\n");
        let err = read_cluster_averages(&path).unwrap_err();
        assert!(err.to_string().contains("bad value"), "{err}");
    }

    #[test]
    fn missing_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_cluster_averages(&dir.path().join("averages_vo.csv")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
