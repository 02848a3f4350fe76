//! Whitespace-delimited climate index tables.
//!
//! Each row carries a year followed by twelve monthly values. Files in the
//! wild sometimes carry trailing annotation columns or repeated year rows;
//! extras past the twelfth month are ignored and the first row for a year
//! wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::IoError;

/// A climate index loaded from a year-by-month text table.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexTable {
    rows: BTreeMap<i32, [f64; 12]>,
}

impl IndexTable {
    /// The value for `(year, month)`, if the table has a row for that year.
    ///
    /// `month` is 1-based; passing 0 or >12 returns `None`.
    pub fn value(&self, year: i32, month: u8) -> Option<f64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.rows.get(&year).map(|r| r[(month - 1) as usize])
    }

    /// Number of distinct years in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a whitespace-delimited index table.
///
/// Blank lines are skipped. Each remaining line must start with an integer
/// year followed by at least twelve numeric monthly values; any further
/// fields on the line are ignored.
///
/// # Errors
///
/// [`IoError::FileNotFound`] if `path` does not exist, [`IoError::Read`]
/// on read failure, and [`IoError::Parse`] on a malformed line.
pub fn read_index_table(path: &Path) -> Result<IndexTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut rows: BTreeMap<i32, [f64; 12]> = BTreeMap::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 13 {
            return Err(IoError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("expected 13 fields, found {}", fields.len()),
            });
        }
        let year: i32 = fields[0].parse().map_err(|_| IoError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            reason: format!("bad year {:?}", fields[0]),
        })?;
        let mut values = [0.0; 12];
        for (m, field) in fields[1..13].iter().enumerate() {
            values[m] = field.parse().map_err(|_| IoError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("bad value {:?} for month {}", field, m + 1),
            })?;
        }
        rows.entry(year).or_insert(values);
    }

    Ok(IndexTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_table(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_year_rows() {
        let (_dir, path) = write_table(
            "1990 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8 0.9 1.0 1.1 1.2\n\
             1991 -1.0 -2.0 -3.0 -4.0 -5.0 -6.0 -7.0 -8.0 -9.0 -10.0 -11.0 -12.0\n",
        );
        let table = read_index_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1990, 1), Some(0.1));
        assert_eq!(table.value(1990, 12), Some(1.2));
        assert_eq!(table.value(1991, 7), Some(-7.0));
        assert_eq!(table.value(1992, 1), None);
        assert_eq!(table.value(1990, 0), None);
        assert_eq!(table.value(1990, 13), None);
    }

    #[test]
    fn trailing_fields_ignored_and_first_year_row_wins() {
        let (_dir, path) = write_table(
            "2000 1 2 3 4 5 6 7 8 9 10 11 12 annual=78\n\
             2000 9 9 9 9 9 9 9 9 9 9 9 9\n",
        );
        let table = read_index_table(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.value(2000, 3), Some(3.0));
    }

    #[test]
    fn blank_lines_skipped() {
        let (_dir, path) =
            write_table("\n2001 1 1 1 1 1 1 1 1 1 1 1 1\n\n");
        let table = read_index_table(&path).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn short_line_is_a_parse_error() {
        let (_dir, path) = write_table("2001 1 2 3\n");
        let err = read_index_table(&path).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn non_numeric_value_is_a_parse_error() {
        let (_dir, path) =
            write_table("2001 1 2 3 4 5 six 7 8 9 10 11 12\n");
        let err = read_index_table(&path).unwrap_err();
        assert!(err.to_string().contains("month 6"), "{err}");
    }

    #[test]
    fn missing_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_index_table(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
