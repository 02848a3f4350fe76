//! Quality audit over the assembled feature table.
//!
//! Findings are advisory: they are logged and returned, never fatal. Build
//! runs proceed with the data as-is.

use tracing::warn;

use crate::table::FeatureTable;

/// Positions flagged for one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnAudit {
    /// Column name.
    pub name: String,
    /// Row indices with missing (non-finite) values.
    pub missing: Vec<usize>,
    /// Row indices whose value equals the previous row's.
    pub repeats: Vec<usize>,
    /// Row indices where `|x| > mean + 7 * sd`.
    pub outliers: Vec<usize>,
}

impl ColumnAudit {
    /// Whether this column produced no findings.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.repeats.is_empty() && self.outliers.is_empty()
    }
}

/// Per-column findings for one audit pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuditReport {
    /// One entry per table column, in table order.
    pub columns: Vec<ColumnAudit>,
}

impl AuditReport {
    /// Whether no column produced any finding.
    pub fn is_clean(&self) -> bool {
        self.columns.iter().all(ColumnAudit::is_clean)
    }
}

/// Audits every column of the table for missing values, consecutive
/// repeats, and extreme outliers.
///
/// Missing means non-finite. A repeat is any row whose value equals the
/// previous row's exactly (NaN never equals NaN, so missing runs are not
/// double-counted as repeats). Outliers are values with
/// `|x| > mean + 7 * sd`, both moments computed over the finite values
/// with the sample (N-1) standard deviation.
pub fn audit(table: &FeatureTable) -> AuditReport {
    let mut report = AuditReport::default();
    for column in table.columns() {
        let values = column.values();

        let missing: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite())
            .map(|(i, _)| i)
            .collect();

        let repeats: Vec<usize> = (1..values.len())
            .filter(|&i| values[i] == values[i - 1])
            .collect();

        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let outliers: Vec<usize> = match (mean(&finite), sample_sd(&finite)) {
            (Some(m), Some(sd)) => {
                let threshold = m + 7.0 * sd;
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite() && v.abs() > threshold)
                    .map(|(i, _)| i)
                    .collect()
            }
            _ => Vec::new(),
        };

        if !missing.is_empty() {
            warn!(column = column.name(), count = missing.len(), "missing values");
        }
        if !repeats.is_empty() {
            warn!(
                column = column.name(),
                count = repeats.len(),
                "consecutive repeated values"
            );
        }
        if !outliers.is_empty() {
            warn!(
                column = column.name(),
                count = outliers.len(),
                "values beyond mean + 7 sd"
            );
        }

        report.columns.push(ColumnAudit {
            name: column.name().to_string(),
            missing,
            repeats,
            outliers,
        });
    }
    report
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sample_sd(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use typhon_calendar::monthly_sequence;

    fn table_with(columns: Vec<(&str, Vec<f64>)>) -> FeatureTable {
        let n = columns[0].1.len();
        assert_eq!(n % 12, 0);
        let years = (n / 12) as i32;
        let stamps = monthly_sequence(2000, 2000 + years - 1).unwrap();
        let mut table = FeatureTable::new(stamps);
        for (name, values) in columns {
            table.push_column(name, values).unwrap();
        }
        table
    }

    #[test]
    fn clean_column_reports_nothing() {
        let values: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let report = audit(&table_with(vec![("sst", values)]));
        assert!(report.is_clean());
        assert_eq!(report.columns.len(), 1);
        assert_eq!(report.columns[0].name, "sst");
    }

    #[test]
    fn flags_missing_and_repeats() {
        let mut values: Vec<f64> = (0..12).map(|i| i as f64).collect();
        values[4] = f64::NAN;
        values[7] = values[6];
        let report = audit(&table_with(vec![("sst", values)]));
        assert_eq!(report.columns[0].missing, vec![4]);
        assert_eq!(report.columns[0].repeats, vec![7]);
        assert!(report.columns[0].outliers.is_empty());
    }

    #[test]
    fn repeat_flags_second_position_only() {
        let report = audit(&table_with(vec![(
            "x",
            vec![1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
        )]));
        assert_eq!(report.columns[0].repeats, vec![1]);
    }

    #[test]
    fn nan_runs_are_not_repeats() {
        let mut values: Vec<f64> = (0..12).map(|i| i as f64).collect();
        values[3] = f64::NAN;
        values[4] = f64::NAN;
        let report = audit(&table_with(vec![("x", values)]));
        assert_eq!(report.columns[0].missing, vec![3, 4]);
        assert!(report.columns[0].repeats.is_empty());
    }

    #[test]
    fn flags_a_single_extreme_spike() {
        // A spike in a long, mostly-flat series: with 119 small values and
        // one at 1000, the spike sits far beyond mean + 7 sd.
        let mut values: Vec<f64> = (0..120).map(|i| (i % 7) as f64 * 0.01).collect();
        values[60] = 1000.0;
        let report = audit(&table_with(vec![("spiky", values)]));
        assert_eq!(report.columns[0].outliers, vec![60]);
    }

    #[test]
    fn moments_use_sample_standard_deviation() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        // Sample variance of 1..4 is 5/3.
        assert_relative_eq!(
            sample_sd(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            (5.0f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(sample_sd(&[1.0]), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn audit_covers_every_column() {
        let a: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let mut b = a.clone();
        b[2] = f64::NAN;
        let report = audit(&table_with(vec![("a", a), ("b", b)]));
        assert!(report.columns[0].is_clean());
        assert_eq!(report.columns[1].missing, vec![2]);
        assert!(!report.is_clean());
    }
}
