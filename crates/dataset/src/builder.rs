//! Dataset assembly orchestration.

use std::path::PathBuf;

use tracing::info;
use typhon_calendar::{MonthStamp, monthly_sequence};
use typhon_decompose::Decompose;
use typhon_geo::Basin;
use typhon_io::GridSource;

use crate::audit::{AuditReport, audit};
use crate::clusters::load_cluster_series;
use crate::error::DatasetError;
use crate::indices::{load_index_series, residualize};
use crate::series::{MonthlySeries, TargetSeries};
use crate::table::FeatureTable;
use crate::target::build_target;

/// How the target series is adjusted after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjustmentMode {
    /// Keep the raw counts.
    #[default]
    Raw,
    /// Subtract the seasonal component.
    Deseasonalize,
    /// Subtract the trend component.
    Detrend,
}

/// The target adjustment actually performed, carrying the subtracted
/// component alongside the adjusted series.
#[derive(Debug, Clone, PartialEq)]
pub enum Adjustment {
    /// No adjustment.
    Raw,
    /// `adjusted = target - seasonal`.
    Deseasonalized {
        /// The seasonally adjusted target.
        adjusted: MonthlySeries,
        /// The seasonal component that was removed.
        seasonal: MonthlySeries,
    },
    /// `adjusted = target - trend`.
    Detrended {
        /// The detrended target.
        adjusted: MonthlySeries,
        /// The trend component that was removed.
        trend: MonthlySeries,
    },
}

/// Everything a dataset build needs besides the gridded source and the
/// decomposition algorithm.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Analysis basin.
    pub basin: Basin,
    /// Atmospheric variables with cluster average CSVs, in column order.
    pub cluster_variables: Vec<String>,
    /// Climate indices with year-by-month tables, in column order.
    pub index_variables: Vec<String>,
    /// Directory holding `averages_{var}.csv` files.
    pub cluster_path: PathBuf,
    /// Directory holding `{index}.txt` tables.
    pub indexes_path: PathBuf,
    /// First year of the analysis span, inclusive.
    pub first_year: i32,
    /// Last year of the analysis span, inclusive.
    pub last_year: i32,
    /// Target adjustment.
    pub mode: AdjustmentMode,
    /// Whether to append the month-of-year feature column.
    pub month_col: bool,
}

/// A built dataset: features, raw target, the requested adjustment, and
/// the quality findings.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// The assembled feature table.
    pub features: FeatureTable,
    /// Raw monthly event counts.
    pub target: TargetSeries,
    /// The adjustment applied to the target.
    pub adjustment: Adjustment,
    /// Findings from the feature audit.
    pub audit: AuditReport,
}

/// The fully decomposed variant: residualized index features and the
/// target split into its three components.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualDataset {
    /// Feature table with residualized index columns.
    pub features: FeatureTable,
    /// Residual component of the target.
    pub residual: MonthlySeries,
    /// Trend component of the target.
    pub trend: MonthlySeries,
    /// Seasonal component of the target.
    pub seasonal: MonthlySeries,
    /// Findings from the feature audit.
    pub audit: AuditReport,
}

/// Builds the feature table and target for the requested span and basin.
///
/// Features are assembled in a fixed column order: cluster averages,
/// climate indices, then the optional month column. The audit runs over
/// the features before the target is built; its findings are returned,
/// never fatal.
pub fn build_dataset(
    options: &BuildOptions,
    source: &dyn GridSource,
    decomposer: &dyn Decompose,
) -> Result<Dataset, DatasetError> {
    let calendar = monthly_sequence(options.first_year, options.last_year)?;
    let features = assemble_features(options, &calendar, None)?;
    let report = audit(&features);

    let target = build_target(options.basin, source, &calendar)?;

    let adjustment = match options.mode {
        AdjustmentMode::Raw => Adjustment::Raw,
        AdjustmentMode::Deseasonalize => {
            let parts = decomposer.decompose(&target.to_values())?;
            let adjusted: Vec<f64> = target
                .to_values()
                .iter()
                .zip(parts.seasonal())
                .map(|(x, s)| x - s)
                .collect();
            Adjustment::Deseasonalized {
                adjusted: MonthlySeries::new("tcg", calendar.clone(), adjusted)?,
                seasonal: MonthlySeries::new("tcg", calendar.clone(), parts.seasonal().to_vec())?,
            }
        }
        AdjustmentMode::Detrend => {
            let parts = decomposer.decompose(&target.to_values())?;
            let adjusted: Vec<f64> = target
                .to_values()
                .iter()
                .zip(parts.trend())
                .map(|(x, t)| x - t)
                .collect();
            Adjustment::Detrended {
                adjusted: MonthlySeries::new("tcg", calendar.clone(), adjusted)?,
                trend: MonthlySeries::new("tcg", calendar.clone(), parts.trend().to_vec())?,
            }
        }
    };

    info!(
        basin = options.basin.as_str(),
        rows = features.n_rows(),
        columns = features.n_columns(),
        "dataset built"
    );
    Ok(Dataset {
        features,
        target,
        adjustment,
        audit: report,
    })
}

/// Builds the fully decomposed dataset variant: every index feature is
/// replaced by its decomposition residual, and the target is returned as
/// its residual, trend, and seasonal components instead of raw counts.
pub fn build_dataset_full(
    options: &BuildOptions,
    source: &dyn GridSource,
    decomposer: &dyn Decompose,
) -> Result<ResidualDataset, DatasetError> {
    let calendar = monthly_sequence(options.first_year, options.last_year)?;
    let features = assemble_features(options, &calendar, Some(decomposer))?;
    let report = audit(&features);

    let target = build_target(options.basin, source, &calendar)?;
    let parts = decomposer.decompose(&target.to_values())?;

    info!(
        basin = options.basin.as_str(),
        rows = features.n_rows(),
        columns = features.n_columns(),
        "residual dataset built"
    );
    Ok(ResidualDataset {
        features,
        residual: MonthlySeries::new("tcg", calendar.clone(), parts.residual().to_vec())?,
        trend: MonthlySeries::new("tcg", calendar.clone(), parts.trend().to_vec())?,
        seasonal: MonthlySeries::new("tcg", calendar, parts.seasonal().to_vec())?,
        audit: report,
    })
}

/// Loads every feature series and joins them in the fixed column order.
/// When `residualizer` is given, index series are replaced by their
/// decomposition residuals before joining.
fn assemble_features(
    options: &BuildOptions,
    calendar: &[MonthStamp],
    residualizer: Option<&dyn Decompose>,
) -> Result<FeatureTable, DatasetError> {
    let mut table = FeatureTable::new(calendar.to_vec());

    for variable in &options.cluster_variables {
        let series = load_cluster_series(&options.cluster_path, variable, calendar)?;
        table.push_series(&series)?;
    }
    for index in &options.index_variables {
        let mut series = load_index_series(&options.indexes_path, index, calendar)?;
        if let Some(decomposer) = residualizer {
            series = residualize(&series, decomposer)?;
        }
        table.push_series(&series)?;
    }
    if options.month_col {
        table.push_month_column();
    }
    Ok(table)
}
