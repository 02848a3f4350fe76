//! The `build` subcommand: assemble a dataset and write it out as CSV.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use typhon_dataset::{
    Adjustment, AuditReport, FeatureTable, MonthlySeries, TargetSeries, build_dataset,
    build_dataset_full,
};
use typhon_decompose::MovingAverageDecomposer;
use typhon_io::GridSource;

use crate::cli::BuildArgs;
use crate::config::TyphonConfig;

pub fn run(args: &BuildArgs) -> Result<()> {
    let config = TyphonConfig::load(&args.config)?;
    let options = config.to_build_options()?;
    let source = open_source(&config)?;
    let decomposer = MovingAverageDecomposer::default();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    if config.full_decomposition {
        let dataset = build_dataset_full(&options, source.as_ref(), &decomposer)?;
        summarize_audit(&dataset.audit);
        write_features(&args.output.join("features.csv"), &dataset.features)?;
        write_series(&args.output.join("target_residual.csv"), &dataset.residual)?;
        write_series(&args.output.join("target_trend.csv"), &dataset.trend)?;
        write_series(&args.output.join("target_seasonal.csv"), &dataset.seasonal)?;
    } else {
        let dataset = build_dataset(&options, source.as_ref(), &decomposer)?;
        summarize_audit(&dataset.audit);
        write_features(&args.output.join("features.csv"), &dataset.features)?;
        write_target(&args.output.join("target.csv"), &dataset.target)?;
        match &dataset.adjustment {
            Adjustment::Raw => {}
            Adjustment::Deseasonalized { adjusted, seasonal } => {
                write_series(&args.output.join("target_deseasonalized.csv"), adjusted)?;
                write_series(&args.output.join("target_seasonal.csv"), seasonal)?;
            }
            Adjustment::Detrended { adjusted, trend } => {
                write_series(&args.output.join("target_detrended.csv"), adjusted)?;
                write_series(&args.output.join("target_trend.csv"), trend)?;
            }
        }
    }

    info!(output = %args.output.display(), "build complete");
    Ok(())
}

#[cfg(feature = "netcdf")]
fn open_source(config: &TyphonConfig) -> Result<Box<dyn GridSource>> {
    Ok(Box::new(typhon_io::NetcdfGridSource::new(
        &config.target_path,
        &config.mask_path,
        &config.target_variable,
    )))
}

#[cfg(not(feature = "netcdf"))]
fn open_source(_config: &TyphonConfig) -> Result<Box<dyn GridSource>> {
    anyhow::bail!("this binary was built without NetCDF support; rebuild with `--features netcdf`")
}

fn summarize_audit(report: &AuditReport) {
    if report.is_clean() {
        info!("quality audit clean");
        return;
    }
    for column in &report.columns {
        if !column.is_clean() {
            warn!(
                column = column.name.as_str(),
                missing = column.missing.len(),
                repeats = column.repeats.len(),
                outliers = column.outliers.len(),
                "quality findings"
            );
        }
    }
}

/// First-of-month ISO date for a row, matching the input CSV convention.
fn row_date(stamp: &typhon_calendar::MonthStamp) -> String {
    format!("{stamp}-01")
}

/// NaN cells become empty fields.
fn format_value(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

fn write_features(path: &Path, features: &FeatureTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec!["date".to_string()];
    header.extend(features.columns().iter().map(|c| c.name().to_string()));
    writer.write_record(&header)?;

    for (row, stamp) in features.stamps().iter().enumerate() {
        let mut record = vec![row_date(stamp)];
        record.extend(features.columns().iter().map(|c| format_value(c.values()[row])));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_target(path: &Path, target: &TargetSeries) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["date", "tcg"])?;
    for (stamp, count) in target.stamps().iter().zip(target.counts()) {
        writer.write_record([row_date(stamp), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_series(path: &Path, series: &MonthlySeries) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["date", series.name()])?;
    for (stamp, value) in series.stamps().iter().zip(series.values()) {
        writer.write_record([row_date(stamp), format_value(*value)])?;
    }
    writer.flush()?;
    Ok(())
}
