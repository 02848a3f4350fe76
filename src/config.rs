//! TOML run configuration.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use typhon_dataset::{AdjustmentMode, BuildOptions};
use typhon_geo::Basin;

/// One dataset build, as described by a `typhon.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TyphonConfig {
    /// Basin short code (`NWP`, `NEP`, `NA`, `NI`, `SP`, `SI`, `GLB`).
    pub basin: String,
    /// First year of the analysis span, inclusive.
    pub first_year: i32,
    /// Last year of the analysis span, inclusive.
    pub last_year: i32,
    /// Atmospheric variables with cluster average CSVs, in column order.
    pub cluster_variables: Vec<String>,
    /// Climate indices with year-by-month tables, in column order.
    pub index_variables: Vec<String>,
    /// Directory holding `averages_{var}.csv` files.
    pub cluster_path: PathBuf,
    /// Directory holding `{index}.txt` tables.
    pub indexes_path: PathBuf,
    /// Gridded file prefix; yearly files are `{target_path}_{year}.nc`.
    pub target_path: PathBuf,
    /// Directory holding `{basin}_mask.nc` files.
    #[serde(default = "default_mask_path")]
    pub mask_path: PathBuf,
    /// Gridded variable holding the event counts.
    #[serde(default = "default_target_variable")]
    pub target_variable: String,
    /// Target adjustment: `raw`, `deseasonalize`, or `detrend`.
    #[serde(default = "default_adjustment")]
    pub adjustment: String,
    /// Whether to append the month-of-year feature column.
    #[serde(default = "default_month_col")]
    pub month_col: bool,
    /// Build the fully decomposed variant (residualized indices, target
    /// split into components) instead of the standard one.
    #[serde(default)]
    pub full_decomposition: bool,
}

fn default_mask_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_target_variable() -> String {
    "tcg".into()
}

fn default_adjustment() -> String {
    "raw".into()
}

fn default_month_col() -> bool {
    true
}

impl TyphonConfig {
    /// Loads and parses the configuration file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// The configured basin.
    pub fn basin(&self) -> Result<Basin> {
        self.basin.parse().context("in config field `basin`")
    }

    /// The configured adjustment mode.
    pub fn adjustment_mode(&self) -> Result<AdjustmentMode> {
        match self.adjustment.as_str() {
            "raw" => Ok(AdjustmentMode::Raw),
            "deseasonalize" => Ok(AdjustmentMode::Deseasonalize),
            "detrend" => Ok(AdjustmentMode::Detrend),
            other => bail!("unknown adjustment {other:?}; use raw, deseasonalize, or detrend"),
        }
    }

    /// Converts the file-level configuration into build options.
    pub fn to_build_options(&self) -> Result<BuildOptions> {
        Ok(BuildOptions {
            basin: self.basin()?,
            cluster_variables: self.cluster_variables.clone(),
            index_variables: self.index_variables.clone(),
            cluster_path: self.cluster_path.clone(),
            indexes_path: self.indexes_path.clone(),
            first_year: self.first_year,
            last_year: self.last_year,
            mode: self.adjustment_mode()?,
            month_col: self.month_col,
        })
    }
}
