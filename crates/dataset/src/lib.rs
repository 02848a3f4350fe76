//! # typhon-dataset
//!
//! Assembles machine-learning datasets for monthly tropical cyclone
//! genesis: a feature table of cluster averages and climate indices over a
//! canonical monthly calendar, a target series of basin-wide genesis
//! counts, an advisory quality audit, and optional seasonal-trend
//! adjustment of the target.
//!
//! ## Quick Start
//!
//! ```no_run
//! use typhon_dataset::{AdjustmentMode, BuildOptions, build_dataset};
//! use typhon_decompose::MovingAverageDecomposer;
//! use typhon_geo::Basin;
//! use typhon_io::MemoryGridSource;
//!
//! let options = BuildOptions {
//!     basin: Basin::Nwp,
//!     cluster_variables: vec!["sst".into(), "vo".into()],
//!     index_variables: vec!["nino34".into()],
//!     cluster_path: "data/clusters".into(),
//!     indexes_path: "data/indices".into(),
//!     first_year: 1980,
//!     last_year: 2020,
//!     mode: AdjustmentMode::Deseasonalize,
//!     month_col: true,
//! };
//! let source = MemoryGridSource::new();
//! let decomposer = MovingAverageDecomposer::default();
//! let dataset = build_dataset(&options, &source, &decomposer)?;
//! # Ok::<(), typhon_dataset::DatasetError>(())
//! ```

mod audit;
mod builder;
mod clusters;
mod error;
mod indices;
mod series;
mod table;
mod target;

pub use audit::{AuditReport, ColumnAudit, audit};
pub use builder::{
    Adjustment, AdjustmentMode, BuildOptions, Dataset, ResidualDataset, build_dataset,
    build_dataset_full,
};
pub use clusters::load_cluster_series;
pub use error::DatasetError;
pub use indices::{load_index_series, residualize};
pub use series::{MonthlySeries, TargetSeries};
pub use table::{Column, FeatureTable};
pub use target::build_target;
