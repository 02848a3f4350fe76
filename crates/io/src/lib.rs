//! # typhon-io
//!
//! Bridges external file formats into the pipeline's internal types:
//! whitespace-delimited climate index tables, per-variable cluster average
//! CSVs, and the gridded event-count fields behind the [`GridSource`]
//! abstraction.
//!
//! Gridded storage is deliberately abstract: the pipeline only ever sees
//! [`GridSource`]. [`MemoryGridSource`] serves tests and embedding
//! callers; a NetCDF-backed implementation is available behind the
//! `netcdf` cargo feature (it needs the system NetCDF library).

mod cluster;
mod error;
mod index_table;
#[cfg(feature = "netcdf")]
mod netcdf_read;
mod source;

pub use cluster::read_cluster_averages;
pub use error::IoError;
pub use index_table::{IndexTable, read_index_table};
#[cfg(feature = "netcdf")]
pub use netcdf_read::NetcdfGridSource;
pub use source::{GridSource, MemoryGridSource};
