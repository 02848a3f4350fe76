//! # typhon-geo
//!
//! Basin geometry and gridded-field cropping for the typhon pipeline.
//!
//! The hard part of assembling a tropical cyclone genesis dataset is the
//! domain geometry: basin bounding boxes, the ocean masks two basins
//! require, and longitude selection across the antimeridian. This crate
//! owns all of it:
//!
//! - [`Basin`] — the closed registry of ocean basins with their canonical
//!   bounding boxes and mask requirements.
//! - [`BoundingBox`] — a lon/lat box that may encode an antimeridian
//!   crossing (`min_lon > max_lon`).
//! - [`GriddedField`] / [`MaskGrid`] — (time, latitude, longitude) fields
//!   on regular axes, latitude ordered north to south.
//! - [`crop`] — closed-interval selection with automatic rebasing of
//!   longitudes into `[0, 360)` when the request crosses 180°.

mod basin;
mod bbox;
mod crop;
mod error;
mod field;

pub use basin::{ALL_BASINS, Basin};
pub use bbox::BoundingBox;
pub use crop::crop;
pub use error::GeoError;
pub use field::{GriddedField, MaskGrid};
