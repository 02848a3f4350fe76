//! The gridded-data abstraction the pipeline consumes.

use std::collections::HashMap;

use typhon_geo::{Basin, GriddedField, MaskGrid};

use crate::error::IoError;

/// Supplies one year of gridded event counts at a time, plus the ocean
/// masks for the basins that need them.
///
/// Years within a run share the spatial grid; implementations are expected
/// to return fields whose latitude and longitude axes are identical across
/// calls.
pub trait GridSource {
    /// Loads the gridded field for one calendar year (twelve timesteps).
    fn load_year(&self, year: i32) -> Result<GriddedField, IoError>;

    /// Loads the ocean mask for `basin`.
    fn load_mask(&self, basin: Basin) -> Result<MaskGrid, IoError>;
}

/// A [`GridSource`] backed by in-memory fields, keyed by year.
///
/// Used in tests and by embedding callers that produce fields themselves.
#[derive(Debug, Default)]
pub struct MemoryGridSource {
    years: HashMap<i32, GriddedField>,
    masks: HashMap<Basin, MaskGrid>,
}

impl MemoryGridSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the field for one year, replacing any previous entry.
    pub fn insert_year(&mut self, year: i32, field: GriddedField) {
        self.years.insert(year, field);
    }

    /// Registers the ocean mask for a basin.
    pub fn insert_mask(&mut self, basin: Basin, mask: MaskGrid) {
        self.masks.insert(basin, mask);
    }
}

impl GridSource for MemoryGridSource {
    fn load_year(&self, year: i32) -> Result<GriddedField, IoError> {
        self.years
            .get(&year)
            .cloned()
            .ok_or(IoError::MissingYearFile {
                year,
                path: "<memory>".into(),
            })
    }

    fn load_mask(&self, basin: Basin) -> Result<MaskGrid, IoError> {
        self.masks
            .get(&basin)
            .cloned()
            .ok_or(IoError::MissingMask {
                basin: basin.as_str(),
            })
    }
}
