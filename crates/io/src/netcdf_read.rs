//! NetCDF-backed [`GridSource`].
//!
//! Yearly files follow the `{prefix}_{year}.nc` convention and carry one
//! 3-D event-count variable on `(time, latitude, longitude)`. Ocean masks
//! live in a separate directory as `{basin}_mask.nc`, each holding a single
//! 2-D raster.

use std::path::{Path, PathBuf};

use ndarray::{Array2, Array3};
use typhon_geo::{Basin, GriddedField, MaskGrid};

use crate::error::IoError;
use crate::source::GridSource;

const LAT_NAMES: [&str; 2] = ["latitude", "lat"];
const LON_NAMES: [&str; 2] = ["longitude", "lon"];

/// Reads yearly gridded fields and basin masks from NetCDF files.
#[derive(Debug, Clone)]
pub struct NetcdfGridSource {
    target_prefix: PathBuf,
    mask_dir: PathBuf,
    var_name: String,
}

impl NetcdfGridSource {
    /// Creates a source reading `{target_prefix}_{year}.nc` files and
    /// masks from `mask_dir`. `var_name` is the gridded variable to load,
    /// `"tcg"` in the reference data.
    pub fn new(
        target_prefix: impl Into<PathBuf>,
        mask_dir: impl Into<PathBuf>,
        var_name: impl Into<String>,
    ) -> Self {
        Self {
            target_prefix: target_prefix.into(),
            mask_dir: mask_dir.into(),
            var_name: var_name.into(),
        }
    }

    fn year_path(&self, year: i32) -> PathBuf {
        let mut name = self
            .target_prefix
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        name.push_str(&format!("_{year}.nc"));
        match self.target_prefix.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

fn read_axis(file: &netcdf::File, names: &[&str], path: &Path) -> Result<Vec<f64>, IoError> {
    for name in names {
        if let Some(var) = file.variable(name) {
            return Ok(var.get_values::<f64, _>(..)?);
        }
    }
    Err(IoError::MissingVariable {
        name: names.join("|"),
        path: path.to_path_buf(),
    })
}

impl GridSource for NetcdfGridSource {
    fn load_year(&self, year: i32) -> Result<GriddedField, IoError> {
        let path = self.year_path(year);
        if !path.exists() {
            return Err(IoError::MissingYearFile {
                year,
                path: path.display().to_string(),
            });
        }
        let file = netcdf::open(&path)?;

        let var = file
            .variable(&self.var_name)
            .ok_or_else(|| IoError::MissingVariable {
                name: self.var_name.clone(),
                path: path.clone(),
            })?;
        let dims = var.dimensions();
        if dims.len() != 3 {
            return Err(IoError::DimensionMismatch {
                name: self.var_name.clone(),
                expected: 3,
                got: dims.len(),
            });
        }
        let shape = (dims[0].len(), dims[1].len(), dims[2].len());
        let values = var.get_values::<f64, _>(..)?;
        let data = Array3::from_shape_vec(shape, values).map_err(|e| IoError::Read {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let lats = read_axis(&file, &LAT_NAMES, &path)?;
        let lons = read_axis(&file, &LON_NAMES, &path)?;
        Ok(GriddedField::new(data, lats, lons)?)
    }

    fn load_mask(&self, basin: Basin) -> Result<MaskGrid, IoError> {
        let path = self.mask_dir.join(format!("{}_mask.nc", basin.as_str()));
        if !path.exists() {
            return Err(IoError::MissingMask {
                basin: basin.as_str(),
            });
        }
        let file = netcdf::open(&path)?;

        // The mask file carries a single 2-D raster; take the first one.
        let var = file
            .variables()
            .find(|v| v.dimensions().len() == 2)
            .ok_or_else(|| IoError::MissingVariable {
                name: "<2-D mask>".into(),
                path: path.clone(),
            })?;
        let dims = var.dimensions();
        let shape = (dims[0].len(), dims[1].len());
        let values = var.get_values::<f64, _>(..)?;
        let data = Array2::from_shape_vec(shape, values).map_err(|e| IoError::Read {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let lats = read_axis(&file, &LAT_NAMES, &path)?;
        let lons = read_axis(&file, &LON_NAMES, &path)?;
        Ok(MaskGrid::new(data, lats, lons)?)
    }
}
