//! Gridded fields on regular latitude/longitude axes.

use ndarray::{Array2, Array3, Axis, concatenate};

use crate::error::GeoError;

/// A value indexed by (time, latitude, longitude).
///
/// Coordinate axes are regular and sorted; latitude runs in the field's
/// native order, north to south for the reanalysis grids this pipeline
/// consumes. The field is read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedField {
    data: Array3<f64>,
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl GriddedField {
    /// Creates a field from data shaped `(time, lat, lon)` and its axes.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MissingCoordinate`] if either axis is empty and
    /// [`GeoError::AxisMismatch`] if an axis length disagrees with the data
    /// shape.
    pub fn new(data: Array3<f64>, lats: Vec<f64>, lons: Vec<f64>) -> Result<Self, GeoError> {
        if lats.is_empty() {
            return Err(GeoError::MissingCoordinate { axis: "latitude" });
        }
        if lons.is_empty() {
            return Err(GeoError::MissingCoordinate { axis: "longitude" });
        }
        let (_, ny, nx) = data.dim();
        if ny != lats.len() {
            return Err(GeoError::AxisMismatch {
                axis: "latitude",
                coords: lats.len(),
                data: ny,
            });
        }
        if nx != lons.len() {
            return Err(GeoError::AxisMismatch {
                axis: "longitude",
                coords: lons.len(),
                data: nx,
            });
        }
        Ok(Self { data, lats, lons })
    }

    /// Used by [`crate::crop`], which may legitimately produce empty axes.
    pub(crate) fn from_parts(data: Array3<f64>, lats: Vec<f64>, lons: Vec<f64>) -> Self {
        Self { data, lats, lons }
    }

    /// The raw data, shaped `(time, lat, lon)`.
    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }

    /// The latitude axis, in native order.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// The longitude axis.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Number of time steps.
    pub fn n_times(&self) -> usize {
        self.data.dim().0
    }

    /// Concatenates fields along the time axis, in the order given.
    ///
    /// Chronological order is the caller's responsibility; this function
    /// only verifies that every field shares the same spatial axes.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::CoordinateMismatch`] if any field's axes differ
    /// from the first field's, and [`GeoError::MissingCoordinate`] if no
    /// fields are given.
    pub fn concat_time(fields: &[GriddedField]) -> Result<GriddedField, GeoError> {
        let first = fields
            .first()
            .ok_or(GeoError::MissingCoordinate { axis: "time" })?;
        for field in &fields[1..] {
            if field.lats != first.lats {
                return Err(GeoError::CoordinateMismatch { axis: "latitude" });
            }
            if field.lons != first.lons {
                return Err(GeoError::CoordinateMismatch { axis: "longitude" });
            }
        }

        let views: Vec<_> = fields.iter().map(|f| f.data.view()).collect();
        let data = concatenate(Axis(0), &views).expect("axes validated above");
        Ok(GriddedField {
            data,
            lats: first.lats.clone(),
            lons: first.lons.clone(),
        })
    }

    /// Applies an ocean mask: cells where the mask is not exactly 1 become
    /// NaN, so they drop out of [`GriddedField::spatial_sum`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::CoordinateMismatch`] if the mask's axes differ
    /// from the field's.
    pub fn apply_mask(&self, mask: &MaskGrid) -> Result<GriddedField, GeoError> {
        if mask.lats != self.lats {
            return Err(GeoError::CoordinateMismatch { axis: "latitude" });
        }
        if mask.lons != self.lons {
            return Err(GeoError::CoordinateMismatch { axis: "longitude" });
        }

        let mut data = self.data.clone();
        for mut time_slice in data.axis_iter_mut(Axis(0)) {
            for ((y, x), value) in time_slice.indexed_iter_mut() {
                if mask.data[[y, x]] != 1.0 {
                    *value = f64::NAN;
                }
            }
        }
        Ok(GriddedField {
            data,
            lats: self.lats.clone(),
            lons: self.lons.clone(),
        })
    }

    /// Sums the field over latitude and longitude for each time step,
    /// skipping non-finite cells. An all-masked (or empty) slice sums to 0.
    pub fn spatial_sum(&self) -> Vec<f64> {
        self.data
            .axis_iter(Axis(0))
            .map(|slice| slice.iter().filter(|v| v.is_finite()).sum())
            .collect()
    }
}

/// A 2-D mask raster on the same axis conventions as [`GriddedField`];
/// value 1 marks cells to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskGrid {
    data: Array2<f64>,
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl MaskGrid {
    /// Creates a mask from data shaped `(lat, lon)` and its axes.
    ///
    /// # Errors
    ///
    /// Same validation as [`GriddedField::new`].
    pub fn new(data: Array2<f64>, lats: Vec<f64>, lons: Vec<f64>) -> Result<Self, GeoError> {
        if lats.is_empty() {
            return Err(GeoError::MissingCoordinate { axis: "latitude" });
        }
        if lons.is_empty() {
            return Err(GeoError::MissingCoordinate { axis: "longitude" });
        }
        let (ny, nx) = data.dim();
        if ny != lats.len() {
            return Err(GeoError::AxisMismatch {
                axis: "latitude",
                coords: lats.len(),
                data: ny,
            });
        }
        if nx != lons.len() {
            return Err(GeoError::AxisMismatch {
                axis: "longitude",
                coords: lons.len(),
                data: nx,
            });
        }
        Ok(Self { data, lats, lons })
    }

    /// The raw mask values, shaped `(lat, lon)`.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// The latitude axis.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// The longitude axis.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn two_by_two(values: [f64; 4]) -> GriddedField {
        let data = Array3::from_shape_vec((1, 2, 2), values.to_vec()).unwrap();
        GriddedField::new(data, vec![10.0, 0.0], vec![100.0, 110.0]).unwrap()
    }

    #[test]
    fn new_validates_latitude_axis() {
        let data = Array3::zeros((1, 3, 2));
        let err = GriddedField::new(data, vec![10.0, 0.0], vec![100.0, 110.0]).unwrap_err();
        assert_eq!(
            err,
            GeoError::AxisMismatch {
                axis: "latitude",
                coords: 2,
                data: 3,
            }
        );
    }

    #[test]
    fn new_rejects_empty_axes() {
        let data = Array3::zeros((1, 0, 2));
        let err = GriddedField::new(data, vec![], vec![100.0, 110.0]).unwrap_err();
        assert_eq!(err, GeoError::MissingCoordinate { axis: "latitude" });
    }

    #[test]
    fn concat_time_stacks_in_order() {
        let a = two_by_two([1.0, 2.0, 3.0, 4.0]);
        let b = two_by_two([5.0, 6.0, 7.0, 8.0]);
        let joined = GriddedField::concat_time(&[a, b]).unwrap();
        assert_eq!(joined.n_times(), 2);
        assert_eq!(joined.data()[[0, 0, 0]], 1.0);
        assert_eq!(joined.data()[[1, 1, 1]], 8.0);
    }

    #[test]
    fn concat_time_rejects_different_axes() {
        let a = two_by_two([1.0, 2.0, 3.0, 4.0]);
        let data = Array3::zeros((1, 2, 2));
        let b = GriddedField::new(data, vec![20.0, 10.0], vec![100.0, 110.0]).unwrap();
        let err = GriddedField::concat_time(&[a, b]).unwrap_err();
        assert_eq!(err, GeoError::CoordinateMismatch { axis: "latitude" });
    }

    #[test]
    fn apply_mask_nans_excluded_cells() {
        let field = two_by_two([1.0, 2.0, 3.0, 4.0]);
        let mask = MaskGrid::new(
            array![[1.0, 0.0], [0.0, 1.0]],
            vec![10.0, 0.0],
            vec![100.0, 110.0],
        )
        .unwrap();

        let masked = field.apply_mask(&mask).unwrap();
        assert_eq!(masked.data()[[0, 0, 0]], 1.0);
        assert!(masked.data()[[0, 0, 1]].is_nan());
        assert!(masked.data()[[0, 1, 0]].is_nan());
        assert_eq!(masked.data()[[0, 1, 1]], 4.0);
    }

    #[test]
    fn apply_mask_rejects_mismatched_axes() {
        let field = two_by_two([1.0, 2.0, 3.0, 4.0]);
        let mask = MaskGrid::new(
            array![[1.0, 1.0], [1.0, 1.0]],
            vec![10.0, 0.0],
            vec![105.0, 115.0],
        )
        .unwrap();
        let err = field.apply_mask(&mask).unwrap_err();
        assert_eq!(err, GeoError::CoordinateMismatch { axis: "longitude" });
    }

    #[test]
    fn spatial_sum_skips_nan() {
        let field = two_by_two([1.0, f64::NAN, 3.0, 4.0]);
        let sums = field.spatial_sum();
        assert_eq!(sums.len(), 1);
        assert_relative_eq!(sums[0], 8.0);
    }

    #[test]
    fn spatial_sum_all_masked_is_zero() {
        let field = two_by_two([f64::NAN, f64::NAN, f64::NAN, f64::NAN]);
        assert_eq!(field.spatial_sum(), vec![0.0]);
    }
}
