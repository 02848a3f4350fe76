//! Target construction: monthly genesis counts for a basin.

use tracing::{debug, info};
use typhon_calendar::MonthStamp;
use typhon_geo::{Basin, GriddedField, crop};
use typhon_io::GridSource;

use crate::error::DatasetError;
use crate::series::TargetSeries;

/// Builds the monthly event-count target for `basin` over `calendar`.
///
/// Yearly fields are loaded in chronological order and concatenated along
/// time, the result is cropped to the basin's bounding box (the global
/// basin skips cropping), the ocean mask is applied where the basin
/// requires one, and each timestep is summed over the surviving cells.
/// Sums are rounded to integer counts.
///
/// # Errors
///
/// Propagates load and geometry failures, and returns
/// [`DatasetError::LengthMismatch`] if the concatenated fields do not
/// carry one timestep per calendar month.
pub fn build_target(
    basin: Basin,
    source: &dyn GridSource,
    calendar: &[MonthStamp],
) -> Result<TargetSeries, DatasetError> {
    let first_year = calendar.first().copied().map(MonthStamp::year);
    let last_year = calendar.last().copied().map(MonthStamp::year);
    let (Some(first_year), Some(last_year)) = (first_year, last_year) else {
        return TargetSeries::new(Vec::new(), Vec::new());
    };

    let mut yearly = Vec::with_capacity((last_year - first_year + 1) as usize);
    for year in first_year..=last_year {
        debug!(year, "loading gridded field");
        yearly.push(source.load_year(year)?);
    }
    let field = GriddedField::concat_time(&yearly)?;

    let regional = if basin.is_global() {
        field
    } else {
        crop(&field, &basin.bounding_box())
    };
    let regional = if basin.requires_mask() {
        let mask = source.load_mask(basin)?;
        regional.apply_mask(&mask)?
    } else {
        regional
    };

    let sums = regional.spatial_sum();
    if sums.len() != calendar.len() {
        return Err(DatasetError::LengthMismatch {
            what: "target series".into(),
            expected: calendar.len(),
            got: sums.len(),
        });
    }
    let counts: Vec<i64> = sums.iter().map(|s| s.round() as i64).collect();
    info!(
        basin = basin.as_str(),
        months = counts.len(),
        total = counts.iter().sum::<i64>(),
        "target series built"
    );
    TargetSeries::new(calendar.to_vec(), counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};
    use typhon_calendar::monthly_sequence;
    use typhon_geo::MaskGrid;
    use typhon_io::MemoryGridSource;

    fn lats() -> Vec<f64> {
        vec![20.0, 10.0]
    }

    fn lons() -> Vec<f64> {
        vec![-90.0, -80.0]
    }

    /// One event per month in every cell, scaled by the year offset.
    fn year_field(scale: f64) -> GriddedField {
        GriddedField::new(Array3::from_elem((12, 2, 2), scale), lats(), lons()).unwrap()
    }

    #[test]
    fn concatenates_years_and_sums_cells() {
        let mut source = MemoryGridSource::new();
        source.insert_year(2000, year_field(1.0));
        source.insert_year(2001, year_field(2.0));
        // Both test cells sit inside the NA box and on ocean.
        let mask = MaskGrid::new(Array2::from_elem((2, 2), 1.0), lats(), lons()).unwrap();
        source.insert_mask(Basin::Na, mask);
        let calendar = monthly_sequence(2000, 2001).unwrap();

        let target = build_target(Basin::Na, &source, &calendar).unwrap();
        assert_eq!(target.len(), 24);
        assert!(target.counts()[..12].iter().all(|&c| c == 4));
        assert!(target.counts()[12..].iter().all(|&c| c == 8));
    }

    #[test]
    fn mask_removes_cells_from_the_sum() {
        let mut source = MemoryGridSource::new();
        source.insert_year(2000, year_field(1.0));
        let mask = MaskGrid::new(
            ndarray::array![[1.0, 0.0], [0.0, 0.0]],
            lats(),
            lons(),
        )
        .unwrap();
        source.insert_mask(Basin::Na, mask);
        let calendar = monthly_sequence(2000, 2000).unwrap();

        let target = build_target(Basin::Na, &source, &calendar).unwrap();
        assert!(target.counts().iter().all(|&c| c == 1));
    }

    #[test]
    fn missing_year_propagates() {
        let mut source = MemoryGridSource::new();
        source.insert_year(2000, year_field(1.0));
        let calendar = monthly_sequence(2000, 2001).unwrap();

        let err = build_target(Basin::Glb, &source, &calendar).unwrap_err();
        assert!(err.to_string().contains("2001"), "{err}");
    }

    #[test]
    fn global_basin_skips_cropping() {
        let mut source = MemoryGridSource::new();
        source.insert_year(2000, year_field(1.0));
        let calendar = monthly_sequence(2000, 2000).unwrap();

        let target = build_target(Basin::Glb, &source, &calendar).unwrap();
        assert!(target.counts().iter().all(|&c| c == 4));
    }

    #[test]
    fn empty_calendar_yields_empty_target() {
        let source = MemoryGridSource::new();
        let target = build_target(Basin::Glb, &source, &[]).unwrap();
        assert!(target.is_empty());
    }
}
