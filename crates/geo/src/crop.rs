//! Closed-interval cropping of gridded fields, antimeridian included.

use std::cmp::Ordering;

use ndarray::Axis;

use crate::bbox::BoundingBox;
use crate::field::GriddedField;

/// Crops a field to the grid points inside `bbox`.
///
/// When the request crosses the antimeridian (see
/// [`BoundingBox::crosses_antimeridian`]), the field's longitudes are
/// rebased into `[0, 360)` via `(lon + 360) mod 360`, the columns are
/// re-sorted ascending, and negative bounds are shifted by +360 before
/// selection. The returned field's longitude axis is then in the rebased
/// convention.
///
/// Selection is the closed interval `[west, east] × [south, north]`.
/// Latitude is taken in the field's native order (north to south on the
/// reanalysis grids this pipeline consumes). An empty or single-point
/// result is valid and returned as-is.
pub fn crop(field: &GriddedField, bbox: &BoundingBox) -> GriddedField {
    let mut west = bbox.min_lon;
    let mut east = bbox.max_lon;

    // Resolve the longitude axis: (original column index, coordinate value)
    // in selection order.
    let columns: Vec<(usize, f64)> = if bbox.crosses_antimeridian() {
        let mut rebased: Vec<(usize, f64)> = field
            .lons()
            .iter()
            .enumerate()
            .map(|(i, &lon)| (i, (lon + 360.0) % 360.0))
            .collect();
        rebased.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        if west < 0.0 {
            west += 360.0;
        }
        if east < 0.0 {
            east += 360.0;
        }
        rebased
    } else {
        field.lons().iter().copied().enumerate().collect()
    };

    let lon_sel: Vec<(usize, f64)> = columns
        .into_iter()
        .filter(|&(_, lon)| lon >= west && lon <= east)
        .collect();
    let lat_sel: Vec<(usize, f64)> = field
        .lats()
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, lat)| lat >= bbox.min_lat && lat <= bbox.max_lat)
        .collect();

    let lat_idx: Vec<usize> = lat_sel.iter().map(|&(i, _)| i).collect();
    let lon_idx: Vec<usize> = lon_sel.iter().map(|&(i, _)| i).collect();

    let data = field
        .data()
        .select(Axis(1), &lat_idx)
        .select(Axis(2), &lon_idx);
    let lats = lat_sel.into_iter().map(|(_, lat)| lat).collect();
    let lons = lon_sel.into_iter().map(|(_, lon)| lon).collect();

    GriddedField::from_parts(data, lats, lons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    /// A 1-timestep global field whose cell value encodes its position as
    /// `lat * 1000 + lon` (in the original -180..180 convention).
    fn global_field() -> GriddedField {
        let lats: Vec<f64> = (-80..=80).rev().step_by(10).map(f64::from).collect();
        let lons: Vec<f64> = (-180..180).step_by(5).map(f64::from).collect();
        let mut data = Array3::zeros((1, lats.len(), lons.len()));
        for (y, &lat) in lats.iter().enumerate() {
            for (x, &lon) in lons.iter().enumerate() {
                data[[0, y, x]] = lat * 1000.0 + lon;
            }
        }
        GriddedField::new(data, lats, lons).unwrap()
    }

    #[test]
    fn plain_crop_keeps_only_box() {
        // North Indian: no antimeridian involvement at all.
        let field = global_field();
        let cropped = crop(&field, &BoundingBox::new(45.0, 100.0, 0.0, 40.0));

        assert!(cropped.lons().iter().all(|&l| (45.0..=100.0).contains(&l)));
        assert!(cropped.lats().iter().all(|&l| (0.0..=40.0).contains(&l)));
        // Native north-to-south order preserved.
        assert!(cropped.lats().windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn nwp_crop_selects_100_to_180() {
        let field = global_field();
        let cropped = crop(&field, &BoundingBox::new(100.0, 180.0, 0.0, 40.0));

        // Touching +180 rebases into [0, 360), where [100, 180] selects the
        // same points the original convention would.
        assert!(
            cropped
                .lons()
                .iter()
                .all(|&l| (100.0..=180.0).contains(&l))
        );
        assert!(cropped.lats().iter().all(|&l| (0.0..=40.0).contains(&l)));
        assert!(!cropped.lons().is_empty());

        // The grid point stored at -180 is the 180°E meridian itself and
        // must be retained after rebasing.
        assert!(cropped.lons().contains(&180.0));

        // Every cell still encodes the coordinate it sits under.
        for (y, &lat) in cropped.lats().iter().enumerate() {
            for (x, &lon) in cropped.lons().iter().enumerate() {
                let original_lon = if lon >= 180.0 { lon - 360.0 } else { lon };
                assert_eq!(cropped.data()[[0, y, x]], lat * 1000.0 + original_lon);
            }
        }
    }

    #[test]
    fn sp_crop_crosses_antimeridian() {
        let field = global_field();
        // South Pacific: 135°E eastward across the dateline to 70°W,
        // i.e. [135, 290] after rebasing.
        let cropped = crop(&field, &BoundingBox::new(135.0, -70.0, -40.0, 0.0));

        assert!(
            cropped
                .lons()
                .iter()
                .all(|&l| (135.0..=290.0).contains(&l))
        );
        // -75°W rebases to 285 and is retained.
        assert!(cropped.lons().contains(&285.0));
        // 50°E is outside the box on either side of the dateline.
        assert!(!cropped.lons().contains(&50.0));
        // Rebased axis is sorted ascending.
        assert!(cropped.lons().windows(2).all(|w| w[0] < w[1]));
        assert!(cropped.lats().iter().all(|&l| (-40.0..=0.0).contains(&l)));
    }

    #[test]
    fn sp_crop_reorders_data_with_axis() {
        let field = global_field();
        let cropped = crop(&field, &BoundingBox::new(135.0, -70.0, -40.0, 0.0));

        // Every cell value must still encode the coordinate it sits under,
        // modulo the rebasing of the longitude axis.
        for (y, &lat) in cropped.lats().iter().enumerate() {
            for (x, &lon) in cropped.lons().iter().enumerate() {
                let original_lon = if lon >= 180.0 { lon - 360.0 } else { lon };
                let expected = lat * 1000.0 + original_lon;
                assert_eq!(cropped.data()[[0, y, x]], expected);
            }
        }
    }

    #[test]
    fn empty_selection_is_valid() {
        let field = global_field();
        let cropped = crop(&field, &BoundingBox::new(0.0, 1.0, 81.0, 89.0));
        assert!(cropped.lats().is_empty());
        assert_eq!(cropped.data().dim().1, 0);
        assert_eq!(cropped.spatial_sum(), vec![0.0]);
    }

    #[test]
    fn single_point_selection_is_valid() {
        let field = global_field();
        let cropped = crop(&field, &BoundingBox::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(cropped.lats(), &[10.0]);
        assert_eq!(cropped.lons(), &[5.0]);
        assert_eq!(cropped.data()[[0, 0, 0]], 10_005.0);
    }

    #[test]
    fn full_globe_sentinel_selects_everything() {
        let field = global_field();
        let cropped = crop(&field, &BoundingBox::new(-181.0, 181.0, -90.0, 90.0));
        assert_eq!(cropped.lats().len(), field.lats().len());
        assert_eq!(cropped.lons().len(), field.lons().len());
    }
}
