//! Geographic bounding boxes.

/// A geographic bounding box in degrees.
///
/// Longitudes are expressed in `[-180, 180]`. A box with
/// `min_lon > max_lon` crosses the antimeridian (the western bound lies
/// east of 180°); [`crate::crop`] handles the coordinate rebasing that
/// selection then requires. Latitudes always satisfy `min_lat <= max_lat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its western, eastern, southern and
    /// northern bounds.
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Whether longitude selection for this box must cross the antimeridian.
    ///
    /// True when the western bound lies east of the eastern bound within
    /// `[-180, 180]`, or when either bound sits exactly on the meridian
    /// (±180°), where the two longitude conventions meet.
    pub fn crosses_antimeridian(&self) -> bool {
        (self.min_lon <= 180.0 && self.max_lon >= -180.0 && self.min_lon > self.max_lon)
            || self.min_lon == -180.0
            || self.max_lon == 180.0
    }

    /// Width of the box in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}
