//! The closed registry of ocean basins.

use std::fmt;
use std::str::FromStr;

use crate::bbox::BoundingBox;
use crate::error::GeoError;

/// An ocean basin with canonical geographic bounds for cyclone analysis.
///
/// The registry is closed: geometry is defined once here, and downstream
/// code dispatches on the variant instead of repeating bounding-box
/// literals. The South Pacific box crosses the antimeridian, which
/// [`crate::crop`] resolves by rebasing longitudes into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basin {
    /// Northwest Pacific.
    Nwp,
    /// Northeast Pacific.
    Nep,
    /// North Atlantic.
    Na,
    /// North Indian.
    Ni,
    /// South Pacific.
    Sp,
    /// South Indian.
    Si,
    /// Global (40°S to 40°N, all longitudes); applies neither crop nor mask.
    Glb,
}

/// All basins in the registry.
pub const ALL_BASINS: [Basin; 7] = [
    Basin::Nwp,
    Basin::Nep,
    Basin::Na,
    Basin::Ni,
    Basin::Sp,
    Basin::Si,
    Basin::Glb,
];

impl Basin {
    /// Returns the canonical bounding box for this basin.
    ///
    /// GLB uses the full-globe sentinel `-181..181` so that even grids
    /// stated in either longitude convention fall inside it.
    pub fn bounding_box(self) -> BoundingBox {
        match self {
            Basin::Nwp => BoundingBox::new(100.0, 180.0, 0.0, 40.0),
            Basin::Nep => BoundingBox::new(-180.0, -75.0, 0.0, 40.0),
            Basin::Na => BoundingBox::new(-100.0, 0.0, 0.0, 40.0),
            Basin::Ni => BoundingBox::new(45.0, 100.0, 0.0, 40.0),
            Basin::Sp => BoundingBox::new(135.0, -70.0, -40.0, 0.0),
            Basin::Si => BoundingBox::new(35.0, 135.0, -40.0, 0.0),
            Basin::Glb => BoundingBox::new(-181.0, 181.0, -40.0, 40.0),
        }
    }

    /// Whether cropping to this basin must be followed by an ocean mask.
    ///
    /// The Northeast Pacific and North Atlantic boxes overlap land and the
    /// neighbouring basin, so they carry a basin-specific mask raster.
    pub fn requires_mask(self) -> bool {
        matches!(self, Basin::Nep | Basin::Na)
    }

    /// Whether this is the global pseudo-basin (no crop, no mask).
    pub fn is_global(self) -> bool {
        matches!(self, Basin::Glb)
    }

    /// The canonical identifier used in file names and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Basin::Nwp => "NWP",
            Basin::Nep => "NEP",
            Basin::Na => "NA",
            Basin::Ni => "NI",
            Basin::Sp => "SP",
            Basin::Si => "SI",
            Basin::Glb => "GLB",
        }
    }
}

impl FromStr for Basin {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NWP" => Ok(Basin::Nwp),
            "NEP" => Ok(Basin::Nep),
            "NA" => Ok(Basin::Na),
            "NI" => Ok(Basin::Ni),
            "SP" => Ok(Basin::Sp),
            "SI" => Ok(Basin::Si),
            "GLB" => Ok(Basin::Glb),
            other => Err(GeoError::UnknownBasin {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
