//! WGS84 positions, UTM zones and the Transverse Mercator projection

pub mod coordinate;
pub mod transformer;
pub mod zone;

pub use coordinate::GeoPoint;
pub use transformer::{ll_to_utm, utm_to_ll};
pub use zone::{letter_designator, utm_zone_number};
