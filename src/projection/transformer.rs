//! Transverse Mercator series between WGS84 degrees and UTM meters
//!
//! Redfearn/USGS formulation (USGS Bulletin 1532, p. 84). The forward
//! result is truncated to whole meters, which is the resolution the MGRS
//! encoder works at.

use crate::projection::coordinate::GeoPoint;
use crate::projection::zone::{central_meridian, letter_designator, utm_zone_number};
use crate::types::{BoundingBox, Footprint, UtmCoordinate};

/// WGS84 semi-major axis in meters
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
/// WGS84 first eccentricity squared
pub const ECCENTRICITY_SQUARED: f64 = 0.00669438;
/// UTM scale factor on the central meridian
pub const SCALE_FACTOR: f64 = 0.9996;
pub const FALSE_EASTING: f64 = 500_000.0;
/// Added to northings south of the equator
pub const SOUTHERN_FALSE_NORTHING: f64 = 10_000_000.0;

/// Highest zone number accepted by [`utm_to_ll`]
pub const MAX_ZONE_NUMBER: u8 = 60;

const ECC_PRIME_SQUARED: f64 = ECCENTRICITY_SQUARED / (1.0 - ECCENTRICITY_SQUARED);

/// Projects a position to UTM, truncating easting and northing to meters.
///
/// The caller is responsible for keeping latitude inside the MGRS bands;
/// outside them the zone letter comes back as `Z`.
pub fn ll_to_utm(point: GeoPoint) -> UtmCoordinate {
    let zone_number = utm_zone_number(point.longitude, point.latitude);

    let lat_rad = point.latitude.to_radians();
    let long_rad = point.longitude.to_radians();
    let long_origin_rad = central_meridian(zone_number).to_radians();

    let e = ECCENTRICITY_SQUARED;
    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let tan_lat = lat_rad.tan();

    let n = SEMI_MAJOR_AXIS / (1.0 - e * sin_lat * sin_lat).sqrt();
    let t = tan_lat * tan_lat;
    let c = ECC_PRIME_SQUARED * cos_lat * cos_lat;
    let a = cos_lat * (long_rad - long_origin_rad);

    let m = SEMI_MAJOR_AXIS
        * ((1.0 - e / 4.0 - 3.0 * e * e / 64.0 - 5.0 * e * e * e / 256.0) * lat_rad
            - (3.0 * e / 8.0 + 3.0 * e * e / 32.0 + 45.0 * e * e * e / 1024.0) * (2.0 * lat_rad).sin()
            + (15.0 * e * e / 256.0 + 45.0 * e * e * e / 1024.0) * (4.0 * lat_rad).sin()
            - (35.0 * e * e * e / 3072.0) * (6.0 * lat_rad).sin());

    let easting = SCALE_FACTOR
        * n
        * (a + (1.0 - t + c) * a * a * a / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ECC_PRIME_SQUARED) * a * a * a * a * a / 120.0)
        + FALSE_EASTING;

    let mut northing = SCALE_FACTOR
        * (m + n
            * tan_lat
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a * a * a * a / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ECC_PRIME_SQUARED) * a * a * a * a * a * a
                    / 720.0));

    if point.latitude < 0.0 {
        northing += SOUTHERN_FALSE_NORTHING;
    }

    let utm = UtmCoordinate::new(
        easting.trunc(),
        northing.trunc(),
        zone_number,
        letter_designator(point.latitude),
    );
    log::debug!("projected {:?} to {:?}", point, utm);
    utm
}

/// Unprojects a UTM coordinate.
///
/// A coordinate carrying an accuracy yields the area spanned by its
/// lower-left corner and the corner `accuracy` meters north-east of it.
/// Returns `None` for a zone number above 60.
pub fn utm_to_ll(utm: &UtmCoordinate) -> Option<Footprint> {
    if utm.zone_number > MAX_ZONE_NUMBER {
        return None;
    }

    let corner = unproject(utm);
    let footprint = match utm.accuracy {
        Some(accuracy) => {
            let top_right = unproject(&UtmCoordinate::new(
                utm.easting + accuracy,
                utm.northing + accuracy,
                utm.zone_number,
                utm.zone_letter,
            ));
            Footprint::Area(BoundingBox::new(
                corner.longitude,
                corner.latitude,
                top_right.longitude,
                top_right.latitude,
            ))
        }
        None => Footprint::Point(corner),
    };
    Some(footprint)
}

fn unproject(utm: &UtmCoordinate) -> GeoPoint {
    let e = ECCENTRICITY_SQUARED;
    let e1 = (1.0 - (1.0 - e).sqrt()) / (1.0 + (1.0 - e).sqrt());

    let x = utm.easting - FALSE_EASTING;
    let mut y = utm.northing;
    // Hemisphere comes from the band letter, never from the northing itself
    if utm.is_southern() {
        y -= SOUTHERN_FALSE_NORTHING;
    }

    let m = y / SCALE_FACTOR;
    let mu = m / (SEMI_MAJOR_AXIS * (1.0 - e / 4.0 - 3.0 * e * e / 64.0 - 5.0 * e * e * e / 256.0));

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1 * e1 * e1 / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1 * e1 / 16.0 - 55.0 * e1 * e1 * e1 * e1 / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1 * e1 * e1 / 96.0) * (6.0 * mu).sin();

    let sin_phi1 = phi1.sin();
    let cos_phi1 = phi1.cos();
    let tan_phi1 = phi1.tan();

    let n1 = SEMI_MAJOR_AXIS / (1.0 - e * sin_phi1 * sin_phi1).sqrt();
    let t1 = tan_phi1 * tan_phi1;
    let c1 = ECC_PRIME_SQUARED * cos_phi1 * cos_phi1;
    let r1 = SEMI_MAJOR_AXIS * (1.0 - e) / (1.0 - e * sin_phi1 * sin_phi1).powf(1.5);
    let d = x / (n1 * SCALE_FACTOR);

    let lat = phi1
        - (n1 * tan_phi1 / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ECC_PRIME_SQUARED) * d * d * d * d / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ECC_PRIME_SQUARED
                    - 3.0 * c1 * c1)
                    * d * d * d * d * d * d
                    / 720.0);

    let lon = (d - (1.0 + 2.0 * t1 + c1) * d * d * d / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ECC_PRIME_SQUARED + 24.0 * t1 * t1)
            * d * d * d * d * d
            / 120.0)
        / cos_phi1;

    GeoPoint::new(
        central_meridian(utm.zone_number) + lon.to_degrees(),
        lat.to_degrees(),
    )
}
