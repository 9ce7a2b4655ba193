//! Conversions between WGS84 positions and MGRS references

use crate::error::{Error, Result};
use crate::grid::{decode, encode};
use crate::projection::{ll_to_utm, utm_to_ll, GeoPoint};
use crate::types::{BoundingBox, Footprint};

/// Digits per numeric field when none is asked for (1 m)
pub const DEFAULT_ACCURACY: u8 = 5;

/// Southern limit of the MGRS latitude bands
pub const MIN_MGRS_LATITUDE: f64 = -80.0;
/// Northern limit of the MGRS latitude bands
pub const MAX_MGRS_LATITUDE: f64 = 84.0;

/// Converts a position to an MGRS reference.
///
/// # Arguments
/// * `point` - WGS84 position
/// * `accuracy` - digits per numeric field: 5 for 1 m, 4 for 10 m, 3 for
///   100 m, 2 for 1 km, 1 for 10 km
pub fn forward(point: GeoPoint, accuracy: u8) -> Result<String> {
    validate(point)?;
    encode(&ll_to_utm(point), accuracy)
}

fn validate(point: GeoPoint) -> Result<()> {
    let GeoPoint { longitude, latitude } = point;

    if !point.is_finite() {
        return Err(Error::InvalidInput { longitude, latitude });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::InvalidLongitude(longitude));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::InvalidLatitude(latitude));
    }
    if !(MIN_MGRS_LATITUDE..=MAX_MGRS_LATITUDE).contains(&latitude) {
        return Err(Error::PolarRegion(latitude));
    }
    Ok(())
}

/// Decodes and unprojects a reference
pub fn footprint(reference: &str) -> Result<Footprint> {
    let utm = decode(reference)?;
    utm_to_ll(&utm).ok_or(Error::InvalidZoneNumber(utm.zone_number))
}

/// Area denoted by an MGRS reference.
///
/// References that decode to a single point give a zero-area box.
pub fn inverse(reference: &str) -> Result<BoundingBox> {
    footprint(reference).map(|f| f.bounds())
}

/// Position of an MGRS reference: the point itself, or the center of the
/// square a partial-precision reference denotes.
pub fn to_point(reference: &str) -> Result<GeoPoint> {
    if reference.is_empty() {
        return Err(Error::BlankReference);
    }
    footprint(reference).map(|f| f.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_forward_reference_points() {
        assert_eq!(forward(GeoPoint::new(0.0, 0.0), 5).unwrap(), "31NAA6602100000");
        assert_eq!(forward(GeoPoint::new(0.0, 0.00001), 5).unwrap(), "31NAA6602100001");
        assert_eq!(
            forward(GeoPoint::new(-115.0820944, 36.2361322), DEFAULT_ACCURACY).unwrap(),
            "11SPA7234911844"
        );
    }

    #[test]
    fn test_forward_range_errors() {
        assert_eq!(
            forward(GeoPoint::new(190.0, 0.0), 5),
            Err(Error::InvalidLongitude(190.0))
        );
        assert_eq!(
            forward(GeoPoint::new(90.0, 180.0), 5),
            Err(Error::InvalidLatitude(180.0))
        );
        assert_eq!(
            forward(GeoPoint::new(45.0, -88.0), 5),
            Err(Error::PolarRegion(-88.0))
        );
        assert_eq!(
            forward(GeoPoint::new(45.0, 84.5), 5).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_forward_non_finite() {
        let err = forward(GeoPoint::new(f64::NAN, 10.0), 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputShape);
    }

    #[test]
    fn test_forward_band_limits() {
        assert!(forward(GeoPoint::new(10.0, 84.0), 5).unwrap().starts_with("32X"));
        assert!(forward(GeoPoint::new(10.0, -80.0), 5).unwrap().starts_with("32C"));
    }

    #[test]
    fn test_inverse_partial_precision() {
        let bbox = inverse("33UXP04").unwrap();
        assert!(bbox.left < bbox.right);
        assert!(bbox.bottom < bbox.top);
        let center = bbox.center();
        assert_abs_diff_eq!(center.longitude, 16.41450, epsilon = 1e-5);
        assert_abs_diff_eq!(center.latitude, 48.24949, epsilon = 1e-5);
    }

    #[test]
    fn test_inverse_bare_square_is_degenerate() {
        let bbox = inverse("31NAA").unwrap();
        assert!(bbox.is_degenerate());
        assert_abs_diff_eq!(bbox.bottom, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_invalid_zone_number() {
        assert_eq!(inverse("99NAA"), Err(Error::InvalidZoneNumber(99)));
    }

    #[test]
    fn test_to_point_blank() {
        assert_eq!(to_point(""), Err(Error::BlankReference));
        assert_eq!(
            to_point("").unwrap_err().to_string(),
            "Argument `mgrs` cannot be a blank string"
        );
    }

    #[test]
    fn test_to_point_lowercase() {
        assert_eq!(to_point("33uxp04"), to_point("33UXP04"));
    }
}
