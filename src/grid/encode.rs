//! UTM to MGRS reference encoding

use crate::error::{Error, Result};
use crate::grid::tables::{column_letter, row_letter, set_for_zone, SQUARE_SIZE};
use crate::types::UtmCoordinate;

/// Most digits per numeric field, one meter resolution
pub const MAX_DIGITS: u8 = 5;

/// Two-letter designator of the 100 km square holding a UTM position
pub fn get_100k_id(easting: f64, northing: f64, zone_number: u8) -> String {
    let set = set_for_zone(zone_number);
    let column = (easting / SQUARE_SIZE).floor() as i64;
    let row = ((northing / SQUARE_SIZE).floor() as i64).rem_euclid(20);

    let mut id = String::with_capacity(2);
    id.push(column_letter(set, column));
    id.push(row_letter(set, row));
    id
}

/// Encodes a UTM position as an MGRS reference with `digits` digits for
/// each of easting and northing.
///
/// Coarser references truncate the finer digits, they never round.
pub fn encode(utm: &UtmCoordinate, digits: u8) -> Result<String> {
    if !(1..=MAX_DIGITS).contains(&digits) {
        return Err(Error::InvalidAccuracy(digits));
    }

    let width = usize::from(digits);
    let easting = within_square(utm.easting);
    let northing = within_square(utm.northing);

    Ok(format!(
        "{}{}{}{}{}",
        utm.zone_number,
        utm.zone_letter,
        get_100k_id(utm.easting, utm.northing, utm.zone_number),
        &easting[..width],
        &northing[..width],
    ))
}

/// Meters inside the 100 km square, zero-padded to five digits
fn within_square(meters: f64) -> String {
    let remainder = (meters.trunc() as i64).rem_euclid(SQUARE_SIZE as i64);
    format!("{:05}", remainder)
}
