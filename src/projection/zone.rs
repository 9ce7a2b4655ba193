//! UTM zone number and latitude band letter rules
//!
//! Zone numbers are 6° longitude strips with the Norway and Svalbard
//! exceptions. Band letters are 8° latitude strips from 80°S, except `X`
//! which covers 72°N to 84°N.

/// Latitude band letters from 80°S northwards, `I` and `O` excluded
pub const BAND_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Returned by [`letter_designator`] outside the MGRS latitude limits
pub const OUT_OF_RANGE_LETTER: char = 'Z';

const BAND_HEIGHT: f64 = 8.0;
const MIN_LATITUDE: f64 = -80.0;
const MAX_LATITUDE: f64 = 84.0;

/// Returns the latitude band letter for a latitude in degrees.
///
/// `X` for `[72, 84]`, `Z` outside `[-80, 84]`.
pub fn letter_designator(latitude: f64) -> char {
    if (72.0..=MAX_LATITUDE).contains(&latitude) {
        return 'X';
    }
    if !(MIN_LATITUDE..MAX_LATITUDE).contains(&latitude) {
        return OUT_OF_RANGE_LETTER;
    }

    let index = ((latitude - MIN_LATITUDE) / BAND_HEIGHT).floor() as usize;
    BAND_LETTERS
        .as_bytes()
        .get(index)
        .map(|&b| b as char)
        .unwrap_or(OUT_OF_RANGE_LETTER)
}

/// Returns the UTM zone number (1..=60) for a position in degrees.
pub fn utm_zone_number(longitude: f64, latitude: f64) -> u8 {
    if longitude == 180.0 {
        return 60;
    }

    // Norway
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    // Svalbard
    if (72.0..84.0).contains(&latitude) {
        if (0.0..9.0).contains(&longitude) {
            return 31;
        } else if (9.0..21.0).contains(&longitude) {
            return 33;
        } else if (21.0..33.0).contains(&longitude) {
            return 35;
        } else if (33.0..42.0).contains(&longitude) {
            return 37;
        }
    }

    (((longitude + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8
}

/// Central meridian of a zone in degrees
pub fn central_meridian(zone_number: u8) -> f64 {
    (f64::from(zone_number) - 1.0) * 6.0 - 180.0 + 3.0
}
