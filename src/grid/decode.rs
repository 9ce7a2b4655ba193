//! MGRS reference parsing
//!
//! Grammar, after removing whitespace and upper-casing:
//! `<zone 1-2 digits><band letter><column letter><row letter><N digits><N digits>`
//! with `N` between 0 and 5.

use crate::error::{Error, Result};
use crate::grid::encode::MAX_DIGITS;
use crate::grid::tables::{column_of, min_northing, row_of, set_for_zone, ROW_CYCLE, SQUARE_SIZE};
use crate::types::UtmCoordinate;

/// Letters accepted as latitude band
fn is_band_letter(letter: char) -> bool {
    matches!(letter, 'C'..='X') && letter != 'I' && letter != 'O'
}

/// Normalizes a reference: whitespace removed, ASCII upper case
pub fn normalize(reference: &str) -> String {
    reference
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Decodes an MGRS reference into the UTM coordinate of its lower-left corner.
///
/// References with easting/northing digits carry the side of the square
/// they denote as `accuracy`. A bare 100 km square reference has none and
/// decodes to the corner of the square.
pub fn decode(reference: &str) -> Result<UtmCoordinate> {
    let reference = normalize(reference);
    if reference.is_empty() {
        return Err(Error::BlankReference);
    }
    let malformed = || Error::MalformedReference {
        reference: reference.clone(),
    };

    let chars: Vec<char> = reference.chars().collect();

    let zone_digits = chars.iter().take_while(|c| c.is_ascii_digit()).count();
    if zone_digits == 0 || zone_digits > 2 || zone_digits + 3 > chars.len() {
        return Err(malformed());
    }
    let zone_number: u8 = reference[..zone_digits].parse().map_err(|_| malformed())?;

    let zone_letter = chars[zone_digits];
    if !zone_letter.is_ascii_uppercase() {
        return Err(malformed());
    }
    if !is_band_letter(zone_letter) {
        return Err(Error::InvalidZoneLetter {
            letter: zone_letter,
            reference: reference.clone(),
        });
    }

    let set = set_for_zone(zone_number);
    let east_100k = easting_from_char(chars[zone_digits + 1], set)?;
    let mut north_100k = northing_from_char(chars[zone_digits + 2], set)?;

    // Row letters repeat every 2000 km; lift the northing into the band
    let band_floor = min_northing(zone_letter).ok_or_else(|| Error::InvalidZoneLetter {
        letter: zone_letter,
        reference: reference.clone(),
    })?;
    while north_100k < band_floor {
        north_100k += ROW_CYCLE;
    }

    let digits = &chars[zone_digits + 3..];
    if digits.len() % 2 != 0 {
        return Err(Error::OddDigitCount { reference });
    }
    if !digits.iter().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidDigits { reference });
    }
    let half = digits.len() / 2;
    if half > usize::from(MAX_DIGITS) {
        return Err(Error::TooManyDigits { reference });
    }

    let mut utm = UtmCoordinate::new(east_100k, north_100k, zone_number, zone_letter);
    if half > 0 {
        let accuracy = SQUARE_SIZE / 10f64.powi(half as i32);
        utm.easting += digit_value(&digits[..half]) * accuracy;
        utm.northing += digit_value(&digits[half..]) * accuracy;
        utm = utm.with_accuracy(accuracy);
    }

    log::debug!("decoded {} to {:?}", reference, utm);
    Ok(utm)
}

/// Easting of the west edge of the column lettered `letter`
pub fn easting_from_char(letter: char, set: u8) -> Result<f64> {
    column_of(set, letter)
        .map(|column| f64::from(column) * SQUARE_SIZE)
        .ok_or(Error::BadCharacter(letter))
}

/// Northing of the south edge of the row lettered `letter`, within the
/// first 2000 km cycle
pub fn northing_from_char(letter: char, set: u8) -> Result<f64> {
    if letter > 'V' {
        return Err(Error::InvalidNorthingLetter(letter));
    }
    row_of(set, letter)
        .map(|row| f64::from(row) * SQUARE_SIZE)
        .ok_or(Error::BadCharacter(letter))
}

fn digit_value(digits: &[char]) -> f64 {
    digits
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0.0, |acc, d| acc * 10.0 + f64::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_precision() {
        let utm = decode("33UXP04").unwrap();
        assert_eq!(utm.zone_number, 33);
        assert_eq!(utm.zone_letter, 'U');
        assert_eq!(utm.easting, 600_000.0);
        assert_eq!(utm.northing, 5_340_000.0);
        assert_eq!(utm.accuracy, Some(10_000.0));
    }

    #[test]
    fn test_decode_full_precision() {
        let utm = decode("11SPA7234911844").unwrap();
        assert_eq!(utm.zone_number, 11);
        assert_eq!(utm.easting, 672_349.0);
        assert_eq!(utm.northing, 4_011_844.0);
        assert_eq!(utm.accuracy, Some(1.0));
    }

    #[test]
    fn test_decode_bare_square() {
        let utm = decode("31NAA").unwrap();
        assert_eq!(utm.easting, 100_000.0);
        assert_eq!(utm.northing, 0.0);
        assert_eq!(utm.accuracy, None);
    }

    #[test]
    fn test_decode_normalizes() {
        assert_eq!(decode("4qfj 12345 67890"), decode("4QFJ1234567890"));
        assert_eq!(decode("\t33uxp04 "), decode("33UXP04"));
    }

    #[test]
    fn test_southern_band_rollover() {
        // Set 6 rows start at F, so K is row 4; band H starts at 5500 km
        let utm = decode("54HVK").unwrap();
        assert_eq!(utm.northing, 6_400_000.0);
        assert!(utm.northing >= 5_500_000.0);
    }

    #[test]
    fn test_blank() {
        assert_eq!(decode(""), Err(Error::BlankReference));
        assert_eq!(decode("   "), Err(Error::BlankReference));
    }

    #[test]
    fn test_zone_digits() {
        assert!(matches!(decode("123UXP04"), Err(Error::MalformedReference { .. })));
        assert!(matches!(decode("UXP04"), Err(Error::MalformedReference { .. })));
        assert!(matches!(decode("33U"), Err(Error::MalformedReference { .. })));
        assert!(matches!(decode("33UX"), Err(Error::MalformedReference { .. })));
        assert!(matches!(decode("3-UXP"), Err(Error::MalformedReference { .. })));
    }

    #[test]
    fn test_rejected_band_letters() {
        for letter in ['A', 'B', 'I', 'O', 'Y', 'Z'] {
            let reference = format!("33{}XP04", letter);
            match decode(&reference) {
                Err(Error::InvalidZoneLetter { letter: found, .. }) => assert_eq!(found, letter),
                other => panic!("{} decoded to {:?}", reference, other),
            }
        }
    }

    #[test]
    fn test_odd_digit_count() {
        assert!(matches!(decode("33UXP045"), Err(Error::OddDigitCount { .. })));
    }

    #[test]
    fn test_non_digit_suffix() {
        assert!(matches!(decode("33UXP0A"), Err(Error::InvalidDigits { .. })));
    }

    #[test]
    fn test_too_many_digits() {
        assert!(matches!(
            decode("33UXP050041444997"),
            Err(Error::TooManyDigits { .. })
        ));
    }

    #[test]
    fn test_bad_grid_letters() {
        assert_eq!(decode("33UIP04"), Err(Error::BadCharacter('I')));
        assert_eq!(decode("33U1P04"), Err(Error::BadCharacter('1')));
        assert_eq!(decode("33UXW04"), Err(Error::InvalidNorthingLetter('W')));
        assert_eq!(decode("33UXO04"), Err(Error::BadCharacter('O')));
    }

    #[test]
    fn test_easting_from_char() {
        assert_eq!(easting_from_char('A', 1).unwrap(), 100_000.0);
        assert_eq!(easting_from_char('H', 1).unwrap(), 800_000.0);
        assert_eq!(easting_from_char('S', 3).unwrap(), 100_000.0);
        assert_eq!(easting_from_char('X', 3).unwrap(), 600_000.0);
        assert_eq!(easting_from_char('A', 2).unwrap(), 1_700_000.0);
    }

    #[test]
    fn test_northing_from_char() {
        assert_eq!(northing_from_char('A', 1).unwrap(), 0.0);
        assert_eq!(northing_from_char('V', 1).unwrap(), 1_900_000.0);
        assert_eq!(northing_from_char('F', 2).unwrap(), 0.0);
        assert_eq!(northing_from_char('A', 2).unwrap(), 1_500_000.0);
    }
}
