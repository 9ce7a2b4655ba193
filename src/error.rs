//! Error types for mgrs-convert

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a conversion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Coordinate pair is not a usable pair of numbers
    InputShape,
    /// Coordinate or accuracy outside the supported range
    Range,
    /// Empty reference string
    Blank,
    /// MGRS reference does not follow the grammar
    Grammar,
    /// Grid letter never matched within one alphabet wrap
    LookupExhausted,
    /// UTM zone number cannot be projected
    InvalidZone,
}

impl ErrorKind {
    /// Returns the name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InputShape => "input_shape",
            ErrorKind::Range => "range",
            ErrorKind::Blank => "blank",
            ErrorKind::Grammar => "grammar",
            ErrorKind::LookupExhausted => "lookup_exhausted",
            ErrorKind::InvalidZone => "invalid_zone",
        }
    }
}

/// Error types that can occur while converting coordinates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Non-finite longitude or latitude
    #[error("forward received a non-numeric coordinate pair ({longitude}, {latitude})")]
    InvalidInput { longitude: f64, latitude: f64 },

    #[error("forward received an invalid longitude of {0}")]
    InvalidLongitude(f64),

    #[error("forward received an invalid latitude of {0}")]
    InvalidLatitude(f64),

    /// Latitude valid on the globe but outside the MGRS bands
    #[error("forward received a latitude of {0}, but this library does not support conversions of points in polar regions below 80°S and above 84°N")]
    PolarRegion(f64),

    /// Number of digits per numeric field outside 1..=5
    #[error("forward received an invalid accuracy of {0}, expected 1 to 5 digits")]
    InvalidAccuracy(u8),

    #[error("Argument `mgrs` cannot be a blank string")]
    BlankReference,

    #[error("MGRSPoint bad conversion from: {reference}")]
    MalformedReference { reference: String },

    #[error("MGRSPoint zone letter {letter} not handled: {reference}")]
    InvalidZoneLetter { letter: char, reference: String },

    #[error("MGRSPoint has to have an even number of digits after the zone letter and two 100km letters: {reference}")]
    OddDigitCount { reference: String },

    #[error("MGRSPoint easting and northing must be decimal digits: {reference}")]
    InvalidDigits { reference: String },

    #[error("MGRSPoint supports at most 5 digits each for easting and northing: {reference}")]
    TooManyDigits { reference: String },

    /// Grid letter not found in the 100k alphabet
    #[error("Bad character: {0}")]
    BadCharacter(char),

    #[error("MGRSPoint given invalid Northing {0}")]
    InvalidNorthingLetter(char),

    #[error("Invalid UTM zone number: {0}")]
    InvalidZoneNumber(u8),
}

impl Error {
    /// Classifies this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InputShape,
            Error::InvalidLongitude(_)
            | Error::InvalidLatitude(_)
            | Error::PolarRegion(_)
            | Error::InvalidAccuracy(_) => ErrorKind::Range,
            Error::BlankReference => ErrorKind::Blank,
            Error::MalformedReference { .. }
            | Error::InvalidZoneLetter { .. }
            | Error::OddDigitCount { .. }
            | Error::InvalidDigits { .. }
            | Error::TooManyDigits { .. }
            | Error::InvalidNorthingLetter(_) => ErrorKind::Grammar,
            Error::BadCharacter(_) => ErrorKind::LookupExhausted,
            Error::InvalidZoneNumber(_) => ErrorKind::InvalidZone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_message() {
        let err = Error::PolarRegion(88.0);
        assert_eq!(
            err.to_string(),
            "forward received a latitude of 88, but this library does not support conversions of points in polar regions below 80°S and above 84°N"
        );
    }

    #[test]
    fn test_range_messages() {
        assert_eq!(
            Error::InvalidLatitude(270.0).to_string(),
            "forward received an invalid latitude of 270"
        );
        assert_eq!(
            Error::InvalidLongitude(-180.5).to_string(),
            "forward received an invalid longitude of -180.5"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::BlankReference.kind(), ErrorKind::Blank);
        assert_eq!(Error::BadCharacter('I').kind(), ErrorKind::LookupExhausted);
        assert_eq!(Error::InvalidZoneNumber(61).kind(), ErrorKind::InvalidZone);
        assert_eq!(
            Error::OddDigitCount { reference: "4QFJ123".to_string() }.kind(),
            ErrorKind::Grammar
        );
        assert_eq!(
            Error::InvalidInput { longitude: f64::NAN, latitude: 0.0 }.kind(),
            ErrorKind::InputShape
        );
    }

    #[test]
    fn test_message_names_offending_value() {
        let err = Error::InvalidZoneLetter {
            letter: 'Y',
            reference: "4YFJ".to_string(),
        };
        assert!(err.to_string().contains('Y'));
        assert!(err.to_string().contains("4YFJ"));
    }
}
