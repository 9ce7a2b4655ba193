//! Core value types for mgrs-convert

use crate::projection::GeoPoint;

/// A projected UTM position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoordinate {
    /// Easting in meters, including the 500 km false easting
    pub easting: f64,
    /// Northing in meters, including the 10 000 km southern false northing
    pub northing: f64,
    /// Zone number (1-60)
    pub zone_number: u8,
    /// Latitude band letter
    pub zone_letter: char,
    /// Side of the square this coordinate stands for, in meters.
    ///
    /// Set when decoded from a reference with easting/northing digits; the
    /// coordinate is then the lower-left corner of that square.
    pub accuracy: Option<f64>,
}

impl UtmCoordinate {
    /// Creates a point coordinate (no accuracy)
    pub fn new(easting: f64, northing: f64, zone_number: u8, zone_letter: char) -> Self {
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
            accuracy: None,
        }
    }

    /// Returns a copy that stands for a square of the given side
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// True for bands `C` to `M`
    pub fn is_southern(&self) -> bool {
        self.zone_letter < 'N'
    }
}

/// Geographic extent in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    /// Creates a box from its edges
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self { left, bottom, right, top }
    }

    /// A zero-area box around a single point
    pub fn from_point(point: GeoPoint) -> Self {
        Self::new(point.longitude, point.latitude, point.longitude, point.latitude)
    }

    /// Returns `[left, bottom, right, top]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.bottom, self.right, self.top]
    }

    /// Midpoint of the box
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// True when the box has no area, as for a single point
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right && self.bottom == self.top
    }
}

/// What a UTM coordinate covers once unprojected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// Exact position
    Point(GeoPoint),
    /// Square of a partial-precision reference
    Area(BoundingBox),
}

impl Footprint {
    /// The point itself, or the center of the area
    pub fn center(&self) -> GeoPoint {
        match self {
            Footprint::Point(point) => *point,
            Footprint::Area(bbox) => bbox.center(),
        }
    }

    /// The area itself, or a zero-area box around the point
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Footprint::Point(point) => BoundingBox::from_point(*point),
            Footprint::Area(bbox) => *bbox,
        }
    }
}
