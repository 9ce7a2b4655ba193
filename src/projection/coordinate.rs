/// A geographic position in decimal degrees on the WGS84 datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    /// Creates a point from longitude/latitude in degrees
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Creates a point from an `[x, y]` pair, x being the longitude
    pub fn from_xy(xy: [f64; 2]) -> Self {
        Self::new(xy[0], xy[1])
    }

    /// Longitude, the x axis
    pub fn x(&self) -> f64 {
        self.longitude
    }

    /// Latitude, the y axis
    pub fn y(&self) -> f64 {
        self.latitude
    }

    /// True if both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}
