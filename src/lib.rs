//! mgrs-convert - WGS84, UTM and MGRS coordinate conversion
//!
//! Converts longitude/latitude positions to Military Grid Reference System
//! references through the Universal Transverse Mercator projection, and
//! MGRS references back to positions or to the square they denote.
//!
//! Latitudes outside 80°S to 84°N (the UPS polar caps) are rejected.
//!
//! # Examples
//!
//! ```
//! use mgrs_convert::{forward, to_point, GeoPoint};
//!
//! let mgrs = forward(GeoPoint::new(16.41450, 48.24949), 5)?;
//! assert_eq!(mgrs, "33UXP0500444997");
//!
//! let point = to_point("33UXP04")?;
//! assert!((point.longitude - 16.41450).abs() < 1e-5);
//! # Ok::<(), mgrs_convert::Error>(())
//! ```
//!
//! ## Partial-precision references
//!
//! ```
//! use mgrs_convert::inverse;
//!
//! let bbox = inverse("33UXP04")?;
//! println!("{} {} {} {}", bbox.left, bbox.bottom, bbox.right, bbox.top);
//! # Ok::<(), mgrs_convert::Error>(())
//! ```

pub mod error;
pub mod types;
pub mod projection;
pub mod grid;
pub mod convert;
pub mod batch;
pub mod config;
pub mod api;

pub use error::{Error, ErrorKind, Result};
pub use types::{BoundingBox, Footprint, UtmCoordinate};
pub use projection::{letter_designator, ll_to_utm, utm_to_ll, utm_zone_number, GeoPoint};
pub use grid::{decode, encode};
pub use convert::{forward, inverse, to_point, DEFAULT_ACCURACY};
pub use config::ServerConfig;
