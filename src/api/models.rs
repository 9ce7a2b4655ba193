use serde::{Deserialize, Serialize};

use crate::convert::DEFAULT_ACCURACY;

#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardRequest {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
}

fn default_accuracy() -> u8 {
    DEFAULT_ACCURACY
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardResponse {
    pub mgrs: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferenceRequest {
    pub mgrs: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InverseResponse {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointResponse {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}
