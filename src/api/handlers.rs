use axum::{
    body::Body,
    extract::{multipart::Multipart, rejection::QueryRejection, Query},
    http::{header, StatusCode},
    response::Response,
    Json,
};

use crate::batch::{self, BatchError, BatchOutput};
use crate::convert::{self, DEFAULT_ACCURACY};
use crate::error::{Error as ConvertError, ErrorKind};
use crate::grid::encode::MAX_DIGITS;
use crate::projection::GeoPoint;

use super::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String, kind: &str) -> ApiError {
    log::info!("rejected request: {}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error,
            kind: kind.to_string(),
        }),
    )
}

fn internal_error(error: String) -> ApiError {
    log::error!("{}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error,
            kind: "internal".to_string(),
        }),
    )
}

fn query_error(rejection: QueryRejection) -> ApiError {
    bad_request(rejection.body_text(), ErrorKind::InputShape.name())
}

fn conversion_error(err: ConvertError) -> ApiError {
    bad_request(err.to_string(), err.kind().name())
}

pub async fn get_forward(
    query: Result<Query<ForwardRequest>, QueryRejection>,
) -> Result<Json<ForwardResponse>, ApiError> {
    let Query(req) = query.map_err(query_error)?;
    let mgrs = convert::forward(GeoPoint::new(req.longitude, req.latitude), req.accuracy)
        .map_err(conversion_error)?;
    Ok(Json(ForwardResponse { mgrs }))
}

pub async fn get_inverse(
    query: Result<Query<ReferenceRequest>, QueryRejection>,
) -> Result<Json<InverseResponse>, ApiError> {
    let Query(req) = query.map_err(query_error)?;
    let bbox = convert::inverse(&req.mgrs).map_err(conversion_error)?;
    Ok(Json(InverseResponse {
        left: bbox.left,
        bottom: bbox.bottom,
        right: bbox.right,
        top: bbox.top,
    }))
}

pub async fn get_point(
    query: Result<Query<ReferenceRequest>, QueryRejection>,
) -> Result<Json<PointResponse>, ApiError> {
    let Query(req) = query.map_err(query_error)?;
    let point = convert::to_point(&req.mgrs).map_err(conversion_error)?;
    Ok(Json(PointResponse {
        x: point.longitude,
        y: point.latitude,
    }))
}

/// Multipart fields of a batch upload
struct BatchUpload {
    csv: Vec<u8>,
    accuracy: u8,
}

async fn read_upload(mut multipart: Multipart) -> Result<BatchUpload, ApiError> {
    let mut csv: Option<Vec<u8>> = None;
    let mut accuracy = DEFAULT_ACCURACY;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Invalid multipart body: {}", e), "request"))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "csv" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Unreadable CSV field: {}", e), "request"))?;
                csv = Some(bytes.to_vec());
            }
            "accuracy" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Unreadable accuracy field: {}", e), "request"))?;
                accuracy = text.trim().parse().map_err(|_| {
                    bad_request(format!("Invalid accuracy: {}", text), "request")
                })?;
            }
            _ => {}
        }
    }

    let csv = csv.ok_or_else(|| bad_request("Missing CSV file".to_string(), "request"))?;
    Ok(BatchUpload { csv, accuracy })
}

fn csv_response(result: Result<BatchOutput, BatchError>, filename: &str) -> Result<Response, ApiError> {
    let output = result.map_err(|e| bad_request(format!("Failed to process CSV: {}", e), "csv"))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(output.csv))
        .map_err(|e| internal_error(format!("Failed to build response: {}", e)))
}

pub async fn upload_forward_csv(multipart: Multipart) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;
    if !(1..=MAX_DIGITS).contains(&upload.accuracy) {
        return Err(conversion_error(ConvertError::InvalidAccuracy(upload.accuracy)));
    }
    let result = tokio::task::spawn_blocking(move || batch::forward_csv(&upload.csv, upload.accuracy))
        .await
        .map_err(|e| internal_error(format!("Batch task failed: {}", e)))?;
    csv_response(result, "mgrs_results.csv")
}

pub async fn upload_point_csv(multipart: Multipart) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;
    let result = tokio::task::spawn_blocking(move || batch::to_point_csv(&upload.csv))
        .await
        .map_err(|e| internal_error(format!("Batch task failed: {}", e)))?;
    csv_response(result, "point_results.csv")
}
