//! CSV batch conversion
//!
//! Rows are converted in parallel with rayon. A row that fails to parse or
//! convert keeps its place in the output with the error message in the
//! `error` column; the batch itself only fails when the input is not readable
//! CSV or lacks a required column.

use std::time::Instant;

use csv::StringRecord;
use rayon::prelude::*;
use serde::Serialize;

use crate::convert::{forward, to_point};
use crate::error::Error;
use crate::projection::GeoPoint;

/// Errors reading or writing batch CSV
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV header has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("CSV output error: {0}")]
    Output(String),
}

/// Why a single row produced no result
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}: {row:?}")]
    FieldCount {
        expected: usize,
        found: usize,
        row: String,
    },

    #[error("{column} is not a number: {value:?}")]
    NotANumber { column: &'static str, value: String },

    #[error(transparent)]
    Convert(#[from] Error),
}

#[derive(Debug, Serialize)]
struct ForwardRecord<'a> {
    longitude: &'a str,
    latitude: &'a str,
    name: &'a str,
    mgrs: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct PointRecord<'a> {
    mgrs: &'a str,
    name: &'a str,
    x: Option<f64>,
    y: Option<f64>,
    error: String,
}

/// Counters reported ahead of the CSV rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub successful: usize,
    pub execution_time_ms: f64,
}

impl BatchStats {
    pub fn failed(&self) -> usize {
        self.total - self.successful
    }

    fn header(&self) -> String {
        let mut out = String::new();
        out.push_str("# Statistics\n");
        out.push_str(&format!("# Total points: {}\n", self.total));
        out.push_str(&format!("# Successful: {}\n", self.successful));
        out.push_str(&format!("# Failed: {}\n", self.failed()));
        out.push_str(&format!("# Execution time: {:.2} ms\n", self.execution_time_ms));
        out
    }
}

/// Result of a batch: statistics plus the rendered CSV
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub stats: BatchStats,
    pub csv: String,
}

/// Parsed CSV input: header row plus the data records
struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    fn read(data: &[u8]) -> Result<Self, BatchError> {
        // Flexible so a short or long row fails alone instead of the whole read
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(data);

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record?);
        }
        Ok(Self { headers, records })
    }

    fn column(&self, name: &'static str) -> Result<usize, BatchError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or(BatchError::MissingColumn(name))
    }

    fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn check_width(&self, record: &StringRecord) -> Result<(), RowError> {
        if record.len() == self.headers.len() {
            return Ok(());
        }
        Err(RowError::FieldCount {
            expected: self.headers.len(),
            found: record.len(),
            row: record.iter().collect::<Vec<_>>().join(","),
        })
    }
}

fn field(record: &StringRecord, column: Option<usize>) -> &str {
    column.and_then(|c| record.get(c)).unwrap_or("")
}

fn parse_coordinate(record: &StringRecord, column: usize, name: &'static str) -> Result<f64, RowError> {
    let value = field(record, Some(column));
    value.parse().map_err(|_| RowError::NotANumber {
        column: name,
        value: value.to_string(),
    })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Converts `longitude,latitude[,name]` rows to MGRS references
pub fn forward_csv(data: &[u8], accuracy: u8) -> Result<BatchOutput, BatchError> {
    let start = Instant::now();
    let table = Table::read(data)?;
    let lon_col = table.column("longitude")?;
    let lat_col = table.column("latitude")?;
    let name_col = table.optional_column("name");

    let results: Vec<_> = table
        .records
        .par_iter()
        .map(|record| -> Result<String, RowError> {
            table.check_width(record)?;
            let longitude = parse_coordinate(record, lon_col, "longitude")?;
            let latitude = parse_coordinate(record, lat_col, "latitude")?;
            Ok(forward(GeoPoint::new(longitude, latitude), accuracy)?)
        })
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut successful = 0;
    for (record, result) in table.records.iter().zip(results) {
        let (mgrs, error) = match result {
            Ok(mgrs) => {
                successful += 1;
                (mgrs, String::new())
            }
            Err(e) => {
                log::warn!("line {} rejected: {}", line_of(record), e);
                (String::new(), e.to_string())
            }
        };
        writer.serialize(ForwardRecord {
            longitude: field(record, Some(lon_col)),
            latitude: field(record, Some(lat_col)),
            name: field(record, name_col),
            mgrs,
            error,
        })?;
    }

    finish(writer, table.records.len(), successful, start)
}

/// Converts `mgrs[,name]` rows to positions
pub fn to_point_csv(data: &[u8]) -> Result<BatchOutput, BatchError> {
    let start = Instant::now();
    let table = Table::read(data)?;
    let mgrs_col = table.column("mgrs")?;
    let name_col = table.optional_column("name");

    let results: Vec<_> = table
        .records
        .par_iter()
        .map(|record| -> Result<GeoPoint, RowError> {
            table.check_width(record)?;
            Ok(to_point(field(record, Some(mgrs_col)))?)
        })
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut successful = 0;
    for (record, result) in table.records.iter().zip(results) {
        let (x, y, error) = match result {
            Ok(point) => {
                successful += 1;
                (Some(point.longitude), Some(point.latitude), String::new())
            }
            Err(e) => {
                log::warn!("line {} rejected: {}", line_of(record), e);
                (None, None, e.to_string())
            }
        };
        writer.serialize(PointRecord {
            mgrs: field(record, Some(mgrs_col)),
            name: field(record, name_col),
            x,
            y,
            error,
        })?;
    }

    finish(writer, table.records.len(), successful, start)
}

fn finish(
    writer: csv::Writer<Vec<u8>>,
    total: usize,
    successful: usize,
    start: Instant,
) -> Result<BatchOutput, BatchError> {
    let body = writer
        .into_inner()
        .map_err(|e| BatchError::Output(e.to_string()))?;
    let body = String::from_utf8(body).map_err(|e| BatchError::Output(e.to_string()))?;

    let stats = BatchStats {
        total,
        successful,
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };

    let mut csv = stats.header();
    csv.push_str(&body);
    Ok(BatchOutput { stats, csv })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_lines(csv: &str) -> Vec<&str> {
        csv.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_forward_csv() {
        let input = b"longitude,latitude,name\n0,0,origin\n-115.0820944,36.2361322,vegas\n45,88,pole\n";
        let output = forward_csv(input, 5).unwrap();

        assert_eq!(output.stats.total, 3);
        assert_eq!(output.stats.successful, 2);
        assert_eq!(output.stats.failed(), 1);

        let lines = data_lines(&output.csv);
        assert_eq!(lines[0], "longitude,latitude,name,mgrs,error");
        assert!(lines[1].contains("31NAA6602100000"));
        assert!(lines[2].contains("11SPA7234911844"));
        assert!(lines[3].contains("polar regions"));
        assert!(output.csv.starts_with("# Statistics\n"));
    }

    #[test]
    fn test_forward_csv_without_names() {
        let input = b"longitude,latitude\n0,0\n";
        let output = forward_csv(input, 1).unwrap();
        let lines = data_lines(&output.csv);
        assert_eq!(lines[1], "0,0,,31NAA60,");
    }

    #[test]
    fn test_to_point_csv() {
        let input = b"mgrs,name\n33UXP04,vienna\n33UXW04,bad\n";
        let output = to_point_csv(input).unwrap();
        assert_eq!(output.stats.successful, 1);

        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .from_reader(output.csv.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        let x: f64 = records[0][2].parse().unwrap();
        let y: f64 = records[0][3].parse().unwrap();
        assert!((x - 16.41450).abs() < 1e-5);
        assert!((y - 48.24949).abs() < 1e-5);
        assert_eq!(&records[1][2], "");
        assert!(records[1][4].contains("Northing"));
    }

    fn output_records(output: &BatchOutput) -> Vec<csv::StringRecord> {
        csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .from_reader(output.csv.as_bytes())
            .records()
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_non_numeric_row_does_not_stop_batch() {
        let input = b"longitude,latitude,name\n0,0,ok\nabc,0,bad\n16.4145,48.24949,ok2\n";
        let output = forward_csv(input, 5).unwrap();

        assert_eq!(output.stats.total, 3);
        assert_eq!(output.stats.successful, 2);
        assert_eq!(output.stats.failed(), 1);

        let records = output_records(&output);
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][3], "31NAA6602100000");
        assert_eq!(&records[1][0], "abc");
        assert_eq!(&records[1][3], "");
        assert!(records[1][4].contains("longitude"));
        assert!(records[1][4].contains("\"abc\""));
        assert_eq!(&records[2][3], "33UXP0500444997");
    }

    #[test]
    fn test_wrong_field_count_does_not_stop_batch() {
        let input = b"longitude,latitude\n0,0\n1,2,extra\n7\n0,0.00001\n";
        let output = forward_csv(input, 5).unwrap();
        assert_eq!(output.stats.total, 4);
        assert_eq!(output.stats.successful, 2);

        let records = output_records(&output);
        assert_eq!(&records[0][3], "31NAA6602100000");
        assert!(records[1][4].contains("\"1,2,extra\""));
        assert!(records[2][4].contains("found 1"));
        assert_eq!(&records[3][3], "31NAA6602100001");
    }

    #[test]
    fn test_reference_row_field_count() {
        let input = b"mgrs\n33UXP04\n33UXP04,extra\n";
        let output = to_point_csv(input).unwrap();
        assert_eq!(output.stats.successful, 1);
        assert!(output_records(&output)[1][4].contains("expected 1 fields"));
    }

    #[test]
    fn test_row_error_names_value() {
        let err = RowError::NotANumber {
            column: "latitude",
            value: "north".to_string(),
        };
        assert_eq!(err.to_string(), "latitude is not a number: \"north\"");

        let err = RowError::from(Error::InvalidLongitude(200.0));
        assert_eq!(err.to_string(), "forward received an invalid longitude of 200");
    }

    #[test]
    fn test_missing_column() {
        let input = b"lon,lat\n0,0\n";
        assert!(matches!(
            forward_csv(input, 5),
            Err(BatchError::MissingColumn("longitude"))
        ));
    }

    #[test]
    fn test_unreadable_csv() {
        let input = b"longitude,latitude\n\xff\xfe,0\n";
        assert!(matches!(forward_csv(input, 5), Err(BatchError::Csv(_))));
    }
}
