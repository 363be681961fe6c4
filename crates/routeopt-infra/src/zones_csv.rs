//! CSV loader for the zone dataset
//!
//! Handles the `random_cities.csv` shape: `city,lat,lng,color[,dc][,order_volume]`.
//! Files exported from spreadsheets often carry a BOM or stray bytes, so the
//! raw bytes are decoded first instead of being read as a string.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use thiserror::Error;

use routeopt_domain::model::Zone;
use routeopt_domain::repository::ZoneRepository;

#[derive(Error, Debug)]
pub enum ZoneCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl From<ZoneCsvError> for routeopt_types::Error {
    fn from(e: ZoneCsvError) -> Self {
        routeopt_types::Error::ZoneCsv(e.to_string())
    }
}

/// Column layout resolved from the header row
struct Columns {
    name: usize,
    lat: usize,
    lng: usize,
    color: Option<usize>,
    dc: Option<usize>,
    order_volume: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, ZoneCsvError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };
        let name = find(&["city", "zone"])
            .ok_or_else(|| ZoneCsvError::MissingColumn("city".to_string()))?;
        let lat = find(&["lat"]).ok_or_else(|| ZoneCsvError::MissingColumn("lat".to_string()))?;
        let lng = find(&["lng"]).ok_or_else(|| ZoneCsvError::MissingColumn("lng".to_string()))?;
        Ok(Self {
            name,
            lat,
            lng,
            color: find(&["color"]),
            dc: find(&["dc", "current_dc"]),
            order_volume: find(&["order_volume"]),
        })
    }
}

/// Load zones from a CSV file, preserving file order
pub fn load_zones<P: AsRef<Path>>(path: P) -> Result<Vec<Zone>, ZoneCsvError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    // Decode as UTF-8 with BOM sniffing; tolerate undecodable bytes
    let (decoded, _, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        eprintln!("Warning: Some characters could not be decoded as UTF-8");
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut zones = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        let name = record.get(columns.name).unwrap_or("").to_string();
        if name.is_empty() {
            continue;
        }
        let lat = parse_f64(record.get(columns.lat).unwrap_or(""), "lat", row_num)?;
        let lng = parse_f64(record.get(columns.lng).unwrap_or(""), "lng", row_num)?;
        let color = columns
            .color
            .and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .unwrap_or("gray")
            .to_string();
        let current_dc = columns
            .dc
            .and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let order_volume = match columns.order_volume.and_then(|i| record.get(i)) {
            Some(s) if !s.is_empty() => Some(parse_f64(s, "order_volume", row_num)?),
            _ => None,
        };

        zones.push(Zone {
            name,
            lat,
            lng,
            color,
            current_dc,
            order_volume,
        });
    }

    Ok(zones)
}

fn parse_f64(value: &str, column: &str, row_num: usize) -> Result<f64, ZoneCsvError> {
    value.parse().map_err(|_| ZoneCsvError::InvalidNumber {
        row: row_num,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// File-backed zone repository
pub struct CsvZoneRepository {
    path: PathBuf,
}

impl CsvZoneRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ZoneRepository for CsvZoneRepository {
    fn find_all(&self) -> Result<Vec<Zone>, routeopt_types::Error> {
        Ok(load_zones(&self.path)?)
    }
}
