//! CSV persistence for the terminal catalog.
//!
//! Columns: `province, city, terminal_name, address, lat, lng, timetable_url`.
//! Only the first three are required so that a freshly crawled listing
//! (no geocoding yet) loads as well.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Coordinate, RouteReference, TerminalRecord};

use super::error::CatalogError;
use super::table::TerminalCatalog;

const REQUIRED_COLUMNS: [&str; 3] = ["province", "city", "terminal_name"];

const COLUMNS: [&str; 7] = [
    "province",
    "city",
    "terminal_name",
    "address",
    "lat",
    "lng",
    "timetable_url",
];

/// One CSV row. Field order matches `COLUMNS`.
#[derive(Debug, Deserialize, Serialize)]
struct CatalogRow {
    province: String,
    city: String,
    terminal_name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    lng: Option<f64>,
    #[serde(default)]
    timetable_url: Option<String>,
}

impl From<CatalogRow> for TerminalRecord {
    fn from(row: CatalogRow) -> Self {
        let coordinate = match (row.lat, row.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coordinate::new(lat, lng))
            }
            _ => None,
        };

        TerminalRecord {
            province: row.province,
            city: row.city,
            name: row.terminal_name,
            address: row.address.unwrap_or_default(),
            coordinate,
            route_reference: row
                .timetable_url
                .filter(|url| !url.is_empty())
                .map(RouteReference::new),
        }
    }
}

impl From<&TerminalRecord> for CatalogRow {
    fn from(record: &TerminalRecord) -> Self {
        Self {
            province: record.province.clone(),
            city: record.city.clone(),
            terminal_name: record.name.clone(),
            address: Some(record.address.clone()).filter(|a| !a.is_empty()),
            lat: record.coordinate.map(|c| c.lat),
            lng: record.coordinate.map(|c| c.lng),
            timetable_url: record
                .route_reference
                .as_ref()
                .map(|r| r.as_str().to_string()),
        }
    }
}

impl TerminalCatalog {
    /// Load a catalog from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let catalog = Self::from_reader(File::open(path)?)?;

        info!(
            path = %path.display(),
            records = catalog.len(),
            geocoded = catalog.geocoded_count(),
            routed = catalog.routed_count(),
            "loaded terminal catalog"
        );

        Ok(catalog)
    }

    /// Parse a catalog from CSV text. A leading UTF-8 BOM is ignored.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column));
            }
        }

        csv_reader
            .deserialize::<CatalogRow>()
            .map(|row| row.map(TerminalRecord::from).map_err(CatalogError::from))
            .collect()
    }

    /// Write the catalog to a CSV file, creating parent directories if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        self.to_writer(File::create(path)?)?;
        info!(path = %path.display(), records = self.len(), "saved terminal catalog");
        Ok(())
    }

    /// Write the catalog as CSV, header row included.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), CatalogError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(COLUMNS)?;
        for record in self {
            csv_writer.serialize(CatalogRow::from(record))?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}
