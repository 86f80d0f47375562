//! Coordinate Extractor Module
//! Pulls latitude/longitude out of the embedded JSON cell and merges them
//! with the maps link into one location value.

use serde::{Deserialize, Serialize};

/// A fully-resolved coordinate pair; only produced when both halves parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The merged location cell. Coordinates may be absent, the link may be
/// empty, but the value itself is always produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub gmaps_link: String,
}

/// Parse a raw coordinates cell like `{"latitude":5.27,"longitude":115.24}`.
///
/// Missing fields, malformed JSON or non-numeric values all yield `None`.
pub fn parse_coordinates(raw: &str) -> Option<Coordinates> {
    let value: serde_json::Value = serde_json::from_str(raw.trim()).ok()?;
    let latitude = as_f64(value.get("latitude")?)?;
    let longitude = as_f64(value.get("longitude")?)?;
    Some(Coordinates {
        latitude,
        longitude,
    })
}

// Some exports quote the numbers, so accept numeric strings too.
fn as_f64(value: &serde_json::Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Merge coordinates and maps link into a [`Location`]. Never fails: absent
/// pieces pass through as nulls or an empty link.
pub fn build_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    gmaps_link: Option<&str>,
) -> Location {
    Location {
        latitude,
        longitude,
        gmaps_link: gmaps_link.unwrap_or_default().to_string(),
    }
}
