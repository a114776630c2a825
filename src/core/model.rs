//! Record and display models
//!
//! `Earthquake` is the input record. The presenter maps each record to a
//! `DisplayFields` value; the renderer writes `QuakeRow`s.

use serde::{Deserialize, Serialize};

/// A single earthquake observation.
///
/// Fields are fixed at construction and only readable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    magnitude: f64,
    location: String,
    time_ms: i64,
    url: String,
}

impl Earthquake {
    /// Create a new record.
    ///
    /// `time_ms` is milliseconds since the Unix epoch. `url` is opaque and
    /// never inspected by the core.
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        time_ms: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            time_ms,
            url: url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Severity classification of a magnitude.
///
/// Callers resolve a bucket to a concrete colour with their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityBucket {
    #[serde(rename = "1")]
    M1,
    #[serde(rename = "2")]
    M2,
    #[serde(rename = "3")]
    M3,
    #[serde(rename = "4")]
    M4,
    #[serde(rename = "5")]
    M5,
    #[serde(rename = "6")]
    M6,
    #[serde(rename = "7")]
    M7,
    #[serde(rename = "8")]
    M8,
    #[serde(rename = "9")]
    M9,
    #[serde(rename = "10plus")]
    M10Plus,
}

impl SeverityBucket {
    /// Every bucket, lowest first.
    pub const ALL: [SeverityBucket; 10] = [
        SeverityBucket::M1,
        SeverityBucket::M2,
        SeverityBucket::M3,
        SeverityBucket::M4,
        SeverityBucket::M5,
        SeverityBucket::M6,
        SeverityBucket::M7,
        SeverityBucket::M8,
        SeverityBucket::M9,
        SeverityBucket::M10Plus,
    ];

    /// The token form: "1" through "9", then "10plus".
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBucket::M1 => "1",
            SeverityBucket::M2 => "2",
            SeverityBucket::M3 => "3",
            SeverityBucket::M4 => "4",
            SeverityBucket::M5 => "5",
            SeverityBucket::M6 => "6",
            SeverityBucket::M7 => "7",
            SeverityBucket::M8 => "8",
            SeverityBucket::M9 => "9",
            SeverityBucket::M10Plus => "10plus",
        }
    }

    /// Numeric level from 1 to 10.
    pub fn level(&self) -> u8 {
        *self as u8 + 1
    }
}

impl std::fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation strings and classification derived from one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    /// Magnitude with exactly one fractional digit
    pub magnitude_text: String,

    /// Colour classification of the magnitude
    pub severity: SeverityBucket,

    /// Place name, e.g. "Cairo"
    pub primary_location: String,

    /// Distance/direction prefix, e.g. "5km N of " or the fallback label
    pub location_offset: String,

    /// e.g. "Mar 3, 1984"
    pub date_text: String,

    /// e.g. "4:30 PM"
    pub time_text: String,
}

/// One rendered list row: display fields plus the click-through URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuakeRow {
    #[serde(flatten)]
    pub fields: DisplayFields,

    pub url: String,
}

impl QuakeRow {
    pub fn new(fields: DisplayFields, url: impl Into<String>) -> Self {
        Self {
            fields,
            url: url.into(),
        }
    }
}
