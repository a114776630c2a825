//! Magnitude formatting and severity bucketing

use crate::core::model::SeverityBucket;

/// Buckets for integer magnitudes 2 through 9; everything at or below 1 is
/// `M1` and everything from 10 up is `M10Plus`.
const MID_BUCKETS: [SeverityBucket; 8] = [
    SeverityBucket::M2,
    SeverityBucket::M3,
    SeverityBucket::M4,
    SeverityBucket::M5,
    SeverityBucket::M6,
    SeverityBucket::M7,
    SeverityBucket::M8,
    SeverityBucket::M9,
];

/// Format a magnitude with exactly one fractional digit, e.g. "3.2".
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{:.1}", magnitude)
}

/// Classify a magnitude by its floor.
///
/// The floor rounds toward negative infinity, so -0.5 lands in bucket 1.
pub fn classify_severity(magnitude: f64) -> SeverityBucket {
    // `as` saturates at the i64 bounds; NaN maps to 0 and ends up in M1.
    let floor = magnitude.floor() as i64;
    match floor {
        i64::MIN..=1 => SeverityBucket::M1,
        2..=9 => MID_BUCKETS[(floor - 2) as usize],
        _ => SeverityBucket::M10Plus,
    }
}
