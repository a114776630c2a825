//! Severity palette
//!
//! Maps a `SeverityBucket` to the colour of the magnitude badge.

use crate::core::model::SeverityBucket;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Badge colours by severity level, cool blues for small quakes to deep red
const PALETTE: [Rgb; 10] = [
    Rgb(0x4A, 0x7B, 0xA7),
    Rgb(0x04, 0xB4, 0xB3),
    Rgb(0x10, 0xCA, 0xC9),
    Rgb(0xF5, 0xA6, 0x23),
    Rgb(0xFF, 0x7D, 0x50),
    Rgb(0xFC, 0x66, 0x44),
    Rgb(0xE7, 0x5F, 0x40),
    Rgb(0xE1, 0x3A, 0x20),
    Rgb(0xD9, 0x32, 0x18),
    Rgb(0xC0, 0x38, 0x23),
];

/// Badge colour for a bucket.
pub fn severity_color(bucket: SeverityBucket) -> Rgb {
    PALETTE[usize::from(bucket.level() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb(0x04, 0xB4, 0xB3).hex(), "#04B4B3");
    }

    #[test]
    fn test_every_bucket_has_distinct_color() {
        let colors: HashSet<String> = SeverityBucket::ALL
            .iter()
            .map(|b| severity_color(*b).hex())
            .collect();
        assert_eq!(colors.len(), SeverityBucket::ALL.len());
    }

    #[test]
    fn test_mid_buckets() {
        assert_eq!(severity_color(SeverityBucket::M4).hex(), "#F5A623");
        assert_eq!(severity_color(SeverityBucket::M7).hex(), "#E75F40");
        assert_eq!(severity_color(SeverityBucket::M9).hex(), "#D93218");
    }

    #[test]
    fn test_extreme_buckets() {
        assert_eq!(severity_color(SeverityBucket::M1).hex(), "#4A7BA7");
        assert_eq!(severity_color(SeverityBucket::M10Plus).hex(), "#C03823");
    }
}
