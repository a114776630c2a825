//! Location splitting
//!
//! USGS place strings look like "88km N of Yelizovo, Russia". The part up to
//! and including " of " is the offset, the rest is the primary location.

/// Separator between the offset and the place name
pub const LOCATION_SEPARATOR: &str = " of ";

/// Split a location into `(offset, primary)`.
///
/// Only the first separator counts; anything after it is returned verbatim.
/// Without a separator the offset is `fallback` and the primary is the whole
/// location.
pub fn split_location(location: &str, fallback: &str) -> (String, String) {
    match location.split_once(LOCATION_SEPARATOR) {
        Some((before, after)) => (format!("{}{}", before, LOCATION_SEPARATOR), after.to_string()),
        None => (fallback.to_string(), location.to_string()),
    }
}
