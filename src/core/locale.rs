//! Localization provider
//!
//! Supplies the fallback location label and the time zone that dates and
//! times are rendered in.

use chrono::FixedOffset;

use crate::core::error::QuakeError;

/// Label used when a location has no " of " separator
pub const DEFAULT_NEAR_LABEL: &str = "Near the";

/// Time zone used to render timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZonePolicy {
    #[default]
    Utc,
    Fixed(FixedOffset),
    /// Zone of the running process (honours `TZ`)
    Local,
}

impl std::str::FromStr for TimeZonePolicy {
    type Err = QuakeError;

    /// Accepts `utc`, `z`, `local`, or an offset such as `+05:30`, `-0800`, `+2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "utc" | "z" | "gmt" => return Ok(TimeZonePolicy::Utc),
            "local" => return Ok(TimeZonePolicy::Local),
            _ => {}
        }

        parse_offset(trimmed)
            .map(TimeZonePolicy::Fixed)
            .ok_or_else(|| QuakeError::InvalidTimeZone(s.to_string()))
    }
}

/// Rewrite the accepted offset spellings into a form chrono parses:
/// `+HH:MM` and `+HHMM` pass through, `+H`/`+HH` gain `:00`. Anything else,
/// including trailing text, is rejected here.
fn normalize_offset(s: &str) -> Option<String> {
    let sign = s.chars().next().filter(|c| matches!(c, '+' | '-'))?;
    let body = &s[1..];
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match body.split_once(':') {
        Some((hours, minutes))
            if hours.len() == 2 && minutes.len() == 2 && is_digits(hours) && is_digits(minutes) =>
        {
            Some(s.to_string())
        }
        None if is_digits(body) && body.len() <= 2 => Some(format!("{}{:0>2}:00", sign, body)),
        None if is_digits(body) && body.len() == 4 => Some(s.to_string()),
        _ => None,
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    normalize_offset(s)?.parse::<FixedOffset>().ok()
}

/// Source of locale-dependent presentation settings.
pub trait Localizer {
    /// Offset text shown when the location has no separator.
    fn near_label(&self) -> &str;

    /// Zone used for date and time text.
    fn time_zone(&self) -> TimeZonePolicy;
}

/// Fixed English locale with a configurable label and zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLocale {
    near_label: String,
    time_zone: TimeZonePolicy,
}

impl DisplayLocale {
    pub fn new(near_label: impl Into<String>, time_zone: TimeZonePolicy) -> Self {
        Self {
            near_label: near_label.into(),
            time_zone,
        }
    }

    pub fn with_near_label(mut self, near_label: impl Into<String>) -> Self {
        self.near_label = near_label.into();
        self
    }

    pub fn with_time_zone(mut self, time_zone: TimeZonePolicy) -> Self {
        self.time_zone = time_zone;
        self
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_LABEL, TimeZonePolicy::Utc)
    }
}

impl Localizer for DisplayLocale {
    fn near_label(&self) -> &str {
        &self.near_label
    }

    fn time_zone(&self) -> TimeZonePolicy {
        self.time_zone
    }
}
