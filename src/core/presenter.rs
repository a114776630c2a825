//! Presenter
//!
//! Maps an `Earthquake` to the strings and severity bucket a list row shows.
//! Holds nothing but an immutable localizer, so one presenter can be shared
//! across threads.

use crate::core::datetime::format_date_time;
use crate::core::error::QuakeError;
use crate::core::locale::{DisplayLocale, Localizer};
use crate::core::location::split_location;
use crate::core::magnitude::{classify_severity, format_magnitude};
use crate::core::model::{DisplayFields, Earthquake, QuakeRow};

#[derive(Debug, Clone, Default)]
pub struct Presenter<L = DisplayLocale> {
    locale: L,
}

impl<L: Localizer> Presenter<L> {
    pub fn new(locale: L) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// Derive display fields for one record.
    ///
    /// Fails only when the magnitude is NaN or infinite.
    pub fn present(&self, quake: &Earthquake) -> Result<DisplayFields, QuakeError> {
        let magnitude = quake.magnitude();
        if !magnitude.is_finite() {
            return Err(QuakeError::non_finite_magnitude(magnitude));
        }

        let (location_offset, primary_location) =
            split_location(quake.location(), self.locale.near_label());
        let (date_text, time_text) = format_date_time(quake.time_ms(), self.locale.time_zone());

        Ok(DisplayFields {
            magnitude_text: format_magnitude(magnitude),
            severity: classify_severity(magnitude),
            primary_location,
            location_offset,
            date_text,
            time_text,
        })
    }

    /// Present a record together with its URL.
    pub fn present_row(&self, quake: &Earthquake) -> Result<QuakeRow, QuakeError> {
        Ok(QuakeRow::new(self.present(quake)?, quake.url()))
    }

    /// Present every record in order, stopping at the first invalid one.
    pub fn present_all(&self, quakes: &[Earthquake]) -> Result<Vec<QuakeRow>, QuakeError> {
        quakes.iter().map(|quake| self.present_row(quake)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::TimeZonePolicy;
    use crate::core::model::SeverityBucket;
    use chrono::FixedOffset;

    fn cairo() -> Earthquake {
        Earthquake::new(
            3.2,
            "5km N of Cairo",
            447_130_200_000,
            "https://earthquake.usgs.gov/earthquakes/eventpage/test1",
        )
    }

    #[test]
    fn test_present_full_record() {
        let presenter = Presenter::new(DisplayLocale::default());
        let fields = presenter.present(&cairo()).unwrap();

        assert_eq!(
            fields,
            DisplayFields {
                magnitude_text: "3.2".to_string(),
                severity: SeverityBucket::M3,
                primary_location: "Cairo".to_string(),
                location_offset: "5km N of ".to_string(),
                date_text: "Mar 3, 1984".to_string(),
                time_text: "2:50 AM".to_string(),
            }
        );
    }

    #[test]
    fn test_present_is_idempotent() {
        let presenter = Presenter::<DisplayLocale>::default();
        let quake = cairo();
        assert_eq!(presenter.present(&quake).unwrap(), presenter.present(&quake).unwrap());
    }

    #[test]
    fn test_present_does_not_touch_record() {
        let presenter = Presenter::<DisplayLocale>::default();
        let quake = cairo();
        let before = quake.clone();
        presenter.present(&quake).unwrap();
        assert_eq!(quake, before);
    }

    #[test]
    fn test_present_degenerate_record() {
        let presenter = Presenter::<DisplayLocale>::default();
        let fields = presenter.present(&Earthquake::new(-0.5, "", 0, "")).unwrap();

        assert_eq!(fields.magnitude_text, "-0.5");
        assert_eq!(fields.severity, SeverityBucket::M1);
        assert_eq!(fields.location_offset, "Near the");
        assert_eq!(fields.primary_location, "");
        assert_eq!(fields.date_text, "Jan 1, 1970");
        assert_eq!(fields.time_text, "12:00 AM");
    }

    #[test]
    fn test_present_extreme_magnitude() {
        let presenter = Presenter::<DisplayLocale>::default();
        let fields = presenter.present(&Earthquake::new(1e12, "Nowhere", 0, "")).unwrap();
        assert_eq!(fields.severity, SeverityBucket::M10Plus);
        assert!(fields.magnitude_text.ends_with(".0"));
    }

    #[test]
    fn test_present_rejects_non_finite_magnitude() {
        let presenter = Presenter::<DisplayLocale>::default();
        for magnitude in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = presenter.present(&Earthquake::new(magnitude, "Cairo", 0, ""));
            assert!(matches!(result, Err(QuakeError::InvalidRecord(_))));
        }
    }

    #[test]
    fn test_present_uses_locale() {
        let locale = DisplayLocale::new(
            "Cerca de",
            TimeZonePolicy::Fixed(FixedOffset::east_opt(-10 * 3600).unwrap()),
        );
        let presenter = Presenter::new(locale);
        let fields = presenter
            .present(&Earthquake::new(5.0, "Lima", 447_130_200_000, ""))
            .unwrap();

        assert_eq!(fields.location_offset, "Cerca de");
        assert_eq!(fields.date_text, "Mar 2, 1984");
        assert_eq!(fields.time_text, "4:50 PM");
    }

    #[test]
    fn test_present_row_carries_url() {
        let presenter = Presenter::<DisplayLocale>::default();
        let row = presenter.present_row(&cairo()).unwrap();
        assert_eq!(row.url, "https://earthquake.usgs.gov/earthquakes/eventpage/test1");
        assert_eq!(row.fields.primary_location, "Cairo");
    }

    #[test]
    fn test_present_all_keeps_order() {
        let presenter = Presenter::<DisplayLocale>::default();
        let quakes = vec![
            Earthquake::new(7.2, "88km N of Yelizovo, Russia", 0, "a"),
            Earthquake::new(1.1, "Cairo", 0, "b"),
        ];
        let rows = presenter.present_all(&quakes).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].url, "a");
        assert_eq!(rows[1].fields.severity, SeverityBucket::M1);
    }

    #[test]
    fn test_present_all_stops_on_invalid() {
        let presenter = Presenter::<DisplayLocale>::default();
        let quakes = vec![
            Earthquake::new(7.2, "Cairo", 0, ""),
            Earthquake::new(f64::NAN, "Cairo", 0, ""),
        ];
        assert!(presenter.present_all(&quakes).is_err());
    }

    #[test]
    fn test_present_concurrently() {
        let presenter = Presenter::<DisplayLocale>::default();
        let quakes: Vec<Earthquake> = (0..8)
            .map(|i| Earthquake::new(i as f64 + 0.5, format!("{}km W of Town{}", i, i), i * 1000, ""))
            .collect();
        let expected: Vec<DisplayFields> =
            quakes.iter().map(|q| presenter.present(q).unwrap()).collect();

        let shared = &presenter;
        let results: Vec<DisplayFields> = std::thread::scope(|scope| {
            let handles: Vec<_> = quakes
                .iter()
                .map(|quake| scope.spawn(move || shared.present(quake).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results, expected);
    }
}
