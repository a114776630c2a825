//! Built-in sample records
//!
//! A small, fixed set of USGS-style observations used by the `sample`
//! command and in tests.

use crate::core::model::Earthquake;

const EVENT_PAGE: &str = "https://earthquake.usgs.gov/earthquakes/eventpage/";

// (magnitude, place, time in epoch ms, event id)
const SAMPLES: &[(f64, &str, i64, &str)] = &[
    (7.2, "88km N of Yelizovo, Russia", 1_454_124_312_220, "us20004vvx"),
    (6.1, "94km SSE of Taron, Papua New Guinea", 1_453_777_820_750, "us20004uks"),
    (6.3, "50km NNE of Al Hoceima, Morocco", 1_453_695_722_730, "us10004gy9"),
    (7.1, "86km E of Old Iliamna, Alaska", 1_453_631_430_230, "us10004gqp"),
    (6.6, "215km SW of Tomatlan, Mexico", 1_453_399_617_650, "us10004g4v"),
    (4.3, "12km WSW of Tobelo, Indonesia", 1_452_741_933_640, "us10004ebx"),
    (5.6, "Pacific-Antarctic Ridge", 1_452_530_285_900, "us10004djn"),
    (2.9, "3km NNW of Isla of Rhodes of Greece", 1_452_303_211_110, "us10004csh"),
    (1.4, "4km E of Cairo, Egypt", 1_451_988_000_000, "us10004b2a"),
    (0.8, "Offshore Northern California", 1_451_606_400_000, "nc72583021"),
    (10.2, "Hypothetical rupture, Nowhere Trench", 447_130_200_000, "xx00000000"),
];

/// The sample records, newest first.
pub fn sample_earthquakes() -> Vec<Earthquake> {
    SAMPLES
        .iter()
        .map(|(magnitude, place, time_ms, id)| {
            Earthquake::new(*magnitude, *place, *time_ms, format!("{}{}", EVENT_PAGE, id))
        })
        .collect()
}
