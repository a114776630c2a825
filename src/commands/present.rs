//! `present` and `sample` commands

use anyhow::{Context, Result};

use crate::core::locale::Localizer;
use crate::core::model::{Earthquake, QuakeRow};
use crate::core::presenter::Presenter;
use crate::sample::sample_earthquakes;
use crate::view::render::{RenderConfig, Renderer};

/// Present one record built from command-line fields
pub fn run_present<L: Localizer>(
    presenter: &Presenter<L>,
    magnitude: f64,
    location: &str,
    time_ms: i64,
    url: &str,
    config: RenderConfig,
) -> Result<()> {
    let quake = Earthquake::new(magnitude, location, time_ms, url);
    let row = presenter
        .present_row(&quake)
        .with_context(|| format!("cannot present record at '{}'", location))?;

    write_rows(&[row], config)
}

/// Select sample records by minimum magnitude and limit
pub fn select_samples(min_magnitude: Option<f64>, limit: Option<usize>) -> Vec<Earthquake> {
    sample_earthquakes()
        .into_iter()
        .filter(|quake| min_magnitude.map_or(true, |min| quake.magnitude() >= min))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Present the built-in sample list
pub fn run_sample<L: Localizer>(
    presenter: &Presenter<L>,
    min_magnitude: Option<f64>,
    limit: Option<usize>,
    config: RenderConfig,
) -> Result<()> {
    let quakes = select_samples(min_magnitude, limit);
    tracing::debug!(count = quakes.len(), "presenting sample records");

    let rows = presenter.present_all(&quakes)?;
    if rows.is_empty() {
        tracing::warn!("no sample records matched the filters");
    }

    write_rows(&rows, config)
}

fn write_rows(rows: &[QuakeRow], config: RenderConfig) -> Result<()> {
    let stdout = std::io::stdout();
    Renderer::with_config(config)
        .render_to(rows, stdout.lock())
        .context("failed to write output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_samples() {
        assert_eq!(select_samples(None, None).len(), sample_earthquakes().len());
    }

    #[test]
    fn test_select_by_min_magnitude() {
        let quakes = select_samples(Some(7.0), None);
        assert!(!quakes.is_empty());
        assert!(quakes.iter().all(|q| q.magnitude() >= 7.0));
    }

    #[test]
    fn test_select_with_limit() {
        let quakes = select_samples(None, Some(2));
        assert_eq!(quakes.len(), 2);
        assert_eq!(quakes[0], sample_earthquakes()[0]);
    }

    #[test]
    fn test_select_nothing() {
        assert!(select_samples(Some(42.0), None).is_empty());
        assert!(select_samples(None, Some(0)).is_empty());
    }
}
