//! `severity` command

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::core::error::QuakeError;
use crate::core::magnitude::{classify_severity, format_magnitude};
use crate::core::model::SeverityBucket;
use crate::view::palette::severity_color;
use crate::view::render::{OutputFormat, RenderConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityReport {
    pub magnitude_text: String,
    pub severity: SeverityBucket,
    pub color: String,
}

/// Classify a magnitude and resolve its palette colour
pub fn severity_report(magnitude: f64) -> Result<SeverityReport> {
    if !magnitude.is_finite() {
        return Err(QuakeError::non_finite_magnitude(magnitude).into());
    }

    let severity = classify_severity(magnitude);
    Ok(SeverityReport {
        magnitude_text: format_magnitude(magnitude),
        severity,
        color: severity_color(severity).hex(),
    })
}

fn render_report(report: &SeverityReport, config: RenderConfig) -> Result<String> {
    let output = match config.format {
        OutputFormat::Jsonl | OutputFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            }
        }
        OutputFormat::Markdown => format!(
            "| Magnitude | Severity | Color |\n|---|---|---|\n| {} | {} | {} |",
            report.magnitude_text, report.severity, report.color
        ),
        OutputFormat::Text => {
            let swatch = if config.color {
                let rgb = severity_color(report.severity);
                "  ".on_truecolor(rgb.0, rgb.1, rgb.2).to_string() + " "
            } else {
                String::new()
            };
            format!(
                "{}{} -> bucket {} ({})",
                swatch, report.magnitude_text, report.severity, report.color
            )
        }
    };
    Ok(output)
}

/// Run the severity command
pub fn run_severity(magnitude: f64, config: RenderConfig) -> Result<()> {
    let report = severity_report(magnitude)?;
    println!("{}", render_report(&report, config)?);
    Ok(())
}
