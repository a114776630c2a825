//! Renderer module
//!
//! Renders presented rows to different output formats: text, jsonl, json, md

use colored::Colorize;
use std::io::Write;

use crate::core::model::QuakeRow;
use crate::view::palette::severity_color;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            color: true,
        }
    }
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Renderer for presented rows
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render rows to a string
    pub fn render(&self, rows: &[QuakeRow]) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(rows),
            OutputFormat::Jsonl => self.render_jsonl(rows),
            OutputFormat::Json => self.render_json(rows),
            OutputFormat::Markdown => self.render_markdown(rows),
        }
    }

    /// Render to a writer, followed by a newline when there is output
    pub fn render_to<W: Write>(&self, rows: &[QuakeRow], mut writer: W) -> std::io::Result<()> {
        let output = self.render(rows);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")
    }

    /// Two lines per quake, like a list item: badge, offset and date on
    /// top, primary location and time underneath.
    fn render_text(&self, rows: &[QuakeRow]) -> String {
        let location_width = rows
            .iter()
            .flat_map(|row| {
                [
                    row.fields.location_offset.chars().count(),
                    row.fields.primary_location.chars().count(),
                ]
            })
            .max()
            .unwrap_or(0);
        let badge_width = rows
            .iter()
            .map(|row| row.fields.magnitude_text.chars().count())
            .max()
            .unwrap_or(0)
            + 2;
        let clock_width = rows
            .iter()
            .flat_map(|row| [row.fields.date_text.len(), row.fields.time_text.len()])
            .max()
            .unwrap_or(0);

        rows.iter()
            .map(|row| {
                let fields = &row.fields;
                let badge = format!("{:^width$}", fields.magnitude_text, width = badge_width);
                let badge = if self.config.color {
                    let rgb = severity_color(fields.severity);
                    badge
                        .white()
                        .bold()
                        .on_truecolor(rgb.0, rgb.1, rgb.2)
                        .to_string()
                } else {
                    badge
                };
                let pad = " ".repeat(badge_width);

                format!(
                    "{} {:<lw$}  {:>cw$}\n{} {:<lw$}  {:>cw$}",
                    badge,
                    fields.location_offset,
                    fields.date_text,
                    pad,
                    fields.primary_location,
                    fields.time_text,
                    lw = location_width,
                    cw = clock_width,
                )
                .lines()
                .map(str::trim_end)
                .collect::<Vec<_>>()
                .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, rows: &[QuakeRow]) -> String {
        rows.iter()
            .filter_map(|row| {
                if self.config.pretty {
                    serde_json::to_string_pretty(row).ok()
                } else {
                    serde_json::to_string(row).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, rows: &[QuakeRow]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as a Markdown table
    fn render_markdown(&self, rows: &[QuakeRow]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str("| Magnitude | Severity | Offset | Location | Date | Time | URL |\n");
        output.push_str("|---|---|---|---|---|---|---|\n");
        for row in rows {
            let fields = &row.fields;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                fields.magnitude_text,
                fields.severity,
                escape_cell(fields.location_offset.trim_end()),
                escape_cell(&fields.primary_location),
                fields.date_text,
                fields.time_text,
                escape_cell(&row.url),
            ));
        }
        output
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
