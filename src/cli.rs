//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::locale::{DisplayLocale, TimeZonePolicy, DEFAULT_NEAR_LABEL};
use crate::core::presenter::Presenter;
use crate::view::render::{OutputFormat, RenderConfig};

/// quakereport - turn earthquake records into display-ready rows.
#[derive(Parser, Debug)]
#[command(name = "quakereport")]
#[command(
    author,
    version,
    about,
    long_about = r#"quakereport maps earthquake records to the strings a list row shows:
magnitude text, a severity bucket for colour coding, the location split into
offset and primary place, and a date and time.

Output formats:
- text: two lines per quake with a coloured magnitude badge (default)
- jsonl: one JSON object per line
- json: a single JSON array
- md: a Markdown table

Examples:
    quakereport sample
    quakereport --format jsonl sample --min-magnitude 6
    quakereport present --magnitude 3.2 --location "5km N of Cairo" --time 447130200000
    quakereport --utc-offset +05:30 sample
    quakereport severity 7.4
"#
)]
pub struct Cli {
    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        value_parser = ["text", "jsonl", "json", "md", "markdown"],
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default)\n\
- jsonl\n\
- json\n\
- md (markdown)\n\n\
Tip: Prefer jsonl when piping rows into other tools."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation.\n\n\
Has no effect on text/md formats."
    )]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable the coloured magnitude badge in text output. Useful when piping\n\
to files or when your terminal does not support ANSI colours."
    )]
    pub no_color: bool,

    /// Time zone for dates and times (utc, local, or an offset like +05:30).
    #[arg(
        long,
        global = true,
        env = "QUAKEREPORT_UTC_OFFSET",
        default_value = "utc",
        value_name = "ZONE",
        allow_hyphen_values = true,
        long_help = "Time zone used to render dates and times.\n\n\
Supported values:\n\
- utc (default)\n\
- local: the zone of this process (honours TZ)\n\
- a fixed offset such as +05:30, -0800 or +2"
    )]
    pub utc_offset: String,

    /// Offset label for locations without a distance (default: "Near the").
    #[arg(
        long,
        global = true,
        env = "QUAKEREPORT_NEAR_LABEL",
        default_value = DEFAULT_NEAR_LABEL,
        value_name = "TEXT",
        long_help = "Text shown as the location offset when a location has no \" of \"\n\
separator, e.g. \"Pacific-Antarctic Ridge\" becomes \"Near the\" + \"Pacific-Antarctic Ridge\"."
    )]
    pub near_label: String,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Present a single earthquake record.
    #[command(
        long_about = "Build one record from the given fields and print its display row.\n\n\
Examples:\n\
  quakereport present --magnitude 3.2 --location \"5km N of Cairo\" --time 447130200000\n\
  quakereport --format json present --magnitude -0.5 --location \"\" --time 0\n"
    )]
    Present {
        /// Magnitude, any finite number.
        #[arg(long, value_name = "M", allow_negative_numbers = true)]
        magnitude: f64,

        /// Location description, e.g. "88km N of Yelizovo, Russia".
        #[arg(long, value_name = "TEXT")]
        location: String,

        /// Time in milliseconds since the Unix epoch.
        #[arg(long, value_name = "MS", allow_negative_numbers = true)]
        time: i64,

        /// Event page URL (passed through untouched).
        #[arg(long, value_name = "URL", default_value = "")]
        url: String,
    },

    /// Present the built-in sample list.
    #[command(
        long_about = "Present the built-in list of sample earthquakes, newest first.\n\n\
Examples:\n\
  quakereport sample\n\
  quakereport --format md sample --min-magnitude 6 --limit 3\n"
    )]
    Sample {
        /// Only include quakes at or above this magnitude.
        #[arg(long, value_name = "M", allow_negative_numbers = true)]
        min_magnitude: Option<f64>,

        /// Maximum number of rows to print.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show the severity bucket and palette colour of a magnitude.
    #[command(
        long_about = "Classify a magnitude into its severity bucket (1..9 or 10plus) and show\n\
the badge colour the text renderer uses for it.\n\n\
Example:\n\
  quakereport severity 7.4\n"
    )]
    Severity {
        /// Magnitude to classify.
        #[arg(value_name = "M", allow_negative_numbers = true)]
        magnitude: f64,
    },
}

impl Cli {
    /// Log level used when RUST_LOG is not set
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Resolve the display locale from the label and zone flags
    pub fn display_locale(&self) -> Result<DisplayLocale> {
        let time_zone: TimeZonePolicy = self.utc_offset.parse()?;
        Ok(DisplayLocale::default()
            .with_near_label(self.near_label.as_str())
            .with_time_zone(time_zone))
    }

    pub fn render_config(&self) -> RenderConfig {
        let format: OutputFormat = self.format.parse().unwrap_or_default();
        RenderConfig::new(format)
            .with_pretty(self.pretty)
            .with_color(!self.no_color)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = cli.render_config();
    let presenter = Presenter::new(cli.display_locale()?);
    tracing::debug!(locale = ?presenter.locale(), ?render_config, "resolved display settings");

    match cli.command {
        Commands::Present {
            magnitude,
            location,
            time,
            url,
        } => crate::commands::present::run_present(
            &presenter,
            magnitude,
            &location,
            time,
            &url,
            render_config,
        ),

        Commands::Sample {
            min_magnitude,
            limit,
        } => crate::commands::present::run_sample(&presenter, min_magnitude, limit, render_config),

        Commands::Severity { magnitude } => {
            crate::commands::severity::run_severity(magnitude, render_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quakereport").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["sample"]);
        assert_eq!(cli.format, "text");
        assert_eq!(cli.near_label, "Near the");
        assert_eq!(cli.default_log_level(), "warn");
        assert!(cli.render_config().color);
    }

    #[test]
    fn test_present_accepts_negative_values() {
        let cli = parse(&[
            "present",
            "--magnitude",
            "-0.5",
            "--location",
            "Cairo",
            "--time",
            "-60000",
        ]);
        match cli.command {
            Commands::Present { magnitude, time, url, .. } => {
                assert_eq!(magnitude, -0.5);
                assert_eq!(time, -60_000);
                assert_eq!(url, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["sample", "--format", "json", "--pretty", "--no-color", "-v"]);
        let config = cli.render_config();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.pretty);
        assert!(!config.color);
        assert_eq!(cli.default_log_level(), "debug");
    }

    #[test]
    fn test_display_locale_from_flags() {
        let cli = parse(&["--utc-offset", "-10:00", "--near-label", "Cerca de", "sample"]);
        let locale = cli.display_locale().unwrap();
        assert_eq!(
            locale,
            DisplayLocale::new(
                "Cerca de",
                TimeZonePolicy::Fixed(chrono::FixedOffset::west_opt(10 * 3600).unwrap())
            )
        );
    }

    #[test]
    fn test_invalid_zone_is_an_error() {
        let cli = parse(&["--utc-offset", "Mars/Olympus", "sample"]);
        assert!(cli.display_locale().is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from(["quakereport", "--format", "yaml", "sample"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["quakereport", "-q", "-v", "sample"]);
        assert!(result.is_err());
    }
}
