use clap::ValueEnum;
use colored::*;
use digitring::DigitRing;
use serde::Serialize;

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Compact,
    Pretty,
}

/// Whether pretty output is colored
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_colorize(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }

    /// Applies the mode to every `colored` string rendered afterwards
    pub fn apply(&self) {
        colored::control::set_override(self.should_colorize());
    }
}

/// What gets printed for a ring
#[derive(Debug, Serialize)]
pub struct RingReport {
    pub label: String,
    pub base: u32,
    pub digits: String,
    pub len: usize,
    pub decimal: String,
}

impl RingReport {
    pub fn new(label: impl Into<String>, ring: &DigitRing) -> Self {
        Self {
            label: label.into(),
            base: ring.base().radix(),
            digits: ring.to_string(),
            len: ring.len(),
            decimal: ring.to_decimal_string(),
        }
    }
}

/// Render a report in the requested format
pub fn format_report(report: &RingReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string()),
        OutputFormat::Compact => {
            if report.digits.is_empty() {
                "(empty)".to_string()
            } else {
                report.digits.clone()
            }
        }
        OutputFormat::Pretty => {
            let digits = if report.digits.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                report.digits.bright_green().to_string()
            };
            format!(
                "{} {} {} {} {}",
                format!("{}:", report.label).bold(),
                digits,
                format!("(base {}, {} digits)", report.base, report.len).dimmed(),
                "=".dimmed(),
                report.decimal.cyan(),
            )
        }
    }
}
