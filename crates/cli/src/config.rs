//! Command-line configuration.

use clap::{Parser, ValueEnum};

use minierp_observability::LogFormat;
use minierp_reporting::ReportFormatter;

/// Mini-ERP inventory module.
///
/// Register products, record stock movements, and print stock and
/// valuation (ABC curve) reports. All data lives in memory for the duration
/// of the session.
#[derive(Parser, Debug, Clone)]
#[command(name = "minierp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Currency symbol printed before money amounts
    #[arg(long, default_value = "R$")]
    pub currency: String,

    /// Disable ANSI colour in reports
    #[arg(long)]
    pub no_color: bool,

    /// Log filter (e.g. "warn", "minierp_inventory=debug")
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency: String,
    pub color: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Settings {
    /// Colour is only used when requested *and* stdout is a terminal.
    pub fn from_cli(cli: Cli, stdout_is_terminal: bool) -> Self {
        Self {
            currency: cli.currency.trim().to_string(),
            color: !cli.no_color && stdout_is_terminal,
            log_level: cli.log_level,
            log_format: cli.log_format.into(),
        }
    }

    pub fn formatter(&self) -> ReportFormatter {
        ReportFormatter::new(self.currency.clone(), self.color)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "R$".to_string(),
            color: false,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
