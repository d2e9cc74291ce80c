//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use yieldline_bonds::BondTerms;

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::settings::OutputSettings;

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Heading shown above the table.
    fn title(&self) -> &'static str;

    /// Table body.
    fn table(&self, precision: usize) -> String;

    /// The single value printed in minimal mode.
    fn minimal(&self, precision: usize) -> String;
}

/// Renders a report according to the output settings.
pub fn render<R: Report>(report: &R, output: &OutputSettings) -> CliResult<String> {
    Ok(match output.format {
        OutputFormat::Table => format!(
            "{}\n{}",
            report.title().bold().underline(),
            report.table(output.precision)
        ),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Minimal => report.minimal(output.precision),
    })
}

/// Renders and prints a report to stdout.
pub fn print_report<R: Report>(report: &R, output: &OutputSettings) -> CliResult<()> {
    println!("{}", render(report, output)?);
    Ok(())
}

/// Formats rows as a rounded table with a left-aligned first column.
pub fn table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No results.".to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a number.
    pub fn number(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format!("{value:.precision$}"))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn percent(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format_percent(value, precision))
    }
}

/// Rows describing a bond's terms.
pub fn terms_rows(terms: &BondTerms) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Face Value", terms.face_value().to_string()),
        KeyValue::new("Coupon", format_percent(terms.coupon_rate(), 4)),
        KeyValue::new("Maturity", format!("{} years", terms.maturity_years())),
        KeyValue::new("Frequency", frequency_label(terms.payments_per_year())),
    ]
}

/// Formats a decimal rate as a percentage string.
pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:.precision$}%", value * 100.0)
}

/// Human name for a payment frequency.
pub fn frequency_label(payments_per_year: u32) -> String {
    match payments_per_year {
        1 => "Annual".to_string(),
        2 => "SemiAnnual".to_string(),
        4 => "Quarterly".to_string(),
        12 => "Monthly".to_string(),
        n => format!("{n} per year"),
    }
}
