//! Rendering of comparison reports and sighting results
//!
//! The text format reproduces C `printf` output (`%e`, `%.10e`), the other
//! formats are meant for scripts.

use serde::Serialize;

use crate::algorithms::SightingSolution;
use crate::api::types::{CommandResult, OutputFormat};
use crate::processing::ComparisonReport;

/// Format `value` like C `printf("%.*e", precision, value)`.
///
/// The exponent always carries a sign and at least two digits.
pub fn format_exponential(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.*e}", precision, value);
    if let Some(pos) = formatted.find('e') {
        if let Ok(exponent) = formatted[pos + 1..].parse::<i32>() {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{}e{}{:02}", &formatted[..pos], sign, exponent.abs());
        }
    }
    formatted
}

/// Renders results into one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &ComparisonReport) -> CommandResult<String>;
    fn format_sighting(&self, sighting: &SightingSolution) -> CommandResult<String>;
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}

/// printf-style text, one result per line
pub struct TextFormatter {
    /// Fraction digits for report columns
    pub report_precision: usize,
    /// Fraction digits for distances and heights
    pub sighting_precision: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            report_precision: 6,
            sighting_precision: 10,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &ComparisonReport) -> CommandResult<String> {
        let p = self.report_precision;
        let mut output = String::new();
        for row in &report.rows {
            output.push_str(&format!(
                "{} {} {} {} {} {}\n",
                row.depth,
                format_exponential(row.reference, p),
                format_exponential(row.taylor, p),
                format_exponential(row.taylor_error, p),
                format_exponential(row.cfrac, p),
                format_exponential(row.cfrac_error, p),
            ));
        }
        Ok(output)
    }

    fn format_sighting(&self, sighting: &SightingSolution) -> CommandResult<String> {
        let mut output = format!("{}\n", format_exponential(sighting.distance_m, self.sighting_precision));
        if let Some(height) = sighting.object_height_m {
            output.push_str(&format!("{}\n", format_exponential(height, self.sighting_precision)));
        }
        Ok(output)
    }
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> CommandResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json + "\n")
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ComparisonReport) -> CommandResult<String> {
        self.to_json(report)
    }

    fn format_sighting(&self, sighting: &SightingSolution) -> CommandResult<String> {
        self.to_json(sighting)
    }
}

/// CSV formatter
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_header(&self) -> &'static str {
        "depth,reference,taylor,taylor_error,cfrac,cfrac_error"
    }

    pub fn sighting_header(&self) -> &'static str {
        "distance_m,object_height_m"
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &ComparisonReport) -> CommandResult<String> {
        let mut output = String::new();
        if self.include_header {
            output.push_str(self.report_header());
            output.push('\n');
        }
        for row in &report.rows {
            output.push_str(&format!(
                "{},{},{},{},{},{}\n",
                row.depth, row.reference, row.taylor, row.taylor_error, row.cfrac, row.cfrac_error
            ));
        }
        Ok(output)
    }

    fn format_sighting(&self, sighting: &SightingSolution) -> CommandResult<String> {
        let mut output = String::new();
        if self.include_header {
            output.push_str(self.sighting_header());
            output.push('\n');
        }
        let height = sighting
            .object_height_m
            .map(|h| h.to_string())
            .unwrap_or_default();
        output.push_str(&format!("{},{}\n", sighting.distance_m, height));
        Ok(output)
    }
}
