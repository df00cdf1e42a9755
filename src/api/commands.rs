//! Command implementations behind the CLI modes
//!
//! Each command takes the raw argument text, validates it, runs the
//! computation and returns the rendered output.

use tracing::info;

use crate::algorithms::SightingSolver;
use crate::api::formatting::formatter_for;
use crate::api::types::{CommandError, CommandResult, OutputFormat};
use crate::core::{Angle, DepthRange, Height};
use crate::processing::parser::{parse_angle, parse_depth_range, parse_height};
use crate::processing::ComparisonReport;
use crate::utils::config::ToolConfig;

/// `--tan A N M`
pub fn run_comparison(
    angle: &str,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> CommandResult<String> {
    let alpha = parse_angle("A", angle)?;
    let depths = parse_depth_range(from, to)?;
    info!(angle = alpha.radians(), from = depths.from(), to = depths.to(), "running comparison");

    let report = ComparisonReport::generate(alpha, depths);
    formatter_for(format).format_report(&report)
}

/// `[-c C] -m A [B]`
pub fn run_sighting(
    height: Option<&str>,
    alpha: &str,
    beta: Option<&str>,
    config: &ToolConfig,
    format: OutputFormat,
) -> CommandResult<String> {
    let height = match height {
        Some(text) => parse_height("C", text)?,
        None => Height::new(config.default_observer_height)?,
    };
    let alpha = parse_angle("A", alpha)?;
    let beta = beta.map(|text| parse_angle("B", text)).transpose()?;
    info!(
        height = height.meters(),
        alpha = alpha.radians(),
        has_beta = beta.is_some(),
        "running sighting"
    );

    let solution = SightingSolver::new().solve(height, alpha, beta);
    formatter_for(format).format_sighting(&solution)
}

/// Fixed demonstration run: one comparison table and two sightings.
///
/// The parts have different columns, so CSV is refused.
pub fn run_demo(format: OutputFormat) -> CommandResult<String> {
    if format == OutputFormat::Csv {
        return Err(CommandError::UnsupportedFormat { mode: "demo", format });
    }
    let formatter = formatter_for(format);
    let solver = SightingSolver::new();

    let report = ComparisonReport::generate(Angle::new(1.024)?, DepthRange::new(6, 10)?);
    let mut output = formatter.format_report(&report)?;

    let sightings = [(1.5, 0.3, 0.9), (1.7, 0.15, 1.3)];
    for (height, alpha, beta) in sightings {
        let solution = solver.solve(Height::new(height)?, Angle::new(alpha)?, Some(Angle::new(beta)?));
        output.push_str(&formatter.format_sighting(&solution)?);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::validation::error::ValidationError;

    #[test]
    fn test_comparison_text_output() {
        let output = run_comparison("1.024", "6", "10", OutputFormat::Text).unwrap();
        assert_eq!(output.lines().count(), 5);
        assert!(output.starts_with("6 1.642829e+00 "));
        assert!(output.lines().last().unwrap().starts_with("10 1.642829e+00 1.642552e+00 2.773337e-04 "));
    }

    #[test]
    fn test_comparison_rejects_bad_input() {
        assert!(matches!(
            run_comparison("1.5", "6", "10", OutputFormat::Text),
            Err(CommandError::InvalidParameters(ValidationError::OutOfRange { .. }))
        ));
        assert!(matches!(
            run_comparison("1.0", "six", "10", OutputFormat::Text),
            Err(CommandError::InvalidParameters(ValidationError::Unparsable { .. }))
        ));
        assert!(matches!(
            run_comparison("1.0", "10", "6", OutputFormat::Text),
            Err(CommandError::InvalidParameters(ValidationError::EmptyRange { from: 10, to: 6 }))
        ));
    }

    #[test]
    fn test_sighting_default_height() {
        let config = ToolConfig::default();
        let output = run_sighting(None, "0.3", None, &config, OutputFormat::Text).unwrap();
        assert_eq!(output, "4.8490922156e+00\n");
    }

    #[test]
    fn test_sighting_with_height_and_beta() {
        let config = ToolConfig::default();
        let output = run_sighting(Some("1.5"), "0.3", Some("0.9"), &config, OutputFormat::Text).unwrap();
        assert_eq!(output, "4.8490922156e+00\n7.6106234032e+00\n");
    }

    #[test]
    fn test_sighting_uses_config_height() {
        let config = ToolConfig {
            default_observer_height: 1.7,
            ..Default::default()
        };
        let output = run_sighting(None, "0.15", Some("1.3"), &config, OutputFormat::Text).unwrap();
        assert_eq!(output, "1.1248205560e+01\n4.2217188781e+01\n");
    }

    #[test]
    fn test_sighting_rejects_bad_height() {
        let config = ToolConfig::default();
        assert!(run_sighting(Some("0"), "0.3", None, &config, OutputFormat::Text).is_err());
        assert!(run_sighting(Some("101"), "0.3", None, &config, OutputFormat::Text).is_err());
        assert!(run_sighting(Some("1.5"), "0.3", Some("abc"), &config, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_demo_output() {
        let output = run_demo(OutputFormat::Text).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(&lines[5..], &[
            "4.8490922156e+00",
            "7.6106234032e+00",
            "1.1248205560e+01",
            "4.2217188781e+01",
        ]);
    }

    #[test]
    fn test_loaded_config_keeps_sighting_depth() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_observer_height": 1.5, "output_format": "text" }}"#).unwrap();
        let config = ToolConfig::load_from_file(file.path()).unwrap();

        let output = run_sighting(None, "1.3", Some("0.9"), &config, OutputFormat::Text).unwrap();
        let distance = crate::distance_from_angle(1.5, 1.3);
        let height = crate::height_from_angles(1.5, 0.9, distance);
        assert_eq!(
            output,
            format!(
                "{}\n{}\n",
                crate::api::format_exponential(distance, 10),
                crate::api::format_exponential(height, 10)
            )
        );
        assert!(output.starts_with("4.1642346981e-01\n"));
    }

    #[test]
    fn test_demo_refuses_csv() {
        assert_eq!(
            run_demo(OutputFormat::Csv),
            Err(CommandError::UnsupportedFormat { mode: "demo", format: OutputFormat::Csv })
        );
        assert!(run_demo(OutputFormat::Json).is_ok());
    }
}
