//! Output surfaces for finished reports.

pub mod currency;
pub mod text;

pub use currency::format_currency;
pub use text::{render_text, TextReport};

use crate::core::report::LiabilityReport;
use crate::utils::error::{ExposureError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(reports: &[LiabilityReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports.iter().map(render_text).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => render_json(reports),
        OutputFormat::Csv => render_csv(reports),
    }
}

/// A single report renders as an object, several as an array.
pub fn render_json(reports: &[LiabilityReport]) -> Result<String> {
    let json = match reports {
        [report] => serde_json::to_string_pretty(report)?,
        _ => serde_json::to_string_pretty(reports)?,
    };
    Ok(json)
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    utility: &'a str,
    population_served: u64,
    daily_flow: f64,
    in_compliance: bool,
    regulatory_total: f64,
    litigation_low: f64,
    litigation_mid: f64,
    litigation_high: f64,
    treatment_technology: &'static str,
    treatment_total: f64,
    total_low: f64,
    total_mid: f64,
    total_high: f64,
}

impl<'a> From<&'a LiabilityReport> for SummaryRow<'a> {
    fn from(report: &'a LiabilityReport) -> Self {
        Self {
            utility: &report.utility.name,
            population_served: report.utility.population_served,
            daily_flow: report.utility.daily_flow,
            in_compliance: report.compliance_status,
            regulatory_total: report.regulatory_penalties.total,
            litigation_low: report.litigation_exposure.low,
            litigation_mid: report.litigation_exposure.mid,
            litigation_high: report.litigation_exposure.high,
            treatment_technology: report.treatment_costs.technology.as_str(),
            treatment_total: report.treatment_costs.total,
            total_low: report.total_exposure.low,
            total_mid: report.total_exposure.mid,
            total_high: report.total_exposure.high,
        }
    }
}

/// One summary row per report.
pub fn render_csv(reports: &[LiabilityReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for report in reports {
        writer.serialize(SummaryRow::from(report))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExposureError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| ExposureError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
