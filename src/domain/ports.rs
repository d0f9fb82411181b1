use crate::core::report::ReportOptions;
use crate::domain::model::UtilityProfile;
use crate::utils::error::Result;

/// Anything that can supply utility profiles for a calculation run.
pub trait ProfileSource {
    fn profiles(&self) -> Result<Vec<UtilityProfile>>;

    /// Overrides for the report parameters. Defaults to the standard report.
    fn report_options(&self) -> ReportOptions {
        ReportOptions::default()
    }
}
