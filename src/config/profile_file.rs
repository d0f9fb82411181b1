use crate::core::report::ReportOptions;
use crate::domain::model::{Measurement, UtilityProfile};
use crate::domain::ports::ProfileSource;
use crate::domain::reference::{Technology, DEFAULT_YEARS_OF_EXPOSURE};
use crate::utils::error::{ExposureError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_non_negative, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// A TOML document describing one or more utilities.
///
/// ```toml
/// [options]
/// technology = "ix"
///
/// [[utilities]]
/// name = "Springfield Water"
/// population_served = 100000
/// daily_flow_mgd = 10.0
///
/// [[utilities.measurements]]
/// compound = "PFOA"
/// concentration_ppt = 25.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileFile {
    pub options: Option<OptionsConfig>,
    #[serde(default)]
    pub utilities: Vec<UtilityConfig>,
    #[serde(skip)]
    overrides: OptionsConfig,
}

/// Partial report options; unset fields leave the underlying value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsConfig {
    pub violation_days: Option<u32>,
    pub technology: Option<String>,
    pub horizon_years: Option<u32>,
}

impl OptionsConfig {
    pub fn apply(&self, base: ReportOptions) -> ReportOptions {
        ReportOptions {
            violation_days: self.violation_days.unwrap_or(base.violation_days),
            technology: self
                .technology
                .as_deref()
                .map(Technology::parse_lossy)
                .unwrap_or(base.technology),
            horizon_years: self.horizon_years.unwrap_or(base.horizon_years),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UtilityConfig {
    pub name: String,
    pub population_served: u64,
    pub daily_flow_mgd: f64,
    pub years_of_exposure: Option<u32>,
    #[serde(default)]
    pub measurements: Vec<MeasurementConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementConfig {
    pub compound: String,
    pub concentration_ppt: f64,
}

impl ProfileFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExposureError::IoError)?;
        tracing::debug!("Read profile file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExposureError::ProfileFileError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExposureError::ProfileFileError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Options that take precedence over the file's `[options]` table.
    pub fn with_overrides(mut self, overrides: OptionsConfig) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.utilities.is_empty() {
            return Err(ExposureError::ProfileFileError {
                message: "no [[utilities]] defined".to_string(),
            });
        }

        for utility in &self.utilities {
            validate_non_empty_string("utilities.name", &utility.name)?;
            validate_non_negative(
                &format!("{}.daily_flow_mgd", utility.name),
                utility.daily_flow_mgd,
            )?;
            for measurement in &utility.measurements {
                validate_non_empty_string("measurements.compound", &measurement.compound)?;
                validate_finite(
                    &format!("{}.{}", utility.name, measurement.compound),
                    measurement.concentration_ppt,
                )?;
            }
        }

        Ok(())
    }
}

impl UtilityConfig {
    fn to_profile(&self) -> UtilityProfile {
        let measurements = self
            .measurements
            .iter()
            .filter(|m| m.concentration_ppt > 0.0)
            .map(|m| Measurement::new(m.compound.as_str(), m.concentration_ppt))
            .collect();

        UtilityProfile::new(
            self.name.clone(),
            self.population_served,
            self.daily_flow_mgd,
            measurements,
        )
        .with_years_of_exposure(self.years_of_exposure.unwrap_or(DEFAULT_YEARS_OF_EXPOSURE))
    }
}

impl ProfileSource for ProfileFile {
    fn profiles(&self) -> Result<Vec<UtilityProfile>> {
        tracing::info!("Loaded {} utilities from profile file", self.utilities.len());
        Ok(self.utilities.iter().map(UtilityConfig::to_profile).collect())
    }

    /// Defaults, then the file's `[options]`, then the overrides.
    fn report_options(&self) -> ReportOptions {
        let from_file = match &self.options {
            Some(options) => options.apply(ReportOptions::default()),
            None => ReportOptions::default(),
        };
        self.overrides.apply(from_file)
    }
}

impl Validate for ProfileFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::Compound;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_UTILITIES: &str = r#"
[[utilities]]
name = "Springfield Water"
population_served = 100000
daily_flow_mgd = 10.0

[[utilities.measurements]]
compound = "PFOA"
concentration_ppt = 25.0

[[utilities.measurements]]
compound = "PFBS"
concentration_ppt = 0.0

[[utilities]]
name = "Shelbyville Utilities"
population_served = 20000
daily_flow_mgd = 2.5
years_of_exposure = 12

[[utilities.measurements]]
compound = "GenX"
concentration_ppt = 8.0
"#;

    #[test]
    fn test_parse_utilities() {
        let file = ProfileFile::from_toml_str(TWO_UTILITIES).unwrap();
        assert!(file.validate().is_ok());

        let profiles = file.profiles().unwrap();
        assert_eq!(profiles.len(), 2);

        assert_eq!(profiles[0].name(), "Springfield Water");
        assert_eq!(profiles[0].years_of_exposure(), DEFAULT_YEARS_OF_EXPOSURE);
        // zero concentrations are dropped
        assert_eq!(profiles[0].measurements().len(), 1);

        assert_eq!(profiles[1].years_of_exposure(), 12);
        assert_eq!(profiles[1].measurements()[0].compound(), &Compound::HfpoDa);
        assert!(profiles[1].in_compliance());
    }

    #[test]
    fn test_file_options_override_defaults() {
        let content = format!(
            "[options]\ntechnology = \"ro\"\nhorizon_years = 30\n{}",
            TWO_UTILITIES
        );
        let file = ProfileFile::from_toml_str(&content).unwrap();

        let options = file.report_options();
        assert_eq!(options.technology, Technology::Ro);
        assert_eq!(options.horizon_years, 30);
        assert_eq!(options.violation_days, 365);
    }

    #[test]
    fn test_explicit_overrides_win_over_file_options() {
        let content = format!(
            "[options]\ntechnology = \"gac\"\nhorizon_years = 30\n{}",
            TWO_UTILITIES
        );
        let file = ProfileFile::from_toml_str(&content)
            .unwrap()
            .with_overrides(OptionsConfig {
                technology: Some("ro".to_string()),
                violation_days: Some(180),
                ..OptionsConfig::default()
            });

        let options = file.report_options();
        assert_eq!(options.technology, Technology::Ro);
        assert_eq!(options.violation_days, 180);
        // not overridden, so the file's value stands
        assert_eq!(options.horizon_years, 30);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PFAS_TEST_UTILITY_NAME", "Capital City Water");

        let content = r#"
[[utilities]]
name = "${PFAS_TEST_UTILITY_NAME}"
population_served = 1000
daily_flow_mgd = 1.0
"#;

        let file = ProfileFile::from_toml_str(content).unwrap();
        assert_eq!(file.utilities[0].name, "Capital City Water");

        std::env::remove_var("PFAS_TEST_UTILITY_NAME");
    }

    #[test]
    fn test_empty_file_fails_validation() {
        let file = ProfileFile::from_toml_str("").unwrap();
        assert!(matches!(
            file.validate(),
            Err(ExposureError::ProfileFileError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ProfileFile::from_toml_str("[[utilities]\nname = ").unwrap_err();
        assert!(matches!(err, ExposureError::ProfileFileError { .. }));
    }

    #[test]
    fn test_profile_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(TWO_UTILITIES.as_bytes()).unwrap();

        let file = ProfileFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.utilities.len(), 2);
    }
}
