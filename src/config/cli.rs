use crate::config::profile_file::OptionsConfig;
use crate::core::report::ReportOptions;
use crate::domain::model::{Measurement, UtilityProfile};
use crate::domain::ports::ProfileSource;
use crate::domain::reference::Compound;
use crate::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_non_negative, validate_path,
    validate_required_field, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pfas-exposure")]
#[command(about = "PFAS liability exposure calculator for water utilities")]
#[command(after_help = "Examples:
  pfas-exposure --population 100000 --flow 10 --pfoa 25 --pfos 15
  pfas-exposure --population 50000 --flow 5 --pfoa 20 --pfos 30 --pfhxs 15 --genx 8
  pfas-exposure --population 100000 --flow 10 --pfoa 25 --json
  pfas-exposure --profile utilities.toml --format csv --technology ix")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "Example Utility",
        conflicts_with = "profile",
        help = "Utility name"
    )]
    pub name: String,

    #[arg(long, required_unless_present = "profile", help = "Population served")]
    pub population: Option<u64>,

    #[arg(
        long,
        required_unless_present = "profile",
        allow_negative_numbers = true,
        help = "Daily flow in MGD (million gallons per day)"
    )]
    pub flow: Option<f64>,

    #[arg(
        long,
        default_value = "5",
        conflicts_with = "profile",
        help = "Estimated years of exposure"
    )]
    pub years: u32,

    #[arg(
        long,
        default_value = "0",
        conflicts_with = "profile",
        allow_negative_numbers = true,
        help = "PFOA concentration in ppt"
    )]
    pub pfoa: f64,

    #[arg(
        long,
        default_value = "0",
        conflicts_with = "profile",
        allow_negative_numbers = true,
        help = "PFOS concentration in ppt"
    )]
    pub pfos: f64,

    #[arg(
        long,
        default_value = "0",
        conflicts_with = "profile",
        allow_negative_numbers = true,
        help = "PFHxS concentration in ppt"
    )]
    pub pfhxs: f64,

    #[arg(
        long,
        default_value = "0",
        conflicts_with = "profile",
        allow_negative_numbers = true,
        help = "PFNA concentration in ppt"
    )]
    pub pfna: f64,

    #[arg(
        long,
        default_value = "0",
        conflicts_with = "profile",
        allow_negative_numbers = true,
        help = "HFPO-DA (GenX) concentration in ppt"
    )]
    pub genx: f64,

    /// Overrides the profile file's `[options]` when both are given.
    #[arg(
        long,
        help = "Treatment technology: gac, ix, ro or novel (unknown values use gac) [default: gac]"
    )]
    pub technology: Option<String>,

    #[arg(long, help = "Days of violation used for penalties [default: 365]")]
    pub violation_days: Option<u32>,

    #[arg(long, help = "Treatment cost horizon in years [default: 20]")]
    pub horizon_years: Option<u32>,

    #[arg(long, value_enum, default_value = "text", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, help = "Output as JSON instead of formatted report")]
    pub json: bool,

    #[arg(
        long,
        conflicts_with_all = ["population", "flow"],
        help = "TOML file describing one or more utilities"
    )]
    pub profile: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Report options passed explicitly on the command line.
    pub fn option_overrides(&self) -> OptionsConfig {
        OptionsConfig {
            violation_days: self.violation_days,
            technology: self.technology.clone(),
            horizon_years: self.horizon_years,
        }
    }

    pub fn concentrations(&self) -> [(Compound, f64); 5] {
        [
            (Compound::Pfoa, self.pfoa),
            (Compound::Pfos, self.pfos),
            (Compound::Pfhxs, self.pfhxs),
            (Compound::Pfna, self.pfna),
            (Compound::HfpoDa, self.genx),
        ]
    }

    /// Measurements for every compound with a positive concentration.
    pub fn measurements(&self) -> Vec<Measurement> {
        self.concentrations()
            .into_iter()
            .filter(|(_, concentration)| *concentration > 0.0)
            .map(|(compound, concentration)| Measurement::new(compound, concentration))
            .collect()
    }
}

impl ProfileSource for CliConfig {
    fn profiles(&self) -> Result<Vec<UtilityProfile>> {
        let population = *validate_required_field("--population", &self.population)?;
        let flow = *validate_required_field("--flow", &self.flow)?;

        let profile = UtilityProfile::new(self.name.clone(), population, flow, self.measurements())
            .with_years_of_exposure(self.years);
        Ok(vec![profile])
    }

    fn report_options(&self) -> ReportOptions {
        self.option_overrides().apply(ReportOptions::default())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.profile {
            return validate_path("--profile", path);
        }

        validate_non_empty_string("--name", &self.name)?;
        validate_required_field("--population", &self.population)?;
        let flow = *validate_required_field("--flow", &self.flow)?;
        validate_non_negative("--flow", flow)?;

        for (compound, concentration) in self.concentrations() {
            validate_finite(compound.name(), concentration)?;
        }
        Ok(())
    }
}
