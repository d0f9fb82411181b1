//! Composes the three liability models into a single report.

use crate::core::litigation::{calculate_litigation_exposure, LitigationExposure};
use crate::core::regulatory::{calculate_regulatory_penalties_for, RegulatoryPenalties};
use crate::core::treatment::{calculate_treatment_costs_for, TreatmentCosts};
use crate::domain::model::UtilityProfile;
use crate::domain::reference::{
    Compound, Technology, DEFAULT_HORIZON_YEARS, DEFAULT_VIOLATION_DAYS,
};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

pub const DISCLAIMER: &str = "This report is for educational purposes only and does not \
constitute legal advice. Actual liability may vary significantly based on specific \
circumstances. Consult with qualified legal counsel.";

/// Parameters passed through to the individual models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub violation_days: u32,
    pub technology: Technology,
    pub horizon_years: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            violation_days: DEFAULT_VIOLATION_DAYS,
            technology: Technology::Gac,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilitySummary {
    pub name: String,
    pub population_served: u64,
    pub daily_flow: f64,
    pub years_of_exposure: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PfasLevel {
    pub compound: Compound,
    pub concentration: f64,
    #[serde(serialize_with = "serialize_limit")]
    pub limit: Option<f64>,
    pub exceeds_limit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExposureTotals {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiabilityReport {
    pub utility: UtilitySummary,
    pub pfas_levels: Vec<PfasLevel>,
    pub compliance_status: bool,
    pub regulatory_penalties: RegulatoryPenalties,
    pub litigation_exposure: LitigationExposure,
    pub treatment_costs: TreatmentCosts,
    pub total_exposure: ExposureTotals,
    pub report_generated: DateTime<Utc>,
    pub disclaimer: &'static str,
}

fn serialize_limit<S: Serializer>(limit: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match limit {
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_str("N/A"),
    }
}

/// Standard report: one-year violation window, GAC treatment over 20 years.
pub fn generate_report(profile: &UtilityProfile) -> LiabilityReport {
    generate_report_with(profile, &ReportOptions::default())
}

pub fn generate_report_with(profile: &UtilityProfile, options: &ReportOptions) -> LiabilityReport {
    generate_report_at(profile, options, Utc::now())
}

pub fn generate_report_at(
    profile: &UtilityProfile,
    options: &ReportOptions,
    generated_at: DateTime<Utc>,
) -> LiabilityReport {
    let regulatory = calculate_regulatory_penalties_for(profile, options.violation_days);
    let litigation = calculate_litigation_exposure(profile);
    let treatment =
        calculate_treatment_costs_for(profile, options.technology, options.horizon_years);

    let fixed = regulatory.total + treatment.total;
    let total_exposure = ExposureTotals {
        low: fixed + litigation.low,
        mid: fixed + litigation.mid,
        high: fixed + litigation.high,
    };

    let pfas_levels = profile
        .measurements()
        .iter()
        .map(|m| PfasLevel {
            compound: m.compound().clone(),
            concentration: m.concentration_ppt(),
            limit: m.limit_ppt(),
            exceeds_limit: m.exceeds_limit(),
        })
        .collect();

    LiabilityReport {
        utility: UtilitySummary {
            name: profile.name().to_string(),
            population_served: profile.population_served(),
            daily_flow: profile.daily_flow_mgd(),
            years_of_exposure: profile.years_of_exposure(),
        },
        pfas_levels,
        compliance_status: profile.in_compliance(),
        regulatory_penalties: regulatory,
        litigation_exposure: litigation,
        treatment_costs: treatment,
        total_exposure,
        report_generated: generated_at,
        disclaimer: DISCLAIMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Measurement;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap()
    }

    fn profile() -> UtilityProfile {
        UtilityProfile::new(
            "Springfield Water",
            100_000,
            10.0,
            vec![
                Measurement::new(Compound::Pfoa, 25.0),
                Measurement::new("PFBS", 40.0),
            ],
        )
    }

    #[test]
    fn test_totals_combine_all_models() {
        let report = generate_report_at(&profile(), &ReportOptions::default(), fixed_time());
        let fixed = report.regulatory_penalties.total + report.treatment_costs.total;

        assert_eq!(report.total_exposure.low, fixed + report.litigation_exposure.low);
        assert_eq!(report.total_exposure.mid, fixed + report.litigation_exposure.mid);
        assert_eq!(report.total_exposure.high, fixed + report.litigation_exposure.high);
        assert!(report.total_exposure.low <= report.total_exposure.mid);
        assert!(report.total_exposure.mid <= report.total_exposure.high);
    }

    #[test]
    fn test_default_options_use_gac_over_twenty_years() {
        let report = generate_report(&profile());
        assert_eq!(report.treatment_costs.technology, Technology::Gac);
        assert_eq!(report.treatment_costs.years, 20);
        assert_eq!(report.regulatory_penalties.violation_days, 365);
    }

    #[test]
    fn test_options_reach_the_models() {
        let options = ReportOptions {
            violation_days: 90,
            technology: Technology::Ix,
            horizon_years: 10,
        };
        let report = generate_report_at(&profile(), &options, fixed_time());

        assert_eq!(report.regulatory_penalties.violation_days, 90);
        assert_eq!(report.treatment_costs.technology, Technology::Ix);
        assert_eq!(report.treatment_costs.years, 10);
    }

    #[test]
    fn test_json_shape() {
        let report = generate_report_at(&profile(), &ReportOptions::default(), fixed_time());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["utility"]["name"], "Springfield Water");
        assert_eq!(json["utility"]["daily_flow"], 10.0);
        assert_eq!(json["pfas_levels"][0]["compound"], "PFOA");
        assert_eq!(json["pfas_levels"][0]["limit"], 4.0);
        assert_eq!(json["pfas_levels"][0]["exceeds_limit"], true);
        assert_eq!(json["pfas_levels"][1]["limit"], "N/A");
        assert_eq!(json["pfas_levels"][1]["exceeds_limit"], false);
        assert_eq!(json["compliance_status"], false);
        assert_eq!(json["treatment_costs"]["technology"], "gac");
        assert_eq!(json["treatment_costs"]["cost_per_unit"], 0.75);
        assert!(json["regulatory_penalties"]["per_compound"]["PFOA"].is_object());
        assert_eq!(json["report_generated"], "2024-04-10T12:00:00Z");
        assert_eq!(json["disclaimer"], DISCLAIMER);
    }
}
