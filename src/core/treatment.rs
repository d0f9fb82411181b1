//! Capital and operating cost of installing PFAS treatment.
//!
//! Operating costs are summed over the horizon without discounting.

use crate::domain::model::UtilityProfile;
use crate::domain::reference::{Technology, DEFAULT_HORIZON_YEARS};
use serde::Serialize;

const DAYS_PER_YEAR: f64 = 365.0;
const THOUSAND_GALLONS_PER_MG: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentCosts {
    pub technology: Technology,
    pub capital: f64,
    pub annual_om: f64,
    pub years: u32,
    pub total_om: f64,
    pub total: f64,
    /// Operating cost per 1000 gallons treated.
    pub cost_per_unit: f64,
}

/// Granular activated carbon over the default horizon.
pub fn calculate_treatment_costs(profile: &UtilityProfile) -> TreatmentCosts {
    calculate_treatment_costs_for(profile, Technology::Gac, DEFAULT_HORIZON_YEARS)
}

pub fn calculate_treatment_costs_for(
    profile: &UtilityProfile,
    technology: Technology,
    years: u32,
) -> TreatmentCosts {
    let coefficients = technology.coefficients();
    let flow = profile.daily_flow_mgd();

    let capital = coefficients.capital_per_mgd * flow;
    let annual_om = DAYS_PER_YEAR * flow * THOUSAND_GALLONS_PER_MG * coefficients.om_per_1000gal;
    let total_om = annual_om * f64::from(years);

    TreatmentCosts {
        technology,
        capital,
        annual_om,
        years,
        total_om,
        total: capital + total_om,
        cost_per_unit: coefficients.om_per_1000gal,
    }
}
