//! EPA maximum-contaminant-level violation penalties.
//!
//! Penalties are statutory flat rates: every compound over its limit is
//! charged the same daily rate no matter how far over it is.

use crate::domain::model::UtilityProfile;
use crate::domain::reference::{DEFAULT_VIOLATION_DAYS, PENALTY_RATE_PER_DAY};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundPenalty {
    pub daily_penalty: f64,
    pub annual_penalty: f64,
    pub concentration: f64,
    pub limit: f64,
    pub exceedance_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegulatoryPenalties {
    pub total: f64,
    pub per_compound: BTreeMap<String, CompoundPenalty>,
    pub violation_days: u32,
    pub note: String,
}

/// Penalties over the default one-year violation window.
pub fn calculate_regulatory_penalties(profile: &UtilityProfile) -> RegulatoryPenalties {
    calculate_regulatory_penalties_for(profile, DEFAULT_VIOLATION_DAYS)
}

pub fn calculate_regulatory_penalties_for(
    profile: &UtilityProfile,
    violation_days: u32,
) -> RegulatoryPenalties {
    if profile.in_compliance() {
        return RegulatoryPenalties {
            total: 0.0,
            per_compound: BTreeMap::new(),
            violation_days,
            note: "In compliance - no penalties".to_string(),
        };
    }

    let mut per_compound = BTreeMap::new();
    let mut violations = 0usize;

    for measurement in profile.exceeding_measurements() {
        violations += 1;
        // exceeding measurements always have a limit
        let limit = measurement.limit_ppt().unwrap_or(f64::INFINITY);
        per_compound.insert(
            measurement.compound().name().to_string(),
            CompoundPenalty {
                daily_penalty: PENALTY_RATE_PER_DAY,
                annual_penalty: PENALTY_RATE_PER_DAY * f64::from(violation_days),
                concentration: measurement.concentration_ppt(),
                limit,
                exceedance_factor: measurement.exceedance_factor(),
            },
        );
    }

    let total = per_compound.values().map(|p| p.annual_penalty).sum();

    RegulatoryPenalties {
        total,
        per_compound,
        violation_days,
        note: format!("Penalties for {} compounds exceeding MCL", violations),
    }
}
