//! Third-party litigation exposure, scaled from settlement data.
//!
//! The low estimate deliberately omits the duration multiplier; mid and high
//! apply it.

use crate::domain::model::UtilityProfile;
use crate::domain::reference::{AFFECTED_POPULATION_SHARE, LITIGATION_BANDS};
use serde::Serialize;

pub const MAX_EXCEEDANCE_MULTIPLIER: f64 = 3.0;
pub const MAX_DURATION_MULTIPLIER: f64 = 2.0;

const EXCEEDANCE_WEIGHT: f64 = 0.1;
const DURATION_WEIGHT: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LitigationExposure {
    pub affected_population: u64,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub exceedance_multiplier: f64,
    pub duration_multiplier: f64,
    pub note: String,
}

pub fn exceedance_multiplier(total_exceedance: f64) -> f64 {
    (1.0 + total_exceedance * EXCEEDANCE_WEIGHT).min(MAX_EXCEEDANCE_MULTIPLIER)
}

pub fn duration_multiplier(years_of_exposure: u32) -> f64 {
    (1.0 + f64::from(years_of_exposure) * DURATION_WEIGHT).min(MAX_DURATION_MULTIPLIER)
}

pub fn calculate_litigation_exposure(profile: &UtilityProfile) -> LitigationExposure {
    if profile.in_compliance() {
        return LitigationExposure {
            affected_population: 0,
            low: 0.0,
            mid: 0.0,
            high: 0.0,
            exceedance_multiplier: 1.0,
            duration_multiplier: 1.0,
            note: "In compliance - reduced litigation risk".to_string(),
        };
    }

    // truncates toward zero
    let affected_population =
        (profile.population_served() as f64 * AFFECTED_POPULATION_SHARE) as u64;
    let affected = affected_population as f64;

    let exceedance_mult = exceedance_multiplier(profile.total_exceedance());
    let duration_mult = duration_multiplier(profile.years_of_exposure());

    LitigationExposure {
        affected_population,
        low: affected * LITIGATION_BANDS.low * exceedance_mult,
        mid: affected * LITIGATION_BANDS.mid * exceedance_mult * duration_mult,
        high: affected * LITIGATION_BANDS.high * exceedance_mult * duration_mult,
        exceedance_multiplier: exceedance_mult,
        duration_multiplier: duration_mult,
        note: "Based on 3M/Chemours settlement data and class action ranges".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Measurement;
    use crate::domain::reference::Compound;

    fn exceeding_profile(years: u32) -> UtilityProfile {
        UtilityProfile::new(
            "Test Utility",
            100_000,
            10.0,
            vec![
                Measurement::new(Compound::Pfoa, 25.0),
                Measurement::new(Compound::Pfos, 15.0),
            ],
        )
        .with_years_of_exposure(years)
    }

    #[test]
    fn test_compliant_profile_has_zero_exposure() {
        let profile = UtilityProfile::new(
            "Clean",
            100_000,
            10.0,
            vec![Measurement::new(Compound::Pfoa, 3.0)],
        );
        let result = calculate_litigation_exposure(&profile);

        assert_eq!((result.low, result.mid, result.high), (0.0, 0.0, 0.0));
        assert_eq!(result.affected_population, 0);
        assert_eq!(result.note, "In compliance - reduced litigation risk");
    }

    #[test]
    fn test_exceeding_profile_estimates() {
        let result = calculate_litigation_exposure(&exceeding_profile(5));

        // PFOA 25/4 - 1 = 5.25, PFOS 15/4 - 1 = 2.75
        let exceedance = 1.0 + 8.0 * 0.1;
        let duration = 1.0 + 5.0 * 0.05;

        assert_eq!(result.affected_population, 80_000);
        assert!((result.exceedance_multiplier - exceedance).abs() < 1e-12);
        assert!((result.duration_multiplier - duration).abs() < 1e-12);
        assert!((result.low - 80_000.0 * 25.0 * exceedance).abs() < 1e-6);
        assert!((result.mid - 80_000.0 * 50.0 * exceedance * duration).abs() < 1e-6);
        assert!((result.high - 80_000.0 * 100.0 * exceedance * duration).abs() < 1e-6);
    }

    #[test]
    fn test_multipliers_are_capped() {
        assert_eq!(exceedance_multiplier(1e9), MAX_EXCEEDANCE_MULTIPLIER);
        assert_eq!(exceedance_multiplier(f64::INFINITY), MAX_EXCEEDANCE_MULTIPLIER);
        assert_eq!(duration_multiplier(u32::MAX), MAX_DURATION_MULTIPLIER);
        assert_eq!(duration_multiplier(20), MAX_DURATION_MULTIPLIER);
        assert!(duration_multiplier(19) < MAX_DURATION_MULTIPLIER);
    }

    #[test]
    fn test_zero_years_has_no_duration_effect() {
        let result = calculate_litigation_exposure(&exceeding_profile(0));

        assert_eq!(result.duration_multiplier, 1.0);
        assert!((result.mid - result.low * 2.0).abs() < 1e-6);
        assert!((result.high - result.low * 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_low_estimate_ignores_duration() {
        let short = calculate_litigation_exposure(&exceeding_profile(1));
        let long = calculate_litigation_exposure(&exceeding_profile(15));

        assert_eq!(short.low, long.low);
        assert!(long.mid > short.mid);
        assert!(long.high > short.high);
    }
}
