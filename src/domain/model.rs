use crate::domain::reference::{Compound, DEFAULT_YEARS_OF_EXPOSURE};

/// One measured PFAS concentration.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    compound: Compound,
    concentration_ppt: f64,
}

impl Measurement {
    pub fn new(compound: impl Into<Compound>, concentration_ppt: f64) -> Self {
        Self {
            compound: compound.into(),
            concentration_ppt,
        }
    }

    pub fn compound(&self) -> &Compound {
        &self.compound
    }

    pub fn concentration_ppt(&self) -> f64 {
        self.concentration_ppt
    }

    pub fn limit_ppt(&self) -> Option<f64> {
        self.compound.regulatory_limit()
    }

    /// True when the concentration is strictly above the compound's limit.
    /// Compounds without a limit never exceed.
    pub fn exceeds_limit(&self) -> bool {
        match self.limit_ppt() {
            Some(limit) => self.concentration_ppt > limit,
            None => false,
        }
    }

    /// `concentration / limit - 1`, floored at zero. Infinite for a positive
    /// concentration against a zero limit.
    pub fn exceedance_factor(&self) -> f64 {
        let Some(limit) = self.limit_ppt() else {
            return 0.0;
        };
        if limit == 0.0 {
            return if self.concentration_ppt > 0.0 {
                f64::INFINITY
            } else {
                0.0
            };
        }
        (self.concentration_ppt / limit - 1.0).max(0.0)
    }
}

/// A water utility and the measurements taken from its supply.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityProfile {
    name: String,
    population_served: u64,
    daily_flow_mgd: f64,
    measurements: Vec<Measurement>,
    years_of_exposure: u32,
}

impl UtilityProfile {
    pub fn new(
        name: impl Into<String>,
        population_served: u64,
        daily_flow_mgd: f64,
        measurements: Vec<Measurement>,
    ) -> Self {
        Self {
            name: name.into(),
            population_served,
            daily_flow_mgd,
            measurements,
            years_of_exposure: DEFAULT_YEARS_OF_EXPOSURE,
        }
    }

    pub fn with_years_of_exposure(mut self, years: u32) -> Self {
        self.years_of_exposure = years;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population_served(&self) -> u64 {
        self.population_served
    }

    pub fn daily_flow_mgd(&self) -> f64 {
        self.daily_flow_mgd
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn years_of_exposure(&self) -> u32 {
        self.years_of_exposure
    }

    /// Vacuously true for a profile without measurements.
    pub fn in_compliance(&self) -> bool {
        !self.measurements.iter().any(Measurement::exceeds_limit)
    }

    pub fn total_exceedance(&self) -> f64 {
        self.measurements
            .iter()
            .map(Measurement::exceedance_factor)
            .sum()
    }

    pub fn exceeding_measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(|m| m.exceeds_limit())
    }
}
