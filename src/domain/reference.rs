//! Reference tables used by the liability models.
//!
//! Values are public figures as of 2024: EPA maximum contaminant levels, the
//! EPA daily penalty rate, per-capita settlement bands derived from the 3M and
//! Chemours settlements, and published PFAS treatment cost ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Penalty charged per violating compound per day of violation.
pub const PENALTY_RATE_PER_DAY: f64 = 70_117.0;

/// Share of the served population assumed to be affected by a violation.
pub const AFFECTED_POPULATION_SHARE: f64 = 0.8;

pub const DEFAULT_VIOLATION_DAYS: u32 = 365;
pub const DEFAULT_HORIZON_YEARS: u32 = 20;
pub const DEFAULT_YEARS_OF_EXPOSURE: u32 = 5;

/// Per-capita litigation bands, currency per affected person.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LitigationBands {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

pub const LITIGATION_BANDS: LitigationBands = LitigationBands {
    low: 25.0,
    mid: 50.0,
    high: 100.0,
};

/// A PFAS compound. Unrecognised identifiers are kept as [`Compound::Other`]
/// and carry no regulatory limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Compound {
    Pfoa,
    Pfos,
    Pfhxs,
    Pfna,
    HfpoDa,
    Other(String),
}

impl Compound {
    pub fn name(&self) -> &str {
        match self {
            Compound::Pfoa => "PFOA",
            Compound::Pfos => "PFOS",
            Compound::Pfhxs => "PFHxS",
            Compound::Pfna => "PFNA",
            Compound::HfpoDa => "HFPO-DA",
            Compound::Other(name) => name,
        }
    }

    /// Maximum contaminant level in ppt, `None` when no limit is enforced.
    pub fn regulatory_limit(&self) -> Option<f64> {
        match self {
            Compound::Pfoa | Compound::Pfos => Some(4.0),
            Compound::Pfhxs | Compound::Pfna | Compound::HfpoDa => Some(10.0),
            Compound::Other(_) => None,
        }
    }
}

impl FromStr for Compound {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let compound = match trimmed.to_ascii_uppercase().as_str() {
            "PFOA" => Compound::Pfoa,
            "PFOS" => Compound::Pfos,
            "PFHXS" => Compound::Pfhxs,
            "PFNA" => Compound::Pfna,
            "HFPO-DA" | "GENX" => Compound::HfpoDa,
            _ => Compound::Other(trimmed.to_string()),
        };
        Ok(compound)
    }
}

impl From<String> for Compound {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(compound) => compound,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Compound {
    fn from(value: &str) -> Self {
        Compound::from(value.to_string())
    }
}

impl From<Compound> for String {
    fn from(value: Compound) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capital and operating cost coefficients for one treatment technology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreatmentCoefficients {
    /// Capital cost per MGD of treatment capacity.
    pub capital_per_mgd: f64,
    /// Operating cost per 1000 gallons treated.
    pub om_per_1000gal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    /// Granular activated carbon
    #[default]
    Gac,
    /// Ion exchange
    Ix,
    /// Reverse osmosis
    Ro,
    /// Projected costs for emerging destruction technologies
    Novel,
}

impl Technology {
    pub const ALL: [Technology; 4] = [
        Technology::Gac,
        Technology::Ix,
        Technology::Ro,
        Technology::Novel,
    ];

    /// Parses a technology identifier, substituting [`Technology::Gac`] for
    /// anything unrecognised.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "gac" => Technology::Gac,
            "ix" => Technology::Ix,
            "ro" => Technology::Ro,
            "novel" => Technology::Novel,
            other => {
                tracing::debug!("Unknown treatment technology '{}', using gac", other);
                Technology::Gac
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::Gac => "gac",
            Technology::Ix => "ix",
            Technology::Ro => "ro",
            Technology::Novel => "novel",
        }
    }

    pub fn coefficients(&self) -> TreatmentCoefficients {
        match self {
            Technology::Gac => TreatmentCoefficients {
                capital_per_mgd: 800_000.0,
                om_per_1000gal: 0.75,
            },
            Technology::Ix => TreatmentCoefficients {
                capital_per_mgd: 1_200_000.0,
                om_per_1000gal: 0.50,
            },
            Technology::Ro => TreatmentCoefficients {
                capital_per_mgd: 2_000_000.0,
                om_per_1000gal: 1.50,
            },
            Technology::Novel => TreatmentCoefficients {
                capital_per_mgd: 600_000.0,
                om_per_1000gal: 0.35,
            },
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
